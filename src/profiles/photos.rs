use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{AppState, LenientJson, StatusResponse, db::Database, wingman};

pub const PHOTOS_STATUS: &str = "Photos processed with AI tags";

#[derive(Debug, Default, Deserialize)]
pub struct UploadPhotosRequest {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub ai_metadata: AiMetadata,
}

/// Scene and object labels produced on the device before upload.
#[derive(Debug, Default, Deserialize)]
pub struct AiMetadata {
    #[serde(default)]
    pub scene: String,
    #[serde(default)]
    pub objects: Vec<String>,
}

impl Photo {
    /// The scene (when present) followed by the detected objects.
    pub fn tags(&self) -> Vec<&str> {
        let scene = Some(self.ai_metadata.scene.as_str()).filter(|scene| !scene.is_empty());

        scene
            .into_iter()
            .chain(self.ai_metadata.objects.iter().map(String::as_str))
            .collect()
    }
}

/// Always answers 201, whatever the payload looks like.
#[debug_handler(state = AppState)]
pub async fn upload_photos(
    State(_db): State<Database>,
    LenientJson(request): LenientJson<UploadPhotosRequest>,
) -> (StatusCode, Json<StatusResponse>) {
    let photos = request.map(|request| request.photos).unwrap_or_default();
    debug!(count = photos.len(), "photo upload");

    for photo in &photos {
        match wingman::generate_bio(photo.tags().as_slice()) {
            Ok(bio) => debug!(url = %photo.url, %bio, "drafted bio from photo tags"),
            Err(err) => debug!(url = %photo.url, "no bio draft: {err}"),
        }
    }

    (StatusCode::CREATED, Json(StatusResponse { status: PHOTOS_STATUS }))
}
