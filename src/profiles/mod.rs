mod photos;
mod update;

pub use photos::{AiMetadata, PHOTOS_STATUS, Photo, UploadPhotosRequest, upload_photos};
pub use update::{PROFILE_STATUS, UpdateProfileRequest, update_profile};
