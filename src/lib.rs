pub mod auth;
pub mod chat;
pub mod config;
pub mod db;
pub mod profiles;
pub mod routes;
pub mod safety;
pub mod wingman;

use std::{convert::Infallible, sync::Arc};

use axum::{
    Router,
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};
use serde::{Serialize, de::DeserializeOwned};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use config::Config;
use db::Database;
use routes::RouteTableError;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the full application from the route table.
pub fn app(state: AppState) -> Result<Router, RouteTableError> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let router = routes::build(&routes::table())?
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// JSON body that never rejects.
///
/// Handlers acknowledge requests whatever they carry, so a missing or
/// malformed body turns into `None` instead of a 4xx.
pub struct LenientJson<T>(pub Option<T>);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(bytes) = Bytes::from_request(req, state).await else {
            return Ok(Self(None));
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(Some(value))),
            Err(err) => {
                debug!("ignoring unreadable request body: {err}");
                Ok(Self(None))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}
