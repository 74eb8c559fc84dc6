//! The route table.
//!
//! Every endpoint is listed once in [`table`]. [`build`] checks the table
//! before turning it into a router, so a bad entry fails at startup.

use std::collections::HashSet;

use axum::{
    Router,
    http::Method,
    routing::{MethodFilter, MethodRouter, on},
};
use thiserror::Error;

use crate::{AppState, auth, chat, profiles, safety};

pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: fn(MethodFilter) -> MethodRouter<AppState>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route with empty path")]
    EmptyPath,

    #[error("route path {0:?} must start with '/'")]
    MissingLeadingSlash(&'static str),

    #[error("method {method} on {path} has no matching filter")]
    UnsupportedMethod { method: Method, path: &'static str },

    #[error("{method} {path} is registered twice")]
    Duplicate { method: Method, path: &'static str },
}

pub fn table() -> Vec<Route> {
    vec![
        Route {
            method: Method::POST,
            path: "/auth/login",
            handler: |filter| on(filter, auth::login),
        },
        Route {
            method: Method::PUT,
            path: "/profile/me",
            handler: |filter| on(filter, profiles::update_profile),
        },
        Route {
            method: Method::POST,
            path: "/profile/photos",
            handler: |filter| on(filter, profiles::upload_photos),
        },
        Route {
            method: Method::POST,
            path: "/chat/send",
            handler: |filter| on(filter, chat::send_message),
        },
        Route {
            method: Method::GET,
            path: "/chat/wingman/nudge",
            handler: |filter| on(filter, chat::wingman_nudge),
        },
        Route {
            method: Method::POST,
            path: "/safety/verify",
            handler: |filter| on(filter, safety::verify),
        },
    ]
}

pub fn validate(routes: &[Route]) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();

    for route in routes {
        if route.path.is_empty() {
            return Err(RouteTableError::EmptyPath);
        }
        if !route.path.starts_with('/') {
            return Err(RouteTableError::MissingLeadingSlash(route.path));
        }
        method_filter(route)?;
        if !seen.insert((route.method.clone(), route.path)) {
            return Err(RouteTableError::Duplicate {
                method: route.method.clone(),
                path: route.path,
            });
        }
    }

    Ok(())
}

pub fn build(routes: &[Route]) -> Result<Router<AppState>, RouteTableError> {
    validate(routes)?;

    let mut router = Router::new();
    for route in routes {
        router = router.route(route.path, (route.handler)(method_filter(route)?));
    }

    Ok(router)
}

fn method_filter(route: &Route) -> Result<MethodFilter, RouteTableError> {
    MethodFilter::try_from(route.method.clone()).map_err(|_| RouteTableError::UnsupportedMethod {
        method: route.method.clone(),
        path: route.path,
    })
}
