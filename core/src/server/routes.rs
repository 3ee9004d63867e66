//! HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

use crate::constants::{PNG_CONTENT_TYPE, SVG_CONTENT_TYPE};
use crate::qr::{ProviderKind, QrImage};
use crate::service::ContactService;
use crate::{Error, Result};

pub(super) type SharedService = Arc<ContactService>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub(super) async fn page(State(service): State<SharedService>) -> Result<Html<String>> {
    Ok(Html(service.render_page()?))
}

/// Image from the configured provider: a redirect for remote, bytes for local
pub(super) async fn qr(State(service): State<SharedService>) -> Result<Response> {
    match service.qr_image()? {
        QrImage::Remote(url) => Ok(Redirect::temporary(&url).into_response()),
        QrImage::Png(bytes) => Ok(png(bytes)),
    }
}

pub(super) async fn qr_png(State(service): State<SharedService>) -> Result<Response> {
    Ok(png(service.local_png()?))
}

pub(super) async fn qr_svg(State(service): State<SharedService>) -> Result<Response> {
    let svg = service.qr_svg()?;
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response())
}

fn png(bytes: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, PNG_CONTENT_TYPE)], bytes).into_response()
}

#[derive(Debug, Serialize)]
pub(super) struct LinkResponse {
    phone_number: String,
    deep_link: String,
    provider: ProviderKind,
}

pub(super) async fn link(State(service): State<SharedService>) -> Json<LinkResponse> {
    Json(LinkResponse {
        phone_number: service.phone_number().to_string(),
        deep_link: service.deep_link().to_string(),
        provider: service.provider_kind(),
    })
}

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

pub(super) async fn health(State(service): State<SharedService>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: service.uptime().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
