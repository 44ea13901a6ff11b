// HTTP response utilities for dashboard payloads and errors
use crate::application::error::DashboardError;
use axum::{
    Json,
    body::Body,
    http::{Response, StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::UnknownMetric(_) | DashboardError::InvalidYear(_) => {
                StatusCode::BAD_REQUEST
            }
            DashboardError::NoData => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!("Rejecting dashboard request: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Wrap an SVG document in a response with the matching content type
pub fn svg_response(svg: String) -> Result<Response<Body>, StatusCode> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/svg+xml")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(svg))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
