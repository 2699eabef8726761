//! HTTP handlers exposing the list views as JSON.

use actix_web::{HttpRequest, HttpResponse, Responder, get};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::services::{ServiceError, ServiceResult};

pub mod api;

/// Parses the raw query string, keeping repeated keys as lists.
pub(crate) fn parse_query<T: DeserializeOwned>(req: &HttpRequest) -> Result<T, HttpResponse> {
    serde_html_form::from_str(req.query_string()).map_err(|err| {
        log::warn!("Rejected query {:?}: {err}", req.query_string());
        HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
    })
}

/// Maps a service result onto a JSON response.
pub(crate) fn respond<T: Serialize>(result: ServiceResult<T>, action: &str) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err @ ServiceError::Repository(_)) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
        }
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
