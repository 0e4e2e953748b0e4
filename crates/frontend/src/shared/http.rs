//! HTTP calls against the store API.
//!
//! Every call goes through [`check`], which turns a non-2xx answer into
//! [`ApiError::Status`] carrying the `{ message }` the API sent back.

use contracts::shared::api::ErrorMessage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

use super::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Message shown when the API returned an error without a body
pub fn fallback_message(status: u16) -> String {
    match status {
        400 => "Solicitud inválida".to_string(),
        401 | 403 => "No autorizado".to_string(),
        404 => "Recurso no encontrado".to_string(),
        409 => "El recurso ya existe".to_string(),
        s if s >= 500 => format!("Error del servidor ({})", s),
        s => format!("Error desconocido ({})", s),
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorMessage>().await {
        Ok(body) if !body.message.trim().is_empty() => body.message,
        _ => fallback_message(status),
    };
    log::warn!("{} -> {}: {}", response.url(), status, message);
    Err(ApiError::Status { status, message })
}

async fn send(request: Request) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to decode {}: {}", response.url(), e);
        ApiError::Decode(e.to_string())
    })
}

fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
    builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let request = Request::get(&url)
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = send(request).await?;
    decode(response).await
}

/// POST a JSON body; the response body is ignored
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> ApiResult<()> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    send(with_json(Request::post(&url), body)?).await?;
    Ok(())
}

/// PATCH a JSON body; the response body is ignored
pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> ApiResult<()> {
    let url = api_url(path);
    log::debug!("PATCH {}", url);
    send(with_json(Request::patch(&url), body)?).await?;
    Ok(())
}

/// PATCH multipart form data (the browser sets the boundary header)
pub async fn patch_form(path: &str, form: FormData) -> ApiResult<()> {
    let url = api_url(path);
    log::debug!("PATCH (multipart) {}", url);
    let request = Request::patch(&url)
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send(request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: "El DNI ya está registrado".to_string(),
        };
        assert_eq!(err.to_string(), "El DNI ya está registrado");
        assert_eq!(err.status(), Some(409));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(fallback_message(404), "Recurso no encontrado");
        assert_eq!(fallback_message(502), "Error del servidor (502)");
        assert_eq!(fallback_message(418), "Error desconocido (418)");
    }
}
