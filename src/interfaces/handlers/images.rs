use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::TryStreamExt;
use tracing::instrument;

use crate::{
    encoder::data_url::EncodeOutcome, errors::AppError, use_cases::extractors::AdminClaims,
    AppState,
};

/// Server-side counterpart of the admin form's file input: accepts one or
/// more uploaded files and returns the inline-encoded form of the most
/// recent one. When several files arrive, the latest selection wins, as
/// on the client.
#[instrument(skip(_claims, state, payload))]
pub async fn encode_image(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<impl Responder, AppError> {
    let mut latest: Option<String> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart payload: {}", e)))?
    {
        let mime_hint = field.content_type().map(|m| m.to_string());

        let mut bytes = web::BytesMut::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?
        {
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            continue;
        }

        match state
            .encoder
            .read_to_data_url(mime_hint.as_deref(), bytes.as_ref())
            .await?
        {
            EncodeOutcome::Encoded(data_url) => latest = Some(data_url),
            // A newer selection already started; drop this result.
            EncodeOutcome::Superseded => {}
        }
    }

    match latest {
        Some(data_url) => Ok(HttpResponse::Ok().json(serde_json::json!({"data_url": data_url}))),
        None => Err(AppError::InvalidInput("No file submitted".to_string())),
    }
}
