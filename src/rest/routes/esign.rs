// rest/routes/esign.rs — E-signature REST routes.
//
// `status` and `envelope` deliberately differ on unknown ids: status is an
// error path, envelope details is an absent-value path. Both end up as 404
// over HTTP, but the simulator contract underneath is asymmetric.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::error::OfferdError;
use crate::esign::{Envelope, EnvelopeSummary};
use crate::offers::OfferStatus;
use crate::rest::ApiResponse;
use crate::AppContext;

type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

fn internal<T: serde::Serialize>(message: &str) -> ApiError<T> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(message)),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub offer_id: String,
}

/// POST /api/v1/esign/send — create an envelope for a generated offer and
/// start the signing simulation.
pub async fn send_for_signature(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SendRequest>,
) -> Result<Json<ApiResponse<EnvelopeSummary>>, ApiError<EnvelopeSummary>> {
    let Some(mut offer) = ctx.offers.get(&request.offer_id).await else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Job offer not found")),
        ));
    };

    if offer.document_path.as_deref().map_or(true, str::is_empty) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Document not generated yet. Please generate the offer document first.",
            )),
        ));
    }

    let summary = match ctx.esign.create_and_send(&offer).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(offer_id = %offer.id, err = %e, "failed to send offer for signature");
            return Err(internal(
                "Internal server error occurred while sending for signature",
            ));
        }
    };

    offer.status = OfferStatus::Sent;
    offer.envelope_id = Some(summary.envelope_id.clone());
    if let Err(e) = ctx.offers.update(offer).await {
        error!(err = %e, "failed to update offer after send");
        return Err(internal(
            "Internal server error occurred while sending for signature",
        ));
    }

    info!(envelope_id = %summary.envelope_id, "offer sent for signature");
    Ok(Json(ApiResponse::success(
        summary,
        "Offer sent for signature successfully",
    )))
}

/// GET /api/v1/esign/status/{envelope_id} — current status string.
pub async fn signing_status(
    State(ctx): State<Arc<AppContext>>,
    Path(envelope_id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    match ctx.esign.status(&envelope_id).await {
        Ok(status) => Ok(Json(ApiResponse::success(
            json!({ "status": status }),
            "Envelope status retrieved successfully",
        ))),
        Err(e @ OfferdError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(&e.to_string())),
        )),
        Err(e) => {
            error!(envelope_id = %envelope_id, err = %e, "failed to read envelope status");
            Err(internal("Internal server error occurred"))
        }
    }
}

/// GET /api/v1/esign/envelope/{envelope_id} — full record with event log.
pub async fn envelope_details(
    State(ctx): State<Arc<AppContext>>,
    Path(envelope_id): Path<String>,
) -> Result<Json<ApiResponse<Envelope>>, ApiError<Envelope>> {
    match ctx.esign.details(&envelope_id).await {
        Some(envelope) => Ok(Json(ApiResponse::success(
            envelope,
            "Envelope details retrieved successfully",
        ))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Envelope not found")),
        )),
    }
}

/// POST /api/v1/esign/webhook — accepts any payload, logs it, always 200.
/// Placeholder for a real provider's callback.
pub async fn webhook(Json(payload): Json<Value>) -> StatusCode {
    info!(payload = %payload, "e-signature webhook received");
    StatusCode::OK
}
