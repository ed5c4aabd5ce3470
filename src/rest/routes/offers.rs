// rest/routes/offers.rs — Offer REST routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::offers::{JobOffer, OfferStatus};
use crate::rest::ApiResponse;
use crate::AppContext;

type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

fn internal<T: serde::Serialize>(message: &str) -> ApiError<T> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(message)),
    )
}

/// POST /api/v1/offers/generate — validate, save, render the offer
/// document, and mark the offer `generated`.
pub async fn generate_offer(
    State(ctx): State<Arc<AppContext>>,
    Json(offer): Json<JobOffer>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    let errors = offer.validate();
    if !errors.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error_with("Validation failed", errors)),
        ));
    }

    let mut offer = ctx.offers.save(offer).await;

    let document_path = match ctx.documents.generate(&offer).await {
        Ok(path) => path,
        Err(e) => {
            error!(offer_id = %offer.id, err = %e, "offer document generation failed");
            return Err(internal(
                "Internal server error occurred while generating the document",
            ));
        }
    };

    offer.document_path = Some(document_path.clone());
    offer.status = OfferStatus::Generated;
    let offer = match ctx.offers.update(offer).await {
        Ok(updated) => updated,
        Err(e) => {
            error!(err = %e, "failed to update offer after document generation");
            return Err(internal(
                "Internal server error occurred while generating the document",
            ));
        }
    };

    let document_url = ctx.documents.document_url(&document_path);
    info!(offer_id = %offer.id, recipient = %offer.recipient_email, "offer document ready");

    Ok(Json(ApiResponse::success(
        json!({ "offerId": offer.id, "documentUrl": document_url }),
        "Offer document generated successfully",
    )))
}

/// GET /api/v1/offers/history — all offers, newest first.
pub async fn offer_history(
    State(ctx): State<Arc<AppContext>>,
) -> Json<ApiResponse<Vec<JobOffer>>> {
    let offers = ctx.offers.list_all().await;
    Json(ApiResponse::success(
        offers,
        "Offer history retrieved successfully",
    ))
}

/// GET /api/v1/offers/{id}
pub async fn get_offer(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<JobOffer>>, ApiError<JobOffer>> {
    match ctx.offers.get(&id).await {
        Some(offer) => Ok(Json(ApiResponse::success(
            offer,
            "Offer retrieved successfully",
        ))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Job offer not found")),
        )),
    }
}

/// GET /api/v1/offers/{id}/preview — URL of the generated document.
pub async fn get_preview(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError<Value>> {
    let Some(offer) = ctx.offers.get(&id).await else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Job offer not found")),
        ));
    };

    let Some(path) = offer.document_path.filter(|p| !p.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Document not generated yet")),
        ));
    };

    let preview_url = ctx.documents.document_url(&path);
    Ok(Json(ApiResponse::success(
        json!({ "previewUrl": preview_url }),
        "Preview URL retrieved successfully",
    )))
}
