use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::models::{TransactionRequest, TransactionResponse};
use crate::services::stripe::TransactionService;

async fn process_transaction(
    State(service): State<Arc<dyn TransactionService>>,
    Json(request): Json<TransactionRequest>,
) -> impl IntoResponse {
    // Reject bad input before anything goes out to Stripe
    if let Err(message) = validate_request(&request) {
        tracing::warn!("Rejected transaction request: {message}");
        return (
            StatusCode::BAD_REQUEST,
            Json(TransactionResponse::failure(message)),
        );
    }

    tracing::info!(
        amount = request.amount,
        currency = %request.currency,
        "Processing transaction"
    );

    match service.process_transaction(&request).await {
        Ok(response) if response.success => {
            tracing::info!(
                payment_intent_id = response.payment_intent_id.as_deref(),
                "Transaction succeeded"
            );
            (StatusCode::OK, Json(response))
        }
        // Terminal but not succeeded (requires_action etc.), caller inspects `status`
        Ok(response) => {
            tracing::warn!(
                status = response.status.as_deref(),
                "Transaction did not succeed"
            );
            (StatusCode::BAD_REQUEST, Json(response))
        }
        Err(err) => {
            tracing::error!("Transaction failed: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(TransactionResponse::failure(err.to_string())),
            )
        }
    }
}

// Checks run in a fixed order, the first failure wins
fn validate_request(request: &TransactionRequest) -> Result<(), &'static str> {
    if request.amount <= 0 {
        return Err("Amount must be greater than zero");
    }
    if request.payment_method_id.trim().is_empty() {
        return Err("PaymentMethodId is required");
    }
    if request.currency.trim().is_empty() {
        return Err("Currency is required");
    }
    Ok(())
}

pub fn stripe_routes(service: Arc<dyn TransactionService>) -> Router {
    Router::new()
        .route("/transaction", post(process_transaction))
        .with_state(service)
}
