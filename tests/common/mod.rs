use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use stripe_transaction_api::models::{TransactionRequest, TransactionResponse};
use stripe_transaction_api::services::stripe::{TransactionError, TransactionService};

/// What the stub should do when the handler delegates to it.
pub enum StubOutcome {
    Respond(TransactionResponse),
    Gateway(String),
    Unexpected(String),
}

/// In-memory stand-in for the Stripe-backed service. Records every request it
/// receives so tests can assert on what was forwarded.
pub struct StubTransactionService {
    outcome: StubOutcome,
    pub requests: Mutex<Vec<TransactionRequest>>,
}

impl StubTransactionService {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TransactionService for StubTransactionService {
    async fn process_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, TransactionError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            StubOutcome::Respond(response) => Ok(response.clone()),
            StubOutcome::Gateway(message) => Err(TransactionError::Gateway(message.clone())),
            StubOutcome::Unexpected(message) => Err(TransactionError::Unexpected(message.clone())),
        }
    }
}

/// A response the real service would produce for a confirmed payment.
pub fn succeeded_response(payment_intent_id: &str, amount: i64, currency: &str) -> TransactionResponse {
    TransactionResponse {
        success: true,
        payment_intent_id: Some(payment_intent_id.to_string()),
        status: Some("succeeded".to_string()),
        amount: Some(amount),
        currency: Some(currency.to_string()),
        error_message: None,
        client_secret: Some(format!("{payment_intent_id}_secret_test")),
    }
}

pub async fn post_json(
    router: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
