use async_trait::async_trait;
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods,
    CreatePaymentIntentAutomaticPaymentMethodsAllowRedirects, Currency, PaymentIntent,
    PaymentIntentStatus, PaymentMethodId, StripeError,
};

use crate::models::{TransactionRequest, TransactionResponse};

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The payment provider rejected the call with a structured error.
    #[error("{0}")]
    Gateway(String),
    /// Anything else: transport, serialization, malformed identifiers.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Contract for processing a validated payment request. Handlers depend on
/// this trait so tests can swap in a stub instead of a live Stripe client.
#[async_trait]
pub trait TransactionService: Send + Sync {
    async fn process_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, TransactionError>;
}

// Stripe-backed transaction service
pub struct StripeTransactionService {
    client: Client,
}

impl StripeTransactionService {
    /// The secret key is mandatory; callers resolve it from configuration
    /// before the service is constructed.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(secret_key.into()),
        }
    }
}

#[async_trait]
impl TransactionService for StripeTransactionService {
    async fn process_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, TransactionError> {
        let currency = request
            .currency
            .parse::<Currency>()
            .map_err(|err| TransactionError::Unexpected(format!("{err}: {}", request.currency)))?;
        let payment_method = request
            .payment_method_id
            .parse::<PaymentMethodId>()
            .map_err(|err| TransactionError::Unexpected(err.to_string()))?;

        let mut params = CreatePaymentIntent::new(request.amount, currency);
        params.payment_method = Some(payment_method);
        params.description = request.description.as_deref();
        params.receipt_email = request.customer_email.as_deref();
        params.confirm = Some(true);
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            enabled: true,
            allow_redirects: Some(CreatePaymentIntentAutomaticPaymentMethodsAllowRedirects::Never),
        });
        if let Some(metadata) = &request.metadata {
            if !metadata.is_empty() {
                params.metadata = Some(metadata.clone());
            }
        }

        match PaymentIntent::create(&self.client, params).await {
            Ok(intent) => Ok(TransactionResponse {
                success: intent.status == PaymentIntentStatus::Succeeded,
                payment_intent_id: Some(intent.id.to_string()),
                status: Some(intent.status.as_str().to_string()),
                amount: Some(intent.amount),
                currency: Some(intent.currency.to_string()),
                error_message: None,
                client_secret: intent.client_secret,
            }),
            Err(StripeError::Stripe(err)) => {
                let message = err
                    .message
                    .unwrap_or_else(|| format!("Stripe request failed with status {}", err.http_status));
                Err(TransactionError::Gateway(message))
            }
            Err(err) => Err(TransactionError::Unexpected(err.to_string())),
        }
    }
}
