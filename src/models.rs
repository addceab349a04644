use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Inbound payment request. Field names follow the public JSON contract
/// (camelCase), amounts are in the smallest currency unit (cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(default)]
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub payment_method_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

fn default_currency() -> String {
    "usd".to_string()
}

/// Normalized outcome of a transaction attempt, returned as the response body
/// for both success and failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub success: bool,
    pub payment_intent_id: Option<String>,
    pub status: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub error_message: Option<String>,
    pub client_secret: Option<String>,
}

impl TransactionResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            payment_intent_id: None,
            status: None,
            amount: None,
            currency: None,
            error_message: Some(message.into()),
            client_secret: None,
        }
    }
}
