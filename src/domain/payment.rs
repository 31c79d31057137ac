use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub amount: f64,
    pub currency: String,
}

/// Deliberately permissive: missing or wrong-typed fields must reach the
/// validator (422) instead of failing deserialization (400), so only
/// syntactically invalid JSON is rejected at parse time. A client-supplied
/// `id` is always discarded, whatever its type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePaymentRequest {
    pub id: Option<serde_json::Value>,
    pub amount: Option<serde_json::Value>,
    pub currency: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentResponse {
    pub result: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ListPaymentsResponse {
    pub data: Vec<Payment>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
