use crate::domain::payment::{CreatePaymentRequest, Payment};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid payment object")]
    InvalidObject,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Unsupported currency")]
    UnsupportedCurrency,
}

/// Checks a candidate payment in order, short-circuiting on the first
/// failure, and assembles the record under the server-assigned id.
/// Structural checks cover both presence and type: a string amount or a
/// numeric currency is an invalid object, not a parse failure.
/// Pure: no I/O, deterministic for a given id.
pub fn validate(
    id: Uuid,
    req: &CreatePaymentRequest,
    supported_currencies: &[String],
) -> Result<Payment, ValidationError> {
    let amount = req
        .amount
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .ok_or(ValidationError::InvalidObject)?;
    let currency = req
        .currency
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(ValidationError::InvalidObject)?;

    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    if !supported_currencies.iter().any(|c| c == currency) {
        return Err(ValidationError::UnsupportedCurrency);
    }

    Ok(Payment {
        id,
        amount,
        currency: currency.to_string(),
    })
}
