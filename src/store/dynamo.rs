use crate::domain::payment::Payment;
use crate::store::client::{FaultKind, StoreClient, StoreError};
use async_trait::async_trait;
use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use uuid::Uuid;

/// Error codes DynamoDB raises for throttling and capacity pressure.
const TRANSIENT_CODES: &[&str] = &[
    "ProvisionedThroughputExceededException",
    "ThrottlingException",
    "RequestLimitExceeded",
    "LimitExceededException",
];

pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub async fn connect(table_name: String) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&sdk_config), table_name)
    }
}

#[async_trait]
impl StoreClient for DynamoStore {
    async fn put_item(&self, payment: &Payment) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(payment)))
            .send()
            .await
            .map_err(into_store_error)?;
        Ok(())
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<Payment>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(into_store_error)?;

        match output.item {
            Some(item) => Ok(Some(from_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan(&self, currency: Option<&str>) -> Result<Vec<Payment>, StoreError> {
        let mut payments = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let mut req = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take());
            if let Some(currency) = currency {
                req = req
                    .filter_expression("#currency = :currency")
                    .expression_attribute_names("#currency", "currency")
                    .expression_attribute_values(
                        ":currency",
                        AttributeValue::S(currency.to_string()),
                    );
            }

            let output = req.send().await.map_err(into_store_error)?;
            for item in output.items.unwrap_or_default() {
                payments.push(from_item(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(payments)
    }
}

fn to_item(payment: &Payment) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "id".to_string(),
            AttributeValue::S(payment.id.to_string()),
        ),
        (
            "amount".to_string(),
            AttributeValue::N(payment.amount.to_string()),
        ),
        (
            "currency".to_string(),
            AttributeValue::S(payment.currency.clone()),
        ),
    ])
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Payment, StoreError> {
    let id = item
        .get("id")
        .and_then(|v| v.as_s().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| StoreError::permanent("stored item has a malformed id attribute"))?;
    let amount = item
        .get("amount")
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse::<f64>().ok())
        .ok_or_else(|| StoreError::permanent("stored item has a malformed amount attribute"))?;
    let currency = item
        .get("currency")
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::permanent("stored item has a malformed currency attribute"))?;

    Ok(Payment {
        id,
        amount,
        currency,
    })
}

fn into_store_error<E>(err: SdkError<E>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let code = err.code().unwrap_or_default().to_string();
    let message = match err.message() {
        Some(msg) => format!("{code}: {msg}"),
        None => err.to_string(),
    };

    let kind = if matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) {
        FaultKind::Transient
    } else if TRANSIENT_CODES.contains(&code.as_str()) {
        FaultKind::Transient
    } else {
        let lowered = message.to_ascii_lowercase();
        if lowered.contains("throttl") || lowered.contains("rate exceeded") {
            FaultKind::Transient
        } else {
            FaultKind::Permanent
        }
    };

    StoreError { kind, message }
}
