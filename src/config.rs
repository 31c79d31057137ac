#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub table_name: String,
    pub store_backend: String,
    pub supported_currencies: Vec<String>,
    pub get_max_age_secs: u64,
    pub list_max_age_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            table_name: std::env::var("PAYMENTS_TABLE").unwrap_or_else(|_| "Payments".to_string()),
            store_backend: std::env::var("STORE_BACKEND")
                .unwrap_or_else(|_| "dynamodb".to_string()),
            supported_currencies: parse_currency_list(
                &std::env::var("SUPPORTED_CURRENCIES")
                    .unwrap_or_else(|_| "AUD,USD,EUR,GBP,SGD,NZD,CAD".to_string()),
            ),
            get_max_age_secs: env_u64("GET_CACHE_MAX_AGE", 300),
            list_max_age_secs: env_u64("LIST_CACHE_MAX_AGE", 120),
        }
    }
}

pub fn parse_currency_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
