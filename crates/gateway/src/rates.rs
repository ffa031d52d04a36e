//! Exchange rate lookups against the National Bank of Ukraine public API.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use fop_core::errors::{ApiError, Result};

const NBU_EXCHANGE_URL: &str = "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchange";

#[derive(Debug, Deserialize)]
struct ApiNbuRate {
    rate: Decimal,
    #[serde(rename = "cc")]
    #[allow(dead_code)]
    currency_code: String,
}

/// Fetches the official UAH rate for a currency on a given date.
pub struct NbuRateClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for NbuRateClient {
    fn default() -> Self {
        Self::new(NBU_EXCHANGE_URL)
    }
}

impl NbuRateClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the official rate for `currency` on `date`, or `None`
    /// when the NBU publishes no rate for that pair (weekends before
    /// 2015, delisted currencies). Transport and decode failures are
    /// errors, not a silent zero.
    pub async fn rate_for(&self, currency: &str, date: NaiveDate) -> Result<Option<Decimal>> {
        if currency.eq_ignore_ascii_case("UAH") {
            return Ok(Some(Decimal::ONE));
        }

        let url = format!(
            "{}?valcode={}&date={}&json",
            self.base_url,
            currency,
            date.format("%Y%m%d")
        );
        debug!("[NbuRates] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            }
            .into());
        }

        let rates: Vec<ApiNbuRate> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("{} - {}", e, body)))?;

        Ok(rates.into_iter().next().map(|r| r.rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_nbu_payload() {
        let body = r#"[{"r030":840,"txt":"Долар США","rate":41.2335,"cc":"USD","exchangedate":"28.08.2026"}]"#;
        let rates: Vec<ApiNbuRate> = serde_json::from_str(body).unwrap();
        assert_eq!(rates[0].rate, dec!(41.2335));
    }

    #[test]
    fn empty_payload_means_no_rate() {
        let rates: Vec<ApiNbuRate> = serde_json::from_str("[]").unwrap();
        assert!(rates.is_empty());
    }

    #[tokio::test]
    async fn uah_short_circuits_without_a_request() {
        let client = NbuRateClient::new("http://127.0.0.1:1");
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert_eq!(client.rate_for("uah", date).await.unwrap(), Some(Decimal::ONE));
    }
}
