//! HTTP client for the FOP assistant remote service.
//!
//! One method per logical operation, each mapped to a single HTTP
//! request against resource-oriented endpoints. Stateless: no retries,
//! no caching; transport failures surface to the caller unchanged.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use fop_core::categories::{CategoriesApi, Category, CategoryGroups, NewCategory};
use fop_core::errors::{ApiError, Error, Result};
use fop_core::profiles::{NewProfile, Profile, ProfileUpdate, ProfilesApi};
use fop_core::tax::{FopGroup, FopSettings, FopSettingsUpdate, TaxSettingsApi};
use fop_core::transactions::{
    NewTransaction, RemoteSummary, Transaction, TransactionFilters, TransactionReceipt,
    TransactionUpdate, TransactionsApi,
};
use fop_core::TransactionType;

/// Default base URL of the FOP assistant service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

// ─────────────────────────────────────────────────────────────────────────────
// Wire Types (internal, matching the service's snake_case payloads)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ApiTransaction {
    transaction_id: String,
    user_id: String,
    category_id: Option<String>,
    transaction_type: TransactionType,
    transaction_amount: Decimal,
    transaction_date: NaiveDate,
    notes: Option<String>,
    #[serde(default)]
    is_foreign_currency: Option<bool>,
    #[serde(default)]
    currency_code: Option<String>,
    #[serde(default)]
    amount_original: Option<Decimal>,
    #[serde(default)]
    exchange_rate: Option<Decimal>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<ApiTransaction> for Transaction {
    fn from(t: ApiTransaction) -> Self {
        Transaction {
            id: t.transaction_id,
            user_id: t.user_id,
            category_id: t.category_id,
            transaction_type: t.transaction_type,
            amount: t.transaction_amount,
            date: t.transaction_date,
            description: t.notes,
            currency: t
                .currency_code
                .unwrap_or_else(|| fop_core::constants::DEFAULT_CURRENCY.to_string()),
            is_foreign_currency: t.is_foreign_currency.unwrap_or(false),
            amount_original: t.amount_original,
            exchange_rate: t.exchange_rate,
            created_at: t.created_at.map(|dt| dt.naive_utc()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiTransactionCreate<'a> {
    user_id: &'a str,
    category_id: Option<&'a str>,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    amount: Decimal,
    currency: &'a str,
    description: Option<&'a str>,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    manual_rate: Option<Decimal>,
}

#[derive(Debug, Serialize)]
struct ApiTransactionPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category_id: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manual_rate: Option<Decimal>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiCreateTransactionResponse {
    used_rate: Decimal,
    amount_uah: Decimal,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct ApiCategory {
    id: String,
    user_id: Option<String>,
    name: String,
    #[serde(rename = "type")]
    category_type: TransactionType,
    #[serde(default)]
    is_fop_only: bool,
}

impl From<ApiCategory> for Category {
    fn from(c: ApiCategory) -> Self {
        Category {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            category_type: c.category_type,
            is_fop_only: c.is_fop_only,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiCategoryGroups {
    #[serde(default)]
    income: Vec<ApiCategory>,
    #[serde(default)]
    expense: Vec<ApiCategory>,
    #[serde(default)]
    all: Vec<ApiCategory>,
    #[serde(default)]
    user_is_fop: bool,
}

#[derive(Debug, Serialize)]
struct ApiCategoryCreate<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    category_type: TransactionType,
    user_id: &'a str,
}

#[derive(Debug, serde::Deserialize)]
struct ApiProfile {
    id: String,
    is_fop: bool,
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ApiProfileCreate<'a> {
    user_id: &'a str,
    is_fop: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ApiProfilePatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    is_fop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiFopSettings {
    fop_group: FopGroup,
    #[serde(default)]
    is_zed: bool,
    #[serde(default)]
    income_tax_percent: Option<Decimal>,
    #[serde(default)]
    military_tax_percent: Option<Decimal>,
    #[serde(default)]
    esv_value: Option<Decimal>,
    #[serde(default)]
    is_vat_payer: bool,
    #[serde(default)]
    has_employees: bool,
    #[serde(default)]
    employees_count: u32,
}

impl From<ApiFopSettings> for FopSettings {
    fn from(s: ApiFopSettings) -> Self {
        FopSettings {
            fop_group: s.fop_group,
            is_zed: s.is_zed,
            income_tax_percent: s.income_tax_percent,
            military_tax_percent: s.military_tax_percent,
            esv_value: s.esv_value,
            is_vat_payer: s.is_vat_payer,
            has_employees: s.has_employees,
            employees_count: s.employees_count,
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    fop_group: Option<FopGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_zed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    income_tax_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    military_tax_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    esv_value: Option<Decimal>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Gateway Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the FOP assistant service.
///
/// # Example
///
/// ```ignore
/// let client = FopApiClient::new("http://127.0.0.1:8000")?;
/// let transactions = client
///     .list_transactions("user-1", &TransactionFilters::default())
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct FopApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl FopApiClient {
    /// Create a new client against `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Gateway] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.parse_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Gateway] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.parse_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Gateway] PATCH {}", url);

        let response = self
            .client
            .patch(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.parse_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Gateway] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let _: serde_json::Value = self.parse_response(response).await?;
        Ok(())
    }

    /// Parse an HTTP response, surfacing the service's error detail on
    /// non-success statuses.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|err| err.detail)
                .map(|detail| match detail {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .unwrap_or_else(|| body.chars().take(200).collect());

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("{} - {}", e, body)).into())
    }
}

/// Joins encoded query parameters onto `path`.
fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

fn filter_params(user_id: &str, filters: &TransactionFilters) -> Vec<(&'static str, String)> {
    let mut params = vec![("user_id", user_id.to_string())];
    if let Some(limit) = filters.limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = filters.offset {
        params.push(("offset", offset.to_string()));
    }
    if let Some(start_date) = filters.start_date {
        params.push(("start_date", start_date.format("%Y-%m-%d").to_string()));
    }
    if let Some(end_date) = filters.end_date {
        params.push(("end_date", end_date.format("%Y-%m-%d").to_string()));
    }
    if let Some(transaction_type) = filters.transaction_type {
        params.push(("type", transaction_type.as_str().to_string()));
    }
    params
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait Implementations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionsApi for FopApiClient {
    async fn list_transactions(
        &self,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        let path = with_query("/transactions", &filter_params(user_id, filters));
        let transactions: Vec<ApiTransaction> = self.get(&path).await?;
        Ok(transactions.into_iter().map(Transaction::from).collect())
    }

    async fn get_summary(
        &self,
        user_id: &str,
        end_date: Option<NaiveDate>,
    ) -> Result<RemoteSummary> {
        let mut params = vec![("user_id", user_id.to_string())];
        if let Some(end_date) = end_date {
            params.push(("end_date", end_date.format("%Y-%m-%d").to_string()));
        }
        self.get(&with_query("/transactions/summary", &params)).await
    }

    async fn create_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> Result<TransactionReceipt> {
        let body = ApiTransactionCreate {
            user_id: &new_transaction.user_id,
            category_id: new_transaction.category_id.as_deref(),
            transaction_type: new_transaction.transaction_type,
            amount: new_transaction.amount,
            currency: &new_transaction.currency,
            description: new_transaction.description.as_deref(),
            date: new_transaction.date,
            manual_rate: new_transaction.manual_rate,
        };
        let response: ApiCreateTransactionResponse = self.post("/transactions", &body).await?;
        Ok(TransactionReceipt {
            used_rate: response.used_rate,
            amount_uah: response.amount_uah,
        })
    }

    async fn update_transaction(
        &self,
        transaction_id: &str,
        user_id: &str,
        update: &TransactionUpdate,
    ) -> Result<()> {
        let path = with_query(
            &format!("/transactions/{}", transaction_id),
            &[("user_id", user_id.to_string())],
        );
        let body = ApiTransactionPatch {
            category_id: update.category_id.as_deref(),
            transaction_type: update.transaction_type,
            amount: update.amount,
            description: update.description.as_deref(),
            date: update.date,
            currency: update.currency.as_deref(),
            manual_rate: update.manual_rate,
        };
        let _: serde_json::Value = self.patch(&path, &body).await?;
        Ok(())
    }

    async fn delete_transaction(&self, transaction_id: &str, user_id: &str) -> Result<()> {
        let path = with_query(
            &format!("/transactions/{}", transaction_id),
            &[("user_id", user_id.to_string())],
        );
        self.delete(&path).await
    }
}

#[async_trait]
impl CategoriesApi for FopApiClient {
    async fn list_categories(&self, user_id: &str) -> Result<CategoryGroups> {
        let path = with_query("/categories", &[("user_id", user_id.to_string())]);
        let groups: ApiCategoryGroups = self.get(&path).await?;
        Ok(CategoryGroups {
            income: groups.income.into_iter().map(Category::from).collect(),
            expense: groups.expense.into_iter().map(Category::from).collect(),
            all: groups.all.into_iter().map(Category::from).collect(),
            user_is_fop: groups.user_is_fop,
        })
    }

    async fn create_category(&self, new_category: &NewCategory) -> Result<Category> {
        let body = ApiCategoryCreate {
            name: &new_category.name,
            category_type: new_category.category_type,
            user_id: &new_category.user_id,
        };
        // The service answers with the inserted rows.
        let mut created: Vec<ApiCategory> = self.post("/categories", &body).await?;
        created
            .pop()
            .map(Category::from)
            .ok_or_else(|| ApiError::Decode("empty insert response".to_string()).into())
    }

    async fn delete_category(&self, category_id: &str, user_id: &str) -> Result<()> {
        let path = with_query(
            &format!("/categories/{}", category_id),
            &[("user_id", user_id.to_string())],
        );
        self.delete(&path).await
    }
}

#[async_trait]
impl ProfilesApi for FopApiClient {
    async fn get_profile(&self, user_id: &str) -> Result<Profile> {
        let profile: ApiProfile = self.get(&format!("/profile/{}", user_id)).await?;
        Ok(Profile {
            id: profile.id,
            is_fop: profile.is_fop,
            full_name: profile.full_name,
        })
    }

    async fn create_profile(&self, new_profile: &NewProfile) -> Result<Profile> {
        let body = ApiProfileCreate {
            user_id: &new_profile.user_id,
            is_fop: new_profile.is_fop,
            full_name: new_profile.full_name.as_deref(),
        };
        let profile: ApiProfile = self.post("/profile/", &body).await?;
        Ok(Profile {
            id: profile.id,
            is_fop: profile.is_fop,
            full_name: profile.full_name,
        })
    }

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile> {
        let body = ApiProfilePatch {
            is_fop: update.is_fop,
            full_name: update.full_name.as_deref(),
        };
        let profile: ApiProfile = self.patch(&format!("/profile/{}", user_id), &body).await?;
        Ok(Profile {
            id: profile.id,
            is_fop: profile.is_fop,
            full_name: profile.full_name,
        })
    }

    async fn delete_profile(&self, user_id: &str) -> Result<()> {
        self.delete(&format!("/profile/{}", user_id)).await
    }
}

#[async_trait]
impl TaxSettingsApi for FopApiClient {
    async fn get_settings(&self, user_id: &str) -> Result<FopSettings> {
        let settings: ApiFopSettings = self.get(&format!("/settings/{}", user_id)).await?;
        Ok(settings.into())
    }

    async fn update_settings(
        &self,
        user_id: &str,
        update: &FopSettingsUpdate,
    ) -> Result<FopSettings> {
        let body = ApiSettingsPatch {
            fop_group: update.fop_group,
            is_zed: update.is_zed,
            income_tax_percent: update.income_tax_percent,
            military_tax_percent: update.military_tax_percent,
            esv_value: update.esv_value,
        };
        let settings: ApiFopSettings =
            self.patch(&format!("/settings/{}", user_id), &body).await?;
        Ok(settings.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn client_url_normalization() {
        let client = FopApiClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn query_building_encodes_values() {
        let path = with_query(
            "/transactions",
            &[
                ("user_id", "user 1".to_string()),
                ("limit", "100".to_string()),
            ],
        );
        assert_eq!(path, "/transactions?user_id=user%201&limit=100");
        assert_eq!(with_query("/categories", &[]), "/categories");
    }

    #[test]
    fn filter_params_cover_set_fields() {
        let filters = TransactionFilters {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
            transaction_type: Some(TransactionType::Income),
            limit: Some(100),
            offset: None,
        };
        let params = filter_params("user-1", &filters);
        assert!(params.contains(&("user_id", "user-1".to_string())));
        assert!(params.contains(&("start_date", "2025-01-01".to_string())));
        assert!(params.contains(&("type", "income".to_string())));
        assert!(params.contains(&("limit", "100".to_string())));
        assert!(!params.iter().any(|(key, _)| *key == "end_date"));
    }

    #[test]
    fn wire_transaction_maps_to_domain() {
        let json = r#"{
            "transaction_id": "tx-1",
            "user_id": "user-1",
            "category_id": null,
            "transaction_type": "income",
            "transaction_amount": 1500.50,
            "transaction_date": "2025-06-15",
            "notes": "Оплата за послуги",
            "is_foreign_currency": true,
            "currency_code": "USD",
            "amount_original": 36.25,
            "exchange_rate": 41.39,
            "created_at": "2025-06-15T10:30:00+00:00"
        }"#;
        let wire: ApiTransaction = serde_json::from_str(json).unwrap();
        let tx: Transaction = wire.into();
        assert_eq!(tx.id, "tx-1");
        assert_eq!(tx.amount, dec!(1500.50));
        assert_eq!(tx.currency, "USD");
        assert!(tx.is_foreign_currency);
        assert_eq!(tx.exchange_rate, Some(dec!(41.39)));
        assert!(tx.created_at.is_some());
    }

    #[test]
    fn wire_transaction_defaults_to_uah() {
        let json = r#"{
            "transaction_id": "tx-2",
            "user_id": "user-1",
            "category_id": "cat-1",
            "transaction_type": "expense",
            "transaction_amount": 200,
            "transaction_date": "2025-06-16",
            "notes": null
        }"#;
        let wire: ApiTransaction = serde_json::from_str(json).unwrap();
        let tx: Transaction = wire.into();
        assert_eq!(tx.currency, "UAH");
        assert!(!tx.is_foreign_currency);
        assert_eq!(tx.transaction_type, TransactionType::Expense);
    }

    #[test]
    fn patch_body_skips_unset_fields() {
        let body = ApiTransactionPatch {
            category_id: None,
            transaction_type: None,
            amount: Some(dec!(99.90)),
            description: None,
            date: None,
            currency: None,
            manual_rate: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("amount"));
    }

    #[test]
    fn settings_patch_serializes_group_as_number() {
        let body = ApiSettingsPatch {
            fop_group: Some(FopGroup::Three),
            is_zed: Some(true),
            income_tax_percent: None,
            military_tax_percent: None,
            esv_value: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fop_group"], 3);
        assert_eq!(json["is_zed"], true);
    }
}
