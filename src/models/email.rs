use crate::error::EmailError;
use crate::validation::parser::ParsedEmail;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
    /// Treat the local part as case-sensitive. Defaults to `false`.
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: code.to_string(),
            message: message.into(),
        }
    }
}

impl From<&EmailError> for ErrorBody {
    fn from(err: &EmailError) -> Self {
        Self::new("INVALID_EMAIL", err.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BulkParseResult {
    pub email: String,
    pub parsed: Option<ParsedEmail>,
    pub error: Option<ErrorBody>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BulkParseResponse {
    pub results: Vec<BulkParseResult>,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub disposable_count: usize,
}

impl BulkParseResponse {
    pub fn from_results(results: Vec<BulkParseResult>) -> Self {
        let valid_count = results.iter().filter(|r| r.parsed.is_some()).count();
        let disposable_count = results
            .iter()
            .filter(|r| r.parsed.as_ref().is_some_and(|p| p.disposable))
            .count();
        Self {
            invalid_count: results.len() - valid_count,
            valid_count,
            disposable_count,
            results,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RefreshResponse {
    pub domains: usize,
    pub refreshed_at: Option<String>,
}
