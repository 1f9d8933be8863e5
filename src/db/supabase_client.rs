// src/db/supabase_client.rs
// DOCUMENTATION: Supabase PostgREST client
// PURPOSE: Issue fixed-shape read queries against the hosted database

use crate::errors::PortfolioError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

/// Media type that asks PostgREST for exactly one object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST error code for "single object requested, 0 or many rows found"
const NOT_SINGLE_ROW_CODE: &str = "PGRST116";

/// Supabase REST client
/// DOCUMENTATION: Holds the shared HTTP client and project credentials.
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("rest_url", &self.rest_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct PostgrestErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl PostgrestErrorBody {
    fn summary(&self, fallback: &str) -> String {
        let mut text = self
            .message
            .clone()
            .unwrap_or_else(|| fallback.to_string());
        if let Some(details) = &self.details {
            text.push_str(&format!(" ({})", details));
        }
        text
    }
}

/// A read query against one table
/// DOCUMENTATION: Mirrors the `from(..).select(..).order(..).single()`
/// chain of the Supabase JS client. Only static strings are accepted, so
/// no caller input ever reaches the query string.
#[derive(Debug)]
pub struct Query<'a> {
    client: &'a SupabaseClient,
    table: &'static str,
    columns: &'static str,
    order: Option<(&'static str, bool)>,
    single: bool,
}

impl SupabaseClient {
    /// Create new client for a Supabase project
    pub fn new(project_url: &str, api_key: &str) -> Result<Self, PortfolioError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortfolioError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    /// Start a query on `table`
    pub fn from(&self, table: &'static str) -> Query<'_> {
        Query {
            client: self,
            table,
            columns: "*",
            order: None,
            single: false,
        }
    }
}

impl<'a> Query<'a> {
    pub fn select(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Order by `column`; `ascending: false` sorts newest first
    pub fn order(mut self, column: &'static str, ascending: bool) -> Self {
        self.order = Some((column, ascending));
        self
    }

    /// Require exactly one matching row
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", self.columns.to_string())];
        if let Some((column, ascending)) = self.order {
            let direction = if ascending { "asc" } else { "desc" };
            params.push(("order", format!("{}.{}", column, direction)));
        }
        params
    }

    /// Execute the query and decode the body into `T`
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, PortfolioError> {
        let url = format!("{}/{}", self.client.rest_url, self.table);
        let params = self.params();

        log::debug!("PostgREST GET {} {:?}", url, params);

        let mut request = self
            .client
            .client
            .get(&url)
            .query(&params)
            .header("apikey", &self.client.api_key)
            .bearer_auth(&self.client.api_key);

        if self.single {
            request = request.header(reqwest::header::ACCEPT, SINGLE_OBJECT);
        }

        let response = request.send().await.map_err(|e| {
            log::debug!("PostgREST request to {} failed: {}", self.table, e);
            PortfolioError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(status, &body));
        }

        response.json::<T>().await.map_err(|e| {
            log::debug!("Failed to decode {} response: {}", self.table, e);
            PortfolioError::Decode(e.to_string())
        })
    }
}

/// Map a non-2xx PostgREST response onto the error taxonomy
fn classify_error(status: StatusCode, body: &str) -> PortfolioError {
    let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();
    let fallback = if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    };
    let message = parsed.summary(&fallback);

    if let Some(hint) = &parsed.hint {
        log::debug!("PostgREST hint: {}", hint);
    }

    match status {
        StatusCode::NOT_ACCEPTABLE if parsed.code.as_deref() == Some(NOT_SINGLE_ROW_CODE) => {
            PortfolioError::NotSingleRow(message)
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortfolioError::Unauthorized(message),
        _ => PortfolioError::Backend {
            status: status.as_u16(),
            message,
        },
    }
}
