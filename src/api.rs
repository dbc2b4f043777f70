//! Client for the remote expense store. All entry routes carry the bearer
//! token from [`crate::session`]; a 401 means the session is gone, so the
//! stored token is dropped and the caller sends the user back to the auth
//! screen.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;

use crate::model::{Category, Entry};
use crate::session;

pub const API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("session expired, please log in again")]
    SessionExpired,
}

/// The store's wire shape for one expense row.
#[derive(Deserialize)]
struct ExpenseRecord {
    id: i32,
    title: String,
    amount: f64,
    category: String,
    #[serde(default)]
    date_created: Option<String>,
}

impl From<ExpenseRecord> for Entry {
    fn from(record: ExpenseRecord) -> Self {
        Entry {
            id: record.id,
            title: record.title,
            amount: record.amount,
            category: Category::decode(&record.category),
            date: record.date_created.unwrap_or_default(),
        }
    }
}

/// Fields the client sends when creating or replacing an entry. The bucket
/// is folded back into the category string on the way out.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: String,
}

impl EntryDraft {
    fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "amount": self.amount,
            "category": self.category.encode(),
            "date": self.date,
        })
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn with_token(builder: RequestBuilder) -> RequestBuilder {
    match session::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => ApiError::Rejected(body.detail),
        Err(_) => ApiError::Status(status),
    }
}

async fn authorized_rejection(response: Response) -> ApiError {
    if response.status() == 401 {
        session::clear_token();
        return ApiError::SessionExpired;
    }
    rejection(response).await
}

pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let url = format!("{}/login", API_BASE_URL);
    let payload = serde_json::json!({ "email": email, "password": password });
    let response = Request::post(&url).json(&payload)?.send().await?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    Ok(response.json::<TokenResponse>().await?.access_token)
}

pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    let url = format!("{}/register", API_BASE_URL);
    let payload = serde_json::json!({ "email": email, "password": password });
    let response = Request::post(&url).json(&payload)?.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(rejection(response).await)
    }
}

pub async fn fetch_entries() -> Result<Vec<Entry>, ApiError> {
    let url = format!("{}/expenses", API_BASE_URL);
    let response = with_token(Request::get(&url)).send().await?;
    if !response.ok() {
        return Err(authorized_rejection(response).await);
    }
    let records = response.json::<Vec<ExpenseRecord>>().await?;
    Ok(records.into_iter().map(Entry::from).collect())
}

pub async fn create_entry(draft: &EntryDraft) -> Result<Entry, ApiError> {
    let url = format!("{}/expenses", API_BASE_URL);
    let response = with_token(Request::post(&url))
        .json(&draft.payload())?
        .send()
        .await?;
    if !response.ok() {
        return Err(authorized_rejection(response).await);
    }
    Ok(response.json::<ExpenseRecord>().await?.into())
}

pub async fn update_entry(id: i32, draft: &EntryDraft) -> Result<(), ApiError> {
    let url = format!("{}/expenses/{}", API_BASE_URL, id);
    let response = with_token(Request::put(&url))
        .json(&draft.payload())?
        .send()
        .await?;
    if response.ok() {
        Ok(())
    } else {
        Err(authorized_rejection(response).await)
    }
}

pub async fn delete_entry(id: i32) -> Result<(), ApiError> {
    let url = format!("{}/expenses/{}", API_BASE_URL, id);
    let response = with_token(Request::delete(&url)).send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(authorized_rejection(response).await)
    }
}
