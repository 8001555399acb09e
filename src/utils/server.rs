use std::fmt;

use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const API_BASE_URL: &str = env!("API_BASE_URL");

/* Server Requests */
#[derive(Debug, Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
  pub username: String,
  pub email: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct BuyChallengeRequest {
  pub user_id: i64,
  pub plan_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
  Buy,
  Sell,
}

#[derive(Debug, Serialize)]
pub struct TradeRequest {
  pub challenge_id: i64,
  pub symbol: String,
  #[serde(rename = "type")]
  pub side: TradeSide,
  pub quantity: Decimal,
  pub open_price: Decimal,
  pub close_price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
  pub message: String,
}

/* Server Responses */
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
  pub user_id: Option<i64>,
  #[serde(default)]
  pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
  pub id: i64,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub role: Option<String>,
  #[serde(default)]
  pub status: Option<String>,
}

// The user directory is served either as a bare array or wrapped in `users`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UsersResponse {
  List(Vec<UserRecord>),
  Wrapped { users: Vec<UserRecord> },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformSettings {
  pub paypal_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BuyChallengeResponse {
  pub challenge_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeStatus {
  pub current_equity: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct TradeResponse {
  #[serde(default)]
  pub challenge: Option<ChallengeStatus>,
}

#[derive(Debug, Deserialize)]
pub struct PriceQuote {
  pub price: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
  #[serde(default)]
  pub reply: Option<String>,
}

// Error payload most endpoints attach to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ApiMessage {
  #[serde(default)]
  error: Option<String>,
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  NetworkError(String),
  ApiError { status: u16, message: String },
  DeserializeError(String),
}

impl AppError {
  /// Status code for expected-failure responses, if this is one.
  pub fn status(&self) -> Option<u16> {
    match self {
      AppError::ApiError { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Server-provided message for expected-failure responses.
  pub fn server_message(&self) -> Option<&str> {
    match self {
      AppError::ApiError { message, .. } if !message.is_empty() => Some(message),
      _ => None,
    }
  }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::NetworkError(msg) => write!(f, "Network error: {}", msg),
      AppError::ApiError { status, message } => write!(f, "Request failed ({}): {}", status, message),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}

fn url(path: &str) -> String {
  format!("{}{}", API_BASE_URL, path)
}

async fn into_api_error(response: reqwest::Response) -> AppError {
  let status = response.status().as_u16();
  let message = response
    .json::<ApiMessage>()
    .await
    .ok()
    .and_then(|m| m.error)
    .unwrap_or_default();
  AppError::ApiError { status, message }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
  let response = reqwest::get(url(path))
    .await
    .map_err(|e| AppError::NetworkError(e.to_string()))?;
  if !response.status().is_success() {
    return Err(into_api_error(response).await);
  }
  response
    .json::<T>()
    .await
    .map_err(|e| AppError::DeserializeError(e.to_string()))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, AppError> {
  let response = reqwest::Client::new()
    .post(url(path))
    .json(body)
    .send()
    .await
    .map_err(|e| AppError::NetworkError(e.to_string()))?;
  if !response.status().is_success() {
    return Err(into_api_error(response).await);
  }
  response
    .json::<T>()
    .await
    .map_err(|e| AppError::DeserializeError(e.to_string()))
}

// POST where a 2xx carries no required body.
async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
  let response = reqwest::Client::new()
    .post(url(path))
    .json(body)
    .send()
    .await
    .map_err(|e| AppError::NetworkError(e.to_string()))?;
  if !response.status().is_success() {
    return Err(into_api_error(response).await);
  }
  Ok(())
}

pub async fn login(payload: &LoginRequest) -> Result<LoginResponse, AppError> {
  post_json("/api/login", payload).await
}

pub async fn register(payload: &RegisterRequest) -> Result<(), AppError> {
  post_json_empty("/api/register", payload).await
}

pub async fn fetch_users() -> Result<Vec<UserRecord>, AppError> {
  let response: UsersResponse = get_json("/api/users").await?;
  Ok(match response {
    UsersResponse::List(users) => users,
    UsersResponse::Wrapped { users } => users,
  })
}

pub async fn fetch_platform_settings() -> Result<PlatformSettings, AppError> {
  get_json("/api/platform-settings").await
}

pub async fn save_platform_settings(payload: &PlatformSettings) -> Result<(), AppError> {
  post_json_empty("/api/platform-settings", payload).await
}

pub async fn buy_challenge(payload: &BuyChallengeRequest) -> Result<BuyChallengeResponse, AppError> {
  post_json("/api/buy-challenge", payload).await
}

pub async fn submit_trade(payload: &TradeRequest) -> Result<TradeResponse, AppError> {
  post_json("/api/trade", payload).await
}

pub async fn fetch_price(symbol: &str) -> Result<PriceQuote, AppError> {
  get_json(&format!("/api/price/{}", symbol)).await
}

pub async fn send_chat(payload: &ChatRequest) -> Result<ChatResponse, AppError> {
  post_json("/api/chat", payload).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn user_list_decodes_both_wire_shapes() {
    let bare = r#"[{"id": 1, "name": "Alice", "email": "alice@example.com", "role": "user", "status": "active"}]"#;
    let wrapped = r#"{"users": [{"id": 2, "name": "Bob"}]}"#;

    let bare: UsersResponse = serde_json::from_str(bare).unwrap();
    let users = match bare {
      UsersResponse::List(u) => u,
      UsersResponse::Wrapped { users } => users,
    };
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name.as_deref(), Some("Alice"));

    let wrapped: UsersResponse = serde_json::from_str(wrapped).unwrap();
    let users = match wrapped {
      UsersResponse::List(u) => u,
      UsersResponse::Wrapped { users } => users,
    };
    assert_eq!(users[0].id, 2);
    assert_eq!(users[0].status, None);
  }

  #[test]
  fn login_response_tolerates_a_missing_user_id() {
    let ok: LoginResponse = serde_json::from_str(r#"{"user_id": 7, "role": "Admin"}"#).unwrap();
    assert_eq!(ok.user_id, Some(7));
    assert_eq!(ok.role.as_deref(), Some("Admin"));

    let rejected: LoginResponse = serde_json::from_str(r#"{"user_id": null}"#).unwrap();
    assert_eq!(rejected.user_id, None);
    assert_eq!(rejected.role, None);
  }

  #[test]
  fn trade_request_serializes_the_expected_wire_fields() {
    let request = TradeRequest {
      challenge_id: 3,
      symbol: "BTC-USD".to_string(),
      side: TradeSide::Sell,
      quantity: dec!(2),
      open_price: dec!(65000),
      close_price: dec!(64935),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["type"], "sell");
    assert_eq!(json["challenge_id"], 3);
    assert_eq!(json["open_price"], 65000.0);
  }

  #[test]
  fn trade_response_challenge_is_optional() {
    let with: TradeResponse =
      serde_json::from_str(r#"{"challenge": {"current_equity": 50750.5}}"#).unwrap();
    assert_eq!(with.challenge.unwrap().current_equity, dec!(50750.5));

    let without: TradeResponse = serde_json::from_str("{}").unwrap();
    assert!(without.challenge.is_none());
  }

  #[test]
  fn price_quote_decodes_numeric_prices() {
    let quote: PriceQuote = serde_json::from_str(r#"{"price": 65000}"#).unwrap();
    assert_eq!(quote.price, dec!(65000));
  }

  #[test]
  fn api_error_exposes_the_server_message() {
    let err = AppError::ApiError { status: 409, message: "email taken".to_string() };
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.server_message(), Some("email taken"));

    let blank = AppError::ApiError { status: 500, message: String::new() };
    assert_eq!(blank.server_message(), None);
  }
}
