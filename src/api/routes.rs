//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, Amount, Balance};
use crate::error::AppError;

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub account_id: String,
    #[serde(default)]
    pub balance: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account_id: String,
    pub balance: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferResponse {
    pub transfer_id: Uuid,
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    pub status: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Account endpoints
        .route("/accounts", post(create_account))
        .route("/accounts/:account_id", get(get_account))
        // Transfers
        .route("/transfers", post(transfer))
}

// =========================================================================
// POST /accounts
// =========================================================================

/// Create a new account
async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let balance = Balance::new(request.balance)?;
    let account = Account::new(request.account_id, balance);

    state.service.create_account(account.clone())?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            account_id: account.id().to_string(),
            balance: account.balance().value(),
        }),
    ))
}

// =========================================================================
// GET /accounts/:account_id
// =========================================================================

/// Get account by ID
async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state
        .service
        .get_account(&account_id)
        .ok_or_else(|| AppError::AccountNotFound(account_id.clone()))?;

    Ok(Json(AccountResponse {
        account_id: account.id().to_string(),
        balance: account.balance().value(),
    }))
}

// =========================================================================
// POST /transfers
// =========================================================================

/// Transfer funds between two accounts
async fn transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, AppError> {
    let amount: Amount = request.amount.parse()?;
    let amount_value = amount.value();

    state
        .service
        .transfer(&request.from_account_id, &request.to_account_id, amount)
        .await?;

    Ok(Json(TransferResponse {
        transfer_id: Uuid::new_v4(),
        from_account_id: request.from_account_id,
        to_account_id: request.to_account_id,
        amount: amount_value,
        status: "completed".to_string(),
    }))
}
