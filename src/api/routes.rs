//! API Routes
//!
//! HTTP endpoint definitions. Each endpoint validates the request shape,
//! constructs the matching handler, and renders its result; business rules
//! never appear at this layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::{
    validate_add_transaction, validate_create_account, AccountDto, AddTransactionCommand,
    AddTransactionHandler, CreateAccountCommand, CreateAccountHandler,
    GetAccountTransactionsHandler, GetAccountsHandler, TransactionDto,
};
use crate::repository::AccountRepository;

/// Shared application state
pub type AppState = Arc<AccountRepository>;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub currency: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTransactionRequest {
    pub account_id: Uuid,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl From<AddTransactionRequest> for AddTransactionCommand {
    fn from(request: AddTransactionRequest) -> Self {
        Self {
            account_id: request.account_id,
            amount: request.amount,
            date: request.date,
            category: request.category,
            description: request.description,
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/accounts", post(create_account))
        .route("/accounts", get(get_accounts))
        .route("/accounts/:account_id/incomes", post(add_income))
        .route("/accounts/:account_id/expenses", post(add_expense))
        .route(
            "/accounts/:account_id/transactions",
            get(get_account_transactions),
        )
}

// =========================================================================
// GET /health
// =========================================================================

async fn health_check() -> &'static str {
    "OK"
}

// =========================================================================
// POST /accounts
// =========================================================================

async fn create_account(
    State(repository): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountDto>), AppError> {
    let command = CreateAccountCommand {
        currency: request.currency,
        amount: request.amount,
    };
    validate_create_account(&command)?;

    let account = CreateAccountHandler::new(repository).execute(command)?;
    Ok((StatusCode::CREATED, Json(account)))
}

// =========================================================================
// GET /accounts
// =========================================================================

async fn get_accounts(State(repository): State<AppState>) -> Json<Vec<AccountDto>> {
    Json(GetAccountsHandler::new(repository).execute())
}

// =========================================================================
// POST /accounts/:account_id/incomes
// =========================================================================

async fn add_income(
    State(repository): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<AddTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionDto>), AppError> {
    let command = checked_command(account_id, request)?;
    let transaction = AddTransactionHandler::income(repository).execute(command)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

// =========================================================================
// POST /accounts/:account_id/expenses
// =========================================================================

async fn add_expense(
    State(repository): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<AddTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionDto>), AppError> {
    let command = checked_command(account_id, request)?;
    let transaction = AddTransactionHandler::expense(repository).execute(command)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Path/body agreement plus structural validation, shared by both
/// transaction endpoints.
fn checked_command(
    account_id: Uuid,
    request: AddTransactionRequest,
) -> Result<AddTransactionCommand, AppError> {
    if account_id != request.account_id {
        return Err(AppError::InvalidRequest(
            "Account ID in the URL does not match the Account ID in the request body.".to_string(),
        ));
    }

    let command = AddTransactionCommand::from(request);
    validate_add_transaction(&command)?;
    Ok(command)
}

// =========================================================================
// GET /accounts/:account_id/transactions
// =========================================================================

async fn get_account_transactions(
    State(repository): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<TransactionDto>>, AppError> {
    let transactions = GetAccountTransactionsHandler::new(repository).execute(account_id)?;
    Ok(Json(transactions))
}
