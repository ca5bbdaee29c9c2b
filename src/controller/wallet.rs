use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto},
        wallet::{
            CreateWithdrawalDto, RedeemCardDto, TransactionDto, WalletBalanceDto, WithdrawalDto,
        },
    },
    service::wallet::WalletService,
    state::AppState,
};

/// Tag for grouping wallet endpoints in OpenAPI documentation
pub static WALLET_TAG: &str = "wallet";

/// Redeem a recharge card into the caller's wallet.
///
/// # Access Control
/// - Caller must hold `wallet.recharge`
///
/// # Returns
/// - `200 OK` - New balance and the ledger entry
/// - `400 Bad Request` - Card already redeemed or disabled
/// - `404 Not Found` - Unknown card code
#[utoipa::path(
    post,
    path = "/api/wallet/recharge",
    tag = WALLET_TAG,
    request_body = RedeemCardDto,
    responses(
        (status = 200, description = "Card redeemed", body = ApiEnvelope<WalletBalanceDto>),
        (status = 400, description = "Card already redeemed or disabled", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recharge(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RedeemCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Allow("wallet.recharge")])
        .await?;

    let (balance, entry) = WalletService::new(&state.db)
        .redeem_card(&user, &payload.code)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "Card redeemed",
            WalletBalanceDto {
                balance,
                transaction: TransactionDto::from(entry),
            },
        )),
    ))
}

/// Get the caller's wallet ledger, newest first.
///
/// # Returns
/// - `200 OK` - Ledger entries
#[utoipa::path(
    get,
    path = "/api/wallet/transactions",
    tag = WALLET_TAG,
    responses(
        (status = 200, description = "Wallet ledger", body = ApiEnvelope<Vec<TransactionDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transactions = WalletService::new(&state.db).get_transactions(user.id).await?;
    let transactions: Vec<TransactionDto> =
        transactions.into_iter().map(TransactionDto::from).collect();

    Ok((StatusCode::OK, Json(ApiEnvelope::ok("OK", transactions))))
}

/// File a withdrawal request against the caller's balance.
///
/// # Access Control
/// - Caller must hold `wallet.withdraw`
///
/// # Returns
/// - `200 OK` - The pending request
/// - `400 Bad Request` - Non-positive amount or more than the balance
#[utoipa::path(
    post,
    path = "/api/wallet/withdrawals",
    tag = WALLET_TAG,
    request_body = CreateWithdrawalDto,
    responses(
        (status = 200, description = "Withdrawal requested", body = ApiEnvelope<WithdrawalDto>),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_withdrawal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateWithdrawalDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Allow("wallet.withdraw")])
        .await?;

    let withdrawal = WalletService::new(&state.db)
        .request_withdrawal(&user, payload.amount)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "Withdrawal requested",
            WithdrawalDto::from(withdrawal),
        )),
    ))
}
