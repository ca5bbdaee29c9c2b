use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto, PageQuery, Paginated},
        wallet::{ReviewWithdrawalDto, WithdrawalDto},
    },
    service::wallet::WalletService,
    state::AppState,
};

/// Tag for grouping withdrawal endpoints in OpenAPI documentation
pub static WITHDRAWAL_TAG: &str = "withdrawal";

/// List withdrawal requests, oldest first.
///
/// # Access Control
/// - `Admin` - Only admins can review withdrawals
#[utoipa::path(
    get,
    path = "/api/admin/withdrawals",
    tag = WITHDRAWAL_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of withdrawal requests", body = ApiEnvelope<Paginated<WithdrawalDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = query.resolve();

    let (withdrawals, total) = WalletService::new(&state.db)
        .get_withdrawals_paginated(page - 1, per_page)
        .await?;

    let items: Vec<WithdrawalDto> = withdrawals.into_iter().map(WithdrawalDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "OK",
            Paginated::new(items, total, page, per_page),
        )),
    ))
}

/// Approve or reject a pending withdrawal.
///
/// Approval debits the user's wallet and writes the ledger entry in the same
/// transaction as the status change.
///
/// # Access Control
/// - `Admin` - Only admins can review withdrawals
#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{id}/review",
    tag = WITHDRAWAL_TAG,
    params(
        ("id" = i32, Path, description = "Withdrawal ID")
    ),
    request_body = ReviewWithdrawalDto,
    responses(
        (status = 200, description = "Withdrawal reviewed", body = ApiEnvelope<WithdrawalDto>),
        (status = 400, description = "Already reviewed or insufficient funds", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Withdrawal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review(
    State(state): State<AppState>,
    session: Session,
    Path(withdrawal_id): Path<i32>,
    Json(payload): Json<ReviewWithdrawalDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let withdrawal = WalletService::new(&state.db)
        .review_withdrawal(&admin, withdrawal_id, payload.approve, payload.note)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            if payload.approve {
                "Withdrawal approved"
            } else {
                "Withdrawal rejected"
            },
            WithdrawalDto::from(withdrawal),
        )),
    ))
}
