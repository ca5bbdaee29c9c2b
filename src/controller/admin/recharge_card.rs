use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use tracing::info;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ApiEnvelope, ErrorDto, PageQuery, Paginated},
        wallet::{CardDto, GenerateCardsDto},
    },
    service::wallet::WalletService,
    state::AppState,
};

/// Tag for grouping recharge card endpoints in OpenAPI documentation
pub static RECHARGE_CARD_TAG: &str = "recharge-card";

/// List recharge cards, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can manage recharge cards
#[utoipa::path(
    get,
    path = "/api/admin/recharge-cards",
    tag = RECHARGE_CARD_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of cards", body = ApiEnvelope<Paginated<CardDto>>),
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

    let (cards, total) = WalletService::new(&state.db)
        .get_cards_paginated(page - 1, per_page)
        .await?;

    let items: Vec<CardDto> = cards.into_iter().map(CardDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok(
            "OK",
            Paginated::new(items, total, page, per_page),
        )),
    ))
}

/// Mint a batch of recharge cards.
///
/// # Access Control
/// - `Admin` - Only admins can manage recharge cards
#[utoipa::path(
    post,
    path = "/api/admin/recharge-cards",
    tag = RECHARGE_CARD_TAG,
    request_body = GenerateCardsDto,
    responses(
        (status = 201, description = "Cards created, codes included", body = ApiEnvelope<Vec<CardDto>>),
        (status = 400, description = "Invalid batch size or amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GenerateCardsDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let cards = WalletService::new(&state.db)
        .generate_cards(payload.count, payload.amount)
        .await?;

    info!(
        "admin {} generated {} cards of {:.2}",
        admin.id,
        cards.len(),
        payload.amount
    );

    let cards: Vec<CardDto> = cards.into_iter().map(CardDto::from).collect();

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok("Cards generated", cards)),
    ))
}

/// Permanently disable an unused card.
///
/// # Access Control
/// - `Admin` - Only admins can manage recharge cards
#[utoipa::path(
    post,
    path = "/api/admin/recharge-cards/{id}/disable",
    tag = RECHARGE_CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card disabled", body = ApiEnvelope<CardDto>),
        (status = 400, description = "Card already redeemed or disabled", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disable(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let card = WalletService::new(&state.db).disable_card(card_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiEnvelope::ok("Card disabled", CardDto::from(card))),
    ))
}
