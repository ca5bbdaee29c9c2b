//! Route configuration and API documentation.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{admin, auction, auth, wallet, yard},
    model,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::get_user,
        auth::logout,
        auction::accept_sale,
        auction::get_auction,
        auction::get_auction_bids,
        yard::get_yard_auctions,
        wallet::recharge,
        wallet::get_transactions,
        wallet::request_withdrawal,
        admin::featured_ad::list,
        admin::featured_ad::create,
        admin::featured_ad::update,
        admin::featured_ad::delete,
        admin::booking::list,
        admin::booking::update_status,
        admin::user::list,
        admin::user::update_status,
        admin::recharge_card::list,
        admin::recharge_card::generate,
        admin::recharge_card::disable,
        admin::withdrawal::list,
        admin::withdrawal::review,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::auction::AcceptSaleDto,
        model::auction::SaleDataDto,
        model::auction::AuctionDto,
        model::auction::BidDto,
        model::yard::YardAuctionDto,
        model::yard::DisplayStatus,
        model::user::LoginDto,
        model::user::CurrentUserDto,
        model::user::UserListItemDto,
        model::user::UpdateUserStatusDto,
        model::featured_ad::FeaturedAdDto,
        model::featured_ad::CreateFeaturedAdDto,
        model::featured_ad::UpdateFeaturedAdDto,
        model::booking::BookingDto,
        model::booking::UpdateBookingStatusDto,
        model::wallet::RedeemCardDto,
        model::wallet::TransactionDto,
        model::wallet::WalletBalanceDto,
        model::wallet::GenerateCardsDto,
        model::wallet::CardDto,
        model::wallet::CreateWithdrawalDto,
        model::wallet::WithdrawalDto,
        model::wallet::ReviewWithdrawalDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Session login and the current user"),
        (name = auction::AUCTION_TAG, description = "Auction lifecycle and sale acceptance"),
        (name = yard::YARD_TAG, description = "Yard listings"),
        (name = wallet::WALLET_TAG, description = "Wallet recharge and withdrawals"),
        (name = admin::featured_ad::FEATURED_AD_TAG, description = "Featured ad administration"),
        (name = admin::booking::BOOKING_TAG, description = "Transport booking administration"),
        (name = admin::user::USER_TAG, description = "Account administration"),
        (name = admin::recharge_card::RECHARGE_CARD_TAG, description = "Recharge card administration"),
        (name = admin::withdrawal::WITHDRAWAL_TAG, description = "Withdrawal review"),
    )
)]
struct ApiDoc;

pub fn router(state: AppState, session_layer: SessionManagerLayer<SqliteStore>) -> Router {
    let api = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auctions/{id}", get(auction::get_auction))
        .route("/api/auctions/{id}/bids", get(auction::get_auction_bids))
        .route("/api/auctions/{id}/accept-sale", post(auction::accept_sale))
        .route("/api/yards/{id}/auctions", get(yard::get_yard_auctions))
        .route("/api/wallet/recharge", post(wallet::recharge))
        .route("/api/wallet/transactions", get(wallet::get_transactions))
        .route("/api/wallet/withdrawals", post(wallet::request_withdrawal))
        .route(
            "/api/admin/featured-ads",
            get(admin::featured_ad::list).post(admin::featured_ad::create),
        )
        .route(
            "/api/admin/featured-ads/{id}",
            put(admin::featured_ad::update).delete(admin::featured_ad::delete),
        )
        .route("/api/admin/bookings", get(admin::booking::list))
        .route(
            "/api/admin/bookings/{id}/status",
            put(admin::booking::update_status),
        )
        .route("/api/admin/users", get(admin::user::list))
        .route(
            "/api/admin/users/{id}/status",
            put(admin::user::update_status),
        )
        .route(
            "/api/admin/recharge-cards",
            get(admin::recharge_card::list).post(admin::recharge_card::generate),
        )
        .route(
            "/api/admin/recharge-cards/{id}/disable",
            post(admin::recharge_card::disable),
        )
        .route("/api/admin/withdrawals", get(admin::withdrawal::list))
        .route(
            "/api/admin/withdrawals/{id}/review",
            post(admin::withdrawal::review),
        )
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(session_layer)
        .layer(cors)
}
