use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the recharge endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RedeemCardDto {
    pub code: String,
}

/// Single wallet ledger entry.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: i32,
    pub amount: f64,
    pub kind: String,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::wallet_transaction::Model> for TransactionDto {
    fn from(txn: entity::wallet_transaction::Model) -> Self {
        Self {
            id: txn.id,
            amount: txn.amount,
            kind: txn.kind.as_str().to_string(),
            reference: txn.reference,
            created_at: txn.created_at,
        }
    }
}

/// Payload returned after a successful recharge.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceDto {
    pub balance: f64,
    pub transaction: TransactionDto,
}

/// Admin request to mint a batch of recharge cards.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateCardsDto {
    pub count: u32,
    pub amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: i32,
    pub code: String,
    pub amount: f64,
    pub status: String,
    pub redeemed_by: Option<i32>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::recharge_card::Model> for CardDto {
    fn from(card: entity::recharge_card::Model) -> Self {
        Self {
            id: card.id,
            code: card.code,
            amount: card.amount,
            status: card.status.as_str().to_string(),
            redeemed_by: card.redeemed_by,
            redeemed_at: card.redeemed_at,
            created_at: card.created_at,
        }
    }
}

/// Body for a user's withdrawal request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWithdrawalDto {
    pub amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDto {
    pub id: i32,
    pub user_id: i32,
    pub amount: f64,
    pub status: String,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::withdrawal::Model> for WithdrawalDto {
    fn from(withdrawal: entity::withdrawal::Model) -> Self {
        Self {
            id: withdrawal.id,
            user_id: withdrawal.user_id,
            amount: withdrawal.amount,
            status: withdrawal.status.as_str().to_string(),
            reviewed_by: withdrawal.reviewed_by,
            reviewed_at: withdrawal.reviewed_at,
            note: withdrawal.note,
            created_at: withdrawal.created_at,
        }
    }
}

/// Admin decision on a pending withdrawal.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewWithdrawalDto {
    pub approve: bool,
    #[serde(default)]
    pub note: Option<String>,
}
