use sea_orm::entity::prelude::*;

/// A prepaid wallet recharge card. Generated in batches by admins, redeemed
/// once by a user, after which the card is spent for good.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recharge_card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub amount: f64,
    pub status: CardStatus,
    pub redeemed_by: Option<i32>,
    pub redeemed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CardStatus {
    #[sea_orm(string_value = "UNUSED")]
    Unused,
    #[sea_orm(string_value = "REDEEMED")]
    Redeemed,
    #[sea_orm(string_value = "DISABLED")]
    Disabled,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unused => "UNUSED",
            Self::Redeemed => "REDEEMED",
            Self::Disabled => "DISABLED",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
