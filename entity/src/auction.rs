use sea_orm::entity::prelude::*;

/// A vehicle listing under bidding.
///
/// Lifecycle: UPCOMING → ACTIVE → ENDED, with SOLD reachable from any of the
/// three via sale acceptance, and CANCELLED as the other terminal state. The
/// transition to SOLD is guarded only by the status allow-list; there is no
/// version column, so concurrent accepts resolve on row-lock order inside the
/// accepting transaction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "auction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seller_id: i32,
    pub car_id: i32,
    pub yard_id: Option<i32>,
    pub status: AuctionStatus,
    pub starting_price: f64,
    pub current_price: f64,
    pub highest_bidder_id: Option<i32>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AuctionStatus {
    #[sea_orm(string_value = "UPCOMING")]
    Upcoming,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "ENDED")]
    Ended,
    #[sea_orm(string_value = "SOLD")]
    Sold,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl AuctionStatus {
    /// Statuses from which a sale may still be accepted.
    pub fn accepts_sale(&self) -> bool {
        matches!(self, Self::Upcoming | Self::Active | Self::Ended)
    }

    /// Wire representation, matching the stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Active => "ACTIVE",
            Self::Ended => "ENDED",
            Self::Sold => "SOLD",
            Self::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SellerId",
        to = "super::user::Column::Id"
    )]
    Seller,
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id"
    )]
    Car,
    #[sea_orm(
        belongs_to = "super::yard::Entity",
        from = "Column::YardId",
        to = "super::yard::Column::Id"
    )]
    Yard,
    #[sea_orm(has_many = "super::bid::Entity")]
    Bid,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::yard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Yard.def()
    }
}

impl Related<super::bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
