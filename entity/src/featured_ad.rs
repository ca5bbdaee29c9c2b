use sea_orm::entity::prelude::*;

/// A paid promotion slot pointing at a car, auction, showroom, or transport
/// listing. Higher `priority` sorts first; the sweep job deactivates ads past
/// `expires_at`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "featured_ad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_type: ListingType,
    pub listing_id: i32,
    pub priority: i32,
    pub starts_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ListingType {
    #[sea_orm(string_value = "CAR")]
    Car,
    #[sea_orm(string_value = "AUCTION")]
    Auction,
    #[sea_orm(string_value = "SHOWROOM")]
    Showroom,
    #[sea_orm(string_value = "TRANSPORT")]
    Transport,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Auction => "AUCTION",
            Self::Showroom => "SHOWROOM",
            Self::Transport => "TRANSPORT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CAR" => Some(Self::Car),
            "AUCTION" => Some(Self::Auction),
            "SHOWROOM" => Some(Self::Showroom),
            "TRANSPORT" => Some(Self::Transport),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
