use serde::{Deserialize, Serialize};

/// Selector for `skyblock/auction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionLookup {
    /// Auction UUID.
    Uuid,
    /// SkyBlock profile ID.
    Profile,
    /// Player UUID.
    Player,
}

impl AuctionLookup {
    pub fn param(self) -> &'static str {
        match self {
            AuctionLookup::Uuid => "uuid",
            AuctionLookup::Profile => "profile",
            AuctionLookup::Player => "player",
        }
    }
}
