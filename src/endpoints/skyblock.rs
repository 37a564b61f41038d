use serde_json::Value;

use crate::client::HypixelClient;
use crate::error::Result;
use crate::models::AuctionLookup;

/// SkyBlock endpoints, reached through [`HypixelClient::skyblock`].
#[derive(Debug, Clone, Copy)]
pub struct Skyblock<'a> {
    client: &'a HypixelClient,
}

impl HypixelClient {
    pub fn skyblock(&self) -> Skyblock<'_> {
        Skyblock { client: self }
    }
}

// Methods take `self` so their futures borrow only the client, not the handle.
impl<'a> Skyblock<'a> {
    /// Auctions from `skyblock/auction`, selected by auction UUID,
    /// profile ID or player UUID.
    pub async fn auction(self, lookup: AuctionLookup, query: &str) -> Result<Value> {
        self.client
            .request("skyblock/auction", &[(lookup.param(), query)])
            .await
    }

    pub async fn auctions_by_uuid(self, uuid: &str) -> Result<Value> {
        self.auction(AuctionLookup::Uuid, uuid).await
    }

    pub async fn auctions_by_profile(self, profile: &str) -> Result<Value> {
        self.auction(AuctionLookup::Profile, profile).await
    }

    pub async fn auctions_by_player(self, player: &str) -> Result<Value> {
        self.auction(AuctionLookup::Player, player).await
    }

    /// One page of the active auction house listing. `None` means page 0.
    pub async fn auctions(self, page: Option<u32>) -> Result<Value> {
        let page = page.unwrap_or(0).to_string();
        self.client
            .request("skyblock/auctions", &[("page", page.as_str())])
            .await
    }

    /// Bazaar products with their buy/sell summaries and quick status.
    pub async fn bazaar(self) -> Result<Value> {
        self.client.request("skyblock/bazaar", &[]).await
    }

    pub async fn news(self) -> Result<Value> {
        self.client.request("skyblock/news", &[]).await
    }

    /// A single SkyBlock profile by ID.
    pub async fn profile(self, profile: &str) -> Result<Value> {
        self.client
            .request("skyblock/profile", &[("profile", profile)])
            .await
    }

    /// All SkyBlock profiles of a player.
    pub async fn profiles(self, uuid: &str) -> Result<Value> {
        self.client
            .request("skyblock/profiles", &[("uuid", uuid)])
            .await
    }
}
