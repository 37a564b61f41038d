//! Async client for the Hypixel public API.
//!
//! Every method maps to one remote endpoint and returns the response body
//! as a [`serde_json::Value`], untouched.
//!
//! ```no_run
//! # async fn run() -> hypixel_api::Result<()> {
//! let client = hypixel_api::HypixelClient::new("your-api-key")?;
//! let player = client.player_by_name("Technoblade").await?;
//! let bazaar = client.skyblock().bazaar().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::HypixelClient;
pub use config::ClientConfig;
pub use endpoints::Skyblock;
pub use error::{HypixelError, Result};
pub use models::{AuctionLookup, GuildLookup, PlayerLookup, Resource};
