//! Look up a player and print the bazaar summary.
//!
//! ```text
//! HYPIXEL_API_KEY=... cargo run --example player_lookup -- <name>
//! ```

use hypixel_api::{ClientConfig, HypixelClient, Resource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "hypixel".to_string());
    let client = HypixelClient::with_config(ClientConfig::from_dotenv()?)?;

    let player = client.player_by_name(&name).await?;
    if player["success"] == false {
        eprintln!("API error: {}", player["cause"]);
        return Ok(());
    }
    println!("Player: {}", player["player"]["displayname"]);

    let uuid = player["player"]["uuid"].as_str().unwrap_or_default();
    let (status, profiles) = tokio::join!(
        client.player_status(uuid),
        client.skyblock().profiles(uuid),
    );
    println!("Online: {}", status?["session"]["online"]);
    match profiles?["profiles"].as_array() {
        Some(profiles) => println!("SkyBlock profiles: {}", profiles.len()),
        None => println!("No SkyBlock profiles"),
    }

    let bazaar = client.skyblock().bazaar().await?;
    let products = bazaar["products"].as_object().map(|p| p.len()).unwrap_or(0);
    println!("Bazaar products: {}", products);

    let skills = client.resources(Resource::SkyblockSkills).await?;
    println!("Skill resource version: {}", skills["version"]);

    Ok(())
}
