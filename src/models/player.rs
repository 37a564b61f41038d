use serde::{Deserialize, Serialize};

/// How a player is looked up on the `player` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerLookup {
    Uuid,
    Name,
}

impl PlayerLookup {
    pub fn param(self) -> &'static str {
        match self {
            PlayerLookup::Uuid => "uuid",
            PlayerLookup::Name => "name",
        }
    }
}
