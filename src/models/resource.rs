use serde::{Deserialize, Serialize};
use std::fmt;

/// Static resources served under `resources/`. These rarely change and
/// need no API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    #[serde(rename = "achievements")]
    Achievements,
    #[serde(rename = "challenges")]
    Challenges,
    #[serde(rename = "quests")]
    Quests,
    #[serde(rename = "guilds/achievements")]
    GuildAchievements,
    #[serde(rename = "guilds/permissions")]
    GuildPermissions,
    #[serde(rename = "skyblock/collections")]
    SkyblockCollections,
    #[serde(rename = "skyblock/skills")]
    SkyblockSkills,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Achievements,
        Resource::Challenges,
        Resource::Quests,
        Resource::GuildAchievements,
        Resource::GuildPermissions,
        Resource::SkyblockCollections,
        Resource::SkyblockSkills,
    ];

    pub fn as_path(self) -> &'static str {
        match self {
            Resource::Achievements => "achievements",
            Resource::Challenges => "challenges",
            Resource::Quests => "quests",
            Resource::GuildAchievements => "guilds/achievements",
            Resource::GuildPermissions => "guilds/permissions",
            Resource::SkyblockCollections => "skyblock/collections",
            Resource::SkyblockSkills => "skyblock/skills",
        }
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        self.as_path()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
