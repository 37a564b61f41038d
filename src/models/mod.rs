pub mod guild;
pub mod player;
pub mod resource;
pub mod skyblock;

pub use guild::GuildLookup;
pub use player::PlayerLookup;
pub use resource::Resource;
pub use skyblock::AuctionLookup;
