pub mod guild;
pub mod network;
pub mod player;
pub mod resources;
pub mod skyblock;

pub use skyblock::Skyblock;
