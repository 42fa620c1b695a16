//! Point-in-time snapshots of YouTube channels fetched from the Data API v3.

pub mod config;
pub mod errors;
pub mod leaderboard;
pub mod models;
pub mod youtube;

pub use config::Config;
pub use errors::YouTubeError;
pub use models::ChannelSnapshot;
