pub mod api;
pub mod models;

pub use api::FtcClient;
pub use models::TournamentLevel;
