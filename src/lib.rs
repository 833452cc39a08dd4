pub mod assist;
pub mod config;
#[cfg(feature = "console")]
pub mod console;
pub mod kb;
pub mod search;
pub mod session;
pub mod shared;
pub mod tests;
pub mod tickets;

pub use config::AppConfig;
pub use shared::state::AppState;
