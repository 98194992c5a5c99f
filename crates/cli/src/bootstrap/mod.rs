mod config;
mod database;
mod logging;

pub use config::load_config;
pub use database::{init_database, verify_store};
pub use logging::init_logging;
