pub mod assets;
pub mod config;
pub mod error;
pub mod prefs;
pub mod store;

pub use config::resolve_data_dir;
pub use error::{Error, Result};
pub use prefs::DisplayStore;
pub use store::Catalog;
