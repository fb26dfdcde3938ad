pub mod config_store;
pub mod path_utils;

pub use config_store::ConfigStore;
