pub mod analysis;
pub mod args;
pub mod config_loader;
pub mod distance;
pub mod encoding;
pub mod models;
pub mod projection;
pub mod stats;
