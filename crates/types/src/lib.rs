pub mod commands;
pub mod config;
pub mod display;
pub mod params;

pub use commands::*;
pub use config::*;
pub use display::*;
pub use params::*;
