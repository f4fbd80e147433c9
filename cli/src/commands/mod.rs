//! CLI command implementations

pub mod params;
pub mod sweep;

pub use params::params_command;
pub use sweep::sweep_command;
