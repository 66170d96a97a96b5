//! Logging initialization shared by the binaries and tests of this
//! workspace. Everything observable about a deployment goes through
//! `tracing`, this crate only decides where events end up.
pub mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
