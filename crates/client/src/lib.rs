//! Headless bout client.
//!
//! The `duel` binary is the composition root: it reads [`ClientConfig`] from
//! the environment, loads content, assembles a runtime bout and prints a
//! [`Hud`] trace followed by a JSON summary.
pub mod config;
pub mod hud;

pub use config::ClientConfig;
pub use hud::Hud;
