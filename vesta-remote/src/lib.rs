pub mod client;
pub mod config;

pub use client::RemoteClient;
pub use config::RemoteConfig;
