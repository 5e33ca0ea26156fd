// eventdesk-api: Async Rust client for the event management REST service

pub mod client;
pub mod envelope;
pub mod error;
pub mod transport;
pub mod types;

pub use client::EventsClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
