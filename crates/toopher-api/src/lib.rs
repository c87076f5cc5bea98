// toopher-api: Async Rust client for the Toopher two-factor authentication API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod authentications;
mod pairings;
mod signing;
mod terminals;

pub use client::{Credentials, DEFAULT_BASE_URL, ToopherApi};
pub use error::Error;
pub use models::{AuthenticationStatus, PairingStatus, TerminalRef, UserRef};
pub use transport::{TlsMode, TransportConfig, USER_AGENT};
