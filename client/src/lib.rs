//! # admin-client
//!
//! Session gate and REST client for the admin console backend.
//!
//! The crate owns everything with decision-making logic behind the console
//! screens: the envelope-unwrapping API client, the durable token store, the
//! session state machine, and the route guard that decides whether a screen
//! may be entered. Rendering is left to whatever front end embeds it; the
//! `admin-cli` binary is one such front end.

pub mod config;
pub mod nav;
pub mod net;
pub mod state;
pub mod util;

pub use config::ClientConfig;
pub use nav::{Navigation, Route};
pub use net::api::ApiClient;
pub use net::error::ApiError;
pub use state::auth::{Authenticator, DemoAuthenticator};
pub use state::session::{ProfileDefaults, Session, SessionGate};
pub use util::storage::{FileStorage, MemoryStorage, Storage, StorageError};
