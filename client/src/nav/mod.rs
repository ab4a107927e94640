//! Route table and the session-aware navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends call [`navigate`] with the target path and the session's token
//! presence before showing any screen; the guard alone decides between the
//! login screen and the signed-in area.

pub mod guard;
pub mod routes;

pub use guard::{Landing, Navigation, guard, navigate};
pub use routes::Route;
