//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` answers "are these credentials good", `session` owns what happens
//! to the token and profile once they are.

pub mod auth;
pub mod session;
