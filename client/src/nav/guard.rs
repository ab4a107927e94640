//! Navigation guard consulted before every screen change.
//!
//! The decision depends only on the destination and whether a token is
//! present. Presence is trusted; nothing here inspects the token.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{HOME_PATH, LOGIN_PATH, Route, normalize_path};

/// Bound on chained redirects while resolving a landing screen.
const MAX_HOPS: usize = 4;

/// Outcome of a single guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

/// Where a navigation attempt finally lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landing {
    pub route: Route,
    /// Normalized path of the landing screen.
    pub path: String,
    /// `true` when the guard or the route table moved the user elsewhere.
    pub redirected: bool,
}

/// Decide whether `destination` may be entered.
///
/// - signed in and heading to `/login` → redirect to `/`
/// - signed out and heading anywhere else → redirect to `/login`
/// - otherwise → allow
#[must_use]
pub fn guard(destination: &str, has_token: bool) -> Navigation {
    let to_login = normalize_path(destination) == LOGIN_PATH;
    match (to_login, has_token) {
        (true, true) => Navigation::Redirect(HOME_PATH),
        (false, false) => Navigation::Redirect(LOGIN_PATH),
        _ => Navigation::Allow,
    }
}

/// Apply the guard and the table's own redirects until a screen is reached.
#[must_use]
pub fn navigate(destination: &str, has_token: bool) -> Landing {
    let mut path = normalize_path(destination);
    let mut redirected = false;

    for _ in 0..MAX_HOPS {
        if let Navigation::Redirect(to) = guard(path, has_token) {
            path = to;
            redirected = true;
            continue;
        }
        let route = Route::from_path(path);
        match route.redirect() {
            Some(to) => {
                path = to;
                redirected = true;
            }
            None => return Landing { route, path: path.to_owned(), redirected },
        }
    }

    tracing::warn!(%destination, "navigation did not settle, stopping at last hop");
    Landing { route: Route::from_path(path), path: path.to_owned(), redirected }
}
