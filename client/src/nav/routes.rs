//! Console route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Every screen the console knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    /// Layout root. Never rendered on its own; redirects to the dashboard.
    Home,
    Dashboard,
    Users,
    Data,
    Products,
    NotFound,
}

impl Route {
    pub const ALL: [Self; 6] = [Self::Login, Self::Home, Self::Dashboard, Self::Users, Self::Data, Self::Products];

    /// Match a location against the table. Query, fragment, and a trailing
    /// slash are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = normalize_path(path);
        Self::ALL
            .into_iter()
            .find(|route| route.path() == Some(path))
            .unwrap_or(Self::NotFound)
    }

    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Login => Some(LOGIN_PATH),
            Self::Home => Some(HOME_PATH),
            Self::Dashboard => Some(DASHBOARD_PATH),
            Self::Users => Some("/users"),
            Self::Data => Some("/data"),
            Self::Products => Some("/products"),
            Self::NotFound => None,
        }
    }

    /// Screen heading shown in the console chrome.
    #[must_use]
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("仪表盘"),
            Self::Users => Some("用户管理"),
            Self::Data => Some("数据管理"),
            Self::Products => Some("商品管理"),
            Self::Login | Self::Home | Self::NotFound => None,
        }
    }

    /// Static redirect declared by the table itself.
    #[must_use]
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Home => Some(DASHBOARD_PATH),
            _ => None,
        }
    }
}

/// Strip query, fragment, and any trailing slash. The root stays `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
