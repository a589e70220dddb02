//! Route table and navigation decisions.

use forno_auth::{AccessDecision, Role, SessionState, check_access};

/// Every view of the back-office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Unauthorized,
    Dashboard,
    NewOrder,
    Menu,
    Orders,
    Customers,
    Reports,
    StoreSettings,
    SuperAdmin,
    NotFound,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected { required_role: Option<Role> },
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::Home,
        Route::Login,
        Route::Unauthorized,
        Route::Dashboard,
        Route::NewOrder,
        Route::Menu,
        Route::Orders,
        Route::Customers,
        Route::Reports,
        Route::StoreSettings,
        Route::SuperAdmin,
        Route::NotFound,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Unauthorized => "/unauthorized",
            Route::Dashboard => "/dashboard",
            Route::NewOrder => "/new-order",
            Route::Menu => "/menu",
            Route::Orders => "/orders",
            Route::Customers => "/customers",
            Route::Reports => "/reports",
            Route::StoreSettings => "/store-settings",
            Route::SuperAdmin => "/super-admin",
            Route::NotFound => "/404",
        }
    }

    /// Resolve a request path; query string, fragment and a trailing slash
    /// are ignored. Unknown paths map to [`Route::NotFound`].
    pub fn from_path(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Route::ALL
            .into_iter()
            .filter(|r| *r != Route::NotFound)
            .find(|r| r.path() == normalized)
            .unwrap_or(Route::NotFound)
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Home | Route::Login | Route::Unauthorized | Route::NotFound => Access::Public,
            Route::SuperAdmin => Access::Protected {
                required_role: Some(Role::SuperAdmin),
            },
            Route::StoreSettings => Access::Protected {
                required_role: Some(Role::Admin),
            },
            Route::Dashboard
            | Route::NewOrder
            | Route::Menu
            | Route::Orders
            | Route::Customers
            | Route::Reports => Access::Protected { required_role: None },
        }
    }
}

/// What the shell should do for a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
    Loading,
}

/// Resolve `path` and run the access guard for protected routes.
pub fn navigate(session: &SessionState, path: &str) -> Navigation {
    let route = Route::from_path(path);
    let required_role = match route.access() {
        Access::Public => return Navigation::Render(route),
        Access::Protected { required_role } => required_role,
    };

    match check_access(session, required_role) {
        AccessDecision::Allow => Navigation::Render(route),
        AccessDecision::Loading => Navigation::Loading,
        AccessDecision::RedirectLogin => Navigation::Redirect(Route::Login),
        AccessDecision::RedirectUnauthorized(_) => Navigation::Redirect(Route::Unauthorized),
    }
}
