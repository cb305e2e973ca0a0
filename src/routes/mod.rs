//! Client-side routes and the route guard
//!
//! Every screen the CLI can render maps to a route with a protection level.
//! The guard is a pure function of `(route, authenticated)`: no state, fully
//! deterministic. It is evaluated before any screen is rendered.

/// Navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Signup,
    Dashboard,
    Profile,
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// Reachable regardless of session state
    Public,
    /// Redirects to the dashboard when already authenticated
    GuestOnly,
    /// Requires an authenticated session
    Protected,
}

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the target unchanged
    Render,
    /// Navigate elsewhere instead
    Redirect(Route),
}

impl Route {
    /// Parse a route from its path, e.g. `/dashboard`.
    pub fn parse(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/dashboard" => Some(Route::Dashboard),
            "/profile" => Some(Route::Profile),
            _ => None,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
        }
    }

    /// Protection level. Root is nominally public; the guard always
    /// redirects it before protection is consulted.
    pub fn protection(&self) -> Protection {
        match self {
            Route::Root | Route::Signup => Protection::Public,
            Route::Login => Protection::GuestOnly,
            Route::Dashboard | Route::Profile => Protection::Protected,
        }
    }
}

/// Decide whether `route` may render given the session state.
pub fn guard(route: Route, authenticated: bool) -> GuardOutcome {
    if route == Route::Root {
        let landing = if authenticated { Route::Dashboard } else { Route::Login };
        return GuardOutcome::Redirect(landing);
    }

    match (route.protection(), authenticated) {
        (Protection::Protected, false) => GuardOutcome::Redirect(Route::Login),
        (Protection::GuestOnly, true) => GuardOutcome::Redirect(Route::Dashboard),
        _ => GuardOutcome::Render,
    }
}

/// Follow guard redirects until a renderable route is reached.
///
/// Terminates in at most two hops: every redirect target renders under the
/// same session state.
pub fn resolve(route: Route, authenticated: bool) -> Route {
    let mut current = route;
    loop {
        match guard(current, authenticated) {
            GuardOutcome::Render => return current,
            GuardOutcome::Redirect(next) => {
                log::debug!("guard: {} -> {}", current.path(), next.path());
                current = next;
            }
        }
    }
}
