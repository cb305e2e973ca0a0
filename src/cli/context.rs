//! Screen execution context
//!
//! Provides a unified context for screen handlers, eliminating boilerplate
//! for session restore, guard evaluation, and client initialization.

use colored::Colorize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::AuraFlowClient;
use crate::error::{ConfigError, Result};
use crate::routes::{self, GuardOutcome, Route};
use crate::session::SessionStore;

/// Context for screen execution containing session, format, and options.
pub struct ScreenContext {
    /// Restored session
    pub session: SessionStore,
    /// Output format preference
    pub format: OutputFormat,
    opts: GlobalOptions,
}

impl ScreenContext {
    /// Restore the session from the config file and capture runtime options.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let session = SessionStore::restore(opts.config_ref())?;
        Ok(Self {
            session,
            format: opts.format,
            opts: opts.clone(),
        })
    }

    /// Create an API client against the configured host.
    pub fn client(&self) -> Result<AuraFlowClient> {
        AuraFlowClient::with_host(self.opts.api_host.clone())
    }

    /// Run `route` through the guard, announcing any redirect, and return
    /// the route that should actually render.
    pub fn navigate(&self, route: Route) -> Route {
        let resolved = routes::resolve(route, self.session.is_authenticated());
        if resolved != route {
            println!(
                "{}",
                format!("→ {} redirected to {}", route.path(), resolved.path()).dimmed()
            );
        }
        resolved
    }

    /// Require that `route` may render for the current session.
    ///
    /// A guard redirect on a protected screen means the user is not signed
    /// in; the screen is never rendered.
    pub fn authorize(&self, route: Route) -> Result<()> {
        match routes::guard(route, self.session.is_authenticated()) {
            GuardOutcome::Render => Ok(()),
            GuardOutcome::Redirect(_) => Err(ConfigError::NotLoggedIn.into()),
        }
    }

    /// The session token, erroring when not signed in.
    pub fn require_token(&self) -> Result<String> {
        self.session
            .state()
            .token()
            .map(String::from)
            .ok_or_else(|| ConfigError::NotLoggedIn.into())
    }
}
