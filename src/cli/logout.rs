//! Logout command

use crate::cli::{GlobalOptions, ScreenContext};
use crate::error::Result;

/// Clear the session unconditionally. Idempotent: logging out while already
/// signed out succeeds and changes nothing.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = ScreenContext::new(opts)?;
    ctx.session.logout()?;

    println!("You have been logged out.");
    Ok(())
}
