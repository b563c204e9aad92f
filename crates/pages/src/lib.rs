//! Page objects for the demo web application
//!
//! Each page wraps a borrowed [`PageDriver`] with the selectors and
//! actions of one screen. Probe methods report absence as data
//! (`Ok(None)` / `Ok(false)`); command methods propagate every driver
//! failure.

pub mod driver;
pub mod home;
pub mod login;
pub mod secure;

pub use driver::{DriverError, PageDriver, PageResult};
pub use home::HomePage;
pub use login::LoginPage;
pub use secure::SecurePage;

use std::time::Duration;

/// Default wait applied by `is_loaded`-style probes
pub const DEFAULT_WAIT: Duration = Duration::from_secs(5);

/// Normalize a flash banner: drop the close glyph, collapse the markup
/// newlines and surrounding whitespace.
pub(crate) fn clean_flash(raw: &str) -> String {
    raw.replace('×', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
