//! Secure area page (`/secure`), reached after a successful login

use crate::driver::{probe_text, probe_visible, probe_wait, PageDriver, PageResult};
use crate::{clean_flash, DEFAULT_WAIT};

pub const HEADING: &str = "h2";
pub const SUB_HEADING: &str = "h4";
pub const FLASH: &str = "#flash";
pub const LOGOUT_LINK: &str = "a[href=\"/logout\"]";

/// Page object for the secure area
pub struct SecurePage<'d, D: PageDriver> {
    driver: &'d mut D,
}

impl<'d, D: PageDriver> SecurePage<'d, D> {
    pub fn new(driver: &'d mut D) -> Self {
        Self { driver }
    }

    /// Probe: the heading is visible within the default wait.
    pub async fn is_loaded(&mut self) -> PageResult<bool> {
        probe_wait(self.driver, HEADING, DEFAULT_WAIT).await
    }

    pub async fn heading(&self) -> PageResult<String> {
        self.driver.text(HEADING).await
    }

    pub async fn sub_heading(&self) -> PageResult<String> {
        self.driver.text(SUB_HEADING).await
    }

    /// The flash banner, cleaned; `Ok(None)` when no banner is shown.
    pub async fn flash_message(&self) -> PageResult<Option<String>> {
        let raw = probe_text(self.driver, FLASH).await?;
        Ok(raw.map(|text| clean_flash(&text)))
    }

    pub async fn is_logout_visible(&self) -> PageResult<bool> {
        probe_visible(self.driver, LOGOUT_LINK).await
    }

    /// Click the logout link; fails when the link is not present.
    pub async fn logout(&mut self) -> PageResult<()> {
        self.driver.click(LOGOUT_LINK).await
    }

    pub fn current_path(&self) -> String {
        self.driver.current_path()
    }
}
