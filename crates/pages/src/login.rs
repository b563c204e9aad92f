//! Login page (`/login`)

use crate::driver::{probe_text, probe_visible, probe_wait, PageDriver, PageResult};
use crate::{clean_flash, DEFAULT_WAIT};

pub const USERNAME_INPUT: &str = "#username";
pub const PASSWORD_INPUT: &str = "#password";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const FLASH: &str = "#flash";
pub const HEADING: &str = "h2";

/// Page object for the login form
pub struct LoginPage<'d, D: PageDriver> {
    driver: &'d mut D,
}

impl<'d, D: PageDriver> LoginPage<'d, D> {
    pub fn new(driver: &'d mut D) -> Self {
        Self { driver }
    }

    pub async fn open(&mut self) -> PageResult<()> {
        self.driver.navigate("/login").await
    }

    /// Probe: the heading is visible within the default wait.
    pub async fn is_loaded(&mut self) -> PageResult<bool> {
        probe_wait(self.driver, HEADING, DEFAULT_WAIT).await
    }

    pub async fn heading(&self) -> PageResult<String> {
        self.driver.text(HEADING).await
    }

    /// Probe: all three form controls are visible.
    pub async fn is_form_displayed(&self) -> PageResult<bool> {
        Ok(self.driver.is_visible(USERNAME_INPUT).await?
            && self.driver.is_visible(PASSWORD_INPUT).await?
            && self.driver.is_visible(SUBMIT_BUTTON).await?)
    }

    pub async fn fill_username(&mut self, username: &str) -> PageResult<()> {
        self.driver.fill(USERNAME_INPUT, username).await
    }

    pub async fn fill_password(&mut self, password: &str) -> PageResult<()> {
        self.driver.fill(PASSWORD_INPUT, password).await
    }

    pub async fn submit(&mut self) -> PageResult<()> {
        self.driver.click(SUBMIT_BUTTON).await
    }

    /// Fill both credentials and submit the form.
    pub async fn login(&mut self, username: &str, password: &str) -> PageResult<()> {
        self.fill_username(username).await?;
        self.fill_password(password).await?;
        self.submit().await
    }

    /// The flash banner, cleaned; `Ok(None)` when no banner is shown.
    pub async fn flash_message(&self) -> PageResult<Option<String>> {
        let raw = probe_text(self.driver, FLASH).await?;
        Ok(raw.map(|text| clean_flash(&text)))
    }

    pub async fn is_flash_visible(&self) -> PageResult<bool> {
        probe_visible(self.driver, FLASH).await
    }

    pub fn current_path(&self) -> String {
        self.driver.current_path()
    }
}
