//! Landing page (`/`)
//!
//! The demo site's front page: a heading, an "Available Examples"
//! header, and the catalog of example links.

use crate::driver::{probe_wait, PageDriver, PageResult};
use crate::DEFAULT_WAIT;

pub const HEADING: &str = ".heading";
pub const HEADER: &str = "h2";
pub const EXAMPLE_LINKS: &str = "ul li a";

/// The link text opening the login example
pub const LOGIN_EXAMPLE: &str = "Form Authentication";

/// Page object for the landing page
pub struct HomePage<'d, D: PageDriver> {
    driver: &'d mut D,
}

impl<'d, D: PageDriver> HomePage<'d, D> {
    pub fn new(driver: &'d mut D) -> Self {
        Self { driver }
    }

    pub async fn open(&mut self) -> PageResult<()> {
        self.driver.navigate("/").await
    }

    /// Probe: the banner heading is visible within the default wait.
    pub async fn is_loaded(&mut self) -> PageResult<bool> {
        probe_wait(self.driver, HEADING, DEFAULT_WAIT).await
    }

    pub async fn heading(&self) -> PageResult<String> {
        self.driver.text(HEADING).await
    }

    pub async fn header_text(&self) -> PageResult<String> {
        self.driver.text(HEADER).await
    }

    /// Text of every example link in the catalog.
    pub async fn available_links(&self) -> PageResult<Vec<String>> {
        self.driver.texts(EXAMPLE_LINKS).await
    }

    pub async fn example_count(&self) -> PageResult<usize> {
        Ok(self.available_links().await?.len())
    }

    pub async fn has_example(&self, name: &str) -> PageResult<bool> {
        Ok(self.available_links().await?.iter().any(|link| link == name))
    }

    /// Click the example link with the given text.
    pub async fn click_example(&mut self, name: &str) -> PageResult<()> {
        self.driver.click(&example_selector(name)).await
    }

    /// Open the Form Authentication example.
    pub async fn open_login(&mut self) -> PageResult<()> {
        self.click_example(LOGIN_EXAMPLE).await
    }

    pub fn current_path(&self) -> String {
        self.driver.current_path()
    }
}

fn example_selector(name: &str) -> String {
    format!("a:has-text(\"{name}\")")
}
