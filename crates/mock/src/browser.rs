//! Scripted browser double for the demo web application
//!
//! Implements [`PageDriver`] over an in-memory model of the auth demo
//! site: the landing page with its example catalog, the login form,
//! and the secure area. Flash banners carry the site's raw newlines
//! and trailing close glyph so page-object cleanup is exercised.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use placebo_pages::{DriverError, PageDriver, PageResult};

/// The one accepted username
pub const VALID_USERNAME: &str = "tomsmith";
/// The one accepted password
pub const VALID_PASSWORD: &str = "SuperSecretPassword!";

/// Every example link on the landing page, with its target path.
const EXAMPLES: &[(&str, &str)] = &[
    ("A/B Testing", "/abtest"),
    ("Add/Remove Elements", "/add_remove_elements/"),
    ("Basic Auth", "/basic_auth"),
    ("Broken Images", "/broken_images"),
    ("Challenging DOM", "/challenging_dom"),
    ("Checkboxes", "/checkboxes"),
    ("Context Menu", "/context_menu"),
    ("Digest Authentication", "/digest_auth"),
    ("Disappearing Elements", "/disappearing_elements"),
    ("Drag and Drop", "/drag_and_drop"),
    ("Dropdown", "/dropdown"),
    ("Dynamic Content", "/dynamic_content"),
    ("Dynamic Controls", "/dynamic_controls"),
    ("Dynamic Loading", "/dynamic_loading"),
    ("Entry Ad", "/entry_ad"),
    ("Exit Intent", "/exit_intent"),
    ("File Download", "/download"),
    ("File Upload", "/upload"),
    ("Floating Menu", "/floating_menu"),
    ("Forgot Password", "/forgot_password"),
    ("Form Authentication", "/login"),
    ("Frames", "/frames"),
    ("Geolocation", "/geolocation"),
    ("Horizontal Slider", "/horizontal_slider"),
    ("Hovers", "/hovers"),
    ("Infinite Scroll", "/infinite_scroll"),
    ("Inputs", "/inputs"),
    ("JQuery UI Menus", "/jqueryui/menu"),
    ("JavaScript Alerts", "/javascript_alerts"),
    ("JavaScript onload event error", "/javascript_error"),
    ("Key Presses", "/key_presses"),
    ("Large & Deep DOM", "/large"),
    ("Multiple Windows", "/windows"),
    ("Nested Frames", "/nested_frames"),
    ("Notification Messages", "/notification_message"),
    ("Redirect Link", "/redirector"),
    ("Secure File Download", "/download_secure"),
    ("Shadow DOM", "/shadowdom"),
    ("Shifting Content", "/shifting_content"),
    ("Slow Resources", "/slow"),
    ("Sortable Data Tables", "/tables"),
    ("Status Codes", "/status_codes"),
    ("Typos", "/typos"),
    ("WYSIWYG Editor", "/tinymce"),
];

/// In-memory browser for the demo site
pub struct DemoBrowser {
    path: String,
    inputs: HashMap<String, String>,
    flash: Option<String>,
    logged_in: bool,
}

impl Default for DemoBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoBrowser {
    pub fn new() -> Self {
        Self {
            path: "/".to_string(),
            inputs: HashMap::new(),
            flash: None,
            logged_in: false,
        }
    }

    fn load(&mut self, path: &str) {
        self.path = path.to_string();
        self.inputs.clear();
    }

    fn set_flash(&mut self, text: &str) {
        self.flash = Some(format!("\n    {text}\n    ×\n"));
    }

    fn submit_login(&mut self) {
        let username = self.inputs.get("#username").cloned().unwrap_or_default();
        let password = self.inputs.get("#password").cloned().unwrap_or_default();
        if username == VALID_USERNAME && password == VALID_PASSWORD {
            self.logged_in = true;
            self.load("/secure");
            self.set_flash("You logged into a secure area!");
        } else if username != VALID_USERNAME {
            self.load("/login");
            self.set_flash("Your username is invalid!");
        } else {
            self.load("/login");
            self.set_flash("Your password is invalid!");
        }
    }

    /// Element lookup for the current page; `None` when absent.
    fn resolve(&self, selector: &str) -> Option<String> {
        match (self.path.as_str(), selector) {
            (_, "#flash") => self.flash.clone(),
            ("/", ".heading") => Some("Welcome to the-internet".to_string()),
            ("/", "h2") => Some("Available Examples".to_string()),
            ("/login", "h2") => Some("Login Page".to_string()),
            ("/login", "#username") | ("/login", "#password") => {
                Some(self.inputs.get(selector).cloned().unwrap_or_default())
            }
            ("/login", "button[type=\"submit\"]") => Some("Login".to_string()),
            ("/secure", "h2") => Some("Secure Area".to_string()),
            ("/secure", "h4") => Some(
                "Welcome to the Secure Area. When you are done click logout below.".to_string(),
            ),
            ("/secure", "a[href=\"/logout\"]") => Some("Logout".to_string()),
            ("/", _) => self
                .example_from_selector(selector)
                .map(|(name, _)| name.to_string()),
            _ => None,
        }
    }

    fn example_from_selector(&self, selector: &str) -> Option<(&'static str, &'static str)> {
        let name = selector
            .strip_prefix("a:has-text(\"")?
            .strip_suffix("\")")?;
        EXAMPLES.iter().copied().find(|(n, _)| *n == name)
    }
}

#[async_trait]
impl PageDriver for DemoBrowser {
    async fn navigate(&mut self, path: &str) -> PageResult<()> {
        self.flash = None;
        if path == "/secure" && !self.logged_in {
            self.load("/login");
            self.set_flash("You must login to view the secure area!");
        } else {
            self.load(path);
        }
        Ok(())
    }

    async fn fill(&mut self, selector: &str, text: &str) -> PageResult<()> {
        if self.resolve(selector).is_none() {
            return Err(DriverError::ElementNotFound {
                selector: selector.to_string(),
            });
        }
        self.inputs.insert(selector.to_string(), text.to_string());
        Ok(())
    }

    async fn click(&mut self, selector: &str) -> PageResult<()> {
        if self.resolve(selector).is_none() {
            return Err(DriverError::ElementNotFound {
                selector: selector.to_string(),
            });
        }
        match (self.path.as_str(), selector) {
            ("/login", "button[type=\"submit\"]") => self.submit_login(),
            ("/secure", "a[href=\"/logout\"]") => {
                self.logged_in = false;
                self.load("/login");
                self.set_flash("You logged out of the secure area!");
            }
            ("/", _) => {
                if let Some((_, target)) = self.example_from_selector(selector) {
                    self.flash = None;
                    self.load(target);
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn text(&self, selector: &str) -> PageResult<String> {
        self.resolve(selector)
            .ok_or_else(|| DriverError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    async fn texts(&self, selector: &str) -> PageResult<Vec<String>> {
        if self.path == "/" && selector == "ul li a" {
            return Ok(EXAMPLES.iter().map(|(name, _)| name.to_string()).collect());
        }
        Ok(self.resolve(selector).into_iter().collect())
    }

    async fn is_visible(&self, selector: &str) -> PageResult<bool> {
        Ok(self.resolve(selector).is_some())
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> PageResult<()> {
        // no real clocks in the double: resolve now or report the timeout
        if self.resolve(selector).is_some() {
            Ok(())
        } else {
            Err(DriverError::Timeout {
                selector: selector.to_string(),
                waited: timeout,
            })
        }
    }

    fn current_path(&self) -> String {
        self.path.clone()
    }
}
