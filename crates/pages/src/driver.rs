//! Browser-driving capability
//!
//! The suite never talks to a browser library directly. Page objects
//! consume this trait; any automation backend, or an in-memory double,
//! supplies the implementation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a [`PageDriver`] implementation
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("No element matches selector '{selector}'")]
    ElementNotFound { selector: String },

    #[error("Timed out after {waited:?} waiting for '{selector}'")]
    Timeout { selector: String, waited: Duration },

    #[error("Navigation to '{path}' failed: {reason}")]
    Navigation { path: String, reason: String },

    #[error("Driver backend error: {0}")]
    Backend(String),
}

/// Result type alias for driver-backed page operations
pub type PageResult<T> = std::result::Result<T, DriverError>;

/// Browser actions page objects are allowed to perform
#[async_trait]
pub trait PageDriver: Send {
    /// Load the page at `path`, relative to the application root.
    async fn navigate(&mut self, path: &str) -> PageResult<()>;

    /// Replace the text of the input matching `selector`.
    async fn fill(&mut self, selector: &str, text: &str) -> PageResult<()>;

    /// Click the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> PageResult<()>;

    /// Text content of the first element matching `selector`.
    async fn text(&self, selector: &str) -> PageResult<String>;

    /// Text content of every element matching `selector`.
    async fn texts(&self, selector: &str) -> PageResult<Vec<String>>;

    /// Whether at least one matching element is currently visible.
    async fn is_visible(&self, selector: &str) -> PageResult<bool>;

    /// Block until `selector` is visible, up to `timeout`.
    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> PageResult<()>;

    /// Path portion of the current location.
    fn current_path(&self) -> String;
}

/// `true` for outcomes a probe reports as absence instead of failure.
pub(crate) fn is_absence(err: &DriverError) -> bool {
    matches!(
        err,
        DriverError::ElementNotFound { .. } | DriverError::Timeout { .. }
    )
}

/// Wait-probe: absence maps to `Ok(false)`, real failures propagate.
pub(crate) async fn probe_wait<D: PageDriver>(
    driver: &mut D,
    selector: &str,
    timeout: Duration,
) -> PageResult<bool> {
    match driver.wait_for(selector, timeout).await {
        Ok(()) => Ok(true),
        Err(e) if is_absence(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Text-probe: absence maps to `Ok(None)`, real failures propagate.
pub(crate) async fn probe_text<D: PageDriver>(
    driver: &D,
    selector: &str,
) -> PageResult<Option<String>> {
    match driver.text(selector).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if is_absence(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Visibility-probe: absence maps to `Ok(false)`, real failures propagate.
pub(crate) async fn probe_visible<D: PageDriver>(driver: &D, selector: &str) -> PageResult<bool> {
    match driver.is_visible(selector).await {
        Ok(visible) => Ok(visible),
        Err(e) if is_absence(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! Minimal scripted driver for page-object unit tests.

    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    pub struct StubDriver {
        pub path: String,
        pub elements: HashMap<String, String>,
        pub fail_all: bool,
        pub clicked: Vec<String>,
        pub filled: Vec<(String, String)>,
    }

    impl StubDriver {
        pub fn with_elements(elements: &[(&str, &str)]) -> Self {
            Self {
                elements: elements
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_all: true,
                ..Self::default()
            }
        }

        fn backend_err() -> DriverError {
            DriverError::Backend("stub offline".to_string())
        }

        fn lookup(&self, selector: &str) -> PageResult<String> {
            if self.fail_all {
                return Err(Self::backend_err());
            }
            self.elements
                .get(selector)
                .cloned()
                .ok_or_else(|| DriverError::ElementNotFound {
                    selector: selector.to_string(),
                })
        }
    }

    #[async_trait]
    impl PageDriver for StubDriver {
        async fn navigate(&mut self, path: &str) -> PageResult<()> {
            if self.fail_all {
                return Err(Self::backend_err());
            }
            self.path = path.to_string();
            Ok(())
        }

        async fn fill(&mut self, selector: &str, text: &str) -> PageResult<()> {
            self.lookup(selector)?;
            self.filled.push((selector.to_string(), text.to_string()));
            Ok(())
        }

        async fn click(&mut self, selector: &str) -> PageResult<()> {
            self.lookup(selector)?;
            self.clicked.push(selector.to_string());
            Ok(())
        }

        async fn text(&self, selector: &str) -> PageResult<String> {
            self.lookup(selector)
        }

        async fn texts(&self, selector: &str) -> PageResult<Vec<String>> {
            if self.fail_all {
                return Err(Self::backend_err());
            }
            Ok(self.elements.get(selector).cloned().into_iter().collect())
        }

        async fn is_visible(&self, selector: &str) -> PageResult<bool> {
            if self.fail_all {
                return Err(Self::backend_err());
            }
            Ok(self.elements.contains_key(selector))
        }

        async fn wait_for(&mut self, selector: &str, timeout: Duration) -> PageResult<()> {
            match self.is_visible(selector).await? {
                true => Ok(()),
                false => Err(DriverError::Timeout {
                    selector: selector.to_string(),
                    waited: timeout,
                }),
            }
        }

        fn current_path(&self) -> String {
            self.path.clone()
        }
    }
}
