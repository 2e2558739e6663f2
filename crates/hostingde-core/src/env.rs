//! Environment variable lookup
//!
//! The resolver never touches `std::env` directly. It reads through an
//! [`EnvironmentReader`], so callers decide whether the process environment
//! or a fixed map is consulted.

use std::collections::HashMap;
use std::fmt;

/// Key-value lookup over environment variables
///
/// Implementations must be side-effect free: the same name yields the same
/// answer for the duration of one configure cycle.
pub trait EnvironmentReader: Send + Sync {
    /// Look up a variable, `None` when unset
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment
///
/// Unset and non-UTF-8 variables both read as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentReader for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory environment
///
/// Useful for tests and for embedding the provider in a process whose own
/// environment should not leak into the configuration.
///
/// # Example
///
/// ```rust
/// use hostingde_core::env::{EnvironmentReader, StaticEnv};
///
/// let env = StaticEnv::new().with("HOSTINGDE_AUTH_TOKEN", "token");
/// assert_eq!(env.var("HOSTINGDE_AUTH_TOKEN").as_deref(), Some("token"));
/// assert_eq!(env.var("HOSTINGDE_BASE_URL"), None);
/// ```
#[derive(Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvironmentReader for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (name, value) in iter {
            env.set(name, value);
        }
        env
    }
}

// Values may hold credentials, so only the names are shown
impl fmt::Debug for StaticEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.vars.keys().collect();
        names.sort();
        f.debug_struct("StaticEnv").field("vars", &names).finish()
    }
}
