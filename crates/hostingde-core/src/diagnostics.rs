//! Attribute-scoped diagnostics
//!
//! Configuration problems are collected rather than raised: a configure cycle
//! appends every independent finding to a [`Diagnostics`] value and returns it
//! to the host, which can then point at the exact offending attribute.
//!
//! Nothing added here should ever carry the auth token. Details name the
//! attribute and the environment variable, never the value.

use serde::Serialize;
use std::fmt;

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the configure cycle
    Error,
    /// Reported to the operator, resolution still succeeds
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Path to a configuration attribute (e.g. `auth_token`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AttributePath(Vec<String>);

impl AttributePath {
    /// Path to a top-level attribute
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// The individual steps of the path, outermost first
    pub fn steps(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A single error or warning record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Error or warning
    pub severity: Severity,
    /// Offending attribute, `None` for payload-level problems
    pub path: Option<AttributePath>,
    /// One-line summary
    pub summary: String,
    /// Remediation guidance
    pub detail: String,
}

impl Diagnostic {
    /// Create an error diagnostic without an attribute path
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: None,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Create a warning diagnostic without an attribute path
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: None,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Attach an attribute path
    pub fn with_path(mut self, path: AttributePath) -> Self {
        self.path = Some(path);
        self
    }

    /// Whether this record fails the configure cycle
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether this record is scoped to the given top-level attribute
    pub fn is_for(&self, attribute: &str) -> bool {
        self.path
            .as_ref()
            .and_then(|p| p.steps().first())
            .is_some_and(|step| step == attribute)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if let Some(ref path) = self.path {
            write!(f, " (attribute \"{}\")", path)?;
        }
        write!(f, ": {}", self.detail)
    }
}

/// Append-only collection of diagnostics
///
/// A collection "has failed" as soon as it holds one error, no matter how many
/// warnings accompany it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Append every diagnostic from another collection
    pub fn append(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Append a payload-level error
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    /// Append an error scoped to an attribute
    pub fn add_attribute_error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::error(summary, detail).with_path(path));
    }

    /// Append a warning scoped to an attribute
    pub fn add_attribute_warning(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::warning(summary, detail).with_path(path));
    }

    /// Whether any error-severity record is present
    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    /// Number of error-severity records
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Error-severity records, in insertion order
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.is_error())
    }

    /// Warning-severity records, in insertion order
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| !d.is_error())
    }

    /// Records scoped to the given top-level attribute
    pub fn for_attribute<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.0.iter().filter(move |d| d.is_for(attribute))
    }

    /// Iterate over all records
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no record has been added
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diags = Diagnostics::new();
        diags.add_attribute_warning(AttributePath::root("base_url"), "Insecure", "use https");

        assert!(!diags.has_error());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.warnings().count(), 1);
    }

    #[test]
    fn test_single_error_fails_collection() {
        let mut diags = Diagnostics::new();
        diags.add_attribute_warning(AttributePath::root("base_url"), "Insecure", "use https");
        diags.add_attribute_error(AttributePath::root("auth_token"), "Missing", "set it");

        assert!(diags.has_error());
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.for_attribute("auth_token").count(), 1);
        assert_eq!(diags.for_attribute("account_id").count(), 0);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut first = Diagnostics::new();
        first.add_error("first", "");
        let mut second = Diagnostics::new();
        second.add_error("second", "");

        first.append(second);

        let summaries: Vec<_> = first.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, vec!["first", "second"]);
    }

    #[test]
    fn test_display_includes_path() {
        let diag = Diagnostic::error("Missing token", "Set it.")
            .with_path(AttributePath::root("auth_token"));

        assert_eq!(
            diag.to_string(),
            "error: Missing token (attribute \"auth_token\"): Set it."
        );
    }

    #[test]
    fn test_serializes_as_list() {
        let mut diags = Diagnostics::new();
        diags.add_attribute_error(AttributePath::root("auth_token"), "Missing", "set it");

        let json = serde_json::to_value(&diags).unwrap();
        assert_eq!(json[0]["severity"], "error");
        assert_eq!(json[0]["path"][0], "auth_token");
    }
}
