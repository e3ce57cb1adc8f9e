use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Category / Severity
// ---------------------------------------------------------------------------

/// Where a diagnostic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The header value is not well-formed.
    Syntax,
    /// The header parses but violates a preload-list requirement.
    HeaderRequirement,
    /// The response carries the wrong number of HSTS headers.
    Response,
    /// The checker was handed a record no parse can produce.
    Internal,
}

/// Which sequence of an [`Issues`] value a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Category {
    /// Human-readable prefix used when rendering a diagnostic.
    pub fn label(self, severity: Severity) -> &'static str {
        match (self, severity) {
            (Self::Syntax, Severity::Error) => "Syntax error",
            (Self::Syntax, Severity::Warning) => "Syntax warning",
            (Self::HeaderRequirement, Severity::Error) => "Header requirement error",
            (Self::HeaderRequirement, Severity::Warning) => "Header FYI",
            (Self::Response, Severity::Error) => "Response error",
            (Self::Response, Severity::Warning) => "Response warning",
            (Self::Internal, Severity::Error) => "Internal error",
            (Self::Internal, Severity::Warning) => "Internal warning",
        }
    }
}

// ---------------------------------------------------------------------------
// Issue
// ---------------------------------------------------------------------------

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Issue {
    pub category: Category,
    pub message: String,
}

impl Issue {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(Category::Syntax, message)
    }

    pub fn requirement(message: impl Into<String>) -> Self {
        Self::new(Category::HeaderRequirement, message)
    }

    pub fn response(message: impl Into<String>) -> Self {
        Self::new(Category::Response, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Category::Internal, message)
    }

    /// Render as `<label>: <message>` for the given severity.
    pub fn render(&self, severity: Severity) -> String {
        format!("{}: {}", self.category.label(severity), self.message)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

/// Ordered errors and warnings accumulated by a parse or check.
///
/// Both sequences are always present; "no problems" is two empty vectors.
/// Equality compares both sequences element-wise, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issues {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error in place.
    pub fn add_error(&mut self, issue: Issue) -> &mut Self {
        self.errors.push(issue);
        self
    }

    /// Append a warning in place.
    pub fn add_warning(&mut self, issue: Issue) -> &mut Self {
        self.warnings.push(issue);
        self
    }

    /// By-value form of [`add_error`](Self::add_error), handy for building
    /// expected values.
    pub fn with_error(mut self, issue: Issue) -> Self {
        self.errors.push(issue);
        self
    }

    /// By-value form of [`add_warning`](Self::add_warning).
    pub fn with_warning(mut self, issue: Issue) -> Self {
        self.warnings.push(issue);
        self
    }

    /// Errors of `self` followed by errors of `other`, likewise for warnings.
    /// Nothing is deduplicated.
    pub fn append(mut self, other: Issues) -> Issues {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors rendered with their category labels, in order.
    pub fn rendered_errors(&self) -> Vec<String> {
        self.errors.iter().map(|i| i.render(Severity::Error)).collect()
    }

    /// Warnings rendered with their category labels, in order.
    pub fn rendered_warnings(&self) -> Vec<String> {
        self.warnings
            .iter()
            .map(|i| i.render(Severity::Warning))
            .collect()
    }
}
