/// A single field-scoped validation problem, suitable for inline display
/// next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Issue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// An ordered accumulator of validation issues.
///
/// Schemas push per-field issues first, then cross-field refinement issues,
/// so the order mirrors the form layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issues {
    issues: Vec<Issue>,
}

impl Issues {
    #[must_use]
    pub fn new() -> Self {
        Issues::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(field, message));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// All messages attached to one field, in push order.
    #[must_use]
    pub fn field_messages(&self, field: &str) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.field == field)
            .map(|i| i.message.as_str())
            .collect()
    }

    /// Finishes a validation pass: yields `value` when no issue was pushed.
    ///
    /// # Errors
    ///
    /// Returns the accumulated issues when any were pushed.
    pub fn into_result<T>(self, value: T) -> Result<T, Issues> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}
