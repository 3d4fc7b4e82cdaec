//! Append-only diagnostics sink surfaced to the orchestration layer

/// Fixed trailer appended to every diagnostic detail produced by this crate.
pub const REPORT_TRAILER: &str = "Please report this issue to the provider developers.";

/// Single failure record: short summary plus operator-facing detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

/// Accumulator of [`Diagnostic`] entries. Pure append: no dedup or merge,
/// every failure adds its own entry. Callers issuing concurrent requests
/// against the same sink must serialize appends themselves.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.entries.push(Diagnostic {
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&Diagnostic> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_are_independent() {
        let mut diags = Diagnostics::new();
        diags.add_error("The get rest request failed", "Code: 400");
        diags.add_error("The get rest request failed", "Code: 400");

        // Identical failures still append twice: the sink never merges.
        assert_eq!(diags.len(), 2);
        assert!(diags.has_errors());
    }

    #[test]
    fn test_last_entry() {
        let mut diags = Diagnostics::new();
        assert!(diags.last().is_none());

        diags.add_error("first", "a");
        diags.add_error("second", "b");
        assert_eq!(diags.last().unwrap().summary, "second");
    }
}
