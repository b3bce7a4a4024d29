use crate::classify::Label;

/// One classification outcome, immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Categorical label.
    pub label: Label,
    /// Classifier confidence in `[0, 1]` accompanying the label.
    pub probability: f64,
    /// Normalized human-readable label for the status display
    /// (e.g. `"neutral or other"` for a raw `"Neutral_Or_Other"`).
    pub text: String,
}
