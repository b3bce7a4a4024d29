/// Classifier output category.
///
/// The service's label vocabulary is open-ended; anything that is not
/// drowsy or focused is carried as [`Other`](Label::Other) and plotted in
/// the neutral color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The driver looks drowsy; fires the audible alert.
    Drowsy,
    /// The driver looks focused.
    Focused,
    /// Any other recognized-but-neutral classification.
    Other,
}

impl Label {
    /// Canonical form of a raw label: trimmed, lowercased, underscores as
    /// spaces. Idempotent.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_ascii_lowercase().replace('_', " ")
    }

    /// Parse a raw label string, case- and separator-insensitively.
    ///
    /// Returns `None` for a blank label; any other unrecognized label is
    /// [`Other`](Label::Other).
    pub fn parse(raw: &str) -> Option<Label> {
        let normalized = Self::normalize(raw);

        if normalized.is_empty() {
            return None;
        }

        Some(match normalized.as_str() {
            "drowsy" => Label::Drowsy,
            "focused" => Label::Focused,
            _ => Label::Other,
        })
    }
}
