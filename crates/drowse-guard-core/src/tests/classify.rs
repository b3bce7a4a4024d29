use crate::{
    ClassificationResult, Label, MonitorError,
    classify::client::ClassificationResponse,
};

#[allow(clippy::unwrap_used)]
fn parse(json: &str) -> Result<ClassificationResult, MonitorError> {
    let envelope: ClassificationResponse = serde_json::from_str(json).unwrap();
    ClassificationResult::try_from(envelope)
}

/// WHAT: A numeric-string prediction with a focused label parses cleanly
/// WHY: The service serializes pred as a string in some versions
#[test]
#[allow(clippy::unwrap_used)]
fn given_string_pred_when_parsing_then_focused_result() {
    // Given/When: The documented focused response shape
    let result = parse(r#"{"pred": "0.12", "result": "focused"}"#).unwrap();

    // Then: Probability and label decode as expected
    assert_eq!(result.label, Label::Focused);
    assert!((result.probability - 0.12).abs() < f64::EPSILON);
    assert_eq!(result.text, "focused");
}

/// WHAT: A plain JSON number prediction is accepted too
/// WHY: Both wire encodings of pred must normalize to the same result
#[test]
#[allow(clippy::unwrap_used)]
fn given_numeric_pred_when_parsing_then_same_result_as_string() {
    // Given/When: The same probability as number and as string
    let from_number = parse(r#"{"pred": 0.91, "result": "drowsy"}"#).unwrap();
    let from_string = parse(r#"{"pred": "0.91", "result": "drowsy"}"#).unwrap();

    // Then: Both decode identically
    assert_eq!(from_number, from_string);
    assert_eq!(from_number.label, Label::Drowsy);
}

/// WHAT: Label parsing is case-insensitive
/// WHY: The service capitalizes labels inconsistently
#[test]
fn given_mixed_case_labels_when_parsing_then_same_enum() {
    // Given/When/Then: All casings of drowsy yield the same label
    assert_eq!(Label::parse("Drowsy"), Some(Label::Drowsy));
    assert_eq!(Label::parse("drowsy"), Some(Label::Drowsy));
    assert_eq!(Label::parse("DROWSY"), Some(Label::Drowsy));
}

/// WHAT: Spaces and underscores are interchangeable label separators
/// WHY: Both separator conventions appear on the wire
#[test]
fn given_separator_variants_when_parsing_then_same_enum() {
    // Given/When/Then: Underscore and space forms agree
    assert_eq!(
        Label::parse("neutral_or_other"),
        Label::parse("neutral or other")
    );
    assert_eq!(Label::parse("Neutral_Or_Other"), Some(Label::Other));
}

/// WHAT: Normalization is idempotent
/// WHY: Already-normalized labels must survive a second pass unchanged
#[test]
fn given_normalized_label_when_normalizing_again_then_unchanged() {
    // Given: A raw label with mixed case and underscores
    let once = Label::normalize("Neutral_Or_Other");

    // When: Normalizing the normalized form
    let twice = Label::normalize(&once);

    // Then: Fixed point reached after one pass
    assert_eq!(once, "neutral or other");
    assert_eq!(once, twice);
}

/// WHAT: An unrecognized non-empty label maps to Other with its text kept
/// WHY: The label vocabulary is open-ended; unknown labels plot as neutral
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_label_when_parsing_then_other_with_display_text() {
    // Given/When: A label outside the known vocabulary
    let result = parse(r#"{"pred": 0.5, "result": "Yawning_Detected"}"#).unwrap();

    // Then: Carried as Other, display text normalized
    assert_eq!(result.label, Label::Other);
    assert_eq!(result.text, "yawning detected");
}

/// WHAT: A non-numeric prediction is a malformed response
/// WHY: The controller must surface garbage instead of plotting it
#[test]
fn given_non_numeric_pred_when_parsing_then_malformed_response() {
    // Given/When: pred that does not parse as a number
    let result = parse(r#"{"pred": "not-a-number", "result": "focused"}"#);

    // Then: MalformedResponse
    assert!(matches!(
        result,
        Err(MonitorError::MalformedResponse { .. })
    ));
}

/// WHAT: A non-finite prediction is a malformed response
/// WHY: NaN parses as a float but cannot be plotted or compared
#[test]
fn given_nan_pred_when_parsing_then_malformed_response() {
    // Given/When: pred carrying NaN as a string
    let result = parse(r#"{"pred": "NaN", "result": "focused"}"#);

    // Then: MalformedResponse
    assert!(matches!(
        result,
        Err(MonitorError::MalformedResponse { .. })
    ));
}

/// WHAT: A blank label is a malformed response
/// WHY: An empty label has no enum value and no display text
#[test]
fn given_blank_label_when_parsing_then_malformed_response() {
    // Given/When: A whitespace-only label
    let result = parse(r#"{"pred": 0.5, "result": "   "}"#);

    // Then: MalformedResponse
    assert!(matches!(
        result,
        Err(MonitorError::MalformedResponse { .. })
    ));
}
