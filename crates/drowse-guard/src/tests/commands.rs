use crate::ConsoleCommand;

/// WHAT: Every command word parses to its variant
/// WHY: The console is the only control surface; typos must not start it
#[test]
fn given_command_words_when_parsing_then_expected_variants() {
    // Given/When/Then: The full command vocabulary
    assert_eq!(ConsoleCommand::parse("start"), Some(ConsoleCommand::Start));
    assert_eq!(ConsoleCommand::parse("stop"), Some(ConsoleCommand::Stop));
    assert_eq!(ConsoleCommand::parse("status"), Some(ConsoleCommand::Status));
    assert_eq!(ConsoleCommand::parse("reset"), Some(ConsoleCommand::Reset));
    assert_eq!(ConsoleCommand::parse("help"), Some(ConsoleCommand::Help));
    assert_eq!(ConsoleCommand::parse("quit"), Some(ConsoleCommand::Quit));
}

/// WHAT: Parsing is case-insensitive and whitespace-tolerant
/// WHY: Interactive input arrives messy
#[test]
fn given_messy_input_when_parsing_then_still_recognized() {
    // Given/When/Then: Mixed case and surrounding whitespace
    assert_eq!(ConsoleCommand::parse("  START  "), Some(ConsoleCommand::Start));
    assert_eq!(ConsoleCommand::parse("Stop"), Some(ConsoleCommand::Stop));
}

/// WHAT: Aliases map to their commands
/// WHY: 'exit' and '?' are common muscle memory
#[test]
fn given_aliases_when_parsing_then_mapped() {
    // Given/When/Then: The supported aliases
    assert_eq!(ConsoleCommand::parse("exit"), Some(ConsoleCommand::Quit));
    assert_eq!(ConsoleCommand::parse("?"), Some(ConsoleCommand::Help));
}

/// WHAT: Unrecognized input parses to None
/// WHY: Unknown lines must not trigger any command
#[test]
fn given_unknown_input_when_parsing_then_none() {
    // Given/When/Then: Garbage and empty input
    assert_eq!(ConsoleCommand::parse("launch"), None);
    assert_eq!(ConsoleCommand::parse(""), None);
}
