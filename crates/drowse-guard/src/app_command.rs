/// Commands typed at the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Begin monitoring.
    Start,
    /// End monitoring.
    Stop,
    /// Print the current status and the plotted series.
    Status,
    /// Clear the plotted series (explicit full reset).
    Reset,
    /// Print available commands.
    Help,
    /// Exit the process.
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line, case-insensitively. `None` for anything
    /// unrecognized.
    pub fn parse(line: &str) -> Option<ConsoleCommand> {
        match line.trim().to_ascii_lowercase().as_str() {
            "start" => Some(ConsoleCommand::Start),
            "stop" => Some(ConsoleCommand::Stop),
            "status" => Some(ConsoleCommand::Status),
            "reset" => Some(ConsoleCommand::Reset),
            "help" | "?" => Some(ConsoleCommand::Help),
            "quit" | "exit" => Some(ConsoleCommand::Quit),
            _ => None,
        }
    }
}
