use common::{GameMode, GameSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Signal(GameSignal),
    Quit,
}

/// Maps one input line to a command. Unrecognized input yields `None`;
/// out-of-range cell numbers are passed through and rejected by the core.
pub fn parse_command(line: &str) -> Option<ClientCommand> {
    let token = line.trim().to_ascii_lowercase();
    match token.as_str() {
        "pvp" => Some(ClientCommand::Signal(GameSignal::SelectMode(
            GameMode::HumanVsHuman,
        ))),
        "pvc" => Some(ClientCommand::Signal(GameSignal::SelectMode(
            GameMode::HumanVsComputer,
        ))),
        "reset" => Some(ClientCommand::Signal(GameSignal::Reset)),
        "quit" | "exit" => Some(ClientCommand::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .map(|index| ClientCommand::Signal(GameSignal::PlaceMark(index))),
    }
}
