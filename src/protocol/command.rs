#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check(Vec<String>),
    Moves(Vec<String>),
    Coordinates,
    Pieces,
    SetOption(Vec<String>),
    Options,
    IsReady,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "check" => Command::Check(owned_parts()),
        "moves" => Command::Moves(owned_parts()),
        "coordinates" => Command::Coordinates,
        "pieces" => Command::Pieces,
        "setoption" => Command::SetOption(owned_parts()),
        "options" => Command::Options,
        "isready" => Command::IsReady,
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
