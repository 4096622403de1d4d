use common::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Status,
    Quit,
    Turn(Direction),
}

/// One command per line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let command = match trimmed.to_ascii_lowercase().as_str() {
        "start" | "go" => Command::Start,
        "reset" | "r" => Command::Reset,
        "status" | "?" => Command::Status,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Turn(other.parse::<Direction>().map_err(|e| e.to_string())?),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_words() {
        assert_eq!(parse_command("start"), Ok(Some(Command::Start)));
        assert_eq!(parse_command(" RESET "), Ok(Some(Command::Reset)));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("?"), Ok(Some(Command::Status)));
    }

    #[test]
    fn test_directions_and_aliases() {
        assert_eq!(parse_command("up"), Ok(Some(Command::Turn(Direction::Up))));
        assert_eq!(parse_command("d"), Ok(Some(Command::Turn(Direction::Right))));
        assert_eq!(parse_command("s"), Ok(Some(Command::Turn(Direction::Down))));
        assert_eq!(parse_command("ArrowLeft"), Ok(Some(Command::Turn(Direction::Left))));
    }

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_unknown_word_is_rejected() {
        let err = parse_command("jump").unwrap_err();
        assert!(err.contains("jump"));
    }
}
