use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a direction (expected up, down, left or right)", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the four names in any case plus WASD and arrow-key aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "arrowup" => Ok(Direction::Up),
            "down" | "s" | "arrowdown" => Ok(Direction::Down),
            "left" | "a" | "arrowleft" => Ok(Direction::Left),
            "right" | "d" | "arrowright" => Ok(Direction::Right),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Ended => "ended",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    SelfCollision,
}

/// What a single `tick()` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Ignored,
    Moved,
    Grew,
    Collided(EndReason),
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::Collided(_))
    }
}

/// Why a command left the engine untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    AlreadyRunning,
    NotRunning,
    Reversal { current: Direction, requested: Direction },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::AlreadyRunning => write!(f, "game is already running"),
            Rejection::NotRunning => write!(f, "game is not running"),
            Rejection::Reversal { current, requested } => {
                write!(f, "cannot reverse from {} to {}", current, requested)
            }
        }
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_symmetric() {
        for direction in Direction::ALL {
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(direction.opposite().is_opposite(&direction));
            assert!(!direction.is_opposite(&direction));
        }
    }

    #[test]
    fn test_perpendicular_directions_are_not_opposite() {
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Right.is_opposite(&Direction::Down));
    }

    #[test]
    fn test_parse_accepts_names_and_aliases() {
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(" up ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("a".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("ArrowDown".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "north");
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
