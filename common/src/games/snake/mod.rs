mod game_state;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use game_state::SnakeGameState;
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use snapshot::SnakeSnapshot;
pub use types::{Cell, Direction, EndReason, ParseDirectionError, Phase, Rejection, TickOutcome};
