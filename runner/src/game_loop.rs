use std::io::Write;

use common::{Phase, SnakeGameState, SnakeSnapshot, TickOutcome, log, log_debug, log_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{MissedTickBehavior, interval};

use crate::input::{Command, parse_command};
use crate::render::{render_board, status_line};

pub struct GameLoop<W: Write> {
    state: SnakeGameState,
    out: W,
    draw_board: bool,
}

impl<W: Write> GameLoop<W> {
    pub fn new(state: SnakeGameState, out: W, draw_board: bool) -> Self {
        Self {
            state,
            out,
            draw_board,
        }
    }

    /// Serializes clock ticks and input lines onto one task until `quit` or end of input.
    /// The clock is only polled while the game is running.
    pub async fn run<R>(mut self, input: R) -> std::io::Result<SnakeSnapshot>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut ticker = interval(self.state.settings().tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut lines = input.lines();

        self.show()?;

        loop {
            let running = self.state.phase() == Phase::Running;
            tokio::select! {
                _ = ticker.tick(), if running => {
                    let outcome = self.state.tick();
                    self.show()?;
                    if let TickOutcome::Collided(reason) = outcome {
                        log!("Clock stopped after tick {} ({:?})", self.state.tick_count(), reason);
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        log!("Input closed");
                        break;
                    };
                    match parse_command(&line) {
                        Ok(Some(Command::Quit)) => break,
                        Ok(Some(command)) => {
                            if self.apply(command) {
                                ticker.reset();
                            }
                        }
                        Ok(None) => {}
                        Err(e) => log_warn!("Ignoring input: {}", e),
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(self.state.snapshot())
    }

    /// Returns true when the clock should restart from now.
    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => match self.state.start() {
                Ok(()) => {
                    self.show_or_warn();
                    true
                }
                Err(rejection) => {
                    log_debug!("Start ignored: {}", rejection);
                    false
                }
            },
            Command::Reset => {
                self.state.reset();
                self.show_or_warn();
                false
            }
            Command::Turn(direction) => {
                if let Err(rejection) = self.state.set_direction(direction) {
                    log_debug!("Turn ignored: {}", rejection);
                }
                false
            }
            Command::Status => {
                self.show_or_warn();
                false
            }
            Command::Quit => false,
        }
    }

    fn show(&mut self) -> std::io::Result<()> {
        let snapshot = self.state.snapshot();
        if self.draw_board {
            write!(self.out, "{}", render_board(&snapshot))?;
        } else {
            writeln!(self.out, "{}", status_line(&snapshot))?;
        }
        self.out.flush()
    }

    fn show_or_warn(&mut self) {
        if let Err(e) = self.show() {
            log_warn!("Failed to write board: {}", e);
        }
    }
}
