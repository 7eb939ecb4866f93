use std::io::{BufRead, Write};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{random_legal_move, Agent};
use crate::error::SessionError;
use crate::game::{Board, GameOutcome, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(GameOutcome),
    /// The human typed `q`, something that is not a number, or closed input.
    Quit,
}

/// One game between a human on `input`/`output` and a machine agent.
pub struct Session<R, W> {
    input: R,
    output: W,
    agent: Box<dyn Agent>,
    human: Player,
    board: Board,
    fallback_rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, agent: Box<dyn Agent>, human: Player) -> Self {
        Session {
            input,
            output,
            agent,
            human,
            board: Board::new(),
            fallback_rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the RNG used when the agent has no answer.
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Alternate turns until the game ends or the human quits.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        info!(
            "new game: human plays {}, machine ({}) plays {}",
            self.human.symbol(),
            self.agent.name(),
            self.human.other().symbol()
        );

        loop {
            if self.board.side_to_move() == self.human {
                if !self.human_turn()? {
                    info!("human quit at ply {}", self.board.ply());
                    return Ok(SessionOutcome::Quit);
                }
            } else {
                self.machine_turn()?;
            }

            if let Some(outcome) = self.board.outcome() {
                write!(self.output, "\n{}\n", self.board)?;
                match outcome {
                    GameOutcome::Winner(player) => {
                        writeln!(self.output, "{} wins!", player.symbol())?
                    }
                    GameOutcome::Draw => writeln!(self.output, "draw!")?,
                }
                info!("game over after {} plies: {outcome:?}", self.board.ply());
                return Ok(SessionOutcome::Finished(outcome));
            }
        }
    }

    /// Prompt until a playable column is entered. Returns `false` on quit.
    fn human_turn(&mut self) -> Result<bool, SessionError> {
        loop {
            write!(self.output, "\n{}\n", self.board)?;
            write!(self.output, "Enter column number ('q' to quit): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            let Ok(number) = line.trim().parse::<usize>() else {
                return Ok(false);
            };

            // Columns are 1-based on screen.
            match number.checked_sub(1).map(|col| self.board.apply_move(col)) {
                Some(Ok(_)) => return Ok(true),
                _ => writeln!(self.output, "Column {number} is not playable.")?,
            }
        }
    }

    fn machine_turn(&mut self) -> Result<(), SessionError> {
        let choice = self.agent.select_action(&self.board);
        let played = match choice {
            Some(col) => self.board.apply_move(col).is_ok().then_some(col),
            None => None,
        };

        let col = match played {
            Some(col) => col,
            None => {
                warn!(
                    "{} returned {choice:?}, falling back to a random column",
                    self.agent.name()
                );
                let side = self.human.other().name();
                let col = random_legal_move(&self.board, &mut self.fallback_rng)
                    .ok_or(SessionError::NoLegalMove(side))?;
                self.board
                    .apply_move(col)
                    .map_err(|_| SessionError::NoLegalMove(side))?;
                col
            }
        };

        writeln!(self.output, "Machine plays column {}.", col + 1)?;
        Ok(())
    }
}
