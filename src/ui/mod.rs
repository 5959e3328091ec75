pub mod prompt;
pub mod render;

use crate::{
    base::board::Cell,
    engine::{DeductionEngine, Outcome, oracle::Oracle},
    error::Result,
};
use log::{debug, info};
use std::io::Write;

/// How a game driven by [`play`] came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won(Cell),
    Lost(Cell),
    /// The engine ran out of cells to suggest.
    NoMove,
}

/// Runs one game: suggest a cell, ask the oracle what is there, feed it back, repeat.
pub fn play(engine: &mut DeductionEngine, oracle: &mut dyn Oracle, out: &mut dyn Write) -> Result<GameResult> {
    let turns = engine.size() * engine.size();
    for turn in 0..turns {
        write!(out, "{}", render::render_grid(engine))?;
        writeln!(out)?;

        let Some(cell) = engine.suggest_next() else {
            info!("No move left after {turn} turns");
            writeln!(out, "Cannot pick the next cell. The treasure may be unreachable.")?;
            return Ok(GameResult::NoMove);
        };
        writeln!(out, "Dig next at {cell}")?;

        let observation = oracle.observe(cell)?;
        debug!("Turn {turn}: {cell} is {observation:?}");
        match engine.apply_observation(cell, observation)? {
            Outcome::Continue => {},
            Outcome::Won => {
                info!("Treasure found at {cell} after {} turns", turn + 1);
                writeln!(out, "Congratulations! You found the treasure!")?;
                return Ok(GameResult::Won(cell));
            },
            Outcome::Lost => {
                info!("Hit a barrel at {cell} after {} turns", turn + 1);
                writeln!(out, "BOOM! A barrel. Game over.")?;
                return Ok(GameResult::Lost(cell));
            },
        }
    }
    Ok(GameResult::NoMove)
}
