use crate::{
    base::board::{Cell, Observation},
    engine::oracle::Oracle,
    error::{Error, Result},
};
use log::{debug, warn};
use std::io::{BufRead, Write};

pub const LEGEND: &str = "space - empty, C - cabbage, P - potato, I - iron, X - barrel, T - treasure";

/// Parses one line typed by the player. A blank line counts as an empty cell.
pub fn parse_observation(line: &str) -> Result<Observation> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(Observation::Empty);
    }
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Observation::from_code(c).ok_or_else(|| Error::InvalidObservationCode(line.to_owned())),
        _ => Err(Error::InvalidObservationCode(line.to_owned())),
    }
}

/// Asks a human what they found, re-asking until the answer makes sense.
pub struct StdinOracle<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinOracle<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Oracle for StdinOracle<R, W> {
    fn observe(&mut self, cell: Cell) -> Result<Observation> {
        loop {
            write!(self.output, "What did you find at {cell}? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed while waiting for {cell}");
                return Err(Error::InputClosed);
            }
            match parse_observation(&line) {
                Ok(observation) => return Ok(observation),
                Err(e) => {
                    warn!("{e}");
                    writeln!(self.output, "Unrecognized answer. Use one of: {LEGEND}")?;
                },
            }
        }
    }
}
