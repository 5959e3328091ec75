use super::deduction::BoardKnowledge;
use crate::base::board::Cell;
use log::trace;

/// Picks the next cell to reveal from the current knowledge.
///
/// A strategy may consume knowledge it hands out (a confirmed-safe cell is removed from the set once
/// suggested), hence the mutable borrow.
pub trait Strategy: Send + Sync {
    fn suggest(&self, knowledge: &mut BoardKnowledge) -> Option<Cell>;
}

pub fn default_strategy() -> impl Strategy {
    ConfirmedSafe.or(Unsuspected).or(LeastSuspected)
}

/// Hands out any cell already proven safe.
#[derive(Debug, Clone, Default)]
pub struct ConfirmedSafe;

impl Strategy for ConfirmedSafe {
    fn suggest(&self, knowledge: &mut BoardKnowledge) -> Option<Cell> {
        let cell = knowledge.confirmed_safe.pop_first()?;
        trace!("ConfirmedSafe: suggesting {cell}");
        Some(cell)
    }
}

/// The first candidate in row-major order that no clue has pointed at.
#[derive(Debug, Clone, Default)]
pub struct Unsuspected;

impl Strategy for Unsuspected {
    fn suggest(&self, knowledge: &mut BoardKnowledge) -> Option<Cell> {
        let cell = knowledge
            .candidates()
            .find(|cell| !knowledge.suspicion.contains_key(cell))?;
        trace!("Unsuspected: suggesting {cell}");
        Some(cell)
    }
}

/// The candidate carrying the least accumulated suspicion, earliest in row-major order on ties.
#[derive(Debug, Clone, Default)]
pub struct LeastSuspected;

impl Strategy for LeastSuspected {
    fn suggest(&self, knowledge: &mut BoardKnowledge) -> Option<Cell> {
        let cell = knowledge
            .candidates()
            .min_by_key(|cell| (knowledge.suspicion.get(cell).copied().unwrap_or(0), *cell))?;
        trace!("LeastSuspected: suggesting {cell}");
        Some(cell)
    }
}

#[derive(Debug, Clone)]
struct StrategyCombinerOr<T: Strategy, U: Strategy>(T, U);

impl<T: Strategy, U: Strategy> Strategy for StrategyCombinerOr<T, U> {
    fn suggest(&self, knowledge: &mut BoardKnowledge) -> Option<Cell> {
        self.0.suggest(knowledge).or_else(|| self.1.suggest(knowledge))
    }
}

pub trait StrategyExt {
    /// Combines two strategies such that the second is only consulted if the first does not produce a
    /// suggestion.
    fn or<T: Strategy>(self, alternative: T) -> impl Strategy
    where
        Self: Sized + Strategy,
    {
        StrategyCombinerOr(self, alternative)
    }
}

impl<T: Strategy> StrategyExt for T {}
