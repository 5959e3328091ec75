use super::{
    error::{Error, Result},
    strategy::{self, Strategy},
};
use crate::base::{
    Vec2D,
    board::{Cell, Observation},
};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// Suspicion at which a cell is taken to be a mine regardless of what its clues need.
const SUSPICION_CERTAIN: u32 = 3;
/// Suspicion a weak clue spreads over its unresolved neighbors.
const WEAK_CLUE_WEIGHT: u32 = 1;
/// Suspicion a strong clue spreads over its unresolved neighbors.
const STRONG_CLUE_WEIGHT: u32 = 2;

/// Result of feeding one observation to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Lost,
    Won,
}

/// Everything the engine has learned about the hidden board.
///
/// Every cell is in exactly one of: revealed, confirmed safe, confirmed mine, or unknown. Suspicion is
/// tracked for cells that are neither revealed nor confirmed mines.
#[derive(Clone, Debug)]
pub struct BoardKnowledge {
    pub(super) revealed: Vec2D<Option<Observation>>,
    pub(super) confirmed_safe: BTreeSet<Cell>,
    pub(super) confirmed_mines: BTreeSet<Cell>,
    pub(super) suspicion: BTreeMap<Cell, u32>,
    pub(super) last_revealed: Option<Cell>,
}

impl BoardKnowledge {
    pub fn new(size: usize) -> Self {
        Self {
            revealed: Vec2D::new(size),
            confirmed_safe: BTreeSet::new(),
            confirmed_mines: BTreeSet::new(),
            suspicion: BTreeMap::new(),
            last_revealed: None,
        }
    }

    pub fn size(&self) -> usize {
        self.revealed.size()
    }

    pub fn revealed(&self, cell: Cell) -> Option<Observation> {
        self.revealed.get(cell).copied().flatten()
    }

    pub fn is_revealed(&self, cell: Cell) -> bool {
        self.revealed(cell).is_some()
    }

    pub fn is_confirmed_mine(&self, cell: Cell) -> bool {
        self.confirmed_mines.contains(&cell)
    }

    pub fn is_confirmed_safe(&self, cell: Cell) -> bool {
        self.confirmed_safe.contains(&cell)
    }

    pub fn confirmed_safe(&self) -> &BTreeSet<Cell> {
        &self.confirmed_safe
    }

    pub fn confirmed_mines(&self) -> &BTreeSet<Cell> {
        &self.confirmed_mines
    }

    pub fn suspicion(&self, cell: Cell) -> Option<u32> {
        self.suspicion.get(&cell).copied()
    }

    pub fn last_revealed(&self) -> Option<Cell> {
        self.last_revealed
    }

    /// Neither revealed nor a confirmed mine.
    fn is_unresolved(&self, cell: Cell) -> bool {
        !self.is_revealed(cell) && !self.is_confirmed_mine(cell)
    }

    /// Unrevealed cells not known to be mines, in row-major order.
    pub fn candidates(&self) -> impl Iterator<Item = Cell> + '_ {
        self.revealed.cells().filter(|cell| self.is_unresolved(*cell))
    }

    fn unresolved_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.revealed
            .neighbors(cell)
            .into_iter()
            .filter(|n| self.is_unresolved(*n))
    }

    /// How many mines some revealed clue insists on around `cell`, or 0 if nothing constrains it.
    ///
    /// Clues are scanned in row-major order and the first one that applies wins: a weak clue with a
    /// single unresolved neighbor left needs 1, a strong clue with at most two left needs 2.
    pub fn needed_bombs(&self, cell: Cell) -> u32 {
        for (source, observation) in self.revealed.enumerate() {
            let Some(observation) = observation else {
                continue;
            };
            if !observation.is_clue() || !self.revealed.neighbors(source).contains(&cell) {
                continue;
            }
            let unresolved = self.unresolved_neighbors(source).count();
            match observation {
                Observation::ClueWeak if unresolved == 1 => return 1,
                Observation::ClueStrong if unresolved <= 2 => return 2,
                _ => {},
            }
        }
        0
    }

    fn mark_neighbors_safe(&mut self, cell: Cell) {
        let neighbors: Vec<Cell> = self.unresolved_neighbors(cell).collect();
        for neighbor in neighbors {
            if self.confirmed_safe.insert(neighbor) {
                trace!("{neighbor} is safe next to empty {cell}");
            }
        }
    }

    fn add_suspicion(&mut self, cell: Cell, weight: u32, min_neighbors: usize) {
        let neighbors: Vec<Cell> = self.unresolved_neighbors(cell).collect();
        if neighbors.is_empty() || neighbors.len() < min_neighbors {
            return;
        }
        for neighbor in neighbors {
            let entry = self.suspicion.entry(neighbor).or_default();
            *entry += weight;
            trace!("Suspicion of {neighbor} raised to {entry} by clue at {cell}");
        }
    }

    /// Promotes suspects to confirmed mines. Each promotion is visible to the ones after it.
    fn resolve_suspicion(&mut self) {
        let suspects: Vec<(Cell, u32)> = self.suspicion.iter().map(|(c, w)| (*c, *w)).collect();
        for (cell, weight) in suspects {
            let needed = self.needed_bombs(cell);
            if weight >= SUSPICION_CERTAIN || (needed > 0 && weight >= needed) {
                debug!("Confirmed mine at {cell} (suspicion {weight}, needed {needed})");
                self.confirmed_safe.remove(&cell);
                self.suspicion.remove(&cell);
                self.confirmed_mines.insert(cell);
            }
        }
    }
}

/// Tracks what is known about the hidden board and recommends the next cell to reveal.
///
/// The deduction is greedy: clues add up as suspicion instead of being solved as exact constraints, so a
/// recommended cell can still turn out to be a mine.
pub struct DeductionEngine {
    knowledge: BoardKnowledge,
    strategy: Box<dyn Strategy>,
}

impl DeductionEngine {
    pub fn new(size: usize) -> Self {
        Self::with_strategy(size, strategy::default_strategy())
    }

    pub fn with_strategy(size: usize, strategy: impl Strategy + 'static) -> Self {
        Self {
            knowledge: BoardKnowledge::new(size),
            strategy: Box::new(strategy),
        }
    }

    pub fn size(&self) -> usize {
        self.knowledge.size()
    }

    pub fn knowledge(&self) -> &BoardKnowledge {
        &self.knowledge
    }

    pub fn revealed(&self, cell: Cell) -> Option<Observation> {
        self.knowledge.revealed(cell)
    }

    pub fn is_confirmed_mine(&self, cell: Cell) -> bool {
        self.knowledge.is_confirmed_mine(cell)
    }

    pub fn is_confirmed_safe(&self, cell: Cell) -> bool {
        self.knowledge.is_confirmed_safe(cell)
    }

    pub fn suspicion(&self, cell: Cell) -> Option<u32> {
        self.knowledge.suspicion(cell)
    }

    pub fn last_revealed(&self) -> Option<Cell> {
        self.knowledge.last_revealed()
    }

    pub fn needed_bombs(&self, cell: Cell) -> u32 {
        self.knowledge.needed_bombs(cell)
    }

    /// Records what was found at `cell` and propagates it.
    ///
    /// Rejected calls leave the knowledge untouched.
    pub fn apply_observation(&mut self, cell: Cell, observation: Observation) -> Result<Outcome> {
        let k = &mut self.knowledge;
        let size = k.size();
        let Some(slot) = k.revealed.get_mut(cell) else {
            return Err(Error::OutOfBounds {
                row: cell.row,
                col: cell.col,
                size,
            });
        };
        if slot.is_some() {
            return Err(Error::AlreadyRevealed {
                row: cell.row,
                col: cell.col,
            });
        }

        debug!("Revealed {observation:?} at {cell}");
        *slot = Some(observation);
        k.confirmed_safe.remove(&cell);
        k.confirmed_mines.remove(&cell);
        k.suspicion.remove(&cell);
        k.last_revealed = Some(cell);

        match observation {
            Observation::Mine => return Ok(Outcome::Lost),
            Observation::Treasure => return Ok(Outcome::Won),
            Observation::Empty => k.mark_neighbors_safe(cell),
            Observation::ClueWeak => k.add_suspicion(cell, WEAK_CLUE_WEIGHT, 1),
            Observation::ClueStrong => k.add_suspicion(cell, STRONG_CLUE_WEIGHT, 2),
        }

        k.resolve_suspicion();
        Ok(Outcome::Continue)
    }

    /// The cell to reveal next, or `None` once every cell is revealed or a confirmed mine.
    pub fn suggest_next(&mut self) -> Option<Cell> {
        let suggestion = self.strategy.suggest(&mut self.knowledge);
        debug!("Suggesting {suggestion:?}");
        suggestion
    }
}
