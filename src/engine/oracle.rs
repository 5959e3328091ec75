use crate::base::board::{Cell, HiddenBoard, Observation};
use log::trace;

/// Supplies the true content of a cell once the player digs it up.
pub trait Oracle {
    fn observe(&mut self, cell: Cell) -> crate::error::Result<Observation>;
}

impl Oracle for HiddenBoard {
    fn observe(&mut self, cell: Cell) -> crate::error::Result<Observation> {
        let observation = self.content(cell).ok_or(super::error::Error::OutOfBounds {
            row: cell.row,
            col: cell.col,
            size: self.size(),
        })?;
        trace!("HiddenBoard: {cell} holds {observation:?}");
        Ok(observation)
    }
}

/// Wraps a closure as an oracle, for scripted games.
pub struct FnOracle<F>(pub F);

impl<F> Oracle for FnOracle<F>
where
    F: FnMut(Cell) -> Observation,
{
    fn observe(&mut self, cell: Cell) -> crate::error::Result<Observation> {
        Ok((self.0)(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_board_oracle() {
        let mut board = HiddenBoard::from_ascii("*.\n.t").unwrap();
        assert_eq!(board.observe(Cell::new(0, 0)).unwrap(), Observation::Mine);
        assert_eq!(board.observe(Cell::new(1, 1)).unwrap(), Observation::Treasure);
        match board.observe(Cell::new(2, 0)) {
            Err(crate::error::Error::Engine(super::super::error::Error::OutOfBounds { size: 2, .. })) => {},
            other => panic!("Expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_fn_oracle() {
        let mut calls = 0;
        let mut oracle = FnOracle(|cell: Cell| {
            calls += 1;
            if cell.row == 0 { Observation::Empty } else { Observation::ClueStrong }
        });
        assert_eq!(oracle.observe(Cell::new(0, 3)).unwrap(), Observation::Empty);
        assert_eq!(oracle.observe(Cell::new(1, 3)).unwrap(), Observation::ClueStrong);
        drop(oracle);
        assert_eq!(calls, 2);
    }
}
