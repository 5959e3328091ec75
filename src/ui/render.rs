use crate::{base::board::Cell, engine::DeductionEngine};

/// Character shown for a single cell: the revealed code, `X` for a confirmed mine, `?` otherwise.
pub fn cell_char(engine: &DeductionEngine, cell: Cell) -> char {
    if let Some(observation) = engine.revealed(cell) {
        observation.code()
    } else if engine.is_confirmed_mine(cell) {
        'X'
    } else {
        '?'
    }
}

/// One line per row, cells separated by a single space.
pub fn render_grid(engine: &DeductionEngine) -> String {
    let size = engine.size();
    let mut out = String::with_capacity(size * size * 2);
    for row in 0..size {
        let line: Vec<String> = (0..size)
            .map(|col| cell_char(engine, Cell::new(row, col)).to_string())
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::board::Observation;

    #[test]
    fn test_render_unknown_grid() {
        let engine = DeductionEngine::new(3);
        assert_eq!(render_grid(&engine), "? ? ?\n? ? ?\n? ? ?\n");
    }

    #[test]
    fn test_render_revealed_and_mines() {
        let mut engine = DeductionEngine::new(2);
        engine.apply_observation(Cell::new(0, 0), Observation::Empty).unwrap();
        engine.apply_observation(Cell::new(0, 1), Observation::ClueWeak).unwrap();

        // (1, 1) is the only unresolved neighbor of the weak clue and becomes a confirmed mine.
        assert_eq!(render_grid(&engine), "  C\n? X\n");
    }
}
