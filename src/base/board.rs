use super::Vec2D;
use log::{error, trace};
use phf::{Map, phf_map};
use rand::{rng, seq::SliceRandom};

/// A grid location, ordered row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a revealed cell turned out to contain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Observation {
    #[default]
    Empty,
    /// Cabbage or potato: one mine among the unresolved neighbors.
    ClueWeak,
    /// Iron: two mines among the unresolved neighbors.
    ClueStrong,
    Mine,
    Treasure,
}

const OBSERVATION_CODES: Map<char, Observation> = phf_map! {
    ' ' => Observation::Empty,
    'C' => Observation::ClueWeak,
    'P' => Observation::ClueWeak,
    'I' => Observation::ClueStrong,
    'X' => Observation::Mine,
    'T' => Observation::Treasure,
};

impl Observation {
    /// Parses a single-character code, ignoring case.
    pub fn from_code(code: char) -> Option<Self> {
        OBSERVATION_CODES.get(&code.to_ascii_uppercase()).copied()
    }

    pub fn code(&self) -> char {
        match self {
            Observation::Empty => ' ',
            Observation::ClueWeak => 'C',
            Observation::ClueStrong => 'I',
            Observation::Mine => 'X',
            Observation::Treasure => 'T',
        }
    }

    pub fn is_clue(&self) -> bool {
        matches!(self, Observation::ClueWeak | Observation::ClueStrong)
    }
}

/// Derive clue cells from mine positions.
///
/// Mines and the treasure are left untouched; every other cell is overwritten according to how many of
/// its horizontal and vertical neighbors hold a mine.
pub fn build_clues(contents: &mut Vec2D<Observation>) {
    let cells: Vec<Cell> = contents.cells().collect();
    for cell in cells {
        if matches!(contents[cell], Observation::Mine | Observation::Treasure) {
            continue;
        }
        let mines = contents
            .neighbors(cell)
            .iter()
            .filter(|n| contents[**n] == Observation::Mine)
            .count();
        contents[cell] = match mines {
            0 => Observation::Empty,
            1 => Observation::ClueWeak,
            _ => Observation::ClueStrong,
        };
    }
}

/// A fully known board, standing in for the player when the game is simulated.
#[derive(Clone, Debug)]
pub struct HiddenBoard {
    contents: Vec2D<Observation>,
    mines: usize,
}

impl HiddenBoard {
    /// Places `mines` mines and one treasure at random. At least one cell is always left for the
    /// treasure.
    pub fn random(size: usize, mines: usize) -> Self {
        let size = size.max(1);
        let mut contents: Vec2D<Observation> = Vec2D::new(size);
        let mines = mines.min(contents.len() - 1);
        let data = contents.data_mut();
        data[..mines].fill(Observation::Mine);
        data[mines] = Observation::Treasure;
        data.shuffle(&mut rng());

        build_clues(&mut contents);
        trace!("Generated hidden board of size {size} with {mines} mines");

        Self { contents, mines }
    }

    /// Decodes a fixture drawn as text: `*` or `x` for a mine, `t` for the treasure, `.` or a space for
    /// anything else. Clues are derived, not read.
    pub fn from_ascii(ascii: &str) -> Option<Self> {
        let lines: Vec<&str> = ascii.lines().collect();
        let size = lines.len();
        if size == 0 {
            error!("ASCII board has no lines");
            return None;
        }

        let mut contents: Vec2D<Observation> = Vec2D::new(size);
        let mut mines = 0;
        let mut treasure = None;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != size {
                error!("ASCII board is not square: line {row} has {} cells", line.chars().count());
                return None;
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                match c {
                    '*' | 'x' | 'X' => {
                        contents[cell] = Observation::Mine;
                        mines += 1;
                    },
                    't' | 'T' => {
                        if let Some(previous) = treasure {
                            error!("ASCII board has a second treasure at {cell}, first at {previous}");
                            return None;
                        }
                        contents[cell] = Observation::Treasure;
                        treasure = Some(cell);
                    },
                    '.' | ' ' => {},
                    _ => {
                        error!("Invalid character in ASCII board: {c:?}");
                        return None;
                    },
                }
            }
        }

        build_clues(&mut contents);
        Some(Self { contents, mines })
    }

    pub fn size(&self) -> usize {
        self.contents.size()
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn content(&self, cell: Cell) -> Option<Observation> {
        self.contents.get(cell).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_codes() {
        assert_eq!(Observation::from_code(' '), Some(Observation::Empty));
        assert_eq!(Observation::from_code('c'), Some(Observation::ClueWeak));
        assert_eq!(Observation::from_code('P'), Some(Observation::ClueWeak));
        assert_eq!(Observation::from_code('i'), Some(Observation::ClueStrong));
        assert_eq!(Observation::from_code('x'), Some(Observation::Mine));
        assert_eq!(Observation::from_code('T'), Some(Observation::Treasure));
        assert_eq!(Observation::from_code('q'), None);
        assert_eq!(Observation::from_code('1'), None);
        assert_eq!(Observation::ClueStrong.code(), 'I');
    }

    #[test]
    fn test_from_ascii_derives_clues() {
        // Layout:
        // * . .
        // . . *
        // t . *
        let board = HiddenBoard::from_ascii("*..\n..*\nt.*").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.mines(), 3);
        assert_eq!(board.content(Cell::new(0, 0)), Some(Observation::Mine));
        assert_eq!(board.content(Cell::new(0, 1)), Some(Observation::ClueWeak));
        assert_eq!(board.content(Cell::new(0, 2)), Some(Observation::ClueWeak));
        assert_eq!(board.content(Cell::new(1, 1)), Some(Observation::ClueWeak));
        assert_eq!(board.content(Cell::new(2, 1)), Some(Observation::ClueWeak));
        assert_eq!(board.content(Cell::new(1, 0)), Some(Observation::ClueWeak));
        assert_eq!(board.content(Cell::new(2, 0)), Some(Observation::Treasure));
        assert_eq!(board.content(Cell::new(3, 0)), None);
    }

    #[test]
    fn test_strong_clue_between_two_mines() {
        let board = HiddenBoard::from_ascii("*.*\n...\n..t").unwrap();
        assert_eq!(board.content(Cell::new(0, 1)), Some(Observation::ClueStrong));
        assert_eq!(board.content(Cell::new(1, 1)), Some(Observation::Empty));
    }

    #[test]
    fn test_from_ascii_rejects_bad_input() {
        assert!(HiddenBoard::from_ascii("").is_none());
        assert!(HiddenBoard::from_ascii("..\n...").is_none());
        assert!(HiddenBoard::from_ascii("t.\n.t").is_none());
        assert!(HiddenBoard::from_ascii("?.\n..").is_none());
    }

    #[test]
    fn test_random_board() {
        let board = HiddenBoard::random(5, 6);
        assert_eq!(board.size(), 5);
        assert_eq!(board.mines(), 6);

        let mut mines = 0;
        let mut treasures = 0;
        for row in 0..5 {
            for col in 0..5 {
                match board.content(Cell::new(row, col)) {
                    Some(Observation::Mine) => mines += 1,
                    Some(Observation::Treasure) => treasures += 1,
                    Some(_) => {},
                    None => panic!("Expected content at ({row}, {col})"),
                }
            }
        }
        assert_eq!(mines, 6);
        assert_eq!(treasures, 1);
    }

    #[test]
    fn test_random_board_leaves_room_for_treasure() {
        let board = HiddenBoard::random(2, 10);
        assert_eq!(board.mines(), 3);
    }
}
