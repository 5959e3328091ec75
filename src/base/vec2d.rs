use super::board::Cell;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Neighbor list of a single cell; there are never more than four.
pub type Neighbors = SmallVec<[Cell; 4]>;

/// Row-major storage for a square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vec2D<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> Vec2D<T> {
    pub fn new(size: usize) -> Self
    where
        T: Default + Clone,
    {
        Self {
            size,
            data: vec![T::default(); size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn data_mut(&mut self) -> &mut Vec<T> {
        &mut self.data
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        if !self.contains(cell) {
            return None;
        }
        self.data.get(cell.row * self.size + cell.col)
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        if !self.contains(cell) {
            return None;
        }
        self.data.get_mut(cell.row * self.size + cell.col)
    }

    /// All cells of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<T> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// Row-major `(cell, value)` pairs.
    pub fn enumerate(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.cells().zip(self.data.iter())
    }

    /// In-bounds horizontal and vertical neighbors of `cell`, in the order up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        let mut neighbors = Neighbors::new();
        if !self.contains(cell) {
            return neighbors;
        }
        for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
            let (Some(row), Some(col)) = (cell.row.checked_add_signed(dr), cell.col.checked_add_signed(dc)) else {
                continue;
            };
            let neighbor = Cell::new(row, col);
            if self.contains(neighbor) {
                neighbors.push(neighbor);
            }
        }
        neighbors
    }
}

impl<T> Index<Cell> for Vec2D<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &Self::Output {
        assert!(self.contains(cell), "cell {cell} out of bounds for size {}", self.size);
        &self.data[cell.row * self.size + cell.col]
    }
}

impl<T> IndexMut<Cell> for Vec2D<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        assert!(self.contains(cell), "cell {cell} out of bounds for size {}", self.size);
        &mut self.data[cell.row * self.size + cell.col]
    }
}
