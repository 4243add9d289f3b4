//! Dense square matrices.
//!
//! [`Matrix`] backs the adjacency-matrix storage and is also the shape of
//! every all-pairs result. Cells are stored row-major in a single `Vec`.

use serde::Serialize;
use std::ops::{Index, IndexMut};

/// A dense `n × n` table stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix<T> {
    dimension: usize,
    cells: Vec<T>,
}

/// Edge weights between vertex indices; `None` is the "no edge" sentinel.
pub type WeightMatrix = Matrix<Option<f64>>;

impl<T: Clone> Matrix<T> {
    /// Creates an `n × n` matrix with every cell set to `fill`.
    #[must_use]
    pub fn new(dimension: usize, fill: T) -> Self {
        Self {
            dimension,
            cells: vec![fill; dimension * dimension],
        }
    }

    /// Returns a copy resized to `dimension`, keeping the overlapping
    /// top-left block and setting every newly exposed cell to `fill`.
    #[must_use]
    pub fn resized(&self, dimension: usize, fill: T) -> Self {
        let mut resized = Self::new(dimension, fill);
        let keep = self.dimension.min(dimension);
        for row in 0..keep {
            let src = &self.cells[row * self.dimension..row * self.dimension + keep];
            resized.cells[row * dimension..row * dimension + keep].clone_from_slice(src);
        }
        resized
    }

    /// Sets every cell of row `index` and column `index` to `value`.
    pub fn fill_cross(&mut self, index: usize, value: T) {
        for other in 0..self.dimension {
            self[(index, other)] = value.clone();
            self[(other, index)] = value.clone();
        }
    }

    /// Returns the matrix as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.dimension.max(1))
            .take(self.dimension)
            .map(<[T]>::to_vec)
            .collect()
    }
}

impl<T> Matrix<T> {
    /// Returns `n`, the number of rows (and columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dimension && col < self.dimension {
            self.cells.get(row * self.dimension + col)
        } else {
            None
        }
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.dimension, "row {row} out of bounds");
        &self.cells[row * self.dimension..(row + 1) * self.dimension]
    }
}

impl Matrix<Option<f64>> {
    /// Returns the finite weight at `(row, col)`, or `None` for the sentinel
    /// or an out-of-bounds cell.
    #[must_use]
    pub fn weight(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col).copied().flatten()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.dimension && col < self.dimension,
            "cell ({row}, {col}) out of bounds for dimension {}",
            self.dimension
        );
        &self.cells[row * self.dimension + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.dimension && col < self.dimension,
            "cell ({row}, {col}) out of bounds for dimension {}",
            self.dimension
        );
        &mut self.cells[row * self.dimension + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_and_index() {
        let mut m = Matrix::new(3, 0u8);
        m[(1, 2)] = 7;
        assert_eq!(m.dimension(), 3);
        assert_eq!(m[(1, 2)], 7);
        assert_eq!(m.get(2, 1), Some(&0));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_resized_fills_new_cells() {
        let mut m: WeightMatrix = Matrix::new(2, None);
        m[(0, 1)] = Some(4.0);
        m[(1, 1)] = Some(0.0);

        let grown = m.resized(4, None);
        assert_eq!(grown.dimension(), 4);
        assert_eq!(grown.weight(0, 1), Some(4.0));
        assert_eq!(grown.weight(1, 1), Some(0.0));
        assert_eq!(grown.weight(0, 3), None);
        assert_eq!(grown.weight(3, 3), None);
    }

    #[test]
    fn test_resized_truncates() {
        let mut m = Matrix::new(3, 1);
        m[(2, 2)] = 9;
        m[(0, 1)] = 5;
        let small = m.resized(2, 0);
        assert_eq!(small.to_rows(), vec![vec![1, 5], vec![1, 1]]);
    }

    #[test]
    fn test_fill_cross() {
        let mut m = Matrix::new(3, 1);
        m.fill_cross(1, 0);
        assert_eq!(m.to_rows(), vec![vec![1, 0, 1], vec![0, 0, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn test_row() {
        let mut m = Matrix::new(2, 'a');
        m[(1, 0)] = 'b';
        assert_eq!(m.row(1), &['b', 'a']);
    }

    #[test]
    fn test_empty_matrix() {
        let m: Matrix<u8> = Matrix::new(0, 0);
        assert!(m.to_rows().is_empty());
        assert_eq!(m.get(0, 0), None);
    }

    proptest! {
        #[test]
        fn prop_resize_preserves_overlap(
            n in 1usize..8,
            grow in 0usize..8,
            r in 0usize..8,
            c in 0usize..8,
        ) {
            let r = r % n;
            let c = c % n;
            let mut m = Matrix::new(n, 0i32);
            m[(r, c)] = 42;
            let grown = m.resized(n + grow, -1);
            prop_assert_eq!(grown[(r, c)], 42);
            if grow > 0 {
                prop_assert_eq!(grown[(n, n)], -1);
            }
        }
    }
}
