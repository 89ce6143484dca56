use super::common::HighDimError;
use super::point::GaussianPoint;

/// `size x size` matrix where only cells `[i][j]` with `i < j` carry values.
/// The diagonal and lower triangle stay zero and are reported as unset.
#[derive(Debug, Clone, PartialEq)]
pub struct UpperTriangularMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl UpperTriangularMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < j && j < self.size {
            Some(self.cells[i * self.size + j])
        } else {
            None
        }
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < j && j < self.size);
        self.cells[i * self.size + j] = value;
    }

    /// Dense rows, zeros outside the upper triangle.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}

/// One value per unordered pair, both as a flat list in `(i, j)`, `i < j`
/// order and as an upper-triangular matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseSet {
    pub values: Vec<f64>,
    pub matrix: UpperTriangularMatrix,
}

impl PairwiseSet {
    /// Applies `f` to every pair of `points`. The first failing pair aborts
    /// the whole batch.
    ///
    /// O(n^2) memory for the matrix, O(n^2 * d) time for the usual metrics.
    pub fn compute<F, E>(points: &[GaussianPoint], mut f: F) -> Result<Self, HighDimError>
    where
        F: FnMut(&[f64], &[f64]) -> Result<f64, E>,
        HighDimError: From<E>,
    {
        let n = points.len();
        let mut matrix = UpperTriangularMatrix::new(n);
        let mut values = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in (i + 1)..n {
                let value = f(&points[i].values, &points[j].values)?;
                matrix.set(i, j, value);
                values.push(value);
            }
        }

        Ok(Self { values, matrix })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Yields `(i, j, value)` for every pair in list order.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.matrix.size();
        (0..n)
            .flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
            .zip(self.values.iter().copied())
            .map(|((i, j), v)| (i, j, v))
    }
}
