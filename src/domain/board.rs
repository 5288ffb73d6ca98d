/// Board holds the N×N grid of tile values.
/// A cell is either empty (0) or a power of two >= 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Deep-copy a caller supplied layout.
    /// Returns None unless the layout is non-empty and square.
    pub fn from_rows(rows: &[Vec<u32>]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.len() != size) {
            return None;
        }

        Some(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell value (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        (row < self.size && col < self.size).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell value; out-of-range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = value;
        }
    }

    /// Independent copy of the grid as nested rows
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size.max(1)).map(<[u32]>::to_vec).collect()
    }

    /// Coordinates of all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|&(_, _, value)| value == 0)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    /// True if two neighbours in any row or column hold the same value
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        let value = |r: usize, c: usize| self.cells[self.index(r, c)];

        (0..n).any(|i| {
            (1..n).any(|j| value(i, j - 1) == value(i, j) || value(j - 1, i) == value(j, i))
        })
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Position- and value-sensitive encoding used to detect board changes
    pub fn fingerprint(&self) -> String {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(u32::to_string).collect::<Vec<_>>().join(","))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Swap across the main diagonal, in place
    pub fn transpose(&mut self) {
        let n = self.size;
        for r in 0..n {
            for c in (r + 1)..n {
                self.cells.swap(r * n + c, c * n + r);
            }
        }
    }

    /// Slide every row toward column 0 (or the far edge when `reverse`).
    /// Returns the points earned by merges.
    pub fn slide_rows(&mut self, reverse: bool) -> u64 {
        let n = self.size;
        let mut points = 0;
        for r in 0..n {
            let (row, earned) = slide_and_merge(&self.cells[r * n..(r + 1) * n], reverse);
            self.cells[r * n..(r + 1) * n].copy_from_slice(&row);
            points += earned;
        }
        points
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i / self.size, i % self.size, value))
    }
}

/// Move a single line toward its start and merge equal neighbours once.
///
/// With `reverse` the line is flipped before and after, so moving toward the
/// far edge reuses the same left-move logic. Returns the new line and the sum
/// of the merged tile values.
pub fn slide_and_merge(row: &[u32], reverse: bool) -> (Vec<u32>, u64) {
    let mut line = row.to_vec();
    if reverse {
        line.reverse();
    }

    let mut compact: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();

    let mut points = 0;
    let mut i = 0;
    while i + 1 < compact.len() {
        if compact[i] == compact[i + 1] {
            compact[i] *= 2;
            points += u64::from(compact[i]);
            compact[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }

    let mut merged: Vec<u32> = compact.into_iter().filter(|&v| v != 0).collect();
    merged.resize(row.len(), 0);

    if reverse {
        merged.reverse();
    }
    (merged, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slide_and_merge_left() {
        assert_eq!(slide_and_merge(&[0, 2, 2, 4], false), (vec![4, 4, 0, 0], 4));
        assert_eq!(slide_and_merge(&[2, 0, 0, 2], false), (vec![4, 0, 0, 0], 4));
        assert_eq!(slide_and_merge(&[0, 0, 0, 8], false), (vec![8, 0, 0, 0], 0));
    }

    #[test]
    fn test_slide_and_merge_right() {
        assert_eq!(slide_and_merge(&[2, 2, 4, 0], true), (vec![0, 0, 4, 4], 4));
        assert_eq!(slide_and_merge(&[2, 2, 2, 0], true), (vec![0, 0, 2, 4], 4));
    }

    #[test]
    fn test_three_equal_merge_leftmost_pair_only() {
        assert_eq!(slide_and_merge(&[2, 2, 2, 0], false), (vec![4, 2, 0, 0], 4));
        assert_eq!(slide_and_merge(&[4, 4, 4, 4], false), (vec![8, 8, 0, 0], 16));
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // 4 produced from 2+2 must not absorb the neighbouring 4
        assert_eq!(slide_and_merge(&[2, 2, 4, 0], false), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn test_from_rows_rejects_bad_layouts() {
        assert!(Board::from_rows(&[]).is_none());
        assert!(Board::from_rows(&[vec![2, 0], vec![0]]).is_none());
        assert!(Board::from_rows(&[vec![2, 0, 0], vec![0, 0, 0]]).is_none());
    }

    #[test]
    fn test_rows_is_a_copy() {
        let board = Board::from_rows(&[vec![2, 0], vec![0, 4]]).unwrap();
        let mut rows = board.rows();
        rows[0][0] = 1024;
        assert_eq!(board.get(0, 0), Some(2));
    }

    #[test]
    fn test_transpose() {
        let mut board = Board::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        board.transpose();
        assert_eq!(board.rows(), vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);
        board.transpose();
        assert_eq!(board.rows(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    }

    #[test]
    fn test_adjacent_pair_detection() {
        let checker = Board::from_rows(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ])
        .unwrap();
        assert!(!checker.has_adjacent_pair());
        assert!(!checker.has_empty_cell());

        let mut vertical = checker.clone();
        vertical.set(1, 0, 2);
        assert!(vertical.has_adjacent_pair());
    }

    #[test]
    fn test_fingerprint_sees_pure_slide() {
        let before = Board::from_rows(&[vec![0, 2], vec![0, 0]]).unwrap();
        let mut after = before.clone();
        after.slide_rows(false);
        assert_ne!(before.fingerprint(), after.fingerprint());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(&[vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(board.empty_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(board.max_tile(), 4);
    }
}
