/// Maps `(row, col)` to its position in a flat row-major buffer with
/// `cols` columns.
///
/// Every weight access in the forward and backward passes goes through this
/// helper so both passes agree on the layout.
#[inline]
pub fn idx(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

#[cfg(test)]
mod tests {
    use super::idx;

    #[test]
    fn walks_rows_then_columns() {
        let cols = 3;
        let visited: Vec<usize> = (0..2)
            .flat_map(|r| (0..cols).map(move |c| idx(r, c, cols)))
            .collect();
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn single_column_is_row_index() {
        assert_eq!(idx(7, 0, 1), 7);
    }
}
