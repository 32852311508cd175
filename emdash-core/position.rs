use ropey::RopeSlice;

/// A single point in a text buffer: a row and a column counted in `char`s
/// from the start of that row.
/// 0-indexed as all things should be.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }

  /// The same row, `n` columns to the left (saturating at the line start).
  pub const fn left(self, n: usize) -> Self {
    Self {
      row: self.row,
      col: self.col.saturating_sub(n),
    }
  }
}

/// Number of chars on `line`, not counting its terminator.
pub fn line_len_chars(line: RopeSlice) -> usize {
  let len = line.len_chars();
  match line.get_char(len.wrapping_sub(1)) {
    Some('\n') if len >= 2 && line.char(len - 2) == '\r' => len - 2,
    Some('\n' | '\r') => len - 1,
    _ => len,
  }
}

/// Converts a char index into a `Position`.
pub fn coords_at_pos(text: RopeSlice, pos: usize) -> Position {
  let pos = pos.min(text.len_chars());
  let line = text.char_to_line(pos);
  let line_start = text.line_to_char(line);

  Position::new(line, pos - line_start)
}

/// Convert a `(row, column)` (char counts) to a char index.
///
/// If `row` exceeds the number of lines, the last line is used.
/// If `col` exceeds the length of the line, the line end (before its
/// terminator) is used.
pub fn char_idx_at_coords(text: RopeSlice, coords: Position) -> usize {
  let line = coords.row.min(text.len_lines().saturating_sub(1));
  let line_start = text.line_to_char(line);
  let len = line_len_chars(text.line(line));

  line_start + coords.col.min(len)
}
