//! Detection of a just-completed `-- ` trigger.
//!
//! The detector looks only at the characters immediately left of the cursor.
//! It fires when the last typed character is a space preceded by exactly two
//! hyphens:
//!
//! ```text
//! "well--|"  type ' '  ->  "well-- |"   match 4..6
//! "a---|"    type ' '  ->  "a--- |"     no match, hyphen run of three
//! ```
//!
//! A run of three or more hyphens (a horizontal rule, a table divider) is never
//! converted, and a line that was already converted holds an em dash instead of
//! two hyphens, so running the detector again is a no-op.

use emdash_core::{
  Position,
  chars::{
    TRIGGER,
    char_is_hyphen,
  },
};

/// The two hyphens of a live `-- ` trigger on a single line.
///
/// `start..end` is a half-open char range and always two chars wide. The
/// triggering space sits at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMatch {
  pub row:   usize,
  pub start: usize,
  pub end:   usize,
}

impl CandidateMatch {
  pub fn on_row(mut self, row: usize) -> Self {
    self.row = row;
    self
  }

  pub fn from(&self) -> Position {
    Position::new(self.row, self.start)
  }

  pub fn to(&self) -> Position {
    Position::new(self.row, self.end)
  }

  /// The second hyphen; probed for code contexts.
  pub fn code_probe(&self) -> Position {
    Position::new(self.row, self.end - 1)
  }

  /// The character right before the first hyphen; probed for URL contexts.
  pub fn url_probe(&self) -> Position {
    self.from().left(1)
  }
}

/// Checks whether the character just before `cursor_col` completed a `-- `
/// trigger on `line`. `cursor_col` counts chars, not bytes.
pub fn detect(line: &str, cursor_col: usize) -> Option<CandidateMatch> {
  if cursor_col < 3 {
    return None;
  }

  let start = cursor_col - 3;
  let mut window = line.chars().skip(start.saturating_sub(1));
  let before = if start > 0 { window.next() } else { None };
  let (first, second, trigger) = (window.next()?, window.next()?, window.next()?);

  if trigger != TRIGGER || !char_is_hyphen(first) || !char_is_hyphen(second) {
    return None;
  }
  // only exactly two hyphens qualify; `---` is left alone
  if before.is_some_and(char_is_hyphen) {
    return None;
  }

  Some(CandidateMatch {
    row: 0,
    start,
    end: start + 2,
  })
}

/// [`detect`] at a full buffer position.
pub fn detect_at(line: &str, cursor: Position) -> Option<CandidateMatch> {
  detect(line, cursor.col).map(|candidate| candidate.on_row(cursor.row))
}
