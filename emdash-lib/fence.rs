//! Fenced code block detection.
//!
//! A fence delimiter is any line whose content, after leading whitespace,
//! starts with three backticks. Delimiters toggle between "outside" and
//! "inside"; whether a probe sits inside a block is the parity of the
//! delimiters above it, plus a look at the probe's own line:
//!
//! ```text
//! ```rust      <- opens; a probe past the marker is inside
//! a -- b       <- inside
//! ```          <- closes; a probe after the marker is outside
//! ```
//!
//! [`FenceScan::Document`] counts delimiters from the top of the buffer and is
//! exact. [`FenceScan::Window`] only looks a fixed number of lines up, trading
//! accuracy for bounded work: a block opened further up than the window is
//! not seen.

use emdash_core::{
  Position,
  chars::fence_marker_end,
};
use crate::buffer::TextBuffer;

pub const DEFAULT_LOOKBACK: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FenceScan {
  /// Track fence parity from the first line of the buffer.
  #[default]
  Document,
  /// Only scan this many lines above the probe.
  Window(usize),
}

impl FenceScan {
  pub const fn window() -> Self {
    Self::Window(DEFAULT_LOOKBACK)
  }

  fn first_row(self, probe_row: usize) -> usize {
    match self {
      Self::Document => 0,
      Self::Window(lookback) => probe_row.saturating_sub(lookback),
    }
  }
}

fn is_fence_line<B: TextBuffer + ?Sized>(buffer: &B, row: usize) -> bool {
  buffer
    .line(row)
    .is_some_and(|line| fence_marker_end(&line).is_some())
}

pub fn is_inside_fence<B: TextBuffer + ?Sized>(buffer: &B, probe: Position, scan: FenceScan) -> bool {
  let inside = (scan.first_row(probe.row)..probe.row)
    .filter(|&row| is_fence_line(buffer, row))
    .count()
    % 2
    == 1;

  let Some(line) = buffer.line(probe.row) else {
    return inside;
  };

  match fence_marker_end(&line) {
    None => inside,
    // closing delimiter: only what precedes the end of the marker is in the block
    Some(marker_end) if inside => probe.col < marker_end,
    // opening delimiter: the cursor is still on the fence until past the marker
    Some(marker_end) => probe.col >= marker_end,
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::buffer::RopeBuffer;

  const DOC: &str = "intro a-- b\n```\ncode -- here\n```\noutro c-- d";

  #[test]
  fn lines_between_fences_are_inside() {
    let buffer = RopeBuffer::from(DOC);
    let scan = FenceScan::Document;

    assert!(!is_inside_fence(&buffer, Position::new(0, 7), scan));
    assert!(is_inside_fence(&buffer, Position::new(2, 6), scan));
    assert!(!is_inside_fence(&buffer, Position::new(4, 7), scan));
  }

  #[test]
  fn unclosed_fence_extends_to_the_end() {
    let buffer = RopeBuffer::from("text\n  ```python\na -- b\nmore\nstill --");
    for row in 2..5 {
      assert!(is_inside_fence(&buffer, Position::new(row, 1), FenceScan::Document));
    }
  }

  #[test]
  fn opening_fence_line() {
    let buffer = RopeBuffer::from("  ```-- x");
    let scan = FenceScan::Document;
    // on the marker itself
    assert!(!is_inside_fence(&buffer, Position::new(0, 0), scan));
    assert!(!is_inside_fence(&buffer, Position::new(0, 4), scan));
    // past the marker, in the info string
    assert!(is_inside_fence(&buffer, Position::new(0, 5), scan));
    assert!(is_inside_fence(&buffer, Position::new(0, 6), scan));
  }

  #[test]
  fn closing_fence_line() {
    let buffer = RopeBuffer::from("```\ncode\n```-- after");
    let scan = FenceScan::Document;
    assert!(is_inside_fence(&buffer, Position::new(2, 1), scan));
    assert!(!is_inside_fence(&buffer, Position::new(2, 4), scan));
  }

  #[test]
  fn second_block_after_closed_one() {
    let buffer = RopeBuffer::from("```\na\n```\nprose\n```\nb -- c\n```");
    let scan = FenceScan::Document;
    assert!(!is_inside_fence(&buffer, Position::new(3, 2), scan));
    assert!(is_inside_fence(&buffer, Position::new(5, 3), scan));
  }

  #[test]
  fn window_misses_distant_opening_fence() {
    let mut text = String::from("```\n");
    for _ in 0..DEFAULT_LOOKBACK + 2 {
      text.push_str("let x = 1;\n");
    }
    text.push_str("a -- b");
    let buffer = RopeBuffer::from(text.as_str());
    let probe = Position::new(DEFAULT_LOOKBACK + 3, 3);

    assert!(is_inside_fence(&buffer, probe, FenceScan::Document));
    assert!(!is_inside_fence(&buffer, probe, FenceScan::window()));
    assert!(is_inside_fence(&buffer, probe, FenceScan::Window(DEFAULT_LOOKBACK + 3)));
  }

  #[test]
  fn inline_triple_backticks_are_not_fences() {
    let buffer = RopeBuffer::from("use ``` for fences\nthen a -- b");
    assert!(!is_inside_fence(&buffer, Position::new(1, 8), FenceScan::Document));
  }
}
