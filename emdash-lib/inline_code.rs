//! Inline code span detection.
//!
//! When the host exposes a [`TokenProvider`](crate::buffer::TokenProvider),
//! its token at the second hyphen decides. Otherwise backticks on the probe's
//! line are counted: an odd number before the probe and at least one after it
//! means the probe sits in an open span that is closed later on the line.

use emdash_core::chars::char_is_backtick;

use crate::{
  buffer::{
    TextBuffer,
    Token,
    TokenKind,
  },
  trigger::CandidateMatch,
};

pub fn is_inside_inline_code<B: TextBuffer + ?Sized>(buffer: &B, candidate: &CandidateMatch) -> bool {
  let probe = candidate.code_probe();

  if let Some(token) = buffer.tokens().and_then(|tokens| tokens.token_at(probe)) {
    return token_is_code(&token, candidate);
  }

  buffer
    .line(probe.row)
    .is_some_and(|line| backtick_span_contains(&line, probe.col))
}

/// Only inline code counts; fenced blocks are found by line scanning and
/// indented blocks are prose as far as dashes go.
fn token_is_code(token: &Token, candidate: &CandidateMatch) -> bool {
  // Both hyphens must be in the span; an opening backtick right before
  // `--` still leaves the first hyphen inside.
  token.kind == TokenKind::InlineCode && token.covers_range(candidate.from(), candidate.to())
}

/// true if `col` lies after an unmatched backtick that is closed later on
/// the line
pub fn backtick_span_contains(line: &str, col: usize) -> bool {
  let mut before = 0usize;
  let mut after = false;

  for (idx, ch) in line.chars().enumerate() {
    if !char_is_backtick(ch) {
      continue;
    }
    if idx < col {
      before += 1;
    } else if idx > col {
      after = true;
      break;
    }
  }

  before % 2 == 1 && after
}
