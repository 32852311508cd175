//! Decides whether a detected `--` is live or must be kept literally.

use std::fmt;

use crate::{
  buffer::TextBuffer,
  fence::{
    FenceScan,
    is_inside_fence,
  },
  inline_code::is_inside_inline_code,
  trigger::CandidateMatch,
  url::is_inside_url,
};

/// Where a candidate sits. Only [`Context::Clear`] allows a substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
  Clear,
  FencedCode,
  InlineCode,
  Url,
}

impl Context {
  pub fn is_clear(self) -> bool {
    self == Self::Clear
  }
}

impl fmt::Display for Context {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Clear => "clear",
      Self::FencedCode => "fenced code block",
      Self::InlineCode => "inline code span",
      Self::Url => "url",
    })
  }
}

/// true if the second hyphen of `candidate` is in a fenced block or an
/// inline code span.
pub fn is_inside_code<B: TextBuffer + ?Sized>(
  buffer: &B,
  candidate: &CandidateMatch,
  scan: FenceScan,
) -> bool {
  is_inside_fence(buffer, candidate.code_probe(), scan)
    || is_inside_inline_code(buffer, candidate)
}

/// Runs every sub-check against `candidate` on `line`, stopping at the first
/// veto.
pub fn classify<B: TextBuffer + ?Sized>(
  buffer: &B,
  line: &str,
  candidate: &CandidateMatch,
  scan: FenceScan,
) -> Context {
  if is_inside_code(buffer, candidate, scan) {
    // tell the two apart for logging
    return if is_inside_fence(buffer, candidate.code_probe(), scan) {
      Context::FencedCode
    } else {
      Context::InlineCode
    };
  }

  let before: String = line.chars().take(candidate.start).collect();
  if is_inside_url(&before, line, candidate) {
    return Context::Url;
  }

  Context::Clear
}
