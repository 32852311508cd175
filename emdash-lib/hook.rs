//! The change hook: turns a freshly typed `-- ` into `— `.
//!
//! Hosts call [`EmDashHook::on_change`] (or [`hook`]) once per content change,
//! after the keystroke has been applied to the buffer. Each call starts from
//! the current snapshot; nothing is remembered between calls.
//!
//! ```ignore
//! use emdash_core::Position;
//! use emdash_lib::{buffer::RopeBuffer, hook::EmDashHook};
//!
//! let hook = EmDashHook::default();
//! let mut buffer = RopeBuffer::from("well--").with_cursor(Position::new(0, 6))?;
//! buffer.insert(" ")?;
//! hook.on_change(&mut buffer)?;
//! assert_eq!(buffer.text().to_string(), "well— ");
//! ```
//!
//! # Failing toward inaction
//!
//! Anything uncertain leaves the text untouched: a cursor on a missing line,
//! a candidate in code or in a URL. The only error is the host refusing the
//! replacement, which is passed back unchanged.

use crate::{
  buffer::{
    Result,
    TextBuffer,
  },
  classify::classify,
  fence::FenceScan,
  rewrite::replace,
  trigger::{
    CandidateMatch,
    detect_at,
  },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmDashHook {
  fence_scan: FenceScan,
}

impl EmDashHook {
  pub fn new(fence_scan: FenceScan) -> Self {
    Self { fence_scan }
  }

  pub fn fence_scan(&self) -> FenceScan {
    self.fence_scan
  }

  /// Returns the rewritten match, or `None` if the text was left alone.
  pub fn on_change<B: TextBuffer + ?Sized>(&self, buffer: &mut B) -> Result<Option<CandidateMatch>> {
    hook(buffer, self.fence_scan)
  }
}

pub fn hook<B: TextBuffer + ?Sized>(
  buffer: &mut B,
  fence_scan: FenceScan,
) -> Result<Option<CandidateMatch>> {
  let cursor = buffer.cursor();
  let Some(line) = buffer.line(cursor.row) else {
    tracing::trace!("em dash hook: no line at cursor {:?}", cursor);
    return Ok(None);
  };

  let Some(candidate) = detect_at(&line, cursor) else {
    return Ok(None);
  };

  let context = classify(&*buffer, &line, &candidate, fence_scan);
  if !context.is_clear() {
    tracing::trace!("em dash hook: keeping {:?}, inside {}", candidate, context);
    return Ok(None);
  }
  drop(line);

  replace(buffer, &candidate)?;
  tracing::debug!("em dash hook: replaced {:?}", candidate);
  Ok(Some(candidate))
}
