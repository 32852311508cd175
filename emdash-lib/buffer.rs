//! The host buffer capability consumed by the em dash hook.
//!
//! The hook never owns text. It reads the cursor and individual lines through
//! [`TextBuffer`] and issues at most one [`TextBuffer::replace_range`] per
//! change event. Hosts that can answer syntax questions additionally expose a
//! [`TokenProvider`] through [`TextBuffer::tokens`]; the classifier branches on
//! the presence of that capability, never on the concrete host type.
//!
//! [`RopeBuffer`] is a self-contained implementation backed by a
//! [`ropey::Rope`]. It is what the tests type into, and what a host without its
//! own line model can wrap its document in.

use std::borrow::Cow;

use emdash_core::position::{
  Position,
  char_idx_at_coords,
  coords_at_pos,
  line_len_chars,
};
use ropey::Rope;
use thiserror::Error;

use crate::markdown::MarkdownTokens;

pub type Result<T> = std::result::Result<T, BufferError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
  #[error("row {row} is out of bounds for buffer with {len} lines")]
  RowOutOfBounds { row: usize, len: usize },
  #[error("column {col} is out of bounds for row {row} of length {len}")]
  ColumnOutOfBounds { row: usize, col: usize, len: usize },
  #[error("invalid range: start {from:?} is after end {to:?}")]
  InvalidRange { from: Position, to: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// A span delimited by backticks within a paragraph.
  InlineCode,
  /// A fenced or indented code block, delimiters included.
  CodeBlock,
  Text,
}

/// A syntactic token reported by the host, `start..end` half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
  pub start: Position,
  pub end:   Position,
  pub kind:  TokenKind,
}

impl Token {
  pub fn covers(&self, pos: Position) -> bool {
    self.start <= pos && pos < self.end
  }

  /// true if the whole of `from..to` lies inside the token
  pub fn covers_range(&self, from: Position, to: Position) -> bool {
    self.start <= from && to <= self.end
  }
}

/// Structured syntax queries a host may be able to answer.
pub trait TokenProvider {
  /// The most specific token covering `pos`, if the host knows one.
  fn token_at(&self, pos: Position) -> Option<Token>;
}

pub trait TextBuffer {
  fn cursor(&self) -> Position;

  /// Text of line `row` without its terminator.
  fn line(&self, row: usize) -> Option<Cow<'_, str>>;

  fn line_count(&self) -> usize;

  /// Replaces the half-open span `from..to` with `text`.
  fn replace_range(&mut self, text: &str, from: Position, to: Position) -> Result<()>;

  fn tokens(&self) -> Option<&dyn TokenProvider> {
    None
  }
}

/// A rope-backed [`TextBuffer`] with a single cursor.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
  text:     Rope,
  cursor:   Position,
  markdown: Option<MarkdownTokens>,
}

impl RopeBuffer {
  pub fn new(text: Rope) -> Self {
    Self {
      text,
      cursor: Position::zero(),
      markdown: None,
    }
  }

  /// Enables Markdown token queries, re-parsed after every edit.
  pub fn with_markdown(mut self) -> Self {
    self.markdown = Some(MarkdownTokens::parse(&self.text));
    self
  }

  pub fn with_cursor(mut self, cursor: Position) -> Result<Self> {
    self.set_cursor(cursor)?;
    Ok(self)
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn set_cursor(&mut self, cursor: Position) -> Result<()> {
    self.check_position(cursor)?;
    self.cursor = cursor;
    Ok(())
  }

  /// Inserts `text` at the cursor and moves the cursor past it, the way a
  /// keystroke or paste would.
  pub fn insert(&mut self, text: &str) -> Result<()> {
    let cursor = self.cursor;
    self.replace_range(text, cursor, cursor)
  }

  fn check_position(&self, pos: Position) -> Result<()> {
    let len = self.text.len_lines();
    if pos.row >= len {
      return Err(BufferError::RowOutOfBounds { row: pos.row, len });
    }

    let len = line_len_chars(self.text.line(pos.row));
    if pos.col > len {
      return Err(BufferError::ColumnOutOfBounds {
        row: pos.row,
        col: pos.col,
        len,
      });
    }
    Ok(())
  }

  fn refresh_tokens(&mut self) {
    if self.markdown.is_some() {
      self.markdown = Some(MarkdownTokens::parse(&self.text));
    }
  }
}

impl From<&str> for RopeBuffer {
  fn from(text: &str) -> Self {
    Self::new(Rope::from(text))
  }
}

impl TextBuffer for RopeBuffer {
  fn cursor(&self) -> Position {
    self.cursor
  }

  fn line(&self, row: usize) -> Option<Cow<'_, str>> {
    if row >= self.text.len_lines() {
      return None;
    }
    let line = self.text.line(row);
    Some(line.slice(..line_len_chars(line)).into())
  }

  fn line_count(&self) -> usize {
    self.text.len_lines()
  }

  fn replace_range(&mut self, text: &str, from: Position, to: Position) -> Result<()> {
    if from > to {
      return Err(BufferError::InvalidRange { from, to });
    }
    self.check_position(from)?;
    self.check_position(to)?;

    let slice = self.text.slice(..);
    let from_idx = char_idx_at_coords(slice, from);
    let to_idx = char_idx_at_coords(slice, to);
    let cursor_idx = char_idx_at_coords(slice, self.cursor);

    self.text.remove(from_idx..to_idx);
    self.text.insert(from_idx, text);

    // Text after the replaced span shifts; a cursor inside it snaps to the start.
    let inserted = text.chars().count();
    let cursor_idx = if cursor_idx >= to_idx {
      cursor_idx - (to_idx - from_idx) + inserted
    } else {
      cursor_idx.min(from_idx)
    };
    self.cursor = coords_at_pos(self.text.slice(..), cursor_idx);

    tracing::trace!("replaced {:?}..{:?} with {:?}", from, to, text);
    self.refresh_tokens();
    Ok(())
  }

  fn tokens(&self) -> Option<&dyn TokenProvider> {
    self
      .markdown
      .as_ref()
      .map(|tokens| tokens as &dyn TokenProvider)
  }
}
