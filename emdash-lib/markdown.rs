//! Markdown-backed [`TokenProvider`].
//!
//! Hosts with a syntax engine answer token queries themselves. For plain
//! rope documents this module offers the same capability by running
//! `pulldown-cmark` over the snapshot and recording the spans of inline code,
//! code blocks and plain text, converted from byte offsets to char positions.

use emdash_core::position::{
  Position,
  coords_at_pos,
};
use pulldown_cmark::{
  Event,
  Options,
  Parser,
  Tag,
};
use ropey::Rope;

use crate::buffer::{
  Token,
  TokenKind,
  TokenProvider,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTokens {
  tokens: Vec<Token>,
}

impl MarkdownTokens {
  pub fn parse(text: &Rope) -> Self {
    let source = text.to_string();
    let mut tokens = Vec::new();

    let parser = Parser::new_ext(&source, Options::empty()).into_offset_iter();
    for (event, range) in parser {
      let kind = match event {
        Event::Code(_) => TokenKind::InlineCode,
        Event::Start(Tag::CodeBlock(_)) => TokenKind::CodeBlock,
        Event::Text(_) => TokenKind::Text,
        _ => continue,
      };
      if range.is_empty() {
        continue;
      }
      tokens.push(Token {
        start: position_at_byte(text, range.start),
        end: position_at_byte(text, range.end),
        kind,
      });
    }

    Self { tokens }
  }

}

impl TokenProvider for MarkdownTokens {
  fn token_at(&self, pos: Position) -> Option<Token> {
    // Text inside a code block is reported as text as well; the block wins.
    let covering = || self.tokens.iter().filter(move |token| token.covers(pos));
    covering()
      .find(|token| token.kind != TokenKind::Text)
      .or_else(|| covering().next())
      .copied()
  }
}

fn position_at_byte(text: &Rope, byte: usize) -> Position {
  let byte = byte.min(text.len_bytes());
  coords_at_pos(text.slice(..), text.byte_to_char(byte))
}
