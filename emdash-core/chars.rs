/// The typographic em dash inserted in place of a completed `--`.
pub const EM_DASH: char = '\u{2014}';

/// The character whose insertion completes a `-- ` trigger.
pub const TRIGGER: char = ' ';

pub const HYPHEN: char = '-';

pub const BACKTICK: char = '`';

/// Leading marker of a fenced code block delimiter line.
pub const FENCE_MARKER: &str = "```";

#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  Hyphen,
  Backtick,
  Whitespace,
  Bracket,
  Other,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    HYPHEN => CharCategory::Hyphen,
    BACKTICK => CharCategory::Backtick,
    c if c.is_whitespace() => CharCategory::Whitespace,
    c if char_is_bracket(c) => CharCategory::Bracket,
    _ => CharCategory::Other,
  }
}

#[inline]
pub fn char_is_hyphen(ch: char) -> bool {
  ch == HYPHEN
}

#[inline]
pub fn char_is_backtick(ch: char) -> bool {
  ch == BACKTICK
}

/// Parentheses and square brackets, which terminate a bare URL run.
#[inline]
pub fn char_is_bracket(ch: char) -> bool {
  matches!(ch, '(' | ')' | '[' | ']')
}

/// True for characters that end the run of text following a candidate match
/// when looking for the tail of a URL.
#[inline]
pub fn char_is_url_break(ch: char) -> bool {
  matches!(
    categorize_char(ch),
    CharCategory::Whitespace | CharCategory::Bracket
  )
}

/// Char column just past the fence marker, if `line` is a fence delimiter.
///
/// Leading whitespace is skipped before looking for the marker, so an
/// indented fence still counts.
pub fn fence_marker_end(line: &str) -> Option<usize> {
  let trimmed = line.trim_start();
  if !trimmed.starts_with(FENCE_MARKER) {
    return None;
  }
  let indent = line[..line.len() - trimmed.len()].chars().count();
  Some(indent + FENCE_MARKER.chars().count())
}
