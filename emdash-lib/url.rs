//! URL protection.
//!
//! A `--` that is part of an absolute URL is left alone, wherever in the URL it
//! appears. The URL is reassembled around the candidate from the text before
//! it, the hyphens and the run that follows on the same line:
//!
//! ```text
//! line:       "see https://a-- b.com now"
//! before:     "see https://a"
//! following:  "b.com"              (triggering space skipped)
//! candidate:  "see https://a--b.com"
//! ```

use emdash_core::chars::{
  TRIGGER,
  char_is_bracket,
  char_is_url_break,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::trigger::CandidateMatch;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"(?i)(?:https?|ftp)://[a-z0-9-]+(?:\.[a-z0-9-]+)+(?::[0-9]+)?(?:[/?#][a-z0-9\-._~:/?#\[\]@!$&'()*+,;=%]*)?",
  )
  .expect("url regex should compile")
});

/// Rebuilds the text a URL around `candidate` could span.
///
/// Brackets in front of the hyphens are blanked out, so a Markdown link such
/// as `[t](http://a.com/x)` ends at its closing parenthesis. Blanking keeps
/// char offsets aligned with `line`.
fn url_candidate(text_before: &str, line: &str, candidate: &CandidateMatch) -> String {
  let mut following = line.chars().skip(candidate.end).peekable();
  following.next_if_eq(&TRIGGER);

  let mut text = String::with_capacity(line.len());
  text.extend(
    text_before
      .chars()
      .map(|ch| if char_is_bracket(ch) { ' ' } else { ch }),
  );
  text.push_str("--");
  text.extend(following.take_while(|&ch| !char_is_url_break(ch)));
  text
}

/// true if the hyphens of `candidate` belong to an absolute URL on `line`.
///
/// `text_before` is the part of `line` in front of the first hyphen.
pub fn is_inside_url(text_before: &str, line: &str, candidate: &CandidateMatch) -> bool {
  let text = url_candidate(text_before, line, candidate);
  let Some((before, _)) = text.char_indices().nth(candidate.url_probe().col) else {
    return false;
  };

  URL_REGEX
    .find_iter(&text)
    .any(|url| url.as_str().contains("--") && url.range().contains(&before))
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::trigger::detect;

  fn check(line: &str, cursor: usize) -> bool {
    let candidate = detect(line, cursor).unwrap();
    let before: String = line.chars().take(candidate.start).collect();
    is_inside_url(&before, line, &candidate)
  }

  #[test]
  fn builds_candidate_from_following_run() {
    let line = "see https://a-- b.com/x(y) now";
    let candidate = detect(line, 16).unwrap();
    assert_eq!(
      url_candidate("see https://a", line, &candidate),
      "see https://a--b.com/x"
    );
  }

  #[test]
  fn protects_host() {
    // typing the space into an existing URL
    assert!(check("Visit https://a-- b.com now", 18));
  }

  #[test]
  fn protects_path_query_and_fragment() {
    assert!(check("see http://example.com/a-- more text", 27));
    assert!(check("http://example.com/?q=a-- ", 26));
    assert!(check("ftp://files.example.org/x#sec-- ", 32));
    assert!(check("HTTPS://Example.COM/a-- ", 24));
  }

  #[test]
  fn hyphens_after_the_url_are_live() {
    let line = "see http://example.com/a--b/path more-- text";
    assert!(!check(line, 40));
  }

  #[test]
  fn requires_scheme_and_dotted_host() {
    assert!(!check("example.com/a-- ", 16));
    assert!(!check("http://localhost/a-- ", 21));
    assert!(!check("mailto:me@example.com-- ", 24));
  }

  #[test]
  fn link_parenthesis_ends_the_url() {
    assert!(!check("[t](http://a.com/x)-- more", 22));
    assert!(check("(see http://a.com/x-- ", 22));
  }

  #[test]
  fn brackets_end_the_url() {
    // markdown link text, the URL itself is fine
    assert!(!check("[a-- ](https://example.com)", 5));
  }
}
