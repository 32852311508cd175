use emdash_core::{
  Position,
  chars::EM_DASH,
};

use crate::{
  Tendril,
  buffer::{
    Result,
    TextBuffer,
  },
  trigger::CandidateMatch,
};

/// A single range replacement, `from..to` half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub from: Position,
  pub to:   Position,
  pub text: Tendril,
}

/// The edit turning the two hyphens of `candidate` into one em dash. The
/// triggering space after them is not part of it.
pub fn edit_for(candidate: &CandidateMatch) -> Edit {
  let mut text = Tendril::new();
  text.push(EM_DASH);
  Edit {
    from: candidate.from(),
    to: candidate.to(),
    text,
  }
}

pub fn replace<B: TextBuffer + ?Sized>(buffer: &mut B, candidate: &CandidateMatch) -> Result<()> {
  let edit = edit_for(candidate);
  buffer.replace_range(&edit.text, edit.from, edit.to)
}
