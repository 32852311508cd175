use smartstring::{LazyCompact, SmartString};

pub mod buffer;
pub mod classify;
pub mod fence;
pub mod hook;
pub mod inline_code;
pub mod markdown;
pub mod rewrite;
pub mod trigger;
pub mod url;

pub type Tendril = SmartString<LazyCompact>;
