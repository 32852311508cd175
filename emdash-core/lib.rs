pub mod chars;
pub mod position;

pub use position::Position;
