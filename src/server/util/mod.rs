pub mod parse;
pub mod reward;
