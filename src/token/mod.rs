// Public exports.
pub use token::{Bracket, Token};
pub use tokenizer::Tokenizer;

// Public mods.
pub mod token;

// Private mods.
mod tokenizer;
