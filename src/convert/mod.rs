// Pixel-to-rem conversion engine
// scanner finds lengths, converter rounds them, rewriter ties both to a config

pub mod converter;
pub mod rewriter;
pub mod scanner;

pub use converter::{format_number, round_to_precision, Converter, TARGET_UNIT};
pub use rewriter::Rewriter;
pub use scanner::{Scanner, Token};
