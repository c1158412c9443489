// Interception layer: routes every style write through the rewriter
// before it reaches the native setter

pub mod global;
pub mod prototype;
pub mod styled;

#[cfg(test)]
mod tests;

pub use global::{install, installed};
pub use prototype::{StylePrototype, OFFSET_PROPERTIES};
pub use styled::Styled;
