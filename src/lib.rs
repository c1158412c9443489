pub mod config;
pub mod convert;
pub mod error;
pub mod intercept;
pub mod naming;
mod shim;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{Config, PartialConfig};
pub use convert::Rewriter;
pub use error::ConfigError;
pub use intercept::{install, installed, StylePrototype, Styled};
pub use naming::to_dash_case;
pub use style::{MemoryStyle, StyleDeclaration};
