//! Tree generation: enumeration, filtering, and rendering.

pub mod config;
pub mod filter;
pub mod generator;

pub use config::{DEFAULT_EXCLUDED_DIRS, TreeConfig};
pub use filter::{Entry, prepare};
pub use generator::{Tree, generate};
