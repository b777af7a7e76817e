//! Sapling - a directory tree generator with noise filtering

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{print_tree, summary, write_tree_to_file};
pub use tree::{Tree, TreeConfig, generate};
