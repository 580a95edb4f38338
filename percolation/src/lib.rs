pub mod doubling;
pub mod error;
pub mod find_union;
pub mod grid;
pub mod stats;
#[macro_use]
extern crate log;

pub use error::PercolationError;
pub use find_union::UnionFind;
pub use grid::Percolation;
pub use stats::PercolationStats;
