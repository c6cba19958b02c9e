//! # percolation
//!
//! Site percolation on an N×N grid with Monte Carlo threshold estimation.
//!
//! Each site of the grid is either blocked or open. The system **percolates**
//! when the top row is connected to the bottom row through a chain of open,
//! orthogonally adjacent sites. Opening random sites one at a time until the
//! grid percolates, and recording the open fraction, samples the percolation
//! threshold p* (≈ 0.5927 on the square lattice).
//!
//! ## Layout
//!
//! - [`union_find`]: weighted quick-union with path compression
//! - [`grid`]: the incremental percolation model ([`Percolation`])
//! - [`sampler`] / [`statistics`]: injected randomness and summary statistics
//! - [`stats`]: repeated trials and a 95% confidence interval ([`PercolationStats`])
//! - [`config`]: experiment configuration shared with the CLI
//!
//! ```
//! use percolation::{Percolation, PercolationError, PercolationStats};
//!
//! let mut grid = Percolation::new(3)?;
//! grid.open(1, 1)?;
//! grid.open(2, 1)?;
//! assert!(!grid.percolates());
//! grid.open(3, 1)?;
//! assert!(grid.percolates());
//!
//! let stats = PercolationStats::with_seed(20, 30, 7)?;
//! assert!(stats.confidence_lo() <= stats.mean());
//! # Ok::<(), PercolationError>(())
//! ```

pub mod error;
pub mod union_find;
pub mod grid;
pub mod sampler;
pub mod statistics;
pub mod config;
pub mod stats;

pub use error::{PercolationError, Result};
pub use grid::{Percolation, SiteState};
pub use stats::PercolationStats;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::union_find::*;
    pub use crate::grid::*;
    pub use crate::sampler::*;
    pub use crate::statistics::*;
    pub use crate::config::*;
    pub use crate::stats::*;
}
