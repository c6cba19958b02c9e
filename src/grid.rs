//! N×N site percolation grid with incremental connectivity.
//!
//! Sites are addressed by 1-based `(row, col)` in `[1, N]` and stored row-major
//! in a flat vector of N² entries: site `(r, c)` lives at `(r-1)·N + (c-1)`.
//!
//! Connectivity is tracked by a single [`UnionFind`] over N² + 2 elements. The
//! two extra elements are virtual nodes:
//! - `top_root` (index N²) is joined to every open site in row 1
//! - `bottom_root` (index N² + 1) is joined to every open site in row N
//!
//! The grid percolates as soon as the two virtual nodes share a root. Opening a
//! site only touches its four neighbours, so no traversal is ever needed.
//!
//! Because the same structure answers [`Percolation::is_full`], a site that is
//! only connected to the bottom row reads as full once the grid percolates
//! through some other path ("backwash"). This matches the classic single
//! structure formulation and is kept as-is.

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// State of a single site. A site moves from `Blocked` to `Open` once and
/// never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteState {
    #[default]
    Blocked,
    Open,
}

/// Site percolation model on an N×N grid.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    sites: Vec<SiteState>,
    uf: UnionFind,
    top_root: usize,
    bottom_root: usize,
    open_count: usize,
}

impl Percolation {
    /// Create an N×N grid with every site blocked.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::invalid("grid size must be positive, got 0"));
        }
        let num_sites = n
            .checked_mul(n)
            .filter(|nn| nn.checked_add(2).is_some())
            .ok_or_else(|| PercolationError::invalid(format!("grid size {} is too large", n)))?;

        Ok(Self {
            n,
            sites: vec![SiteState::Blocked; num_sites],
            uf: UnionFind::new(num_sites + 2),
            top_root: num_sites,
            bottom_root: num_sites + 1,
            open_count: 0,
        })
    }

    /// Grid dimension N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Total number of sites (N²).
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::invalid(format!(
                "site ({}, {}) is outside [1, {}]",
                row, col, self.n
            )));
        }
        Ok(())
    }

    /// Flat index of an already validated site.
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    fn is_open_at(&self, idx: usize) -> bool {
        self.sites[idx] == SiteState::Open
    }

    /// Open site `(row, col)` if it is not open already.
    ///
    /// The site is joined to each open orthogonal neighbour, and to the top or
    /// bottom virtual node when it sits in the first or last row.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;

        let n = self.n;
        let target = self.index(row, col);
        if self.is_open_at(target) {
            return Ok(());
        }

        self.sites[target] = SiteState::Open;
        self.open_count += 1;

        if row == 1 {
            self.uf.union(target, self.top_root);
        }
        if row == n {
            self.uf.union(target, self.bottom_root);
        }

        let neighbours = [
            (col > 1).then(|| target - 1),     // left
            (col < n).then(|| target + 1),     // right
            (row > 1).then(|| target - n),     // up
            (row < n).then(|| target + n),     // down
        ];
        for idx in neighbours.into_iter().flatten() {
            if self.is_open_at(idx) {
                self.uf.union(target, idx);
            }
        }

        Ok(())
    }

    /// Is site `(row, col)` open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.is_open_at(self.index(row, col)))
    }

    /// Is site `(row, col)` full, i.e. open and connected to the top row?
    ///
    /// Needs `&mut self` because lookups compress union-find paths.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        let idx = self.index(row, col);
        Ok(self.is_open_at(idx) && self.uf.connected(idx, self.top_root))
    }

    /// Number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Fraction of the grid that is open, in `[0, 1]`.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.num_sites() as f64
    }

    /// Does the system percolate (top row connected to bottom row)?
    pub fn percolates(&mut self) -> bool {
        self.uf.connected(self.top_root, self.bottom_root)
    }
}
