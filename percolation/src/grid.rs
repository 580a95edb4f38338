//! N-by-N grid of sites on top of a disjoint-set forest.
//! Site (row, col) is labeled `row * N + col + 1`. Label 0 is the virtual top node,
//! and label `N * N + 1` is the virtual bottom node.
//!
//! Two forests are kept. `flow` has both virtual nodes and answers [Percolation::percolates].
//! `fill` has only the top node, so that [Percolation::is_full] never sees a path that
//! goes through the bottom node (backwash).
use crate::error::PercolationError;
use crate::find_union::{UnionFind, WeightedHalving};

/// Label of the virtual top node.
pub const TOP: usize = 0;

/// The label of the site (row, col) in a grid with `size` columns.
pub fn site_label(size: usize, row: usize, col: usize) -> usize {
    row * size + col + 1
}

#[derive(Debug, Clone)]
pub struct Percolation<U = WeightedHalving> {
    size: usize,
    /// open[label]. The virtual nodes are always open.
    open: Vec<bool>,
    open_count: usize,
    flow: U,
    fill: U,
}

impl<U: UnionFind> Percolation<U> {
    /// Create a grid with all the sites blocked.
    pub fn new(size: usize) -> Result<Self, PercolationError> {
        if size == 0 {
            return Err(PercolationError::InvalidGridSize(size));
        }
        let sites = size * size;
        let bottom = sites + 1;
        let mut open = vec![false; sites + 2];
        open[TOP] = true;
        open[bottom] = true;
        let mut flow = U::new(sites + 2);
        let mut fill = U::new(sites + 1);
        // Blocked sites never union with anything else, so they can join
        // the virtual nodes right away.
        for col in 0..size {
            let top_row = site_label(size, 0, col);
            flow.union(top_row, TOP);
            fill.union(top_row, TOP);
            flow.union(site_label(size, size - 1, col), bottom);
        }
        Ok(Self {
            size,
            open,
            open_count: 0,
            flow,
            fill,
        })
    }
    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }
    /// The number of open sites.
    pub fn open_count(&self) -> usize {
        self.open_count
    }
    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }
    fn label(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "site ({}, {}) is out of the {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        site_label(self.size, row, col)
    }
    /// Open the site (row, col) and connect it to its open neighbors.
    pub fn open(&mut self, row: usize, col: usize) {
        let current = self.label(row, col);
        if !self.open[current] {
            self.open[current] = true;
            self.open_count += 1;
        }
        let size = self.size;
        let neighbors = [
            (0 < row).then(|| current - size),
            (row + 1 < size).then(|| current + size),
            (0 < col).then(|| current - 1),
            (col + 1 < size).then(|| current + 1),
        ];
        for &next in neighbors.iter().flatten() {
            if self.open[next] {
                self.flow.union(current, next);
                self.fill.union(current, next);
            }
        }
    }
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[self.label(row, col)]
    }
    /// Return true if the site is open and reachable from the top row through open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> bool {
        let current = self.label(row, col);
        self.open[current] && self.fill.connected(current, TOP)
    }
    /// Return true if some open path connects the top row and the bottom row.
    pub fn percolates(&mut self) -> bool {
        // In a 1x1 grid the only site touches both virtual nodes before it is open.
        let bottom = self.bottom();
        0 < self.open_count && self.flow.connected(TOP, bottom)
    }
}
