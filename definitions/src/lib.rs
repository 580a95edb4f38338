//! Definitions -- A tiny interface for the percolation experiments.
//! The library and the command line exchange these structures, and a report can be
//! dumped as JSON or read back from a TOML profile. Nothing here does any computation.

use serde::{Deserialize, Serialize};

/// The union-find algorithm backing a grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Direct-mapped component ids. O(1) find, O(N) union.
    QuickFind,
    /// Unbalanced parent pointers.
    QuickUnion,
    /// Union by size, full path compression.
    WeightedCompression,
    /// Union by size, path halving.
    WeightedHalving,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::QuickFind,
        Strategy::QuickUnion,
        Strategy::WeightedCompression,
        Strategy::WeightedHalving,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::QuickFind => "quick-find",
            Strategy::QuickUnion => "quick-union",
            Strategy::WeightedCompression => "weighted-compression",
            Strategy::WeightedHalving => "weighted-halving",
        }
    }
}

impl std::default::Default for Strategy {
    fn default() -> Self {
        Strategy::WeightedHalving
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .find(|x| x.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown strategy:{}", s))
    }
}

/// One Monte Carlo experiment: `trials` independent grids of `size` x `size` sites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperimentConfig {
    pub size: usize,
    pub trials: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub strategy: Strategy,
}

impl ExperimentConfig {
    pub fn new(size: usize, trials: usize, seed: u64, strategy: Strategy) -> Self {
        Self {
            size,
            trials,
            seed,
            strategy,
        }
    }
}

/// Summary of an experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdReport {
    pub size: usize,
    pub trials: usize,
    pub strategy: Strategy,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    /// Wall clock time in seconds.
    pub elapsed: f64,
}

impl std::fmt::Display for ThresholdReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "N={}\tT={}\t{}\tmean={:.5}\tstddev={:.5}\tconfidence=[{:.5},{:.5}]\ttime={:.3}",
            self.size,
            self.trials,
            self.strategy,
            self.mean,
            self.stddev,
            self.confidence_low,
            self.confidence_high,
            self.elapsed
        )
    }
}

/// A row of the doubling experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoublingRow {
    pub trials: usize,
    pub size: usize,
    /// size * size.
    pub sites: usize,
    pub mean: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub seconds: f64,
    /// Ratio to the elapsed time of the previous row.
    pub ratio: f64,
}

impl std::fmt::Display for DoublingRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "T={} N={:3} N^2={:6} mean={:5.3} confidence=[{:5.3},{:5.3}] time={:5.2} ratio={:3.2}",
            self.trials,
            self.size,
            self.sites,
            self.mean,
            self.confidence_low,
            self.confidence_high,
            self.seconds,
            self.ratio
        )
    }
}
