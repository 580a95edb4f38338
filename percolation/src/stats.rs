//! Monte Carlo estimation of the percolation threshold.
//! # Example
//! ```rust
//! use percolation::stats::PercolationStats;
//! use percolation::find_union::WeightedHalving;
//! let stats = PercolationStats::with_seed::<WeightedHalving>(20, 30, 24).unwrap();
//! assert!(stats.confidence_low() < stats.mean());
//! assert!(stats.mean() < stats.confidence_high());
//! ```
use crate::error::PercolationError;
use crate::find_union::*;
use crate::grid::Percolation;
use definitions::{ExperimentConfig, Strategy, ThresholdReport};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// z-value of the two-sided 95% interval of the normal distribution.
const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug, Clone)]
pub struct PercolationStats {
    size: usize,
    strategy: Strategy,
    /// Fraction of open sites at the moment each trial percolated.
    results: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` experiments on `size` x `size` grids with a random seed.
    pub fn new(size: usize, trials: usize) -> Result<Self, PercolationError> {
        let seed: u64 = rand::thread_rng().gen();
        Self::with_seed::<WeightedHalving>(size, trials, seed)
    }
    pub fn from_config(config: &ExperimentConfig) -> Result<Self, PercolationError> {
        let ExperimentConfig {
            size,
            trials,
            seed,
            strategy,
        } = *config;
        match strategy {
            Strategy::QuickFind => Self::with_seed::<QuickFind>(size, trials, seed),
            Strategy::QuickUnion => Self::with_seed::<QuickUnion>(size, trials, seed),
            Strategy::WeightedCompression => {
                Self::with_seed::<WeightedCompression>(size, trials, seed)
            }
            Strategy::WeightedHalving => Self::with_seed::<WeightedHalving>(size, trials, seed),
        }
    }
    /// Run `trials` experiments in parallel. The t-th trial draws from its own
    /// generator seeded by `seed + t`, so the result does not depend on the number of threads.
    pub fn with_seed<U: UnionFind>(
        size: usize,
        trials: usize,
        seed: u64,
    ) -> Result<Self, PercolationError> {
        if size == 0 {
            return Err(PercolationError::InvalidGridSize(size));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidTrialCount(trials));
        }
        let strategy = U::strategy();
        debug!("START\tN={}\tT={}\t{}\tseed={}", size, trials, strategy, seed);
        let results = (0..trials)
            .into_par_iter()
            .map(|t| -> Result<f64, PercolationError> {
                let seed = seed.wrapping_add(t as u64);
                let mut rng: Xoshiro256PlusPlus = SeedableRng::seed_from_u64(seed);
                let fraction = run_trial::<U, _>(size, &mut rng)?;
                trace!("TRIAL\t{}\t{:.4}", t, fraction);
                Ok(fraction)
            })
            .collect::<Result<Vec<_>, PercolationError>>()?;
        let stats = Self {
            size,
            strategy,
            results,
        };
        debug!("END\tmean={:.4}\tstddev={:.4}", stats.mean(), stats.stddev());
        Ok(stats)
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn trials(&self) -> usize {
        self.results.len()
    }
    pub fn results(&self) -> &[f64] {
        &self.results
    }
    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.results.iter().sum::<f64>() / self.results.len() as f64
    }
    /// Sample standard deviation of the percolation threshold.
    /// NaN when there is only one trial.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let len = self.results.len() as f64;
        let sq = self.results.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        (sq / (len - 1f64)).sqrt()
    }
    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.results.len() as f64).sqrt()
    }
    /// Low end of the 95% confidence interval.
    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }
    /// High end of the 95% confidence interval.
    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }
    pub fn report(&self, elapsed: std::time::Duration) -> ThresholdReport {
        ThresholdReport {
            size: self.size,
            trials: self.trials(),
            strategy: self.strategy,
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_low: self.confidence_low(),
            confidence_high: self.confidence_high(),
            elapsed: elapsed.as_secs_f64(),
        }
    }
}

/// Open uniformly random blocked sites until the grid percolates.
/// Return the fraction of the open sites at that moment.
pub fn run_trial<U: UnionFind, R: Rng>(
    size: usize,
    rng: &mut R,
) -> Result<f64, PercolationError> {
    let mut grid = Percolation::<U>::new(size)?;
    while !grid.percolates() {
        let i = rng.gen_range(0..size);
        let j = rng.gen_range(0..size);
        if !grid.is_open(i, j) {
            grid.open(i, j);
        }
    }
    Ok(grid.open_count() as f64 / (size * size) as f64)
}
