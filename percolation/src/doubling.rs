//! Doubling experiment: run the estimator on grids whose number of sites doubles
//! at every step, and look at how the running time grows.
use crate::error::PercolationError;
use crate::stats::PercolationStats;
use definitions::{DoublingRow, ExperimentConfig, Strategy};

/// The smallest number of sites.
pub const MIN_SITES: usize = 16;

#[derive(Debug, Clone, Copy)]
pub struct DoublingConfig {
    /// Upper bound of the number of sites, inclusive.
    pub max_sites: usize,
    pub trials: usize,
    pub seed: u64,
    pub strategy: Strategy,
}

impl std::default::Default for DoublingConfig {
    fn default() -> Self {
        Self {
            max_sites: 200_000,
            trials: 200,
            seed: 0,
            strategy: Strategy::WeightedHalving,
        }
    }
}

/// Side lengths visited by the experiment: floor(sqrt(s)) for s = 16, 32, 64, ... <= max_sites.
pub fn grid_sizes(max_sites: usize) -> Vec<usize> {
    std::iter::successors(Some(MIN_SITES), |&s| s.checked_mul(2))
        .take_while(|&s| s <= max_sites)
        .map(|s| (s as f64).sqrt().floor() as usize)
        .collect()
}

/// Run the experiment, calling `on_row` as soon as each row is ready.
pub fn run<F: FnMut(&DoublingRow)>(
    config: &DoublingConfig,
    mut on_row: F,
) -> Result<Vec<DoublingRow>, PercolationError> {
    let mut rows = vec![];
    let mut prev = 0f64;
    for size in grid_sizes(config.max_sites) {
        let exp = ExperimentConfig::new(size, config.trials, config.seed, config.strategy);
        let start = std::time::Instant::now();
        let stats = PercolationStats::from_config(&exp)?;
        let seconds = (std::time::Instant::now() - start).as_secs_f64();
        let row = DoublingRow {
            trials: config.trials,
            size,
            sites: size * size,
            mean: stats.mean(),
            confidence_low: stats.confidence_low(),
            confidence_high: stats.confidence_high(),
            seconds,
            ratio: seconds / prev,
        };
        debug!("DOUBLING\t{}\t{:.3}", size, seconds);
        on_row(&row);
        rows.push(row);
        prev = seconds;
    }
    Ok(rows)
}
