//! Profiles -- a batch of experiments described by a TOML file.
//!
//! ```toml
//! verbose = 1
//! threads = 4
//! json = false
//!
//! [[experiments]]
//! size = 200
//! trials = 100
//! seed = 7
//! strategy = "weighted-halving"
//! ```
use definitions::ExperimentConfig;
use log::*;
use percolation::PercolationStats;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// The configuration of a batch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProfileConfig {
    #[serde(default)]
    verbose: usize,
    #[serde(default = "default_threads")]
    threads: usize,
    /// Print each report as a JSON object.
    #[serde(default)]
    json: bool,
    experiments: Vec<ExperimentConfig>,
}

fn default_threads() -> usize {
    1
}

impl ProfileConfig {
    pub fn experiments(&self) -> &[ExperimentConfig] {
        &self.experiments
    }
}

pub fn read_profile<P: AsRef<Path>>(path: P) -> std::io::Result<ProfileConfig> {
    let file = std::fs::read_to_string(path)?;
    toml::from_str(&file)
        .map_err(|why| std::io::Error::new(std::io::ErrorKind::InvalidData, why))
}

pub fn run_profile(config: &ProfileConfig) -> std::io::Result<()> {
    let level = match config.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()
    {
        warn!("{:?}", why);
    }
    let stdout = std::io::stdout();
    let mut wtr = std::io::BufWriter::new(stdout.lock());
    run_experiments(config, &mut wtr)?;
    wtr.flush()
}

/// Run each experiment in order and write one report per line.
pub fn run_experiments<W: Write>(config: &ProfileConfig, wtr: &mut W) -> std::io::Result<()> {
    for (i, exp) in config.experiments.iter().enumerate() {
        info!("EXPERIMENT\t{}\t{:?}", i, exp);
        let start = std::time::Instant::now();
        let stats = PercolationStats::from_config(exp).map_err(crate::invalid_input)?;
        let report = stats.report(std::time::Instant::now() - start);
        crate::write_report(wtr, &report, config.json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use definitions::Strategy;
    const PROFILE: &str = r#"
threads = 2
json = true

[[experiments]]
size = 5
trials = 10
seed = 7
strategy = "quick-union"

[[experiments]]
size = 8
trials = 4
"#;
    #[test]
    fn parse() {
        let config: ProfileConfig = toml::from_str(PROFILE).unwrap();
        assert_eq!(config.verbose, 0);
        assert_eq!(config.threads, 2);
        assert!(config.json);
        let expected = vec![
            ExperimentConfig::new(5, 10, 7, Strategy::QuickUnion),
            ExperimentConfig::new(8, 4, 0, Strategy::WeightedHalving),
        ];
        assert_eq!(config.experiments(), expected.as_slice());
    }
    #[test]
    fn run() {
        let config: ProfileConfig = toml::from_str(PROFILE).unwrap();
        let mut wtr = vec![];
        run_experiments(&config, &mut wtr).unwrap();
        let output = String::from_utf8(wtr).unwrap();
        let reports: Vec<definitions::ThresholdReport> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].strategy, Strategy::QuickUnion);
        assert_eq!(reports[1].size, 8);
    }
    #[test]
    fn bad_experiment() {
        let config: ProfileConfig =
            toml::from_str("[[experiments]]\nsize = 0\ntrials = 3\n").unwrap();
        let err = run_experiments(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
