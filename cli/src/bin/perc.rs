use definitions::Strategy;
use percolation::doubling::DoublingConfig;
use percolation::PercolationStats;
use std::io::{BufWriter, Write};
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = perc_cli::perc_commands::perc_parser().get_matches();
    if let Some(("profile", sub_m)) = matches.subcommand() {
        let path: &String = sub_m.get_one("profile").unwrap();
        let config = perc_cli::pipeline::read_profile(path)?;
        return perc_cli::pipeline::run_profile(&config);
    }
    if let Some((_, sub_m)) = matches.subcommand() {
        let level = match sub_m.get_count("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
    match matches.subcommand() {
        Some(("stats", sub_m)) => stats(sub_m),
        Some(("doubling", sub_m)) => doubling(sub_m),
        Some(("union", sub_m)) => union(sub_m),
        _ => unreachable!(),
    }
}

fn stats(matches: &clap::ArgMatches) -> std::io::Result<()> {
    debug!("START\tStats");
    set_threads(matches);
    let size: usize = parse_arg(matches, "size")?;
    let trials: usize = parse_arg(matches, "trials")?;
    let seed: u64 = parse_arg(matches, "seed")?;
    let strategy: Strategy = parse_arg(matches, "strategy")?;
    let config = definitions::ExperimentConfig::new(size, trials, seed, strategy);
    let start = std::time::Instant::now();
    let stats = PercolationStats::from_config(&config).map_err(perc_cli::invalid_input)?;
    let report = stats.report(std::time::Instant::now() - start);
    let stdout = std::io::stdout();
    let mut wtr = BufWriter::new(stdout.lock());
    perc_cli::write_report(&mut wtr, &report, matches.get_flag("json"))?;
    wtr.flush()
}

fn doubling(matches: &clap::ArgMatches) -> std::io::Result<()> {
    debug!("START\tDoubling");
    set_threads(matches);
    let max: &String = matches.get_one("max").unwrap();
    let max_sites = perc_cli::parse_si(max)
        .map_err(|why| std::io::Error::new(std::io::ErrorKind::InvalidInput, why))?;
    let config = DoublingConfig {
        max_sites,
        trials: parse_arg(matches, "trials")?,
        seed: parse_arg(matches, "seed")?,
        strategy: parse_arg(matches, "strategy")?,
    };
    let stdout = std::io::stdout();
    let mut wtr = stdout.lock();
    let mut result = Ok(());
    percolation::doubling::run(&config, |row| {
        if result.is_ok() {
            result = writeln!(wtr, "{}", row);
        }
    })
    .map_err(perc_cli::invalid_input)?;
    result
}

fn union(matches: &clap::ArgMatches) -> std::io::Result<()> {
    debug!("START\tUnion");
    let strategy: Strategy = parse_arg(matches, "strategy")?;
    let input: &String = matches.get_one("input").unwrap();
    let pairs = if input == "-" {
        let stdin = std::io::stdin();
        perc_cli::union_client::parse_pairs(stdin.lock())?
    } else {
        debug!("Opening {}", input);
        let reader = std::fs::File::open(input).map(std::io::BufReader::new)?;
        perc_cli::union_client::parse_pairs(reader)?
    };
    let stdout = std::io::stdout();
    let mut wtr = BufWriter::new(stdout.lock());
    perc_cli::union_client::replay(strategy, &pairs, &mut wtr)?;
    wtr.flush()
}

fn parse_arg<T: std::str::FromStr>(matches: &clap::ArgMatches, name: &str) -> std::io::Result<T>
where
    T::Err: std::fmt::Display,
{
    let arg: &String = matches.get_one(name).unwrap();
    arg.parse().map_err(|why: T::Err| {
        let msg = format!("--{} {}: {}", name, arg, why);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, msg)
    })
}

fn set_threads(matches: &clap::ArgMatches) {
    if let Some(threads) = matches
        .get_one("threads")
        .and_then(|num: &String| num.parse().ok())
    {
        debug!("Set Threads\t{}", threads);
        if let Err(why) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            debug!("{:?}", why);
        }
    }
}
