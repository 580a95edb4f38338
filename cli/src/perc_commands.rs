use clap::{Arg, ArgAction, Command};

const STRATEGIES: [&str; 4] = [
    "quick-find",
    "quick-union",
    "weighted-compression",
    "weighted-halving",
];

fn verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Debug mode")
}

fn threads() -> Arg {
    Arg::new("threads")
        .short('t')
        .long("threads")
        .default_value("1")
        .help("number of threads")
}

fn strategy() -> Arg {
    Arg::new("strategy")
        .short('s')
        .long("strategy")
        .default_value("weighted-halving")
        .value_parser(STRATEGIES)
        .help("Union-find algorithm backing each grid.")
}

fn seed() -> Arg {
    Arg::new("seed")
        .long("seed")
        .help("Seed value for random number generators")
        .default_value("42")
}

fn subcommand_stats() -> Command {
    Command::new("stats")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Estimate the percolation threshold of an N-by-N grid by T independent trials.")
        .arg(verbose())
        .arg(threads())
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .value_name("N")
                .required(true)
                .help("Side length of the grid."),
        )
        .arg(
            Arg::new("trials")
                .short('T')
                .long("trials")
                .value_name("T")
                .default_value("200")
                .help("Number of independent trials."),
        )
        .arg(seed())
        .arg(strategy())
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Write the report as a JSON object."),
        )
}

fn subcommand_doubling() -> Command {
    Command::new("doubling")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Doubling experiment. Double the number of sites from 16 up to [max] and time each step.")
        .arg(verbose())
        .arg(threads())
        .arg(
            Arg::new("max")
                .short('m')
                .long("max")
                .default_value("200k")
                .help("Maximum number of sites. SI prefix (k, M) is allowed."),
        )
        .arg(
            Arg::new("trials")
                .short('T')
                .long("trials")
                .default_value("200")
                .help("Number of trials on each step."),
        )
        .arg(seed())
        .arg(strategy())
}

fn subcommand_union() -> Command {
    Command::new("union")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Replay union operations. Input is N followed by pairs of integers in 0..N.")
        .arg(verbose())
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("PAIRS")
                .required(true)
                .help("Input file. If -, read from the stdin."),
        )
        .arg(strategy())
}

fn subcommand_profile() -> Command {
    Command::new("profile")
        .version("0.1")
        .author("BanshoMasutani")
        .about("Run experiments listed in the given TOML file.")
        .arg(
            Arg::new("profile")
                .short('p')
                .required(true)
                .help("TOML configuration file."),
        )
}

pub fn perc_parser() -> Command {
    Command::new("perc")
        .version("0.1")
        .author("Bansho Masutani <ban-m@g.ecc.u-tokyo.ac.jp>")
        .about("Percolation threshold estimator")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(subcommand_stats())
        .subcommand(subcommand_doubling())
        .subcommand(subcommand_union())
        .subcommand(subcommand_profile())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn verify_parser() {
        perc_parser().debug_assert();
    }
    #[test]
    fn parse_stats() {
        let matches = perc_parser()
            .try_get_matches_from(["perc", "stats", "-n", "20", "-vv", "--json"])
            .unwrap();
        let (name, sub_m) = matches.subcommand().unwrap();
        assert_eq!(name, "stats");
        assert_eq!(sub_m.get_count("verbose"), 2);
        assert_eq!(sub_m.get_one::<String>("size").unwrap(), "20");
        assert_eq!(sub_m.get_one::<String>("trials").unwrap(), "200");
        assert_eq!(sub_m.get_one::<String>("strategy").unwrap(), "weighted-halving");
        assert!(sub_m.get_flag("json"));
    }
    #[test]
    fn reject_strategy() {
        let matches =
            perc_parser().try_get_matches_from(["perc", "union", "-i", "-", "-s", "fastest"]);
        assert!(matches.is_err());
    }
}
