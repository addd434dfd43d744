use clap::{crate_version, App, Arg, ArgMatches};
use matsat::config::{Config, InputFormat, SolverKind};
use matsat::driver::{self, Report};
use matsat::{SatResult, TautologyPolicy};
use std::path::Path;

fn main() {
    env_logger::init();

    let matches = App::new("matsat")
        .version(crate_version!())
        .about("Decides CNF satisfiability by case split or exhaustive backtracking")
        .arg(
            Arg::with_name("INPUT")
                .help("input files, one formula each (reads stdin if absent)")
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("solver")
                .short("s")
                .long("solver")
                .takes_value(true)
                .possible_values(SolverKind::NAMES)
                .default_value("bdd"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(InputFormat::NAMES)
                .default_value("expr"),
        )
        .arg(
            Arg::with_name("allow-tautologies")
                .long("allow-tautologies")
                .help("drop clauses containing a literal and its negation instead of failing"),
        )
        .get_matches();

    let config = config_from_args(&matches);

    let results = match matches.values_of("INPUT") {
        Some(paths) => paths
            .map(|path| driver::solve_file(&config, Path::new(path)))
            .collect::<Vec<_>>(),
        None => vec![driver::solve_reader(&config, "<stdin>", std::io::stdin())],
    };

    let mut exit_code = 0;
    for result in results {
        match result {
            Ok(reports) => {
                for report in &reports {
                    println!("{}", report);
                }
                if any_unsat(&reports) && exit_code == 0 {
                    exit_code = 1;
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                exit_code = -1;
            }
        }
    }
    std::process::exit(exit_code);
}

fn config_from_args(matches: &ArgMatches) -> Config {
    let mut config = Config::default();
    // clap has already checked these against the possible values
    if let Some(Ok(solver)) = matches.value_of("solver").map(str::parse::<SolverKind>) {
        config.solver = solver;
    }
    if let Some(Ok(format)) = matches.value_of("format").map(str::parse::<InputFormat>) {
        config.format = format;
    }
    if matches.is_present("allow-tautologies") {
        config.tautologies = TautologyPolicy::Drop;
    }
    config
}

fn any_unsat(reports: &[Report]) -> bool {
    reports.iter().any(|r| r.result == SatResult::Unsatisfiable)
}
