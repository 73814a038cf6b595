#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{io::Read, path::PathBuf};

use clap::ArgMatches;
use serde::Serialize;

use fitch_engine::{
    config::Config,
    parse::split_premises,
    types::err::ErrorKind,
    procedures::{
        optimal::verify_optimal_with_config, solve::solve_with_config,
        verify::verify_with_config,
    },
};

mod parse;

/// The exit code of a valid proof, a found proof, or a claim which holds.
const EXIT_VALID: i32 = 10;

/// The exit code of an invalid proof, or of a failed search.
const EXIT_INVALID: i32 = 20;

/// The exit code of a usage error.
const EXIT_USAGE: i32 = 1;

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let Some((command, args)) = matches.subcommand() else {
        eprintln!("A command is required: verify, solve, or optimal");
        std::process::exit(EXIT_USAGE);
    };

    let config = match parse::config::config_from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_USAGE);
        }
    };

    let code = match command {
        "verify" => verify_command(args, &config),
        "solve" => solve_command(args, &config),
        "optimal" => optimal_command(args, &config),
        _ => {
            eprintln!("Unknown command: {command}");
            EXIT_USAGE
        }
    };

    std::process::exit(code);
}

fn premises(args: &ArgMatches) -> String {
    args.get_one::<String>("premises").cloned().unwrap_or_default()
}

fn conclusion(args: &ArgMatches) -> String {
    args.get_one::<String>("conclusion").cloned().unwrap_or_default()
}

/// Prints a report, as JSON if requested, and returns `code`.
fn report<R: Serialize + std::fmt::Display>(args: &ArgMatches, report: &R, code: i32) -> i32 {
    match args.get_flag("json") {
        true => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to write the report: {e}");
                return EXIT_USAGE;
            }
        },
        false => print!("{report}"),
    }
    code
}

/// The text of a proof, from a file or from standard input if the path is `-` or absent.
fn read_proof(args: &ArgMatches) -> Result<String, ErrorKind> {
    match args.get_one::<PathBuf>("proof") {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut proof = String::new();
            std::io::stdin().read_to_string(&mut proof)?;
            Ok(proof)
        }
    }
}

fn verify_command(args: &ArgMatches, config: &Config) -> i32 {
    let proof = match read_proof(args) {
        Ok(proof) => proof,
        Err(e) => {
            eprintln!("Failed to read the proof: {e}");
            return EXIT_USAGE;
        }
    };

    let verdict = verify_with_config(&premises(args), &conclusion(args), &proof, config);
    let code = match verdict.ok {
        true => EXIT_VALID,
        false => EXIT_INVALID,
    };
    report(args, &verdict, code)
}

fn solve_command(args: &ArgMatches, config: &Config) -> i32 {
    let solution = solve_with_config(&premises(args), &conclusion(args), config);
    let code = match solution.success {
        true => EXIT_VALID,
        false => EXIT_INVALID,
    };
    report(args, &solution, code)
}

fn optimal_command(args: &ArgMatches, config: &Config) -> i32 {
    let premises = split_premises(&premises(args));
    let claimed_length = args.get_one::<usize>("length").copied().unwrap_or_default();

    let optimality =
        verify_optimal_with_config(&premises, &conclusion(args), claimed_length, config);
    let code = match optimality.valid && optimality.is_optimal {
        true => EXIT_VALID,
        false => EXIT_INVALID,
    };
    report(args, &optimality, code)
}
