use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use fitch_engine::config::{Config, SatBackendKind};

fn premises() -> Arg {
    Arg::new("premises")
        .short('p')
        .long("premises")
        .value_name("GAMMA")
        .required(false)
        .num_args(1)
        .help("The premises, separated by commas.")
}

fn conclusion() -> Arg {
    Arg::new("conclusion")
        .short('c')
        .long("conclusion")
        .value_name("PHI")
        .required(true)
        .num_args(1)
        .help("The conclusion.")
}

fn backend_parser(value: &str) -> Result<SatBackendKind, String> {
    value
        .parse::<SatBackendKind>()
        .map_err(|_| format!("unknown backend \"{value}\", expected \"internal\" or \"external\""))
}

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("fitch")
        .about("Verifies, and searches for, Fitch-style natural deduction proofs")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)

        .arg(Arg::new("json")
            .long("json")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Write the report as JSON."))

        .arg(Arg::new("backend")
            .long("backend")
            .value_name("BACKEND")
            .global(true)
            .value_parser(clap::builder::ValueParser::new(backend_parser))
            .required(false)
            .num_args(1)
            .help(format!("The SAT backend used to find countermodels.
Default: {}", defaults.sat.backend.value))
            .long_help(format!("The SAT backend used to find countermodels.
Default: {}

  - external: Run a DIMACS solver, such as MiniSat, as a subprocess.
  - internal: Decide satisfiability in-process.", defaults.sat.backend.value)))

        .arg(Arg::new("solver")
            .long("solver")
            .value_name("PATH")
            .global(true)
            .required(false)
            .num_args(1)
            .help(format!("The external solver executable.
Default: {}", defaults.sat.solver_path)))

        .arg(Arg::new("sat_timeout")
            .long("sat-timeout")
            .value_name("SECONDS")
            .global(true)
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("Seconds after which the external solver is killed.
Default: {}", defaults.sat.timeout.value.as_secs_f64())))

        .arg(Arg::new("iterations")
            .long("iterations")
            .value_name("N")
            .global(true)
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum number of states explored by the machine solver.
Default: {}", defaults.search.iteration_limit.value)))

        .arg(Arg::new("max_depth")
            .long("max-depth")
            .value_name("N")
            .global(true)
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum number of lines of a proof found by the machine solver.
Default: {}", defaults.search.max_depth.value)))

        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Reject disjunction and biconditional elimination unless the cited lines match the rule.")
            .long_help("Reject disjunction and biconditional elimination unless the cited lines match the rule.

Without this flag, such lines are accepted with a warning in the log."))

        .subcommand(Command::new("verify")
            .about("Verify a proof, read from a file or from standard input")
            .arg(premises())
            .arg(conclusion())
            .arg(Arg::new("proof")
                .required(false)
                .value_name("PROOF")
                .value_parser(value_parser!(PathBuf))
                .help("The proof, or '-' to read standard input.")))

        .subcommand(Command::new("solve")
            .about("Search for a proof")
            .arg(premises())
            .arg(conclusion()))

        .subcommand(Command::new("optimal")
            .about("Check a claimed length of a shortest proof")
            .arg(premises())
            .arg(conclusion())
            .arg(Arg::new("length")
                .short('l')
                .long("length")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .required(true)
                .num_args(1)
                .help("The claimed length, not counting premises.")))
}
