/*!
An external SAT solver, run as a subprocess.

The instance is written in DIMACS form to a file in a fresh temporary directory, removed once the solver has answered, and the solver is invoked as `<solver> <instance> <result>`, as with MiniSat.
The answer of the solver is read from the result file, if the solver wrote one, and otherwise from the standard output of the solver.

Two forms of answer are understood:
- The MiniSat result file, with `SAT` or `UNSAT` on the first line, followed by a line of literals for a satisfiable instance.
- Competition output, with a status line `s SATISFIABLE` or `s UNSATISFIABLE`, followed by `v` lines of literals.

The solver is killed if it has not finished by the configured deadline.
*/

use std::{
    fs::File,
    process::{Child, Command, ExitStatus, Stdio},
    time::Duration,
};

use crossbeam::{channel, select};
use tempfile::TempDir;

use crate::{
    cnf::CnfInstance,
    countermodel::{SatBackend, SatOutcome},
    misc::log::targets,
    structures::{
        atom::{Atom, TOP_ATOM},
        literal::{CLiteral, Literal},
        valuation::{fresh_valuation, CValuation},
    },
    types::err::SolverError,
};

/// The interval between checks on whether the solver has finished.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// The exit code of a solver on an unsatisfiable instance, by convention.
const EXIT_UNSATISFIABLE: i32 = 20;

/// A SAT solver executable.
pub struct ExternalSolver {
    path: String,
    timeout: Duration,
}

impl ExternalSolver {
    pub fn new(path: &str, timeout: Duration) -> Self {
        ExternalSolver {
            path: path.to_string(),
            timeout,
        }
    }

    /// Waits on the child until it exits, or until the deadline, in which case the child is killed.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, SolverError> {
        let deadline = channel::after(self.timeout);
        let ticker = channel::tick(POLL_INTERVAL);

        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }

            select! {
                recv(deadline) -> _ => {
                    log::info!(target: targets::COUNTERMODEL, "Killing {} after {:?}", self.path, self.timeout);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(SolverError::Timeout);
                }

                recv(ticker) -> _ => {}
            }
        }
    }
}

impl SatBackend for ExternalSolver {
    fn solve(&self, instance: &CnfInstance) -> Result<SatOutcome, SolverError> {
        let directory = TempDir::with_prefix("fitch-")?;
        let instance_path = directory.path().join("instance.cnf");
        let result_path = directory.path().join("result.out");
        let stdout_path = directory.path().join("solver.log");

        std::fs::write(&instance_path, instance.as_dimacs())?;

        let spawned = Command::new(&self.path)
            .arg(&instance_path)
            .arg(&result_path)
            .stdin(Stdio::null())
            .stdout(Stdio::from(File::create(&stdout_path)?))
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SolverError::Unavailable(format!("{} not found", self.path)));
            }
            Err(e) => return Err(SolverError::Unavailable(e.to_string())),
        };

        let status = self.wait(&mut child)?;
        log::debug!(target: targets::COUNTERMODEL, "{} exited with {status}", self.path);

        let result = std::fs::read_to_string(&result_path).unwrap_or_default();
        let output = match result.trim().is_empty() {
            true => std::fs::read_to_string(&stdout_path)?,
            false => result,
        };

        let atom_count = Atom::try_from(instance.variable_count())
            .map_err(|_| SolverError::MalformedOutput("too many atoms".to_string()))?;

        match parse_answer(&output, atom_count) {
            Ok(outcome) => Ok(outcome),
            Err(e) => match status.code() {
                Some(EXIT_UNSATISFIABLE) => Ok(SatOutcome::Unsatisfiable),
                _ => Err(e),
            },
        }
    }
}

/// Whether a line is a comment.
fn is_comment(line: &str) -> bool {
    line == "c" || line.starts_with("c ")
}

/// The answer of a solver, from either a MiniSat result file or competition output.
///
/// Lines before a status line are ignored, as these are often statistics.
pub fn parse_answer(text: &str, atom_count: Atom) -> Result<SatOutcome, SolverError> {
    let mut status = None;
    let mut literals: Vec<CLiteral> = Vec::default();

    for line in text.lines().map(str::trim) {
        if line.is_empty() || is_comment(line) {
            continue;
        }

        match line {
            "SAT" | "s SATISFIABLE" => status = Some(true),

            "UNSAT" | "s UNSATISFIABLE" => status = Some(false),

            "INDET" | "s UNKNOWN" => {
                return Err(SolverError::MalformedOutput("indeterminate".to_string()));
            }

            _ if status == Some(true) => {
                let values = line.strip_prefix("v ").unwrap_or(line);
                for token in values.split_whitespace() {
                    match token.parse::<CLiteral>() {
                        Ok(0) => {}
                        Ok(literal) => literals.push(literal),
                        Err(_) => {
                            return Err(SolverError::MalformedOutput(format!("literal {token}")));
                        }
                    }
                }
            }

            _ => {}
        }
    }

    match status {
        None => Err(SolverError::MalformedOutput("no status".to_string())),

        Some(false) => Ok(SatOutcome::Unsatisfiable),

        Some(true) => Ok(SatOutcome::Satisfiable(read_valuation(
            &literals, atom_count,
        )?)),
    }
}

fn read_valuation(literals: &[CLiteral], atom_count: Atom) -> Result<CValuation, SolverError> {
    let mut valuation = fresh_valuation(atom_count);
    for literal in literals {
        match valuation.get_mut(literal.atom() as usize) {
            Some(value) if literal.atom() != TOP_ATOM => *value = Some(literal.polarity()),
            _ => {
                return Err(SolverError::MalformedOutput(format!("atom {}", literal.atom())));
            }
        }
    }
    Ok(valuation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minisat_result_file() {
        let answer = parse_answer("SAT\n1 -2 3 0\n", 3).unwrap();
        assert_eq!(
            answer,
            SatOutcome::Satisfiable(vec![Some(true), Some(true), Some(false), Some(true)])
        );

        assert_eq!(parse_answer("UNSAT\n", 3).unwrap(), SatOutcome::Unsatisfiable);
    }

    #[test]
    fn competition_output() {
        let output = "c some statistics\nrestarts : 1\ns SATISFIABLE\nv -1 2\nv 0\n";
        let answer = parse_answer(output, 2).unwrap();
        assert_eq!(
            answer,
            SatOutcome::Satisfiable(vec![Some(true), Some(false), Some(true)])
        );

        let output = "c parsed\ns UNSATISFIABLE\n";
        assert_eq!(parse_answer(output, 2).unwrap(), SatOutcome::Unsatisfiable);
    }

    #[test]
    fn unknown_atoms_are_malformed() {
        assert!(matches!(
            parse_answer("SAT\n1 4 0\n", 2),
            Err(SolverError::MalformedOutput(_))
        ));
    }

    #[test]
    fn missing_status_is_malformed() {
        assert!(parse_answer("", 2).is_err());
        assert!(parse_answer("s UNKNOWN\n", 2).is_err());
    }

    #[test]
    fn missing_executable_is_unavailable() {
        let solver = ExternalSolver::new("fitch-no-such-solver", Duration::from_secs(1));
        let instance = CnfInstance::default();
        assert!(matches!(
            solver.solve(&instance),
            Err(SolverError::Unavailable(_))
        ));
    }

    /// An executable shell script with the given body, in the directory.
    #[cfg(unix)]
    fn stub_solver(directory: &TempDir, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = directory.path().join("solver.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    #[cfg(unix)]
    fn slow_solvers_are_killed() {
        let directory = TempDir::new().unwrap();
        let solver = ExternalSolver::new(
            &stub_solver(&directory, "exec sleep 30"),
            Duration::from_millis(100),
        );

        let start = std::time::Instant::now();
        assert_eq!(
            solver.solve(&CnfInstance::default()),
            Err(SolverError::Timeout)
        );
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    #[cfg(unix)]
    fn answers_from_the_result_file() {
        let directory = TempDir::new().unwrap();
        let solver = ExternalSolver::new(
            &stub_solver(&directory, "echo UNSAT > \"$2\""),
            Duration::from_secs(10),
        );
        assert_eq!(
            solver.solve(&CnfInstance::default()),
            Ok(SatOutcome::Unsatisfiable)
        );
    }

    #[test]
    #[cfg(unix)]
    fn answers_from_standard_output() {
        let directory = TempDir::new().unwrap();
        let solver = ExternalSolver::new(
            &stub_solver(&directory, "echo 's SATISFIABLE'\necho 'v 0'"),
            Duration::from_secs(10),
        );
        assert!(matches!(
            solver.solve(&CnfInstance::default()),
            Ok(SatOutcome::Satisfiable(_))
        ));
    }
}
