//! A library for the verification of, and automated search for, Fitch-style natural deduction proofs.
//!
//! fitch_engine checks hand-written proofs line by line, reports every error it finds, and, when an argument is invalid, finds a countermodel through a SAT solver.
//! The library may also search for a proof itself, e.g. to check a claim on the length of a shortest proof.
//!
//! # Orientation
//!
//! The library is organised around three [procedures]:
//! - [verify](procedures::verify::verify) checks a proof of a conclusion from some premises.
//! - [solve](procedures::solve::solve) searches for a proof.
//! - [verify_optimal](procedures::optimal::verify_optimal) checks a claimed length of a shortest proof.
//!
//! Each takes premises and a conclusion as text, and returns a [report](reports) which may be serialized.
//!
//! Internally, verification passes through:
//! - The [parsers](parse), for formulas and proofs, which [normalize](parse::normalize) the many notations in use for each connective.
//! - The [validator](validate), which walks a proof keeping track of which lines are accessible.
//! - The [countermodel] generator, which [transforms](cnf) an argument to conjunctive normal form and hands it to a SAT backend.
//!
//! And search takes place in the [machine solver](search).
//!
//! Useful starting points, then, may be:
//! - The [rules](structures::rule) understood by the validator.
//! - The [configuration](config) to see what may be tuned.
//!
//! # Examples
//!
//! + Verify a proof by conditional derivation.
//!
//! ```rust
//! # use fitch_engine::procedures::verify::verify;
//! let proof = "
//! show P→(Q→P)
//!     P :AS
//!     show Q→P
//!         Q :AS
//!         P :R 2
//!     :CD 5
//! :CD 3
//! ";
//! let verdict = verify("", "P→(Q→P)", proof);
//!
//! assert!(verdict.ok);
//! assert_eq!(verdict.depth, 2);
//! ```
//!
//! + Find a countermodel to an invalid argument, with the in-process SAT backend.
//!
//! ```rust
//! # use fitch_engine::config::{Config, SatBackendKind};
//! # use fitch_engine::procedures::verify::verify_with_config;
//! let mut config = Config::default();
//! config.sat.backend.value = SatBackendKind::Internal;
//!
//! let verdict = verify_with_config("P∨Q", "P", "P :MTP 1", &config);
//!
//! assert!(!verdict.ok);
//! let countermodel = verdict.counter_model.unwrap();
//! assert_eq!(countermodel.get("P"), Some(&false));
//! assert_eq!(countermodel.get("Q"), Some(&true));
//! ```
//!
//! + Search for a proof, and render the proof as text.
//!
//! ```rust
//! # use fitch_engine::procedures::solve::solve;
//! let report = solve("P→Q, ¬Q", "¬P");
//!
//! assert!(report.success);
//! println!("{}", report.proof.unwrap());
//! ```
//!
//! # Logs
//!
//! Logs are made with [log], under the targets of [misc::log::targets].
//! No log implementation is provided by the library.

pub mod cnf;
pub mod config;
pub mod countermodel;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod search;
pub mod structures;
pub mod types;
pub mod validate;
