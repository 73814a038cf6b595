//! The entry points of the engine.
//!
//! - [verify](verify::verify) checks a hand-written proof.
//! - [solve](solve::solve) searches for a proof.
//! - [verify_optimal](optimal::verify_optimal) checks a claim on the length of a shortest proof.
//!
//! Each has a `*_with_config` variant, and the plain variants use the [default configuration](crate::config::Config::default).
//! No state persists between calls.

pub mod optimal;
pub mod solve;
pub mod verify;
