/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, with a target for each part of the engine.

Note, no log implementation is provided by the library.
The `fitch` binary uses [env_logger](https://docs.rs/env_logger/latest/env_logger/), so logs of, e.g., the machine solver may be seen with `RUST_LOG=search=debug`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [formula parsing](crate::parse::formula) and normalization.
    pub const PARSER: &str = "parser";

    /// Logs related to [proof parsing](crate::parse::proof)
    pub const PROOF: &str = "proof";

    /// Logs related to the [validator](crate::validate)
    pub const VALIDATION: &str = "validation";

    /// Logs related to the [CNF transformation](crate::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [countermodel](crate::countermodel) search, and SAT backends.
    pub const COUNTERMODEL: &str = "countermodel";

    /// Logs related to the [machine solver](crate::search)
    pub const SEARCH: &str = "search";
}
