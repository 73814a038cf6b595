/*!
Configuration of the engine.

All configuration is contained within a [Config], which is passed by reference to the `*_with_config` variants of the [procedures](crate::procedures).
The plain variants use [Config::default].

Configuration is grouped by the part of the engine it applies to:
- [SatConfig], for countermodel search.
- [SearchConfig], for the machine solver.
- [ValidationConfig], for the validator.

Each tunable value is a [ConfigOption], which records the bounds of the value alongside the value.

```rust
# use fitch_engine::config::{Config, SatBackendKind};
let mut config = Config::default();
config.sat.backend.value = SatBackendKind::Internal;

assert!(config.search.iteration_limit.set(500));
assert!(!config.search.iteration_limit.set(0));
assert_eq!(config.search.iteration_limit.value, 500);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod backend;
pub use backend::SatBackendKind;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Configuration of countermodel search.
    pub sat: SatConfig,

    /// Configuration of the machine solver.
    pub search: SearchConfig,

    /// Configuration of the validator.
    pub validation: ValidationConfig,
}

/// Configuration of countermodel search.
#[derive(Clone, Debug)]
pub struct SatConfig {
    /// Which backend to use.
    pub backend: ConfigOption<SatBackendKind>,

    /// The path to (or name of) the external solver executable.
    pub solver_path: String,

    /// The time after which the external solver is killed.
    pub timeout: ConfigOption<Duration>,
}

impl Default for SatConfig {
    fn default() -> Self {
        SatConfig {
            backend: ConfigOption {
                name: "backend",
                min: SatBackendKind::MIN,
                max: SatBackendKind::MAX,
                value: SatBackendKind::External,
            },

            solver_path: "minisat".to_string(),

            timeout: ConfigOption {
                name: "sat_timeout",
                min: Duration::from_millis(1),
                max: Duration::from_secs(600),
                value: Duration::from_secs(5),
            },
        }
    }
}

/// Configuration of the machine solver.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// The maximum number of states taken from the frontier.
    pub iteration_limit: ConfigOption<usize>,

    /// The maximum number of lines of a proof.
    pub max_depth: ConfigOption<usize>,

    /// The maximum number of atoms used as the other disjunct of a disjunction introduction.
    pub disjunction_atoms: ConfigOption<usize>,

    /// Restrict introduced conjunctions and disjunctions to subformulas of the problem.
    pub relevance_filter: ConfigOption<bool>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            iteration_limit: ConfigOption {
                name: "iterations",
                min: 1,
                max: 10_000_000,
                value: 10_000,
            },

            max_depth: ConfigOption {
                name: "max_depth",
                min: 1,
                max: 1_000,
                value: 30,
            },

            disjunction_atoms: ConfigOption {
                name: "disjunction_atoms",
                min: 0,
                max: 26,
                value: 4,
            },

            relevance_filter: ConfigOption {
                name: "relevance_filter",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}

/// Configuration of the validator.
#[derive(Clone, Debug)]
pub struct ValidationConfig {
    /// Accept disjunction and biconditional elimination when structural matching fails.
    pub lenient: ConfigOption<bool>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            lenient: ConfigOption {
                name: "lenient",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
