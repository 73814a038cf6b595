/*!
Claims on the length of a shortest proof.

A claim is checked by a search for a proof, and holds if no proof shorter than the claim is found.
Length counts every line of a proof other than the premises.

```rust
# use fitch_engine::procedures::optimal::verify_optimal;
let report = verify_optimal(&["P", "P→Q"], "Q", 1);
assert!(report.valid && report.is_optimal);
assert_eq!(report.found_length, Some(1));

let report = verify_optimal(&["P", "P→Q"], "Q", 5);
assert!(!report.is_optimal);
```

As the search is bounded, a claim which holds is evidence of optimality, rather than proof.
*/

use crate::{
    config::Config,
    procedures::solve::parse_argument,
    reports::OptimalityReport,
    search::find_proof,
};

/// Checks a claimed length of a shortest proof of `conclusion` from `premises`, with the default configuration.
pub fn verify_optimal<S: AsRef<str>>(
    premises: &[S],
    conclusion: &str,
    claimed_length: usize,
) -> OptimalityReport {
    verify_optimal_with_config(premises, conclusion, claimed_length, &Config::default())
}

/// Checks a claimed length of a shortest proof of `conclusion` from `premises`.
///
/// If no proof is found, the claim neither holds nor is the argument valid.
pub fn verify_optimal_with_config<S: AsRef<str>>(
    premises: &[S],
    conclusion: &str,
    claimed_length: usize,
    config: &Config,
) -> OptimalityReport {
    let Some((premises, conclusion)) = parse_argument(premises, conclusion) else {
        return OptimalityReport::default();
    };

    let found = find_proof(
        &premises,
        &conclusion,
        config.search.max_depth.value,
        &config.search,
    );

    match found {
        Some(lines) => {
            let found_length = lines.iter().filter(|line| !line.is_premise).count();
            OptimalityReport {
                valid: true,
                found_length: Some(found_length),
                is_optimal: found_length >= claimed_length,
            }
        }

        None => OptimalityReport::default(),
    }
}
