use std::str::FromStr;

/// The SAT backend used to search for countermodels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SatBackendKind {
    /// An external solver executable, invoked as a subprocess on a DIMACS file.
    External = 0,

    /// The in-process DPLL solver.
    Internal,
}

impl std::fmt::Display for SatBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::External => write!(f, "external"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

impl SatBackendKind {
    /// The minimum SatBackendKind.
    pub const MIN: SatBackendKind = SatBackendKind::External;

    /// The maximum SatBackendKind.
    pub const MAX: SatBackendKind = SatBackendKind::Internal;
}

impl FromStr for SatBackendKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "external" => Ok(Self::External),

            "internal" | "dpll" => Ok(Self::Internal),

            _unknown_string => Err(()),
        }
    }
}
