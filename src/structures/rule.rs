/*!
The rules of inference.

Rules form a closed enumeration, and the [validator](crate::validate) matches on rules exhaustively.

Each rule has a number of codes, as used in the justification of a line, and one canonical [code](Rule::code) used when reporting rules.
Codes are read case-insensitively, and with either the ASCII or the Unicode form of a connective.

```rust
# use fitch_engine::structures::rule::Rule;
# use std::str::FromStr;
assert_eq!(Rule::from_str("mp"), Ok(Rule::ModusPonens));
assert_eq!(Rule::from_str("∧I"), Ok(Rule::ConjunctionIntroduction));
assert_eq!(Rule::from_str("RAA"), Ok(Rule::IndirectDerivation));
assert_eq!(Rule::IndirectDerivation.code(), "ID");
assert!(Rule::from_str("XYZ").is_err());
```
*/

use std::str::FromStr;

/// A rule of inference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Premise,
    Assumption,

    ModusPonens,
    ModusTollens,
    ConjunctionIntroduction,
    ConjunctionElimination,
    Reiteration,
    Addition,
    DisjunctiveSyllogism,
    DisjunctionElimination,
    DoubleNegation,
    DoubleNegationIntroduction,
    NegationElimination,
    FalsumElimination,
    NegationIntroduction,
    BiconditionalIntroduction,
    BiconditionalElimination,
    ConditionalIntroduction,

    /// Closes a subproof whose last line is the goal.
    DirectDerivation,

    /// Closes a subproof for a conditional goal.
    ConditionalDerivation,

    /// Closes a subproof by reductio.
    IndirectDerivation,

    UniversalIntroduction,
    UniversalElimination,
    ExistentialIntroduction,
    ExistentialElimination,
}

impl Rule {
    /// The canonical code of the rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Premise => "PR",
            Self::Assumption => "AS",
            Self::ModusPonens => "MP",
            Self::ModusTollens => "MT",
            Self::ConjunctionIntroduction => "&I",
            Self::ConjunctionElimination => "&E",
            Self::Reiteration => "R",
            Self::Addition => "ADD",
            Self::DisjunctiveSyllogism => "MTP",
            Self::DisjunctionElimination => "|E",
            Self::DoubleNegation => "DN",
            Self::DoubleNegationIntroduction => "DNI",
            Self::NegationElimination => "~E",
            Self::FalsumElimination => "⊥E",
            Self::NegationIntroduction => "~I",
            Self::BiconditionalIntroduction => "<->I",
            Self::BiconditionalElimination => "<->E",
            Self::ConditionalIntroduction => "→I",
            Self::DirectDerivation => "DD",
            Self::ConditionalDerivation => "CD",
            Self::IndirectDerivation => "ID",
            Self::UniversalIntroduction => "∀I",
            Self::UniversalElimination => "∀E",
            Self::ExistentialIntroduction => "∃I",
            Self::ExistentialElimination => "∃E",
        }
    }

    /// Whether the rule may only be used to close a subproof.
    pub fn is_closing(&self) -> bool {
        matches!(
            self,
            Self::DirectDerivation | Self::ConditionalDerivation | Self::IndirectDerivation
        )
    }

    /// Whether the rule is one of the quantifier rules.
    pub fn is_quantifier(&self) -> bool {
        matches!(
            self,
            Self::UniversalIntroduction
                | Self::UniversalElimination
                | Self::ExistentialIntroduction
                | Self::ExistentialElimination
        )
    }

    /// The closing rule a rule stands for when used on a QED line, if any.
    ///
    /// Conditional and negation introduction close subproofs in the same way as conditional and indirect derivation.
    pub fn as_closing(&self) -> Option<Rule> {
        match self {
            Self::DirectDerivation | Self::ConditionalDerivation | Self::IndirectDerivation => {
                Some(*self)
            }
            Self::ConditionalIntroduction => Some(Self::ConditionalDerivation),
            Self::NegationIntroduction => Some(Self::IndirectDerivation),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Rule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        match code.as_str() {
            "PR" | "P" | "PREM" => Ok(Self::Premise),

            "AS" | "ASM" | "ACP" | "AIP" | "HYP" | "A" => Ok(Self::Assumption),

            "MP" | "→E" | "->E" => Ok(Self::ModusPonens),

            "MT" => Ok(Self::ModusTollens),

            "&I" | "∧I" | "^I" | "ADJ" => Ok(Self::ConjunctionIntroduction),

            "&E" | "∧E" | "^E" | "S" | "SIMP" => Ok(Self::ConjunctionElimination),

            "R" | "RE" | "REIT" => Ok(Self::Reiteration),

            "ADD" | "|I" | "∨I" | "VI" => Ok(Self::Addition),

            "MTP" | "DS" => Ok(Self::DisjunctiveSyllogism),

            "|E" | "∨E" | "VE" => Ok(Self::DisjunctionElimination),

            "DN" | "DNE" => Ok(Self::DoubleNegation),

            "DNI" => Ok(Self::DoubleNegationIntroduction),

            "~E" | "¬E" | "-E" | "!E" => Ok(Self::NegationElimination),

            "⊥E" | "#E" | "X" | "EFQ" => Ok(Self::FalsumElimination),

            "~I" | "¬I" | "-I" | "!I" => Ok(Self::NegationIntroduction),

            "<->I" | "↔I" | "BI" => Ok(Self::BiconditionalIntroduction),

            "<->E" | "↔E" | "BE" => Ok(Self::BiconditionalElimination),

            "→I" | "->I" | "CP" => Ok(Self::ConditionalIntroduction),

            "DD" => Ok(Self::DirectDerivation),

            "CD" => Ok(Self::ConditionalDerivation),

            "ID" | "RAA" | "IP" => Ok(Self::IndirectDerivation),

            "∀I" | "UG" | "AI" => Ok(Self::UniversalIntroduction),

            "∀E" | "UI" | "AE" => Ok(Self::UniversalElimination),

            "∃I" | "EG" | "EI" => Ok(Self::ExistentialIntroduction),

            "∃E" | "EE" => Ok(Self::ExistentialElimination),

            _unknown_code => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_codes_read_back() {
        let rules = [
            Rule::Premise,
            Rule::Assumption,
            Rule::ModusPonens,
            Rule::ModusTollens,
            Rule::ConjunctionIntroduction,
            Rule::ConjunctionElimination,
            Rule::Reiteration,
            Rule::Addition,
            Rule::DisjunctiveSyllogism,
            Rule::DisjunctionElimination,
            Rule::DoubleNegation,
            Rule::DoubleNegationIntroduction,
            Rule::NegationElimination,
            Rule::FalsumElimination,
            Rule::NegationIntroduction,
            Rule::BiconditionalIntroduction,
            Rule::BiconditionalElimination,
            Rule::ConditionalIntroduction,
            Rule::DirectDerivation,
            Rule::ConditionalDerivation,
            Rule::IndirectDerivation,
            Rule::UniversalIntroduction,
            Rule::UniversalElimination,
            Rule::ExistentialIntroduction,
            Rule::ExistentialElimination,
        ];

        for rule in rules {
            assert_eq!(Rule::from_str(rule.code()), Ok(rule));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(Rule::from_str("dne"), Ok(Rule::DoubleNegation));
        assert_eq!(Rule::from_str("¬E"), Ok(Rule::NegationElimination));
        assert_eq!(Rule::from_str("cp"), Ok(Rule::ConditionalIntroduction));
        assert_eq!(Rule::from_str("UG"), Ok(Rule::UniversalIntroduction));
        assert_eq!(Rule::from_str("∃e"), Ok(Rule::ExistentialElimination));
    }

    #[test]
    fn introduction_rules_close_as_derivations() {
        assert_eq!(
            Rule::ConditionalIntroduction.as_closing(),
            Some(Rule::ConditionalDerivation)
        );
        assert_eq!(Rule::ModusPonens.as_closing(), None);
        assert!(Rule::IndirectDerivation.is_closing());
    }
}
