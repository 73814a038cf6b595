//! Key structures, such as formulas, proof lines, literals, and clauses.
//!
//! # Formulas
//!
//! A [formula](formula::Formula) is built from atoms (single uppercase letters), the constants ⊤ and ⊥, and the connectives ¬, ∧, ∨, →, and ↔.
//! Formulas are owned trees, and each node owns its children.
//!
//! First-order formulas, with predicates, terms, and the quantifiers ∀ and ∃, are kept apart in [quantified] as they are only of interest to the quantifier rules.
//!
//! # Proofs
//!
//! A proof is a sequence of [proof lines](proof_line::ProofLine), each justified by some [rule](rule::Rule).
//!
//! # Clauses
//!
//! The remaining structures are those of conjunctive normal form.
//! A [clause](clause) is a disjunction of [literals](literal), and a literal is an [atom](atom) paired with a polarity.
//! A [valuation](valuation) assigns (or fails to assign) a value to each atom.
//!
//! In the SAT literature atoms are often called 'variables', and the two terms are used interchangeably when talking about formulas.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod proof_line;
pub mod quantified;
pub mod rule;
pub mod valuation;
