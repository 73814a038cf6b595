/*!
(The internal representation of) an atom of a clause.

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

The atom `0` is reserved, as the index of a [valuation](crate::structures::valuation) fixed to true, and so the atoms of a CNF instance are [1..*m*] for some *m*.
This allows atoms to be used directly as the indices of a valuation, and as the integers of a DIMACS file.

Atoms are distinct from the names of the formulas they stand for.
The link between a name (e.g. `P`, or some auxiliary introduced by the Tseitin transformation) and an atom is kept by a [variable map](crate::cnf::VariableMap).
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom, fixed with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom, as atoms must fit inside a signed literal.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
