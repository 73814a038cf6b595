/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology.
- Each non-zero index of the vector is interpreted as an atom.

```rust
# use fitch_engine::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), None];

assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.unvalued_atoms().count(), 2);
assert_eq!(valuation.value_of(9), None);
```

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.
*/

use super::atom::{Atom, TOP_ATOM};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    /// The outer option is none if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator over atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                _ => None,
            })
    }
}

/// A fresh valuation for atoms [1..=`atom_count`], with only the reserved atom valued.
pub fn fresh_valuation(atom_count: Atom) -> CValuation {
    let mut valuation = vec![None; atom_count as usize + 1];
    valuation[TOP_ATOM as usize] = Some(true);
    valuation
}
