/*!
The scope of a proof, as lines are walked in order.

A scope tracks which lines may be cited, and the subproofs (frames) which are open.

- A line is accessible from the point it is stated until the frame containing it is closed.
- Closing a frame removes each line of the frame from the accessible lines, though a summary of the frame is kept as a [closed subproof](ClosedSubproof) in the enclosing frame, so rules such as conditional introduction may cite the subproof as a whole.
- Premises are always accessible.

A scope is built fresh for each proof, and is never shared.
*/

use std::collections::BTreeSet;

/// A summary of a subproof which has been closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosedSubproof {
    /// The first line of the subproof.
    pub first: usize,

    /// The last line of the subproof.
    pub last: usize,

    /// The formulas assumed in the subproof, in order.
    pub assumptions: Vec<String>,

    /// The formula of the last line of the subproof.
    pub conclusion: String,
}

impl ClosedSubproof {
    /// The first assumption of the subproof, if any.
    pub fn assumption(&self) -> Option<&str> {
        self.assumptions.first().map(String::as_str)
    }
}

/// An open subproof.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// The level of lines inside the frame.
    pub level: usize,

    pub start_line: usize,

    /// The show line whose block the frame is, if any.
    pub show: Option<usize>,

    /// Lines of assumptions made in the frame.
    pub assumptions: Vec<usize>,

    /// Every line stated in the frame, whether or not accessible.
    pub interior: Vec<usize>,

    /// Subproofs closed directly inside the frame.
    pub closed_children: Vec<ClosedSubproof>,
}

/// The lines which may be cited at some point of a proof, and the open frames.
#[derive(Default)]
pub struct Scope {
    accessible: BTreeSet<usize>,

    frames: Vec<Frame>,

    /// Subproofs closed at the top level.
    closed_top: Vec<ClosedSubproof>,
}

impl Scope {
    /// The level of the innermost open frame, or 0 if no frame is open.
    pub fn depth(&self) -> usize {
        self.frames.last().map_or(0, |frame| frame.level)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn is_accessible(&self, line: usize) -> bool {
        self.accessible.contains(&line)
    }

    /// Makes a premise accessible, for the whole of the proof.
    pub fn add_premise(&mut self, line: usize) {
        self.accessible.insert(line);
    }

    /// Notes a line as part of the innermost frame, without making the line accessible.
    pub fn note(&mut self, line: usize) {
        if let Some(frame) = self.frames.last_mut() {
            if !frame.interior.contains(&line) {
                frame.interior.push(line);
            }
        }
    }

    /// Makes a line accessible, as part of the innermost frame.
    pub fn make_accessible(&mut self, line: usize) {
        self.note(line);
        self.accessible.insert(line);
    }

    /// Notes an assumption of the innermost frame.
    ///
    /// Returns false if there is no open frame.
    pub fn add_assumption(&mut self, line: usize) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.assumptions.push(line);
                true
            }
            None => false,
        }
    }

    /// Lines of assumptions in any open frame.
    pub fn open_assumptions(&self) -> impl Iterator<Item = usize> + '_ {
        self.frames
            .iter()
            .flat_map(|frame| frame.assumptions.iter().copied())
    }

    /// Opens a frame one level deeper than the innermost frame.
    pub fn open(&mut self, start_line: usize, show: Option<usize>) {
        let level = self.depth() + 1;
        self.frames.push(Frame {
            level,
            start_line,
            show,
            ..Default::default()
        });
    }

    /// Closes the innermost frame, given the formula of each line (indexed from 0).
    ///
    /// The lines of the frame are no longer accessible, and a summary of the frame is kept by the enclosing frame.
    pub fn close(&mut self, formulas: &[String]) -> Option<Frame> {
        let frame = self.frames.pop()?;

        for line in &frame.interior {
            self.accessible.remove(line);
        }

        if let Some(last) = frame.interior.iter().max().copied() {
            let formula_of = |line: usize| formulas.get(line - 1).cloned().unwrap_or_default();

            let summary = ClosedSubproof {
                first: frame.start_line,
                last,
                assumptions: frame.assumptions.iter().map(|l| formula_of(*l)).collect(),
                conclusion: formula_of(last),
            };

            match self.frames.last_mut() {
                Some(parent) => parent.closed_children.push(summary),
                None => self.closed_top.push(summary),
            }
        }

        Some(frame)
    }

    /// A closed subproof which may be cited and which begins at the given line.
    pub fn closed_subproof(&self, first: usize) -> Option<&ClosedSubproof> {
        self.closed_top
            .iter()
            .chain(self.frames.iter().flat_map(|frame| frame.closed_children.iter()))
            .filter(|subproof| subproof.first == first)
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_removes_interior() {
        let formulas = vec!["P".to_string(), "Q".to_string(), "Q".to_string()];
        let mut scope = Scope::default();

        scope.add_premise(1);
        scope.open(2, None);
        assert!(scope.add_assumption(2));
        scope.make_accessible(2);
        scope.make_accessible(3);

        assert!(scope.is_accessible(3));
        assert_eq!(scope.open_assumptions().collect::<Vec<_>>(), vec![2]);

        let frame = scope.close(&formulas);
        assert!(frame.is_some());
        assert!(scope.is_accessible(1));
        assert!(!scope.is_accessible(2));
        assert!(!scope.is_accessible(3));

        let subproof = scope.closed_subproof(2);
        assert_eq!(subproof.map(|s| (s.first, s.last)), Some((2, 3)));
        assert_eq!(subproof.and_then(|s| s.assumption()), Some("Q"));
    }

    #[test]
    fn assumptions_need_a_frame() {
        let mut scope = Scope::default();
        assert!(!scope.add_assumption(1));
        assert_eq!(scope.depth(), 0);
    }
}
