use crate::{
    cnf::CnfInstance,
    structures::clause::Clause,
};

impl CnfInstance {
    /// The instance in DIMACS form.
    ///
    /// The preamble names the atom of each formula variable in a comment, then states the problem line.
    ///
    /// ```rust
    /// # use fitch_engine::cnf::to_cnf;
    /// # use fitch_engine::parse::formula::parse;
    /// let instance = to_cnf(&parse("¬P").unwrap()).unwrap();
    /// assert_eq!(
    ///     instance.as_dimacs(),
    ///     "c 1 P\np cnf 2 3\n-2 -1 0\n 2  1 0\n 2 0\n"
    /// );
    /// ```
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = String::new();

        for (atom, name) in self.variables.formula_variables() {
            dimacs.push_str(&format!("c {atom} {name}\n"));
        }

        dimacs.push_str(&format!(
            "p cnf {} {}\n",
            self.variable_count(),
            self.clauses.len()
        ));

        for clause in &self.clauses {
            dimacs.push_str(&clause.as_dimacs(true));
            dimacs.push('\n');
        }

        dimacs
    }
}
