/*!
A parser for first-order formulas, as used by the quantifier rules.

The grammar extends that of [propositional formulas](crate::parse::formula) with predicates applied to terms, and with quantifiers at the precedence of negation:

```text
term       ::= 'a'..'z'
atomic     ::= 'A'..'Z' ('(' term (',' term)* ')')? | '⊤' | '⊥' | '(' biconditional ')'
unary      ::= '¬' unary | ('∀' | '∃') term '.'? unary | atomic
```

```rust
# use fitch_engine::parse::quantified::parse_first_order;
let formula = parse_first_order("Ax.(F(x) -> G(x))");
assert!(formula.is_err());

let formula = parse_first_order("∀x.(F(x) -> G(x))").unwrap();
assert_eq!(formula.to_string(), "∀x.(F(x)→G(x))");
```
*/

use crate::{
    parse::normalize::normalize,
    structures::{
        formula::{Connective, BOTTOM, NOT, TOP},
        quantified::{FoFormula, QuantifiedFormula, Quantifier},
    },
    types::err::SyntaxError,
};

struct Parser {
    characters: Vec<char>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.characters.get(self.index).copied()
    }

    fn peek_connective(&self, connective: Connective) -> bool {
        self.peek() == Some(connective.symbol())
    }

    fn error_here(&self) -> SyntaxError {
        SyntaxError {
            position: self.index,
            found: self.peek(),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(character) if character == expected => {
                self.index += 1;
                Ok(())
            }
            _ => Err(self.error_here()),
        }
    }

    fn binary(connective: Connective, left: FoFormula, right: FoFormula) -> FoFormula {
        FoFormula::Binary(connective, Box::new(left), Box::new(right))
    }

    fn biconditional(&mut self) -> Result<FoFormula, SyntaxError> {
        let left = self.implication()?;
        if !self.peek_connective(Connective::Biconditional) {
            return Ok(left);
        }
        self.index += 1;
        let right = self.implication()?;
        if self.peek_connective(Connective::Biconditional) {
            return Err(self.error_here());
        }
        Ok(Self::binary(Connective::Biconditional, left, right))
    }

    fn implication(&mut self) -> Result<FoFormula, SyntaxError> {
        let left = self.disjunction()?;
        if !self.peek_connective(Connective::Implication) {
            return Ok(left);
        }
        self.index += 1;
        let right = self.implication()?;
        Ok(Self::binary(Connective::Implication, left, right))
    }

    fn disjunction(&mut self) -> Result<FoFormula, SyntaxError> {
        let mut left = self.conjunction()?;
        while self.peek_connective(Connective::Disjunction) {
            self.index += 1;
            let right = self.conjunction()?;
            left = Self::binary(Connective::Disjunction, left, right);
        }
        Ok(left)
    }

    fn conjunction(&mut self) -> Result<FoFormula, SyntaxError> {
        let mut left = self.unary()?;
        while self.peek_connective(Connective::Conjunction) {
            self.index += 1;
            let right = self.unary()?;
            left = Self::binary(Connective::Conjunction, left, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<FoFormula, SyntaxError> {
        match self.peek() {
            Some(NOT) => {
                self.index += 1;
                Ok(FoFormula::Negation(Box::new(self.unary()?)))
            }

            Some(symbol) => match Quantifier::from_symbol(symbol) {
                Some(quantifier) => {
                    self.index += 1;
                    let variable = self.term()?;
                    if self.peek() == Some('.') {
                        self.index += 1;
                    }
                    let body = self.unary()?;
                    Ok(FoFormula::Quantified(QuantifiedFormula {
                        quantifier,
                        variable,
                        body: Box::new(body),
                    }))
                }
                None => self.atomic(),
            },

            None => self.atomic(),
        }
    }

    fn term(&mut self) -> Result<char, SyntaxError> {
        match self.peek() {
            Some(character) if character.is_ascii_lowercase() => {
                self.index += 1;
                Ok(character)
            }
            _ => Err(self.error_here()),
        }
    }

    fn atomic(&mut self) -> Result<FoFormula, SyntaxError> {
        match self.peek() {
            Some(name) if name.is_ascii_uppercase() => {
                self.index += 1;
                let mut arguments = Vec::default();
                if self.peek() == Some('(') {
                    self.index += 1;
                    arguments.push(self.term()?);
                    while self.peek() == Some(',') {
                        self.index += 1;
                        arguments.push(self.term()?);
                    }
                    self.expect(')')?;
                }
                Ok(FoFormula::Predicate(name, arguments))
            }

            Some(TOP) => {
                self.index += 1;
                Ok(FoFormula::Constant(true))
            }

            Some(BOTTOM) => {
                self.index += 1;
                Ok(FoFormula::Constant(false))
            }

            Some('(') => {
                self.index += 1;
                let inner = self.biconditional()?;
                self.expect(')')?;
                Ok(inner)
            }

            _ => Err(self.error_here()),
        }
    }
}

/// Parses some first-order formula text, after normalization.
pub fn parse_first_order(text: &str) -> Result<FoFormula, SyntaxError> {
    let mut parser = Parser {
        characters: normalize(text).chars().collect(),
        index: 0,
    };

    let formula = parser.biconditional()?;
    match parser.peek() {
        None => Ok(formula),
        Some(_) => Err(parser.error_here()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantifiers_bind_tightly() {
        let formula = parse_first_order("∀x.P(x)→Q").unwrap();
        let FoFormula::Binary(Connective::Implication, left, _) = formula else {
            panic!("quantifier took the implication into scope");
        };
        assert!(left.as_quantified().is_some());
    }

    #[test]
    fn nested_quantifiers() {
        let formula = parse_first_order("∀x∃y R(x,y)").unwrap();
        assert_eq!(formula.to_string(), "∀x.∃y.R(x,y)");
        assert!(formula.free_terms().is_empty());
    }

    #[test]
    fn malformed_terms() {
        assert!(parse_first_order("F(x,)").is_err());
        assert!(parse_first_order("∀X.F(X)").is_err());
        assert!(parse_first_order("F(x").is_err());
    }
}
