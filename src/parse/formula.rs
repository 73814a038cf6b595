/*!
A recursive descent parser for propositional formulas.

Text is [normalized](crate::parse::normalize) before parsing, and positions in a [SyntaxError] are indices of characters in the normalized text.

From highest to lowest precedence, the grammar is:

```text
atomic        ::= 'A'..'Z' | '⊤' | '⊥' | '(' biconditional ')'
negation      ::= '¬' negation | atomic
conjunction   ::= negation ('∧' negation)*
disjunction   ::= conjunction ('∨' conjunction)*
implication   ::= disjunction ('→' implication)?
biconditional ::= implication ('↔' implication)?
```

So, conjunction and disjunction associate to the left, implication to the right, and a chain of biconditionals without parentheses is an error.

```rust
# use fitch_engine::parse::formula::parse;
# use fitch_engine::structures::formula::Formula;
let formula = parse("~P | Q -> R").unwrap();
assert_eq!(
    formula,
    Formula::implication(
        Formula::disjunction(Formula::negation(Formula::variable('P')), Formula::variable('Q')),
        Formula::variable('R'),
    )
);

let error = parse("P ∧ ∧ Q").unwrap_err();
assert_eq!((error.position, error.found), (2, Some('∧')));
```
*/

use crate::{
    misc::log::targets,
    parse::normalize::normalize,
    structures::formula::{Connective, Formula, BOTTOM, NOT, TOP},
    types::err::SyntaxError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Variable(char),
    Constant(bool),
    Not,
    Binary(Connective),
    Open,
    Close,
}

/// A token, with its position and the character it was read from.
#[derive(Clone, Copy, Debug)]
struct Lexeme {
    position: usize,
    character: char,
    token: Token,
}

fn tokenize(normal: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut lexemes = Vec::default();
    for (position, character) in normal.chars().enumerate() {
        let token = match character {
            'A'..='Z' => Token::Variable(character),
            TOP => Token::Constant(true),
            BOTTOM => Token::Constant(false),
            NOT => Token::Not,
            '(' => Token::Open,
            ')' => Token::Close,
            _ => match Connective::from_symbol(character) {
                Some(connective) => Token::Binary(connective),
                None => {
                    return Err(SyntaxError {
                        position,
                        found: Some(character),
                    })
                }
            },
        };
        lexemes.push(Lexeme {
            position,
            character,
            token,
        });
    }
    Ok(lexemes)
}

struct Parser {
    lexemes: Vec<Lexeme>,
    index: usize,
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.lexemes.get(self.index).map(|lexeme| lexeme.token)
    }

    fn peek_connective(&self, connective: Connective) -> bool {
        self.peek() == Some(Token::Binary(connective))
    }

    /// An error at the current lexeme, or at the end of the text.
    fn error_here(&self) -> SyntaxError {
        match self.lexemes.get(self.index) {
            Some(lexeme) => SyntaxError {
                position: lexeme.position,
                found: Some(lexeme.character),
            },
            None => SyntaxError {
                position: self.end,
                found: None,
            },
        }
    }

    fn biconditional(&mut self) -> Result<Formula, SyntaxError> {
        let left = self.implication()?;
        if !self.peek_connective(Connective::Biconditional) {
            return Ok(left);
        }
        self.index += 1;
        let right = self.implication()?;
        if self.peek_connective(Connective::Biconditional) {
            return Err(self.error_here());
        }
        Ok(Formula::biconditional(left, right))
    }

    fn implication(&mut self) -> Result<Formula, SyntaxError> {
        let left = self.disjunction()?;
        if !self.peek_connective(Connective::Implication) {
            return Ok(left);
        }
        self.index += 1;
        let right = self.implication()?;
        Ok(Formula::implication(left, right))
    }

    fn disjunction(&mut self) -> Result<Formula, SyntaxError> {
        let mut left = self.conjunction()?;
        while self.peek_connective(Connective::Disjunction) {
            self.index += 1;
            let right = self.conjunction()?;
            left = Formula::disjunction(left, right);
        }
        Ok(left)
    }

    fn conjunction(&mut self) -> Result<Formula, SyntaxError> {
        let mut left = self.negation()?;
        while self.peek_connective(Connective::Conjunction) {
            self.index += 1;
            let right = self.negation()?;
            left = Formula::conjunction(left, right);
        }
        Ok(left)
    }

    fn negation(&mut self) -> Result<Formula, SyntaxError> {
        match self.peek() {
            Some(Token::Not) => {
                self.index += 1;
                Ok(Formula::negation(self.negation()?))
            }
            _ => self.atomic(),
        }
    }

    fn atomic(&mut self) -> Result<Formula, SyntaxError> {
        match self.peek() {
            Some(Token::Variable(name)) => {
                self.index += 1;
                Ok(Formula::variable(name))
            }

            Some(Token::Constant(value)) => {
                self.index += 1;
                Ok(Formula::Constant(value))
            }

            Some(Token::Open) => {
                self.index += 1;
                let inner = self.biconditional()?;
                match self.peek() {
                    Some(Token::Close) => {
                        self.index += 1;
                        Ok(inner)
                    }
                    _ => Err(self.error_here()),
                }
            }

            _ => Err(self.error_here()),
        }
    }
}

/// Parses some formula text, after normalization.
pub fn parse(text: &str) -> Result<Formula, SyntaxError> {
    parse_normal(&normalize(text))
}

/// Parses text already in normal form.
pub fn parse_normal(normal: &str) -> Result<Formula, SyntaxError> {
    let lexemes = tokenize(normal)?;
    let mut parser = Parser {
        end: normal.chars().count(),
        lexemes,
        index: 0,
    };

    let formula = parser.biconditional()?;

    if parser.index < parser.lexemes.len() {
        let error = parser.error_here();
        log::trace!(target: targets::PARSER, "Trailing input in {normal}: {error}");
        return Err(error);
    }

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors() {
        assert_eq!(
            parse(""),
            Err(SyntaxError {
                position: 0,
                found: None
            })
        );
        assert_eq!(
            parse("(P∧Q"),
            Err(SyntaxError {
                position: 4,
                found: None
            })
        );
        assert_eq!(
            parse("P∧Q)"),
            Err(SyntaxError {
                position: 3,
                found: Some(')')
            })
        );
        assert_eq!(
            parse("P→"),
            Err(SyntaxError {
                position: 2,
                found: None
            })
        );
        assert_eq!(
            parse("∨P"),
            Err(SyntaxError {
                position: 0,
                found: Some('∨')
            })
        );
        assert_eq!(
            parse("P↔Q↔R"),
            Err(SyntaxError {
                position: 3,
                found: Some('↔')
            })
        );
        assert_eq!(
            parse("P∧q"),
            Err(SyntaxError {
                position: 2,
                found: Some('q')
            })
        );
    }

    #[test]
    fn associativity() {
        let p = Formula::variable('P');
        let q = Formula::variable('Q');
        let r = Formula::variable('R');

        assert_eq!(
            parse("P→Q→R"),
            Ok(Formula::implication(
                p.clone(),
                Formula::implication(q.clone(), r.clone())
            ))
        );
        assert_eq!(
            parse("P∧Q∧R"),
            Ok(Formula::conjunction(Formula::conjunction(p, q), r))
        );
    }

    #[test]
    fn stacked_negation() {
        assert_eq!(
            parse("~~P"),
            Ok(Formula::negation(Formula::negation(Formula::variable('P'))))
        );
    }
}
