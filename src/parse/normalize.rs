/*!
Normalization of formula text.

Normalization maps each accepted alias of a symbol to the canonical symbol, and strips whitespace.

| Canonical | Aliases                         |
|-----------|---------------------------------|
| ¬         | `~` `-` `!` `∼`                 |
| ∧         | `&` `/\` `^`                    |
| ∨         | `\|` `\/`                       |
| →         | `->` `=>` `⇒` `⊃`               |
| ↔         | `<->` `<=>` `⇔` `≡`             |
| ⊤         | `T` `true`                      |
| ⊥         | `F` `false` `!?` `_\|_`         |

Some care is taken with letters:
- `T` and `F` are read as constants unless applied to terms, as in `F(a)`.
- `true` and `false` are read as constants only as whole words.

Normalization is idempotent, as no canonical symbol is an alias.

```rust
# use fitch_engine::parse::normalize::normalize;
assert_eq!(normalize("(P & Q) -> ~R"), "(P∧Q)→¬R");
assert_eq!(normalize("P <=> _|_"), "P↔⊥");
assert_eq!(normalize("F(a) | F"), "F(a)∨⊥");
assert_eq!(normalize(&normalize("P \\/ true")), normalize("P \\/ true"));
```
*/

/// Aliases, with longer aliases before any alias they extend.
const ALIASES: [(&str, char); 19] = [
    ("<->", '↔'),
    ("<=>", '↔'),
    ("_|_", '⊥'),
    ("->", '→'),
    ("=>", '→'),
    ("/\\", '∧'),
    ("\\/", '∨'),
    ("!?", '⊥'),
    ("⇒", '→'),
    ("⊃", '→'),
    ("⇔", '↔'),
    ("≡", '↔'),
    ("&", '∧'),
    ("|", '∨'),
    ("~", '¬'),
    ("-", '¬'),
    ("!", '¬'),
    ("∼", '¬'),
    ("^", '∧'),
];

/// Aliases which are read only as whole words.
const WORD_ALIASES: [(&str, char); 2] = [("true", '⊤'), ("false", '⊥')];

/// Aliases which are read as constants unless applied to terms.
const LETTER_ALIASES: [(char, char); 2] = [('T', '⊤'), ('F', '⊥')];

/// The normal form of some formula text.
pub fn normalize(text: &str) -> String {
    let characters = text.chars().collect::<Vec<_>>();
    let mut normal = String::with_capacity(text.len());
    let mut index = 0;

    'character_loop: while index < characters.len() {
        let character = characters[index];

        if character.is_whitespace() {
            index += 1;
            continue 'character_loop;
        }

        for (alias, symbol) in ALIASES {
            if matches_at(&characters, index, alias) {
                normal.push(symbol);
                index += alias.chars().count();
                continue 'character_loop;
            }
        }

        for (word, symbol) in WORD_ALIASES {
            let length = word.chars().count();
            if matches_at(&characters, index, word)
                && !is_word_character(index.checked_sub(1).and_then(|i| characters.get(i)))
                && !is_word_character(characters.get(index + length))
            {
                normal.push(symbol);
                index += length;
                continue 'character_loop;
            }
        }

        for (letter, symbol) in LETTER_ALIASES {
            if character == letter && !applied_to_terms(&characters, index + 1) {
                normal.push(symbol);
                index += 1;
                continue 'character_loop;
            }
        }

        normal.push(character);
        index += 1;
    }

    normal
}

fn matches_at(characters: &[char], index: usize, alias: &str) -> bool {
    let mut offset = index;
    for alias_character in alias.chars() {
        match characters.get(offset) {
            Some(character) if *character == alias_character => offset += 1,
            _ => return false,
        }
    }
    true
}

fn is_word_character(character: Option<&char>) -> bool {
    character.is_some_and(|c| c.is_alphanumeric() || *c == '_')
}

/// Whether the next character which is not whitespace from `index` opens a list of terms.
fn applied_to_terms(characters: &[char], index: usize) -> bool {
    characters
        .iter()
        .skip(index)
        .find(|c| !c.is_whitespace())
        .is_some_and(|c| *c == '(')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_pairs_agree() {
        let pairs = [
            ("->", "→"),
            ("&", "/\\"),
            ("&", "∧"),
            ("|", "\\/"),
            ("|", "∨"),
            ("~", "-"),
            ("~", "¬"),
            ("<->", "↔"),
            ("!?", "_|_"),
            ("!?", "⊥"),
            ("T", "true"),
            ("T", "⊤"),
            ("F", "false"),
            ("F", "⊥"),
        ];
        for (a, b) in pairs {
            assert_eq!(normalize(a), normalize(b), "{a} and {b}");
        }
    }

    #[test]
    fn idempotent() {
        for text in [
            "P -> Q",
            "~(P & Q) <-> (~P | ~Q)",
            "true & false",
            "F(a) -> T",
            "- - P",
            "P => Q <=> R",
            "∀x.(F(x) ⊃ G(x))",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "{text}");
        }
    }

    #[test]
    fn words_and_letters() {
        assert_eq!(normalize("trueish"), "trueish");
        assert_eq!(normalize("(true)"), "(⊤)");
        assert_eq!(normalize("T (a)"), "T(a)");
        assert_eq!(normalize("T & F"), "⊤∧⊥");
    }
}
