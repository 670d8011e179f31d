//! getopt-style option specification string.

use crate::domain::OptionKind;

/// Every recognised letter, each followed by `:` when it consumes an argument
/// (e.g. `d:jm:r:`). Rebuilt by every finalize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionAlphabet(String);

impl OptionAlphabet {
    /// Build from `(letter, kind)` pairs, sorted by letter.
    pub fn build(letters: impl IntoIterator<Item = (char, OptionKind)>) -> Self {
        let mut letters: Vec<(char, OptionKind)> = letters.into_iter().collect();
        letters.sort_by_key(|(name, _)| *name);
        letters.dedup_by_key(|(name, _)| *name);

        let mut spec = String::with_capacity(letters.len() * 2);
        for (name, kind) in letters {
            spec.push(name);
            if kind == OptionKind::Value {
                spec.push(':');
            }
        }
        Self(spec)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Kind of `name`, or `None` when the letter is not recognised.
    pub fn lookup(&self, name: char) -> Option<OptionKind> {
        if name == ':' {
            return None;
        }
        let mut chars = self.0.chars().peekable();
        while let Some(current) = chars.next() {
            let takes_argument = chars.next_if_eq(&':').is_some();
            if current == name {
                return Some(if takes_argument {
                    OptionKind::Value
                } else {
                    OptionKind::Flag
                });
            }
        }
        None
    }

    /// Recognised letters in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(|c| *c != ':')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_letters_carry_colon() {
        let alphabet = OptionAlphabet::build([
            ('r', OptionKind::Value),
            ('j', OptionKind::Flag),
            ('m', OptionKind::Value),
            ('d', OptionKind::Value),
        ]);

        assert_eq!(alphabet.as_str(), "d:jm:r:");
        assert_eq!(alphabet.letters().collect::<String>(), "djmr");
    }

    #[test]
    fn test_lookup_reports_kind() {
        let alphabet = OptionAlphabet::build([('r', OptionKind::Value), ('j', OptionKind::Flag)]);

        assert_eq!(alphabet.lookup('r'), Some(OptionKind::Value));
        assert_eq!(alphabet.lookup('j'), Some(OptionKind::Flag));
        assert_eq!(alphabet.lookup('x'), None);
        assert_eq!(alphabet.lookup(':'), None);
    }
}
