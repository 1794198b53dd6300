//! Ordered, duplicate-free CSS class tokens.

use indexmap::IndexSet;
use std::fmt;

/// The set of CSS classes assigned to an element.
///
/// Tokens keep their insertion order and duplicates are silently ignored.
/// Construction is explicit: pick [`ClassSet::parse`] for a
/// whitespace-delimited string, [`ClassSet::from_tokens`] for a list of
/// tokens, or [`ClassSet::from_scalar`] for any other displayable value.
///
/// ```rust
/// use attrset::ClassSet;
///
/// let classes = ClassSet::parse("  btn btn-primary  btn ");
/// assert_eq!(classes.len(), 2);
/// assert_eq!(classes.to_string(), "btn btn-primary");
/// assert!(classes.has("btn-primary"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: IndexSet<String>,
}

impl ClassSet {
    /// Creates an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `input` on runs of whitespace. Blank input yields an empty set.
    pub fn parse(input: &str) -> Self {
        Self {
            tokens: input.split_whitespace().map(String::from).collect(),
        }
    }

    /// Adds each item as one token, without splitting it further.
    ///
    /// Surrounding whitespace is trimmed and items that end up empty are
    /// dropped, so `[" a ", ""]` yields the single token `a`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for token in tokens {
            set.insert(token.as_ref());
        }
        set
    }

    /// Uses the string form of `value` as a single token.
    ///
    /// ```rust
    /// use attrset::ClassSet;
    ///
    /// assert_eq!(ClassSet::from_scalar(5).to_string(), "5");
    /// ```
    pub fn from_scalar<T: fmt::Display>(value: T) -> Self {
        Self::from_tokens([value.to_string()])
    }

    /// Exact membership test.
    pub fn has(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Inserts a token, returning `false` if it was blank or already present.
    pub fn insert(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        self.tokens.insert(token.to_string())
    }

    /// Removes a token, keeping the relative order of the rest.
    pub fn remove(&mut self, token: &str) -> bool {
        self.tokens.shift_remove(token)
    }

    /// Appends every token of `other` not yet present, in `other`'s order.
    pub fn union(&mut self, other: &ClassSet) {
        self.tokens.extend(other.tokens.iter().cloned());
    }

    /// Drops every token that is present in `other`.
    pub fn difference(&mut self, other: &ClassSet) {
        self.tokens.retain(|token| !other.has(token));
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassSet {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for ClassSet {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<&String> for ClassSet {
    fn from(input: &String) -> Self {
        Self::parse(input)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for ClassSet {
    fn from(tokens: Vec<S>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<S: AsRef<str>> From<&[S]> for ClassSet {
    fn from(tokens: &[S]) -> Self {
        Self::from_tokens(tokens)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for ClassSet {
    fn from(tokens: [S; N]) -> Self {
        Self::from_tokens(tokens)
    }
}

impl From<&ClassSet> for ClassSet {
    fn from(classes: &ClassSet) -> Self {
        classes.clone()
    }
}

impl FromIterator<String> for ClassSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

impl IntoIterator for ClassSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
