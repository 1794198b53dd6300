//! The attribute map of a single HTML element.

use crate::error::{AttributeError, Result};
use crate::escape;
use crate::{AttributeValue, ClassSet};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// Name of the attribute whose value is always a [`ClassSet`].
pub const CLASS: &str = "class";

/// Returns true if `name` matches `^[a-z0-9-]+$`, ignoring case.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// The full set of HTML attributes for one element.
///
/// Attributes keep their insertion order. Writes with an invalid name are
/// ignored, and writing `false` or `None` removes the attribute. Rendering
/// (via [`fmt::Display`]) produces a fragment where every attribute is
/// prefixed by a single space, ready to follow a tag name.
///
/// ```rust
/// use attrset::AttributeSet;
///
/// let mut attrs = AttributeSet::from_entries([("href", "#"), ("target", "_blank")], false);
/// attrs.add_class(["button", "button--primary"]);
/// attrs.set_attribute("disabled", true);
///
/// assert_eq!(
///     attrs.to_string(),
///     r##" href="#" target="_blank" class="button button--primary" disabled"##
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    storage: IndexMap<String, AttributeValue>,
    sort_attributes: bool,
}

impl AttributeSet {
    /// Creates an empty set that renders attributes in insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set; `sort_attributes` renders attributes by name.
    pub fn with_sort(sort_attributes: bool) -> Self {
        Self {
            storage: IndexMap::new(),
            sort_attributes,
        }
    }

    /// Creates a set from initial entries, applied in order through
    /// [`set_attribute`](Self::set_attribute).
    pub fn from_entries<I, K, V>(entries: I, sort_attributes: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        let mut attrs = Self::with_sort(sort_attributes);
        attrs.set_attributes(entries);
        attrs
    }

    pub fn sort_attributes(&self) -> bool {
        self.sort_attributes
    }

    /// Sets the value of an attribute.
    ///
    /// Invalid names are dropped without error; use
    /// [`try_set_attribute`](Self::try_set_attribute) to detect them.
    pub fn set_attribute<V: Into<AttributeValue>>(&mut self, name: &str, value: V) -> &mut Self {
        if let Err(err) = self.try_set_attribute(name, value) {
            debug!(%err, "ignoring attribute");
        }
        self
    }

    /// Like [`set_attribute`](Self::set_attribute), but reports an invalid
    /// name instead of ignoring it. The set is unchanged on error.
    pub fn try_set_attribute<V: Into<AttributeValue>>(
        &mut self,
        name: &str,
        value: V,
    ) -> Result<&mut Self> {
        if !is_valid_name(name) {
            return Err(AttributeError::InvalidName(name.to_string()));
        }

        let value = value.into();
        if value.is_removal() {
            self.storage.shift_remove(name);
            return Ok(self);
        }

        let value = if name == CLASS {
            AttributeValue::Class(value.into_class_set())
        } else {
            value
        };
        self.storage.insert(name.to_string(), value);
        Ok(self)
    }

    /// Applies [`set_attribute`](Self::set_attribute) to every entry in
    /// order. Later entries for the same name win.
    pub fn set_attributes<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        for (name, value) in entries {
            self.set_attribute(name.as_ref(), value);
        }
        self
    }

    /// Removes the named attributes. Missing names are ignored.
    pub fn remove_attribute<I, K>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for name in names {
            self.storage.shift_remove(name.as_ref());
        }
        self
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.storage.contains_key(name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.storage.get(name)
    }

    /// Returns a copy of every attribute, in insertion order.
    pub fn attributes(&self) -> IndexMap<String, AttributeValue> {
        self.storage.clone()
    }

    /// Same as [`attributes`](Self::attributes).
    pub fn to_map(&self) -> IndexMap<String, AttributeValue> {
        self.attributes()
    }

    /// Merges classes onto the `class` attribute.
    ///
    /// Each source converts into a [`ClassSet`] the same way the class set
    /// constructors do: strings are split on whitespace, lists are taken
    /// token by token. Tokens already present are skipped.
    pub fn add_class<I, C>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ClassSet>,
    {
        let mut classes = self.class();
        for source in sources {
            classes.union(&source.into());
        }
        self.storage
            .insert(CLASS.to_string(), AttributeValue::Class(classes));
        self
    }

    /// Removes classes from the `class` attribute.
    ///
    /// The attribute is removed entirely once no class is left.
    pub fn remove_class<I, C>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ClassSet>,
    {
        let mut classes = self.class();
        for source in sources {
            classes.difference(&source.into());
        }
        if classes.is_empty() {
            self.storage.shift_remove(CLASS);
        } else {
            self.storage
                .insert(CLASS.to_string(), AttributeValue::Class(classes));
        }
        self
    }

    /// Returns a snapshot of the `class` attribute, empty if unset.
    ///
    /// Changing the returned set does not affect `self`.
    pub fn class(&self) -> ClassSet {
        match self.storage.get(CLASS) {
            Some(AttributeValue::Class(classes)) => classes.clone(),
            Some(other) => other.clone().into_class_set(),
            None => ClassSet::new(),
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        match self.storage.get(CLASS) {
            Some(AttributeValue::Class(classes)) => classes.has(name),
            _ => self.class().has(name),
        }
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.storage.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn render_order(&self) -> Vec<(&String, &AttributeValue)> {
        let mut entries: Vec<_> = self.storage.iter().collect();
        if self.sort_attributes {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.render_order() {
            match value {
                AttributeValue::Bool(true) => write!(f, " {}", name)?,
                AttributeValue::Bool(false) => {}
                value => {
                    let text = value.to_string();
                    write!(f, " {}=\"{}\"", name, escape::encode(&text))?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a String, &'a AttributeValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}
