//! Template-side objects wrapping [`AttributeSet`] and [`ClassSet`].
//!
//! Methods are exposed under Drupal's camelCase names (`addClass`,
//! `setAttribute`, ...) with snake_case aliases. Mutating methods return
//! the same object so calls can be chained inside one expression:
//!
//! ```jinja
//! <a{{ attributes({'href': '#'}).addClass('button').setAttribute('target', '_blank') }}>
//! ```

use crate::convert::{mapping_entries, to_attribute_value, to_class_set, to_value};
use attrset::{AttributeSet, ClassSet};
use minijinja::value::{from_args, Enumerator, Object, ObjectRepr, Value};
use minijinja::{Error, ErrorKind, State};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An [`AttributeSet`] usable from templates.
///
/// Objects are shared by reference inside the engine, so the set sits
/// behind a mutex. Rendering the object yields the serialized attributes.
#[derive(Debug, Default)]
pub struct AttributesObject {
    inner: Mutex<AttributeSet>,
}

impl AttributesObject {
    pub fn new(attrs: AttributeSet) -> Self {
        Self {
            inner: Mutex::new(attrs),
        }
    }

    /// Returns a copy of the current attributes.
    pub fn snapshot(&self) -> AttributeSet {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, AttributeSet> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<AttributeSet> for AttributesObject {
    fn from(attrs: AttributeSet) -> Self {
        Self::new(attrs)
    }
}

impl Object for AttributesObject {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Map
    }

    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let name = key.as_str()?;
        self.lock().get_attribute(name).map(to_value)
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        let names = self.lock().iter().map(|(name, _)| Value::from(name)).collect();
        Enumerator::Values(names)
    }

    fn enumerator_len(self: &Arc<Self>) -> Option<usize> {
        Some(self.lock().len())
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        // Arguments are converted before locking: an argument may be this
        // very object (`attrs.setAttributes(attrs)`).
        match method {
            "setAttribute" | "set_attribute" => {
                let (name, value): (&str, Option<Value>) = from_args(args)?;
                let value = to_attribute_value(&value.unwrap_or(Value::UNDEFINED));
                self.lock().set_attribute(name, value);
                Ok(chained(self))
            }
            "setAttributes" | "set_attributes" => {
                let (mapping,): (Value,) = from_args(args)?;
                let entries = mapping_entries(&mapping)?;
                self.lock().set_attributes(entries);
                Ok(chained(self))
            }
            "removeAttribute" | "remove_attribute" => {
                let names: Vec<String> = args.iter().map(text).collect();
                self.lock().remove_attribute(names);
                Ok(chained(self))
            }
            "addClass" | "add_class" => {
                let sources: Vec<ClassSet> = args.iter().map(to_class_set).collect();
                self.lock().add_class(sources);
                Ok(chained(self))
            }
            "removeClass" | "remove_class" => {
                let sources: Vec<ClassSet> = args.iter().map(to_class_set).collect();
                self.lock().remove_class(sources);
                Ok(chained(self))
            }
            "hasAttribute" | "has_attribute" => {
                let (name,): (&str,) = from_args(args)?;
                Ok(Value::from(self.lock().has_attribute(name)))
            }
            "getAttribute" | "get_attribute" => {
                let (name,): (&str,) = from_args(args)?;
                Ok(self
                    .lock()
                    .get_attribute(name)
                    .map(to_value)
                    .unwrap_or(Value::UNDEFINED))
            }
            "getAttributes" | "get_attributes" | "toArray" | "to_array" | "toObject"
            | "to_object" => {
                let _: () = from_args(args)?;
                let attrs = self.snapshot();
                Ok(Value::from_iter(
                    attrs.iter().map(|(name, value)| (name.to_string(), to_value(value))),
                ))
            }
            "getClass" | "get_class" => {
                let _: () = from_args(args)?;
                let classes = self.lock().class();
                Ok(Value::from_object(ClassSetObject::new(classes)))
            }
            "hasClass" | "has_class" => {
                let (name,): (&str,) = from_args(args)?;
                Ok(Value::from(self.lock().has_class(name)))
            }
            _ => Err(Error::new(
                ErrorKind::UnknownMethod,
                format!("attributes object has no method named {}", method),
            )),
        }
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: Sized + 'static,
    {
        write!(f, "{}", self.lock())
    }
}

/// The value handed back by mutating methods: the same object.
fn chained(object: &Arc<AttributesObject>) -> Value {
    Value::from_dyn_object(object.clone())
}

fn text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// A snapshot of a [`ClassSet`], as returned by `getClass()`.
///
/// Renders as the space-joined class list, iterates its tokens and answers
/// `has(token)`.
#[derive(Debug, Clone, Default)]
pub struct ClassSetObject {
    classes: ClassSet,
}

impl ClassSetObject {
    pub fn new(classes: ClassSet) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }
}

impl Object for ClassSetObject {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Seq
    }

    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let index = usize::try_from(key.clone()).ok()?;
        self.classes.iter().nth(index).map(Value::from)
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Seq(self.classes.len())
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, Error> {
        match method {
            "has" | "contains" => {
                let (token,): (&str,) = from_args(args)?;
                Ok(Value::from(self.classes.has(token)))
            }
            _ => Err(Error::new(
                ErrorKind::UnknownMethod,
                format!("class list has no method named {}", method),
            )),
        }
    }

    fn render(self: &Arc<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self: Sized + 'static,
    {
        write!(f, "{}", self.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::{context, Environment};

    fn render(template: &str, ctx: Value) -> String {
        let mut env = Environment::new();
        env.add_template("test", template).unwrap();
        env.get_template("test").unwrap().render(ctx).unwrap()
    }

    fn attrs_value(entries: &[(&str, &str)], sort: bool) -> Value {
        let attrs = AttributeSet::from_entries(entries.iter().copied(), sort);
        Value::from_object(AttributesObject::new(attrs))
    }

    #[test]
    fn renders_serialized_attributes() {
        let attrs = attrs_value(&[("href", "#"), ("title", "<b>")], false);
        assert_eq!(
            render("<a{{ attrs }}>", context! { attrs }),
            r##"<a href="#" title="&#x3C;b&#x3E;">"##
        );
    }

    #[test]
    fn chained_mutations_share_state() {
        let attrs = attrs_value(&[("href", "#")], false);
        let output = render(
            "{% set _ = attrs.addClass('a', ['b', 'c']).setAttribute('target', '_blank') %}<a{{ attrs }}>",
            context! { attrs },
        );
        assert_eq!(output, r##"<a href="#" class="a b c" target="_blank">"##);
    }

    #[test]
    fn snake_case_aliases() {
        let attrs = attrs_value(&[("class", "a b")], false);
        let output = render(
            "{{ attrs.remove_class('b').add_class('c').set_attribute('id', 'x') }}",
            context! { attrs },
        );
        assert_eq!(output, r#" class="a c" id="x""#);
    }

    #[test]
    fn set_attribute_with_none_removes() {
        let attrs = attrs_value(&[("href", "#"), ("target", "_blank")], false);
        let output = render("{{ attrs.setAttribute('target', none) }}", context! { attrs });
        assert_eq!(output, r##" href="#""##);
    }

    #[test]
    fn queries() {
        let attrs = attrs_value(&[("href", "#"), ("class", "foo bar")], false);
        let output = render(
            "{{ 'y' if attrs.hasAttribute('href') else 'n' }} \
             {{ 'y' if attrs.hasAttribute('target') else 'n' }} \
             {{ 'y' if attrs.hasClass('bar') else 'n' }} \
             {{ 'y' if attrs.hasClass('baz') else 'n' }} \
             {{ attrs.getAttribute('href') }} \
             {{ 'y' if attrs.getAttribute('nope') is undefined else 'n' }}",
            context! { attrs },
        );
        assert_eq!(output, "y n y n # y");
    }

    #[test]
    fn get_class_returns_class_list() {
        let attrs = attrs_value(&[("class", "foo bar")], false);
        let output = render(
            "{% set c = attrs.getClass() %}{{ c }}|{{ c|length }}|{% if c.has('foo') %}has foo{% endif %}{% if c.contains('baz') %}has baz{% endif %}|{% for t in c %}[{{ t }}]{% endfor %}",
            context! { attrs },
        );
        assert_eq!(output, "foo bar|2|has foo|[foo][bar]");
    }

    #[test]
    fn get_class_when_unset_is_empty() {
        let attrs = attrs_value(&[], false);
        let output = render("[{{ attrs.getClass() }}]{{ attrs.getClass()|length }}", context! { attrs });
        assert_eq!(output, "[]0");
    }

    #[test]
    fn get_class_is_a_snapshot() {
        let attrs = attrs_value(&[("class", "foo")], false);
        let output = render(
            "{% set c = attrs.getClass() %}{{ attrs.addClass('bar') }}|{{ c }}",
            context! { attrs },
        );
        assert_eq!(output, r#" class="foo bar"|foo"#);
    }

    #[test]
    fn attribute_lookup_and_iteration() {
        let attrs = attrs_value(&[("href", "#"), ("data-id", "7")], false);
        let output = render(
            "{{ attrs.href }} {{ attrs['data-id'] }} {{ attrs|length }} {% for name in attrs %}{{ name }};{% endfor %}",
            context! { attrs },
        );
        assert_eq!(output, "# 7 2 href;data-id;");
    }

    #[test]
    fn get_attributes_returns_map_copy() {
        let attrs = attrs_value(&[("href", "#"), ("target", "_blank")], false);
        let output = render(
            "{% for k, v in attrs.getAttributes()|items %}{{ k }}={{ v }};{% endfor %}{{ attrs.toArray()|length }}",
            context! { attrs },
        );
        assert_eq!(output, "href=#;target=_blank;2");
    }

    #[test]
    fn set_attributes_accepts_own_object() {
        let attrs = attrs_value(&[("href", "#")], false);
        let output = render("{{ attrs.setAttributes(attrs) }}", context! { attrs });
        assert_eq!(output, r##" href="#""##);
    }

    #[test]
    fn unknown_method_is_an_error() {
        let mut env = Environment::new();
        env.add_template("test", "{{ attrs.explode() }}").unwrap();
        let err = env
            .get_template("test")
            .unwrap()
            .render(context! { attrs => attrs_value(&[], false) })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownMethod);
    }

    #[test]
    fn snapshot_reflects_template_mutations() {
        let object = Arc::new(AttributesObject::default());
        let attrs = Value::from_dyn_object(object.clone());
        render("{{ attrs.addClass('x') }}", context! { attrs });
        assert!(object.snapshot().has_class("x"));
    }
}
