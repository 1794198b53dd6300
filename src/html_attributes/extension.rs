//! Registration of the attribute helper on a minijinja [`Environment`].

use crate::config::HelperOptions;
use crate::convert::mapping_entries;
use crate::object::{AttributesObject, ClassSetObject};
use attrset::AttributeSet;
use minijinja::value::Value;
use minijinja::{escape_formatter, Environment, Error};
use tracing::trace;

/// Registers the attribute constructor function on `env`.
///
/// The function takes one optional argument, the initial attributes as a
/// map, and returns a new attribute object. Every set it creates uses
/// `options.sort_attributes`. Registering again under the same name
/// replaces the previous function.
///
/// ```rust
/// use html_attributes::{register, HelperOptions};
/// use minijinja::Environment;
///
/// let mut env = Environment::new();
/// register(&mut env, &HelperOptions::default().with_function_name("attrs").with_sort(true));
///
/// let out = env
///     .render_str("<a{{ attrs({'target': '_blank', 'href': '#'}) }}>", ())
///     .unwrap();
/// assert_eq!(out, r##"<a href="#" target="_blank">"##);
/// ```
pub fn register(env: &mut Environment<'_>, options: &HelperOptions) {
    let sort_attributes = options.sort_attributes;
    trace!(name = %options.function_name, sort_attributes, "registering attribute helper");

    env.add_function(
        options.function_name.clone(),
        move |initial: Option<Value>| -> Result<Value, Error> {
            let mut attrs = AttributeSet::with_sort(sort_attributes);
            if let Some(initial) = initial {
                attrs.set_attributes(mapping_entries(&initial)?);
            }
            Ok(Value::from_object(AttributesObject::new(attrs)))
        },
    );
}

/// Registers the helper as `attributes`, rendering in insertion order.
pub fn register_default(env: &mut Environment<'_>) {
    register(env, &HelperOptions::default());
}

/// Installs a formatter that writes attribute and class objects verbatim.
///
/// With HTML auto-escaping enabled (templates named `*.html` and the
/// like), minijinja would escape the already-escaped attribute string a
/// second time. Everything other than the helper's own objects still goes
/// through [`escape_formatter`]. This replaces any formatter set before.
pub fn pass_through_formatter(env: &mut Environment<'_>) {
    env.set_formatter(|out, state, value| {
        if value.downcast_object_ref::<AttributesObject>().is_some()
            || value.downcast_object_ref::<ClassSetObject>().is_some()
        {
            escape_formatter(out, state, &Value::from_safe_string(value.to_string()))
        } else {
            escape_formatter(out, state, value)
        }
    });
}
