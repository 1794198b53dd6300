//! # html-attributes - HTML Attribute Helper for minijinja
//!
//! Build the attributes of an HTML element from a template without
//! hand-writing quoting, escaping or class bookkeeping.
//!
//! ## The Problem
//!
//! Templates that emit tags with optional attributes end up full of
//! conditionals:
//! - Attributes that should disappear when `false` or `none`
//! - Class lists assembled from several sources, with duplicates
//! - Values that need escaping before they land inside double quotes
//!
//! ## The Solution
//!
//! A single template function, `attributes` by default, returns an
//! attribute object. Chain methods on it and print it right after a tag name:
//!
//! ```rust
//! use html_attributes::{render_str, HelperOptions};
//! use serde_json::json;
//!
//! let template = r#"<button{{ attributes({'type': 'submit', 'disabled': busy}).addClass('btn', primary and 'btn--primary') }}>"#;
//!
//! let output = render_str(
//!     template,
//!     &json!({ "busy": false, "primary": true }),
//!     &HelperOptions::default(),
//! ).unwrap();
//! assert_eq!(output, r#"<button type="submit" class="btn btn--primary">"#);
//! ```
//!
//! ## How It Works
//!
//! 1. [`register`] adds the constructor function to a minijinja [`Environment`](minijinja::Environment)
//! 2. Each call creates an [`AttributesObject`] wrapping an [`attrset::AttributeSet`]
//! 3. Methods such as `addClass`, `setAttribute` and `removeAttribute` mutate it and return it
//! 4. Printing the object renders ` name="value"` pairs, escaped for a double-quoted context
//!
//! ## Options
//!
//! [`HelperOptions`] controls the function name and whether attributes render
//! sorted by name. The options load through `confique` from an optional TOML
//! file and environment variables; see [`config`].
//!
//! ## Auto-escaping
//!
//! The rendered attribute string is already escaped. In auto-escaped
//! templates (`*.html`), install [`pass_through_formatter`] or use
//! [`Renderer`], which does it for you.

pub mod config;
pub mod convert;
pub mod error;
pub mod extension;
pub mod object;
pub mod render;

pub use attrset::{AttributeError, AttributeSet, AttributeValue, ClassSet};
pub use config::HelperOptions;
pub use error::{RenderError, Result};
pub use extension::{pass_through_formatter, register, register_default};
pub use object::{AttributesObject, ClassSetObject};
pub use render::{load_data, render_path, render_str, Renderer};
