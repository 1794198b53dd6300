//! # attrset - HTML attribute sets
//!
//! A small data model for building the attribute part of an HTML start tag,
//! modeled on Drupal's `Attribute` helper.
//!
//! ## Building Blocks
//!
//! - [`ClassSet`]: ordered, duplicate-free CSS class tokens
//! - [`AttributeValue`]: what a single attribute can hold (text, boolean,
//!   number, list, or a class set)
//! - [`AttributeSet`]: named attributes of one element, with class helpers
//!   and serialization
//! - [`escape`]: entity encoding used for attribute values
//!
//! ## Example
//!
//! ```rust
//! use attrset::AttributeSet;
//!
//! let mut attrs = AttributeSet::with_sort(true);
//! attrs
//!     .set_attribute("target", "_blank")
//!     .set_attribute("href", "/search?q=<b>")
//!     .add_class(["nav-link", "active"]);
//!
//! assert_eq!(
//!     format!("<a{}>", attrs),
//!     r#"<a class="nav-link active" href="/search?q=&#x3C;b&#x3E;" target="_blank">"#
//! );
//! ```
//!
//! ## Failure Policy
//!
//! Nothing here returns an error in normal use. Attribute names that do not
//! match `^[a-z0-9-]+$` (case-insensitive) are dropped and logged at debug
//! level, so a set always renders as well-formed markup.
//! [`AttributeSet::try_set_attribute`] reports the rejection instead.

mod attribute_set;
mod class_set;
pub mod error;
pub mod escape;
mod value;

pub use attribute_set::{is_valid_name, AttributeSet, CLASS};
pub use class_set::ClassSet;
pub use error::AttributeError;
pub use value::AttributeValue;
