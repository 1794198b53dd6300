//! # Configuration
//!
//! Helper options are managed by [`confique`], layered from highest to
//! lowest priority:
//! 1. **Command-line flags** (`--function-name`, `--sort`), applied by the binary.
//! 2. **Environment variables**: `HTML_ATTRIBUTES_FUNCTION_NAME`, `HTML_ATTRIBUTES_SORT`.
//! 3. **Config file**: a TOML file, `html-attributes.toml` by default. A missing file is fine.
//! 4. **Compiled defaults** via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `function_name` | `attributes` | Name of the template function |
//! | `sort_attributes` | `false` | Render attributes sorted by name |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "html-attributes.toml";
pub const DEFAULT_FUNCTION_NAME: &str = "attributes";

/// Options for [`register`](crate::register).
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HelperOptions {
    /// Name under which the constructor function is exposed to templates
    #[config(default = "attributes", env = "HTML_ATTRIBUTES_FUNCTION_NAME")]
    pub function_name: String,

    /// Render attributes sorted by name instead of insertion order.
    /// Applies to every attribute set the function creates.
    #[config(default = false, env = "HTML_ATTRIBUTES_SORT")]
    pub sort_attributes: bool,
}

impl Default for HelperOptions {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            sort_attributes: false,
        }
    }
}

impl HelperOptions {
    /// Loads options from the environment and, if given, a TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn with_sort(mut self, sort_attributes: bool) -> Self {
        self.sort_attributes = sort_attributes;
        self
    }
}
