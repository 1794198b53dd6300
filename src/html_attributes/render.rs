//! Template rendering with the attribute helper registered.

use crate::config::HelperOptions;
use crate::error::Result;
use crate::extension::{pass_through_formatter, register};
use minijinja::{path_loader, Environment, Error};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Renders a one-off template string.
///
/// # Example
///
/// ```rust
/// use html_attributes::{render_str, HelperOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Link { url: String }
///
/// let output = render_str(
///     "<a{{ attributes({'href': url}).addClass('external') }}>",
///     &Link { url: "https://example.com/?a=1&b=2".into() },
///     &HelperOptions::default(),
/// ).unwrap();
/// assert_eq!(output, r#"<a href="https://example.com/?a=1&#x26;b=2" class="external">"#);
/// ```
pub fn render_str<T: Serialize>(
    template: &str,
    data: &T,
    options: &HelperOptions,
) -> std::result::Result<String, Error> {
    let mut renderer = Renderer::new(options);
    renderer.add_template("_inline", template)?;
    renderer.render("_inline", data)
}

/// A renderer with the helper registered and templates compiled once.
///
/// Attribute objects are written verbatim even in auto-escaped (`*.html`)
/// templates; see [`pass_through_formatter`].
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(options: &HelperOptions) -> Self {
        let mut env = Environment::new();
        register(&mut env, options);
        pass_through_formatter(&mut env);
        Self { env }
    }

    /// Creates a renderer that also loads templates by name from `dir`,
    /// so `{% include %}` and `{% extends %}` resolve relative to it.
    pub fn with_template_dir(dir: impl AsRef<Path>, options: &HelperOptions) -> Self {
        let mut renderer = Self::new(options);
        renderer.env.set_loader(path_loader(dir));
        renderer
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> std::result::Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered (or loadable) template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> std::result::Result<String, Error> {
        debug!(template = name, "rendering");
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

/// Renders the template at `path`, or from stdin when `path` is `-`.
pub fn render_path<T: Serialize>(path: &Path, data: &T, options: &HelperOptions) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(render_str(&source, data, options)?);
    }

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    // The loader turns a missing file into "template not found"; report it
    // as the I/O error it is.
    let source = std::fs::read_to_string(path)?;

    let mut renderer = Renderer::with_template_dir(dir, options);
    renderer.add_template(&name, &source)?;
    Ok(renderer.render(&name, data)?)
}

/// Reads a JSON render context from `path`; no path means an empty context.
pub fn load_data(path: Option<&Path>) -> Result<serde_json::Value> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        None => Ok(serde_json::Value::Object(serde_json::Map::new())),
    }
}
