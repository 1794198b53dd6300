use clap::Parser;
use html_attributes::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "html-attributes", bin_name = "html-attributes", version = env!("HTML_ATTRIBUTES_VERSION"))]
#[command(about = "Render a minijinja template with the HTML attributes helper", long_about = None)]
pub struct Cli {
    /// Template file to render, or `-` to read it from stdin
    pub template: PathBuf,

    /// JSON file with the render context
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Name of the template function (overrides config)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub function_name: Option<String>,

    /// Render attributes sorted by name (overrides config)
    #[arg(short, long)]
    pub sort: bool,

    /// Config file; ignored when it does not exist
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["html-attributes", "page.j2"]).unwrap();
        assert_eq!(cli.template, PathBuf::from("page.j2"));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(cli.data.is_none());
        assert!(cli.function_name.is_none());
        assert!(!cli.sort);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "html-attributes",
            "-s",
            "-n",
            "attrs",
            "--data",
            "ctx.json",
            "-",
        ])
        .unwrap();
        assert_eq!(cli.template, PathBuf::from("-"));
        assert_eq!(cli.function_name.as_deref(), Some("attrs"));
        assert_eq!(cli.data, Some(PathBuf::from("ctx.json")));
        assert!(cli.sort);
    }

    #[test]
    fn test_version_starts_with_package_version() {
        let command = Cli::command();
        let version = command.get_version().unwrap_or_default();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_template_is_required() {
        assert!(Cli::try_parse_from(["html-attributes"]).is_err());
    }
}
