//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Navigation menu resolver and link inventory
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: sitenav.toml)
    #[arg(short = 'C', long, default_value = "sitenav.toml")]
    pub config: PathBuf,

    /// Navigation data file (.toml or .json), overrides `[nav] path`
    #[arg(short, long)]
    pub nav: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Current page as the host page would report it
#[derive(clap::Args, Debug, Clone)]
pub struct LocationArgs {
    /// Current path, e.g. `/about/online` (leading `/` optional)
    #[arg(short, long)]
    pub path: String,

    /// Key of the current section
    #[arg(short, long)]
    pub section: Option<String>,

    /// Viewport width in CSS pixels (<= 768 is mobile)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Leave out entries flagged `skip_in_listing`
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub doc_mode: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print every listed page link, sorted, one per line
    Links,

    /// Print the resolved highlight state as JSON
    Resolve {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Render the navigation menu HTML
    Render {
        #[command(flatten)]
        location: LocationArgs,

        /// Render the secondary navigation of the current section instead
        #[arg(long)]
        secondary: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate config and navigation data
    Check,
}

impl Cli {
    /// Location arguments of the current command, if it takes any.
    pub fn location(&self) -> Option<&LocationArgs> {
        match &self.command {
            Commands::Resolve { location } | Commands::Render { location, .. } => Some(location),
            Commands::Links | Commands::Check => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_links() {
        let cli = Cli::try_parse_from(["sitenav", "links"]).unwrap();
        assert!(matches!(cli.command, Commands::Links));
        assert_eq!(cli.config, PathBuf::from("sitenav.toml"));
        assert!(cli.location().is_none());
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "sitenav", "-n", "nav.json", "render", "-p", "about/online", "-s", "about", "-w",
            "375", "--doc-mode", "--secondary",
        ])
        .unwrap();

        assert_eq!(cli.nav, Some(PathBuf::from("nav.json")));
        let location = cli.location().unwrap();
        assert_eq!(location.path, "about/online");
        assert_eq!(location.section.as_deref(), Some("about"));
        assert_eq!(location.width, Some(375));
        assert_eq!(location.doc_mode, Some(true));
        assert!(matches!(cli.command, Commands::Render { secondary: true, output: None, .. }));
    }

    #[test]
    fn test_parse_resolve_requires_path() {
        assert!(Cli::try_parse_from(["sitenav", "resolve"]).is_err());
        let cli = Cli::try_parse_from(["sitenav", "resolve", "--path", "/", "--doc-mode", "false"])
            .unwrap();
        assert_eq!(cli.location().unwrap().doc_mode, Some(false));
    }
}
