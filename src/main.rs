//! sitenav - navigation menu resolver and link inventory for static sites.

mod check;
mod inspect;
mod list;
mod render;

use anyhow::{Context, Result};
use check::check_site;
use clap::Parser;
use inspect::print_state;
use list::print_links;
use render::render_menu;
use sitenav::{
    cli::{Cli, Commands},
    config::SiteConfig,
    nav::NavTree,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let tree = NavTree::from_path(&config.nav.path).with_context(|| {
        format!(
            "Failed to load navigation data from {}",
            config.nav.path.display()
        )
    })?;

    match &cli.command {
        Commands::Links => print_links(&tree, &config),
        Commands::Resolve { location } => print_state(&tree, &config, location),
        Commands::Render {
            location,
            secondary,
            output,
        } => render_menu(&tree, &config, location, *secondary, output.as_deref()),
        Commands::Check => check_site(&tree, &config),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is fine: defaults apply.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
