//! Style and configuration checker for mapframe
//!
//! ```bash
//! mapframe-app check mapbox://styles/mapbox/dark-v11 not-a-style
//! VITE_MAPBOX_ACCESS_TOKEN=pk.xxx mapframe-app --env-prefix VITE_ resolve
//! MAPBOX_ACCESS_TOKEN=pk.xxx mapframe-app simulate --await-load
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mapframe::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "mapframe-app", version, about = "Check map styles and simulate the map lifecycle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Prefix applied to MAPBOX_ACCESS_TOKEN and MAPBOX_STYLE_URL
    #[arg(long, global = true, default_value = "")]
    env_prefix: String,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Validate style identifiers and print their parts
    Check {
        /// Identifiers such as mapbox://styles/{owner}/{id}
        #[arg(required = true)]
        styles: Vec<String>,
    },

    /// Show which style a map would use with the current environment
    Resolve {
        /// Style requested by the page
        preferred: Option<String>,
    },

    /// Run one map through its lifecycle against the headless renderer
    Simulate {
        /// Stay loading until the SDK reports `load`
        #[arg(long)]
        await_load: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let env = EnvConfig::with_prefix(cli.env_prefix);

    match cli.command {
        Commands::Check { styles } => cmd_check(&styles),
        Commands::Resolve { preferred } => cmd_resolve(&env, preferred.as_deref()),
        Commands::Simulate { await_load } => cmd_simulate(env, await_load),
    }
}

fn cmd_check(styles: &[String]) -> Result<()> {
    for style in styles {
        let validation = validate_style(style);
        match get_style_info(style) {
            Some(info) => {
                let json = serde_json::to_string(&info).context("encoding style info")?;
                println!("{style}: valid {json}");
            }
            None => {
                let reason = validation
                    .error
                    .map(|err| err.to_string())
                    .unwrap_or_default();
                let fallback = validation.fallback_style.unwrap_or_default();
                println!("{style:?}: invalid ({reason}), fallback {fallback}");
            }
        }
    }
    Ok(())
}

fn cmd_resolve(env: &EnvConfig, preferred: Option<&str>) -> Result<()> {
    let config = env.load();

    println!("{}: {}", env.access_token_var(), presence(config.access_token.as_deref()));
    println!("{}: {}", env.style_url_var(), presence(config.style_url.as_deref()));
    println!(
        "resolved style: {}",
        resolve_style(preferred, config.preferred_style())
    );
    Ok(())
}

fn cmd_simulate(env: EnvConfig, await_load: bool) -> Result<()> {
    let renderer = HeadlessRenderer::new();
    let token_var = env.access_token_var();
    let mut builder = MapBuilder::new(renderer.clone()).with_config_source(env);
    if await_load {
        builder = builder.await_load();
    }
    let mut page = MapContainer::new(builder.build(), MapContainerProps::default());

    let status = page.mount(HeadlessContainer::new("map"));
    println!("after mount: {status}");
    if let Some(err) = page.controller().last_error() {
        println!("map failed: {err}");
        println!("set {token_var} to construct a map");
        return Ok(());
    }

    let handle = page
        .controller()
        .handle_id()
        .context("mounted map has no handle")?;
    renderer.emit_load(handle);
    page.poll_events();
    println!("after load event: {}", page.controller().status());
    println!("{}", page.render_html());

    page.unmount();
    println!("after unmount: {}", page.controller().status());
    for call in renderer.calls() {
        println!("  {call:?}");
    }
    Ok(())
}

fn presence(value: Option<&str>) -> &'static str {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => "set",
        _ => "unset",
    }
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
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["mapframe-app", "check", "a", "b"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Check {
                styles: vec!["a".to_string(), "b".to_string()]
            }
        );

        let cli = Cli::try_parse_from(["mapframe-app", "--env-prefix", "VITE_", "resolve"]).unwrap();
        assert_eq!(cli.env_prefix, "VITE_");
        assert_eq!(cli.command, Commands::Resolve { preferred: None });

        let cli = Cli::try_parse_from(["mapframe-app", "simulate", "--await-load"]).unwrap();
        assert_eq!(cli.command, Commands::Simulate { await_load: true });
    }

    #[test]
    fn test_rejects_bad_usage() {
        let err = Cli::try_parse_from(["mapframe-app", "check"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["mapframe-app", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        assert!(Cli::try_parse_from(["mapframe-app", "frobnicate"]).is_err());
    }
}
