//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Build and inspect the Signal dashboard stylesheet.
#[derive(Parser, Debug)]
#[command(name = "signalwind", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the stylesheet.
    Build(BuildArgs),
    /// Validate the theme and component classes.
    Check(ProjectArgs),
    /// Print resolved design tokens.
    Tokens(TokensArgs),
    /// Mount the dashboard shell into a host page and print the result.
    Mount(MountArgs),
}

/// Where to find the project and its configuration.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Configuration file (YAML or JSON). Defaults to
    /// signalwind.config.{yaml,yml,json} under the root, then the built-in theme.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root that content patterns are relative to.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write CSS here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Do not include classes used by the built-in dashboard shell.
    #[arg(long)]
    pub no_shell: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TokensArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only this category, e.g. colors or boxShadow.
    #[arg(long)]
    pub category: Option<String>,

    #[arg(short, long, value_enum, default_value_t = TokenFormat::Yaml)]
    pub format: TokenFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Yaml,
    Json,
    Csv,
}

#[derive(Args, Debug, Clone)]
pub struct MountArgs {
    /// Host HTML page.
    #[arg(long)]
    pub html: PathBuf,

    /// Mount selector.
    #[arg(short, long, default_value = "#app")]
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["signalwind", "build"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.project.root, PathBuf::from("."));
                assert!(args.project.config.is_none());
                assert!(args.out.is_none());
                assert!(!args.no_shell);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_verbosity() {
        let cli = Cli::try_parse_from(["signalwind", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(Cli::try_parse_from(["signalwind", "-q", "-v", "check"]).is_err());
    }

    #[test]
    fn test_tokens_format() {
        let cli = Cli::try_parse_from([
            "signalwind",
            "tokens",
            "--category",
            "colors",
            "--format",
            "csv",
        ])
        .unwrap();
        match cli.command {
            Command::Tokens(args) => {
                assert_eq!(args.category.as_deref(), Some("colors"));
                assert_eq!(args.format, TokenFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["signalwind", "tokens", "--format", "toml"]).is_err());
    }

    #[test]
    fn test_mount_requires_html() {
        assert!(Cli::try_parse_from(["signalwind", "mount"]).is_err());
        let cli = Cli::try_parse_from(["signalwind", "mount", "--html", "index.html"]).unwrap();
        match cli.command {
            Command::Mount(args) => assert_eq!(args.target, "#app"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_command_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
