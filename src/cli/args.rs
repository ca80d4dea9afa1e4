//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::application::Scope;

/// Organisation tree reports: task totals and box-drawn hierarchy views
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Explicit config file, layered over the global one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Organisation document (default: configured data_file, else built-in sample)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Disable ANSI styling
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total duration, full tree and departments-only tree
    Report,

    /// Sum of all task durations
    Total,

    /// One tree report
    Tree {
        /// Which nodes to show
        #[arg(short, long, value_enum, default_value_t = ScopeArg::Units)]
        scope: ScopeArg,
    },

    /// Unstyled structure outline
    Outline,

    /// Print the built-in organisation as TOML
    Sample,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Template,

    /// Show config paths
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    Units,
    Departments,
    Employees,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Units => Scope::Units,
            ScopeArg::Departments => Scope::Departments,
            ScopeArg::Employees => Scope::Employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tree_without_scope_when_parsing_then_defaults_to_units() {
        let cli = Cli::try_parse_from(["orgtree", "tree"]).unwrap();
        match cli.command {
            Commands::Tree { scope } => assert_eq!(Scope::from(scope), Scope::Units),
            other => panic!("expected tree, got {other:?}"),
        }
    }

    #[test]
    fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
        let cli = Cli::try_parse_from(["orgtree", "report", "-dd", "--no-color", "--file", "org.toml"]).unwrap();
        assert_eq!(cli.debug, 2);
        assert!(cli.no_color);
        assert_eq!(cli.file, Some(PathBuf::from("org.toml")));
    }

    #[test]
    fn given_unknown_scope_when_parsing_then_fails() {
        assert!(Cli::try_parse_from(["orgtree", "tree", "--scope", "tasks"]).is_err());
    }
}
