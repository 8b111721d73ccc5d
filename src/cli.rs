//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for papershelf using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive paper listing (default)
//! - **filter**: Print the listing for a set of filters or a query string
//! - **share**: Build a share link for a set of papers
//! - **normalize**: Canonicalize a query string
//! - **list**: Show the tag bar vocabulary or the year options
//! - **config**: Read or change configuration values
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use papershelf::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["papershelf", "filter", "papers.json", "-s", "deep"]);
//! assert!(matches!(cli.get_command(), Commands::Filter { .. }));
//! ```

use crate::filter::{TagState, YearFilter};
use crate::query::{self, UrlState};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// List variant for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    /// Tags shown in the tag bar
    Tags,
    /// Years offered by the year selector
    Years,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., `chip_removal=cycle`)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `exit_selection`)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Filter options shared by commands that evaluate page state
///
/// `--url` is applied first; the individual flags then override it.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Start from a query string or page URL (e.g. `?search=deep&year=2020`)
    #[arg(short = 'u', long = "url", value_name = "QUERY")]
    pub url: Option<String>,

    /// Search title and authors
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Only papers from this year (`all` for every year)
    #[arg(short = 'y', long = "year", value_name = "YEAR")]
    pub year: Option<String>,

    /// Require a tag (repeatable)
    #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 1..)]
    pub include: Vec<String>,

    /// Reject a tag (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "TAG", num_args = 1..)]
    pub exclude: Vec<String>,
}

impl FilterArgs {
    /// Page state described by these options
    #[must_use]
    pub fn to_url_state(&self) -> UrlState {
        let mut state = self.url.as_deref().map(query::decode).unwrap_or_default();

        if let Some(search) = &self.search {
            state.filter.search.clone_from(search);
        }
        if let Some(year) = &self.year {
            state.filter.year = YearFilter::parse(year);
        }
        for tag in &self.include {
            state.filter.set_tag_state(tag, TagState::Include);
        }
        for tag in &self.exclude {
            state.filter.set_tag_state(tag, TagState::Exclude);
        }
        state
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "papershelf")]
#[command(about = "Filter, select, and share papers from a paper listing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive listing (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Catalog file (JSON, TOML, or the generated HTML page)
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Initial query string or page URL
        #[arg(short = 'u', long = "url", value_name = "QUERY")]
        url: Option<String>,
    },

    /// Print the listing for the given filters
    #[command(visible_alias = "f")]
    Filter {
        /// Catalog file (JSON, TOML, or the generated HTML page)
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Select a paper (repeatable)
        #[arg(long = "select", value_name = "ID", num_args = 1..)]
        select: Vec<String>,

        /// Show only the selected papers
        #[arg(long = "show-selected")]
        show_selected: bool,

        /// Print the view as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print a link that opens the listing showing exactly these papers
    #[command(visible_alias = "sh")]
    Share {
        /// Paper identifiers, in selection order
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,

        /// Catalog file used to check the identifiers
        #[arg(short = 'c', long = "catalog", value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Page URL the link points at (overrides config)
        #[arg(long = "base-url", value_name = "URL")]
        base_url: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Copy the link to the clipboard
        #[arg(long = "copy")]
        copy: bool,
    },

    /// Decode and re-encode a query string
    #[command(visible_alias = "n")]
    Normalize {
        /// Query string or page URL
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// List tags or years of a catalog
    #[command(visible_alias = "ls")]
    List {
        /// What to list
        #[arg(value_enum)]
        variant: ListVariant,

        /// Catalog file
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            catalog: None,
            url: None,
        })
    }
}
