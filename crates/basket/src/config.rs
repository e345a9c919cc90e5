//! Command-line configuration.
//!
//! [`Cli`] is parsed by clap and split into the two halves the program needs:
//! [`AppConfig`], the flags [`ShoppingApp`](crate::app::ShoppingApp) starts
//! from, and [`ProgramOptions`], which drive the terminal runtime.

use std::io::IsTerminal;
use std::path::PathBuf;

use basket_core::{OutputTarget, ProgramOptions};
use basket_list::{ListModel, NamePolicy};
use clap::Parser;

/// A terminal shopping list.
#[derive(Debug, Parser)]
#[command(name = "basket", version, about, long_about = None)]
pub struct Cli {
    /// Start with checked items hidden
    #[arg(long)]
    pub hide_checked: bool,

    /// Accept empty and whitespace-only item names
    #[arg(long)]
    pub allow_blank_names: bool,

    /// Start with a search filter applied
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Write logs to this file (filter with BASKET_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Draw in the normal screen instead of the alternate screen
    #[arg(long)]
    pub inline: bool,

    /// Print the initial view as an HTML fragment and exit
    #[arg(long)]
    pub print_html: bool,
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            hide_checked: self.hide_checked,
            name_policy: if self.allow_blank_names {
                NamePolicy::AllowBlank
            } else {
                NamePolicy::RejectBlank
            },
            search: self.search.clone().unwrap_or_default(),
        }
    }

    /// Runtime options. The UI moves to stderr when stdout is not a terminal.
    pub fn program_options(&self) -> ProgramOptions {
        let output = if std::io::stdout().is_terminal() {
            OutputTarget::Stdout
        } else {
            OutputTarget::Stderr
        };
        ProgramOptions {
            alt_screen: !self.inline,
            title: Some("basket".to_owned()),
            output,
            ..ProgramOptions::default()
        }
    }
}

/// Startup state for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub hide_checked: bool,
    pub name_policy: NamePolicy,
    /// Initial search text; empty means no search.
    pub search: String,
}

impl AppConfig {
    /// The seeded list with this configuration's flag and policy applied.
    pub fn initial_list(&self) -> ListModel {
        ListModel::seeded()
            .with_hide_checked(self.hide_checked)
            .with_name_policy(self.name_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("basket").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        let config = cli.app_config();
        assert_eq!(config, AppConfig::default());
        assert!(cli.program_options().alt_screen);
        assert!(cli.log_file.is_none());
        assert!(!cli.print_html);
    }

    #[test]
    fn flags_map_to_config() {
        let cli = parse(&["--hide-checked", "--allow-blank-names", "--search", "mi"]);
        let config = cli.app_config();
        assert!(config.hide_checked);
        assert_eq!(config.name_policy, NamePolicy::AllowBlank);
        assert_eq!(config.search, "mi");
    }

    #[test]
    fn inline_disables_alt_screen() {
        let cli = parse(&["--inline"]);
        let options = cli.program_options();
        assert!(!options.alt_screen);
        assert_eq!(options.title.as_deref(), Some("basket"));
    }

    #[test]
    fn initial_list_applies_flag_and_policy() {
        let config = AppConfig {
            hide_checked: true,
            name_policy: NamePolicy::AllowBlank,
            search: String::new(),
        };
        let list = config.initial_list();
        assert_eq!(list.len(), 4);
        assert!(list.hide_checked());
        assert_eq!(list.name_policy(), NamePolicy::AllowBlank);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["basket", "--persist"]).is_err());
    }
}
