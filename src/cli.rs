use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::classify::{MatchMode, Precedence};
use crate::pipeline::Settings;

#[derive(Parser, Debug)]
#[command(name = "visa-map")]
#[command(version, about = "World map of visa requirements for Sri Lankan passport holders")]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// Directory holding the visa list cache [default: platform cache
    /// directory, e.g. ~/.cache/visa-map on Linux]
    #[arg(short, long, global = true, env = "VISA_MAP_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Rebuild the cache from the embedded lists
    #[arg(short, long, global = true)]
    pub force: bool,

    /// How list entries are compared with country names
    #[arg(long = "match", value_enum, global = true, default_value_t = MatchMode::Substring, env = "VISA_MAP_MATCH")]
    pub match_mode: MatchMode,

    /// Category ranking for names matching several lists (comma-separated)
    #[arg(long, global = true, default_value = "e-visa,visa-on-arrival,visa-free", env = "VISA_MAP_PRECEDENCE")]
    pub precedence: Precedence,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOptions {
    pub fn settings(&self) -> Settings {
        Settings {
            cache_dir: self.cache_dir.clone(),
            force: self.force,
            precedence: self.precedence.clone(),
            match_mode: self.match_mode,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the map as a standalone HTML page
    Render {
        /// Output HTML path
        #[arg(short, long, default_value = "visa_map.html")]
        output: PathBuf,
    },

    /// Browse the legend and country lists in the terminal
    Show,

    /// Print every country name with its ISO code and category
    Classify {
        /// Print JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Write the classified table to a SQLite database
    Export {
        /// Output SQLite database path
        output_db: PathBuf,
    },

    /// Resolve country names to ISO codes and categories
    Lookup {
        /// Country names or aliases
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the legend counts and sorted category lists
    Lists,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::VisaCategory;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["visa-map", "render"]).unwrap();
        assert_eq!(cli.options.precedence, Precedence::default());
        assert_eq!(cli.options.match_mode, MatchMode::Substring);
        assert!(matches!(cli.command, Commands::Render { ref output } if output == &PathBuf::from("visa_map.html")));
    }

    #[test]
    fn test_policy_flags() {
        let cli = Cli::try_parse_from([
            "visa-map",
            "classify",
            "--json",
            "--match",
            "exact-then-substring",
            "--precedence",
            "visa-free,visa-on-arrival,e-visa",
        ])
        .unwrap();
        assert_eq!(cli.options.match_mode, MatchMode::ExactThenSubstring);
        assert_eq!(cli.options.precedence.order()[0], VisaCategory::VisaFree);
    }

    #[test]
    fn test_rejects_bad_precedence() {
        assert!(Cli::try_parse_from(["visa-map", "lists", "--precedence", "visa-free"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
