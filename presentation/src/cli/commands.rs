//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for sanctuary
#[derive(Parser, Debug)]
#[command(name = "sanctuary")]
#[command(author, version, about = "Church ministry hub - records API and apologetics answers")]
#[command(long_about = r#"
Sanctuary serves a JSON API for events, prayer requests, tasks, sermons,
team members and resources, plus an apologetics endpoint that combines a
generated answer, verse text and study links into one reply.

Configuration files are loaded from (in priority order):
1. SANCTUARY_* environment variables (e.g. SANCTUARY_SERVER__BIND)
2. --config <path>       Explicit config file
3. ./sanctuary.toml      Project-level config
4. ~/.config/sanctuary/config.toml   Global config

Example:
  sanctuary serve --bind 0.0.0.0:5000
  sanctuary ask "John 3:16"
  sanctuary ask --fragments "Did Jesus rise from the dead?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Address to bind, overriding `[server] bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Start with an empty store instead of the demo data
        #[arg(long)]
        no_seed: bool,
    },

    /// Answer one apologetics question and print the result
    Ask {
        /// The question or scripture reference
        question: String,

        /// Print each fragment separately instead of the joined answer
        #[arg(long)]
        fragments: bool,

        /// Print the fragments as JSON
        #[arg(long, conflicts_with = "fragments")]
        json: bool,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show configuration sources and the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["sanctuary", "-vv", "serve", "--bind", "0.0.0.0:8080"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Serve { bind, no_seed } => {
                assert_eq!(bind.as_deref(), Some("0.0.0.0:8080"));
                assert!(!no_seed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_ask_with_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["sanctuary", "ask", "John 3:16", "--fragments", "--no-config"])
                .unwrap();
        assert!(cli.no_config);
        match cli.command {
            Command::Ask {
                question,
                fragments,
                json,
                quiet,
            } => {
                assert_eq!(question, "John 3:16");
                assert!(fragments);
                assert!(!json);
                assert!(!quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["sanctuary", "ask"]).is_err());
    }
}
