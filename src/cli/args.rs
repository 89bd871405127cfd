use clap::{Parser, Subcommand};

use crate::config::ProviderConfig;

#[derive(Parser, Debug)]
#[command(name = "pray", version, about = "Islamic prayer times in your terminal")]
pub struct Cli {
    /// City to look up prayer times for
    #[arg(long, global = true, env = "PRAY_CITY")]
    pub city: Option<String>,
    /// ISO country code sent to the calculation service
    #[arg(long, global = true, env = "PRAY_COUNTRY")]
    pub country: Option<String>,
    /// Calculation method id (4 = Umm Al-Qura)
    #[arg(long, global = true, env = "PRAY_METHOD")]
    pub method: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the next prayer time with countdown
    Next,
}

/// Effective request parameters: flag, then environment (via clap),
/// then config file, then built-in default.
#[derive(Debug, Clone)]
pub struct Query {
    pub city: String,
    pub country: String,
    pub method: u32,
}

impl Cli {
    pub fn query(&self, defaults: &ProviderConfig) -> Query {
        Query {
            city: self.city.clone().unwrap_or_else(|| defaults.city.clone()),
            country: self
                .country
                .clone()
                .unwrap_or_else(|| defaults.country.clone()),
            method: self.method.unwrap_or(defaults.method),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_full_schedule() {
        let cli = Cli::try_parse_from(["pray"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn next_subcommand_parses_with_global_flags() {
        let cli = Cli::try_parse_from(["pray", "next", "--city", "Istanbul"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Next)));
        assert_eq!(cli.city.as_deref(), Some("Istanbul"));
    }

    #[test]
    fn flags_override_config_defaults() {
        let cli = Cli::try_parse_from(["pray", "--city", "Cairo", "--method", "5"]).unwrap();
        let query = cli.query(&ProviderConfig::default());
        assert_eq!(query.city, "Cairo");
        assert_eq!(query.country, "SA");
        assert_eq!(query.method, 5);
    }
}
