//! Command line and environment configuration for the `mmsi-decode` binary
//!
//! Every option can also be set through an environment variable so the tool
//! can be dropped into AIS ingestion scripts without extra flags.

use clap::{Parser, ValueEnum};

/// Output format for decoded MMSIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab separated: mmsi, owner, country
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mmsi-decode")]
#[command(
    about = "Decode MMSIs into owner category and flag state",
    long_about = "mmsi-decode - classify Maritime Mobile Service Identities\n\n\
    Each MMSI is classified by numeric range (ship, coastal station, SAR aircraft, \n\
    AIS SART, ...) and its Maritime Identification Digits are resolved to a country.\n\n\
    Examples:\n\
      mmsi-decode 211000000 257123456\n\
      cat mmsis.txt | mmsi-decode --format json\n\
      mmsi-decode --mid 351\n\
      mmsi-decode --list-mids"
)]
#[command(version)]
pub struct Cli {
    /// MMSIs to decode; read one per line from stdin when omitted
    #[arg(value_name = "MMSI", conflicts_with_all = ["mid", "list_mids"])]
    pub mmsis: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "MMSI_DECODE_FORMAT")]
    pub format: OutputFormat,

    /// Print the long owner description in text output
    #[arg(long)]
    pub long: bool,

    /// Exit with status 1 if any input could not be parsed
    #[arg(long, env = "MMSI_DECODE_STRICT")]
    pub strict: bool,

    /// Look up a bare MID instead of decoding MMSIs
    #[arg(long, value_name = "MID", conflicts_with = "list_mids")]
    pub mid: Option<u32>,

    /// Print the whole MID table
    #[arg(long)]
    pub list_mids: bool,
}

/// What the binary has been asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decode the given MMSIs, or stdin when empty
    Decode { inputs: Vec<String> },
    LookupMid(u32),
    ListMids,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub command: Command,
    pub format: OutputFormat,
    pub long: bool,
    pub strict: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let command = if cli.list_mids {
            Command::ListMids
        } else if let Some(mid) = cli.mid {
            Command::LookupMid(mid)
        } else {
            Command::Decode { inputs: cli.mmsis }
        };

        Settings {
            command,
            format: cli.format,
            long: cli.long,
            strict: cli.strict,
        }
    }
}

impl Settings {
    /// Whether MMSIs should be read from stdin
    pub fn reads_stdin(&self) -> bool {
        matches!(&self.command, Command::Decode { inputs } if inputs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> Settings {
        let mut argv = vec!["mmsi-decode"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into()
    }

    #[test]
    fn test_positional_mmsis() {
        let s = settings(&["211000000", "257123456"]);
        assert_eq!(
            s.command,
            Command::Decode { inputs: vec!["211000000".into(), "257123456".into()] }
        );
        assert_eq!(s.format, OutputFormat::Text);
        assert!(!s.reads_stdin());
    }

    #[test]
    fn test_stdin_when_no_mmsis() {
        let s = settings(&["--format", "json"]);
        assert!(s.reads_stdin());
        assert_eq!(s.format, OutputFormat::Json);
    }

    #[test]
    fn test_mid_lookup() {
        assert_eq!(settings(&["--mid", "351"]).command, Command::LookupMid(351));
        assert_eq!(settings(&["--list-mids"]).command, Command::ListMids);
    }

    #[test]
    fn test_conflicting_modes() {
        assert!(Cli::try_parse_from(["mmsi-decode", "--mid", "351", "211000000"]).is_err());
        assert!(Cli::try_parse_from(["mmsi-decode", "--mid", "351", "--list-mids"]).is_err());
        assert!(Cli::try_parse_from(["mmsi-decode", "--format", "xml"]).is_err());
    }
}
