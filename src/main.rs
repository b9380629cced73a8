use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use mmsi_decode::config::{Cli, Command, OutputFormat, Settings};
use mmsi_decode::{get_all_mids, lookup_mid, Mmsi, MmsiInfo, UNKNOWN_COUNTRY};

fn main() -> ExitCode {
    // Initialize logging - warnings only unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("mmsi_decode=warn"))
        .init();

    let settings = Settings::from(Cli::parse());
    log::debug!("Running with {:?}", settings);

    match run(&settings) {
        Ok(failures) if failures > 0 && settings.strict => {
            log::error!("{} input(s) could not be parsed", failures);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        // Reader went away (e.g. piped into head), nothing left to do
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of inputs that failed to parse
fn run(settings: &Settings) -> io::Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &settings.command {
        Command::ListMids => {
            for entry in get_all_mids() {
                match settings.format {
                    OutputFormat::Text => writeln!(out, "{}\t{}", entry.mid, entry.country)?,
                    OutputFormat::Json => writeln!(out, "{}", to_json(entry))?,
                }
            }
            Ok(0)
        }
        Command::LookupMid(mid) => {
            let country = lookup_mid(*mid).unwrap_or(UNKNOWN_COUNTRY);
            match settings.format {
                OutputFormat::Text => writeln!(out, "{}\t{}", mid, country)?,
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::json!({ "mid": mid, "country": country })
                )?,
            }
            Ok(0)
        }
        Command::Decode { inputs } if inputs.is_empty() => {
            let stdin = io::stdin();
            let mut failures = 0;
            for line in stdin.lock().lines() {
                let line = line?;
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                if !decode_one(&mut out, trimmed, settings)? {
                    failures += 1;
                }
            }
            Ok(failures)
        }
        Command::Decode { inputs } => {
            let mut failures = 0;
            for input in inputs {
                if !decode_one(&mut out, input, settings)? {
                    failures += 1;
                }
            }
            Ok(failures)
        }
    }
}

/// Decode and print a single MMSI; false if it did not parse
fn decode_one(out: &mut impl Write, input: &str, settings: &Settings) -> io::Result<bool> {
    let mmsi: Mmsi = match input.parse() {
        Ok(mmsi) => mmsi,
        Err(e) => {
            log::warn!("Skipping input: {}", e);
            return Ok(false);
        }
    };

    let info = mmsi.classify();
    match settings.format {
        OutputFormat::Text => write_text(out, &info, settings.long)?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&info))?,
    }
    Ok(true)
}

fn write_text(out: &mut impl Write, info: &MmsiInfo, long: bool) -> io::Result<()> {
    let owner = if long {
        info.owner.description()
    } else {
        info.owner_label()
    };
    writeln!(out, "{}\t{}\t{}", info.mmsi, owner, info.country_label())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Failed to serialize output: {}", e);
        String::from("{}")
    })
}
