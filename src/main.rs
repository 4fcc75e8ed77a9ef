use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::{
    error::Error,
    fields::Field,
    geocode::{Csis, Geocoder, CSIS_URL},
    pipeline::BuildArgs,
};

mod config;
mod error;
mod fields;
mod geocode;
mod mapper;
mod output;
mod pipeline;
mod sheets;
mod table;
mod utils;
mod venue;

/// Turns the venue sheet into a geocoded JSON list.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Fetch the sheet, geocode every address and write the venue list
    Build(BuildArgs),
    /// Show every candidate the geocoder returns for an address
    Geocode {
        address: String,
        #[arg(long, default_value = CSIS_URL)]
        geocoder_url: Url,
    },
    /// List the sheet columns that are read and the keys they become
    Fields,
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            let code = err
                .chain()
                .find_map(|x| x.downcast_ref::<Error>())
                .map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => pipeline::main(&args),
        Command::Geocode {
            address,
            geocoder_url,
        } => {
            let candidates = Csis::new(geocoder_url)
                .candidates(&address)
                .with_context(|| format!("failed to geocode {address:?}"))?;
            if candidates.is_empty() {
                println!("no candidates");
            }
            for (i, x) in candidates.iter().enumerate() {
                let pick = if i == 0 { "*" } else { " " };
                println!("{pick} {} {}", x.x(), x.y());
            }
            Ok(())
        }
        Command::Fields => {
            for field in Field::ALL {
                let mark = if field.is_address() { " (geocoded)" } else { "" };
                println!("{} -> {}{mark}", field.label(), field.key());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::table::Shape;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_defaults() {
        let cli = Cli::try_parse_from(["venues", "build"]).unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.output.to_str(), Some("data.json"));
        assert!(!args.pretty);
        assert_eq!(args.shape, Shape::Strict);
        assert_eq!(args.jobs, 1);
        assert_eq!(args.geocoder_url.as_str(), CSIS_URL);
    }

    #[test]
    fn build_options() {
        let cli = Cli::try_parse_from([
            "venues", "build", "--output", "out.json", "--pretty", "--shape", "pad", "--jobs", "8",
        ])
        .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.output.to_str(), Some("out.json"));
        assert!(args.pretty);
        assert_eq!(args.shape, Shape::Pad);
        assert_eq!(args.jobs, 8);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        assert!(Cli::try_parse_from(["venues", "build", "--jobs", "0"]).is_err());
    }
}
