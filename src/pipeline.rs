use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use url::Url;

use crate::{
    config::Config,
    geocode::{Csis, Geocoder, CSIS_URL},
    mapper, output,
    sheets::{Sheets, SHEETS_URL},
    table::{Shape, Table},
    utils::progress_bar,
};

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Where to write the venue list
    #[arg(long, default_value = "data.json")]
    pub output: PathBuf,
    /// Indent the output and sort keys
    #[arg(long)]
    pub pretty: bool,
    /// How to treat rows whose width differs from the header
    #[arg(long, value_enum, default_value_t)]
    pub shape: Shape,
    /// Number of addresses geocoded at once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,
    /// dotenv file read before the environment
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,
    #[arg(long, default_value = CSIS_URL)]
    pub geocoder_url: Url,
    #[arg(long, default_value = SHEETS_URL)]
    pub sheets_url: Url,
}

pub fn main(args: &BuildArgs) -> Result<()> {
    let config = Config::load(&args.env_file).context("failed to load configuration")?;
    let sheets = Sheets::new(args.sheets_url.clone());
    let geocoder = Csis::new(args.geocoder_url.clone());

    let values = sheets.values(&config).context("failed to fetch the sheet")?;
    convert(values, &geocoder, args)?;
    Ok(())
}

/// Maps and enriches a fetched sheet and writes the result. Nothing is
/// written unless every row succeeds. Returns the number of venues written.
pub fn convert<G: Geocoder + Sync>(values: Vec<Vec<String>>, geocoder: &G, args: &BuildArgs) -> Result<usize> {
    let table = Table::from_values(values, args.shape).context("failed to load the sheet")?;
    info!(
        "mapping {} rows, {} columns",
        table.rows().len(),
        table.header().len()
    );

    let pb = progress_bar(table.rows().len() as u64);
    let venues = if args.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs.into())
            .build()
            .context("failed to start geocoding workers")?;
        mapper::map_table_parallel(&table, geocoder, &pool, &pb)
    } else {
        mapper::map_table(&table, geocoder, &pb)
    };
    pb.finish_and_clear();
    let venues = venues.context("failed to map rows")?;

    output::write(&args.output, &venues, args.pretty).context("failed to write output")?;
    info!("wrote {} venues to {}", venues.len(), args.output.display());
    Ok(venues.len())
}
