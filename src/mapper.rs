use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    fields::Field,
    geocode::Geocoder,
    table::{Row, Table},
    venue::Venue,
};

/// Maps one row, cell by cell in column order. The address is geocoded as
/// soon as its cell is reached, before the remaining cells are read.
pub fn map_row<G: Geocoder + ?Sized>(header: &[String], row: &Row, geocoder: &G) -> Result<Venue> {
    if row.cells.len() != header.len() {
        return Err(Error::Mapping {
            row: row.number,
            reason: format!("{} cells but the header has {}", row.cells.len(), header.len()),
        });
    }

    let mut venue = Venue::default();
    for (label, cell) in header.iter().zip(&row.cells) {
        let Some(field) = Field::from_label(label) else {
            continue;
        };
        venue.set(field, cell.clone());
        if field.is_address() {
            venue.locate(locate(row.number, cell, geocoder)?);
        }
    }
    Ok(venue)
}

/// Geocodes `address` and takes the provider's first candidate. No match is
/// a failure, there is no fallback position.
fn locate<G: Geocoder + ?Sized>(row: usize, address: &str, geocoder: &G) -> Result<geo::Point> {
    let failed = |source| Error::Enrichment {
        row,
        address: address.to_string(),
        source,
    };

    if address.trim().is_empty() {
        return Err(failed(None));
    }

    match geocoder.candidates(address) {
        Ok(candidates) => candidates.into_iter().next().ok_or_else(|| failed(None)),
        Err(e) => Err(failed(Some(Box::new(e)))),
    }
}

/// Maps every row in order, one at a time.
pub fn map_table<G: Geocoder + ?Sized>(table: &Table, geocoder: &G, pb: &ProgressBar) -> Result<Vec<Venue>> {
    let mut output = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        output.push(map_row(table.header(), row, geocoder)?);
        pb.inc(1);
    }
    Ok(output)
}

/// Like [`map_table`] but spreads rows over `pool`. The output keeps row
/// order, and when several rows fail the earliest one is reported.
pub fn map_table_parallel<G: Geocoder + Sync + ?Sized>(
    table: &Table,
    geocoder: &G,
    pool: &rayon::ThreadPool,
    pb: &ProgressBar,
) -> Result<Vec<Venue>> {
    // every row runs to completion so the join below sees them in sheet order
    let results: Vec<Result<Venue>> = pool.install(|| {
        table
            .rows()
            .par_iter()
            .map(|row| {
                let venue = map_row(table.header(), row, geocoder);
                pb.inc(1);
                venue
            })
            .collect()
    });
    results.into_iter().collect()
}
