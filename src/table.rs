use std::collections::BTreeSet;

use clap::ValueEnum;
use itertools::Itertools;
use tracing::warn;

use crate::error::{Error, Result};

/// What to do with a data row whose cell count differs from the header's.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Reject the sheet.
    #[default]
    Strict,
    /// Pad short rows with empty cells and drop cells past the last column.
    Pad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based row number in the sheet (the header is row 1).
    pub number: usize,
    pub cells: Vec<String>,
}

/// A header plus data rows that are all exactly as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn from_values(values: Vec<Vec<String>>, shape: Shape) -> Result<Self> {
        let mut values = values.into_iter();
        let header = values.next().ok_or_else(|| Error::Mapping {
            row: 1,
            reason: "sheet has no header row".into(),
        })?;

        let mut seen = BTreeSet::new();
        for label in &header {
            if !seen.insert(label) {
                warn!("duplicate column {label:?}, the last one wins");
            }
        }

        let width = header.len();
        let rows = values
            .enumerate()
            .map(|(i, cells)| {
                let number = i + 2;
                if cells.len() == width {
                    return Ok(Row { number, cells });
                }
                match shape {
                    Shape::Strict => Err(Error::Mapping {
                        row: number,
                        reason: format!("{} cells but the header has {width}", cells.len()),
                    }),
                    Shape::Pad => Ok(Row {
                        number,
                        cells: cells
                            .into_iter()
                            .pad_using(width, |_| String::new())
                            .take(width)
                            .collect(),
                    }),
                }
            })
            .collect::<Result<_>>()?;

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
