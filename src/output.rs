use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    error::{Error, Result},
    venue::Venue,
};

/// Renders the document. Compact output keeps the record field order;
/// pretty output sorts keys and indents by four spaces.
pub fn render(venues: &[Venue], pretty: bool) -> serde_json::Result<Vec<u8>> {
    if !pretty {
        return serde_json::to_vec(venues);
    }

    // without `preserve_order`, a Value's maps are sorted by key
    let value = serde_json::to_value(venues)?;
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn write(path: &Path, venues: &[Venue], pretty: bool) -> Result<()> {
    let persistence = |source| Error::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let contents = render(venues, pretty).map_err(|e| persistence(io::Error::from(e)))?;
    fs::write(path, contents).map_err(persistence)
}
