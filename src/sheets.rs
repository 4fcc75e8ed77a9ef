use serde::Deserialize;
use tracing::info;
use ureq::Agent;
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    utils::{agent, fetch_text},
};

pub const SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const SERVICE: &str = "sheets";

/// Read-only client for the Google Sheets values endpoint.
pub struct Sheets {
    agent: Agent,
    base: Url,
}

impl Sheets {
    pub fn new(base: Url) -> Self {
        Self {
            agent: agent(),
            base,
        }
    }

    fn values_url(&self, config: &Config) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::parse(SERVICE, "base url cannot take a path"))?
            .pop_if_empty()
            .extend([config.sheet_id.as_str(), "values", config.sheet_name.as_str()]);
        url.query_pairs_mut().append_pair("key", &config.api_key);
        Ok(url)
    }

    /// Fetches every row of the configured sheet, header included.
    pub fn values(&self, config: &Config) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(config)?;
        info!("fetching sheet {:?}", config.sheet_name);
        let body = fetch_text(self.agent.request_url("GET", &url), SERVICE)?;
        parse_values(&body)
    }
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

pub fn parse_values(json: &str) -> Result<Vec<Vec<String>>> {
    let range: ValueRange = serde_json::from_str(json).map_err(|e| Error::parse(SERVICE, e))?;
    Ok(range.values)
}
