use geo::Point;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::{
    error::{Error, Result},
    utils::{agent, fetch_text},
};

/// CSIS simple geocoding service (University of Tokyo).
pub const CSIS_URL: &str = "http://geocode.csis.u-tokyo.ac.jp/cgi-bin/simple_geocode.cgi";

const SERVICE: &str = "geocoder";

/// Resolves a free-text address to coordinate candidates, best guess first.
///
/// An empty result is not an error here: whether "no match" fails the row
/// is up to the caller.
pub trait Geocoder {
    fn candidates(&self, address: &str) -> Result<Vec<Point>>;
}

pub struct Csis {
    agent: Agent,
    url: Url,
}

impl Csis {
    pub fn new(url: Url) -> Self {
        Self { agent: agent(), url }
    }

    /// Adds the query to the configured url, keeping any query it already has.
    fn request_url(&self, address: &str) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("charset", "UTF8")
            .append_pair("addr", address);
        url
    }
}

impl Geocoder for Csis {
    fn candidates(&self, address: &str) -> Result<Vec<Point>> {
        let url = self.request_url(address);
        debug!("geocoding {address:?}");
        let body = fetch_text(self.agent.request_url("GET", &url), SERVICE)?;
        parse_candidates(&body)
    }
}

#[derive(Deserialize)]
struct Results {
    #[serde(rename = "candidate", default)]
    candidates: Vec<Candidate>,
}

#[serde_as]
#[derive(Deserialize)]
struct Candidate {
    #[serde_as(as = "DisplayFromStr")]
    longitude: f64,
    #[serde_as(as = "DisplayFromStr")]
    latitude: f64,
}

/// Parses a `<results>` document into points in document (rank) order.
pub fn parse_candidates(xml: &str) -> Result<Vec<Point>> {
    let results: Results = quick_xml::de::from_str(xml).map_err(|e| Error::parse(SERVICE, e))?;
    Ok(results
        .candidates
        .into_iter()
        .map(|x| Point::new(x.longitude, x.latitude))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CANDIDATES: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<results>
<query>東京都千代田区１−１</query>
<geodetic>wgs1984</geodetic>
<iConf>5</iConf>
<converted>東京都千代田区</converted>
<candidate>
<address>東京都/千代田区/千代田</address>
<longitude>139.753630</longitude>
<latitude>35.685175</latitude>
<iLvl>5</iLvl>
</candidate>
<candidate>
<address>東京都/千代田区</address>
<longitude>139.75</longitude>
<latitude>35.68</latitude>
<iLvl>3</iLvl>
</candidate>
</results>
"#;

    #[test]
    fn keeps_rank_order() {
        let points = parse_candidates(TWO_CANDIDATES).unwrap();
        assert_eq!(
            points,
            vec![Point::new(139.753630, 35.685175), Point::new(139.75, 35.68)]
        );
    }

    #[test]
    fn no_candidates() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" ?>
<results>
<query>どこでもない</query>
<geodetic>wgs1984</geodetic>
<iConf>0</iConf>
<converted></converted>
</results>
"#;
        assert!(parse_candidates(xml).unwrap().is_empty());
    }

    #[test]
    fn non_numeric_coordinate() {
        let xml = "<results><candidate><longitude>east</longitude><latitude>35.68</latitude></candidate></results>";
        assert!(matches!(
            parse_candidates(xml),
            Err(Error::Parse { service: SERVICE, .. })
        ));
    }

    #[test]
    fn missing_coordinate() {
        let xml = "<results><candidate><longitude>139.75</longitude></candidate></results>";
        assert!(matches!(parse_candidates(xml), Err(Error::Parse { .. })));
    }

    #[test]
    fn malformed_xml() {
        let xml = "<results><candidate><longitude>139.75</latitude></candidate></results>";
        assert!(matches!(parse_candidates(xml), Err(Error::Parse { .. })));
    }

    #[test]
    fn encodes_address() {
        let csis = Csis::new(Url::parse("http://localhost/geocode.cgi").unwrap());
        assert_eq!(
            csis.request_url("東京都 1-1").as_str(),
            "http://localhost/geocode.cgi?charset=UTF8&addr=%E6%9D%B1%E4%BA%AC%E9%83%BD+1-1"
        );
    }

    #[test]
    fn keeps_existing_query() {
        let csis = Csis::new(Url::parse("http://localhost/geocode.cgi?x=1").unwrap());
        assert_eq!(
            csis.request_url("大阪府").as_str(),
            "http://localhost/geocode.cgi?x=1&charset=UTF8&addr=%E5%A4%A7%E9%98%AA%E5%BA%9C"
        );
    }

    #[test]
    fn candidates_split_by_other_elements() {
        let xml = r#"<results>
<candidate><longitude>139.75</longitude><latitude>35.68</latitude></candidate>
<iConf>5</iConf>
<candidate><longitude>135.5</longitude><latitude>34.7</latitude></candidate>
</results>"#;
        assert_eq!(
            parse_candidates(xml).unwrap(),
            vec![Point::new(139.75, 35.68), Point::new(135.5, 34.7)]
        );
    }
}
