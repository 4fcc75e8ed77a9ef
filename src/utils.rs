use indicatif::{ProgressBar, ProgressStyle};
use ureq::{Agent, AgentBuilder};

use crate::error::{Error, Result};

pub fn agent() -> Agent {
    AgentBuilder::new()
        .user_agent(concat!("venues/", env!("CARGO_PKG_VERSION")))
        .build()
}

pub fn progress_bar(len: u64) -> ProgressBar {
    ProgressBar::new(len).with_style(
        ProgressStyle::with_template("[{elapsed_precise}] {human_pos}/{human_len} rows {percent}% ({per_sec})")
            .expect("hardcoded"),
    )
}

/// Sends a prepared GET and returns the body. Error statuses become
/// transport errors carrying the response body.
pub fn fetch_text(request: ureq::Request, service: &'static str) -> Result<String> {
    let response = match request.call() {
        Ok(x) => x,
        Err(ureq::Error::Status(code, response)) => {
            let body = response.into_string().unwrap_or_default();
            return Err(Error::transport(
                service,
                format!("HTTP {code}: {}", body.trim()),
            ));
        }
        Err(ureq::Error::Transport(e)) => {
            // the url is left out, it can carry the api key
            let mut message = e.kind().to_string();
            if let Some(x) = e.message() {
                message.push_str(": ");
                message.push_str(x);
            }
            return Err(Error::transport(service, message));
        }
    };

    response
        .into_string()
        .map_err(|e| Error::transport(service, e))
}
