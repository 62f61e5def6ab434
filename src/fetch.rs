use log::{info, warn};
use std::thread::sleep;
use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("askcalc/", env!("CARGO_PKG_VERSION"));
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

pub struct Fetcher {
    timeout: Duration,
    attempts: u32,
    backoff: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration, attempts: u32) -> Self {
        Self {
            timeout,
            attempts: attempts.max(1),
            backoff: INITIAL_BACKOFF,
        }
    }

    #[cfg(test)]
    fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn get_text(&self, url: &str) -> Result<String, Error> {
        Ok(attohttpc::get(url)
            .header("User-Agent", USER_AGENT)
            .timeout(self.timeout)
            .send()?
            .error_for_status()?
            .text()?)
    }

    /// Downloads the body at `url`, retrying with a doubling delay between attempts.
    /// The error of the last attempt is returned if none succeed.
    pub fn download(&self, url: &str) -> Result<String, Error> {
        let mut backoff = self.backoff;
        let mut attempt = 1;

        loop {
            info!("Downloading {} (attempt {}/{})", url, attempt, self.attempts);

            match self.get_text(url) {
                Ok(text) => return Ok(text),
                Err(e) if attempt < self.attempts => {
                    warn!("Download failed: {}. Retrying in {:?}...", e, backoff);
                    sleep(backoff);
                    backoff *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
