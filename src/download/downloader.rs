use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT_LANGUAGE;
use slog::{Logger, debug, info};
use url::Url;

use crate::utils::{self, Error, Result};

pub const DELAY_ENV: &str = "TRACKLIST_REQUEST_DELAY_MS";
pub const TIMEOUT_ENV: &str = "TRACKLIST_REQUEST_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "TRACKLIST_USER_AGENT";

const DEFAULT_DELAY_MS: u64 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Request settings for [`HttpFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Fixed pause before each request. Not a backoff; failed requests are not retried.
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Reads overrides from the environment, keeping defaults for unset or bad values.
    pub fn from_env() -> Self {
        Self::from_values(
            &utils::get_env(DELAY_ENV, None),
            &utils::get_env(TIMEOUT_ENV, None),
            &utils::get_env(USER_AGENT_ENV, None),
        )
    }

    pub fn from_values(delay_ms: &str, timeout_secs: &str, user_agent: &str) -> Self {
        let defaults = FetchConfig::default();
        FetchConfig {
            delay: delay_ms
                .trim()
                .parse()
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
            timeout: timeout_secs
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: match user_agent.trim() {
                "" => defaults.user_agent,
                ua => ua.to_string(),
            },
        }
    }
}

/// Source of raw page HTML.
pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    client: Client,
    delay: Duration,
    logger: Logger,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig, logger: &Logger) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(HttpFetcher {
            client,
            delay: config.delay,
            logger: logger.new(slog::o!("component" => "fetcher")),
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        debug!(self.logger, "waiting before request"; "delay_ms" => self.delay.as_millis() as u64);
        thread::sleep(self.delay);

        info!(self.logger, "fetching tracklist page"; "url" => url.as_str());
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT_LANGUAGE, "en")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text()?;
        debug!(self.logger, "received page"; "bytes" => body.len());
        Ok(body)
    }
}
