//! One-shot sample fetch: response decoding and load-state tracking.
//!
//! # Responsibility
//! - Decode the sample GET payload from raw status + body.
//! - Track exactly one of idle / loading / success / failure.
//!
//! # Invariants
//! - One `run` issues exactly one request. No retry, backoff or cancel.
//! - Completions are accepted only while `Loading`.
//! - Transport lives in the host; core only sees bytes.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Endpoint the host is expected to call.
pub const SAMPLE_GET_URL: &str = "https://httpbin.org/get";

/// Decoded sample GET response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleGetResponse {
    pub url: String,
    pub origin: String,
    pub headers: BTreeMap<String, String>,
}

/// Raw transport result handed back by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug)]
pub enum FetchError {
    /// Host transport failed before a response arrived.
    Transport(String),
    /// Server answered outside 2xx.
    BadStatus(u16),
    /// Body is not the expected JSON shape.
    Decode(serde_json::Error),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::BadStatus(status) => write!(f, "bad server response: HTTP {status}"),
            Self::Decode(err) => write!(f, "failed to decode response: {err}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Host-side transport for the sample request.
pub trait SampleFetcher {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

/// Validates status and decodes the JSON body.
pub fn decode_sample_response(raw: &RawResponse) -> Result<SampleGetResponse, FetchError> {
    if !(200..300).contains(&raw.status) {
        return Err(FetchError::BadStatus(raw.status));
    }
    Ok(serde_json::from_slice(&raw.body)?)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success(SampleGetResponse),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct FetchController {
    state: LoadState,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Enters `Loading`. Returns `false` if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.state == LoadState::Loading {
            debug!("event=fetch_begin module=fetch status=skipped reason=in_flight");
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    /// Applies a finished request. Ignored unless `Loading`.
    pub fn complete(&mut self, result: Result<SampleGetResponse, FetchError>) -> bool {
        if self.state != LoadState::Loading {
            debug!("event=fetch_complete module=fetch status=skipped reason=not_loading");
            return false;
        }
        self.state = match result {
            Ok(response) => {
                info!("event=fetch_complete module=fetch status=ok");
                LoadState::Success(response)
            }
            Err(err) => {
                warn!("event=fetch_complete module=fetch status=error error={err}");
                LoadState::Failure(err.to_string())
            }
        };
        true
    }

    /// Returns to `Idle` from any state.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }

    /// Issues one request through `fetcher` and records the outcome.
    pub fn run(&mut self, fetcher: &dyn SampleFetcher) -> &LoadState {
        if self.begin() {
            let result = fetcher
                .get(SAMPLE_GET_URL)
                .and_then(|raw| decode_sample_response(&raw));
            self.complete(result);
        }
        &self.state
    }
}
