//! Blocking client for the simulator's two endpoints.

use qd_wire::{AnalysisResult, AnalyzeParams, RemoteFault, SimulateParams, SimulationResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

/// Default bind address of the simulator service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the service base URL.
const BASE_URL_ENV: &str = "QKD_DASH_URL";

/// Blocking HTTP client bound to one simulator base URL. Cheap to clone;
/// clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SimulatorClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SimulatorClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Client for the URL in `QKD_DASH_URL`, falling back to the service's
    /// default bind address.
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one protocol simulation.
    pub fn simulate(&self, params: &SimulateParams) -> ClientResult<SimulationResult> {
        self.post("/simulate", params)
    }

    /// Run the parameter-sweep batch analysis.
    pub fn analyze(&self, params: &AnalyzeParams) -> ClientResult<AnalysisResult> {
        self.post("/analyze", params)
    }

    fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "posting to simulator");

        let response = self.http.post(&url).json(body).send()?;
        let status = response.status();
        let text = response.text()?;

        let decoded = decode_response(status.as_u16(), status.is_success(), &text);
        if let Err(err) = &decoded {
            warn!(%url, error = %err, "simulator request failed");
        }
        decoded
    }
}

/// Map a status/body pair onto a decoded payload or a [`ClientError`].
///
/// Non-success bodies usually carry the service's `{"error": ...}` shape;
/// when they do, that message is surfaced, otherwise the raw body (or the
/// bare status) stands in.
fn decode_response<T: DeserializeOwned>(
    status: u16,
    success: bool,
    body: &str,
) -> ClientResult<T> {
    if !success {
        let message = match serde_json::from_str::<RemoteFault>(body) {
            Ok(fault) => fault.error,
            Err(_) => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {status}")
                } else {
                    trimmed.chars().take(200).collect()
                }
            }
        };
        return Err(ClientError::Remote { status, message });
    }

    serde_json::from_str(body).map_err(|err| ClientError::Decode {
        detail: err.to_string(),
    })
}
