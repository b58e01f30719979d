//! Remote task API client and background deletion tracking.
//!
//! The delete command is the one remote interaction in the console: a single
//! `DELETE {base_url}/api/tasks/{id}` round-trip. Requests run on background
//! threads and report back over an mpsc channel polled by the UI loop, so the
//! confirmation modal closes immediately while the request is in flight.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config;

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors produced by the remote task API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Deletion requested with an empty/blank identifier; no request issued.
    #[error("deletion requested with an empty identifier")]
    InvalidId,

    /// The remote answered 404: the id does not exist (or was already deleted).
    #[error("task {id} not found on the server")]
    NotFound {
        /// The identifier that was not found
        id: String,
    },

    /// The remote answered with a non-success status other than 404.
    #[error("server rejected the request with status {status}")]
    Remote {
        /// HTTP status code returned by the server
        status: u16,
    },

    /// Network-level failure: unreachable host, timeout, malformed response.
    #[error("network failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Short notification text shown in the status bar.
    #[must_use]
    pub fn notification(&self) -> String {
        match self {
            Self::InvalidId => "Cannot delete: no record selected".to_string(),
            Self::NotFound { id } => format!("{id} was already deleted on the server"),
            Self::Remote { status } => format!("Delete failed: server returned {status}"),
            Self::Transport(_) => "Delete failed: could not reach the server".to_string(),
        }
    }
}

/// Transport seam for the delete command.
///
/// The production implementation is [`HttpTaskClient`]; tests substitute a
/// fake to exercise the workflow without a network.
pub trait TaskGateway {
    /// Deletes the task with the given id on the remote API.
    fn delete_task(&self, id: &str) -> Result<(), ApiError>;
}

/// HTTP client for the HRISELINK task API.
pub struct HttpTaskClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTaskClient {
    /// Creates a client against the given base address.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout (short timeouts are
    /// used for the startup health probe).
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to construct HTTP client")?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Creates a client with the base address resolved fresh from the config
    /// file, so an edited override applies to the next command invocation.
    pub fn from_disk_config() -> Result<Self> {
        Self::new(config::resolve_base_url_fresh()?)
    }

    /// The base address this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes `GET {base_url}/api/health`. Purely informational.
    pub fn health_check(&self) -> Result<(), ApiError> {
        let url = format!("{}/api/health", self.base_url);
        debug!(url = %url, "health probe");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Remote {
                status: status.as_u16(),
            })
        }
    }
}

impl TaskGateway for HttpTaskClient {
    /// Issues `DELETE {base_url}/api/tasks/{id}`, no body.
    ///
    /// Any 2xx status is success; 404 maps to [`ApiError::NotFound`]; other
    /// statuses map to [`ApiError::Remote`]. The caller mutates the display
    /// set only on `Ok`.
    fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::InvalidId);
        }

        let url = format!("{}/api/tasks/{}", self.base_url, id);
        info!(id = %id, url = %url, "issuing delete request");

        let response = self.client.delete(&url).send()?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ApiError::NotFound { id: id.to_string() })
        } else {
            Err(ApiError::Remote {
                status: status.as_u16(),
            })
        }
    }
}

/// Outcome of one background deletion, delivered to the UI loop.
#[derive(Debug)]
pub struct DeleteOutcome {
    /// Identifier the deletion targeted
    pub id: String,
    /// Result of the remote call
    pub result: Result<(), ApiError>,
}

/// Tracks in-flight background deletions.
///
/// Each confirmed deletion spawns a worker thread holding a clone of the
/// sender; the UI loop polls the single receiver every tick. There is no
/// cancellation of an issued request.
pub struct DeleteTracker {
    sender: Sender<DeleteOutcome>,
    receiver: Receiver<DeleteOutcome>,
    in_flight: usize,
}

impl DeleteTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Number of deletions currently in flight.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Spawns a background deletion for `id` through the given gateway.
    pub fn spawn<G>(&mut self, gateway: G, id: String)
    where
        G: TaskGateway + Send + 'static,
    {
        let sender = self.sender.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            let result = gateway.delete_task(&id);
            if let Err(err) = &result {
                warn!(id = %id, error = %err, "delete request failed");
            }
            // Receiver gone means the app is shutting down
            let _ = sender.send(DeleteOutcome { id, result });
        });
    }

    /// Polls for one completed deletion without blocking.
    pub fn poll(&mut self) -> Option<DeleteOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(outcome)
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

impl Default for DeleteTracker {
    fn default() -> Self {
        Self::new()
    }
}
