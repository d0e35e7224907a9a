//! Feeds newline-delimited JSON events through the pipeline.
//!
//! Each input line is one event:
//!
//! ```text
//! {"event_type":"login","created_at":"2024-01-01T00:00:00Z","payload":{"user":"alice"}}
//! ```
//!
//! `created_at` defaults to the time the line is read and `payload` to
//! `null`. A line that fails is logged and counted; the next line is still
//! processed.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::SinkError;
use audit_sink_pipeline::{Orchestrator, PipelineError};
use audit_sink_shared::Event;

/// One event as it appears on the input stream.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingEvent {
    pub event_type: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payload: Value,
}

impl IncomingEvent {
    pub fn into_event(self) -> Event {
        let event = Event::new(self.event_type, self.payload);
        match self.created_at {
            Some(created_at) => event.with_created_at(created_at),
            None => event,
        }
    }
}

/// Counts of what happened to the input lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events that made it through the pipeline.
    pub processed: usize,
    /// Lines that could not be parsed or whose event failed.
    pub failed: usize,
}

/// Process every line of `reader` until end of input or cancellation.
///
/// Only reading the input can fail the run; per-event failures are logged
/// and counted in the summary.
#[instrument(skip_all)]
pub async fn run<R>(
    orchestrator: &Orchestrator,
    reader: R,
    cancel: &CancellationToken,
) -> Result<RunSummary, SinkError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut summary = RunSummary::default();

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Shutdown requested, stopping input");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let incoming: IncomingEvent = match serde_json::from_str(line) {
            Ok(incoming) => incoming,
            Err(e) => {
                warn!(error = %e, "Skipping malformed input line");
                summary.failed += 1;
                continue;
            }
        };

        match orchestrator.process(cancel, incoming.into_event()).await {
            Ok(_) => summary.processed += 1,
            Err(PipelineError::Cancelled) => {
                summary.failed += 1;
                info!("Shutdown requested during delivery");
                break;
            }
            Err(e) => {
                error!(error = %e, "Failed to deliver event");
                summary.failed += 1;
            }
        }
    }

    info!(
        processed = summary.processed,
        failed = summary.failed,
        "Input finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use audit_sink_pipeline::SinkConfig;
    use audit_sink_search_index::{
        DocumentIndexer, IndexRequest, IndexResponse, SearchIndexError, StatusCode,
    };
    use std::sync::Arc;
    use tokio::io::BufReader;
    use tokio::sync::Mutex;

    /// Mock indexer rejecting documents whose event type is "reject".
    struct MockIndexer {
        requests: Arc<Mutex<Vec<IndexRequest>>>,
    }

    impl MockIndexer {
        fn new() -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl DocumentIndexer for MockIndexer {
        async fn index_document(
            &self,
            request: &IndexRequest,
        ) -> Result<IndexResponse, SearchIndexError> {
            self.requests.lock().await.push(request.clone());

            let body = String::from_utf8_lossy(&request.body);
            if body.contains("\"event_type\":\"reject\"") {
                return Ok(IndexResponse::new(
                    StatusCode::BAD_REQUEST,
                    r#"{"error":"rejected"}"#,
                ));
            }
            Ok(IndexResponse::new(StatusCode::CREATED, r#"{"result":"created"}"#))
        }

        async fn health_check(&self) -> Result<bool, SearchIndexError> {
            Ok(true)
        }
    }

    fn orchestrator(client: Arc<MockIndexer>) -> Orchestrator {
        Orchestrator::opensearch(client, SinkConfig::new("audit"))
    }

    #[tokio::test]
    async fn test_run_processes_each_line() {
        let client = Arc::new(MockIndexer::new());
        let input = concat!(
            "{\"event_type\":\"login\",\"created_at\":\"2024-01-01T00:00:00Z\",\"payload\":{\"user\":\"alice\",\"action\":\"login\"}}\n",
            "\n",
            "{\"event_type\":\"logout\",\"payload\":{\"user\":\"alice\"}}\n",
        );

        let summary = run(
            &orchestrator(client.clone()),
            BufReader::new(input.as_bytes()),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            summary,
            RunSummary {
                processed: 2,
                failed: 0
            }
        );

        let requests = client.requests.lock().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].document_id,
            "8bb395bb92ec1485e58e72c8c6c535069fb784ca71d9d2413649c5abe174d669"
        );
    }

    #[tokio::test]
    async fn test_run_counts_failures_and_continues() {
        let client = Arc::new(MockIndexer::new());
        let input = concat!(
            "not json\n",
            "{\"payload\":{}}\n",
            "{\"event_type\":\"reject\",\"payload\":{}}\n",
            "{\"event_type\":\"login\",\"payload\":{}}\n",
        );

        let summary = run(
            &orchestrator(client.clone()),
            BufReader::new(input.as_bytes()),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            summary,
            RunSummary {
                processed: 1,
                failed: 3
            }
        );
        assert_eq!(client.requests.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_run_stops_when_cancelled() {
        let client = Arc::new(MockIndexer::new());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let summary = run(
            &orchestrator(client.clone()),
            BufReader::new("{\"event_type\":\"login\"}\n".as_bytes()),
            &cancel,
        )
        .await
        .unwrap();

        assert_eq!(summary, RunSummary::default());
        assert!(client.requests.lock().await.is_empty());
    }

    #[test]
    fn test_incoming_event_defaults() {
        let incoming: IncomingEvent = serde_json::from_str(r#"{"event_type":"ping"}"#).unwrap();

        assert!(incoming.created_at.is_none());
        assert_eq!(incoming.payload, Value::Null);

        let event = incoming.into_event();
        assert_eq!(event.event_type().as_str(), "ping");
    }
}
