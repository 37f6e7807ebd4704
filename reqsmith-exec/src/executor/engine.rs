use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, error};
use uuid::Uuid;

use reqsmith_core::types::{ExecuteRequest, ExecutionResult};

use crate::executor::failure::{failure_result, EngineError};
use crate::executor::history::{HistoryEntry, HistorySink};
use crate::executor::http::HttpClient;
use crate::executor::request::build_request;
use crate::executor::response::normalize;
use crate::executor::source::VariableSource;

/// Engine-level knobs. Pool and TLS policy live in `TransportConfig`; this
/// only carries what the executor itself consults.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Deadline applied when a request carries `timeout_ms == 0`.
    pub default_timeout: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(30),
        }
    }
}

/// The request execution engine.
///
/// Explicitly constructed with its collaborators — the pooled transport, the
/// environment variable source, and the history sink — so tests substitute
/// any of them. The transport is the only state shared between concurrent
/// executions; `execute` itself holds nothing across calls.
pub struct Executor {
    http: Arc<dyn HttpClient>,
    variables: Arc<dyn VariableSource>,
    history: Arc<dyn HistorySink>,
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(
        http: Arc<dyn HttpClient>,
        variables: Arc<dyn VariableSource>,
        history: Arc<dyn HistorySink>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            http,
            variables,
            history,
            config,
        }
    }

    /// Executes one request and returns the uniform result shape.
    ///
    /// Every failure mode — bad URL, unreachable host, timeout, misbehaving
    /// collaborator — is folded into a `success == false` result. This
    /// method does not return an error and does not panic.
    pub async fn execute(
        &self,
        request: &ExecuteRequest,
        save_to_history: bool,
    ) -> ExecutionResult {
        let execution_id = Uuid::new_v4();
        let started = Instant::now();

        let (result, resolved_url) = match self.run(request, execution_id, started).await {
            Ok(ok) => ok,
            Err(error) => {
                debug!(%execution_id, error = %error, "execution failed");
                (
                    failure_result(request, &error, started.elapsed()),
                    request.url.clone(),
                )
            }
        };

        if save_to_history {
            self.dispatch_history(execution_id, request, &result, resolved_url);
        }

        result
    }

    async fn run(
        &self,
        request: &ExecuteRequest,
        execution_id: Uuid,
        started: Instant,
    ) -> Result<(ExecutionResult, String), EngineError> {
        let vars_map = self.fetch_variables(request.environment_id).await?;

        let transport_request = build_request(request, &vars_map)?;
        let resolved_url = transport_request.url.to_string();

        debug!(
            %execution_id,
            method = %request.method,
            url = %resolved_url,
            "dispatching request"
        );

        let raw = self
            .http
            .send(transport_request, self.request_timeout(request))
            .await?;

        let result = normalize(raw, &resolved_url, request.method.as_str(), started.elapsed());
        Ok((result, resolved_url))
    }

    async fn fetch_variables(
        &self,
        environment_id: Option<i64>,
    ) -> Result<HashMap<String, String>, EngineError> {
        match environment_id {
            Some(id) => self
                .variables
                .variables(id)
                .await
                .map_err(|e| EngineError::Unexpected(e.to_string())),
            None => Ok(HashMap::new()),
        }
    }

    fn request_timeout(&self, request: &ExecuteRequest) -> Duration {
        if request.timeout_ms == 0 {
            self.config.default_timeout
        } else {
            Duration::from_millis(request.timeout_ms)
        }
    }

    /// Hands the finished execution to the history sink on a detached task.
    /// Recording is best-effort: a slow or failing sink never delays or
    /// alters the result the caller already holds.
    fn dispatch_history(
        &self,
        execution_id: Uuid,
        request: &ExecuteRequest,
        result: &ExecutionResult,
        resolved_url: String,
    ) {
        let entry = HistoryEntry {
            id: execution_id,
            request: request.clone(),
            result: result.clone(),
            resolved_url,
            executed_at: Utc::now(),
        };
        let sink = Arc::clone(&self.history);
        tokio::spawn(async move {
            if let Err(e) = sink.record(entry).await {
                error!(%execution_id, error = %e, "failed to record execution history");
            }
        });
    }
}
