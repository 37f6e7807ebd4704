use std::collections::HashMap;

use async_trait::async_trait;

/// Read-only supplier of environment variable maps, keyed by environment id.
///
/// Called at most once per execution; a request without an environment id
/// never reaches the source at all.
#[async_trait]
pub trait VariableSource: Send + Sync {
    async fn variables(
        &self,
        environment_id: i64,
    ) -> Result<HashMap<String, String>, VariableSourceError>;
}

#[derive(Debug, thiserror::Error)]
#[error("variable source error: {0}")]
pub struct VariableSourceError(pub String);

/// Source for deployments without environments; every lookup is empty.
pub struct NoEnvironments;

#[async_trait]
impl VariableSource for NoEnvironments {
    async fn variables(
        &self,
        _environment_id: i64,
    ) -> Result<HashMap<String, String>, VariableSourceError> {
        Ok(HashMap::new())
    }
}

/// In-memory variable maps, for tests and embedded use. An unknown
/// environment id resolves to an empty map rather than an error.
#[derive(Debug, Clone, Default)]
pub struct StaticVariableSource {
    environments: HashMap<i64, HashMap<String, String>>,
}

impl StaticVariableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, environment_id: i64, vars: HashMap<String, String>) -> Self {
        self.environments.insert(environment_id, vars);
        self
    }
}

#[async_trait]
impl VariableSource for StaticVariableSource {
    async fn variables(
        &self,
        environment_id: i64,
    ) -> Result<HashMap<String, String>, VariableSourceError> {
        Ok(self
            .environments
            .get(&environment_id)
            .cloned()
            .unwrap_or_default())
    }
}
