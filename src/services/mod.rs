/// Business logic services layer
use crate::domain::UserRequest;
use crate::errors::{ApiError, ApiResult};
use crate::repo::RequestStore;
use crate::utils::{new_external_id, set_str_field};
use crate::validation::Validate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User request intake: interpret, normalize, validate, store
pub struct UserRequestService {
    store: Arc<dyn RequestStore>,
}

impl UserRequestService {
    pub fn new(store: Arc<dyn RequestStore>) -> Self {
        Self { store }
    }

    /// Accept a raw request body.
    ///
    /// A missing or empty `externalId` is replaced by a generated one in both
    /// the typed request and the raw body before validation runs. The raw body
    /// is what gets stored and returned.
    pub async fn submit(&self, mut raw: Value) -> ApiResult<Value> {
        if raw.is_null() {
            return Err(ApiError::InvalidInput("request body is null".to_string()));
        }
        if !raw.is_object() {
            return Err(ApiError::InvalidInput(
                "request body must be a JSON object".to_string(),
            ));
        }

        let mut request: UserRequest = serde_json::from_value(raw.clone())
            .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

        if request.needs_external_id() {
            let id = new_external_id();
            debug!("Generated externalId {}", id);
            set_str_field(&mut raw, "externalId", &id);
            request.external_id = Some(id);
        }
        let external_id = request.external_id.clone().unwrap_or_default();

        let report = request.validate();
        if !report.is_empty() {
            warn!(
                "Rejected user request {} with {} violation(s)",
                external_id,
                report.len()
            );
            for diagnostic in report.diagnostics() {
                debug!("{}", diagnostic);
            }
            return Err(ApiError::Rejected(report));
        }

        self.store.put(&external_id, raw.clone()).await?;
        info!("Stored user request {}", external_id);
        Ok(raw)
    }

    /// Fetch one stored request
    pub async fn get(&self, external_id: &str) -> ApiResult<Value> {
        let external_id = require_id(external_id)?;
        self.store
            .get(external_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("user request {}", external_id)))
    }

    /// All stored requests
    pub async fn list(&self) -> ApiResult<Vec<Value>> {
        self.store.list().await
    }

    /// Remove one stored request
    pub async fn delete(&self, external_id: &str) -> ApiResult<()> {
        let external_id = require_id(external_id)?;
        if self.store.delete(external_id).await? {
            info!("Deleted user request {}", external_id);
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("user request {}", external_id)))
        }
    }
}

fn require_id(external_id: &str) -> ApiResult<&str> {
    if external_id.trim().is_empty() {
        Err(ApiError::InvalidInput("externalId is required".to_string()))
    } else {
        Ok(external_id)
    }
}
