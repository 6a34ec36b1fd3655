//! Scheduler capability
//!
//! Singleton-mode wrapper over the `"scheduler"` category.

use capbond_domain::error::{Error, Result};
use capbond_domain::ports::{ScheduledJob, SchedulerProvider};
use std::sync::Arc;

/// Registry category this wrapper resolves
pub const CATEGORY: &str = "scheduler";

const NOT_CONFIGURED: &str = "Scheduler provider not configured. Call set_provider() first.";

/// Bond the active scheduler, replacing any previous one
pub fn set_provider(provider: Arc<dyn SchedulerProvider>) {
    capbond_registry::bond(CATEGORY, provider);
}

/// The bonded scheduler, if any
pub fn get_provider() -> Option<Arc<dyn SchedulerProvider>> {
    capbond_registry::get(CATEGORY)
}

/// Whether a scheduler is bonded
pub fn has_provider() -> bool {
    capbond_registry::is_bonded(CATEGORY)
}

/// The bonded scheduler, or the capability's not-configured error
pub fn require_provider() -> Result<Arc<dyn SchedulerProvider>> {
    get_provider().ok_or_else(|| Error::not_configured(NOT_CONFIGURED))
}

/// Enqueue a job with the bonded scheduler, returning its job id
pub async fn schedule(job: &ScheduledJob) -> Result<String> {
    require_provider()?.schedule(job).await
}

/// Cancel a previously scheduled job; returns whether it existed
pub async fn cancel(job_id: &str) -> Result<bool> {
    require_provider()?.cancel(job_id).await
}
