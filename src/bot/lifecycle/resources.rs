use std::sync::Arc;

use serenity::async_trait;

use crate::data::database::{Database, DatabaseHandle};
use crate::error::AppError;
use crate::scheduler::{cron::CronScheduler, Scheduler};
use crate::service::http_session::{HttpSession, ReqwestSession};
use crate::state::DataPaths;

/// Constructs the resources acquired during the Starting phase.
///
/// Production code uses [`ProductionResources`]; tests substitute recording
/// stubs.
#[async_trait]
pub trait ResourceFactory: Send + Sync {
    async fn scheduler(&self) -> Result<Arc<dyn Scheduler>, AppError>;

    fn http_session(&self) -> Result<Arc<dyn HttpSession>, AppError>;

    fn database(&self, paths: &DataPaths) -> Arc<dyn DatabaseHandle>;
}

pub struct ProductionResources;

#[async_trait]
impl ResourceFactory for ProductionResources {
    async fn scheduler(&self) -> Result<Arc<dyn Scheduler>, AppError> {
        Ok(Arc::new(CronScheduler::new().await?))
    }

    fn http_session(&self) -> Result<Arc<dyn HttpSession>, AppError> {
        Ok(Arc::new(ReqwestSession::open()?))
    }

    fn database(&self, paths: &DataPaths) -> Arc<dyn DatabaseHandle> {
        Arc::new(Database::new(paths.clone()))
    }
}
