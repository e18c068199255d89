//! Bot-scoped state shared between the lifecycle orchestrator and cogs.
//!
//! `BotSession` replaces attaching resources to a global bot object: it is
//! created once at startup and handed out as `Arc<BotSession>`. The lifecycle
//! orchestrator is the only writer; each slot is filled during the Starting
//! phase and emptied during the Stopping phase. Everyone else only reads.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data::database::DatabaseHandle;
use crate::scheduler::Scheduler;
use crate::service::http_session::HttpSession;

/// Directories handed to the database.
///
/// The dynamic directory holds data written at runtime; the static directory
/// is its sibling and holds files shipped with the bot, such as the schema
/// build script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub dynamic_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl DataPaths {
    /// Derives `{root}/dynamic` and `{root}/static`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let dynamic_dir = root.as_ref().join("dynamic");
        let static_dir = dynamic_dir
            .parent()
            .map(|parent| parent.join("static"))
            .unwrap_or_else(|| PathBuf::from("static"));

        Self {
            dynamic_dir,
            static_dir,
        }
    }
}

/// Shared resources owned by the lifecycle orchestrator.
pub struct BotSession {
    pub paths: DataPaths,
    scheduler: RwLock<Option<Arc<dyn Scheduler>>>,
    http_session: RwLock<Option<Arc<dyn HttpSession>>>,
    database: RwLock<Option<Arc<dyn DatabaseHandle>>>,
}

impl BotSession {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            scheduler: RwLock::new(None),
            http_session: RwLock::new(None),
            database: RwLock::new(None),
        }
    }

    pub async fn scheduler(&self) -> Option<Arc<dyn Scheduler>> {
        self.scheduler.read().await.clone()
    }

    pub async fn http_session(&self) -> Option<Arc<dyn HttpSession>> {
        self.http_session.read().await.clone()
    }

    pub async fn database(&self) -> Option<Arc<dyn DatabaseHandle>> {
        self.database.read().await.clone()
    }

    pub(crate) async fn set_scheduler(&self, scheduler: Arc<dyn Scheduler>) {
        *self.scheduler.write().await = Some(scheduler);
    }

    pub(crate) async fn set_http_session(&self, session: Arc<dyn HttpSession>) {
        *self.http_session.write().await = Some(session);
    }

    pub(crate) async fn set_database(&self, database: Arc<dyn DatabaseHandle>) {
        *self.database.write().await = Some(database);
    }

    pub(crate) async fn take_scheduler(&self) -> Option<Arc<dyn Scheduler>> {
        self.scheduler.write().await.take()
    }

    pub(crate) async fn take_http_session(&self) -> Option<Arc<dyn HttpSession>> {
        self.http_session.write().await.take()
    }

    pub(crate) async fn take_database(&self) -> Option<Arc<dyn DatabaseHandle>> {
        self.database.write().await.take()
    }
}
