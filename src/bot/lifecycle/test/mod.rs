use std::sync::{Arc, Mutex};

use crate::bot::lifecycle::{Lifecycle, LifecyclePhase, TeardownStep};
use crate::error::{lifecycle::LifecycleError, AppError};
use crate::scheduler::commit::COMMIT_SCHEDULE;
use crate::state::{BotSession, DataPaths};

use stub::{CallLog, StubAnnouncer, StubDatabase, StubResources, StubScheduler};


mod starting;

const VERSION: &str = "0.0.0-test";

/// Lifecycle under test plus the handles tests inspect afterwards.
struct Fixture {
    log: CallLog,
    scheduler: Arc<StubScheduler>,
    database_paths: Arc<Mutex<Option<DataPaths>>>,
    session: Arc<BotSession>,
    lifecycle: Lifecycle,
}

impl Fixture {
    fn new(resources: StubResources, announcer: StubAnnouncer) -> Self {
        let session = Arc::new(BotSession::new(DataPaths::from_root("./data")));

        Self {
            log: resources.log.clone(),
            scheduler: resources.scheduler.clone(),
            database_paths: resources.database_paths.clone(),
            session: session.clone(),
            lifecycle: Lifecycle::new(resources, Arc::new(announcer), session, VERSION),
        }
    }

    /// Fixture whose collaborators all succeed.
    fn working() -> Self {
        let log = CallLog::default();

        Self::new(StubResources::new(log.clone()), StubAnnouncer::new(log))
    }
}
