use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::bot::extension::{Extension, ExtensionRegistry};
use crate::bot::lifecycle::{Lifecycle, LifecycleHandle, ProductionResources, ResourceFactory};
use crate::bot::{self, VERSION};
use crate::cog::{self, CogSet};
use crate::config::Config;
use crate::error::AppError;
use crate::service::announcement::{Announcer, ChannelAnnouncer};
use crate::state::{BotSession, DataPaths};

/// Used when `RUST_LOG` is not set. Quiets the scheduler's per-job logging.
const DEFAULT_LOG_FILTER: &str = "info,tokio_cron_scheduler=warn,serenity=warn";

/// Installs the global tracing subscriber.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Everything the gateway client needs from a successful launch.
pub struct Launched {
    pub cogs: CogSet,
    pub lifecycle: LifecycleHandle,
}

/// Loads the extensions, spawns the lifecycle actor and runs Starting.
///
/// Nothing here touches the gateway. When Starting fails, Stopping runs
/// before the error is returned so partially acquired resources are
/// released.
///
/// # Returns
/// - `Ok(Launched)` - Cogs loaded and resources acquired
/// - `Err(AppError::ExtensionErr)` - An extension failed; no resource was touched
/// - `Err(AppError)` - Starting failed and was rolled back through Stopping
pub async fn launch<R>(
    extensions: Vec<Box<dyn Extension>>,
    resources: R,
    announcer: Arc<dyn Announcer>,
    session: Arc<BotSession>,
) -> Result<Launched, AppError>
where
    R: ResourceFactory + 'static,
{
    let cogs = ExtensionRegistry::new(extensions).load()?;

    let (lifecycle, events) = LifecycleHandle::channel();
    tokio::spawn(Lifecycle::new(resources, announcer, session, VERSION).run(events));

    if let Err(e) = lifecycle.starting().await {
        stop(&lifecycle).await;
        return Err(e);
    }

    Ok(Launched { cogs, lifecycle })
}

/// Runs the bot until a shutdown signal arrives or the gateway gives up.
///
/// Extensions are loaded and resources acquired before the gateway
/// connects; a failure in either aborts startup. Teardown runs exactly once
/// whichever way the bot stops.
pub async fn run(config: Config) -> Result<(), AppError> {
    let session = Arc::new(BotSession::new(DataPaths::from_root(&config.data_dir)));
    let http = Arc::new(Http::new(&config.discord_bot_token));
    let announcer = ChannelAnnouncer::new(http, config.stdout_channel_id);

    let Launched { cogs, lifecycle } = launch(
        cog::extensions(),
        ProductionResources,
        Arc::new(announcer),
        session.clone(),
    )
    .await?;

    let mut client =
        match bot::start::init_bot(&config, cogs, session, lifecycle.clone()).await {
            Ok(client) => client,
            Err(e) => {
                stop(&lifecycle).await;
                return Err(e);
            }
        };

    let shard_manager = client.shard_manager.clone();
    let signal_lifecycle = lifecycle.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");

        stop(&signal_lifecycle).await;
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    // Blocks until the shards are shut down or the gateway fails.
    let result = client.start().await;

    // No-op when the signal task already ran the teardown.
    stop(&lifecycle).await;

    result?;

    Ok(())
}

async fn stop(lifecycle: &LifecycleHandle) {
    match lifecycle.stopping().await {
        Ok(report) if report.is_clean() => tracing::info!("Shutdown complete"),
        Ok(report) => tracing::warn!(
            "Shutdown complete with {} failed step(s)",
            report.failures.len()
        ),
        Err(e) => tracing::error!("Failed to run shutdown sequence: {}", e),
    }
}

/// Resolves on Ctrl-C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::lifecycle::test::stub::{CallLog, StubAnnouncer, StubDatabase, StubResources};
    use crate::error::extension::ExtensionError;
    use crate::service::announcement::offline_message;

    struct Broken;

    impl Extension for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn setup(&self, _cogs: &mut CogSet) -> Result<(), ExtensionError> {
            Err(ExtensionError::Load {
                name: "broken".to_string(),
                reason: "missing configuration".to_string(),
            })
        }
    }

    fn session() -> Arc<BotSession> {
        Arc::new(BotSession::new(DataPaths::from_root("./data")))
    }

    /// Tests a launch where every collaborator succeeds.
    ///
    /// Expected: Ok with the shipped cogs and resources started in order
    #[tokio::test]
    async fn launch_loads_cogs_and_starts_resources() {
        let log = CallLog::default();

        let launched = launch(
            cog::extensions(),
            StubResources::new(log.clone()),
            Arc::new(StubAnnouncer::new(log.clone())),
            session(),
        )
        .await
        .unwrap();

        assert_eq!(launched.cogs.names(), vec!["role", "starboard"]);
        assert_eq!(
            log.calls(),
            vec![
                "scheduler.start",
                "http_session.open",
                "database.connect",
                "scheduler.add_cron_job",
            ]
        );
    }

    /// Tests that a failing extension aborts before any resource is touched.
    ///
    /// Expected: Err(ExtensionErr) and no recorded calls
    #[tokio::test]
    async fn launch_aborts_on_extension_failure() {
        let log = CallLog::default();

        let result = launch(
            vec![Box::new(Broken)],
            StubResources::new(log.clone()),
            Arc::new(StubAnnouncer::new(log.clone())),
            session(),
        )
        .await;

        assert!(matches!(
            result,
            Err(AppError::ExtensionErr(ExtensionError::Load { .. }))
        ));
        assert!(log.calls().is_empty());
    }

    /// Tests that a failed Starting is torn down before the error returns.
    ///
    /// Verifies that the HTTP session and scheduler acquired before the
    /// database failure are released and the shutdown is announced.
    ///
    /// Expected: Err with teardown calls recorded after the failed connect
    #[tokio::test]
    async fn launch_stops_after_failed_start() {
        let log = CallLog::default();
        let resources = StubResources::new(log.clone())
            .with_database(StubDatabase::new(log.clone()).failing_connect());
        let session = session();

        let result = launch(
            cog::extensions(),
            resources,
            Arc::new(StubAnnouncer::new(log.clone())),
            session.clone(),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(
            log.calls(),
            vec![
                "scheduler.start".to_string(),
                "http_session.open".to_string(),
                "database.connect".to_string(),
                "http_session.close".to_string(),
                "scheduler.shutdown".to_string(),
                format!("announce: {}", offline_message(VERSION)),
            ]
        );
        assert!(session.scheduler().await.is_none());
        assert!(session.http_session().await.is_none());
    }
}
