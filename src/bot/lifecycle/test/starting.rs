use super::*;

/// Tests the order of the Starting sequence.
///
/// Verifies that the scheduler is started before the HTTP session is
/// opened, the database is connected after that, and the commit job is
/// registered last.
///
/// Expected: Ok with calls in fixed order
#[tokio::test]
async fn starts_resources_in_order() {
    let mut test = Fixture::working();

    test.lifecycle.on_starting().await.unwrap();

    assert_eq!(
        test.log.calls(),
        vec![
            "scheduler.start",
            "http_session.open",
            "database.connect",
            "scheduler.add_cron_job",
        ]
    );
    assert_eq!(test.lifecycle.phase(), LifecyclePhase::Starting);
}

/// Tests that the commit job fires every minute at second 0 and commits.
///
/// Expected: Ok with one job on `0 * * * * *` that calls database commit
#[tokio::test]
async fn registers_commit_job_every_minute() {
    let mut test = Fixture::working();

    test.lifecycle.on_starting().await.unwrap();

    assert_eq!(test.scheduler.schedules(), vec![COMMIT_SCHEDULE]);
    assert_eq!(COMMIT_SCHEDULE, "0 * * * * *");

    test.log.clear();
    test.scheduler.fire_all().await;

    assert_eq!(test.log.calls(), vec!["database.commit"]);
}

/// Tests that the database receives the dynamic and static directories.
///
/// Expected: Ok with session paths handed to the database factory
#[tokio::test]
async fn passes_data_paths_to_database() {
    let mut test = Fixture::working();

    test.lifecycle.on_starting().await.unwrap();

    let paths = test.database_paths.lock().unwrap().clone();
    assert_eq!(paths, Some(DataPaths::from_root("./data")));
}

/// Tests that acquired resources become readable through the session.
///
/// Expected: Ok with every slot filled
#[tokio::test]
async fn fills_session_slots() {
    let mut test = Fixture::working();

    test.lifecycle.on_starting().await.unwrap();

    assert!(test.session.scheduler().await.is_some());
    assert!(test.session.http_session().await.is_some());
    assert!(test.session.database().await.is_some());
}

/// Tests that Starting cannot run twice.
///
/// Expected: Err(InvalidTransition) and no second round of calls
#[tokio::test]
async fn rejects_second_starting() {
    let mut test = Fixture::working();

    test.lifecycle.on_starting().await.unwrap();
    test.log.clear();

    let result = test.lifecycle.on_starting().await;

    assert!(matches!(
        result,
        Err(AppError::LifecycleErr(LifecycleError::InvalidTransition {
            event: "starting",
            ..
        }))
    ));
    assert!(test.log.calls().is_empty());
}

/// Tests that a failing scheduler aborts startup before anything else runs.
///
/// Expected: Err with only the scheduler start attempted
#[tokio::test]
async fn aborts_when_scheduler_fails_to_start() {
    let log = CallLog::default();
    let resources = StubResources::new(log.clone())
        .with_scheduler(StubScheduler::new(log.clone()).failing_start());
    let mut test = Fixture::new(resources, StubAnnouncer::new(log));

    let result = test.lifecycle.on_starting().await;

    assert!(result.is_err());
    assert_eq!(test.log.calls(), vec!["scheduler.start"]);
    assert!(test.session.scheduler().await.is_none());
}

/// Tests that a failing HTTP session aborts startup before the database.
///
/// Expected: Err with no database connect attempted
#[tokio::test]
async fn aborts_when_session_fails_to_open() {
    let log = CallLog::default();
    let resources = StubResources::new(log.clone()).failing_session_open();
    let mut test = Fixture::new(resources, StubAnnouncer::new(log));

    let result = test.lifecycle.on_starting().await;

    assert!(result.is_err());
    assert_eq!(
        test.log.calls(),
        vec!["scheduler.start", "http_session.open"]
    );
}

/// Tests that a failing database connect aborts startup.
///
/// Verifies that the commit job is never registered and that the resources
/// acquired so far stay in the session for Stopping to release.
///
/// Expected: Err with no commit job
#[tokio::test]
async fn aborts_when_database_fails_to_connect() {
    let log = CallLog::default();
    let resources = StubResources::new(log.clone())
        .with_database(StubDatabase::new(log.clone()).failing_connect());
    let mut test = Fixture::new(resources, StubAnnouncer::new(log));

    let result = test.lifecycle.on_starting().await;

    assert!(result.is_err());
    assert!(test.scheduler.schedules().is_empty());
    assert!(test.session.scheduler().await.is_some());
    assert!(test.session.http_session().await.is_some());
    assert!(test.session.database().await.is_none());
}

/// Tests the online announcement after a successful start.
///
/// Expected: announcement sent with version, phase Running
#[tokio::test]
async fn started_announces_online() {
    let mut test = Fixture::working();

    test.lifecycle.on_starting().await.unwrap();
    test.log.clear();
    test.lifecycle.on_started().await;

    assert_eq!(
        test.log.calls(),
        vec!["announce: Carberretta is now online! (Version 0.0.0-test)"]
    );
    assert_eq!(test.lifecycle.phase(), LifecyclePhase::Running);
}

/// Tests that a failed online announcement does not stop the bot.
///
/// Expected: phase Running despite the failed send
#[tokio::test]
async fn started_survives_announcement_failure() {
    let log = CallLog::default();
    let mut test = Fixture::new(
        StubResources::new(log.clone()),
        StubAnnouncer::new(log).failing(),
    );

    test.lifecycle.on_starting().await.unwrap();
    test.lifecycle.on_started().await;

    assert_eq!(test.lifecycle.phase(), LifecyclePhase::Running);
}

/// Tests that Started is ignored unless Starting ran first, and only acts once.
///
/// Expected: no announcement before Starting, one announcement after
#[tokio::test]
async fn started_acts_once_after_starting() {
    let mut test = Fixture::working();

    test.lifecycle.on_started().await;
    assert!(test.log.calls().is_empty());
    assert_eq!(test.lifecycle.phase(), LifecyclePhase::Initializing);

    test.lifecycle.on_starting().await.unwrap();
    test.log.clear();
    test.lifecycle.on_started().await;
    test.lifecycle.on_started().await;

    assert_eq!(test.log.calls().len(), 1);
}
