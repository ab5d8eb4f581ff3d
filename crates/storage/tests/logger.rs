use std::{
    fs,
    sync::{Arc, Mutex, mpsc},
    thread,
    time::Duration,
};

use log::{Level, LevelFilter};
use pretty_assertions::assert_eq;
use repset_app::log::{self as app_log, Repository};
use repset_storage::LocalStorage;
use tempfile::TempDir;

fn run(f: impl FnOnce() + Send + 'static) {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        f();
        tx.send(()).unwrap();
    });
    rx.recv_timeout(Duration::from_secs(5)).unwrap();
}

#[test]
fn test_logger_backed_by_local_storage() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(Mutex::new(LocalStorage::new(dir.path()).unwrap()));
    let repository: Arc<Mutex<dyn Repository>> = storage.clone();
    app_log::init(repository, LevelFilter::Debug).unwrap();

    run(|| {
        log::info!("generated program");
        log::debug!("picked 5 exercises");
    });

    let entries = storage.lock().unwrap().read_entries().unwrap();
    assert_eq!(
        entries
            .iter()
            .map(|e| (e.level, e.message.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (Level::Debug, "picked 5 exercises"),
            (Level::Info, "generated program")
        ]
    );

    fs::write(dir.path().join("log.json"), "{not json").unwrap();

    run(|| log::error!("assistant failed"));

    assert!(storage.lock().unwrap().read_entries().is_err());
}
