//! Tests host startup/shutdown: data folder creation, persistence across restarts and idempotent close.

use super::*;

#[tokio::test]
async fn test_startup_creates_data_folder_and_database() {
    let temp_path = tempdir().unwrap();
    let data_dir = temp_path.path().join("plugins").join("CustomCommands");

    let host = test::setup_host_in(&data_dir).await;
    assert!(data_dir.is_dir());
    assert!(host.config().database_path().is_file());
    assert!(host.store().db().is_open().await);
    host.shutdown().await;
}

#[tokio::test]
async fn test_aliases_survive_restart() {
    let temp_path = tempdir().unwrap();
    let steve = RecordingSender::actor("Steve");

    let host = test::setup_host_in(temp_path.path()).await;
    host.on_command(&steve, r#"alias "gn" as "gamemode creative""#)
        .await;
    host.shutdown().await;

    let host: CustomCommands = test::setup_host_in(temp_path.path()).await;
    assert_eq!(
        host.on_preprocess(&steve, "gn").await,
        Preprocess::Replace {
            command: "gamemode creative".to_string()
        }
    );
    host.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_is_idempotent() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;

    host.shutdown().await;
    host.shutdown().await;
    assert!(!host.store().db().is_open().await);
}

#[tokio::test]
async fn test_hooks_after_shutdown_fail_gracefully() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let steve = RecordingSender::actor("Steve");
    host.shutdown().await;

    assert!(!host.on_command(&steve, r#"alias "gn" as "gamemode creative""#).await);
    assert_eq!(host.on_preprocess(&steve, "gn").await, Preprocess::Proceed);
    assert_eq!(
        steve.messages(),
        vec![
            "[CustomCommands] StoreNotOpen occurred creating that alias.".to_string(),
            "[CustomCommands] StoreNotOpen occurred handling that command.".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_startup_fails_when_data_folder_is_a_file() {
    let temp_path = tempdir().unwrap();
    let blocker = temp_path.path().join("CustomCommands");
    std::fs::write(&blocker, b"").unwrap();

    let result = CustomCommands::startup(custom_commands::PluginConfig::with_data_dir(&blocker)).await;
    assert!(result.is_err());
}
