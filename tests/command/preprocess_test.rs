//! Tests alias resolution through the preprocessing hook, including the end-to-end define-then-use flow.

use super::*;

#[tokio::test]
async fn test_define_then_use_alias() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let steve = RecordingSender::actor("Steve");

    assert!(
        host.on_command(&steve, "alias \"hp\" as \"give {0} potion\"")
            .await
    );
    assert_eq!(
        host.on_preprocess(&steve, "hp diamond").await,
        Preprocess::Replace {
            command: "give diamond potion".to_string()
        }
    );
    assert_eq!(
        host.on_preprocess(&steve, "/hp diamond").await,
        Preprocess::Replace {
            command: "give diamond potion".to_string()
        }
    );
}

#[tokio::test]
async fn test_unknown_input_proceeds() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let steve = RecordingSender::actor("Steve");

    assert_eq!(
        host.on_preprocess(&steve, "gamemode creative").await,
        Preprocess::Proceed
    );
    assert_eq!(host.on_preprocess(&steve, "   ").await, Preprocess::Proceed);
    assert!(steve.messages().is_empty());
}

#[tokio::test]
async fn test_actor_alias_shadows_global() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let console = RecordingSender::console();
    let steve = RecordingSender::actor("Steve");
    let alex = RecordingSender::actor("Alex");

    host.on_command(&console, r#"alias "foo" as "say global {0}""#)
        .await;
    host.on_command(&steve, r#"alias "foo" as "say steve {0}""#)
        .await;

    assert_eq!(
        host.on_preprocess(&steve, "foo x").await,
        Preprocess::Replace {
            command: "say steve x".to_string()
        }
    );
    assert_eq!(
        host.on_preprocess(&alex, "foo x").await,
        Preprocess::Replace {
            command: "say global x".to_string()
        }
    );
    assert_eq!(
        host.on_preprocess(&console, "foo x").await,
        Preprocess::Replace {
            command: "say global x".to_string()
        }
    );
}

#[tokio::test]
async fn test_console_ignores_actor_aliases() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let console = RecordingSender::console();
    let steve = RecordingSender::actor("Steve");

    host.on_command(&steve, r#"alias "hp" as "give {0} potion""#)
        .await;
    assert_eq!(
        host.on_preprocess(&console, "hp diamond").await,
        Preprocess::Proceed
    );
}

#[tokio::test]
async fn test_missing_argument_is_reported_and_input_proceeds() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let steve = RecordingSender::actor("Steve");

    host.on_command(&steve, r#"alias "tp2" as "tp {0} {1}""#)
        .await;
    steve.take_messages();

    assert_eq!(
        host.on_preprocess(&steve, "tp2 Alex").await,
        Preprocess::Proceed
    );
    assert_eq!(
        steve.messages(),
        vec!["[CustomCommands] IndexOutOfRange occurred handling that command.".to_string()]
    );
}

#[tokio::test]
async fn test_escaped_braces_survive_expansion() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let console = RecordingSender::console();

    host.on_command(&console, r#"alias "lit" as "say {{0}} is {0}""#)
        .await;
    assert_eq!(
        host.on_preprocess(&console, "lit value").await,
        Preprocess::Replace {
            command: "say {0} is value".to_string()
        }
    );
}

#[tokio::test]
async fn test_actor_names_differing_in_case_do_not_share_aliases() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let steve = RecordingSender::actor("Steve");
    let lower = RecordingSender::actor("steve");

    assert!(host.on_command(&steve, r#"alias "x" as "say a""#).await);
    assert_eq!(host.on_preprocess(&lower, "x").await, Preprocess::Proceed);
    assert_eq!(
        host.on_preprocess(&steve, "x").await,
        Preprocess::Replace {
            command: "say a".to_string()
        }
    );
}

#[tokio::test]
async fn test_actor_with_sqlite_prefixed_name() {
    let temp_path = tempdir().unwrap();
    let host = test::setup_host_in(temp_path.path()).await;
    let actor = RecordingSender::actor("sqlite_steve");

    assert_eq!(
        host.on_preprocess(&actor, "gamemode creative").await,
        Preprocess::Proceed
    );
    assert!(actor.messages().is_empty());

    assert!(host.on_command(&actor, r#"alias "gc" as "gamemode creative""#).await);
    assert_eq!(
        host.on_preprocess(&actor, "gc").await,
        Preprocess::Replace {
            command: "gamemode creative".to_string()
        }
    );
}
