use std::collections::HashSet;

use study_tracker::clients::actor_client::ActorClient;
use study_tracker::lifecycle::{TrackerSystem, DEFAULT_CHANNEL_CAPACITY};
use study_tracker::model::{Deadline, TechnologyCreate, UserCreate, Username};
use study_tracker::user_actor::UserError;

fn register(name: &str, username: &str) -> UserCreate {
    UserCreate {
        name: name.to_string(),
        username: Username::from(username),
    }
}

/// Full end-to-end test through the real Store actor.
#[tokio::test]
async fn test_full_tracker_system_integration() {
    let system = TrackerSystem::new(DEFAULT_CHANNEL_CAPACITY);

    let alice = system
        .user_client
        .create_user(register("Alice", "alice"))
        .await
        .expect("Failed to create user");
    assert!(alice.technologies.is_empty());

    let go = system
        .user_client
        .add_technology(
            alice.username.clone(),
            TechnologyCreate {
                title: "Go".to_string(),
                deadline: Deadline::parse("2025-01-01"),
            },
        )
        .await
        .expect("Failed to add technology");

    let studied = system
        .user_client
        .mark_studied(alice.username.clone(), go.id)
        .await
        .expect("Failed to mark studied");
    assert!(studied.studied);

    // The stored user reflects every action
    let stored = system
        .user_client
        .get(Username::from("alice"))
        .await
        .expect("Failed to get user")
        .expect("User not found");
    assert_eq!(stored.id, alice.id);
    assert_eq!(stored.technologies, vec![studied]);

    let remaining = system
        .user_client
        .remove_technology(alice.username.clone(), go.id)
        .await
        .expect("Failed to remove technology");
    assert!(remaining.is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_duplicate_username_leaves_store_unchanged() {
    let system = TrackerSystem::new(DEFAULT_CHANNEL_CAPACITY);
    let original = system
        .user_client
        .create_user(register("Alice", "alice"))
        .await
        .unwrap();

    let err = system
        .user_client
        .create_user(register("Impostor", "alice"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::AlreadyExists("alice".to_string()));

    let stored = system
        .user_client
        .find_by_username(&Username::from("alice"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, original);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_ids_are_unique() {
    let system = TrackerSystem::new(DEFAULT_CHANNEL_CAPACITY);

    let mut ids = HashSet::new();
    for i in 0..20 {
        let user = system
            .user_client
            .create_user(register("User", &format!("user{i}")))
            .await
            .unwrap();
        ids.insert(user.id);
    }
    assert_eq!(ids.len(), 20);

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_admit_exactly_one() {
    let system = TrackerSystem::new(4);

    let attempts: Vec<_> = (0..16)
        .map(|i| {
            let users = system.user_client.clone();
            tokio::spawn(async move {
                users
                    .create_user(register(&format!("Racer {i}"), "racer"))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(_) => created += 1,
            Err(UserError::AlreadyExists(_)) => rejected += 1,
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(rejected, 15);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_actions_on_unknown_user_fail() {
    let system = TrackerSystem::new(DEFAULT_CHANNEL_CAPACITY);

    let err = system
        .user_client
        .add_technology(
            Username::from("ghost"),
            TechnologyCreate {
                title: "Go".to_string(),
                deadline: Deadline::parse("2025-01-01"),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, UserError::NotFound("ghost".to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clients() {
    let system = TrackerSystem::new(DEFAULT_CHANNEL_CAPACITY);
    let users = system.user_client.clone();

    let shutdown = tokio::spawn(system.shutdown());

    // The actor keeps serving while a clone is alive
    let created = users.create_user(register("Late", "late")).await;
    assert!(created.is_ok());

    drop(users);
    shutdown.await.unwrap().expect("Shutdown failed");
}
