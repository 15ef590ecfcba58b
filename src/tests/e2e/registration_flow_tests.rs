use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::core::catalog::seed_activities;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::tests::fixtures::commands::sign_up_for_activity::SignUpForActivityBuilder;
use crate::tests::fixtures::commands::unregister_from_activity::UnregisterFromActivityBuilder;
use std::sync::Arc;

async fn participants_of(store: &InMemoryActivityStore, name: &str) -> Vec<String> {
    store
        .list_activities()
        .await
        .unwrap()
        .into_iter()
        .find(|view| view.name == name)
        .expect("activity listed")
        .participants
}

#[tokio::test]
async fn walks_the_soccer_team_scenario() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let sign_up = SignUpForActivityHandler::new(store.clone());
    let unregister = UnregisterFromActivityHandler::new(store.clone());

    sign_up
        .handle(SignUpForActivityBuilder::new().email("new@x.edu").build())
        .await
        .expect("sign up failed");
    let after_sign_up = participants_of(&store, "Soccer Team").await;
    assert_eq!(after_sign_up.len(), 3);
    assert!(after_sign_up.contains(&"new@x.edu".to_string()));

    let duplicate = sign_up
        .handle(
            SignUpForActivityBuilder::new()
                .email("alex@mergington.edu")
                .build(),
        )
        .await;
    assert!(matches!(duplicate, Err(ApplicationError::SignUpRejected(_))));

    let ghost = sign_up
        .handle(
            SignUpForActivityBuilder::new()
                .activity_name("Ghost Club")
                .email("x@x.edu")
                .build(),
        )
        .await;
    assert!(matches!(ghost, Err(ApplicationError::ActivityNotFound { .. })));

    unregister
        .handle(UnregisterFromActivityBuilder::new().build())
        .await
        .expect("unregister failed");
    assert_eq!(
        participants_of(&store, "Soccer Team").await,
        vec!["sarah@mergington.edu", "new@x.edu"]
    );

    let again = unregister
        .handle(UnregisterFromActivityBuilder::new().build())
        .await;
    assert!(matches!(again, Err(ApplicationError::UnregisterRejected(_))));
}

#[tokio::test]
async fn sign_up_then_unregister_restores_every_activity() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let sign_up = SignUpForActivityHandler::new(store.clone());
    let unregister = UnregisterFromActivityHandler::new(store.clone());

    for activity in seed_activities() {
        sign_up
            .handle(
                SignUpForActivityBuilder::new()
                    .activity_name(&activity.name)
                    .email("roundtrip@mergington.edu")
                    .build(),
            )
            .await
            .expect("sign up failed");
        unregister
            .handle(
                UnregisterFromActivityBuilder::new()
                    .activity_name(&activity.name)
                    .email("roundtrip@mergington.edu")
                    .build(),
            )
            .await
            .expect("unregister failed");
        assert_eq!(
            participants_of(&store, &activity.name).await,
            activity.participants
        );
    }
}

#[tokio::test]
async fn unknown_activities_are_not_found_regardless_of_email() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let sign_up = SignUpForActivityHandler::new(store.clone());
    let unregister = UnregisterFromActivityHandler::new(store);

    for email in ["", "alex@mergington.edu", "not an email"] {
        let signed = sign_up
            .handle(
                SignUpForActivityBuilder::new()
                    .activity_name("Nonexistent Activity")
                    .email(email)
                    .build(),
            )
            .await;
        assert!(matches!(signed, Err(ApplicationError::ActivityNotFound { .. })));

        let unregistered = unregister
            .handle(
                UnregisterFromActivityBuilder::new()
                    .activity_name("Nonexistent Activity")
                    .email(email)
                    .build(),
            )
            .await;
        assert!(matches!(
            unregistered,
            Err(ApplicationError::ActivityNotFound { .. })
        ));
    }
}

#[tokio::test]
async fn a_fresh_store_does_not_see_another_stores_writes() {
    let first = Arc::new(InMemoryActivityStore::seeded());
    SignUpForActivityHandler::new(first.clone())
        .handle(SignUpForActivityBuilder::new().build())
        .await
        .expect("sign up failed");

    let second = InMemoryActivityStore::seeded();
    assert_eq!(participants_of(&first, "Soccer Team").await.len(), 3);
    assert_eq!(participants_of(&second, "Soccer Team").await.len(), 2);
}
