use crate::error::UserServiceError;
use crate::models::{NewUser, UserChanges};
use crate::storage::UserStore;
use crate::tests::create_test_store;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_get_user() {
    let store = create_test_store();
    let user = store
        .create_user(new_user("Test User", "test@example.com"))
        .await
        .unwrap();
    assert_eq!(user.name, "Test User");
    assert_eq!(user.email, "test@example.com");

    let fetched = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let store = create_test_store();
    store
        .create_user(new_user("First", "dup@example.com"))
        .await
        .unwrap();
    let result = store.create_user(new_user("Second", "dup@example.com")).await;
    assert!(matches!(
        result,
        Err(UserServiceError::EmailAlreadyRegistered(_))
    ));
}

#[tokio::test]
async fn test_get_unknown_user() {
    let store = create_test_store();
    assert!(store.get_user(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_users_empty_and_ordered() {
    let store = create_test_store();
    assert!(store.list_users().await.unwrap().is_empty());

    let a = store.create_user(new_user("A", "a@example.com")).await.unwrap();
    let b = store.create_user(new_user("B", "b@example.com")).await.unwrap();

    let all = store.list_users().await.unwrap();
    assert_eq!(all, vec![a, b]);
}

#[tokio::test]
async fn test_update_partial_fields() {
    let store = create_test_store();
    let user = store
        .create_user(new_user("Before", "keep@example.com"))
        .await
        .unwrap();

    let updated = store
        .update_user(
            user.id,
            UserChanges {
                name: Some("After".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "After");
    assert_eq!(updated.email, "keep@example.com");

    let updated = store
        .update_user(
            user.id,
            UserChanges {
                name: None,
                email: Some("new@example.com".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "After");
    assert_eq!(updated.email, "new@example.com");
}

#[tokio::test]
async fn test_update_unknown_user() {
    let store = create_test_store();
    let result = store
        .update_user(
            7,
            UserChanges {
                name: Some("Nobody".to_string()),
                email: None,
            },
        )
        .await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound(7))));
}

#[tokio::test]
async fn test_update_email_collision() {
    let store = create_test_store();
    store
        .create_user(new_user("First", "first@example.com"))
        .await
        .unwrap();
    let second = store
        .create_user(new_user("Second", "second@example.com"))
        .await
        .unwrap();

    let result = store
        .update_user(
            second.id,
            UserChanges {
                name: None,
                email: Some("first@example.com".to_string()),
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(UserServiceError::EmailAlreadyRegistered(_))
    ));

    // Keeping your own email is not a collision.
    let unchanged = store
        .update_user(
            second.id,
            UserChanges {
                name: None,
                email: Some("second@example.com".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged.email, "second@example.com");
}

#[tokio::test]
async fn test_delete_user() {
    let store = create_test_store();
    let user = store
        .create_user(new_user("Gone", "gone@example.com"))
        .await
        .unwrap();

    store.delete_user(user.id).await.unwrap();
    assert!(store.get_user(user.id).await.unwrap().is_none());

    let result = store.delete_user(user.id).await;
    assert!(matches!(result, Err(UserServiceError::UserNotFound(_))));
}

#[tokio::test]
async fn test_delete_frees_email_for_reuse() {
    let store = create_test_store();
    let user = store
        .create_user(new_user("First", "reuse@example.com"))
        .await
        .unwrap();
    store.delete_user(user.id).await.unwrap();

    let recreated = store
        .create_user(new_user("Second", "reuse@example.com"))
        .await
        .unwrap();
    assert_ne!(recreated.id, user.id);
}
