use fittrack_tracker::domain::repository::Store;
use fittrack_tracker::domain::types::UserInput;
use fittrack_tracker::error::TrackerServiceError;
use fittrack_tracker::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

use crate::helpers::{MemoryStore, jane, seed_user, user_input};

// ── CreateUserUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_with_fresh_id() {
    let store = MemoryStore::new();
    let usecase = CreateUserUseCase {
        repo: store.user_repo(),
    };

    let first = usecase.execute(jane()).await.unwrap();
    let second = usecase
        .execute(user_input("John", "john@example.com", "john"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Jane");
    assert_eq!(first.creation_date, first.last_modified_date);
    assert_eq!(store.user_count(), 2);
}

#[tokio::test]
async fn should_reject_user_missing_any_required_field() {
    let store = MemoryStore::new();
    let usecase = CreateUserUseCase {
        repo: store.user_repo(),
    };
    let cases: [(&str, fn(&mut UserInput)); 4] = [
        ("name", |input| input.name = None),
        ("email", |input| input.email = None),
        ("username", |input| input.username = None),
        ("password", |input| input.password = None),
    ];

    for (field, clear) in cases {
        let mut input = jane();
        clear(&mut input);
        let result = usecase.execute(input).await;
        assert!(
            matches!(result, Err(TrackerServiceError::MissingFields)),
            "without {field}: expected MissingFields, got {result:?}"
        );
    }
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let store = MemoryStore::new();
    seed_user(&store, jane()).await;
    let usecase = CreateUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase
        .execute(user_input("Other", "jane@example.com", "other"))
        .await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let store = MemoryStore::new();
    seed_user(&store, jane()).await;
    let usecase = CreateUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase
        .execute(user_input("Other", "other@example.com", "jane"))
        .await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

// ── GetUserUseCase / ListUsersUseCase ────────────────────────────────────────

#[tokio::test]
async fn should_list_every_created_user() {
    let store = MemoryStore::new();
    let usecase = ListUsersUseCase {
        repo: store.user_repo(),
    };
    assert!(usecase.execute().await.unwrap().is_empty());

    seed_user(&store, jane()).await;
    seed_user(&store, user_input("John", "john@example.com", "john")).await;

    let users = usecase.execute().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_user() {
    let store = MemoryStore::new();
    let usecase = GetUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase.execute(999).await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

// ── UpdateUserUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_user_and_keep_creation_date() {
    let store = MemoryStore::new();
    let user = seed_user(&store, jane()).await;
    let usecase = UpdateUserUseCase {
        repo: store.user_repo(),
    };

    let updated = usecase
        .execute(user.id, user_input("Janet", "janet@example.com", "janet"))
        .await
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Janet");
    assert_eq!(updated.email, "janet@example.com");
    assert_eq!(updated.creation_date, user.creation_date);
    assert!(updated.last_modified_date >= user.last_modified_date);
}

#[tokio::test]
async fn should_allow_update_that_keeps_own_email_and_username() {
    let store = MemoryStore::new();
    let user = seed_user(&store, jane()).await;
    let usecase = UpdateUserUseCase {
        repo: store.user_repo(),
    };

    let updated = usecase
        .execute(user.id, user_input("Jane Doe", "jane@example.com", "jane"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Jane Doe");
}

#[tokio::test]
async fn should_reject_update_taking_another_users_email() {
    let store = MemoryStore::new();
    seed_user(&store, jane()).await;
    let john = seed_user(&store, user_input("John", "john@example.com", "john")).await;
    let usecase = UpdateUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase
        .execute(john.id, user_input("John", "jane@example.com", "john"))
        .await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_user() {
    let store = MemoryStore::new();
    let usecase = UpdateUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase.execute(42, jane()).await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_check_fields_before_existence_on_update() {
    let store = MemoryStore::new();
    let usecase = UpdateUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase.execute(42, UserInput::default()).await;
    assert!(
        matches!(result, Err(TrackerServiceError::MissingFields)),
        "expected MissingFields, got {result:?}"
    );
}

// ── DeleteUserUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_user_once() {
    let store = MemoryStore::new();
    let user = seed_user(&store, jane()).await;
    let usecase = DeleteUserUseCase {
        repo: store.user_repo(),
    };

    usecase.execute(user.id).await.unwrap();
    assert_eq!(store.user_count(), 0);

    let result = usecase.execute(user.id).await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_surface_storage_failure_as_internal() {
    let store = MemoryStore::new();
    store.fail_storage();
    let usecase = CreateUserUseCase {
        repo: store.user_repo(),
    };

    let result = usecase.execute(jane()).await;
    assert!(
        matches!(result, Err(TrackerServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );

    store.restore_storage();
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn should_answer_update_from_the_write_itself() {
    let store = MemoryStore::new();
    let user = seed_user(&store, jane()).await;
    store.fail_storage_after_next_write();

    let updated = UpdateUserUseCase {
        repo: store.user_repo(),
    }
    .execute(user.id, user_input("Janet", "janet@example.com", "janet"))
    .await
    .unwrap();
    assert_eq!(updated.name, "Janet");

    store.restore_storage();
    let stored = GetUserUseCase {
        repo: store.user_repo(),
    }
    .execute(user.id)
    .await
    .unwrap();
    assert_eq!(stored.email, "janet@example.com");
}
