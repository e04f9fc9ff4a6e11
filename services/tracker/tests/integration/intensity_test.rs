use fittrack_tracker::domain::repository::Store;
use fittrack_tracker::domain::types::IntensityInput;
use fittrack_tracker::error::TrackerServiceError;
use fittrack_tracker::usecase::intensity::{
    CreateIntensityUseCase, DeleteIntensityUseCase, GetIntensityUseCase, ListIntensitiesUseCase,
    UpdateIntensityUseCase,
};
use fittrack_tracker::usecase::nutrition::CreateNutritionUseCase;

use crate::helpers::{
    MemoryStore, intensity_input, jane, nutrition_input, seed_intensity, seed_user,
};

// ── CreateIntensityUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_create_intensity() {
    let store = MemoryStore::new();
    let usecase = CreateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let intensity = usecase.execute(intensity_input("HI", 3)).await.unwrap();
    assert_eq!(intensity.kind, "HI");
    assert_eq!(intensity.value, 3);
}

#[tokio::test]
async fn should_reject_duplicate_intensity_type() {
    let store = MemoryStore::new();
    seed_intensity(&store, "HI", 3).await;
    let usecase = CreateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let result = usecase.execute(intensity_input("HI", 5)).await;
    assert!(
        matches!(result, Err(TrackerServiceError::IntensityAlreadyExists)),
        "expected IntensityAlreadyExists, got {result:?}"
    );
    assert_eq!(store.intensity_count(), 1);
}

#[tokio::test]
async fn should_accept_zero_value() {
    let store = MemoryStore::new();
    let usecase = CreateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let intensity = usecase.execute(intensity_input("REST", 0)).await.unwrap();
    assert_eq!(intensity.value, 0);
}

#[tokio::test]
async fn should_reject_intensity_missing_any_required_field() {
    let store = MemoryStore::new();
    let usecase = CreateIntensityUseCase {
        repo: store.intensity_repo(),
    };
    let cases: [(&str, fn(&mut IntensityInput)); 2] = [
        ("type", |input| input.kind = None),
        ("value", |input| input.value = None),
    ];

    for (field, clear) in cases {
        let mut input = intensity_input("HI", 3);
        clear(&mut input);
        let result = usecase.execute(input).await;
        assert!(
            matches!(result, Err(TrackerServiceError::MissingFields)),
            "without {field}: expected MissingFields, got {result:?}"
        );
    }
    assert_eq!(store.intensity_count(), 0);
}

// ── Get / List ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_and_list_intensities() {
    let store = MemoryStore::new();
    let hi = seed_intensity(&store, "HI", 3).await;
    seed_intensity(&store, "LI", 1).await;

    let fetched = GetIntensityUseCase {
        repo: store.intensity_repo(),
    }
    .execute(hi.id)
    .await
    .unwrap();
    assert_eq!(fetched.kind, "HI");

    let all = ListIntensitiesUseCase {
        repo: store.intensity_repo(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(all.len(), 2);
}

// ── UpdateIntensityUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_update_intensity() {
    let store = MemoryStore::new();
    let hi = seed_intensity(&store, "HI", 3).await;
    let usecase = UpdateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let updated = usecase
        .execute(hi.id, intensity_input("LI", 1))
        .await
        .unwrap();
    assert_eq!(updated.id, hi.id);
    assert_eq!(updated.kind, "LI");
    assert_eq!(updated.value, 1);
}

#[tokio::test]
async fn should_allow_update_keeping_own_type() {
    let store = MemoryStore::new();
    let hi = seed_intensity(&store, "HI", 3).await;
    let usecase = UpdateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let updated = usecase
        .execute(hi.id, intensity_input("HI", 4))
        .await
        .unwrap();
    assert_eq!(updated.value, 4);
}

#[tokio::test]
async fn should_reject_update_to_taken_type() {
    let store = MemoryStore::new();
    seed_intensity(&store, "HI", 3).await;
    let li = seed_intensity(&store, "LI", 1).await;
    let usecase = UpdateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let result = usecase.execute(li.id, intensity_input("HI", 1)).await;
    assert!(
        matches!(result, Err(TrackerServiceError::IntensityAlreadyExists)),
        "expected IntensityAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_intensity() {
    let store = MemoryStore::new();
    let usecase = UpdateIntensityUseCase {
        repo: store.intensity_repo(),
    };

    let result = usecase.execute(9, intensity_input("HI", 3)).await;
    assert!(
        matches!(result, Err(TrackerServiceError::IntensityNotFound)),
        "expected IntensityNotFound, got {result:?}"
    );
}

// ── DeleteIntensityUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_unreferenced_intensity() {
    let store = MemoryStore::new();
    let hi = seed_intensity(&store, "HI", 3).await;
    let usecase = DeleteIntensityUseCase {
        repo: store.intensity_repo(),
    };

    usecase.execute(hi.id).await.unwrap();
    let result = usecase.execute(hi.id).await;
    assert!(
        matches!(result, Err(TrackerServiceError::IntensityNotFound)),
        "expected IntensityNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_refuse_to_delete_referenced_intensity() {
    let store = MemoryStore::new();
    let user = seed_user(&store, jane()).await;
    let hi = seed_intensity(&store, "HI", 3).await;
    CreateNutritionUseCase {
        nutrition: store.nutrition_repo(),
        users: store.user_repo(),
        intensities: store.intensity_repo(),
    }
    .execute(nutrition_input("2025-01-16T08:00:00Z", user.id, hi.id))
    .await
    .unwrap();

    let result = DeleteIntensityUseCase {
        repo: store.intensity_repo(),
    }
    .execute(hi.id)
    .await;
    assert!(
        matches!(result, Err(TrackerServiceError::IntensityInUse)),
        "expected IntensityInUse, got {result:?}"
    );
    assert_eq!(store.intensity_count(), 1);
}

#[tokio::test]
async fn should_answer_update_from_the_write_itself() {
    let store = MemoryStore::new();
    let hi = seed_intensity(&store, "HI", 3).await;
    store.fail_storage_after_next_write();

    let updated = UpdateIntensityUseCase {
        repo: store.intensity_repo(),
    }
    .execute(hi.id, intensity_input("LI", 1))
    .await
    .unwrap();
    assert_eq!(updated.kind, "LI");
    assert_eq!(updated.value, 1);

    store.restore_storage();
    let stored = GetIntensityUseCase {
        repo: store.intensity_repo(),
    }
    .execute(hi.id)
    .await
    .unwrap();
    assert_eq!(stored.kind, "LI");
}
