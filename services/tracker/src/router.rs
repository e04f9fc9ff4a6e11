use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use fittrack_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::repository::Store;
use crate::handlers::{
    health::{healthz, readyz},
    intensity::{
        create_intensity, delete_intensity, get_intensity, list_intensities, update_intensity,
    },
    nutrition::{
        create_nutrition, delete_nutrition, get_nutrition, list_nutrition, update_nutrition,
    },
    user::{create_user, delete_user, get_user, list_users, update_user},
    weight::{create_weight, delete_weight, get_weight, list_weights, update_weight},
};

/// Build the service router. CORS is applied by the caller since the
/// allow-list comes from configuration.
pub fn build_router<S: Store>(state: S) -> Router {
    let api = Router::new()
        // Users
        .route("/users", get(list_users::<S>))
        .route("/users/{id}", get(get_user::<S>))
        .route("/users/create-user", post(create_user::<S>))
        .route("/users/update-user/{id}", put(update_user::<S>))
        .route("/users/delete-user/{id}", delete(delete_user::<S>))
        // Weight
        .route("/weight", get(list_weights::<S>))
        .route("/weight/{id}", get(get_weight::<S>))
        .route("/weight/create-weight", post(create_weight::<S>))
        .route("/weight/update-weight/{id}", put(update_weight::<S>))
        .route("/weight/delete-weight/{id}", delete(delete_weight::<S>))
        // Nutrition
        .route("/nutrition", get(list_nutrition::<S>))
        .route("/nutrition/{id}", get(get_nutrition::<S>))
        .route("/nutrition/create-nutrition", post(create_nutrition::<S>))
        .route("/nutrition/update-nutrition/{id}", put(update_nutrition::<S>))
        .route(
            "/nutrition/delete-nutrition/{id}",
            delete(delete_nutrition::<S>),
        )
        // Intensity
        .route("/intensity", get(list_intensities::<S>))
        .route("/intensity/{id}", get(get_intensity::<S>))
        .route("/intensity/create-intensity", post(create_intensity::<S>))
        .route(
            "/intensity/update-intensity/{id}",
            put(update_intensity::<S>),
        )
        .route(
            "/intensity/delete-intensity/{id}",
            delete(delete_intensity::<S>),
        );

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz::<S>))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
