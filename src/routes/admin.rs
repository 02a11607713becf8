use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

/// Admin Router Module
///
/// All functional routes of the API live under the /admin nest. The session
/// routes (login/logout) are open; everything else must sit behind the auth
/// gate, which `create_router` applies as a route layer over
/// `protected_routes()` before merging the two halves.

/// Routes reachable without a token: obtaining a session and the stateless logout.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        // POST /admin/login
        // Credential check -> 1-day bearer token.
        .route("/login", post(handlers::login))
        // POST /admin/logout
        // Stateless no-op; always succeeds.
        .route("/logout", post(handlers::logout))
}

/// Routes requiring a verified administrator token.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        // --- Sponsors ---
        .route("/create-sponsors", post(handlers::create_sponsor))
        .route("/sponsors", get(handlers::get_sponsors))
        .route(
            "/sponsors/{id}",
            put(handlers::update_sponsor).delete(handlers::delete_sponsor),
        )
        .route("/sponsors/status/{id}", patch(handlers::toggle_sponsor_status))
        // --- Scholarship types ---
        .route(
            "/create-scholarshiptype",
            post(handlers::create_scholarship_type),
        )
        .route("/scholarship-types", get(handlers::get_scholarship_types))
        .route(
            "/scholarship-type/{id}",
            put(handlers::update_scholarship_type).delete(handlers::delete_scholarship_type),
        )
        .route(
            "/scholarship-type/status/{id}",
            patch(handlers::toggle_scholarship_type_status),
        )
        // --- Scholarships ---
        .route(
            "/create-scholarship-details",
            post(handlers::create_scholarship),
        )
        .route(
            "/view-all-scholarships",
            get(handlers::list_scholarships),
        )
        .route(
            "/scholarship-update/{id}",
            put(handlers::update_scholarship),
        )
        .route(
            "/scholarship-delete/{id}",
            delete(handlers::delete_scholarship),
        )
        .route(
            "/scholarship/status/{id}",
            patch(handlers::toggle_scholarship_status),
        )
        // --- Dropdowns for the scholarship form ---
        .route("/dropdown/sponsors", get(handlers::sponsor_dropdown))
        .route("/dropdown/types", get(handlers::type_dropdown))
}
