use axum::{
    Router,
    extract::{FromRef, Request},
    http::{HeaderName, HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod slug;

// Module for routing segregation (Public, Admin).
pub mod routes;
use auth::AuthAdmin; // The resolved authenticated administrator identity.
use routes::{admin, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use error::ApiError;
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the application.
/// It aggregates all API paths and data schemas decorated with the
/// `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros.
/// The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::login, handlers::logout,
        handlers::create_sponsor, handlers::get_sponsors, handlers::update_sponsor,
        handlers::delete_sponsor, handlers::toggle_sponsor_status,
        handlers::create_scholarship_type, handlers::get_scholarship_types,
        handlers::update_scholarship_type, handlers::delete_scholarship_type,
        handlers::toggle_scholarship_type_status,
        handlers::create_scholarship, handlers::list_scholarships,
        handlers::update_scholarship, handlers::delete_scholarship,
        handlers::toggle_scholarship_status,
        handlers::sponsor_dropdown, handlers::type_dropdown
    ),
    components(
        schemas(
            models::AdminIdentity, models::Sponsor, models::ScholarshipType,
            models::Scholarship, models::ScholarshipRecord, models::CoverageArea,
            models::LoginRequest, models::LoginResponse, models::ApiMessage,
            models::SponsorRequest, models::ScholarshipTypeRequest,
            models::CreateScholarshipRequest, models::UpdateScholarshipRequest,
            models::ScholarshipStats, models::ScholarshipListResponse,
            models::DropdownItem, models::DropdownResponse,
            error::ErrorBody,
        )
    ),
    tags(
        (name = "scholarship-portal", description = "Scholarship Admin API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Implements the **Unified State Pattern**: the single, thread-safe, immutable
/// container holding all essential application services and configuration,
/// shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: abstracts database access behind the trait object.
    pub repo: RepositoryState,
    /// Configuration: the loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations allow extractors to selectively pull components from
// the shared AppState, which is what lets AuthAdmin resolve the repository and
// the token secret without handlers threading them through.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the protected /admin routes.
///
/// *Mechanism*: It attempts to extract `AuthAdmin` from the request. Since
/// `AuthAdmin` implements `FromRequestParts`, if authentication (token
/// validation, DB lookup) fails, the extractor rejects the request with a 401
/// JSON body before the handler runs. On success the request proceeds.
async fn auth_middleware(_admin: AuthAdmin, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    // A single allowed origin with credentials, matching the admin frontend.
    let origin = state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .expect("FATAL: ALLOWED_ORIGIN is not a valid header value");
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Admin Router Assembly
    // Session routes stay open; everything else is gated by the auth middleware.
    let admin_router = admin::session_routes().merge(
        admin::protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        )),
    );

    // 3. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: No middleware applied.
        .merge(public::public_routes())
        // Admin Routes: Nested under '/admin'.
        .nest("/admin", admin_router)
        // Apply the Unified State to all routes.
        .with_state(state);

    // 4. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 4a. Request ID Generation: a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 4b. Request Tracing: wraps the request/response lifecycle in a span
                // correlated by the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 4c. Request ID Propagation: returns the x-request-id header to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 5. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper used by `TraceLayer` to customize span creation: includes the
/// `x-request-id` header (if present) alongside the HTTP method and URI so
/// every log line for a single request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
