use crate::{
    AppState, auth,
    error::ApiError,
    models::{
        AdminIdentity, ApiMessage, CreateScholarshipRequest, DataResponse, DropdownResponse,
        LoginRequest, LoginResponse, NewScholarship, Scholarship, ScholarshipListResponse,
        ScholarshipRecord, ScholarshipType, ScholarshipTypeRequest, Sponsor, SponsorRequest,
        UpdateScholarshipRequest,
    },
    password,
    repository::{SCHOLARSHIP_PAGE_SIZE, StatusFilter},
    slug::slugify,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

// --- Filter Structs ---

/// ScholarshipListQuery
///
/// Accepted query parameters of GET /admin/view-all-scholarships. The page is
/// taken as a raw string so that a non-numeric value falls back to page 1
/// instead of producing a framework rejection.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ScholarshipListQuery {
    /// Page number, 1-based. Non-numeric or missing defaults to 1.
    pub page: Option<String>,
    /// Free-text search over scholarship name, sponsor title, and type title.
    pub search: Option<String>,
    /// One of all | active | inactive | featured. Anything else means all.
    pub status: Option<String>,
}

// --- Validation Helpers ---

/// Trims an optional field, treating whitespace-only input as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Shared presence check for the sponsor/type payloads: both fields are
/// required on create *and* update.
fn require_title_description(
    title: Option<String>,
    description: Option<String>,
) -> Result<(String, String), ApiError> {
    match (non_empty(title), non_empty(description)) {
        (Some(t), Some(d)) => Ok((t, d)),
        _ => Err(ApiError::Validation(
            "Title and description are required".to_string(),
        )),
    }
}

fn active_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

// --- Session Handlers ---

/// login
///
/// [Public Route] Verifies the administrator's credentials and issues a
/// 1-day session token. The same 401 message covers an unknown email and a
/// wrong password so the response does not leak which half failed.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = match (non_empty(payload.email), payload.password) {
        (Some(e), Some(p)) if !p.is_empty() => (e, p),
        _ => {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }
    };

    let admin = state
        .repo
        .find_admin_by_email(&email)
        .await
        .map_err(ApiError::db("Server error during login"))?
        .ok_or_else(|| ApiError::Auth("Invalid email or password".to_string()))?;

    if !password::verify_password(&password, &admin.password_hash)? {
        return Err(ApiError::Auth("Invalid email or password".to_string()));
    }

    let token = auth::issue_token(admin.id, &admin.email, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        admin: AdminIdentity {
            id: admin.id,
            email: admin.email,
        },
    }))
}

/// logout
///
/// [Public Route] Stateless no-op: tokens cannot be revoked server-side, so
/// logging out is entirely the client discarding its token.
#[utoipa::path(
    post,
    path = "/admin/logout",
    responses((status = 200, description = "Logout successful", body = ApiMessage))
)]
pub async fn logout() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Logout successful".to_string(),
    })
}

// --- Sponsor Handlers ---

/// create_sponsor
///
/// [Protected Route] Creates a sponsor after checking the case-insensitive
/// title uniqueness invariant.
#[utoipa::path(
    post,
    path = "/admin/create-sponsors",
    request_body = SponsorRequest,
    responses(
        (status = 201, description = "Created", body = Sponsor),
        (status = 400, description = "Missing fields or duplicate title")
    )
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    Json(payload): Json<SponsorRequest>,
) -> Result<(StatusCode, Json<DataResponse<Sponsor>>), ApiError> {
    let (title, description) = require_title_description(payload.title, payload.description)?;

    if state
        .repo
        .find_sponsor_by_title(&title)
        .await
        .map_err(ApiError::db("Server error while creating sponsor"))?
        .is_some()
    {
        return Err(ApiError::Duplicate("Sponsor type already exists".to_string()));
    }

    let sponsor = state
        .repo
        .create_sponsor(&title, &description)
        .await
        .map_err(ApiError::db("Server error while creating sponsor"))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Scholarship sponsor created successfully".to_string(),
            data: sponsor,
        }),
    ))
}

/// get_sponsors
///
/// [Protected Route] Lists all sponsors, newest first, regardless of status.
#[utoipa::path(
    get,
    path = "/admin/sponsors",
    responses((status = 200, description = "Sponsors", body = [Sponsor]))
)]
pub async fn get_sponsors(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Sponsor>>>, ApiError> {
    let sponsors = state
        .repo
        .get_sponsors()
        .await
        .map_err(ApiError::db("Server error while fetching sponsors"))?;

    Ok(Json(DataResponse {
        message: "Sponsors fetched successfully".to_string(),
        data: sponsors,
    }))
}

/// update_sponsor
///
/// [Protected Route] Full replacement of title and description.
#[utoipa::path(
    put,
    path = "/admin/sponsors/{id}",
    params(("id" = Uuid, Path, description = "Sponsor ID")),
    request_body = SponsorRequest,
    responses(
        (status = 200, description = "Updated", body = Sponsor),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_sponsor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SponsorRequest>,
) -> Result<Json<DataResponse<Sponsor>>, ApiError> {
    let (title, description) = require_title_description(payload.title, payload.description)?;

    let sponsor = state
        .repo
        .update_sponsor(id, &title, &description)
        .await
        .map_err(ApiError::db("Server error while updating sponsor"))?
        .ok_or_else(|| ApiError::NotFound("Sponsor not found".to_string()))?;

    Ok(Json(DataResponse {
        message: "Sponsor updated successfully".to_string(),
        data: sponsor,
    }))
}

/// delete_sponsor
///
/// [Protected Route] Hard delete. Scholarships referencing the sponsor keep
/// their dangling reference and silently drop out of the joined listing.
#[utoipa::path(
    delete,
    path = "/admin/sponsors/{id}",
    params(("id" = Uuid, Path, description = "Sponsor ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_sponsor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiMessage>, ApiError> {
    let deleted = state
        .repo
        .delete_sponsor(id)
        .await
        .map_err(ApiError::db("Server error while deleting sponsor"))?;

    if !deleted {
        return Err(ApiError::NotFound("Sponsor not found".to_string()));
    }

    Ok(Json(ApiMessage {
        message: "Sponsor deleted successfully".to_string(),
    }))
}

/// toggle_sponsor_status
///
/// [Protected Route] Flips `isActive`. Toggling twice restores the original value.
#[utoipa::path(
    patch,
    path = "/admin/sponsors/status/{id}",
    params(("id" = Uuid, Path, description = "Sponsor ID")),
    responses(
        (status = 200, description = "Toggled", body = Sponsor),
        (status = 404, description = "Not Found")
    )
)]
pub async fn toggle_sponsor_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DataResponse<Sponsor>>, ApiError> {
    let sponsor = state
        .repo
        .toggle_sponsor_status(id)
        .await
        .map_err(ApiError::db("Server error while updating status"))?
        .ok_or_else(|| ApiError::NotFound("Sponsor not found".to_string()))?;

    Ok(Json(DataResponse {
        message: format!("Sponsor is now {}", active_label(sponsor.is_active)),
        data: sponsor,
    }))
}

// --- Scholarship Type Handlers ---

/// create_scholarship_type
///
/// [Protected Route] Creates a type; the slug is derived from the title here,
/// in the write path, never by the store.
#[utoipa::path(
    post,
    path = "/admin/create-scholarshiptype",
    request_body = ScholarshipTypeRequest,
    responses(
        (status = 201, description = "Created", body = ScholarshipType),
        (status = 400, description = "Missing fields or duplicate title")
    )
)]
pub async fn create_scholarship_type(
    State(state): State<AppState>,
    Json(payload): Json<ScholarshipTypeRequest>,
) -> Result<(StatusCode, Json<DataResponse<ScholarshipType>>), ApiError> {
    let (title, description) = require_title_description(payload.title, payload.description)?;

    if state
        .repo
        .find_type_by_title(&title)
        .await
        .map_err(ApiError::db("Server error while creating scholarship type"))?
        .is_some()
    {
        return Err(ApiError::Duplicate(
            "Scholarship type already exists".to_string(),
        ));
    }

    let slug = slugify(&title);
    let scholarship_type = state
        .repo
        .create_type(&title, &slug, &description)
        .await
        .map_err(ApiError::db("Server error while creating scholarship type"))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Scholarship type created successfully".to_string(),
            data: scholarship_type,
        }),
    ))
}

/// get_scholarship_types
///
/// [Protected Route] Lists all types, newest first.
#[utoipa::path(
    get,
    path = "/admin/scholarship-types",
    responses((status = 200, description = "Types", body = [ScholarshipType]))
)]
pub async fn get_scholarship_types(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ScholarshipType>>>, ApiError> {
    let types = state
        .repo
        .get_types()
        .await
        .map_err(ApiError::db("Server error while fetching scholarship types"))?;

    Ok(Json(DataResponse {
        message: "Scholarship types fetched successfully".to_string(),
        data: types,
    }))
}

/// update_scholarship_type
///
/// [Protected Route] Replaces title and description; the slug is recomputed
/// from the new title so the two can never drift apart.
#[utoipa::path(
    put,
    path = "/admin/scholarship-type/{id}",
    params(("id" = Uuid, Path, description = "Type ID")),
    request_body = ScholarshipTypeRequest,
    responses(
        (status = 200, description = "Updated", body = ScholarshipType),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_scholarship_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ScholarshipTypeRequest>,
) -> Result<Json<DataResponse<ScholarshipType>>, ApiError> {
    let (title, description) = require_title_description(payload.title, payload.description)?;

    let slug = slugify(&title);
    let scholarship_type = state
        .repo
        .update_type(id, &title, &slug, &description)
        .await
        .map_err(ApiError::db("Server error while updating scholarship type"))?
        .ok_or_else(|| ApiError::NotFound("Scholarship type not found".to_string()))?;

    Ok(Json(DataResponse {
        message: "Scholarship type updated successfully".to_string(),
        data: scholarship_type,
    }))
}

/// delete_scholarship_type
///
/// [Protected Route] Hard delete; no cascade to scholarships.
#[utoipa::path(
    delete,
    path = "/admin/scholarship-type/{id}",
    params(("id" = Uuid, Path, description = "Type ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_scholarship_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiMessage>, ApiError> {
    let deleted = state
        .repo
        .delete_type(id)
        .await
        .map_err(ApiError::db("Server error while deleting scholarship type"))?;

    if !deleted {
        return Err(ApiError::NotFound(
            "Scholarship type not found".to_string(),
        ));
    }

    Ok(Json(ApiMessage {
        message: "Scholarship type deleted successfully".to_string(),
    }))
}

/// toggle_scholarship_type_status
///
/// [Protected Route] Flips `isActive` on a type.
#[utoipa::path(
    patch,
    path = "/admin/scholarship-type/status/{id}",
    params(("id" = Uuid, Path, description = "Type ID")),
    responses(
        (status = 200, description = "Toggled", body = ScholarshipType),
        (status = 404, description = "Not Found")
    )
)]
pub async fn toggle_scholarship_type_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DataResponse<ScholarshipType>>, ApiError> {
    let scholarship_type = state
        .repo
        .toggle_type_status(id)
        .await
        .map_err(ApiError::db("Server error while updating status"))?
        .ok_or_else(|| ApiError::NotFound("Scholarship type not found".to_string()))?;

    Ok(Json(DataResponse {
        message: format!(
            "Scholarship type is now {}",
            active_label(scholarship_type.is_active)
        ),
        data: scholarship_type,
    }))
}

// --- Scholarship Handlers ---

/// create_scholarship
///
/// [Protected Route] Creates a listing. Beyond presence validation, the
/// handler enforces referential integrity: the sponsor and type identifiers
/// must resolve to existing records at write time (the store itself carries
/// no such constraint).
#[utoipa::path(
    post,
    path = "/admin/create-scholarship-details",
    request_body = CreateScholarshipRequest,
    responses(
        (status = 201, description = "Created", body = Scholarship),
        (status = 400, description = "Missing required fields or unresolvable reference")
    )
)]
pub async fn create_scholarship(
    State(state): State<AppState>,
    Json(payload): Json<CreateScholarshipRequest>,
) -> Result<(StatusCode, Json<DataResponse<Scholarship>>), ApiError> {
    let CreateScholarshipRequest {
        name,
        catchy_phrase,
        description,
        sponsor,
        scholarship_type,
        coverage_area,
        eligibility_criteria,
        documents_required,
        benefits,
        application_start_date,
        application_deadline,
        is_featured,
    } = payload;

    let (
        Some(name),
        Some(description),
        Some(sponsor_id),
        Some(type_id),
        Some(coverage_area),
        Some(application_start_date),
        Some(application_deadline),
    ) = (
        non_empty(name),
        non_empty(description),
        sponsor,
        scholarship_type,
        coverage_area,
        application_start_date,
        application_deadline,
    )
    else {
        return Err(ApiError::Validation(
            "All required fields must be provided".to_string(),
        ));
    };

    if state
        .repo
        .get_sponsor(sponsor_id)
        .await
        .map_err(ApiError::db("Server error while creating scholarship"))?
        .is_none()
    {
        return Err(ApiError::Validation("Sponsor does not exist".to_string()));
    }

    if state
        .repo
        .get_type(type_id)
        .await
        .map_err(ApiError::db("Server error while creating scholarship"))?
        .is_none()
    {
        return Err(ApiError::Validation(
            "Scholarship type does not exist".to_string(),
        ));
    }

    let new = NewScholarship {
        slug: slugify(&name),
        name,
        catchy_phrase: non_empty(catchy_phrase),
        description,
        sponsor_id,
        type_id,
        coverage_area,
        eligibility_criteria,
        documents_required,
        benefits,
        application_start_date,
        application_deadline,
        is_featured,
    };

    let scholarship = state
        .repo
        .create_scholarship(new)
        .await
        .map_err(ApiError::db("Server error while creating scholarship"))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Scholarship created successfully".to_string(),
            data: scholarship,
        }),
    ))
}

/// list_scholarships
///
/// [Protected Route] The paginated, searchable, filterable listing. Pages past
/// the end return an empty data array with the correct totals, and the stats
/// block always reflects the whole collection.
#[utoipa::path(
    get,
    path = "/admin/view-all-scholarships",
    params(ScholarshipListQuery),
    responses((status = 200, description = "One page of scholarships", body = ScholarshipListResponse))
)]
pub async fn list_scholarships(
    State(state): State<AppState>,
    Query(query): Query<ScholarshipListQuery>,
) -> Result<Json<ScholarshipListResponse>, ApiError> {
    let page = query
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let status = StatusFilter::parse(query.status.as_deref());

    let (data, total_count): (Vec<ScholarshipRecord>, i64) = state
        .repo
        .list_scholarships(page, search, status)
        .await
        .map_err(ApiError::db("Server error while fetching scholarships"))?;

    let stats = state
        .repo
        .get_scholarship_stats()
        .await
        .map_err(ApiError::db("Server error while fetching scholarships"))?;

    let total_pages = (total_count + SCHOLARSHIP_PAGE_SIZE - 1) / SCHOLARSHIP_PAGE_SIZE;

    Ok(Json(ScholarshipListResponse {
        current_page: page,
        total_pages,
        total_count,
        stats,
        data,
    }))
}

/// update_scholarship
///
/// [Protected Route] Partial update over the explicit allow-list of mutable
/// fields. A changed name recomputes the slug; changed sponsor/type references
/// are re-validated against existing records.
#[utoipa::path(
    put,
    path = "/admin/scholarship-update/{id}",
    params(("id" = Uuid, Path, description = "Scholarship ID")),
    request_body = UpdateScholarshipRequest,
    responses(
        (status = 200, description = "Updated", body = Scholarship),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScholarshipRequest>,
) -> Result<Json<DataResponse<Scholarship>>, ApiError> {
    if let Some(sponsor_id) = payload.sponsor {
        if state
            .repo
            .get_sponsor(sponsor_id)
            .await
            .map_err(ApiError::db("Server error while updating scholarship"))?
            .is_none()
        {
            return Err(ApiError::Validation("Sponsor does not exist".to_string()));
        }
    }

    if let Some(type_id) = payload.scholarship_type {
        if state
            .repo
            .get_type(type_id)
            .await
            .map_err(ApiError::db("Server error while updating scholarship"))?
            .is_none()
        {
            return Err(ApiError::Validation(
                "Scholarship type does not exist".to_string(),
            ));
        }
    }

    // Slug stays in sync with the name: recomputed here whenever the name changes.
    let slug = payload.name.as_deref().map(slugify);

    let scholarship = state
        .repo
        .update_scholarship(id, payload, slug)
        .await
        .map_err(ApiError::db("Server error while updating scholarship"))?
        .ok_or_else(|| ApiError::NotFound("Scholarship not found".to_string()))?;

    Ok(Json(DataResponse {
        message: "Scholarship updated successfully".to_string(),
        data: scholarship,
    }))
}

/// delete_scholarship
///
/// [Protected Route] Permanent removal.
#[utoipa::path(
    delete,
    path = "/admin/scholarship-delete/{id}",
    params(("id" = Uuid, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiMessage),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiMessage>, ApiError> {
    let deleted = state
        .repo
        .delete_scholarship(id)
        .await
        .map_err(ApiError::db("Server error while deleting scholarship"))?;

    if !deleted {
        return Err(ApiError::NotFound("Scholarship not found".to_string()));
    }

    Ok(Json(ApiMessage {
        message: "Scholarship deleted successfully".to_string(),
    }))
}

/// toggle_scholarship_status
///
/// [Protected Route] Flips `isActive` on a listing.
#[utoipa::path(
    patch,
    path = "/admin/scholarship/status/{id}",
    params(("id" = Uuid, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Toggled", body = Scholarship),
        (status = 404, description = "Not Found")
    )
)]
pub async fn toggle_scholarship_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DataResponse<Scholarship>>, ApiError> {
    let scholarship = state
        .repo
        .toggle_scholarship_status(id)
        .await
        .map_err(ApiError::db("Server error while updating status"))?
        .ok_or_else(|| ApiError::NotFound("Scholarship not found".to_string()))?;

    Ok(Json(DataResponse {
        message: format!(
            "Scholarship is now {}",
            active_label(scholarship.is_active)
        ),
        data: scholarship,
    }))
}

// --- Dropdown Handlers ---

/// sponsor_dropdown
///
/// [Protected Route] Active sponsors as `{_id, title}`, sorted by title, for
/// the scholarship form.
#[utoipa::path(
    get,
    path = "/admin/dropdown/sponsors",
    responses((status = 200, description = "Active sponsors", body = DropdownResponse))
)]
pub async fn sponsor_dropdown(
    State(state): State<AppState>,
) -> Result<Json<DropdownResponse>, ApiError> {
    let data = state
        .repo
        .get_sponsor_dropdown()
        .await
        .map_err(ApiError::db("Error fetching sponsors"))?;

    Ok(Json(DropdownResponse { data }))
}

/// type_dropdown
///
/// [Protected Route] Active types as `{_id, title}`, sorted by title.
#[utoipa::path(
    get,
    path = "/admin/dropdown/types",
    responses((status = 200, description = "Active types", body = DropdownResponse))
)]
pub async fn type_dropdown(
    State(state): State<AppState>,
) -> Result<Json<DropdownResponse>, ApiError> {
    let data = state
        .repo
        .get_type_dropdown()
        .await
        .map_err(ApiError::db("Error fetching scholarship types"))?;

    Ok(Json(DropdownResponse { data }))
}
