use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// Admin
///
/// Canonical administrator record from the `admins` table, including the
/// password hash. Internal use only: administrators are created by an
/// out-of-band seed process and never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// AdminIdentity
///
/// The administrator projection safe to expose: what login returns and what
/// the auth layer resolves for authenticated requests. Never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub email: String,
}

/// Sponsor
///
/// An organization funding one or more scholarships. Titles are unique
/// ignoring case; the uniqueness check lives in the create handler.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sponsor {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_active: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// ScholarshipType
///
/// A scholarship category. The slug is derived from the title by the write
/// path (`slug::slugify`) and recomputed whenever the title changes; it is
/// never accepted from clients.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScholarshipType {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub is_active: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// CoverageArea
///
/// Geographic scope of a scholarship. Stored as text in the database with the
/// variant name as the value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[ts(export)]
pub enum CoverageArea {
    #[default]
    India,
    Abroad,
}

/// Scholarship
///
/// The primary listing record. `sponsor_id` and `type_id` reference Sponsor
/// and ScholarshipType rows; the references are validated by the write
/// handlers, not by the store, so deleting a referenced entity leaves a
/// dangling reference here.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Scholarship {
    pub id: Uuid,
    pub name: String,
    /// Derived from `name` on every write that changes it.
    pub slug: String,
    pub catchy_phrase: Option<String>,
    pub description: String,
    /// Serialized as `sponsor`: the wire format carries the bare reference.
    #[serde(rename = "sponsor")]
    pub sponsor_id: Uuid,
    /// `type` is a reserved keyword in Rust, so the field is renamed internally.
    #[serde(rename = "type")]
    pub type_id: Uuid,
    pub coverage_area: CoverageArea,
    pub eligibility_criteria: Vec<String>,
    pub documents_required: Vec<String>,
    pub benefits: Vec<String>,
    #[ts(type = "string")]
    pub application_start_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub application_deadline: DateTime<Utc>,
    pub is_active: bool,
    pub is_featured: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// ScholarshipRecord
///
/// A scholarship as returned by the paginated listing: the sponsor and type
/// references resolved to their full records via the listing join.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScholarshipRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub catchy_phrase: Option<String>,
    pub description: String,
    pub sponsor: Sponsor,
    #[serde(rename = "type")]
    pub scholarship_type: ScholarshipType,
    pub coverage_area: CoverageArea,
    pub eligibility_criteria: Vec<String>,
    pub documents_required: Vec<String>,
    pub benefits: Vec<String>,
    #[ts(type = "string")]
    pub application_start_date: DateTime<Utc>,
    #[ts(type = "string")]
    pub application_deadline: DateTime<Utc>,
    pub is_active: bool,
    pub is_featured: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for POST /admin/login. Fields are optional so that a missing
/// field produces the documented 400 message rather than a framework rejection.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// SponsorRequest
///
/// Input payload for sponsor create and update; both operations require the
/// full title + description pair. Presence is validated in the handler.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SponsorRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// ScholarshipTypeRequest
///
/// Input payload for type create and update. The slug is always derived
/// server-side from the submitted title.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ScholarshipTypeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// CreateScholarshipRequest
///
/// Input payload for POST /admin/create-scholarship-details. The handler
/// validates presence of the required fields (name, description, sponsor,
/// type, coverageArea, both dates) and rejects references to missing
/// sponsor/type records before inserting.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateScholarshipRequest {
    pub name: Option<String>,
    pub catchy_phrase: Option<String>,
    pub description: Option<String>,
    pub sponsor: Option<Uuid>,
    #[serde(rename = "type")]
    pub scholarship_type: Option<Uuid>,
    pub coverage_area: Option<CoverageArea>,
    #[serde(default)]
    pub eligibility_criteria: Vec<String>,
    #[serde(default)]
    pub documents_required: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[ts(type = "string | null")]
    pub application_start_date: Option<DateTime<Utc>>,
    #[ts(type = "string | null")]
    pub application_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
}

/// NewScholarship
///
/// Validated create payload handed to the repository: required fields
/// resolved, slug already derived. Internal to the write path.
#[derive(Debug, Clone)]
pub struct NewScholarship {
    pub name: String,
    pub slug: String,
    pub catchy_phrase: Option<String>,
    pub description: String,
    pub sponsor_id: Uuid,
    pub type_id: Uuid,
    pub coverage_area: CoverageArea,
    pub eligibility_criteria: Vec<String>,
    pub documents_required: Vec<String>,
    pub benefits: Vec<String>,
    pub application_start_date: DateTime<Utc>,
    pub application_deadline: DateTime<Utc>,
    pub is_featured: bool,
}

/// UpdateScholarshipRequest
///
/// Partial update payload for PUT /admin/scholarship-update/{id}. This is an
/// explicit allow-list of the mutable fields: unknown keys are rejected at
/// deserialization, and `slug`/`id`/`createdAt` are never settable. A field
/// that is absent keeps its stored value.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct UpdateScholarshipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catchy_phrase: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<Uuid>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scholarship_type: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_area: Option<CoverageArea>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_criteria: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub application_start_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub application_deadline: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

// --- Response Schemas (Output) ---

/// ApiMessage
///
/// Bare `{ message }` body used by logout and the delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ApiMessage {
    pub message: String,
}

/// DataResponse
///
/// The `{ message, data }` envelope wrapping entity payloads on create,
/// update, toggle, and list responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

/// LoginResponse
///
/// Successful login payload: the signed session token plus the administrator
/// identity (without the password hash).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub admin: AdminIdentity,
}

/// ScholarshipStats
///
/// Global summary counters computed over the entire scholarship collection,
/// independent of any search or status filter on the listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, ToSchema, FromRow, Default, PartialEq, Eq)]
#[ts(export)]
pub struct ScholarshipStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub featured: i64,
}

/// ScholarshipListResponse
///
/// Output of GET /admin/view-all-scholarships: one page of joined records plus
/// pagination totals and the global stats block.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScholarshipListResponse {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub stats: ScholarshipStats,
    pub data: Vec<ScholarshipRecord>,
}

/// DropdownItem
///
/// Minimal `{ _id, title }` projection for the sponsor/type dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct DropdownItem {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
}

/// DropdownResponse
///
/// `{ data }` wrapper for the dropdown endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DropdownResponse {
    pub data: Vec<DropdownItem>,
}
