use async_trait::async_trait;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, Validation, decode};
use scholarship_portal::{
    AppState,
    auth::{Claims, TOKEN_TTL_SECS},
    config::AppConfig,
    error::ApiError,
    handlers::{self, ScholarshipListQuery},
    models::{
        Admin, CreateScholarshipRequest, CoverageArea, DropdownItem, LoginRequest,
        NewScholarship, Scholarship, ScholarshipRecord, ScholarshipStats, ScholarshipType,
        ScholarshipTypeRequest, Sponsor, SponsorRequest, UpdateScholarshipRequest,
    },
    password,
    repository::{Repository, StatusFilter},
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// --- MOCK REPOSITORY IMPLEMENTATION ---

// Central control point for testing handler logic: canned returns for reads,
// small Mutex-backed state where the handler behavior under test depends on a
// mutation (status toggles) or on what the handler passed in (derived slugs).
#[derive(Default)]
pub struct MockRepoControl {
    pub admin: Option<Admin>,

    pub sponsor_by_title: Option<Sponsor>,
    pub sponsor: Mutex<Option<Sponsor>>,
    pub sponsors_to_return: Vec<Sponsor>,

    pub type_by_title: Option<ScholarshipType>,
    pub scholarship_type: Mutex<Option<ScholarshipType>>,
    pub types_to_return: Vec<ScholarshipType>,
    // Records the slug the handler passed to create_type/update_type.
    pub captured_type_slug: Mutex<Option<String>>,

    pub scholarship: Mutex<Option<Scholarship>>,
    pub listing_to_return: Vec<ScholarshipRecord>,
    pub listing_total: i64,
    pub stats_to_return: ScholarshipStats,
    // Records the slug the handler passed to update_scholarship.
    pub captured_scholarship_slug: Mutex<Option<String>>,

    pub delete_result: bool,
    pub dropdown_to_return: Vec<DropdownItem>,
}

#[async_trait]
impl Repository for MockRepoControl {
    async fn find_admin_by_email(&self, _email: &str) -> Result<Option<Admin>, sqlx::Error> {
        Ok(self.admin.clone())
    }
    async fn get_admin(&self, _id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
        Ok(self.admin.clone())
    }

    async fn create_sponsor(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Sponsor, sqlx::Error> {
        Ok(Sponsor {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
    async fn find_sponsor_by_title(&self, _title: &str) -> Result<Option<Sponsor>, sqlx::Error> {
        Ok(self.sponsor_by_title.clone())
    }
    async fn get_sponsors(&self) -> Result<Vec<Sponsor>, sqlx::Error> {
        Ok(self.sponsors_to_return.clone())
    }
    async fn get_sponsor(&self, _id: Uuid) -> Result<Option<Sponsor>, sqlx::Error> {
        Ok(self.sponsor.lock().unwrap().clone())
    }
    async fn update_sponsor(
        &self,
        _id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Option<Sponsor>, sqlx::Error> {
        let mut stored = self.sponsor.lock().unwrap();
        if let Some(sponsor) = stored.as_mut() {
            sponsor.title = title.to_string();
            sponsor.description = description.to_string();
        }
        Ok(stored.clone())
    }
    async fn delete_sponsor(&self, _id: Uuid) -> Result<bool, sqlx::Error> {
        Ok(self.delete_result)
    }
    async fn toggle_sponsor_status(&self, _id: Uuid) -> Result<Option<Sponsor>, sqlx::Error> {
        let mut stored = self.sponsor.lock().unwrap();
        if let Some(sponsor) = stored.as_mut() {
            sponsor.is_active = !sponsor.is_active;
        }
        Ok(stored.clone())
    }
    async fn get_sponsor_dropdown(&self) -> Result<Vec<DropdownItem>, sqlx::Error> {
        Ok(self.dropdown_to_return.clone())
    }

    async fn create_type(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<ScholarshipType, sqlx::Error> {
        *self.captured_type_slug.lock().unwrap() = Some(slug.to_string());
        Ok(ScholarshipType {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
    async fn find_type_by_title(
        &self,
        _title: &str,
    ) -> Result<Option<ScholarshipType>, sqlx::Error> {
        Ok(self.type_by_title.clone())
    }
    async fn get_types(&self) -> Result<Vec<ScholarshipType>, sqlx::Error> {
        Ok(self.types_to_return.clone())
    }
    async fn get_type(&self, _id: Uuid) -> Result<Option<ScholarshipType>, sqlx::Error> {
        Ok(self.scholarship_type.lock().unwrap().clone())
    }
    async fn update_type(
        &self,
        _id: Uuid,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Option<ScholarshipType>, sqlx::Error> {
        *self.captured_type_slug.lock().unwrap() = Some(slug.to_string());
        let mut stored = self.scholarship_type.lock().unwrap();
        if let Some(t) = stored.as_mut() {
            t.title = title.to_string();
            t.slug = slug.to_string();
            t.description = description.to_string();
        }
        Ok(stored.clone())
    }
    async fn delete_type(&self, _id: Uuid) -> Result<bool, sqlx::Error> {
        Ok(self.delete_result)
    }
    async fn toggle_type_status(&self, _id: Uuid) -> Result<Option<ScholarshipType>, sqlx::Error> {
        let mut stored = self.scholarship_type.lock().unwrap();
        if let Some(t) = stored.as_mut() {
            t.is_active = !t.is_active;
        }
        Ok(stored.clone())
    }
    async fn get_type_dropdown(&self) -> Result<Vec<DropdownItem>, sqlx::Error> {
        Ok(self.dropdown_to_return.clone())
    }

    async fn create_scholarship(&self, new: NewScholarship) -> Result<Scholarship, sqlx::Error> {
        Ok(Scholarship {
            id: Uuid::new_v4(),
            name: new.name,
            slug: new.slug,
            catchy_phrase: new.catchy_phrase,
            description: new.description,
            sponsor_id: new.sponsor_id,
            type_id: new.type_id,
            coverage_area: new.coverage_area,
            eligibility_criteria: new.eligibility_criteria,
            documents_required: new.documents_required,
            benefits: new.benefits,
            application_start_date: new.application_start_date,
            application_deadline: new.application_deadline,
            is_active: true,
            is_featured: new.is_featured,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
    async fn get_scholarship(&self, _id: Uuid) -> Result<Option<Scholarship>, sqlx::Error> {
        Ok(self.scholarship.lock().unwrap().clone())
    }
    async fn list_scholarships(
        &self,
        page: i64,
        _search: Option<&str>,
        _status: StatusFilter,
    ) -> Result<(Vec<ScholarshipRecord>, i64), sqlx::Error> {
        // The mock has a single page of data; anything past it is empty,
        // mirroring the real skip/take behavior.
        let rows = if page == 1 {
            self.listing_to_return.clone()
        } else {
            vec![]
        };
        Ok((rows, self.listing_total))
    }
    async fn get_scholarship_stats(&self) -> Result<ScholarshipStats, sqlx::Error> {
        Ok(self.stats_to_return)
    }
    async fn update_scholarship(
        &self,
        _id: Uuid,
        req: UpdateScholarshipRequest,
        slug: Option<String>,
    ) -> Result<Option<Scholarship>, sqlx::Error> {
        *self.captured_scholarship_slug.lock().unwrap() = slug.clone();
        let mut stored = self.scholarship.lock().unwrap();
        if let Some(s) = stored.as_mut() {
            if let Some(name) = req.name {
                s.name = name;
            }
            if let Some(new_slug) = slug {
                s.slug = new_slug;
            }
        }
        Ok(stored.clone())
    }
    async fn delete_scholarship(&self, _id: Uuid) -> Result<bool, sqlx::Error> {
        Ok(self.delete_result)
    }
    async fn toggle_scholarship_status(
        &self,
        _id: Uuid,
    ) -> Result<Option<Scholarship>, sqlx::Error> {
        let mut stored = self.scholarship.lock().unwrap();
        if let Some(s) = stored.as_mut() {
            s.is_active = !s.is_active;
        }
        Ok(stored.clone())
    }
}

// --- TEST UTILITIES ---

const TEST_ID: Uuid = Uuid::from_u128(123);

fn create_test_state(repo_control: MockRepoControl) -> AppState {
    AppState {
        repo: Arc::new(repo_control),
        config: AppConfig::default(),
    }
}

fn test_admin(plain_password: &str) -> Admin {
    Admin {
        id: Uuid::from_u128(456),
        email: "admin@scholarships.example".to_string(),
        password_hash: password::hash_password(plain_password).unwrap(),
    }
}

fn list_query(page: Option<&str>, search: Option<&str>, status: Option<&str>) -> ScholarshipListQuery {
    ScholarshipListQuery {
        page: page.map(str::to_string),
        search: search.map(str::to_string),
        status: status.map(str::to_string),
    }
}

// --- SESSION TESTS ---

#[tokio::test]
async fn login_returns_token_decodable_to_admin_identity() {
    let admin = test_admin("sesame-open-123");
    let admin_id = admin.id;
    let state = create_test_state(MockRepoControl {
        admin: Some(admin),
        ..Default::default()
    });

    let result = handlers::login(
        State(state),
        Json(LoginRequest {
            email: Some("admin@scholarships.example".to_string()),
            password: Some("sesame-open-123".to_string()),
        }),
    )
    .await;

    let Json(body) = result.unwrap();
    assert_eq!(body.message, "Login successful");
    assert_eq!(body.admin.id, admin_id);
    assert_eq!(body.admin.email, "admin@scholarships.example");

    // The token must decode with the configured secret and carry the admin's
    // identifier, email, and a validity window of exactly one day.
    let secret = AppConfig::default().jwt_secret;
    let decoded = decode::<Claims>(
        &body.token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .unwrap();
    assert_eq!(decoded.claims.sub, admin_id);
    assert_eq!(decoded.claims.email, "admin@scholarships.example");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, TOKEN_TTL_SECS);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let state = create_test_state(MockRepoControl {
        admin: Some(test_admin("right-password")),
        ..Default::default()
    });

    let err = handlers::login(
        State(state),
        Json(LoginRequest {
            email: Some("admin@scholarships.example".to_string()),
            password: Some("wrong-password".to_string()),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let state = create_test_state(MockRepoControl::default());

    let err = handlers::login(
        State(state),
        Json(LoginRequest {
            email: Some("nobody@scholarships.example".to_string()),
            password: Some("whatever".to_string()),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_requires_both_fields() {
    let state = create_test_state(MockRepoControl::default());

    let err = handlers::login(
        State(state),
        Json(LoginRequest {
            email: Some("admin@scholarships.example".to_string()),
            password: None,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Email and password are required");
}

#[tokio::test]
async fn logout_is_a_stateless_success() {
    let Json(body) = handlers::logout().await;
    assert_eq!(body.message, "Logout successful");
}

// --- SPONSOR TESTS ---

#[tokio::test]
async fn create_sponsor_success() {
    let state = create_test_state(MockRepoControl::default());

    let (status, Json(body)) = handlers::create_sponsor(
        State(state),
        Json(SponsorRequest {
            title: Some("  Tata Trust  ".to_string()),
            description: Some("Philanthropic arm of the group".to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, "Scholarship sponsor created successfully");
    assert_eq!(body.data.title, "Tata Trust");
    assert!(body.data.is_active);
}

#[tokio::test]
async fn create_sponsor_duplicate_title_rejected() {
    let state = create_test_state(MockRepoControl {
        sponsor_by_title: Some(Sponsor {
            title: "Tata Trust".to_string(),
            ..Default::default()
        }),
        ..Default::default()
    });

    let err = handlers::create_sponsor(
        State(state),
        Json(SponsorRequest {
            title: Some("tata trust".to_string()),
            description: Some("different description".to_string()),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Sponsor type already exists");
}

#[tokio::test]
async fn create_sponsor_requires_title_and_description() {
    let state = create_test_state(MockRepoControl::default());

    let err = handlers::create_sponsor(
        State(state),
        Json(SponsorRequest {
            title: Some("   ".to_string()),
            description: None,
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Title and description are required");
}

#[tokio::test]
async fn update_sponsor_not_found() {
    let state = create_test_state(MockRepoControl::default());

    let err = handlers::update_sponsor(
        State(state),
        Path(TEST_ID),
        Json(SponsorRequest {
            title: Some("New Title".to_string()),
            description: Some("New description".to_string()),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "Sponsor not found");
}

#[tokio::test]
async fn delete_sponsor_not_found() {
    let state = create_test_state(MockRepoControl {
        delete_result: false,
        ..Default::default()
    });

    let err = handlers::delete_sponsor(State(state), Path(TEST_ID))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn toggle_sponsor_twice_restores_original_status() {
    let state = create_test_state(MockRepoControl {
        sponsor: Mutex::new(Some(Sponsor {
            is_active: true,
            ..Default::default()
        })),
        ..Default::default()
    });

    let Json(first) = handlers::toggle_sponsor_status(State(state.clone()), Path(TEST_ID))
        .await
        .unwrap();
    assert!(!first.data.is_active);
    assert_eq!(first.message, "Sponsor is now Inactive");

    let Json(second) = handlers::toggle_sponsor_status(State(state), Path(TEST_ID))
        .await
        .unwrap();
    assert!(second.data.is_active);
    assert_eq!(second.message, "Sponsor is now Active");
}

// --- SCHOLARSHIP TYPE TESTS ---

#[tokio::test]
async fn create_type_derives_slug_from_title() {
    let state = create_test_state(MockRepoControl::default());

    let (status, Json(body)) = handlers::create_scholarship_type(
        State(state),
        Json(ScholarshipTypeRequest {
            title: Some("Merit Based!!".to_string()),
            description: Some("Awarded on academic merit".to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.data.slug, "merit-based");
}

#[tokio::test]
async fn update_type_recomputes_slug() {
    let state = create_test_state(MockRepoControl {
        scholarship_type: Mutex::new(Some(ScholarshipType {
            title: "Old Title".to_string(),
            slug: "old-title".to_string(),
            ..Default::default()
        })),
        ..Default::default()
    });

    let Json(body) = handlers::update_scholarship_type(
        State(state),
        Path(TEST_ID),
        Json(ScholarshipTypeRequest {
            title: Some("STEM Research".to_string()),
            description: Some("Updated".to_string()),
        }),
    )
    .await
    .unwrap();

    assert_eq!(body.data.slug, "stem-research");
}

#[tokio::test]
async fn create_type_duplicate_title_rejected() {
    let state = create_test_state(MockRepoControl {
        type_by_title: Some(ScholarshipType::default()),
        ..Default::default()
    });

    let err = handlers::create_scholarship_type(
        State(state),
        Json(ScholarshipTypeRequest {
            title: Some("Merit".to_string()),
            description: Some("dup".to_string()),
        }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Scholarship type already exists");
}

// --- SCHOLARSHIP TESTS ---

fn full_create_request() -> CreateScholarshipRequest {
    CreateScholarshipRequest {
        name: Some("National Merit Award".to_string()),
        catchy_phrase: Some("Fund your future".to_string()),
        description: Some("Covers tuition for top scorers".to_string()),
        sponsor: Some(Uuid::from_u128(1)),
        scholarship_type: Some(Uuid::from_u128(2)),
        coverage_area: Some(CoverageArea::India),
        eligibility_criteria: vec!["Class 12 pass".to_string()],
        documents_required: vec!["Marksheet".to_string()],
        benefits: vec!["Full tuition".to_string()],
        application_start_date: Some(Utc::now()),
        application_deadline: Some(Utc::now()),
        is_featured: true,
    }
}

#[tokio::test]
async fn create_scholarship_success_derives_slug() {
    let state = create_test_state(MockRepoControl {
        sponsor: Mutex::new(Some(Sponsor::default())),
        scholarship_type: Mutex::new(Some(ScholarshipType::default())),
        ..Default::default()
    });

    let (status, Json(body)) =
        handlers::create_scholarship(State(state), Json(full_create_request()))
            .await
            .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.message, "Scholarship created successfully");
    assert_eq!(body.data.slug, "national-merit-award");
    assert!(body.data.is_featured);
    assert!(body.data.is_active);
}

#[tokio::test]
async fn create_scholarship_missing_required_field() {
    let state = create_test_state(MockRepoControl::default());

    let mut request = full_create_request();
    request.coverage_area = None;

    let err = handlers::create_scholarship(State(state), Json(request))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "All required fields must be provided");
}

#[tokio::test]
async fn create_scholarship_rejects_unknown_sponsor() {
    // Sponsor lookup returns None while the type would resolve.
    let state = create_test_state(MockRepoControl {
        scholarship_type: Mutex::new(Some(ScholarshipType::default())),
        ..Default::default()
    });

    let err = handlers::create_scholarship(State(state), Json(full_create_request()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Sponsor does not exist");
}

#[tokio::test]
async fn update_scholarship_recomputes_slug_on_name_change() {
    let state = create_test_state(MockRepoControl {
        scholarship: Mutex::new(Some(Scholarship::default())),
        ..Default::default()
    });

    let Json(body) = handlers::update_scholarship(
        State(state),
        Path(TEST_ID),
        Json(UpdateScholarshipRequest {
            name: Some("Brand New Name".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    // The handler must hand the derived slug to the store, not leave it stale.
    assert_eq!(body.data.slug, "brand-new-name");
}

#[tokio::test]
async fn update_scholarship_rejects_unknown_keys() {
    // deny_unknown_fields: the slug is derived state and must not be settable.
    let result =
        serde_json::from_str::<UpdateScholarshipRequest>(r#"{"slug": "sneaky-override"}"#);
    assert!(result.is_err());

    // The documented mutable fields still parse.
    let result = serde_json::from_str::<UpdateScholarshipRequest>(
        r#"{"name": "New", "isFeatured": true, "coverageArea": "Abroad"}"#,
    );
    assert!(result.is_ok());
}

#[tokio::test]
async fn toggle_scholarship_twice_is_involution() {
    let state = create_test_state(MockRepoControl {
        scholarship: Mutex::new(Some(Scholarship {
            is_active: false,
            ..Default::default()
        })),
        ..Default::default()
    });

    let Json(first) = handlers::toggle_scholarship_status(State(state.clone()), Path(TEST_ID))
        .await
        .unwrap();
    assert!(first.data.is_active);
    assert_eq!(first.message, "Scholarship is now Active");

    let Json(second) = handlers::toggle_scholarship_status(State(state), Path(TEST_ID))
        .await
        .unwrap();
    assert!(!second.data.is_active);
    assert_eq!(second.message, "Scholarship is now Inactive");
}

// --- LISTING TESTS ---

#[tokio::test]
async fn listing_page_past_the_end_returns_empty_with_totals() {
    let state = create_test_state(MockRepoControl {
        listing_to_return: vec![ScholarshipRecord::default(); 3],
        listing_total: 3,
        stats_to_return: ScholarshipStats {
            total: 3,
            active: 2,
            inactive: 1,
            featured: 1,
        },
        ..Default::default()
    });

    let Json(body) = handlers::list_scholarships(
        State(state),
        Query(list_query(Some("99"), None, None)),
    )
    .await
    .unwrap();

    assert_eq!(body.current_page, 99);
    assert_eq!(body.total_pages, 1);
    assert_eq!(body.total_count, 3);
    assert_eq!(body.stats.total, 3);
    assert!(body.data.is_empty());
}

#[tokio::test]
async fn listing_non_numeric_page_defaults_to_one() {
    let state = create_test_state(MockRepoControl {
        listing_to_return: vec![ScholarshipRecord::default(); 2],
        listing_total: 2,
        stats_to_return: ScholarshipStats {
            total: 2,
            active: 2,
            inactive: 0,
            featured: 0,
        },
        ..Default::default()
    });

    let Json(body) = handlers::list_scholarships(
        State(state),
        Query(list_query(Some("not-a-number"), Some(""), Some("bogus"))),
    )
    .await
    .unwrap();

    assert_eq!(body.current_page, 1);
    assert_eq!(body.data.len(), 2);
    assert_eq!(body.total_pages, 1);
}

#[tokio::test]
async fn listing_stats_reflect_mock_globals() {
    // Stats come from the unfiltered aggregate, independent of the page data.
    let state = create_test_state(MockRepoControl {
        listing_to_return: vec![],
        listing_total: 0,
        stats_to_return: ScholarshipStats {
            total: 7,
            active: 4,
            inactive: 3,
            featured: 2,
        },
        ..Default::default()
    });

    let Json(body) = handlers::list_scholarships(
        State(state),
        Query(list_query(None, Some("no-match"), Some("featured"))),
    )
    .await
    .unwrap();

    assert_eq!(body.total_count, 0);
    assert_eq!(body.total_pages, 0);
    assert_eq!(body.stats.total, 7);
    assert_eq!(body.stats.featured, 2);
}

// --- DROPDOWN TESTS ---

#[tokio::test]
async fn dropdown_items_serialize_identifier_as_underscore_id() {
    let state = create_test_state(MockRepoControl {
        dropdown_to_return: vec![DropdownItem {
            id: TEST_ID,
            title: "Tata Trust".to_string(),
        }],
        ..Default::default()
    });

    let Json(body) = handlers::sponsor_dropdown(State(state)).await.unwrap();

    let json = serde_json::to_value(&body).unwrap();
    let first = &json["data"][0];
    assert_eq!(first["_id"], serde_json::json!(TEST_ID));
    assert_eq!(first["title"], "Tata Trust");
    assert!(first.get("id").is_none());
}

// --- ERROR SHAPE TEST ---

#[tokio::test]
async fn api_errors_render_as_message_bodies() {
    use axum::response::IntoResponse;

    let response = ApiError::NotFound("Scholarship not found".to_string()).into_response();
    let (parts, body) = response.into_parts();
    assert_eq!(parts.status, StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "Scholarship not found");
}
