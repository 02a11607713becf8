use crate::models::{
    Admin, DropdownItem, NewScholarship, Scholarship, ScholarshipRecord, ScholarshipStats,
    ScholarshipType, Sponsor, UpdateScholarshipRequest,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, postgres::PgRow, query_builder::QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

/// Fixed page size of the scholarship listing.
pub const SCHOLARSHIP_PAGE_SIZE: i64 = 5;

/// StatusFilter
///
/// Parsed `status` query parameter of the listing endpoint. At most one
/// status predicate applies; anything unrecognized behaves as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
    Featured,
}

impl StatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("active") => StatusFilter::Active,
            Some("inactive") => StatusFilter::Inactive,
            Some("featured") => StatusFilter::Featured,
            _ => StatusFilter::All,
        }
    }
}

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations: single-record
/// CRUD, the case-insensitive title lookups backing the uniqueness checks, and
/// the joined/filtered listing aggregation. Handlers interact with this trait
/// only, never with a concrete driver.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Administrators ---
    // Lookup only: admins are seeded out-of-band and never written by the API.
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error>;
    async fn get_admin(&self, id: Uuid) -> Result<Option<Admin>, sqlx::Error>;

    // --- Sponsors ---
    async fn create_sponsor(&self, title: &str, description: &str)
    -> Result<Sponsor, sqlx::Error>;
    // Case-insensitive exact-title lookup backing the uniqueness invariant.
    async fn find_sponsor_by_title(&self, title: &str) -> Result<Option<Sponsor>, sqlx::Error>;
    // Newest first.
    async fn get_sponsors(&self) -> Result<Vec<Sponsor>, sqlx::Error>;
    async fn get_sponsor(&self, id: Uuid) -> Result<Option<Sponsor>, sqlx::Error>;
    async fn update_sponsor(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Option<Sponsor>, sqlx::Error>;
    // Returns true if a row was deleted.
    async fn delete_sponsor(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    // Single-statement involution: is_active = NOT is_active.
    async fn toggle_sponsor_status(&self, id: Uuid) -> Result<Option<Sponsor>, sqlx::Error>;
    // Active sponsors only, {_id, title}, sorted by title ascending.
    async fn get_sponsor_dropdown(&self) -> Result<Vec<DropdownItem>, sqlx::Error>;

    // --- Scholarship types ---
    async fn create_type(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<ScholarshipType, sqlx::Error>;
    async fn find_type_by_title(&self, title: &str)
    -> Result<Option<ScholarshipType>, sqlx::Error>;
    async fn get_types(&self) -> Result<Vec<ScholarshipType>, sqlx::Error>;
    async fn get_type(&self, id: Uuid) -> Result<Option<ScholarshipType>, sqlx::Error>;
    // The slug is supplied by the caller, already recomputed from the new title.
    async fn update_type(
        &self,
        id: Uuid,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Option<ScholarshipType>, sqlx::Error>;
    async fn delete_type(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    async fn toggle_type_status(&self, id: Uuid) -> Result<Option<ScholarshipType>, sqlx::Error>;
    async fn get_type_dropdown(&self) -> Result<Vec<DropdownItem>, sqlx::Error>;

    // --- Scholarships ---
    async fn create_scholarship(&self, new: NewScholarship) -> Result<Scholarship, sqlx::Error>;
    async fn get_scholarship(&self, id: Uuid) -> Result<Option<Scholarship>, sqlx::Error>;
    /// The listing query engine: joined, searched, filtered, newest-first page
    /// plus the total count of the filtered set. Pages past the end yield an
    /// empty page with the correct count.
    async fn list_scholarships(
        &self,
        page: i64,
        search: Option<&str>,
        status: StatusFilter,
    ) -> Result<(Vec<ScholarshipRecord>, i64), sqlx::Error>;
    /// Global counters over the whole collection, ignoring search/status.
    async fn get_scholarship_stats(&self) -> Result<ScholarshipStats, sqlx::Error>;
    /// Partial update: absent fields keep their stored value. `slug` is
    /// supplied whenever the caller changed the name.
    async fn update_scholarship(
        &self,
        id: Uuid,
        req: UpdateScholarshipRequest,
        slug: Option<String>,
    ) -> Result<Option<Scholarship>, sqlx::Error>;
    async fn delete_scholarship(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    async fn toggle_scholarship_status(&self, id: Uuid)
    -> Result<Option<Scholarship>, sqlx::Error>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by PostgreSQL.
/// All queries are runtime-checked (`query_as` / `QueryBuilder`), so the crate
/// builds without a live database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SCHOLARSHIP_COLUMNS: &str = "id, name, slug, catchy_phrase, description, sponsor_id, \
     type_id, coverage_area, eligibility_criteria, documents_required, benefits, \
     application_start_date, application_deadline, is_active, is_featured, created_at, updated_at";

/// push_listing_filters
///
/// Appends the shared WHERE clause of the listing engine (free-text search
/// across scholarship name / sponsor title / type title, plus at most one
/// status predicate) to both the count and the data query. All user input is
/// bound, never interpolated.
fn push_listing_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    search: Option<&str>,
    status: StatusFilter,
) {
    let mut clause = " WHERE ";

    if let Some(term) = search {
        let pattern = format!("%{term}%");
        builder.push(clause);
        builder.push("(s.name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR sp.title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR t.title ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
        clause = " AND ";
    }

    match status {
        StatusFilter::Active => {
            builder.push(clause);
            builder.push("s.is_active = true");
        }
        StatusFilter::Inactive => {
            builder.push(clause);
            builder.push("s.is_active = false");
        }
        StatusFilter::Featured => {
            builder.push(clause);
            builder.push("s.is_featured = true");
        }
        StatusFilter::All => {}
    }
}

/// scholarship_record_from_row
///
/// Maps one joined listing row (scholarship columns plus `sponsor_*` and
/// `type_*` aliases) into the nested `ScholarshipRecord`.
fn scholarship_record_from_row(row: &PgRow) -> Result<ScholarshipRecord, sqlx::Error> {
    Ok(ScholarshipRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        catchy_phrase: row.try_get("catchy_phrase")?,
        description: row.try_get("description")?,
        sponsor: Sponsor {
            id: row.try_get("sponsor_id")?,
            title: row.try_get("sponsor_title")?,
            description: row.try_get("sponsor_description")?,
            is_active: row.try_get("sponsor_is_active")?,
            created_at: row.try_get("sponsor_created_at")?,
            updated_at: row.try_get("sponsor_updated_at")?,
        },
        scholarship_type: ScholarshipType {
            id: row.try_get("type_id")?,
            title: row.try_get("type_title")?,
            slug: row.try_get("type_slug")?,
            description: row.try_get("type_description")?,
            is_active: row.try_get("type_is_active")?,
            created_at: row.try_get("type_created_at")?,
            updated_at: row.try_get("type_updated_at")?,
        },
        coverage_area: row.try_get("coverage_area")?,
        eligibility_criteria: row.try_get("eligibility_criteria")?,
        documents_required: row.try_get("documents_required")?,
        benefits: row.try_get("benefits")?,
        application_start_date: row.try_get("application_start_date")?,
        application_deadline: row.try_get("application_deadline")?,
        is_active: row.try_get("is_active")?,
        is_featured: row.try_get("is_featured")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl Repository for PostgresRepository {
    // --- ADMINISTRATORS ---

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT id, email, password_hash FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_admin(&self, id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>("SELECT id, email, password_hash FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    // --- SPONSORS ---

    async fn create_sponsor(
        &self,
        title: &str,
        description: &str,
    ) -> Result<Sponsor, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            r#"
            INSERT INTO sponsors (id, title, description, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, true, NOW(), NOW())
            RETURNING id, title, description, is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    /// Case-insensitive exact match on the whole title, not a substring search.
    async fn find_sponsor_by_title(&self, title: &str) -> Result<Option<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            r#"
            SELECT id, title, description, is_active, created_at, updated_at
            FROM sponsors
            WHERE LOWER(title) = LOWER($1)
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_sponsors(&self) -> Result<Vec<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            r#"
            SELECT id, title, description, is_active, created_at, updated_at
            FROM sponsors
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_sponsor(&self, id: Uuid) -> Result<Option<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            "SELECT id, title, description, is_active, created_at, updated_at FROM sponsors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_sponsor(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Option<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            r#"
            UPDATE sponsors
            SET title = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_sponsor(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_sponsor_status(&self, id: Uuid) -> Result<Option<Sponsor>, sqlx::Error> {
        sqlx::query_as::<_, Sponsor>(
            r#"
            UPDATE sponsors
            SET is_active = NOT is_active, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_sponsor_dropdown(&self) -> Result<Vec<DropdownItem>, sqlx::Error> {
        sqlx::query_as::<_, DropdownItem>(
            "SELECT id, title FROM sponsors WHERE is_active = true ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    // --- SCHOLARSHIP TYPES ---

    async fn create_type(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<ScholarshipType, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipType>(
            r#"
            INSERT INTO scholarship_types (id, title, slug, description, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, true, NOW(), NOW())
            RETURNING id, title, slug, description, is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(slug)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_type_by_title(
        &self,
        title: &str,
    ) -> Result<Option<ScholarshipType>, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipType>(
            r#"
            SELECT id, title, slug, description, is_active, created_at, updated_at
            FROM scholarship_types
            WHERE LOWER(title) = LOWER($1)
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_types(&self) -> Result<Vec<ScholarshipType>, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipType>(
            r#"
            SELECT id, title, slug, description, is_active, created_at, updated_at
            FROM scholarship_types
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_type(&self, id: Uuid) -> Result<Option<ScholarshipType>, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipType>(
            "SELECT id, title, slug, description, is_active, created_at, updated_at FROM scholarship_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_type(
        &self,
        id: Uuid,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Option<ScholarshipType>, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipType>(
            r#"
            UPDATE scholarship_types
            SET title = $2, slug = $3, description = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(slug)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_type(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scholarship_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_type_status(&self, id: Uuid) -> Result<Option<ScholarshipType>, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipType>(
            r#"
            UPDATE scholarship_types
            SET is_active = NOT is_active, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, description, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_type_dropdown(&self) -> Result<Vec<DropdownItem>, sqlx::Error> {
        sqlx::query_as::<_, DropdownItem>(
            "SELECT id, title FROM scholarship_types WHERE is_active = true ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    // --- SCHOLARSHIPS ---

    async fn create_scholarship(&self, new: NewScholarship) -> Result<Scholarship, sqlx::Error> {
        sqlx::query_as::<_, Scholarship>(&format!(
            r#"
            INSERT INTO scholarships
                (id, name, slug, catchy_phrase, description, sponsor_id, type_id, coverage_area,
                 eligibility_criteria, documents_required, benefits,
                 application_start_date, application_deadline, is_active, is_featured,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, true, $14, NOW(), NOW())
            RETURNING {SCHOLARSHIP_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(new.name)
        .bind(new.slug)
        .bind(new.catchy_phrase)
        .bind(new.description)
        .bind(new.sponsor_id)
        .bind(new.type_id)
        .bind(new.coverage_area)
        .bind(new.eligibility_criteria)
        .bind(new.documents_required)
        .bind(new.benefits)
        .bind(new.application_start_date)
        .bind(new.application_deadline)
        .bind(new.is_featured)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_scholarship(&self, id: Uuid) -> Result<Option<Scholarship>, sqlx::Error> {
        sqlx::query_as::<_, Scholarship>(&format!(
            "SELECT {SCHOLARSHIP_COLUMNS} FROM scholarships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// list_scholarships
    ///
    /// The two-query listing engine: a COUNT over the joined + filtered set,
    /// then the page itself, newest first. The inner joins drop scholarships
    /// whose sponsor or type reference no longer resolves.
    async fn list_scholarships(
        &self,
        page: i64,
        search: Option<&str>,
        status: StatusFilter,
    ) -> Result<(Vec<ScholarshipRecord>, i64), sqlx::Error> {
        let mut count_builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT COUNT(*) FROM scholarships s \
             JOIN sponsors sp ON sp.id = s.sponsor_id \
             JOIN scholarship_types t ON t.id = s.type_id",
        );
        push_listing_filters(&mut count_builder, search, status);

        let total_count: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT s.id, s.name, s.slug, s.catchy_phrase, s.description, s.coverage_area, \
                    s.eligibility_criteria, s.documents_required, s.benefits, \
                    s.application_start_date, s.application_deadline, \
                    s.is_active, s.is_featured, s.created_at, s.updated_at, \
                    sp.id AS sponsor_id, sp.title AS sponsor_title, \
                    sp.description AS sponsor_description, sp.is_active AS sponsor_is_active, \
                    sp.created_at AS sponsor_created_at, sp.updated_at AS sponsor_updated_at, \
                    t.id AS type_id, t.title AS type_title, t.slug AS type_slug, \
                    t.description AS type_description, t.is_active AS type_is_active, \
                    t.created_at AS type_created_at, t.updated_at AS type_updated_at \
             FROM scholarships s \
             JOIN sponsors sp ON sp.id = s.sponsor_id \
             JOIN scholarship_types t ON t.id = s.type_id",
        );
        push_listing_filters(&mut builder, search, status);

        builder.push(" ORDER BY s.created_at DESC LIMIT ");
        builder.push_bind(SCHOLARSHIP_PAGE_SIZE);
        builder.push(" OFFSET ");
        builder.push_bind((page - 1) * SCHOLARSHIP_PAGE_SIZE);

        let rows = builder.build().fetch_all(&self.pool).await?;
        let records = rows
            .iter()
            .map(scholarship_record_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total_count))
    }

    /// get_scholarship_stats
    ///
    /// Compiles the global counters in a single aggregate pass over the whole
    /// collection, independent of any listing filter.
    async fn get_scholarship_stats(&self) -> Result<ScholarshipStats, sqlx::Error> {
        sqlx::query_as::<_, ScholarshipStats>(
            r#"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE is_active) AS active,
                   COUNT(*) FILTER (WHERE NOT is_active) AS inactive,
                   COUNT(*) FILTER (WHERE is_featured) AS featured
            FROM scholarships
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }

    /// update_scholarship
    ///
    /// Partial update via COALESCE: a column changes only when the
    /// corresponding field in `req` is `Some`.
    async fn update_scholarship(
        &self,
        id: Uuid,
        req: UpdateScholarshipRequest,
        slug: Option<String>,
    ) -> Result<Option<Scholarship>, sqlx::Error> {
        sqlx::query_as::<_, Scholarship>(&format!(
            r#"
            UPDATE scholarships
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                catchy_phrase = COALESCE($4, catchy_phrase),
                description = COALESCE($5, description),
                sponsor_id = COALESCE($6, sponsor_id),
                type_id = COALESCE($7, type_id),
                coverage_area = COALESCE($8, coverage_area),
                eligibility_criteria = COALESCE($9, eligibility_criteria),
                documents_required = COALESCE($10, documents_required),
                benefits = COALESCE($11, benefits),
                application_start_date = COALESCE($12, application_start_date),
                application_deadline = COALESCE($13, application_deadline),
                is_active = COALESCE($14, is_active),
                is_featured = COALESCE($15, is_featured),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SCHOLARSHIP_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.name)
        .bind(slug)
        .bind(req.catchy_phrase)
        .bind(req.description)
        .bind(req.sponsor)
        .bind(req.scholarship_type)
        .bind(req.coverage_area)
        .bind(req.eligibility_criteria)
        .bind(req.documents_required)
        .bind(req.benefits)
        .bind(req.application_start_date)
        .bind(req.application_deadline)
        .bind(req.is_active)
        .bind(req.is_featured)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_scholarship(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scholarships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_scholarship_status(
        &self,
        id: Uuid,
    ) -> Result<Option<Scholarship>, sqlx::Error> {
        sqlx::query_as::<_, Scholarship>(&format!(
            r#"
            UPDATE scholarships
            SET is_active = NOT is_active, updated_at = NOW()
            WHERE id = $1
            RETURNING {SCHOLARSHIP_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
