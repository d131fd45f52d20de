use super::StoreError;
use chrono::Utc;
use common::model::review::{Review, ReviewFilter, ReviewSource, ReviewUpdate};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const COLUMNS: &str =
    "id, name, role, content, rating, created_at, image, location, project, source, url";

/// Review table backed by a SQLite file.
#[derive(Debug, Clone)]
pub struct TestimonialStore {
    path: PathBuf,
}

impl TestimonialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the `reviews` table if it does not exist yet.
    pub fn init(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS reviews (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                role TEXT,
                content TEXT NOT NULL,
                rating INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                image TEXT,
                location TEXT,
                project TEXT,
                source TEXT,
                url TEXT
            );",
        )?;
        Ok(())
    }

    /// Every stored review matching `filter`, newest first.
    pub fn get_all(&self, filter: &ReviewFilter) -> Result<Vec<Review>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC, id"
        ))?;
        let reviews = stmt
            .query_map([], row_to_review)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reviews.into_iter().filter(|r| filter.matches(r)).collect())
    }

    pub fn get_by_id(&self, id: &str) -> Result<Review, StoreError> {
        let conn = self.connect()?;
        find(&conn, id)?.ok_or(StoreError::NotFound)
    }

    /// Inserts a new review and returns it as stored.
    ///
    /// A blank id is replaced by a UUID v4 and a blank `createdAt` by the
    /// current time. An existing id is reported as `AlreadyExists`; the stored
    /// row is never overwritten.
    pub fn create(&self, review: &Review) -> Result<Review, StoreError> {
        let mut review = review.clone();
        if review.id.trim().is_empty() {
            review.id = Uuid::new_v4().to_string();
        }
        if review.created_at.trim().is_empty() {
            review.created_at = Utc::now().to_rfc3339();
        }
        validate(&review)?;

        let conn = self.connect()?;
        let inserted = conn.execute(
            &format!("INSERT INTO reviews ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"),
            params![
                &review.id,
                &review.name,
                &review.role,
                &review.content,
                review.rating,
                &review.created_at,
                &review.image,
                &review.location,
                &review.project,
                review.source.map(|s| s.as_str()),
                &review.url,
            ],
        );
        match inserted {
            Ok(_) => Ok(review),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Applies a partial update to an existing review and returns the result.
    pub fn update(&self, id: &str, update: &ReviewUpdate) -> Result<Review, StoreError> {
        if update.is_empty() {
            return Err(StoreError::NoUpdates);
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut review = find(&tx, id)?.ok_or(StoreError::NotFound)?;
        update.apply(&mut review);
        validate(&review)?;

        tx.execute(
            "UPDATE reviews
             SET name = ?2, role = ?3, content = ?4, rating = ?5, created_at = ?6,
                 image = ?7, location = ?8, project = ?9, source = ?10, url = ?11
             WHERE id = ?1",
            params![
                &review.id,
                &review.name,
                &review.role,
                &review.content,
                review.rating,
                &review.created_at,
                &review.image,
                &review.location,
                &review.project,
                review.source.map(|s| s.as_str()),
                &review.url,
            ],
        )?;
        tx.commit()?;
        Ok(review)
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn find(conn: &Connection, id: &str) -> Result<Option<Review>, StoreError> {
    let sql = format!("SELECT {COLUMNS} FROM reviews WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], row_to_review).optional()?)
}

fn row_to_review(row: &Row<'_>) -> rusqlite::Result<Review> {
    let source: Option<String> = row.get(9)?;
    Ok(Review {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        content: row.get(3)?,
        rating: row.get(4)?,
        created_at: row.get(5)?,
        image: row.get(6)?,
        location: row.get(7)?,
        project: row.get(8)?,
        source: source.as_deref().map(ReviewSource::from_label),
        url: row.get(10)?,
    })
}

fn validate(review: &Review) -> Result<(), StoreError> {
    if review.name.trim().is_empty() {
        return Err(StoreError::Invalid("name must not be empty".to_string()));
    }
    if !(1..=5).contains(&review.rating) {
        return Err(StoreError::Invalid(format!(
            "rating must be between 1 and 5, got {}",
            review.rating
        )));
    }
    Ok(())
}
