//! Bestiary Storage Layer
//!
//! Implements the MonsterStore trait using SQLite.
//!
//! # Architecture
//!
//! - One `monsters` table holding raw input, derived output, and the
//!   `processed` flag the batch orchestrator resumes from
//! - Trait lists are stored as a JSON array column
//! - Imports upsert by slug, so duplicate slugs in a bulk import update
//!   the existing row instead of failing
//!
//! # Examples
//!
//! ```no_run
//! use bestiary_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for monster operations
//! ```

#![warn(missing_docs)]

use bestiary_domain::traits::MonsterStore;
use bestiary_domain::{Monster, MonsterId, ProcessedUpdate, SpecialTrait};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Monster not found
    #[error("Monster not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Counts reported by the status command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    /// Total monster records
    pub total: usize,
    /// Records already processed
    pub processed: usize,
    /// Total extracted traits across processed records
    pub traits: usize,
}

/// SQLite-based implementation of MonsterStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its
/// own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bestiary_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("bestiary.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        // Bounded wait on a locked database rather than failing immediately
        conn.busy_timeout(Duration::from_secs(5))?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Import a monster record, upserting by slug
    ///
    /// A duplicate slug updates the existing row in place: the raw
    /// description is replaced and the derived fields are reset so the
    /// pipeline reprocesses the record on the next batch run.
    pub fn import_monster(
        &mut self,
        slug: &str,
        name: &str,
        raw_description: &str,
    ) -> Result<MonsterId, StoreError> {
        if let Some(existing) = self.get_by_slug(slug)? {
            self.conn.execute(
                "UPDATE monsters
                 SET name = ?2, raw_description = ?3,
                     cleaned_description = NULL, traits = '[]', processed = 0
                 WHERE slug = ?1",
                params![slug, name, raw_description],
            )?;
            return Ok(existing.id);
        }

        let id = MonsterId::new();
        self.conn.execute(
            "INSERT INTO monsters (id, slug, name, raw_description)
             VALUES (?1, ?2, ?3, ?4)",
            params![&Self::id_to_bytes(id), slug, name, raw_description],
        )?;
        Ok(id)
    }

    /// Get a monster by ID
    pub fn get_monster(&self, id: MonsterId) -> Result<Option<Monster>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, slug, name, raw_description, cleaned_description, traits, processed
                 FROM monsters WHERE id = ?1",
                params![&Self::id_to_bytes(id)],
                Self::row_to_monster,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// Get a monster by slug
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Monster>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, slug, name, raw_description, cleaned_description, traits, processed
                 FROM monsters WHERE slug = ?1",
                params![slug],
                Self::row_to_monster,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// Count totals for status reporting
    pub fn counts(&self) -> Result<StoreCounts, StoreError> {
        let total: usize =
            self.conn
                .query_row("SELECT COUNT(*) FROM monsters", [], |row| row.get(0))?;
        let processed: usize = self.conn.query_row(
            "SELECT COUNT(*) FROM monsters WHERE processed = 1",
            [],
            |row| row.get(0),
        )?;

        let mut traits = 0usize;
        let mut stmt = self
            .conn
            .prepare("SELECT traits FROM monsters WHERE processed = 1")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        for json in rows {
            traits += Self::traits_from_json(&json?)?.len();
        }

        Ok(StoreCounts {
            total,
            processed,
            traits,
        })
    }

    /// Convert MonsterId to bytes for storage
    fn id_to_bytes(id: MonsterId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to MonsterId
    fn bytes_to_id(bytes: &[u8]) -> Result<MonsterId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for MonsterId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(MonsterId::from_value(u128::from_be_bytes(arr)))
    }

    /// Serialize a trait list to the JSON column format
    fn traits_to_json(traits: &[SpecialTrait]) -> String {
        let values: Vec<serde_json::Value> = traits
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                })
            })
            .collect();
        serde_json::Value::Array(values).to_string()
    }

    /// Deserialize a trait list from the JSON column format
    fn traits_from_json(json: &str) -> Result<Vec<SpecialTrait>, StoreError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| StoreError::InvalidData(format!("traits column: {}", e)))?;
        let array = value
            .as_array()
            .ok_or_else(|| StoreError::InvalidData("traits column is not an array".to_string()))?;

        array
            .iter()
            .map(|entry| {
                let name = entry
                    .get("name")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| StoreError::InvalidData("trait missing 'name'".to_string()))?;
                let description = entry.get("description").and_then(|v| v.as_str()).ok_or_else(
                    || StoreError::InvalidData("trait missing 'description'".to_string()),
                )?;
                Ok(SpecialTrait::new(name, description))
            })
            .collect()
    }

    /// Map a result row to a Monster
    fn row_to_monster(row: &Row<'_>) -> rusqlite::Result<Monster> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        let traits_json: String = row.get(5)?;
        let traits = Self::traits_from_json(&traits_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Monster {
            id,
            slug: row.get(1)?,
            name: row.get(2)?,
            raw_description: row.get(3)?,
            cleaned_description: row.get(4)?,
            traits,
            processed: row.get::<_, i64>(6)? != 0,
        })
    }
}

impl MonsterStore for SqliteStore {
    type Error = StoreError;

    fn fetch_unprocessed(&self, limit: Option<usize>) -> Result<Vec<Monster>, Self::Error> {
        let mut sql = String::from(
            "SELECT id, slug, name, raw_description, cleaned_description, traits, processed
             FROM monsters WHERE processed = 0 ORDER BY id",
        );
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let monsters = stmt
            .query_map([], Self::row_to_monster)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(monsters)
    }

    fn update_record(&mut self, id: MonsterId, update: ProcessedUpdate) -> Result<(), Self::Error> {
        let affected = self.conn.execute(
            "UPDATE monsters
             SET cleaned_description = ?2, traits = ?3, processed = 1
             WHERE id = ?1",
            params![
                &Self::id_to_bytes(id),
                &update.cleaned_description,
                &Self::traits_to_json(&update.traits),
            ],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
