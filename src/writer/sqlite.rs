use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

use crate::classify::{CountryRecord, VisaCategory};

const CREATE_TABLES: &str = "
CREATE TABLE categories (
    key TEXT PRIMARY KEY,
    label TEXT NOT NULL,
    color TEXT NOT NULL
);
CREATE TABLE countries (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    iso_code TEXT NOT NULL,
    category TEXT NOT NULL,
    FOREIGN KEY (category) REFERENCES categories(key)
);
CREATE INDEX idx_countries_iso_code ON countries(iso_code);
";

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    pub fn new(db_path: &Path) -> Result<Self> {
        // Remove existing database if present
        if db_path.exists() {
            std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("Failed to create database")?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Self { conn })
    }

    pub fn create_tables(&self) -> Result<()> {
        self.conn
            .execute_batch(CREATE_TABLES)
            .context("Failed to create tables")?;
        Ok(())
    }

    /// Insert the category palette and every classified record in one transaction
    pub fn insert_records(&mut self, records: &[CountryRecord]) -> Result<u64> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO categories (key, label, color) VALUES (?1, ?2, ?3)")?;
            for category in VisaCategory::ALL {
                stmt.execute(params![category.key(), category.label(), category.color()])?;
            }

            let mut stmt = tx.prepare_cached(
                "INSERT INTO countries (name, iso_code, category) VALUES (?1, ?2, ?3)",
            )?;
            for record in records {
                stmt.execute(params![record.name, record.iso_code, record.category.key()])
                    .with_context(|| format!("Failed to insert: {}", record.name))?;
            }
        }

        tx.commit()?;
        Ok(records.len() as u64)
    }

    pub fn finalize(self) -> Result<()> {
        self.conn.execute_batch("PRAGMA optimize;")?;
        Ok(())
    }
}

/// Write the classified table to a fresh SQLite database
pub fn export_to_sqlite(records: &[CountryRecord], output_db: &Path) -> Result<u64> {
    let mut writer = SqliteWriter::new(output_db)?;
    writer.create_tables()?;
    let count = writer.insert_records(records)?;
    writer.finalize()?;

    info!(path = ?output_db, records = count, "Exported classified table");
    Ok(count)
}
