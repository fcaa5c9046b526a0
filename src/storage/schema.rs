//! Database connection and schema management.

use anyhow::Result;
use rusqlite::{Connection, Transaction};
use std::path::Path;

/// Connection manager for the harvest database.
pub struct HarvestDatabase {
    pub(crate) conn: Connection,
}

impl HarvestDatabase {
    /// Open (creating if needed) the database at `path` and ensure the
    /// schema exists. A DDL failure propagates and aborts the run.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&mut self) -> Result<()> {
        // SQLite does not enforce foreign keys unless asked per connection.
        self.conn.pragma_update(None, "foreign_keys", "ON")?;
        self.initialize_schema()
    }

    /// Idempotent DDL for the three harvest tables.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_id INTEGER PRIMARY KEY,
                avg_rank INTEGER,
                radiant_win INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS hero_picks (
                match_id INTEGER NOT NULL,
                hero_id INTEGER NOT NULL,
                team INTEGER,
                facet INTEGER,
                item_0 INTEGER NOT NULL,
                item_1 INTEGER NOT NULL,
                item_2 INTEGER NOT NULL,
                item_3 INTEGER NOT NULL,
                item_4 INTEGER NOT NULL,
                item_5 INTEGER NOT NULL,
                backpack_0 INTEGER NOT NULL,
                backpack_1 INTEGER NOT NULL,
                backpack_2 INTEGER NOT NULL,
                neutral_item INTEGER,
                kills INTEGER,
                deaths INTEGER,
                assists INTEGER,
                gold_per_min INTEGER,
                xp_per_min INTEGER,
                level INTEGER,
                net_worth INTEGER,
                aghanims_scepter INTEGER,
                aghanims_shard INTEGER,
                moonshard INTEGER,
                hero_damage INTEGER,
                tower_damage INTEGER,
                hero_healing INTEGER,
                PRIMARY KEY (match_id, hero_id),
                FOREIGN KEY (match_id) REFERENCES matches(match_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS hero_benchmarks (
                hero_id INTEGER PRIMARY KEY,
                avg_gpm REAL,
                avg_xpm REAL
            )",
            [],
        )?;

        Ok(())
    }

    /// Begin a transaction; commits issued by the harvesters go through
    /// this so a rank band lands atomically.
    pub fn transaction(&mut self) -> rusqlite::Result<Transaction<'_>> {
        self.conn.transaction()
    }

    /// Direct access for read-only queries outside a transaction.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
