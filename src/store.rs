//! SQLite destination for demand records

use crate::error::ImportResult;
use crate::types::DemandRecord;
use rusqlite::{params, Connection, OpenFlags, Transaction};
use std::path::Path;
use tracing::debug;

/// Which of the two independent tables a store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTable {
    /// `demandas`, stamped with the import time
    Fixed,
    /// `demandas_flex`, no timestamp
    Flexible,
}

impl StoreTable {
    pub fn name(&self) -> &'static str {
        match self {
            StoreTable::Fixed => "demandas",
            StoreTable::Flexible => "demandas_flex",
        }
    }

    fn ddl(&self) -> &'static str {
        match self {
            StoreTable::Fixed => {
                r#"
                CREATE TABLE IF NOT EXISTS demandas (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nome TEXT,
                    endereco TEXT,
                    contato TEXT,
                    demanda TEXT,
                    informacoes TEXT,
                    encaminhamento TEXT,
                    data_importacao TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                "#
            }
            StoreTable::Flexible => {
                r#"
                CREATE TABLE IF NOT EXISTS demandas_flex (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nome TEXT,
                    endereco TEXT,
                    contato TEXT,
                    demanda TEXT,
                    informacoes TEXT,
                    encaminhamento TEXT
                );
                "#
            }
        }
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (nome, endereco, contato, demanda, informacoes, encaminhamento)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            self.name()
        )
    }
}

/// The four fields shown in report samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPreview {
    pub name: String,
    pub contact: String,
    pub demand: String,
    pub referral: String,
}

pub struct Store {
    conn: Connection,
    table: StoreTable,
}

impl Store {
    /// Open (creating if needed) the database file and its table
    pub fn open<P: AsRef<Path>>(path: P, table: StoreTable) -> ImportResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), table = table.name(), "Opened store");
        Self::with_connection(conn, table)
    }

    /// Open an existing database without creating or altering anything
    pub fn open_read_only<P: AsRef<Path>>(path: P, table: StoreTable) -> ImportResult<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn, table })
    }

    pub fn open_in_memory(table: StoreTable) -> ImportResult<Self> {
        Self::with_connection(Connection::open_in_memory()?, table)
    }

    fn with_connection(conn: Connection, table: StoreTable) -> ImportResult<Self> {
        conn.execute_batch(table.ddl())?;
        Ok(Self { conn, table })
    }

    pub fn table(&self) -> StoreTable {
        self.table
    }

    /// Start the single transaction an import pass writes through
    pub fn begin(&mut self) -> ImportResult<StoreTransaction<'_>> {
        let insert_sql = self.table.insert_sql();
        let tx = self.conn.transaction()?;
        Ok(StoreTransaction { tx, insert_sql })
    }

    pub fn count(&self) -> ImportResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table.name());
        let total: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(total as usize)
    }

    /// Most frequent non-empty demand types, largest count first
    pub fn top_demand_types(&self, limit: usize) -> ImportResult<Vec<(String, usize)>> {
        let sql = format!(
            "SELECT demanda, COUNT(*) AS quantidade
             FROM {}
             WHERE demanda != ''
             GROUP BY demanda
             ORDER BY quantidade DESC
             LIMIT ?1",
            self.table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            let demand: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((demand, count as usize))
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// First records in insertion order
    pub fn sample(&self, limit: usize) -> ImportResult<Vec<RecordPreview>> {
        let sql = format!(
            "SELECT nome, contato, demanda, encaminhamento FROM {} ORDER BY id LIMIT ?1",
            self.table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(RecordPreview {
                name: row.get(0)?,
                contact: row.get(1)?,
                demand: row.get(2)?,
                referral: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Every stored record in insertion order
    pub fn records(&self) -> ImportResult<Vec<DemandRecord>> {
        let sql = format!(
            "SELECT nome, endereco, contato, demanda, informacoes, encaminhamento
             FROM {} ORDER BY id",
            self.table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(DemandRecord {
                name: row.get(0)?,
                address: row.get(1)?,
                contact: row.get(2)?,
                demand: row.get(3)?,
                information: row.get(4)?,
                referral: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

/// Uncommitted inserts; dropped without `commit` they roll back
pub struct StoreTransaction<'a> {
    tx: Transaction<'a>,
    insert_sql: String,
}

impl StoreTransaction<'_> {
    pub fn insert(&self, record: &DemandRecord) -> ImportResult<()> {
        let mut stmt = self.tx.prepare_cached(&self.insert_sql)?;
        stmt.execute(params![
            record.name,
            record.address,
            record.contact,
            record.demand,
            record.information,
            record.referral,
        ])?;
        Ok(())
    }

    pub fn commit(self) -> ImportResult<()> {
        self.tx.commit()?;
        Ok(())
    }
}
