// src/store.rs

use crate::error::Result;
use crate::models::{LogEntry, Reading};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// 会话内的日志存储：只追加，进程退出即消失 (内存数据库)
pub struct LogStore {
    conn: Connection,
}

impl LogStore {
    /// 打开一个新的内存数据库并建表
    pub fn open() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(
            "CREATE TABLE readings (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                ph REAL NOT NULL,
                ammonia REAL NOT NULL,
                nitrite REAL NOT NULL,
                nitrate REAL NOT NULL,
                notes TEXT
            )",
            [],
        )?;
        Ok(LogStore { conn })
    }

    /// 以今天的本地日期追加一条读数
    pub fn append(&self, reading: Reading) -> Result<LogEntry> {
        self.append_dated(reading, today())
    }

    /// 追加一条读数，日期由调用方提供
    pub fn append_dated(&self, reading: Reading, date: String) -> Result<LogEntry> {
        let entry = reading.into_entry(date);
        self.conn.execute(
            "INSERT INTO readings (date, ph, ammonia, nitrite, nitrate, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.date,
                entry.ph,
                entry.ammonia,
                entry.nitrite,
                entry.nitrate,
                entry.notes
            ],
        )?;
        tracing::debug!(date = %entry.date, seq = self.conn.last_insert_rowid(), "reading appended");
        Ok(entry)
    }

    /// 最新一条，即最后追加的记录
    pub fn latest(&self) -> Result<Option<LogEntry>> {
        let entry = self
            .conn
            .query_row(
                "SELECT date, ph, ammonia, nitrite, nitrate, notes
                 FROM readings ORDER BY seq DESC LIMIT 1",
                [],
                map_entry,
            )
            .optional()?;
        Ok(entry)
    }

    /// 按插入顺序返回全部记录
    pub fn all(&self) -> Result<Vec<LogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, ph, ammonia, nitrite, nitrate, notes FROM readings ORDER BY seq ASC",
        )?;
        let entries = stmt
            .query_map([], map_entry)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM readings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn map_entry(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    Ok(LogEntry {
        date: row.get(0)?,
        ph: row.get(1)?,
        ammonia: row.get(2)?,
        nitrite: row.get(3)?,
        nitrate: row.get(4)?,
        notes: row.get(5)?,
    })
}

/// en-US 格式的本地日期，例如 10/16/2026
pub fn today() -> String {
    chrono::Local::now().format("%-m/%-d/%Y").to_string()
}
