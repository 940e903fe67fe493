//! Tracked job CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{JobStatus, NewJob, TrackedJob},
};

const INSERT_JOB_SQL: &str =
    "INSERT INTO jobs (title, company, source, status, applied_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_JOBS_SQL: &str =
    "SELECT id, title, company, source, status, applied_at FROM jobs ORDER BY id DESC";

impl super::Database {
    /// Stores a job captured by the assistant.
    pub fn create_job(&mut self, job: &NewJob) -> Result<TrackedJob> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_JOB_SQL,
            params![
                job.title,
                job.company,
                job.source,
                job.status.as_str(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert job")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TrackedJob {
            id,
            title: job.title.clone(),
            company: job.company.clone(),
            source: job.source.clone(),
            status: job.status,
            applied_at: now,
        })
    }

    /// Lists tracked jobs, most recently added first.
    pub fn list_jobs(&self) -> Result<Vec<TrackedJob>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_JOBS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], Self::row_to_job)
            .db_context("Failed to query jobs")?;

        let jobs = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read jobs")?;
        Ok(jobs)
    }

    fn row_to_job(row: &Row<'_>) -> rusqlite::Result<TrackedJob> {
        let status_str: String = row.get(4)?;
        let status = status_str.parse::<JobStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid job status: {status_str}"),
                )),
            )
        })?;

        Ok(TrackedJob {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            company: row.get(2)?,
            source: row.get(3)?,
            status,
            applied_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
        })
    }
}
