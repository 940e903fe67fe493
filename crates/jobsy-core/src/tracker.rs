//! Hand-off of completed job-adding conversations to a job tracker.

use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::{db::Database, models::NewJob};

/// Receives each job collected by the assistant, exactly once.
///
/// Calls are fire-and-forget: the assistant never looks at the outcome, so
/// implementations report their own failures.
pub trait JobTracker: Send {
    fn create_job(&mut self, job: &NewJob);
}

/// Tracker that drops every job.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl JobTracker for NoopTracker {
    fn create_job(&mut self, _job: &NewJob) {}
}

/// Keeps jobs in memory. Clones share the same list, so a test can hand one
/// clone to the assistant and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingTracker {
    jobs: Arc<Mutex<Vec<NewJob>>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded jobs, oldest first.
    pub fn jobs(&self) -> Vec<NewJob> {
        match self.jobs.lock() {
            Ok(jobs) => jobs.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl JobTracker for RecordingTracker {
    fn create_job(&mut self, job: &NewJob) {
        match self.jobs.lock() {
            Ok(mut jobs) => jobs.push(job.clone()),
            Err(poisoned) => poisoned.into_inner().push(job.clone()),
        }
    }
}

impl JobTracker for Database {
    fn create_job(&mut self, job: &NewJob) {
        match Database::create_job(self, job) {
            Ok(tracked) => info!(
                "Tracked job {} '{}' at '{}'",
                tracked.id, tracked.title, tracked.company
            ),
            Err(e) => warn!("Failed to track job '{}': {e}", job.title),
        }
    }
}
