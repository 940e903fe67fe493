//! Job applications captured by the assistant.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Application pipeline status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Bookmarked, not yet applied
    Saved,
    /// Application submitted
    #[default]
    Applied,
    /// Interviews in progress
    Interviewing,
    /// Offer received
    Offer,
    /// Application turned down
    Rejected,
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saved" => Ok(JobStatus::Saved),
            "applied" => Ok(JobStatus::Applied),
            "interviewing" => Ok(JobStatus::Interviewing),
            "offer" => Ok(JobStatus::Offer),
            "rejected" => Ok(JobStatus::Rejected),
            _ => Err(format!("Invalid job status: {s}")),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JobStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Saved => "saved",
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
        }
    }
}

/// Fields the job-adding conversation asks for, in order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum JobField {
    Title,
    Company,
    Source,
}

impl JobField {
    /// The question order used by the job-adding conversation.
    pub const ORDER: [JobField; 3] = [JobField::Title, JobField::Company, JobField::Source];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Company => "company",
            JobField::Source => "source",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A job handed to the tracker when the job-adding conversation completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub source: String,
    #[serde(default)]
    pub status: JobStatus,
}

/// A job stored by the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackedJob {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub source: String,
    pub status: JobStatus,
    pub applied_at: Timestamp,
}
