//! Transient state of the job-adding conversation.

use std::collections::BTreeMap;

use crate::models::{JobField, JobStatus, NewJob};

/// Answers keyed by the field they fill.
pub type Answers = BTreeMap<JobField, String>;

/// Result of feeding one answer into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Stored; ask for this field next
    Next(JobField),
    /// Blank answer refused; ask for the same field again
    Retry(JobField),
    /// Every field answered; the session has been reset
    Complete(Answers),
}

/// Walks the user through [`JobField::ORDER`], one answer per field.
#[derive(Debug, Default)]
pub struct JobAddingSession {
    current_index: usize,
    collected: Answers,
}

impl JobAddingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the session and returns the first field to ask for.
    pub fn start(&mut self) -> JobField {
        self.reset();
        JobField::ORDER[0]
    }

    /// Stores `text` under the current field and advances.
    ///
    /// Blank answers are accepted as-is unless `require_non_empty` is set.
    pub fn answer(&mut self, text: &str, require_non_empty: bool) -> AnswerOutcome {
        let field = self.current_field();
        if require_non_empty && text.trim().is_empty() {
            return AnswerOutcome::Retry(field);
        }

        self.collected.insert(field, text.to_string());

        if self.current_index + 1 < JobField::ORDER.len() {
            self.current_index += 1;
            AnswerOutcome::Next(self.current_field())
        } else {
            let collected = std::mem::take(&mut self.collected);
            self.reset();
            AnswerOutcome::Complete(collected)
        }
    }

    /// Discards any partial answers.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.collected.clear();
    }

    pub fn current_field(&self) -> JobField {
        JobField::ORDER[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn collected(&self) -> &Answers {
        &self.collected
    }
}

impl NewJob {
    /// Builds the tracker request from a completed set of answers.
    pub fn from_answers(answers: &Answers) -> Self {
        let get = |field: JobField| answers.get(&field).cloned().unwrap_or_default();
        Self {
            title: get(JobField::Title),
            company: get(JobField::Company),
            source: get(JobField::Source),
            status: JobStatus::Applied,
        }
    }
}
