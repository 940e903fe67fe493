use jobsy_core::{Assistant, AssistantBuilder, AssistantConfig};
use tempfile::TempDir;

/// Helper function to create an assistant backed by a throwaway database
#[allow(dead_code)]
pub fn create_test_assistant(config: AssistantConfig) -> (TempDir, Assistant) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let assistant = AssistantBuilder::new()
        .with_database_path(Some(&db_path))
        .with_config(config)
        .build()
        .expect("Failed to create assistant");
    (temp_dir, assistant)
}

/// Helper function to reopen the database behind a test assistant
#[allow(dead_code)]
pub fn open_database(temp_dir: &TempDir) -> jobsy_core::Database {
    jobsy_core::Database::new(temp_dir.path().join("test.db")).expect("Failed to open database")
}
