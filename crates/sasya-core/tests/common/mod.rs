use sasya_core::PlannerBuilder;
use tempfile::TempDir;

/// Helper function to create a seeded test planner with a fixed advisor seed
pub async fn create_test_planner() -> (TempDir, sasya_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_seed(Some(7))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
