//! Integration tests comparing CLI output with the core Display
//! implementations, which the MCP tools return verbatim.

use std::process::Command;

use sasya_core::{
    display::{Crops, Labels, PlanSummaries, Trees},
    params::{Id, SavePlan, SiteRequest},
    Planner, PlannerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (Planner, TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");

    let db_path = db_path.to_str().expect("temp path is UTF-8").to_string();
    (planner, temp_dir, db_path)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sasya"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_catalog_output_matches_display() {
    let (planner, _temp_dir, db_path) = create_test_planner().await;

    let crops = planner.list_crops().await.expect("Failed to list crops");
    assert_eq!(
        run_cli_command(&db_path, &["crops"]),
        format!("# Crops\n\n{}", Crops(crops))
    );

    let trees = planner.list_trees().await.expect("Failed to list trees");
    assert_eq!(
        run_cli_command(&db_path, &["trees"]),
        format!("# Trees\n\n{}", Trees(trees))
    );
}

#[tokio::test]
async fn test_saved_plan_output_matches_display() {
    let (planner, _temp_dir, db_path) = create_test_planner().await;

    let plan = planner
        .generate_plan(&SiteRequest::from_values(Some(350.0), None, Some(300.0), None))
        .await
        .expect("Failed to generate plan");
    let outcome = planner
        .save_plan(&SavePlan {
            farmer_name: Some("Kavya".into()),
            plan: serde_json::to_value(&plan).expect("plan serializes"),
        })
        .await
        .expect("Failed to save plan");
    let id = Id {
        id: outcome.plan_id,
    };

    let saved = planner.get_plan(&id).await.expect("Failed to get plan");
    assert_eq!(
        run_cli_command(&db_path, &["show", &outcome.plan_id.to_string()]),
        saved.to_string()
    );

    let cells = planner.get_labels(&id).await.expect("Failed to get labels");
    assert_eq!(
        run_cli_command(&db_path, &["labels", &outcome.plan_id.to_string()]),
        Labels {
            plan_id: outcome.plan_id,
            cells
        }
        .to_string()
    );

    let plans = planner.list_plans().await.expect("Failed to list plans");
    assert_eq!(
        run_cli_command(&db_path, &["plans"]),
        format!("# Saved Plans\n\n{}", PlanSummaries(plans))
    );
}
