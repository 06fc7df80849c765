use sasya_core::{
    db::seed::{seed_crops, seed_trees},
    Cell, CellType, Database, DroughtTolerance,
};
use serde_json::json;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn cell(r: u32, c: u32, cell_type: CellType, species: &str) -> Cell {
    Cell {
        cell_id: Cell::id_for(r, c),
        r,
        c,
        cell_type,
        species: species.to_string(),
        x_m: f64::from(c) * 4.0,
        y_m: f64::from(r) * 4.0,
        area_m2: 16.0,
    }
}

#[test]
fn test_new_database_has_empty_catalog() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.count_crops().unwrap(), 0);
    assert_eq!(db.count_trees().unwrap(), 0);
    assert!(db.list_crops().unwrap().is_empty());
}

#[test]
fn test_seed_catalog_is_idempotent() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.seed_catalog().unwrap(), (8, 4));
    assert_eq!(db.seed_catalog().unwrap(), (0, 0));

    assert_eq!(db.list_crops().unwrap(), seed_crops());
    assert_eq!(db.list_trees().unwrap(), seed_trees());
}

#[test]
fn test_seed_fills_only_empty_tables() {
    let (_temp_file, db) = create_test_db();
    let mut tree = seed_trees().remove(3);
    tree.name = "Banyan".into();
    db.insert_tree(&tree).unwrap();

    assert_eq!(db.seed_catalog().unwrap(), (8, 0));
    let trees = db.list_trees().unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].name, "Banyan");
    assert_eq!(trees[0].drought_tolerance, DroughtTolerance::Low);
}

#[test]
fn test_save_and_get_plan_document() {
    let (_temp_file, db) = create_test_db();
    let document = json!({"primary_crop": {"name": "Sorghum"}, "layout": {"cells": []}});

    let id = db.save_plan("Anand", &document).unwrap();
    let saved = db.get_plan(id).unwrap().expect("plan should exist");

    assert_eq!(saved.id, id);
    assert_eq!(saved.farmer_name, "Anand");
    assert_eq!(saved.document, document);
}

#[test]
fn test_get_missing_plan_is_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_plan(99).unwrap().is_none());
}

#[test]
fn test_labels_round_trip_in_order() {
    let (_temp_file, mut db) = create_test_db();
    let plan_id = db.save_plan("Devi", &json!({})).unwrap();
    let cells = vec![
        cell(0, 0, CellType::Tree, "Neem"),
        cell(0, 1, CellType::Tree, "Neem"),
        cell(1, 1, CellType::Crop, "Sorghum"),
    ];

    assert_eq!(db.save_labels(plan_id, &cells).unwrap(), 3);
    assert_eq!(db.get_labels(plan_id).unwrap(), cells);
}

#[test]
fn test_labels_for_unknown_plan_are_rejected() {
    let (_temp_file, mut db) = create_test_db();

    // Foreign keys are enforced, so nothing is written for a missing plan
    let result = db.save_labels(12, &[cell(0, 0, CellType::Tree, "Neem")]);
    assert!(result.is_err());
    assert!(db.get_labels(12).unwrap().is_empty());
}

#[test]
fn test_list_plans_newest_first() {
    let (_temp_file, mut db) = create_test_db();
    let first = db.save_plan("One", &json!({})).unwrap();
    let second = db.save_plan("Two", &json!({})).unwrap();
    db.save_labels(first, &[cell(0, 0, CellType::Crop, "Cowpea")])
        .unwrap();

    let plans = db.list_plans().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].id, second);
    assert_eq!(plans[0].label_count, 0);
    assert_eq!(plans[1].id, first);
    assert_eq!(plans[1].label_count, 1);
}

#[test]
fn test_reads_sqlite_datetime_created_at() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let _db = Database::new(temp_file.path()).unwrap();
    }
    let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
    conn.execute(
        "INSERT INTO plans (farmer_name, plan_json, created_at) VALUES ('Legacy', '{}', '2023-11-05 06:07:08')",
        [],
    )
    .unwrap();
    drop(conn);

    let db = Database::new(temp_file.path()).unwrap();
    let plans = db.list_plans().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].farmer_name, "Legacy");
    assert_eq!(plans[0].created_at.to_string(), "2023-11-05T06:07:08Z");
}
