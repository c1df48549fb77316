//! Replacement catalogs loaded from disk

use apiguide_core::{Catalog, Error};
use tempfile::tempdir;

#[test]
fn builtin_catalog_round_trips_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, Catalog::builtin().to_json_pretty().unwrap()).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    assert_eq!(loaded, Catalog::builtin());
}

#[test]
fn duplicate_scenario_ids_are_rejected() {
    let mut catalog = Catalog::builtin();
    let first = catalog.scenarios[0].clone();
    catalog.scenarios.push(first);

    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, Error::CatalogInvalid { .. }));
}

#[test]
fn out_of_range_example_code_is_rejected() {
    let mut catalog = Catalog::builtin();
    catalog.status_codes[0].examples[0].code = 404;

    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();

    assert!(matches!(
        Catalog::load(&path),
        Err(Error::CatalogInvalid { .. })
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ \"api_types\": [").unwrap();

    assert!(matches!(Catalog::load(&path), Err(Error::Json(_))));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = Catalog::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}
