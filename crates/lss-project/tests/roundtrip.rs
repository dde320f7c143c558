use std::path::Path;

use lss_project::{ProjectError, RunConfig, TableDef, load_yaml, save_yaml};

#[test]
fn roundtrip_yaml_absolute_paths() {
    let dir = std::env::temp_dir().join("lss_project_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("run.yaml");

    let mut config = RunConfig::from_model_dir(&dir.join("model"), &dir.join("results"));
    config.table = TableDef {
        delimiter: ';',
        precision: 4,
    };

    save_yaml(&path, &config).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn relative_paths_resolve_against_config_dir() {
    let dir = std::env::temp_dir().join("lss_project_relative");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("run.yaml");
    std::fs::write(
        &path,
        "version: 1
model:
  a: model/A.csv
  b: model/B.csv
  c: model/C.csv
  d: model/D.csv
  x0: model/x0.csv
inputs: model/u_ident.csv
output_dir: results
",
    )
    .unwrap();

    let loaded = load_yaml(&path).unwrap();

    assert_eq!(loaded.model.a, dir.join("model/A.csv"));
    assert_eq!(loaded.inputs, dir.join("model/u_ident.csv"));
    assert_eq!(loaded.output_dir, dir.join("results"));
    assert_eq!(loaded.table, TableDef::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = std::env::temp_dir().join("lss_project_unknown");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("run.yaml");
    std::fs::write(
        &path,
        "version: 1
model: { a: A.csv, b: B.csv, c: C.csv, d: D.csv, x0: x0.csv }
inputs: u.csv
output_dir: out
plot: true
",
    )
    .unwrap();

    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_yaml(Path::new("/nonexistent/lss/run.yaml")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}
