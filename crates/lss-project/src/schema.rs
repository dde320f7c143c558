//! Run configuration schema.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// One simulation run: where the model and inputs live, where results go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub version: u32,
    pub model: ModelPaths,
    /// Input sequence table (steps x m).
    pub inputs: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub table: TableDef,
}

/// Tables holding the model matrices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModelPaths {
    pub a: PathBuf,
    pub b: PathBuf,
    pub c: PathBuf,
    pub d: PathBuf,
    pub x0: PathBuf,
}

/// On-disk table layout shared by every input and output table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_delimiter() -> char {
    ','
}

fn default_precision() -> usize {
    6
}

impl Default for TableDef {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            precision: default_precision(),
        }
    }
}

/// File name of the input sequence in a conventional model directory.
pub const INPUTS_FILE: &str = "u_ident.csv";

impl ModelPaths {
    /// `A.csv`, `B.csv`, `C.csv`, `D.csv` and `x0.csv` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            a: dir.join("A.csv"),
            b: dir.join("B.csv"),
            c: dir.join("C.csv"),
            d: dir.join("D.csv"),
            x0: dir.join("x0.csv"),
        }
    }

    /// `(name, path)` pairs in load order.
    pub fn entries(&self) -> [(&'static str, &Path); 5] {
        [
            ("A", self.a.as_path()),
            ("B", self.b.as_path()),
            ("C", self.c.as_path()),
            ("D", self.d.as_path()),
            ("x0", self.x0.as_path()),
        ]
    }
}

impl RunConfig {
    /// Conventional layout: every table in `model_dir`, results in
    /// `output_dir`, default table format.
    pub fn from_model_dir(model_dir: &Path, output_dir: &Path) -> Self {
        Self {
            version: LATEST_VERSION,
            model: ModelPaths::in_dir(model_dir),
            inputs: model_dir.join(INPUTS_FILE),
            output_dir: output_dir.to_path_buf(),
            table: TableDef::default(),
        }
    }

    /// Copy with every relative path joined onto `base`.
    pub fn resolved(&self, base: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        Self {
            version: self.version,
            model: ModelPaths {
                a: join(&self.model.a),
                b: join(&self.model.b),
                c: join(&self.model.c),
                d: join(&self.model.d),
                x0: join(&self.model.x0),
            },
            inputs: join(&self.inputs),
            output_dir: join(&self.output_dir),
            table: self.table,
        }
    }
}
