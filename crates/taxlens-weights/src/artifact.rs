//! Weight artifacts and the layers built from them.
//!
//! On disk an artifact is a JSON bundle holding either a matrix or a
//! mapping of named vectors, plus free-form metadata:
//!
//! ```json
//! { "name": "feature_extractor", "matrix": [[0.1, 0.2], [0.3, 0.4]],
//!   "metadata": { "trained_on": "2024-GST-Compliance-Dataset" } }
//! { "name": "rule_embeddings", "vectors": { "GST_Rule_0": [0.5, 0.1] } }
//! ```

use std::collections::BTreeMap;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use taxlens_core::errors::WeightError;

/// Numeric content of an artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightData {
    Matrix(Array2<f32>),
    Mapping(BTreeMap<String, Vec<f32>>),
}

impl WeightData {
    pub fn as_matrix(&self) -> Option<&Array2<f32>> {
        match self {
            Self::Matrix(m) => Some(m),
            Self::Mapping(_) => None,
        }
    }

    /// `"256x512"` for matrices, `"mapping[n]"` for mappings.
    pub fn describe(&self) -> String {
        match self {
            Self::Matrix(m) => format!("{}x{}", m.nrows(), m.ncols()),
            Self::Mapping(v) => format!("mapping[{}]", v.len()),
        }
    }
}

/// A parsed weight artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightArtifact {
    pub name: String,
    pub data: WeightData,
    pub metadata: Map<String, Value>,
}

impl WeightArtifact {
    pub fn matrix(name: impl Into<String>, matrix: Array2<f32>) -> Self {
        Self {
            name: name.into(),
            data: WeightData::Matrix(matrix),
            metadata: Map::new(),
        }
    }

    pub fn mapping(name: impl Into<String>, vectors: BTreeMap<String, Vec<f32>>) -> Self {
        Self {
            name: name.into(),
            data: WeightData::Mapping(vectors),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Parse an artifact from JSON. `id` names it in errors and stands in
    /// for a missing `name`.
    pub fn from_json(id: &str, json: &str) -> Result<Self, WeightError> {
        let file: ArtifactFile = serde_json::from_str(json).map_err(|e| WeightError::ArtifactLoad {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

        let data = match file.payload {
            ArtifactPayload::Matrix { matrix } => WeightData::Matrix(rows_to_array(id, matrix)?),
            ArtifactPayload::Mapping { vectors } => WeightData::Mapping(vectors),
        };

        Ok(Self {
            name: file.name.unwrap_or_else(|| id.to_string()),
            data,
            metadata: file.metadata,
        })
    }

    /// Serialize in the same format `from_json` reads.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let (matrix, vectors) = match &self.data {
            WeightData::Matrix(m) => (Some(m.rows().into_iter().map(|r| r.to_vec()).collect()), None),
            WeightData::Mapping(v) => (None, Some(v)),
        };
        serde_json::to_string_pretty(&ArtifactFileOut {
            name: &self.name,
            matrix,
            vectors,
            metadata: &self.metadata,
        })
    }
}

#[derive(Deserialize)]
struct ArtifactFile {
    name: Option<String>,
    #[serde(flatten)]
    payload: ArtifactPayload,
    #[serde(default)]
    metadata: Map<String, Value>,
}

#[derive(Serialize)]
struct ArtifactFileOut<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<Vec<Vec<f32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vectors: Option<&'a BTreeMap<String, Vec<f32>>>,
    metadata: &'a Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactPayload {
    Matrix { matrix: Vec<Vec<f32>> },
    Mapping { vectors: BTreeMap<String, Vec<f32>> },
}

fn rows_to_array(id: &str, rows: Vec<Vec<f32>>) -> Result<Array2<f32>, WeightError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().position(|r| r.len() != ncols) {
        return Err(WeightError::ArtifactLoad {
            id: id.to_string(),
            reason: format!("ragged matrix: row {bad} has {} columns, expected {ncols}", rows[bad].len()),
        });
    }
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat).map_err(|e| WeightError::ArtifactLoad {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

/// Where a layer's weights came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOrigin {
    Loaded,
    Synthetic,
}

/// One slot of the weight store: `layer_{i}` built from the i-th candidate.
#[derive(Debug, Clone)]
pub struct WeightLayer {
    pub name: String,
    /// Identifier of the candidate (file name or artifact name).
    pub source: String,
    pub origin: LayerOrigin,
    pub data: WeightData,
    pub metadata: Map<String, Value>,
}
