use serde::Serialize;
use thiserror::Error;

use crate::enums::{DimensionTag, WordClass, join_tags};

/// Structure identification failed; callers fall back to the raw table.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureError {
    #[error("{word_class} table has no {} headers", join_tags(.missing))]
    InsufficientHeaders {
        word_class: WordClass,
        missing: Vec<DimensionTag>,
    },
    #[error("inconsistent {tag} headers: {reason}")]
    InconsistentAxes { tag: DimensionTag, reason: String },
}

/// A single data cell could not be placed in the paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildError {
    #[error("cell ({row}, {col}) lacks {}", join_tags(.missing))]
    IncompleteTuple {
        row: usize,
        col: usize,
        missing: Vec<DimensionTag>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_missing_tags() {
        let err = StructureError::InsufficientHeaders {
            word_class: WordClass::Noun,
            missing: vec![DimensionTag::Case],
        };
        assert_eq!(err.to_string(), "noun table has no case headers");

        let err = BuildError::IncompleteTuple {
            row: 2,
            col: 1,
            missing: vec![DimensionTag::Number, DimensionTag::Person],
        };
        assert_eq!(err.to_string(), "cell (2, 1) lacks number, person");
    }
}
