//! FILENAME: core/detector/src/model.rs
//! PURPOSE: Output types of a detection pass.
//! CONTEXT: These hold coordinates and strings only, never references into
//! the sheet, so they can be handed from the detector to the filler freely.

use std::fmt;
use std::str::FromStr;

use engine::{CellRange, CellRef, SheetError};
use serde::{Serialize, Serializer};

use crate::merge_map::MergeMap;

// ============================================================================
// FIELD TARGET
// ============================================================================

/// Where a label's value should be written: one cell or a whole merge region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    Cell(CellRef),
    Region(CellRange),
}

impl FieldTarget {
    /// The single addressable cell of the target.
    pub fn top_left(&self) -> CellRef {
        match self {
            FieldTarget::Cell(at) => *at,
            FieldTarget::Region(range) => range.top_left(),
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, FieldTarget::Region(_))
    }
}

impl fmt::Display for FieldTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTarget::Cell(at) => write!(f, "{}", at),
            FieldTarget::Region(range) => write!(f, "{}", range),
        }
    }
}

impl FromStr for FieldTarget {
    type Err = SheetError;

    /// "B1" is a single cell, "B1:D1" a region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            Ok(FieldTarget::Region(s.parse()?))
        } else {
            Ok(FieldTarget::Cell(s.parse()?))
        }
    }
}

impl Serialize for FieldTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// FORM FIELD
// ============================================================================

/// A detected label and the place its value goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub label: String,
    /// Cell the label text was read from.
    pub label_cell: CellRef,
    pub target: FieldTarget,
}

impl FormField {
    pub fn is_merged(&self) -> bool {
        self.target.is_merged()
    }
}

// ============================================================================
// DETECTION RESULT
// ============================================================================

/// Fields in scan order plus the merge topology they were resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    fields: Vec<FormField>,
    merge_map: MergeMap,
}

impl DetectionResult {
    pub(crate) fn new(fields: Vec<FormField>, merge_map: MergeMap) -> Self {
        DetectionResult { fields, merge_map }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn merge_map(&self) -> &MergeMap {
        &self.merge_map
    }

    /// Field detected for an exact label string.
    pub fn get(&self, label: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Labels in scan order; the input for a value source.
    pub fn labels(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// No fields found. A valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
