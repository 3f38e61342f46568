//! FILENAME: core/detector/src/merge_map.rs
//! PURPOSE: Snapshot of a sheet's merge topology.
//! CONTEXT: Built once per detection pass and handed, unchanged, to the
//! filler. Keys are canonical range strings ("B1:D1"); values are the
//! top-left coordinate, the only addressable cell of the region.

use std::collections::{HashMap, HashSet};

use engine::{CellRange, CellRef, Sheet};

use crate::error::DetectionError;

/// Mapping from merge region to its top-left cell, in sheet declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeMap {
    regions: Vec<CellRange>,
    by_key: HashMap<String, CellRef>,
    top_lefts: HashSet<CellRef>,
}

impl MergeMap {
    /// Enumerates every merge region of the sheet.
    /// Overlapping regions make the top-left topology ambiguous and are a
    /// structural failure.
    pub fn build(sheet: &Sheet) -> Result<Self, DetectionError> {
        let mut map = MergeMap::default();

        for region in sheet.merged_regions() {
            if let Some(other) = map.regions.iter().find(|r| r.overlaps(region)) {
                return Err(DetectionError::OverlappingMerges {
                    first: other.to_string(),
                    second: region.to_string(),
                });
            }
            map.insert(*region);
        }

        Ok(map)
    }

    fn insert(&mut self, region: CellRange) {
        let top_left = region.top_left();
        self.by_key.insert(region.to_string(), top_left);
        self.top_lefts.insert(top_left);
        self.regions.push(region);
    }

    /// Top-left coordinate for a canonical range key such as "B1:D1".
    pub fn get(&self, key: &str) -> Option<CellRef> {
        self.by_key.get(key).copied()
    }

    /// Top-left coordinate for a region, if the region is part of the map.
    pub fn top_left_of(&self, region: &CellRange) -> Option<CellRef> {
        self.get(&region.to_string())
    }

    /// True iff `at` is the top-left of some mapped region.
    pub fn is_top_left(&self, at: CellRef) -> bool {
        self.top_lefts.contains(&at)
    }

    /// The mapped region containing `at`, if any.
    pub fn region_containing(&self, at: CellRef) -> Option<CellRange> {
        self.regions.iter().find(|r| r.contains(at)).copied()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
