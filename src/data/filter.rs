use std::collections::{BTreeMap, BTreeSet};

use crate::config::{YEAR_MAX, YEAR_MIN};

use super::facet::{Facet, FacetIndex};
use super::model::{FilteredView, Table, YEAR_COLUMN};

// ---------------------------------------------------------------------------
// Year range – table 1
// ---------------------------------------------------------------------------

/// Inclusive publication year bounds. The paired slider keeps
/// `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lower: i32,
    pub upper: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            lower: YEAR_MIN,
            upper: YEAR_MAX,
        }
    }
}

impl YearRange {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, year: i64) -> bool {
        i64::from(self.lower) <= year && year <= i64::from(self.upper)
    }
}

/// Rows of `table` whose year lies in `range`, sorted ascending by year.
/// Rows sharing a year keep their source order; rows without a year are
/// dropped.
pub fn year_view(table: &Table, range: YearRange) -> FilteredView {
    let mut hits: Vec<(i64, usize)> = (0..table.len())
        .filter_map(|row| {
            let year = table.cell(row, YEAR_COLUMN).as_i64()?;
            range.contains(year).then_some((year, row))
        })
        .collect();
    hits.sort_by_key(|&(year, _)| year);
    FilteredView::from_indices(hits.into_iter().map(|(_, row)| row).collect())
}

// ---------------------------------------------------------------------------
// Facet selection – table 2
// ---------------------------------------------------------------------------

/// Selected options per facet. An absent or empty set means the facet
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    selected: BTreeMap<Facet, BTreeSet<String>>,
}

impl FacetSelection {
    pub fn selected(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.selected.get(&facet).filter(|s| !s.is_empty())
    }

    pub fn is_selected(&self, facet: Facet, option: &str) -> bool {
        self.selected
            .get(&facet)
            .is_some_and(|s| s.contains(option))
    }

    pub fn select(&mut self, facet: Facet, option: impl Into<String>) {
        self.selected.entry(facet).or_default().insert(option.into());
    }

    pub fn deselect(&mut self, facet: Facet, option: &str) {
        if let Some(set) = self.selected.get_mut(&facet) {
            set.remove(option);
            if set.is_empty() {
                self.selected.remove(&facet);
            }
        }
    }

    /// Flip one option; returns whether it is now selected.
    pub fn toggle(&mut self, facet: Facet, option: &str) -> bool {
        if self.is_selected(facet, option) {
            self.deselect(facet, option);
            false
        } else {
            self.select(facet, option);
            true
        }
    }

    pub fn clear(&mut self, facet: Facet) {
        self.selected.remove(&facet);
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Number of facets that currently constrain the result.
    pub fn active_facets(&self) -> usize {
        Facet::ALL
            .iter()
            .filter(|f| self.selected(**f).is_some())
            .count()
    }
}

/// Whether `row` passes one facet: no selection, or a shared token.
fn passes_facet(index: &FacetIndex, selection: &FacetSelection, facet: Facet, row: usize) -> bool {
    let Some(wanted) = selection.selected(facet) else {
        return true;
    };
    match index.row_tokens(facet, row) {
        Some(tokens) => !tokens.is_disjoint(wanted),
        None => false,
    }
}

/// Rows of `table` passing every facet of `selection`, in source order.
pub fn facet_view(table: &Table, index: &FacetIndex, selection: &FacetSelection) -> FilteredView {
    let indices = (0..table.len())
        .filter(|&row| {
            Facet::ALL
                .iter()
                .all(|&facet| passes_facet(index, selection, facet, row))
        })
        .collect();
    FilteredView::from_indices(indices)
}
