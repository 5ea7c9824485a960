use std::collections::{BTreeMap, BTreeSet};

use super::model::Table;

// ---------------------------------------------------------------------------
// Facet – one filterable categorical column of the country/type table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    AuthorCountry,
    ResearchCountry,
    TherapeuticArea,
    GeneralCharacter,
}

impl Facet {
    /// Display order of the filter widgets.
    pub const ALL: [Facet; 4] = [
        Facet::AuthorCountry,
        Facet::ResearchCountry,
        Facet::TherapeuticArea,
        Facet::GeneralCharacter,
    ];

    /// Source column name in `table_2.tsv`.
    pub fn column(self) -> &'static str {
        match self {
            Facet::AuthorCountry => "country (author)",
            Facet::ResearchCountry => "country (research)",
            Facet::TherapeuticArea => "therapeutic area",
            Facet::GeneralCharacter => "general character",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facet::AuthorCountry => "Country (author)",
            Facet::ResearchCountry => "Country (research)",
            Facet::TherapeuticArea => "Therapeutic area",
            Facet::GeneralCharacter => "General character",
        }
    }

    /// Whether a cell may list several comma-separated labels.
    pub fn is_multi_valued(self) -> bool {
        !matches!(self, Facet::GeneralCharacter)
    }

    /// Token set of a raw cell for this facet.
    pub fn tokens(self, raw: &str) -> BTreeSet<String> {
        if self.is_multi_valued() {
            tokenize(raw).map(str::to_string).collect()
        } else {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                BTreeSet::new()
            } else {
                BTreeSet::from([trimmed.to_string()])
            }
        }
    }
}

/// Split on commas, trim each piece and drop blank pieces.
pub fn tokenize(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

// ---------------------------------------------------------------------------
// FacetIndex – option lists and per-row token sets, built once per load
// ---------------------------------------------------------------------------

/// Precomputed tokens for every facet of the country/type table.
#[derive(Debug, Clone, Default)]
pub struct FacetIndex {
    /// facet → sorted, deduplicated option labels.
    options: BTreeMap<Facet, BTreeSet<String>>,
    /// facet → token set of each row, indexed like the table rows.
    row_tokens: BTreeMap<Facet, Vec<BTreeSet<String>>>,
}

impl FacetIndex {
    pub fn build(table: &Table) -> Self {
        let mut options = BTreeMap::new();
        let mut row_tokens = BTreeMap::new();

        for facet in Facet::ALL {
            let per_row: Vec<BTreeSet<String>> = (0..table.len())
                .map(|row| {
                    let cell = table.cell(row, facet.column());
                    match cell.as_str() {
                        Some(raw) => facet.tokens(raw),
                        None => facet.tokens(&cell.to_string()),
                    }
                })
                .collect();
            let union: BTreeSet<String> = per_row.iter().flatten().cloned().collect();

            log::debug!("facet '{}': {} options", facet.column(), union.len());
            options.insert(facet, union);
            row_tokens.insert(facet, per_row);
        }

        Self {
            options,
            row_tokens,
        }
    }

    /// Sorted option labels offered for `facet`.
    pub fn options(&self, facet: Facet) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.options.get(&facet).unwrap_or(&EMPTY)
    }

    /// Token set of `row` for `facet`; rows outside the table have none.
    pub fn row_tokens(&self, facet: Facet, row: usize) -> Option<&BTreeSet<String>> {
        self.row_tokens.get(&facet).and_then(|rows| rows.get(row))
    }
}
