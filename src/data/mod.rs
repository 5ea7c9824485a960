/// Data layer: core types, loading, filtering and export.
///
/// Architecture:
/// ```text
///  table_1.tsv  table_2.tsv  table_3.tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse TSV → Table, build FacetIndex
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range / facet predicates → FilteredView
///   └──────────┘
///        │                 │
///        ▼                 ▼
///    ui::table         ┌──────────┐
///                      │  export   │  FilteredView → CSV bytes
///                      └──────────┘
/// ```

pub mod export;
pub mod facet;
pub mod filter;
pub mod loader;
pub mod model;
