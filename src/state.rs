use std::ops::RangeInclusive;
use std::path::Path;

use crate::config::{Config, ExportTarget, ARTICLES_EXPORT, COUNTRIES_EXPORT};
use crate::data::export::export_csv;
use crate::data::facet::Facet;
use crate::data::filter::{facet_view, year_view, FacetSelection, YearRange};
use crate::data::loader::ReviewTables;
use crate::data::model::{FilteredView, Table};
use crate::error::ExportError;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Articles,
    Countries,
    Features,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Articles, Tab::Countries, Tab::Features];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Articles => "List of all articles",
            Tab::Countries => "Articles by country and type",
            Tab::Features => "Detailed features extracted from articles",
        }
    }

    /// Download offered by this tab; the features tab has none.
    pub fn export_target(self) -> Option<ExportTarget> {
        match self {
            Tab::Articles => Some(ARTICLES_EXPORT),
            Tab::Countries => Some(COUNTRIES_EXPORT),
            Tab::Features => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    /// Tables loaded at startup; never modified.
    pub tables: ReviewTables,

    pub active_tab: Tab,

    /// Years the slider can reach.
    pub year_domain: RangeInclusive<i32>,

    /// Year bounds for the articles tab.
    pub years: YearRange,

    /// Facet selections for the country/type tab.
    pub facets: FacetSelection,

    /// Rows of table 1 passing `years` (cached).
    pub articles_view: FilteredView,

    /// Rows of table 2 passing `facets` (cached).
    pub countries_view: FilteredView,

    /// Table 3 is shown unfiltered.
    pub features_view: FilteredView,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start a session over freshly loaded tables with every filter open.
    pub fn new(tables: ReviewTables, config: &Config) -> Self {
        let features_view = FilteredView::all(&tables.features);
        let mut state = Self {
            tables,
            active_tab: Tab::default(),
            years: YearRange::new(*config.year_domain.start(), *config.year_domain.end()),
            year_domain: config.year_domain.clone(),
            facets: FacetSelection::default(),
            articles_view: FilteredView::default(),
            countries_view: FilteredView::default(),
            features_view,
            status_message: None,
        };
        state.refilter_articles();
        state.refilter_countries();
        state
    }

    /// Recompute `articles_view` after a year change.
    pub fn refilter_articles(&mut self) {
        self.articles_view = year_view(&self.tables.articles, self.years);
        log::debug!(
            "years {}..={}: {} of {} articles",
            self.years.lower,
            self.years.upper,
            self.articles_view.len(),
            self.tables.articles.len()
        );
    }

    /// Recompute `countries_view` after a facet change.
    pub fn refilter_countries(&mut self) {
        self.countries_view = facet_view(&self.tables.countries, &self.tables.facets, &self.facets);
        log::debug!(
            "{} active facets: {} of {} rows",
            self.facets.active_facets(),
            self.countries_view.len(),
            self.tables.countries.len()
        );
    }

    /// Apply new year bounds; `lower > upper` is never produced by the
    /// paired slider, so it is not corrected here.
    pub fn set_year_range(&mut self, years: YearRange) {
        if self.years != years {
            self.years = years;
            self.refilter_articles();
        }
    }

    /// Toggle a single option of a facet.
    pub fn toggle_facet_option(&mut self, facet: Facet, option: &str) {
        self.facets.toggle(facet, option);
        self.refilter_countries();
    }

    /// Drop every selected option of one facet.
    pub fn clear_facet(&mut self, facet: Facet) {
        self.facets.clear(facet);
        self.refilter_countries();
    }

    pub fn clear_all_facets(&mut self) {
        self.facets.clear_all();
        self.refilter_countries();
    }

    /// Source table and current view of a tab.
    pub fn table_view(&self, tab: Tab) -> (&Table, &FilteredView) {
        match tab {
            Tab::Articles => (&self.tables.articles, &self.articles_view),
            Tab::Countries => (&self.tables.countries, &self.countries_view),
            Tab::Features => (&self.tables.features, &self.features_view),
        }
    }

    /// CSV bytes of a tab's current view.
    pub fn export_bytes(&self, tab: Tab) -> Result<Vec<u8>, ExportError> {
        let (table, view) = self.table_view(tab);
        export_csv(table, view)
    }

    /// Write a tab's current view to `path`; returns the byte count.
    pub fn export_to(
        &mut self,
        tab: Tab,
        target: &ExportTarget,
        path: &Path,
    ) -> Result<usize, ExportError> {
        let bytes = self.export_bytes(tab)?;
        std::fs::write(path, &bytes)?;
        log::info!(
            "Exported {} bytes ({}) to {}",
            bytes.len(),
            target.mime,
            path.display()
        );
        self.status_message = Some(format!("Saved {}", path.display()));
        Ok(bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::facet::FacetIndex;
    use crate::data::model::{CellValue, Row, YEAR_COLUMN};

    fn sample_tables() -> ReviewTables {
        let articles = Table::new(
            vec!["title".into(), YEAR_COLUMN.into()],
            [("C2Q", 2019), ("old", 2001), ("new", 2024)]
                .iter()
                .map(|(t, y)| {
                    Row::from([
                        ("title".to_string(), CellValue::Text(t.to_string())),
                        (YEAR_COLUMN.to_string(), CellValue::Integer(*y)),
                    ])
                })
                .collect(),
        );
        let columns: Vec<String> = Facet::ALL.iter().map(|f| f.column().to_string()).collect();
        let countries = Table::new(
            columns.clone(),
            [
                ["USA, Poland", "USA", "oncology", "method"],
                ["China", "", "general", "dataset"],
            ]
            .iter()
            .map(|vals| {
                columns
                    .iter()
                    .zip(vals.iter())
                    .map(|(c, v)| (c.clone(), CellValue::text(v)))
                    .collect()
            })
            .collect(),
        );
        let facets = FacetIndex::build(&countries);
        ReviewTables {
            articles,
            countries,
            features: Table::default(),
            facets,
        }
    }

    #[test]
    fn only_filterable_tabs_export() {
        assert_eq!(Tab::Articles.export_target(), Some(ARTICLES_EXPORT));
        assert_eq!(Tab::Countries.export_target(), Some(COUNTRIES_EXPORT));
        assert_eq!(Tab::Features.export_target(), None);
    }

    #[test]
    fn new_session_shows_everything_sorted() {
        let state = AppState::new(sample_tables(), &Config::default());
        assert_eq!(state.active_tab, Tab::Articles);
        assert_eq!(state.years, YearRange::new(2000, 2024));
        assert_eq!(state.articles_view.indices(), &[1, 0, 2]);
        assert_eq!(state.countries_view.len(), 2);
    }

    #[test]
    fn year_change_refilters_articles_only() {
        let mut state = AppState::new(sample_tables(), &Config::default());
        state.set_year_range(YearRange::new(2010, 2020));
        assert_eq!(state.articles_view.indices(), &[0]);
        assert_eq!(state.countries_view.len(), 2);
    }

    #[test]
    fn facet_toggle_and_clear_refilter_countries() {
        let mut state = AppState::new(sample_tables(), &Config::default());
        state.toggle_facet_option(Facet::AuthorCountry, "Poland");
        assert_eq!(state.countries_view.indices(), &[0]);
        state.toggle_facet_option(Facet::AuthorCountry, "China");
        assert_eq!(state.countries_view.indices(), &[0, 1]);
        state.toggle_facet_option(Facet::GeneralCharacter, "dataset");
        assert_eq!(state.countries_view.indices(), &[1]);
        state.clear_facet(Facet::GeneralCharacter);
        assert_eq!(state.countries_view.len(), 2);
        state.clear_all_facets();
        assert_eq!(state.countries_view.len(), 2);
        assert_eq!(state.facets.active_facets(), 0);
    }

    #[test]
    fn export_uses_the_matching_tab_view() {
        let mut state = AppState::new(sample_tables(), &Config::default());
        state.set_year_range(YearRange::new(2015, 2024));
        state.toggle_facet_option(Facet::AuthorCountry, "China");

        let articles = String::from_utf8(state.export_bytes(Tab::Articles).unwrap()).unwrap();
        assert_eq!(articles, "title,year\nC2Q,2019\nnew,2024\n");

        let countries = String::from_utf8(state.export_bytes(Tab::Countries).unwrap()).unwrap();
        assert_eq!(countries.lines().count(), 2);
        assert!(countries.contains("China"));
    }

    #[test]
    fn export_to_writes_file_and_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ARTICLES_EXPORT.file_name);
        let mut state = AppState::new(sample_tables(), &Config::default());
        let written = state.export_to(Tab::Articles, &ARTICLES_EXPORT, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap().len(), written);
        assert!(state.status_message.unwrap().contains("list-of-articles.csv"));
    }
}
