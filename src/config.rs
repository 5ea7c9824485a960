use std::ops::RangeInclusive;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Static configuration
// ---------------------------------------------------------------------------

/// Lowest publication year offered by the year control.
pub const YEAR_MIN: i32 = 2000;
/// Highest publication year offered by the year control.
pub const YEAR_MAX: i32 = 2024;

/// Where the three source tables live and which years the UI offers.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub articles_file: String,
    pub countries_file: String,
    pub features_file: String,
    pub year_domain: RangeInclusive<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            articles_file: "table_1.tsv".to_string(),
            countries_file: "table_2.tsv".to_string(),
            features_file: "table_3.tsv".to_string(),
            year_domain: YEAR_MIN..=YEAR_MAX,
        }
    }
}

impl Config {
    pub fn articles_path(&self) -> PathBuf {
        self.data_dir.join(&self.articles_file)
    }

    pub fn countries_path(&self) -> PathBuf {
        self.data_dir.join(&self.countries_file)
    }

    pub fn features_path(&self) -> PathBuf {
        self.data_dir.join(&self.features_file)
    }
}

// ---------------------------------------------------------------------------
// Export targets
// ---------------------------------------------------------------------------

/// A downloadable file offered by one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub file_name: &'static str,
    pub mime: &'static str,
    /// Widget identity; must differ between tabs.
    pub key: &'static str,
}

pub const ARTICLES_EXPORT: ExportTarget = ExportTarget {
    file_name: "list-of-articles.csv",
    mime: "text/csv",
    key: "download-csv-tab1",
};

pub const COUNTRIES_EXPORT: ExportTarget = ExportTarget {
    file_name: "articles-by-country.csv",
    mime: "text/csv",
    key: "download-csv-tab2",
};
