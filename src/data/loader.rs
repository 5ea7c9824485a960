use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::LoadError;

use super::facet::{Facet, FacetIndex};
use super::model::{CellValue, Row, Table, YEAR_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// The three tables of the review plus the facet index over table 2.
#[derive(Debug, Clone)]
pub struct ReviewTables {
    /// Table 1: list of all articles.
    pub articles: Table,
    /// Table 2: articles by country and type.
    pub countries: Table,
    /// Table 3: detailed extracted features.
    pub features: Table,
    pub facets: FacetIndex,
}

/// Load all three tables named in `config` and check the columns the
/// filters depend on.
pub fn load_review_tables(config: &Config) -> Result<ReviewTables, LoadError> {
    let articles_path = config.articles_path();
    let articles = load_table(&articles_path, &[])?;
    require_columns(&articles, &articles_path, &[YEAR_COLUMN])?;
    check_years(&articles, &articles_path)?;

    let countries_path = config.countries_path();
    let facet_columns: Vec<&str> = Facet::ALL.iter().map(|f| f.column()).collect();
    let countries = load_table(&countries_path, &facet_columns)?;
    require_columns(&countries, &countries_path, &facet_columns)?;

    let features = load_table(&config.features_path(), &[])?;

    let facets = FacetIndex::build(&countries);

    Ok(ReviewTables {
        articles,
        countries,
        features,
        facets,
    })
}

/// Load one tab-separated table with a header row. Cells of
/// `text_columns` keep their source text instead of being read as numbers.
pub fn load_table(path: &Path, text_columns: &[&str]) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file, b'\t', text_columns, path)?;
    if table.is_empty() {
        log::warn!("{} has a header but no rows", path.display());
    }
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Parse delimited text from any reader. `origin` only labels errors.
///
/// Quoting follows the usual CSV rules, so exported files parse back with
/// `delimiter = b','`. Short records are padded with `Null`; records longer
/// than the header are rejected.
pub fn read_table<R: Read>(
    reader: R,
    delimiter: u8,
    text_columns: &[&str],
    origin: &Path,
) -> Result<Table, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(|c| c.trim().is_empty()) {
        return Err(LoadError::EmptyHeader {
            path: origin.to_path_buf(),
        });
    }

    let mut seen = HashSet::new();
    for col in &columns {
        if !seen.insert(col.as_str()) {
            return Err(LoadError::DuplicateColumn {
                path: origin.to_path_buf(),
                column: col.clone(),
            });
        }
    }

    let is_text: Vec<bool> = columns
        .iter()
        .map(|c| text_columns.contains(&c.as_str()))
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(csv_err)?;
        if record.len() > columns.len() {
            return Err(LoadError::ExtraFields {
                path: origin.to_path_buf(),
                row: row_no,
                found: record.len(),
                expected: columns.len(),
            });
        }
        let row: Row = columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let raw = record.get(i).unwrap_or("");
                let cell = if is_text[i] {
                    CellValue::text(raw)
                } else {
                    CellValue::parse(raw)
                };
                (col.clone(), cell)
            })
            .collect();
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn require_columns(table: &Table, path: &Path, required: &[&str]) -> Result<(), LoadError> {
    match required.iter().find(|c| !table.has_column(c)) {
        Some(missing) => Err(LoadError::MissingColumn {
            path: PathBuf::from(path),
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}

/// Every non-empty year must be an integer-valued number.
fn check_years(table: &Table, path: &Path) -> Result<(), LoadError> {
    for row in 0..table.len() {
        let cell = table.cell(row, YEAR_COLUMN);
        if !cell.is_null() && cell.as_i64().is_none() {
            return Err(LoadError::InvalidYear {
                path: path.to_path_buf(),
                row,
                value: cell.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn parse_tsv(text: &str) -> Result<Table, LoadError> {
        read_table(text.as_bytes(), b'\t', &[], Path::new("inline.tsv"))
    }

    fn write_fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("table_1.tsv"),
            "title\tyear\nCriteria2Query\t2019\nEliIE\t2017\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("table_2.tsv"),
            "title\tcountry (author)\tcountry (research)\ttherapeutic area\tgeneral character\n\
             Criteria2Query\tUSA\tUSA\tgeneral\tmethod\n\
             EliIE\tUSA, China\t\toncology, general\t dataset \n",
        )
        .unwrap();
        fs::write(
            dir.path().join("table_3.tsv"),
            "title\tmodel\nCriteria2Query\tCRF\n",
        )
        .unwrap();
        dir
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn read_table_keeps_header_and_row_order() {
        let table = parse_tsv("title\tyear\nB\t2015\nA\t2001\nC\t\n").unwrap();
        assert_eq!(table.columns, vec!["title", "year"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, "title"), &CellValue::Text("B".into()));
        assert_eq!(table.cell(1, "year"), &CellValue::Integer(2001));
        assert!(table.cell(2, "year").is_null());
    }

    #[test]
    fn read_table_keeps_commas_inside_tsv_fields() {
        let table = parse_tsv("country (author)\nUSA, Poland\n").unwrap();
        assert_eq!(
            table.cell(0, "country (author)"),
            &CellValue::Text("USA, Poland".into())
        );
    }

    #[test]
    fn long_record_is_rejected() {
        let err = parse_tsv("a\tb\n1\t2\n1\t2\t3\n").unwrap_err();
        assert!(
            matches!(err, LoadError::ExtraFields { row: 1, found: 3, expected: 2, .. }),
            "{err}"
        );
    }

    #[test]
    fn short_record_is_padded_with_nulls() {
        let table = parse_tsv("title\tyear\tvenue\nEliIE\t2017\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "year"), &CellValue::Integer(2017));
        assert!(table.cell(0, "venue").is_null());
        assert_eq!(table.rows[0].len(), 3);
    }

    #[test]
    fn text_columns_keep_source_text() {
        let table = read_table(
            "code\tcount\n1e3\t1e3\n\t7\n".as_bytes(),
            b'\t',
            &["code"],
            Path::new("inline.tsv"),
        )
        .unwrap();
        assert_eq!(table.cell(0, "code"), &CellValue::Text("1e3".into()));
        assert_eq!(table.cell(0, "count"), &CellValue::Float(1000.0));
        assert!(table.cell(1, "code").is_null());
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_tsv("").unwrap_err();
        assert!(matches!(err, LoadError::EmptyHeader { .. }), "{err}");
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let err = parse_tsv("a\ta\n1\t2\n").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateColumn { ref column, .. } if column == "a"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_table(Path::new("/definitely/not/here.tsv"), &[]).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "{err}");
    }

    #[test]
    fn loads_all_three_tables_with_facets() {
        let dir = write_fixture_dir();
        let tables = load_review_tables(&config_for(dir.path())).unwrap();

        assert_eq!(tables.articles.len(), 2);
        assert_eq!(tables.countries.len(), 2);
        assert_eq!(tables.features.len(), 1);

        let authors: Vec<&str> = tables
            .facets
            .options(Facet::AuthorCountry)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(authors, vec!["China", "USA"]);
        let character: Vec<&str> = tables
            .facets
            .options(Facet::GeneralCharacter)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(character, vec!["dataset", "method"]);
    }

    #[test]
    fn missing_facet_column_fails_load() {
        let dir = write_fixture_dir();
        fs::write(
            dir.path().join("table_2.tsv"),
            "title\tcountry (author)\nX\tUSA\n",
        )
        .unwrap();
        let err = load_review_tables(&config_for(dir.path())).unwrap_err();
        let LoadError::MissingColumn { ref column, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(column, "country (research)");
    }

    #[test]
    fn padded_year_and_numeric_looking_facets_load() {
        let dir = write_fixture_dir();
        fs::write(dir.path().join("table_1.tsv"), "title\tyear\nX\t 2015 \n").unwrap();
        fs::write(
            dir.path().join("table_2.tsv"),
            "country (author)\tcountry (research)\ttherapeutic area\tgeneral character\n\
             USA\t1e3\t007\n",
        )
        .unwrap();
        let tables = load_review_tables(&config_for(dir.path())).unwrap();

        assert_eq!(tables.articles.cell(0, "year"), &CellValue::Integer(2015));
        let research: Vec<&str> = tables
            .facets
            .options(Facet::ResearchCountry)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(research, vec!["1e3"]);
        let areas: Vec<&str> = tables
            .facets
            .options(Facet::TherapeuticArea)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(areas, vec!["007"]);
        assert!(tables.facets.options(Facet::GeneralCharacter).is_empty());
    }

    #[test]
    fn non_numeric_year_fails_load() {
        let dir = write_fixture_dir();
        fs::write(dir.path().join("table_1.tsv"), "title\tyear\nX\tsoon\n").unwrap();
        let err = load_review_tables(&config_for(dir.path())).unwrap_err();
        assert!(matches!(err, LoadError::InvalidYear { row: 0, .. }), "{err}");
    }

    #[test]
    fn missing_features_table_fails_load() {
        let dir = write_fixture_dir();
        fs::remove_file(dir.path().join("table_3.tsv")).unwrap();
        let err = load_review_tables(&config_for(dir.path())).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "{err}");
    }
}
