use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::BirdRecord;

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster row {row}: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Roster row {row} has an empty id")]
    MissingId { row: usize },
}

/// One CSV data row: `id,gender,color,weight,head,feather,power,health,image_path`
///
/// Ids stay textual here so values like `007` keep their leading zeros.
#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    gender: String,
    color: String,
    weight: f64,
    head: String,
    feather: String,
    power: f64,
    health: f64,
    #[serde(default)]
    image_path: Option<String>,
}

impl From<RosterRow> for BirdRecord {
    fn from(row: RosterRow) -> Self {
        BirdRecord {
            id: row.id,
            gender: row.gender,
            color: row.color,
            head: row.head,
            feather: row.feather,
            weight: row.weight,
            power: row.power,
            health: row.health,
            image_path: row.image_path.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Parse a CSV roster with a header row
///
/// Row numbers in errors count data rows from 1.
pub fn parse_roster_csv<R: Read>(reader: R) -> Result<Vec<BirdRecord>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Surface a broken header before any row is attempted
    csv_reader.headers()?;

    let mut birds = Vec::new();
    for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row_number = index + 1;
        let row = row.map_err(|source| RosterError::MalformedRow {
            row: row_number,
            source,
        })?;

        if row.id.is_empty() {
            return Err(RosterError::MissingId { row: row_number });
        }

        birds.push(BirdRecord::from(row));
    }

    Ok(birds)
}

/// Parse a JSON array of birds
pub fn parse_roster_json<R: Read>(reader: R) -> Result<Vec<BirdRecord>, RosterError> {
    let birds: Vec<BirdRecord> = serde_json::from_reader(reader)?;
    check_ids(&birds)?;
    Ok(birds)
}

/// Reject birds with blank ids, which would make pair results unreadable
pub fn check_ids(birds: &[BirdRecord]) -> Result<(), RosterError> {
    match birds.iter().position(|b| b.id.trim().is_empty()) {
        Some(index) => Err(RosterError::MissingId { row: index + 1 }),
        None => Ok(()),
    }
}

/// Load a roster file, choosing the format by extension
///
/// `.json` files hold a JSON array; anything else is read as CSV.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<BirdRecord>, RosterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let birds = if is_json {
        parse_roster_json(file)?
    } else {
        parse_roster_csv(file)?
    };

    tracing::info!("Loaded {} birds from {}", birds.len(), path.display());
    Ok(birds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,gender,color,weight,head,feather,power,health,image_path
M1,male,white,420,long,smooth,9,8,images/m1.jpg
F1,female,Gray,395,medium,smooth,8,9,
007,female,black,380,short,rough,7,7,
";

    #[test]
    fn test_parse_sample() {
        let birds = parse_roster_csv(SAMPLE.as_bytes()).unwrap();

        assert_eq!(birds.len(), 3);
        assert_eq!(birds[0].id, "M1");
        assert_eq!(birds[0].image_path.as_deref(), Some("images/m1.jpg"));
        assert_eq!(birds[1].image_path, None);
        assert_eq!(birds[1].color, "Gray");
        assert_eq!(birds[2].id, "007");
        assert_eq!(birds[2].weight, 380.0);
    }

    #[test]
    fn test_image_column_optional() {
        let csv = "id,gender,color,weight,head,feather,power,health\nM1,male,white,400,long,smooth,9,9\n";
        let birds = parse_roster_csv(csv.as_bytes()).unwrap();

        assert_eq!(birds.len(), 1);
        assert_eq!(birds[0].image_path, None);
    }

    #[test]
    fn test_malformed_row_reports_position() {
        let csv = "id,gender,color,weight,head,feather,power,health\n\
                   M1,male,white,400,long,smooth,9,9\n\
                   F1,female,white,heavy,long,smooth,9,9\n";

        match parse_roster_csv(csv.as_bytes()) {
            Err(RosterError::MalformedRow { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected malformed row error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "id,gender,color,head,feather,power,health\nM1,male,white,long,smooth,9,9\n";
        assert!(matches!(
            parse_roster_csv(csv.as_bytes()),
            Err(RosterError::MalformedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_id_rejected() {
        let csv = "id,gender,color,weight,head,feather,power,health\n,male,white,400,long,smooth,9,9\n";
        assert!(matches!(
            parse_roster_csv(csv.as_bytes()),
            Err(RosterError::MissingId { row: 1 })
        ));
    }

    #[test]
    fn test_parse_json_roster() {
        let json = r#"[
            {"id": 1, "gender": "male", "color": "white", "head": "long", "feather": "smooth",
             "weight": 400, "power": 9, "health": 9, "image_path": "a.png"},
            {"id": "F1", "gender": "female", "color": "brown", "head": "short", "feather": "rough",
             "weight": 380, "power": 7, "health": 8}
        ]"#;

        let birds = parse_roster_json(json.as_bytes()).unwrap();

        assert_eq!(birds[0].id, "1");
        assert_eq!(birds[0].image_ref(), "a.png");
        assert_eq!(birds[1].id, "F1");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_roster("/nonexistent/roster.csv").unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }
}
