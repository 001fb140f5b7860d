//! Spreadsheet import for bulk duty points and bulk personnel
//!
//! Both upload modals accept `.xlsx`/`.xls` workbooks (read with calamine)
//! or `.csv` files. Cells are normalised to trimmed strings before the
//! header mapping runs, so the mappers and their tests are independent of
//! the container format.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use thiserror::Error;

use crate::model::{NewPerson, QrDraft};

/// Why an uploaded file could not be turned into rows.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File is empty.")]
    Empty,
    #[error("Missing required columns: {0}")]
    MissingColumns(&'static str),
    #[error("No valid rows found in the file.")]
    NoValidRows,
    #[error("Could not read spreadsheet: {0}")]
    Unreadable(String),
}

const DUTY_COLUMNS: &str = "'Latitude', 'Longitude', 'Police Station', 'cug'";
const RECRUIT_COLUMNS: &str =
    "'name', 'pnoNo', 'Password' (case-sensitive), 'co', 'policeStation'";

/// Parse a bulk duty-point sheet into QR drafts.
///
/// Rows missing latitude, longitude, police station, or a usable CUG number
/// are dropped; the duty-point column is optional.
pub fn parse_duty_points(bytes: &[u8], file_name: &str) -> Result<Vec<QrDraft>, ImportError> {
    map_duty_rows(&sheet_rows(bytes, file_name)?)
}

/// Parse a bulk personnel sheet into signup payloads.
///
/// Headers are matched exactly, including the capital-P `Password`. Rows
/// blank in name, PNO, or password are dropped.
pub fn parse_recruits(bytes: &[u8], file_name: &str) -> Result<Vec<NewPerson>, ImportError> {
    map_recruit_rows(&sheet_rows(bytes, file_name)?)
}

fn sheet_rows(bytes: &[u8], file_name: &str) -> Result<Vec<Vec<String>>, ImportError> {
    let rows = if file_name.to_lowercase().ends_with(".csv") {
        csv_rows(bytes)?
    } else {
        workbook_rows(bytes)?
    };
    if rows.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(rows)
}

fn csv_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::Unreadable(e.to_string()))?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }
    Ok(rows)
}

fn workbook_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::Empty)?
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

/// Render a workbook cell the way it reads in the sheet; integral floats
/// lose the trailing `.0` so numeric PNO and CUG columns survive as-is.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| aliases.contains(&header.as_str()))
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

fn map_duty_rows(rows: &[Vec<String>]) -> Result<Vec<QrDraft>, ImportError> {
    let headers = &rows[0];
    let lat = find_column(headers, &["Latitude", "latitude", "Lattitude", "lattitude"]);
    let long = find_column(headers, &["Longitude", "longitude"]);
    let station = find_column(headers, &["Police Station", "policeStation"]);
    let duty = find_column(headers, &["Duty Point", "dutyPoint"]);
    let cug_col = find_column(headers, &["cug", "CUG"]);

    let (Some(lat), Some(long), Some(station), Some(cug_col)) = (lat, long, station, cug_col)
    else {
        return Err(ImportError::MissingColumns(DUTY_COLUMNS));
    };

    let drafts: Vec<QrDraft> = rows[1..]
        .iter()
        .filter_map(|row| {
            let latitude = cell(row, lat);
            let longitude = cell(row, long);
            let police_station = cell(row, station);
            let cug: i64 = cell(row, cug_col).parse().ok()?;
            if latitude.is_empty() || longitude.is_empty() || police_station.is_empty() || cug == 0
            {
                return None;
            }
            Some(QrDraft {
                latitude,
                longitude,
                police_station,
                duty_point: duty.map(|i| cell(row, i)).unwrap_or_default(),
                cug: Some(cug),
            })
        })
        .collect();

    if drafts.is_empty() {
        return Err(ImportError::NoValidRows);
    }
    Ok(drafts)
}

fn map_recruit_rows(rows: &[Vec<String>]) -> Result<Vec<NewPerson>, ImportError> {
    let headers = &rows[0];
    let name = find_column(headers, &["name"]);
    let pno = find_column(headers, &["pnoNo"]);
    let password = find_column(headers, &["Password"]);
    let co = find_column(headers, &["co"]);
    let station = find_column(headers, &["policeStation"]);

    let (Some(name), Some(pno), Some(password), Some(co), Some(station)) =
        (name, pno, password, co, station)
    else {
        return Err(ImportError::MissingColumns(RECRUIT_COLUMNS));
    };

    let recruits: Vec<NewPerson> = rows[1..]
        .iter()
        .filter_map(|row| {
            let person = NewPerson {
                name: cell(row, name),
                pno_no: cell(row, pno),
                password: cell(row, password),
                co: cell(row, co),
                police_station: cell(row, station),
            };
            if person.name.is_empty() || person.pno_no.is_empty() || person.password.is_empty() {
                return None;
            }
            Some(person)
        })
        .collect();

    if recruits.is_empty() {
        return Err(ImportError::NoValidRows);
    }
    Ok(recruits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_points_from_csv() {
        let csv = b"Latitude,Longitude,Police Station,Duty Point,cug\n\
                    29.4513,77.3152,Shamli,Bus Stand,9876543210\n\
                    29.4601,77.3020,Kairana,,9876500000\n";
        let drafts = parse_duty_points(csv, "points.csv").unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].police_station, "Shamli");
        assert_eq!(drafts[0].duty_point, "Bus Stand");
        assert_eq!(drafts[0].cug, Some(9876543210));
        assert_eq!(drafts[1].duty_point, "");
    }

    #[test]
    fn test_duty_points_header_aliases() {
        let csv = b"lattitude,longitude,policeStation,dutyPoint,CUG\n\
                    29.4513,77.3152,Shamli,Chowk,9876543210\n";
        let drafts = parse_duty_points(csv, "points.csv").unwrap();
        assert_eq!(drafts[0].latitude, "29.4513");
    }

    #[test]
    fn test_duty_points_drop_incomplete_rows() {
        let csv = b"Latitude,Longitude,Police Station,cug\n\
                    ,77.3152,Shamli,9876543210\n\
                    29.4513,77.3152,Shamli,not-a-number\n\
                    29.4513,77.3152,Shamli,0\n\
                    29.4513,77.3152,Shamli,9876543210\n";
        let drafts = parse_duty_points(csv, "points.csv").unwrap();
        assert_eq!(drafts.len(), 1);
    }

    #[test]
    fn test_duty_points_missing_columns() {
        let csv = b"Latitude,Longitude\n29.4,77.3\n";
        let err = parse_duty_points(csv, "points.csv").unwrap_err();
        assert!(matches!(err, ImportError::MissingColumns(_)));
    }

    #[test]
    fn test_duty_points_no_valid_rows() {
        let csv = b"Latitude,Longitude,Police Station,cug\n,,,\n";
        let err = parse_duty_points(csv, "points.csv").unwrap_err();
        assert!(matches!(err, ImportError::NoValidRows));
    }

    #[test]
    fn test_recruits_from_csv() {
        let csv = b"name,pnoNo,Password,co,policeStation\n\
                    Amit Kumar,1001,secret1,city,shamli\n\
                    ,1002,secret2,city,shamli\n\
                    Ravi Verma,2002,secret3,kairana,kandhala\n";
        let recruits = parse_recruits(csv, "recruits.csv").unwrap();
        assert_eq!(recruits.len(), 2);
        assert_eq!(recruits[0].pno_no, "1001");
        assert_eq!(recruits[1].co, "kairana");
    }

    #[test]
    fn test_recruit_password_header_is_case_sensitive() {
        let csv = b"name,pnoNo,password,co,policeStation\n\
                    Amit Kumar,1001,secret1,city,shamli\n";
        let err = parse_recruits(csv, "recruits.csv").unwrap_err();
        assert!(matches!(err, ImportError::MissingColumns(_)));
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(
            parse_recruits(b"", "recruits.csv").unwrap_err(),
            ImportError::Empty
        ));
    }

    #[test]
    fn test_unreadable_workbook() {
        // Legacy .xls and plain garbage both land here: not a zip container.
        let err = parse_duty_points(b"not a workbook", "points.xls").unwrap_err();
        assert!(matches!(err, ImportError::Unreadable(_)));
    }

    #[test]
    fn test_cell_to_string_numeric_normalisation() {
        assert_eq!(cell_to_string(&Data::Float(9876543210.0)), "9876543210");
        assert_eq!(cell_to_string(&Data::Float(29.4513)), "29.4513");
        assert_eq!(cell_to_string(&Data::Int(1001)), "1001");
        assert_eq!(cell_to_string(&Data::String("  Shamli ".to_string())), "Shamli");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
