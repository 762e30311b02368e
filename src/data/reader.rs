//! CSV data reader.

use super::{CensusData, StateRecord};
use crate::error::{CensusError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Survey data reader.
#[derive(Debug)]
pub struct CensusReader;

impl CensusReader {
    /// Read a survey CSV file.
    pub fn read_file(path: &Path) -> Result<CensusData> {
        let file = File::open(path).map_err(|e| CensusError::file_open(path.to_path_buf(), e))?;
        let records = Self::read_records(file)?;

        if records.is_empty() {
            return Err(CensusError::empty_dataset(path));
        }

        tracing::info!("Loaded {} records from {}", records.len(), path.display());
        for record in &records {
            tracing::debug!(?record, "parsed record");
        }

        Ok(CensusData::from_records(records))
    }

    /// Parse records from any reader. The first row must be the header.
    pub fn read_records<R: Read>(reader: R) -> Result<Vec<StateRecord>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: StateRecord = result?;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "id,state,abbr,poverty,povertyMoe,age,ageMoe,income,incomeMoe,healthcare,healthcareLow,healthcareHigh,obesity,obesityLow,obesityHigh,smokes,smokesLow,smokesHigh";

    #[test]
    fn reads_fixed_schema_and_ignores_extra_columns() {
        let csv = format!(
            "{HEADER}\n1,Alabama,AL,19.3,0.5,38.6,0.2,42830,598,13.9,12.7,15.1,33.5,32.1,35,21.1,19.8,22.5\n"
        );
        let records = CensusReader::read_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let al = &records[0];
        assert_eq!(al.id, Some(1));
        assert_eq!(al.state, "Alabama");
        assert_eq!(al.abbr, "AL");
        assert_eq!(al.income, 42830.0);
        assert_eq!(al.obesity, 33.5);
        assert_eq!(al.smokes, 21.1);
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "abbr,state,age,poverty,income,smokes,obesity,healthcare\nOH, Ohio ,39.4,15.8,49429,21.6,30.4,8.4\n";
        let records = CensusReader::read_records(csv.as_bytes()).unwrap();
        assert_eq!(records[0].state, "Ohio");
        assert_eq!(records[0].id, None);
        assert_eq!(records[0].healthcare, 8.4);
    }

    #[test]
    fn bad_number_reports_line() {
        let csv = "state,abbr,poverty,age,income,healthcare,smokes,obesity\nOhio,OH,15.8,39.4,49429,8.4,21.6,30.4\nUtah,UT,n/a,30.5,60922,13.7,9.7,24.5\n";
        let err = CensusReader::read_records(csv.as_bytes()).unwrap_err();
        match err {
            CensusError::Csv { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let err = CensusReader::read_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, CensusError::FileOpen { .. }));
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "state,abbr,poverty,age,income,healthcare,smokes,obesity").unwrap();
        let err = CensusReader::read_file(file.path()).unwrap_err();
        assert!(matches!(err, CensusError::EmptyDataset { .. }));
    }

    #[test]
    fn read_file_builds_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "state,abbr,poverty,age,income,healthcare,smokes,obesity").unwrap();
        writeln!(file, "Ohio,OH,15.8,39.4,49429,8.4,21.6,30.4").unwrap();
        writeln!(file, "Utah,UT,11.7,30.5,60922,13.7,9.7,24.5").unwrap();
        let data = CensusReader::read_file(file.path()).unwrap();
        assert_eq!(data.len(), 2);
    }
}
