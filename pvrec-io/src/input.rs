//! Line parsing for the comma-separated detection record format (§6).
//!
//! Grounded on `csv-eof`'s minimal, single-purpose style: this module does
//! one thing (turn raw records into [`Detection`]s) and leaves batching
//! and file traversal to sibling modules.

use std::io::Read;

use chrono::NaiveDateTime;
use pvrec_core::Detection;
use tracing::warn;

use crate::error::Result;

/// One successfully parsed input record, tagged with the camera id column
/// (which the CLI uses to call [`pvrec_core::AssociationEngine::begin_batch`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub camera_id: i64,
    pub detection: Detection,
}

/// The result of parsing one input file: successfully parsed records in
/// file order, plus a count of lines skipped for being malformed (§7,
/// "input malformed: skip the line, continue").
#[derive(Debug, Default)]
pub struct ParsedInput {
    pub records: Vec<Record>,
    pub malformed_lines: usize,
}

/// Parse a reader's worth of input-file content. The first record is
/// always treated as a header and skipped, regardless of its contents.
pub fn parse<R: Read>(reader: R) -> Result<ParsedInput> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut out = ParsedInput::default();
    for (lineno, result) in csv_reader.records().enumerate() {
        let record = result?;
        match parse_record(&record) {
            Some(r) => out.records.push(r),
            None => {
                out.malformed_lines += 1;
                warn!(lineno = lineno + 2, "skipping malformed input line");
            }
        }
    }
    Ok(out)
}

fn parse_record(record: &csv::StringRecord) -> Option<Record> {
    if record.len() != 10 {
        return None;
    }
    let timestamp = record.get(0)?.trim();
    let fno: i64 = record.get(1)?.trim().parse().ok()?;
    let x: f64 = record.get(2)?.trim().parse().ok()?;
    let y: f64 = record.get(3)?.trim().parse().ok()?;
    let ra: f64 = record.get(4)?.trim().parse().ok()?;
    let dec: f64 = record.get(5)?.trim().parse().ok()?;
    let mag: f64 = record.get(6)?.trim().parse().ok()?;
    let _mag_err: f64 = record.get(7)?.trim().parse().ok()?;
    let micros: u32 = record.get(8)?.trim().parse().ok()?;
    let camera_id: i64 = record.get(9)?.trim().parse().ok()?;

    let ts = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").ok()?;
    use chrono::{Datelike, Timelike};
    let mjd = pvrec_datetime::utc_to_mjd(
        ts.year(),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second(),
        micros,
    );

    Some(Record {
        camera_id,
        detection: Detection::new(fno, mjd, x, y, ra, dec, mag),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_file() {
        let data = "timestamp,frame_no,x,y,ra,dec,mag,mag_err,microseconds,camera_id\n\
                     2019-02-13 12:30:00,1,100.0,100.0,10.5,-5.2,18.3,0.1,500000,7\n";
        let parsed = parse(data.as_bytes()).unwrap();
        assert_eq!(parsed.malformed_lines, 0);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].camera_id, 7);
        assert_eq!(parsed.records[0].detection.fno, 1);
        assert_eq!(parsed.records[0].detection.mag, 18.3);
    }

    #[test]
    fn skips_malformed_lines_without_failing_the_file() {
        let data = "header\n\
                     2019-02-13 12:30:00,1,100.0,100.0,10.5,-5.2,18.3,0.1,500000,7\n\
                     not,a,valid,line\n\
                     2019-02-13 12:30:01,2,110.0,105.0,10.6,-5.1,18.1,0.1,0,7\n";
        let parsed = parse(data.as_bytes()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.malformed_lines, 1);
    }
}
