//! Tracklet file writing (§6).
//!
//! Grounded on `flydra2/src/write_data.rs`'s pattern of a small writer
//! struct holding open-file bookkeeping, simplified here since each object
//! gets its own short-lived file instead of one long-lived stream.

use std::collections::HashMap;
use std::path::PathBuf;

use pvrec_core::{Detection, Object};

use crate::error::Result;

const MAGNITUDE_SENTINEL: f64 = 99.99;
const MAGNITUDE_CUTOFF: f64 = 20.0;

/// Writes one file per promoted object, tracking the per-camera sequence
/// counter across however many objects this process instance emits.
#[derive(Debug, Default)]
pub struct TrackletWriter {
    out_dir: PathBuf,
    sequence: HashMap<i64, u32>,
}

impl TrackletWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            sequence: HashMap::new(),
        }
    }

    /// Write `object` to its own file and return the path written.
    pub fn write_object(&mut self, object: &Object) -> Result<PathBuf> {
        let first = object
            .points
            .first()
            .expect("a promoted object always has at least one point");
        let (year, month, day, _, _, _) = pvrec_datetime::mjd_to_calendar(first.mjd);

        let seq = self.sequence.entry(object.cam_id).or_insert(0);
        *seq += 1;

        let filename = format!(
            "{:04}{:02}{:02}_{:03}_{:04}.txt",
            year, month, day, object.cam_id, *seq
        );
        let path = self.out_dir.join(filename);

        let mut body = String::new();
        for point in &object.points {
            body.push_str(&format_line(point));
            body.push_str("\r\n");
        }
        std::fs::write(&path, body)?;
        Ok(path)
    }
}

fn format_line(d: &Detection) -> String {
    let (year, month, day, hour, minute, seconds) = pvrec_datetime::mjd_to_calendar(d.mjd);
    let mag = if d.mag > MAGNITUDE_CUTOFF {
        MAGNITUDE_SENTINEL
    } else {
        d.mag
    };
    format!(
        "{:04} {:02} {:02} {:02} {:02} {:06.3} {:04}  {:.5}  {:.5}  {:.2}",
        year, month, day, hour, minute, seconds, d.fno, d.ra, d.dec, mag
    )
}

/// Optional adapter-side post-filter for the disabled
/// `-16 deg < dec < 0 deg` geosynchronous-belt restriction from the
/// original source. Not applied by default; callers that want the
/// original behavior can filter promoted objects with this before writing
/// them (Open Question 2).
pub fn geosynchronous_belt_filter(object: &Object) -> bool {
    object
        .points
        .iter()
        .all(|p| !(-16.0 < p.dec && p.dec < 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(fno: i64, mjd: f64, ra: f64, dec: f64, mag: f64) -> Detection {
        Detection::new(fno, mjd, 0.0, 0.0, ra, dec, mag)
    }

    #[test]
    fn filename_and_sequence_counter_per_camera() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = TrackletWriter::new(dir.path());
        let obj = Object {
            cam_id: 7,
            points: vec![det(1, 0.0, 10.0, -5.0, 18.0)],
        };
        let p1 = writer.write_object(&obj).unwrap();
        let p2 = writer.write_object(&obj).unwrap();
        assert!(p1.file_name().unwrap().to_string_lossy().ends_with("_007_0001.txt"));
        assert!(p2.file_name().unwrap().to_string_lossy().ends_with("_007_0002.txt"));
    }

    #[test]
    fn magnitude_sentinel_applies_above_cutoff() {
        let line = format_line(&det(3, 0.0, 10.0, -5.0, 25.0));
        assert!(line.ends_with("99.99"));
    }

    #[test]
    fn magnitude_under_cutoff_is_rendered_as_is() {
        let line = format_line(&det(3, 0.0, 10.0, -5.0, 18.3));
        assert!(line.ends_with("18.30"));
    }

    #[test]
    fn belt_filter_rejects_objects_inside_the_band() {
        let inside = Object {
            cam_id: 1,
            points: vec![det(1, 0.0, 0.0, -8.0, 10.0)],
        };
        let outside = Object {
            cam_id: 1,
            points: vec![det(1, 0.0, 0.0, 30.0, 10.0)],
        };
        assert!(!geosynchronous_belt_filter(&inside));
        assert!(geosynchronous_belt_filter(&outside));
    }
}
