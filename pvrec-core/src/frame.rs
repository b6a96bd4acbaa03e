use crate::detection::DetectionRef;

/// Detections sharing one frame number, tagged with that frame's reference
/// timestamp.
///
/// The engine keeps exactly two of these alive at a time (current and
/// previous, §4.3) — older buffers are dropped once nothing still
/// references their detections.
#[derive(Debug)]
pub(crate) struct Frame {
    pub fno: i64,
    pub mjd: f64,
    pub detections: Vec<DetectionRef>,
}

impl Frame {
    pub(crate) fn new(fno: i64, mjd: f64) -> Self {
        Self {
            fno,
            mjd,
            detections: Vec::new(),
        }
    }

    /// Detections in this frame that no live candidate has admitted yet.
    pub(crate) fn unreferenced(&self) -> impl Iterator<Item = &DetectionRef> {
        self.detections.iter().filter(|d| d.ref_count() == 0)
    }
}
