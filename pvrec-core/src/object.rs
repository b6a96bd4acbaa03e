use crate::detection::Detection;

/// A promoted tracklet: immutable, and independent of any later engine
/// mutation (§4.4).
#[derive(Debug, Clone)]
pub struct Object {
    pub cam_id: i64,
    pub points: Vec<Detection>,
}
