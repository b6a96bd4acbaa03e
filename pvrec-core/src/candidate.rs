use crate::detection::DetectionRef;
use crate::motion::{accelerated, linear};

/// A tracklet under construction.
///
/// `tentative` holds detections admitted this frame pending disambiguation
/// (§4.1 step 2); it is always emptied again before the frame-close
/// finishes (step 3).
#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) confirmed: Vec<DetectionRef>,
    pub(crate) tentative: Vec<DetectionRef>,
    vx: f64,
    vy: f64,
    ax: f64,
    ay: f64,
    pub(crate) last_update_mjd: f64,
}

impl Candidate {
    /// Seed a new candidate from a pair of detections in adjacent frames
    /// (§4.1 step 4).
    pub(crate) fn seed(a: DetectionRef, b: DetectionRef, vx: f64, vy: f64) -> Self {
        let last_update_mjd = b.mjd;
        Self {
            confirmed: vec![a, b],
            tentative: Vec::new(),
            vx,
            vy,
            ax: 0.0,
            ay: 0.0,
            last_update_mjd,
        }
    }

    pub(crate) fn last_confirmed(&self) -> &DetectionRef {
        self.confirmed
            .last()
            .expect("a candidate always has at least one confirmed point")
    }

    pub(crate) fn has_motion_model(&self) -> bool {
        self.confirmed.len() >= 2
    }

    /// Expected position at `mjd`, per §4.2. Only meaningful once
    /// [`Self::has_motion_model`] is true.
    pub(crate) fn predict(&self, mjd: f64) -> (f64, f64) {
        let p = self.last_confirmed();
        let dt = mjd - p.mjd;
        let p = (p.x, p.y);
        if self.confirmed.len() >= 3 {
            accelerated::predict(p, (self.vx, self.vy), (self.ax, self.ay), dt)
        } else {
            linear::predict(p, (self.vx, self.vy), dt)
        }
    }

    /// Admit `d` into the tentative list, marking it as referenced.
    pub(crate) fn admit_tentative(&mut self, d: DetectionRef) {
        d.incref();
        self.tentative.push(d);
    }

    /// Append `d` (already removed from `tentative` by the caller) to the
    /// confirmed list, updating velocity/acceleration and
    /// `last_update_mjd` per §4.2.
    pub(crate) fn commit(&mut self, d: DetectionRef) {
        let prev = self.last_confirmed().clone();
        let had_velocity = self.confirmed.len() >= 2;

        if let Some((vx, vy)) = linear::velocity((prev.x, prev.y), (d.x, d.y), d.mjd - prev.mjd) {
            if had_velocity {
                let (ax, ay) = accelerated::acceleration((self.vx, self.vy), (vx, vy));
                self.ax = ax;
                self.ay = ay;
            }
            self.vx = vx;
            self.vy = vy;
        }
        // dt == 0: degenerate step. Keep the previous velocity/acceleration
        // but still admit the point (§7 "degenerate time step").

        self.last_update_mjd = d.mjd;
        self.confirmed.push(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::Detection;
    use std::rc::Rc;

    fn det(fno: i64, mjd: f64, x: f64, y: f64) -> DetectionRef {
        Rc::new(Detection::new(fno, mjd, x, y, 0.0, 0.0, 10.0))
    }

    #[test]
    fn seed_sets_velocity_and_two_confirmed_points() {
        let a = det(1, 0.0, 100.0, 100.0);
        let b = det(2, 1.0, 110.0, 105.0);
        let c = Candidate::seed(a, b, 10.0, 5.0);
        assert_eq!(c.confirmed.len(), 2);
        assert!(!c.has_motion_model() == false);
        assert_eq!(c.last_update_mjd, 1.0);
    }

    #[test]
    fn commit_updates_acceleration_only_from_third_point_on() {
        let a = det(1, 0.0, 0.0, 0.0);
        let b = det(2, 1.0, 10.0, 0.0);
        let mut c = Candidate::seed(a, b, 10.0, 0.0);
        let third = det(3, 2.0, 22.0, 0.0);
        c.commit(third);
        assert_eq!(c.confirmed.len(), 3);
        // vx went from 10 to 12, so ax = 2.
        assert_eq!(c.ax, 2.0);
    }

    #[test]
    fn commit_skips_velocity_update_on_degenerate_step() {
        let a = det(1, 0.0, 0.0, 0.0);
        let b = det(2, 1.0, 10.0, 0.0);
        let mut c = Candidate::seed(a, b, 10.0, 0.0);
        let same_time = det(3, 1.0, 999.0, 999.0);
        c.commit(same_time);
        // velocity unchanged despite the wild x/y on the degenerate point.
        assert_eq!(c.vx, 10.0);
        assert_eq!(c.vy, 0.0);
        assert_eq!(c.confirmed.len(), 3);
    }
}
