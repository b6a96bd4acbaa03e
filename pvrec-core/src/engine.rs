use std::mem;

use tracing::{debug, trace};

use crate::candidate::Candidate;
use crate::detection::{Detection, DetectionRef};
use crate::frame::Frame;
use crate::object::Object;
use crate::params::Params;

/// The streaming association engine: one instance per batch (§2, §5).
///
/// Not reentrant, and holds no state shared across instances — independent
/// batches may run on independent engines in parallel.
#[derive(Debug)]
pub struct AssociationEngine {
    active_params: Params,
    pending_params: Params,
    cam_id: Option<i64>,
    current: Option<Frame>,
    previous: Option<Frame>,
    candidates: Vec<Candidate>,
    objects: Vec<Object>,
    batch_open: bool,
}

impl Default for AssociationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AssociationEngine {
    pub fn new() -> Self {
        Self {
            active_params: Params::default(),
            pending_params: Params::default(),
            cam_id: None,
            current: None,
            previous: None,
            candidates: Vec::new(),
            objects: Vec::new(),
            batch_open: false,
        }
    }

    /// Queue new parameters. Takes effect starting with the next
    /// [`Self::begin_batch`] — never mid-batch (§4.1).
    pub fn set_params(&mut self, p: Params) {
        self.pending_params = p;
    }

    /// Reset all internal state for a new batch and remember `cam_id` for
    /// output tagging.
    pub fn begin_batch(&mut self, cam_id: i64) {
        self.active_params = self.pending_params.clone();
        self.cam_id = Some(cam_id);
        self.current = None;
        self.previous = None;
        self.candidates.clear();
        self.objects.clear();
        self.batch_open = true;
        debug!(cam_id, "batch started");
    }

    /// Accept one detection. Ignored if called before [`Self::begin_batch`]
    /// (§4.1 "fails silently").
    pub fn push_detection(&mut self, d: Detection) {
        if !self.batch_open {
            return;
        }
        let opens_new_frame = match &self.current {
            Some(f) => f.fno != d.fno,
            None => true,
        };
        if opens_new_frame {
            if self.current.is_some() {
                self.close_frame();
            }
            self.current = Some(Frame::new(d.fno, d.mjd));
        }
        let frame = self.current.as_mut().expect("just opened above");
        frame.detections.push(DetectionRef::new(d));
    }

    /// Close the open frame, promote every remaining eligible candidate,
    /// and clear the candidate population.
    pub fn end_batch(&mut self) {
        if !self.batch_open {
            return;
        }
        if self.current.is_some() {
            self.close_frame();
        }
        for c in self.candidates.drain(..) {
            self.promote_if_eligible(c);
        }
        self.batch_open = false;
        debug!("batch ended, {} objects promoted so far", self.objects.len());
    }

    /// The promoted output accumulated so far: `(cam_id, objects)`.
    pub fn objects(&self) -> (Option<i64>, &[Object]) {
        (self.cam_id, &self.objects)
    }

    // -- frame-close algorithm (§4.1) ---------------------------------

    fn close_frame(&mut self) {
        let frame = self.current.take().expect("caller checked current.is_some()");
        trace!(fno = frame.fno, mjd = frame.mjd, "closing frame");

        self.retire_stale(frame.mjd);
        self.extend(&frame);
        self.disambiguate_and_commit(frame.mjd);
        self.seed_new(&frame);

        self.previous = Some(frame);
    }

    /// Step 1: retire candidates whose gap since their last update exceeds
    /// `dt_max`, or is negative (out-of-order staleness, §7).
    fn retire_stale(&mut self, frame_mjd: f64) {
        let params = self.active_params.clone();
        let (to_keep, to_retire): (Vec<Candidate>, Vec<Candidate>) =
            mem::take(&mut self.candidates)
                .into_iter()
                .partition(|c| {
                    let dt = frame_mjd - c.last_update_mjd;
                    !(dt > params.dt_max || dt < 0.0)
                });
        self.candidates = to_keep;
        for c in to_retire {
            self.promote_if_eligible(c);
        }
    }

    /// Step 2: tentatively extend every surviving candidate with every
    /// detection in the just-closed frame.
    fn extend(&mut self, frame: &Frame) {
        let params = &self.active_params;
        for c in &mut self.candidates {
            let (px, py) = {
                let p = c.last_confirmed();
                (p.x, p.y)
            };
            for d in &frame.detections {
                let dx = (d.x - px).abs();
                let dy = (d.y - py).abs();
                let step_ok = (params.step_min..=params.step_max).contains(&dx)
                    && (params.step_min..=params.step_max).contains(&dy);
                if !step_ok {
                    continue;
                }
                if c.has_motion_model() {
                    let (x_exp, y_exp) = c.predict(frame.mjd);
                    if (x_exp - d.x).abs() > params.dxy_max || (y_exp - d.y).abs() > params.dxy_max
                    {
                        continue;
                    }
                }
                c.admit_tentative(d.clone());
            }
        }
    }

    /// Step 3: resolve each candidate's tentative list down to at most one
    /// winner and commit it to the confirmed list.
    fn disambiguate_and_commit(&mut self, frame_mjd: f64) {
        for c in &mut self.candidates {
            if c.tentative.is_empty() {
                continue;
            }
            let winner = if c.has_motion_model() {
                let (x_exp, y_exp) = c.predict(frame_mjd);
                let mut best_idx = 0;
                let mut best_d2 = f64::INFINITY;
                for (i, d) in c.tentative.iter().enumerate() {
                    let dx = d.x - x_exp;
                    let dy = d.y - y_exp;
                    let d2 = dx * dx + dy * dy;
                    if d2 < best_d2 {
                        best_d2 = d2;
                        best_idx = i;
                    }
                }
                best_idx
            } else {
                // Exactly 1 confirmed point: the spec only specifies
                // behavior for exactly one tentative detection. With more
                // than one we keep the deterministic insertion-order
                // tie-break used everywhere else and take the first.
                0
            };

            let tentative = mem::take(&mut c.tentative);
            for (i, d) in tentative.into_iter().enumerate() {
                if i == winner {
                    c.commit(d);
                } else {
                    d.decref();
                }
            }
        }
    }

    /// Step 4: seed new candidates from unreferenced detections in the
    /// previous and just-closed frames.
    fn seed_new(&mut self, frame: &Frame) {
        let params = &self.active_params;
        let Some(previous) = &self.previous else {
            return;
        };
        let prev_unreferenced: Vec<DetectionRef> = previous.unreferenced().cloned().collect();
        let cur_unreferenced: Vec<DetectionRef> = frame.unreferenced().cloned().collect();

        for a in &prev_unreferenced {
            for b in &cur_unreferenced {
                let dt = b.mjd - a.mjd;
                let dx = (b.x - a.x).abs();
                let dy = (b.y - a.y).abs();
                let in_window = (params.step_min..=params.step_max).contains(&dx)
                    && (params.step_min..=params.step_max).contains(&dy);
                if !in_window || dt <= 0.0 {
                    continue;
                }
                let vx = (b.x - a.x) / dt;
                let vy = (b.y - a.y) / dt;
                a.incref();
                b.incref();
                self.candidates.push(Candidate::seed(a.clone(), b.clone(), vx, vy));
            }
        }
    }

    fn promote_if_eligible(&mut self, c: Candidate) {
        if c.confirmed.len() >= self.active_params.npt_min {
            let points = c.confirmed.iter().map(|d| d.snapshot()).collect();
            self.objects.push(Object {
                cam_id: self.cam_id.unwrap_or_default(),
                points,
            });
        } else {
            for d in &c.confirmed {
                d.decref();
            }
        }
    }
}
