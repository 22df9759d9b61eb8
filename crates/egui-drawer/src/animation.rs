use egui::emath::easing;

/// Request to move the panel from one resting offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    /// Seconds.
    pub duration: f32,
}

/// Runs a [`Transition`] against the frame clock with cubic in/out easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimation {
    from: f32,
    to: f32,
    start_time: f64,
    duration: f32,
}

impl OffsetAnimation {
    pub fn start(transition: Transition, now: f64) -> Self {
        Self {
            from: transition.from,
            to: transition.to,
            start_time: now,
            duration: transition.duration.max(0.0),
        }
    }

    /// Starts `transition` from wherever `previous` currently is, so a retarget never jumps.
    pub fn supersede(previous: Option<&Self>, transition: Transition, now: f64) -> Self {
        let from = previous.map_or(transition.from, |anim| anim.value(now));
        Self::start(Transition { from, ..transition }, now)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start_time) as f32) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self, now: f64) -> f32 {
        let t = easing::cubic_in_out(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
