/// The low-framerate "native" layer: holds the last captured true position
/// until the capture interval has elapsed.
#[derive(Debug, Clone)]
pub struct NativeCapture {
    last_update: Option<f64>,
    position: f64,
}

impl NativeCapture {
    pub fn new(position: f64) -> Self {
        Self {
            last_update: None,
            position,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn last_update(&self) -> Option<f64> {
        self.last_update
    }

    /// Snaps to `true_position` when more than `interval_ms` has passed since
    /// the previous capture. The first call always captures.
    pub fn update(&mut self, now: f64, interval_ms: f64, true_position: f64) -> bool {
        let due = match self.last_update {
            None => true,
            Some(last) => now - last > interval_ms,
        };
        if due {
            self.last_update = Some(now);
            self.position = true_position;
        }
        due
    }
}
