// Count-up timer used for effect lifetimes and spawn pacing.

#[derive(Debug, Clone)]
pub struct Timer {
    pub limit: f32,
    pub elapsed: f32,
}

impl Timer {
    /// Create a timer that fires once `elapsed` reaches `limit`.
    pub fn new(limit: f32) -> Self {
        Self {
            limit,
            elapsed: 0.0,
        }
    }

    /// Advance the timer by dt (delta time).
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Returns true once the timer has reached its limit.
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.limit
    }

    /// Progress through the timer's lifetime, unclamped above 1.0.
    pub fn fraction(&self) -> f32 {
        self.elapsed / self.limit
    }

    /// Wraps the elapsed value back within bounds for repeating timers.
    pub fn wrap(&mut self) {
        self.elapsed %= self.limit;
    }
}
