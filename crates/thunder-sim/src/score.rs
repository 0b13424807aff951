//! Score for the current run.

/// Run score plus the delta awarded during the current tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub total: u64,
    pub tick_delta: u64,
    pub enemies_destroyed: u32,
}

impl ScoreState {
    /// Start a new tick's delta.
    pub fn begin_tick(&mut self) {
        self.tick_delta = 0;
    }

    pub fn award(&mut self, points: u32) {
        self.total += u64::from(points);
        self.tick_delta += u64::from(points);
        self.enemies_destroyed += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
