use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Counters of a single search invocation.
#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub relaxations: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.relaxations = 0;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} relaxations in {:?}",
            self.nodes_settled, self.relaxations, self.duration
        )
    }
}
