use crate::api::StatsWire;
use crate::config::PageConfig;

/// Round half up, the way the page has always displayed counters.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Fixed-increment count-up: `range / (duration / tick)` per tick until the end is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    end: f64,
    increment: f64,
    tick_ms: f64,
    pending_ms: f64,
    displayed: i64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(start: f64, end: f64, duration_ms: f64, tick_ms: f64) -> Self {
        let range = end - start;
        let increment = range / (duration_ms / tick_ms);
        Self {
            current: start,
            end,
            increment,
            tick_ms,
            pending_ms: 0.0,
            displayed: round_half_up(start),
            finished: false,
        }
    }

    /// Counter resting at zero, as shown before any stats arrive.
    pub fn idle() -> Self {
        Self {
            current: 0.0,
            end: 0.0,
            increment: 0.0,
            tick_ms: 1.0,
            pending_ms: 0.0,
            displayed: 0,
            finished: true,
        }
    }

    /// One interval tick.
    pub fn tick(&mut self) -> i64 {
        if self.finished {
            return self.displayed;
        }
        self.current += self.increment;
        if self.current >= self.end {
            self.displayed = round_half_up(self.end);
            self.finished = true;
        } else {
            self.displayed = round_half_up(self.current);
        }
        self.displayed
    }

    /// Run as many whole ticks as fit in the elapsed time.
    pub fn advance(&mut self, elapsed_ms: f64) -> i64 {
        if self.finished {
            return self.displayed;
        }
        self.pending_ms += elapsed_ms;
        while self.pending_ms >= self.tick_ms && !self.finished {
            self.pending_ms -= self.tick_ms;
            self.tick();
        }
        self.displayed
    }

    pub fn displayed(&self) -> i64 {
        self.displayed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    DaysTogether,
    MessagesSent,
    PhotosShared,
    LoveLevel,
}

impl Stat {
    pub const ALL: [Stat; 4] = [
        Stat::DaysTogether,
        Stat::MessagesSent,
        Stat::PhotosShared,
        Stat::LoveLevel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stat::DaysTogether => "Days Together",
            Stat::MessagesSent => "Love Messages",
            Stat::PhotosShared => "Memories Shared",
            Stat::LoveLevel => "Love Level",
        }
    }

    pub fn value(self, stats: &StatsWire) -> i64 {
        match self {
            Stat::DaysTogether => stats.days_together,
            Stat::MessagesSent => stats.messages_sent,
            Stat::PhotosShared => stats.photos_shared,
            Stat::LoveLevel => stats.love_level,
        }
    }

    fn index(self) -> usize {
        match self {
            Stat::DaysTogether => 0,
            Stat::MessagesSent => 1,
            Stat::PhotosShared => 2,
            Stat::LoveLevel => 3,
        }
    }
}

/// The four stat counters shown on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsBoard {
    counters: [CounterAnimation; 4],
    pub demo: bool,
}

impl Default for StatsBoard {
    fn default() -> Self {
        Self {
            counters: std::array::from_fn(|_| CounterAnimation::idle()),
            demo: false,
        }
    }
}

impl StatsBoard {
    /// Restart every counter from zero toward the given values.
    pub fn start(&mut self, stats: &StatsWire, demo: bool, config: &PageConfig) {
        for stat in Stat::ALL {
            self.counters[stat.index()] = CounterAnimation::new(
                0.0,
                stat.value(stats) as f64,
                config.counter_duration_ms,
                config.counter_tick_ms,
            );
        }
        self.demo = demo;
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        for counter in &mut self.counters {
            counter.advance(elapsed_ms);
        }
    }

    pub fn displayed(&self, stat: Stat) -> i64 {
        self.counters[stat.index()].displayed()
    }

    pub fn is_finished(&self) -> bool {
        self.counters.iter().all(CounterAnimation::is_finished)
    }
}
