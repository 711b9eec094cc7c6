use time::{Duration, Time};

/// Running clock for a single-day walk. Wraps past midnight.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalClock {
    now: Time,
}

impl ArrivalClock {
    pub fn starting_at(start: Time) -> Self {
        Self { now: start }
    }

    /// Advance by the travel leg and return the arrival time.
    pub fn arrive(&mut self, travel_minutes: u32) -> Time {
        self.now += Duration::minutes(i64::from(travel_minutes));
        self.now
    }

    /// Advance by the time spent at the stop.
    pub fn stay(&mut self, visit_minutes: u32) {
        self.now += Duration::minutes(i64::from(visit_minutes));
    }
}

/// "HH:MM", zero-padded, seconds dropped.
pub fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
