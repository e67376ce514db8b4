use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike, Utc};

/// A simple clock abstraction so screens and tests agree on "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Default,
    /// A fixed wall-clock reading, interpreted as local time.
    Fixed(NaiveDateTime),
}

impl Clock {
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    /// Current local wall-clock time.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Default => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    #[must_use]
    pub fn day_part(&self) -> DayPart {
        DayPart::from_hour(self.now().hour())
    }
}

/// Coarse time of day used for greetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPart::Morning
        } else if hour < 18 {
            DayPart::Afternoon
        } else {
            DayPart::Evening
        }
    }
}

/// Deterministic timestamp for tests and examples (2026-10-15T09:30:00Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_792_056_600;

/// Returns a deterministic wall-clock reading for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
        .naive_utc()
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
