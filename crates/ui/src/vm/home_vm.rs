use study_core::Clock;
use study_core::time::DayPart;

use crate::vm::time_fmt::format_long_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub greeting: &'static str,
    pub date_label: String,
    pub avatar_initial: &'static str,
}

impl HomeVm {
    #[must_use]
    pub fn from_clock(clock: Clock) -> Self {
        Self {
            greeting: greeting(clock.day_part()),
            date_label: format_long_date(clock.today()),
            avatar_initial: "U",
        }
    }
}

#[must_use]
pub fn greeting(part: DayPart) -> &'static str {
    match part {
        DayPart::Morning => "Good Morning",
        DayPart::Afternoon => "Good Afternoon",
        DayPart::Evening => "Good Evening",
    }
}
