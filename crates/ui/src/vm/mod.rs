mod focus_vm;
mod home_vm;
mod plan_vm;
mod theme_vm;
mod time_fmt;

pub use focus_vm::{FocusVm, SessionTileVm};
pub use home_vm::{HomeVm, greeting};
pub use plan_vm::{ChoiceVm, PlanFormVm, subject_icon, task_icon};
pub use theme_vm::{ThemeOptionVm, theme_class, theme_options};
pub use time_fmt::{
    format_countdown, format_date_input, format_long_date, format_short_date, parse_date_input,
};
