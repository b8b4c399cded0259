pub mod schedule_viewmodel;

pub use schedule_viewmodel::{ScheduleViewModel, SubmitOutcome};
