pub mod drone;
pub mod mission;
pub mod select_item;
pub mod schedule;

pub use drone::DroneRecord;
pub use mission::MissionRecord;
pub use select_item::{SelectItem, Selectable, decode_records, keep_selectable};
pub use schedule::{ScheduleRequest, ScheduleStatus};
