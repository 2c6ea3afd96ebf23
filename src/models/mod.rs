pub mod line;
pub mod reason;
pub mod record;

pub use line::Line;
pub use reason::Reason;
pub use record::{RecordKey, WheelRecord};
