use crate::core::context::AppContext;
use crate::core::entry::{EntryController, EntryForm};
use crate::errors::AppResult;
use crate::models::{Line, WheelRecord};
use crate::ui::messages::warning;
use chrono::NaiveDate;

pub struct AddLogic;

impl AddLogic {
    /// Insert a new measurement and log it.
    pub fn apply(
        ctx: &AppContext,
        line: Line,
        input: EntryForm,
        today: NaiveDate,
    ) -> AppResult<WheelRecord> {
        let rec = EntryController::add(&ctx.store, input, line, today)?;

        // the row is already on disk
        if let Err(e) = ctx.audit.record(
            "add",
            &format!("#{} {}/{}", rec.id, rec.line, rec.car_number),
            &format!(
                "diameter={} date={} reason={} by {}",
                rec.diameter_str(),
                rec.date_str(),
                rec.reason,
                rec.modifier
            ),
        ) {
            warning(format!("Record #{} added but not logged: {e}", rec.id));
        }

        Ok(rec)
    }
}
