use crate::core::context::AppContext;
use crate::core::edit::check_secret;
use crate::errors::AppResult;
use crate::models::{RecordKey, WheelRecord};
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Gated removal of the first row matching `key`.
    pub fn apply(ctx: &AppContext, key: &RecordKey, secret: &str) -> AppResult<WheelRecord> {
        check_secret(ctx, "del", key, secret)?;

        let removed = ctx.store.delete(key)?;

        if let Err(e) = ctx.audit.record(
            "del",
            &format!("#{} {}/{}", removed.id, removed.line, removed.car_number),
            &format!(
                "removed diameter={} date={} reason={}",
                removed.diameter_str(),
                removed.date_str(),
                removed.reason
            ),
        ) {
            warning(format!("Record #{} deleted but not logged: {e}", removed.id));
        }

        Ok(removed)
    }
}
