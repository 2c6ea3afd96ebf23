use crate::core::context::AppContext;
use crate::core::entry::{EntryController, EntryForm};
use crate::errors::{AppError, AppResult};
use crate::models::{Line, RecordKey, WheelRecord};
use crate::ui::messages::warning;

pub struct EditLogic;

impl EditLogic {
    /// Gated in-place edit of a historical row.
    pub fn apply(
        ctx: &AppContext,
        key: &RecordKey,
        changes: EntryForm,
        line: Option<Line>,
        secret: &str,
    ) -> AppResult<WheelRecord> {
        check_secret(ctx, "edit", key, secret)?;

        let (before, after) = EntryController::edit(&ctx.store, key, changes, line)?;

        if let Err(e) = ctx.audit.record(
            "edit",
            &format!("#{} {}/{}", after.id, after.line, after.car_number),
            &describe_changes(&before, &after),
        ) {
            warning(format!("Record #{} updated but not logged: {e}", after.id));
        }

        Ok(after)
    }
}

/// Verify the secret; a refusal is logged before it is returned.
pub(crate) fn check_secret(
    ctx: &AppContext,
    operation: &str,
    key: &RecordKey,
    secret: &str,
) -> AppResult<()> {
    if let Err(e) = ctx.gate().verify(secret) {
        if let AppError::Auth(reason) = &e {
            ctx.audit
                .record("denied", &key.to_string(), &format!("{operation}: {reason}"))?;
        }
        return Err(e);
    }
    Ok(())
}

fn describe_changes(before: &WheelRecord, after: &WheelRecord) -> String {
    let mut parts = Vec::new();

    if before.line != after.line {
        parts.push(format!("line {} → {}", before.line, after.line));
    }
    if before.car_number != after.car_number {
        parts.push(format!("car {} → {}", before.car_number, after.car_number));
    }
    if before.wheel_diameter != after.wheel_diameter {
        parts.push(format!(
            "diameter {} → {}",
            before.diameter_str(),
            after.diameter_str()
        ));
    }
    if before.modified_date != after.modified_date {
        parts.push(format!("date {} → {}", before.date_str(), after.date_str()));
    }
    if before.modifier != after.modifier {
        parts.push(format!("modifier {} → {}", before.modifier, after.modifier));
    }
    if before.reason != after.reason {
        parts.push(format!("reason {} → {}", before.reason, after.reason));
    }

    if parts.is_empty() {
        "no changes".to_string()
    } else {
        parts.join(", ")
    }
}
