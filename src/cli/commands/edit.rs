use crate::cli::commands::{resolve_key, resolve_line, resolve_secret};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::edit::EditLogic;
use crate::core::entry::EntryForm;
use crate::errors::{AppError, AppResult};
use crate::models::Line;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Edit {
        line,
        key,
        new_car,
        diameter,
        new_date,
        modifier,
        reason,
        secret,
    } = cmd
    {
        // an explicit --line is the selected line: the row is forced onto it
        let selected: Option<Line> = line
            .as_deref()
            .map(|code| Line::from_code(code).ok_or_else(|| AppError::InvalidLine(code.into())))
            .transpose()?;
        let key_line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let record_key = resolve_key(key, key_line, false)?;

        let changes = EntryForm {
            car_number: new_car.clone(),
            wheel_diameter: diameter.clone(),
            modified_date: new_date.clone(),
            modifier: modifier.clone(),
            reason: reason.clone(),
        };

        let secret = resolve_secret(secret)?;
        let rec = EditLogic::apply(ctx, &record_key, changes, selected, &secret)?;

        success(format!(
            "Updated #{}: {} car {} diameter {} on {} ({})",
            rec.id,
            rec.line,
            rec.car_number,
            rec.diameter_str(),
            rec.date_str(),
            rec.reason
        ));
    }

    Ok(())
}
