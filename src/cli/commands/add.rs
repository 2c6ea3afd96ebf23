use crate::cli::commands::resolve_line;
use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::core::context::AppContext;
use crate::core::entry::EntryForm;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a wheel diameter measurement.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        line,
        car,
        diameter,
        date: modified_date,
        modifier,
        reason,
    } = cmd
    {
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;

        let input = EntryForm {
            car_number: Some(car.clone()),
            wheel_diameter: Some(diameter.clone()),
            modified_date: modified_date.clone(),
            modifier: Some(modifier.clone()),
            reason: reason.clone(),
        };

        let rec = AddLogic::apply(ctx, line, input, date::today())?;

        success(format!(
            "Added #{}: {} car {} diameter {} on {} ({})",
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
