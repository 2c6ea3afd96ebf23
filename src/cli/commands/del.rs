use crate::cli::commands::{resolve_key, resolve_line, resolve_secret};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del {
        line,
        key,
        secret,
        yes,
    } = cmd
    {
        let explicit_line = line.is_some();
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let record_key = resolve_key(key, line, true)?;

        // Make sure the row exists before asking anything
        let target = ctx.store.get(&record_key)?;

        if explicit_line && target.line != line {
            return Err(AppError::Validation(format!(
                "record #{} is on {}, not {}",
                target.id, target.line, line
            )));
        }

        if !*yes
            && !ask_confirmation(&format!(
                "Delete #{} ({} car {} on {})? This action is irreversible.",
                target.id,
                target.line,
                target.car_number,
                target.date_str()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let secret = resolve_secret(secret)?;
        let removed = DeleteLogic::apply(ctx, &record_key, &secret)?;

        success(format!(
            "Deleted #{}: {} car {} on {}.",
            removed.id,
            removed.line,
            removed.car_number,
            removed.date_str()
        ));
    }

    Ok(())
}
