use crate::cli::commands::{parse_date_arg, resolve_line};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportSelection};
use crate::utils::date;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        line,
        format,
        file,
        due,
        date: reference,
        force,
    } = cmd
    {
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let selection = if *due {
            let reference = parse_date_arg(reference.as_deref())?.unwrap_or_else(date::today);
            ExportSelection::Due(reference)
        } else {
            ExportSelection::All
        };

        ExportLogic::export(ctx, line, selection, *format, file, *force)?;
    }
    Ok(())
}
