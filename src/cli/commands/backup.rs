use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::core::context::AppContext;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(ctx.store.path(), &ctx.audit, file, *compress, *force)?;
    }

    Ok(())
}
