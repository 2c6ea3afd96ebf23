use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the record file with its header (if missing)
///  - the audit database
pub fn handle(cli: &Cli, cfg: Config) -> AppResult<()> {
    let config_path = Config::config_file();

    if !cli.test {
        cfg.save()?;
    }

    let ctx = AppContext::open(cfg)?;

    println!("⚙️  Initializing wheelgauge…");
    println!("📄 Config file : {}", config_path.display());
    println!("🗂️  Record file : {}", ctx.store.path().display());
    println!("📜 Audit log   : {}", ctx.cfg.audit_path().display());

    if let Err(e) = ctx.audit.record(
        "init",
        &ctx.store.path().to_string_lossy(),
        &format!("Record file ready ({} bytes)", ctx.store.file_size()?),
    ) {
        warning(format!("Failed to write audit log: {e}"));
    }

    if ctx.cfg.secret_hash.is_none() {
        warning("No secret set: edit and del are refused until `config --set-secret` is run.");
    }

    success("wheelgauge initialization completed!");
    Ok(())
}
