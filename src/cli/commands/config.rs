use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set_secret,
    } = cmd
    {
        // ---- SET SECRET ----
        if let Some(secret) = set_secret {
            // reload: `--store` only applies to this run and is not saved
            let mut updated = Config::load()?;
            updated.secret_hash = Some(AccessGate::hash_secret(secret)?);
            updated.save()?;
            success(format!(
                "Secret updated in {}",
                Config::config_file().display()
            ));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
