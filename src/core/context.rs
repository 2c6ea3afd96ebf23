use crate::audit::AuditLog;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::core::eligibility::{EligibilityWindow, ExclusionScope, eligible_for_reduction};
use crate::errors::AppResult;
use crate::models::{Line, WheelRecord};
use crate::store::RecordStore;
use chrono::NaiveDate;

/// Everything a command needs, opened once from the loaded configuration.
pub struct AppContext {
    pub cfg: Config,
    pub store: RecordStore,
    pub audit: AuditLog,
}

impl AppContext {
    pub fn open(cfg: Config) -> AppResult<Self> {
        let store = RecordStore::open(cfg.store_path())?;
        let audit = AuditLog::open(&cfg.audit_path())?;
        Ok(Self { cfg, store, audit })
    }

    pub fn gate(&self) -> AccessGate<'_> {
        AccessGate::new(self.cfg.secret_hash.as_deref())
    }

    /// Rows of `line` due for reduction on `reference`, with the configured
    /// look-back. `scope` overrides the configured exclusion scope.
    pub fn due(
        &self,
        line: Line,
        reference: NaiveDate,
        scope: Option<ExclusionScope>,
    ) -> AppResult<Vec<WheelRecord>> {
        let records = self.store.load_all()?;
        let window = EligibilityWindow::new(reference, self.cfg.lookback_months);
        Ok(eligible_for_reduction(
            &records,
            window,
            line,
            scope.unwrap_or(self.cfg.exclusion_scope),
        ))
    }
}
