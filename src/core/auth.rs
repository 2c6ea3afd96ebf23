//! Secret check in front of destructive operations (edit, del).

use crate::errors::{AppError, AppResult};

pub struct AccessGate<'a> {
    secret_hash: Option<&'a str>,
}

impl<'a> AccessGate<'a> {
    pub fn new(secret_hash: Option<&'a str>) -> Self {
        Self { secret_hash }
    }

    /// Hashes a secret using bcrypt with the default cost factor (12).
    pub fn hash_secret(secret: &str) -> AppResult<String> {
        Self::hash_secret_with_cost(secret, bcrypt::DEFAULT_COST)
    }

    pub fn hash_secret_with_cost(secret: &str, cost: u32) -> AppResult<String> {
        if secret.trim().is_empty() {
            return Err(AppError::Validation("secret must not be empty".into()));
        }
        bcrypt::hash(secret, cost)
            .map_err(|e| AppError::Other(format!("failed to hash secret: {e}")))
    }

    /// Ok only on an exact match against the configured hash.
    pub fn verify(&self, candidate: &str) -> AppResult<()> {
        let hash = self.secret_hash.ok_or_else(|| {
            AppError::Auth("no secret configured (run `config --set-secret`)".into())
        })?;

        if bcrypt::verify(candidate, hash).unwrap_or(false) {
            Ok(())
        } else {
            Err(AppError::Auth("wrong secret".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_configured_secret() {
        let hash = AccessGate::hash_secret_with_cost("depot-4", 4).unwrap();
        let gate = AccessGate::new(Some(&hash));

        assert!(gate.verify("depot-4").is_ok());
        assert!(matches!(gate.verify("depot-5"), Err(AppError::Auth(_))));
        assert!(matches!(gate.verify(""), Err(AppError::Auth(_))));
    }

    #[test]
    fn refuses_everything_without_a_hash() {
        let gate = AccessGate::new(None);
        assert!(matches!(gate.verify("admin"), Err(AppError::Auth(_))));
    }

    #[test]
    fn garbage_hash_is_a_mismatch() {
        let gate = AccessGate::new(Some("not-a-bcrypt-hash"));
        assert!(matches!(gate.verify("admin"), Err(AppError::Auth(_))));
    }

    #[test]
    fn blank_secret_cannot_be_set() {
        assert!(matches!(
            AccessGate::hash_secret("  "),
            Err(AppError::Validation(_))
        ));
    }
}
