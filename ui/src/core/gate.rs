//! Single shared-secret gate in front of the dashboard.

use super::config::AppConfig;
use super::error::{MetaboError, Result};

/// Proof that the gate accepted a password. Only [`AccessGate::check`] can mint one, so
/// views that take it cannot render before the user got through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
    _private: (),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Granted(AccessGrant),
    Denied,
    /// Nothing typed yet; no feedback should be shown.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessGate {
    expected: Option<String>,
}

impl AccessGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: Some(expected.into()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            expected: config.password.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Plain equality check against the configured secret.
    pub fn check(&self, attempt: &str) -> Result<GateOutcome> {
        if attempt.is_empty() {
            return Ok(GateOutcome::Empty);
        }
        let expected = self
            .expected
            .as_deref()
            .ok_or(MetaboError::PasswordNotConfigured)?;

        if attempt == expected {
            log::info!("dashboard unlocked");
            Ok(GateOutcome::Granted(AccessGrant { _private: () }))
        } else {
            log::warn!("rejected dashboard password attempt");
            Ok(GateOutcome::Denied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_grants_access() {
        let gate = AccessGate::new("s3cret");
        assert!(matches!(gate.check("s3cret").unwrap(), GateOutcome::Granted(_)));
    }

    #[test]
    fn anything_else_is_denied() {
        let gate = AccessGate::new("s3cret");
        assert_eq!(gate.check("S3cret").unwrap(), GateOutcome::Denied);
        assert_eq!(gate.check("s3cret ").unwrap(), GateOutcome::Denied);
        assert_eq!(gate.check("").unwrap(), GateOutcome::Empty);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let gate = AccessGate::from_config(&AppConfig::default());
        assert!(!gate.is_configured());
        assert!(matches!(
            gate.check("anything"),
            Err(MetaboError::PasswordNotConfigured)
        ));
    }
}
