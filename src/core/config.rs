use crate::error::ContactError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Tuning parameters for a [`ContactAggregator`](crate::ContactAggregator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactConfig {
    /// Number of pair slots reserved up front in the contact buffer
    pub initial_capacity: usize,

    /// Buffered pair count above which a warning is logged on each new capture.
    /// Usually means the game loop stopped draining.
    pub backlog_warning: usize,
}

impl ContactConfig {
    /// Checks that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.backlog_warning == 0 {
            return Err(ContactError::InvalidParameter(
                "backlog_warning must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            backlog_warning: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ContactConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_backlog_warning_is_rejected() {
        let config = ContactConfig {
            backlog_warning: 0,
            ..ContactConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ContactError::InvalidParameter(_))
        ));
    }
}
