//! Results of installing the common bundle set

use crate::domain::Bundle;
use crate::error::StratusError;

/// What happened to one bundle during setup
#[derive(Debug)]
pub enum SetupOutcome {
    Installed(Bundle),
    /// Already installed before setup ran
    Skipped,
    Failed(StratusError),
}

/// Per-bundle outcomes, in the order the bundles were attempted
#[derive(Debug, Default)]
pub struct SetupReport {
    pub outcomes: Vec<(String, SetupOutcome)>,
}

impl SetupReport {
    pub fn push(&mut self, name: String, outcome: SetupOutcome) {
        self.outcomes.push((name, outcome));
    }

    pub fn installed(&self) -> impl Iterator<Item = &Bundle> {
        self.outcomes.iter().filter_map(|(_, outcome)| match outcome {
            SetupOutcome::Installed(bundle) => Some(bundle),
            _ => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &StratusError)> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                SetupOutcome::Failed(e) => Some((name.as_str(), e)),
                _ => None,
            })
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// `Ok` when every bundle was installed or skipped, else `SetupFailed`
    pub fn into_result(self) -> Result<Self, StratusError> {
        if self.is_success() {
            return Ok(self);
        }
        let failed = self.failed().map(|(name, _)| name.to_string()).collect();
        Err(StratusError::SetupFailed { failed })
    }
}
