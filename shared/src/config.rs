use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::format::DEFAULT_BALANCE_MASK;

/// Timing of the balance counter animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub steps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000, // 2 seconds total
            steps: 60,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(DashboardError::ZeroAnimationSteps);
        }
        Ok(())
    }

    /// Delay between two ticks. Never zero, so the timer always yields to the event loop.
    pub fn interval_ms(&self) -> u32 {
        (self.duration_ms / self.steps.max(1)).max(1)
    }

    /// Amount added to the running total on every tick
    pub fn increment(&self, target: f64) -> f64 {
        target / f64::from(self.steps.max(1))
    }
}

/// Page-level settings, optionally supplied by the host page as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Name used in the welcome heading
    pub user_name: String,
    /// Total balance the counter animates towards
    pub target_balance: f64,
    pub balance_mask: String,
    pub animation: AnimationConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_name: "Alex".to_string(),
            target_balance: 67420.50,
            balance_mask: DEFAULT_BALANCE_MASK.to_string(),
            animation: AnimationConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON config block. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;
        if !self.target_balance.is_finite() {
            return Err(DashboardError::InvalidConfig(
                "target_balance must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn welcome_heading(&self) -> String {
        format!("Welcome back, {}", self.user_name)
    }
}
