use serde::{Deserialize, Serialize};

use super::{PartialAgentCounts, PartialMarketParams};

/// Generation modes requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeFlags {
    /// Append the RL-harness compatibility layer
    pub rl_compat: bool,
    /// Resolve and validate only; never touch the output path
    pub validate_only: bool,
    /// Parameter sweeps (not implemented)
    pub batch: bool,
}

impl ModeFlags {
    /// Flags set in either side stay set
    pub fn union(&self, other: &ModeFlags) -> Self {
        Self {
            rl_compat: self.rl_compat || other.rl_compat,
            validate_only: self.validate_only || other.validate_only,
            batch: self.batch || other.batch,
        }
    }
}

/// Raw generator input
///
/// Every field is optional: `Some` means the caller explicitly supplied the
/// value (including an explicit zero), `None` defers to the template and
/// then to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub agents: PartialAgentCounts,
    #[serde(flatten)]
    pub market: PartialMarketParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents_scale: Option<f64>,
    pub modes: ModeFlags,
}

impl GeneratorInput {
    /// Input selecting a template with no overrides
    pub fn from_template(name: impl Into<String>) -> Self {
        Self {
            template: Some(name.into()),
            ..Default::default()
        }
    }

    /// Layer `overrides` on top of this input; its explicit fields win
    pub fn merge(self, overrides: GeneratorInput) -> Self {
        Self {
            template: overrides.template.or(self.template),
            agents: self.agents.overlay(&overrides.agents),
            market: self.market.overlay(&overrides.market),
            seed: overrides.seed.or(self.seed),
            agents_scale: overrides.agents_scale.or(self.agents_scale),
            modes: self.modes.union(&overrides.modes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AgentKind;

    #[test]
    fn test_merge_prefers_overrides() {
        let file = GeneratorInput {
            template: Some("rmsc03".into()),
            agents: PartialAgentCounts::EMPTY.with(AgentKind::Noise, 100),
            seed: Some(7),
            ..Default::default()
        };
        let cli = GeneratorInput {
            agents: PartialAgentCounts::EMPTY.with(AgentKind::Noise, 0),
            agents_scale: Some(0.5),
            modes: ModeFlags {
                rl_compat: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.template.as_deref(), Some("rmsc03"));
        assert_eq!(merged.agents.noise_agents, Some(0));
        assert_eq!(merged.seed, Some(7));
        assert_eq!(merged.agents_scale, Some(0.5));
        assert!(merged.modes.rl_compat);
    }

    #[test]
    fn test_from_template() {
        let input = GeneratorInput::from_template("minimal");
        assert_eq!(input.template.as_deref(), Some("minimal"));
        assert_eq!(input.agents, PartialAgentCounts::EMPTY);
        assert!(input.agents_scale.is_none());
    }
}
