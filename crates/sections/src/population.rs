//! Agent identifier layout for one generated population.

use std::ops::Range;

use configgen_core::{AgentId, AgentKind, AgentTypeSpec, IdAllocator, ResolvedConfig};
use configgen_ports::{ConfigGenError, Result};

/// A non-empty agent kind and the identifiers it was given
#[derive(Debug, Clone, PartialEq)]
pub struct AgentGroup {
    pub spec: AgentTypeSpec,
    pub ids: Range<AgentId>,
}

/// Exchange plus every non-empty kind, in population order
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub exchange_id: AgentId,
    pub groups: Vec<AgentGroup>,
}

impl Population {
    /// Reserve identifiers for the exchange and each kind with a positive count
    ///
    /// The allocator must be fresh: the exchange always takes identifier 0.
    pub fn allocate(config: &ResolvedConfig, ids: &mut IdAllocator) -> Result<Self> {
        let exchange_id = ids.reserve_exchange().ok_or_else(|| {
            ConfigGenError::Internal(format!(
                "agent id counter at {} before the exchange was placed",
                ids.issued()
            ))
        })?;

        let mut groups = Vec::new();
        for kind in AgentKind::ALL {
            let count = agent_count(config, kind)?;
            if count == 0 {
                continue;
            }
            let range = ids.reserve(count).ok_or_else(|| {
                ConfigGenError::Internal(format!(
                    "{} {} agents do not fit after id {}",
                    count,
                    kind.display_name(),
                    ids.issued()
                ))
            })?;
            log::debug!(
                "{} agents: ids {}..{}",
                kind.display_name(),
                range.start,
                range.end
            );
            groups.push(AgentGroup {
                spec: AgentTypeSpec::new(kind, count),
                ids: range,
            });
        }

        Ok(Self {
            exchange_id,
            groups,
        })
    }

    /// Agents including the exchange
    pub fn total(&self) -> u32 {
        1 + self.trading_agents()
    }

    /// Agents excluding the exchange
    pub fn trading_agents(&self) -> u32 {
        self.groups.iter().map(|group| group.spec.count).sum()
    }

    pub fn group(&self, kind: AgentKind) -> Option<&AgentGroup> {
        self.groups.iter().find(|group| group.spec.kind == kind)
    }
}

fn agent_count(config: &ResolvedConfig, kind: AgentKind) -> Result<u32> {
    let count = config.count(kind);
    u32::try_from(count).map_err(|_| {
        ConfigGenError::Internal(format!(
            "{} count {} cannot be generated",
            kind.display_name(),
            count
        ))
    })
}
