mod agent_kind;
mod agent_spec;
mod counts;
mod input;
mod market;
mod resolved;
mod section;
mod template;

pub use agent_kind::AgentKind;
pub use agent_spec::{AgentParams, AgentTypeSpec};
pub use counts::{AgentCounts, PartialAgentCounts};
pub use input::{GeneratorInput, ModeFlags};
pub use market::{MarketParams, PartialMarketParams};
pub use resolved::ResolvedConfig;
pub use section::{Section, SectionKind};
pub use template::{Template, TemplateMarket};
