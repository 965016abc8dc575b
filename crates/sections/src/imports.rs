use configgen_core::defaults::TOOL_VERSION;
use configgen_core::{GenerationContext, ResolvedConfig, Section, SectionKind};
use configgen_ports::{Result, SectionGenerator};

const RUNTIME_IMPORTS: &str = r#"import argparse
import datetime as dt
import logging

import numpy as np
import pandas as pd

# Kernel and utilities
from abides_core.kernel import Kernel
from abides_core.latency_model import LatencyModel
from abides_core.utils import util, str_to_ns

# Fundamental value oracle
from abides_markets.oracles.SparseMeanRevertingOracle import SparseMeanRevertingOracle

# Market participants
from abides_markets.agents.ExchangeAgent import ExchangeAgent
from abides_markets.agents.market_makers.MarketMakerAgent import MarketMakerAgent
from abides_markets.agents.market_makers.adaptive_market_maker_agent import AdaptiveMarketMakerAgent
from abides_markets.agents.ZeroIntelligenceAgent import ZeroIntelligenceAgent
from abides_markets.agents.NoiseAgent import NoiseAgent
from abides_markets.agents.ValueAgent import ValueAgent
from abides_markets.agents.examples.momentum_agent import MomentumAgent
"#;

/// Shebang, header docstring and runtime imports
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportsSection;

impl SectionGenerator for ImportsSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Imports
    }

    fn generate(
        &self,
        config: &ResolvedConfig,
        ctx: &mut GenerationContext,
    ) -> Result<Option<Section>> {
        let generated_on = config.generated_at().format("%Y-%m-%d %H:%M:%S UTC");
        let file_name = ctx.artifact_file_name();
        let stem = ctx.artifact_stem();
        let source = match config.template() {
            Some(name) => format!("template '{name}'"),
            None => "explicit parameters".to_string(),
        };

        let body = format!(
            r#"#!/usr/bin/env python3
"""
ABIDES market simulation configuration
Generated by configgen v{TOOL_VERSION}
Generated on: {generated_on}
Built from: {source}

Run with: python {file_name} -c {stem} -v
"""

###### {heading} ######

{RUNTIME_IMPORTS}

"#,
            heading = SectionKind::Imports.heading(),
        );

        Ok(Some(Section::new(SectionKind::Imports, body)))
    }
}
