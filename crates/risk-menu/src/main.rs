//! risk-menu: interactive console for the sprint risk simulator.
//!
//! Usage:
//!   cargo run -p risk-menu
//!   RISK_SIM_SEED=7 cargo run -p risk-menu      # reproducible draws
//!   RUST_LOG=sprint_risk=debug cargo run -p risk-menu

mod config;
mod menu;

use anyhow::Context;
use sprint_risk::{RiskSimulator, RngSampler};
use std::io;

use crate::config::MenuConfig;
use crate::menu::Menu;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "risk_menu=info,sprint_risk=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = MenuConfig::from_env().context("invalid configuration")?;
    let sampler = match config.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            RngSampler::seeded(seed)
        }
        None => RngSampler::from_entropy(),
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(
        stdin.lock(),
        io::stdout(),
        RiskSimulator::default(),
        sampler,
        config.default_file,
    );
    menu.run()
}
