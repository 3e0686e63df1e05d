//! Sprint Risk
//!
//! Simulates project risks across a run of sprints. Each sprint draws up to
//! three distinct risks from a fixed catalog, scores them by
//! probability × impact and classifies the score as Low, Medium or High.
//! The latest run can be viewed as a full report, a high-priority-only
//! report or a per-sprint statistical summary.

pub mod catalog;
pub mod error;
pub mod models;
pub mod report;
pub mod sampler;
pub mod simulator;

pub use catalog::{CatalogEntry, RiskCatalog};
pub use error::{SimError, SimResult};
pub use models::{categorize, Category, Risk, Sprint, MAX_RATING, MIN_RATING};
pub use report::{
    HighPriorityGroup, PlainTextRenderer, ReportRenderer, ReportView, SprintSummary,
    NOT_SIMULATED, NO_HIGH_PRIORITY,
};
pub use sampler::{RiskSampler, RngSampler, MAX_RISKS_PER_SPRINT};
pub use simulator::RiskSimulator;
