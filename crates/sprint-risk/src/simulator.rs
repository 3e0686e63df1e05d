//! Sprint Risk Simulator
//!
//! Draws risks from the catalog for a run of sprints and keeps the latest
//! result set for the report views.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::RiskCatalog;
use crate::error::{SimError, SimResult};
use crate::models::{Risk, Sprint};
use crate::report::{
    self, HighPriorityGroup, PlainTextRenderer, ReportRenderer, ReportView, SprintSummary,
};
use crate::sampler::{RiskSampler, MAX_RISKS_PER_SPRINT};

#[derive(Debug, Clone)]
pub struct RiskSimulator {
    catalog: Arc<RiskCatalog>,
    sprints: Vec<Sprint>,
}

impl Default for RiskSimulator {
    fn default() -> Self {
        Self::new(Arc::new(RiskCatalog::standard()))
    }
}

impl RiskSimulator {
    pub fn new(catalog: Arc<RiskCatalog>) -> Self {
        Self {
            catalog,
            sprints: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &RiskCatalog {
        &self.catalog
    }

    /// Replace the result set with `sprint_count` freshly sampled sprints.
    ///
    /// The new set is built in full before it is swapped in, so on error the
    /// previous results are left untouched.
    pub fn run<S>(&mut self, sprint_count: usize, sampler: &mut S) -> SimResult<()>
    where
        S: RiskSampler + ?Sized,
    {
        let last = u32::try_from(sprint_count)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| SimError::InvalidSprintCount(sprint_count.to_string()))?;

        let mut sprints = Vec::new();
        for number in 1..=last {
            sprints.push(self.sample_sprint(number, sampler)?);
        }

        let total_risks: usize = sprints.iter().map(|s| s.risks.len()).sum();
        self.sprints = sprints;

        tracing::info!(
            "Simulated {} sprint(s) with {} risk(s)",
            sprint_count,
            total_risks
        );
        Ok(())
    }

    fn sample_sprint<S>(&self, number: u32, sampler: &mut S) -> SimResult<Sprint>
    where
        S: RiskSampler + ?Sized,
    {
        let drawn = sampler.risk_count();
        if !(1..=MAX_RISKS_PER_SPRINT).contains(&drawn) {
            return Err(SimError::InvalidDraw {
                draw: "risk_count",
                value: drawn,
                expected: format!("1..={}", MAX_RISKS_PER_SPRINT),
            });
        }

        let count = drawn.min(self.catalog.len());
        if count < drawn {
            tracing::warn!(
                "Sprint {}: drew {} risks but catalog only has {}",
                number,
                drawn,
                self.catalog.len()
            );
        }

        // Pool resets per sprint: names repeat across sprints, never within one
        let mut pool: Vec<&str> = self.catalog.names().collect();
        let mut risks = Vec::with_capacity(count);
        for _ in 0..count {
            let index = sampler.pick_index(pool.len());
            if index >= pool.len() {
                return Err(SimError::InvalidDraw {
                    draw: "pick_index",
                    value: index,
                    expected: format!("0..{}", pool.len()),
                });
            }
            let name = pool.remove(index);
            let probability = sampler.rating();
            let impact = sampler.rating();
            risks.push(Risk::new(&self.catalog, name, probability, impact)?);
        }

        tracing::debug!(
            "Sprint {}: {:?}",
            number,
            risks.iter().map(|r| (r.name(), r.priority())).collect::<Vec<_>>()
        );

        Ok(Sprint { number, risks })
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// True until the first successful run
    pub fn is_empty(&self) -> bool {
        self.sprints.is_empty()
    }

    pub fn total_risks(&self) -> usize {
        self.sprints.iter().map(|s| s.risks.len()).sum()
    }

    pub fn summaries(&self) -> Vec<SprintSummary> {
        report::summarize(&self.sprints)
    }

    pub fn high_priority(&self) -> Vec<HighPriorityGroup<'_>> {
        report::high_priority_groups(&self.sprints)
    }

    pub fn render(&self, view: ReportView, renderer: &dyn ReportRenderer) -> String {
        report::render(&self.sprints, view, renderer)
    }

    pub fn full_report(&self) -> String {
        self.render(ReportView::Full, &PlainTextRenderer)
    }

    pub fn high_priority_report(&self) -> String {
        self.render(ReportView::HighPriority, &PlainTextRenderer)
    }

    pub fn statistical_summary(&self) -> String {
        self.render(ReportView::Summary, &PlainTextRenderer)
    }

    /// Write the full report as UTF-8, replacing any existing file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> SimResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.full_report())?;
        tracing::info!("Saved report to {}", path.display());
        Ok(())
    }
}
