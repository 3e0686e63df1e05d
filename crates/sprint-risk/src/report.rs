//! Report Views
//!
//! Structured data behind each report plus the renderers that turn it into
//! text. The data can be inspected directly; rendering is swappable through
//! [`ReportRenderer`].

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::models::{Category, Risk, Sprint};

/// Returned by every view when nothing has been simulated
pub const NOT_SIMULATED: &str = "❗ No se ha simulado ningún sprint todavía.\n";

/// Body of the high-priority view when no risk is High
pub const NO_HIGH_PRIORITY: &str = "No se detectaron riesgos de alta prioridad.\n";

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportView {
    Full,
    HighPriority,
    Summary,
}

/// Per-sprint statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintSummary {
    pub sprint: u32,
    pub risk_count: usize,
    /// Mean priority, 0 when the sprint has no risks
    pub average_priority: f64,
    /// Category of the average, same thresholds as single risks
    pub category: Category,
}

impl SprintSummary {
    pub fn from_sprint(sprint: &Sprint) -> Self {
        let average_priority = sprint.average_priority();
        Self {
            sprint: sprint.number,
            risk_count: sprint.risks.len(),
            average_priority,
            category: Category::from_priority(average_priority),
        }
    }
}

/// High-category risks of one sprint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighPriorityGroup<'a> {
    pub sprint: u32,
    pub risks: Vec<&'a Risk>,
}

pub fn summarize(sprints: &[Sprint]) -> Vec<SprintSummary> {
    sprints.iter().map(SprintSummary::from_sprint).collect()
}

/// Sprints with at least one High risk, in sprint order
pub fn high_priority_groups(sprints: &[Sprint]) -> Vec<HighPriorityGroup<'_>> {
    sprints
        .iter()
        .filter_map(|sprint| {
            let risks: Vec<&Risk> = sprint.high_risks().collect();
            if risks.is_empty() {
                None
            } else {
                Some(HighPriorityGroup {
                    sprint: sprint.number,
                    risks,
                })
            }
        })
        .collect()
}

/// Turns report data into display text
pub trait ReportRenderer {
    fn not_simulated(&self) -> String;

    fn full(&self, sprints: &[Sprint]) -> String;

    /// `groups` may be empty; the renderer decides how to say so
    fn high_priority(&self, groups: &[HighPriorityGroup<'_>]) -> String;

    fn summary(&self, summaries: &[SprintSummary]) -> String;
}

/// Render `view` over `sprints`, or the not-simulated text when empty
pub fn render(sprints: &[Sprint], view: ReportView, renderer: &dyn ReportRenderer) -> String {
    if sprints.is_empty() {
        return renderer.not_simulated();
    }

    match view {
        ReportView::Full => renderer.full(sprints),
        ReportView::HighPriority => renderer.high_priority(&high_priority_groups(sprints)),
        ReportView::Summary => renderer.summary(&summarize(sprints)),
    }
}

/// Spanish console layout used by the menu and saved reports
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    pub fn risk(&self, risk: &Risk) -> String {
        format!(
            "  Riesgo: {}\n    Probabilidad: {} / 5\n    Impacto: {} / 5\n    → Prioridad: {} ({})\n    Mitigación: {}\n",
            risk.name(),
            risk.probability(),
            risk.impact(),
            risk.priority(),
            risk.category().label(),
            risk.mitigation()
        )
    }

    fn sprint_header(out: &mut String, number: u32) {
        let _ = writeln!(out, "--- Sprint {} ---", number);
    }
}

impl ReportRenderer for PlainTextRenderer {
    fn not_simulated(&self) -> String {
        NOT_SIMULATED.to_string()
    }

    fn full(&self, sprints: &[Sprint]) -> String {
        let mut out = String::from("\n📋 Informe de Riesgos por Sprint:\n\n");
        for sprint in sprints {
            Self::sprint_header(&mut out, sprint.number);
            for risk in &sprint.risks {
                out.push_str(&self.risk(risk));
                out.push('\n');
            }
        }
        out
    }

    fn high_priority(&self, groups: &[HighPriorityGroup<'_>]) -> String {
        let mut out = String::from("\n🔥 Riesgos de Alta Prioridad:\n\n");
        if groups.is_empty() {
            out.push_str(NO_HIGH_PRIORITY);
            return out;
        }

        for group in groups {
            Self::sprint_header(&mut out, group.sprint);
            for risk in &group.risks {
                out.push_str(&self.risk(risk));
                out.push('\n');
            }
        }
        out
    }

    fn summary(&self, summaries: &[SprintSummary]) -> String {
        let mut out = String::from("\n📊 Resumen Estadístico por Sprint:\n\n");
        for s in summaries {
            Self::sprint_header(&mut out, s.sprint);
            let _ = writeln!(out, "  Total de Riesgos: {}", s.risk_count);
            let _ = writeln!(
                out,
                "  Promedio de Prioridad: {:.2} ({})",
                s.average_priority,
                s.category.label()
            );
            let _ = writeln!(out, "  Categoría General del Sprint: {}\n", s.category.label());
        }
        out
    }
}
