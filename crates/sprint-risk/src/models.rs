//! Risk Models
//!
//! Priority categories, scored risks and the sprints that hold them.

use serde::{Deserialize, Serialize};

use crate::catalog::RiskCatalog;
use crate::error::{SimError, SimResult};

/// Lowest and highest value for probability and impact ratings
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Priority tier of a risk or of a whole sprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    /// Classify a priority score. Accepts fractional values so sprint
    /// averages go through the same thresholds as individual risks.
    pub fn from_priority(value: f64) -> Self {
        match value {
            v if v <= 6.0 => Category::Low,
            v if v <= 14.0 => Category::Medium,
            _ => Category::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Medium => "Medium",
            Category::High => "High",
        }
    }

    /// Label used in the Spanish text reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Low => "Bajo",
            Category::Medium => "Medio",
            Category::High => "Alto",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shorthand for [`Category::from_priority`]
pub fn categorize(value: f64) -> Category {
    Category::from_priority(value)
}

/// A catalog risk scored for one sprint.
///
/// Fields are private so priority, category and mitigation always agree with
/// the ratings and the catalog the risk was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Risk {
    name: String,
    probability: u8,
    impact: u8,
    priority: u8,
    category: Category,
    mitigation: String,
}

impl Risk {
    /// Score a catalog risk. Fails if `name` is not in the catalog or a
    /// rating falls outside 1..=5.
    pub fn new(catalog: &RiskCatalog, name: &str, probability: u8, impact: u8) -> SimResult<Self> {
        check_rating("probability", probability)?;
        check_rating("impact", impact)?;

        let mitigation = catalog
            .mitigation(name)
            .ok_or_else(|| SimError::UnknownRisk(name.to_string()))?;

        let priority = probability * impact;

        Ok(Self {
            name: name.to_string(),
            probability,
            impact,
            priority,
            category: Category::from_priority(f64::from(priority)),
            mitigation: mitigation.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1 to 5
    pub fn probability(&self) -> u8 {
        self.probability
    }

    /// 1 to 5
    pub fn impact(&self) -> u8 {
        self.impact
    }

    /// probability × impact, 1 to 25
    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Copied from the catalog at construction
    pub fn mitigation(&self) -> &str {
        &self.mitigation
    }

    pub fn is_high(&self) -> bool {
        self.category == Category::High
    }
}

fn check_rating(field: &'static str, value: u8) -> SimResult<()> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(SimError::RatingOutOfRange { field, value })
    }
}

/// Risks drawn for one sprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sprint {
    /// 1-based position in the simulation
    pub number: u32,
    pub risks: Vec<Risk>,
}

impl Sprint {
    pub fn total_priority(&self) -> u32 {
        self.risks.iter().map(|r| u32::from(r.priority())).sum()
    }

    /// Mean priority, 0 for a sprint without risks
    pub fn average_priority(&self) -> f64 {
        if self.risks.is_empty() {
            0.0
        } else {
            f64::from(self.total_priority()) / self.risks.len() as f64
        }
    }

    pub fn high_risks(&self) -> impl Iterator<Item = &Risk> {
        self.risks.iter().filter(|r| r.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_thresholds() {
        assert_eq!(categorize(1.0), Category::Low);
        assert_eq!(categorize(6.0), Category::Low);
        assert_eq!(categorize(7.0), Category::Medium);
        assert_eq!(categorize(14.0), Category::Medium);
        assert_eq!(categorize(15.0), Category::High);
        assert_eq!(categorize(25.0), Category::High);
    }

    #[test]
    fn test_category_fractional_values() {
        assert_eq!(categorize(6.5), Category::Medium);
        assert_eq!(categorize(14.01), Category::High);
        assert_eq!(categorize(0.0), Category::Low);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Low.label(), "Bajo");
        assert_eq!(Category::Medium.label(), "Medio");
        assert_eq!(Category::High.label(), "Alto");
        assert_eq!(Category::High.to_string(), "High");
    }

    #[test]
    fn test_risk_scoring() {
        let catalog = RiskCatalog::standard();
        let risk = Risk::new(&catalog, "Conflictos en el equipo", 4, 5).unwrap();

        assert_eq!(risk.priority(), 20);
        assert_eq!(risk.category(), Category::High);
        assert_eq!(
            risk.mitigation(),
            "Facilitar espacios de resolución de conflictos y feedback"
        );
        assert!(risk.is_high());
    }

    #[test]
    fn test_every_rating_pair() {
        let catalog = RiskCatalog::standard();
        for p in MIN_RATING..=MAX_RATING {
            for i in MIN_RATING..=MAX_RATING {
                let risk = Risk::new(&catalog, "Retraso por enfermedad", p, i).unwrap();
                assert_eq!(risk.priority(), p * i);
                assert!((1..=25).contains(&risk.priority()));
                assert_eq!(risk.category(), categorize(f64::from(p * i)));
            }
        }
    }

    #[test]
    fn test_unknown_risk_fails() {
        let catalog = RiskCatalog::standard();
        let err = Risk::new(&catalog, "Invasión alienígena", 3, 3).unwrap_err();
        assert!(matches!(err, SimError::UnknownRisk(name) if name == "Invasión alienígena"));
    }

    #[test]
    fn test_rating_out_of_range() {
        let catalog = RiskCatalog::standard();
        assert!(matches!(
            Risk::new(&catalog, "Tareas mal estimadas", 0, 3),
            Err(SimError::RatingOutOfRange { field: "probability", value: 0 })
        ));
        assert!(matches!(
            Risk::new(&catalog, "Tareas mal estimadas", 3, 6),
            Err(SimError::RatingOutOfRange { field: "impact", value: 6 })
        ));
    }

    #[test]
    fn test_sprint_average_of_empty_sprint_is_zero() {
        let sprint = Sprint {
            number: 1,
            risks: Vec::new(),
        };
        assert_eq!(sprint.average_priority(), 0.0);
        assert_eq!(sprint.total_priority(), 0);
    }
}
