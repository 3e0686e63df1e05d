//! Risk Catalog
//!
//! The fixed universe of named risks a sprint can draw from, each paired with
//! its mitigation text.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{SimError, SimResult};

/// A named risk and how to mitigate it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub mitigation: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, mitigation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mitigation: mitigation.into(),
        }
    }
}

/// Immutable, ordered set of catalog entries with unique names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCatalog {
    entries: Vec<CatalogEntry>,
}

const STANDARD_ENTRIES: [(&str, &str); 10] = [
    (
        "Fallo en integración continua",
        "Revisar pipeline y realizar pruebas automatizadas",
    ),
    (
        "Retraso por enfermedad",
        "Asignar tareas de respaldo a otro miembro del equipo",
    ),
    (
        "Cambio en requisitos del cliente",
        "Solicitar confirmación escrita de requerimientos",
    ),
    (
        "Problemas de comunicación",
        "Implementar reuniones diarias breves (daily stand-up)",
    ),
    (
        "Falta de recursos técnicos",
        "Solicitar soporte técnico o herramientas adecuadas",
    ),
    (
        "Conflictos en el equipo",
        "Facilitar espacios de resolución de conflictos y feedback",
    ),
    (
        "Retrasos en entregas de terceros",
        "Establecer acuerdos con fechas límite claras y seguimiento",
    ),
    (
        "Tareas mal estimadas",
        "Revisar estimaciones con el equipo y usar datos históricos",
    ),
    (
        "Fallo en pruebas de calidad",
        "Incluir pruebas automatizadas y QA en el flujo de trabajo",
    ),
    (
        "Desmotivación del equipo",
        "Fomentar reconocimiento, apoyo y feedback regular",
    ),
];

impl RiskCatalog {
    /// Build a catalog, rejecting duplicate names and empty entry lists
    pub fn new(entries: Vec<CatalogEntry>) -> SimResult<Self> {
        if entries.is_empty() {
            return Err(SimError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(SimError::DuplicateRisk(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The ten project risks shipped with the simulator
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES
                .iter()
                .map(|(name, mitigation)| CatalogEntry::new(*name, *mitigation))
                .collect(),
        }
    }

    /// Mitigation text for `name`, if the risk is known
    pub fn mitigation(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.mitigation.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mitigation(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RiskCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
