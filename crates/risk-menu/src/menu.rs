use anyhow::Result;
use sprint_risk::{RiskSampler, RiskSimulator, SimError, SimResult};
use std::io::{BufRead, Write};

const MENU: &str = "\n📊 Menú Principal\n\
1. Simular sprints\n\
2. Ver informe completo\n\
3. Ver solo riesgos de alta prioridad\n\
4. Ver resumen estadístico por sprint\n\
5. Guardar informe en archivo de texto\n\
6. Salir\n";

/// Parse a sprint count typed by the user. Only positive integers that fit
/// in a sprint number pass.
pub fn parse_sprint_count(input: &str) -> SimResult<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(SimError::InvalidSprintCount(trimmed.to_string())),
    }
}

/// Console loop over any line reader and writer
pub struct Menu<R, W, S> {
    input: R,
    output: W,
    simulator: RiskSimulator,
    sampler: S,
    default_file: String,
}

impl<R: BufRead, W: Write, S: RiskSampler> Menu<R, W, S> {
    pub fn new(
        input: R,
        output: W,
        simulator: RiskSimulator,
        sampler: S,
        default_file: String,
    ) -> Self {
        Self {
            input,
            output,
            simulator,
            sampler,
            default_file,
        }
    }

    #[cfg(test)]
    pub fn simulator(&self) -> &RiskSimulator {
        &self.simulator
    }

    /// Run until the user picks "Salir" or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(option) = self.prompt("Seleccione una opción (1-6): ")? else {
                break;
            };

            match option.as_str() {
                "1" => self.simulate()?,
                "2" => {
                    let report = self.simulator.full_report();
                    writeln!(self.output, "{}", report)?;
                }
                "3" => {
                    let report = self.simulator.high_priority_report();
                    writeln!(self.output, "{}", report)?;
                }
                "4" => {
                    let report = self.simulator.statistical_summary();
                    writeln!(self.output, "{}", report)?;
                }
                "5" => self.save()?,
                "6" => break,
                other => {
                    tracing::debug!("Unknown menu option: {:?}", other);
                    writeln!(self.output, "❗ Opción no válida. Intente de nuevo.")?;
                }
            }
        }

        writeln!(self.output, "👋 Fin del programa.")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn simulate(&mut self) -> Result<()> {
        let Some(raw) = self.prompt("Ingrese la cantidad de sprints a simular: ")? else {
            return Ok(());
        };

        let outcome = parse_sprint_count(&raw)
            .and_then(|count| self.simulator.run(count, &mut self.sampler).map(|_| count));

        match outcome {
            Ok(count) => {
                writeln!(self.output, "\n✅ Simulación de {} sprint(s) completada.", count)?;
            }
            Err(SimError::InvalidSprintCount(raw)) => {
                tracing::debug!("Rejected sprint count {:?}", raw);
                writeln!(
                    self.output,
                    "❗ Error: La cantidad debe ser un número entero positivo (recibido: '{}').",
                    raw
                )?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        if self.simulator.is_empty() {
            writeln!(self.output, "❗ Primero debe simular al menos un sprint.")?;
            return Ok(());
        }

        let Some(name) = self.prompt("Ingrese el nombre del archivo (ej: informe.txt): ")? else {
            return Ok(());
        };
        let file = if name.is_empty() {
            self.default_file.clone()
        } else {
            name
        };

        match self.simulator.save_to_file(&file) {
            Ok(()) => writeln!(self.output, "\n✅ Informe guardado como '{}'", file)?,
            Err(e) => {
                tracing::error!("Failed to save report to {}: {}", file, e);
                writeln!(self.output, "❌ Error al guardar el archivo: {}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprint_risk::{RngSampler, NOT_SIMULATED};
    use std::io::Cursor;

    fn run_menu(script: &str) -> (String, RiskSimulator) {
        let mut output = Vec::new();
        let simulator = {
            let mut menu = Menu::new(
                Cursor::new(script.to_string()),
                &mut output,
                RiskSimulator::default(),
                RngSampler::seeded(17),
                "informe.txt".to_string(),
            );
            menu.run().unwrap();
            menu.simulator().clone()
        };
        (String::from_utf8(output).unwrap(), simulator)
    }

    #[test]
    fn test_parse_sprint_count() {
        assert_eq!(parse_sprint_count(" 4\n").unwrap(), 4);
        assert!(matches!(parse_sprint_count("0"), Err(SimError::InvalidSprintCount(_))));
        assert!(matches!(parse_sprint_count("-3"), Err(SimError::InvalidSprintCount(_))));
        assert!(matches!(parse_sprint_count("tres"), Err(SimError::InvalidSprintCount(_))));
        assert!(matches!(parse_sprint_count(""), Err(SimError::InvalidSprintCount(_))));
        assert!(matches!(
            parse_sprint_count("18446744073709551615"),
            Err(SimError::InvalidSprintCount(_))
        ));
    }

    #[test]
    fn test_exit_option() {
        let (out, sim) = run_menu("6\n");
        assert!(out.contains("📊 Menú Principal"));
        assert!(out.ends_with("👋 Fin del programa.\n"));
        assert!(sim.is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, _) = run_menu("");
        assert!(out.ends_with("👋 Fin del programa.\n"));
    }

    #[test]
    fn test_simulate_then_report() {
        let (out, sim) = run_menu("1\n3\n2\n4\n6\n");
        assert_eq!(sim.sprints().len(), 3);
        assert!(out.contains("✅ Simulación de 3 sprint(s) completada."));
        assert!(out.contains(&sim.full_report()));
        assert!(out.contains(&sim.statistical_summary()));
    }

    #[test]
    fn test_invalid_count_leaves_state() {
        let (out, sim) = run_menu("1\n2\n1\n-1\n1\nabc\n6\n");
        assert_eq!(sim.sprints().len(), 2);
        assert_eq!(out.matches("❗ Error: ").count(), 2);
    }

    #[test]
    fn test_huge_count_is_rejected_without_crashing() {
        let (out, sim) = run_menu("1\n2\n1\n18446744073709551615\n4\n6\n");
        assert_eq!(sim.sprints().len(), 2);
        assert!(out.contains(
            "❗ Error: La cantidad debe ser un número entero positivo (recibido: '18446744073709551615')."
        ));
        assert!(out.contains(&sim.statistical_summary()));
    }

    #[test]
    fn test_reports_before_simulation() {
        let (out, _) = run_menu("2\n3\n4\n6\n");
        assert_eq!(out.matches(NOT_SIMULATED).count(), 3);
    }

    #[test]
    fn test_unknown_option() {
        let (out, _) = run_menu("9\n6\n");
        assert!(out.contains("❗ Opción no válida. Intente de nuevo."));
    }

    #[test]
    fn test_save_requires_simulation() {
        let (out, _) = run_menu("5\n6\n");
        assert!(out.contains("❗ Primero debe simular al menos un sprint."));
        assert!(!out.contains("Ingrese el nombre del archivo"));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprints.txt");
        let script = format!("1\n2\n5\n{}\n6\n", path.display());

        let (out, sim) = run_menu(&script);
        assert!(out.contains("✅ Informe guardado como"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), sim.full_report());
    }

    #[test]
    fn test_save_failure_is_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("falta").join("x.txt");
        let script = format!("1\n1\n5\n{}\n4\n6\n", path.display());

        let (out, sim) = run_menu(&script);
        assert!(out.contains("❌ Error al guardar el archivo:"));
        assert!(out.contains(&sim.statistical_summary()));
        assert!(out.ends_with("👋 Fin del programa.\n"));
    }
}
