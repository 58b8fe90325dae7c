//! Scenario evaluation service
//!
//! Resolves a built-in scenario, assembles its tree and evaluates it.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{Node, Scenario};

/// Outcome of evaluating one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scenario: Scenario,
    pub tree: Node,
    pub value: f64,
}

impl Evaluation {
    /// The `Result: <value>` line.
    pub fn result_line(&self, precision: Option<usize>) -> String {
        format!("Result: {}", format_value(self.value, precision))
    }
}

/// Shortest round-trip rendering, or fixed fractional digits when `precision` is set.
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => value.to_string(),
    }
}

/// Service for evaluating built-in expression trees.
pub struct EvaluationService {
    settings: Settings,
}

impl EvaluationService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Pick the scenario named on the command line, falling back to settings.
    pub fn resolve(&self, name: Option<&str>) -> ApplicationResult<Scenario> {
        let name = name.unwrap_or(&self.settings.scenario);
        Scenario::from_name(name)
            .ok_or_else(|| ApplicationError::UnknownScenario(name.to_string()))
    }

    /// Build and evaluate `scenario`.
    ///
    /// Construction errors surface before any evaluation happens.
    #[instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, scenario: Scenario) -> ApplicationResult<Evaluation> {
        let tree = scenario.build()?;
        debug!(
            depth = tree.depth(),
            nodes = tree.node_count(),
            "built {}: {}",
            scenario,
            tree
        );
        let value = tree.evaluate()?;
        info!(%scenario, value, "evaluated");
        Ok(Evaluation {
            scenario,
            tree,
            value,
        })
    }

    pub fn run(&self, name: Option<&str>) -> ApplicationResult<Evaluation> {
        let scenario = self.resolve(name)?;
        self.evaluate(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_precision_when_formatting_then_uses_shortest_form() {
        assert_eq!(format_value(24.0, None), "24");
        assert_eq!(format_value(2.5, None), "2.5");
        assert_eq!(format_value(f64::INFINITY, None), "inf");
    }

    #[test]
    fn given_precision_when_formatting_then_pads_fraction() {
        assert_eq!(format_value(10.0, Some(2)), "10.00");
        assert_eq!(format_value(1.0 / 3.0, Some(3)), "0.333");
    }
}
