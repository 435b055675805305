//! # Mamdani Inference
//!
//! ```text
//! crisp x ──▶ activation_r = mu_in(rule_r.input, x)
//!                  │
//!                  ▼
//! clip:       min(activation_r, mu_out(rule_r.output, u))   for every sample u
//!                  │
//!                  ▼
//! aggregate:  max over rules
//!                  │
//!                  ▼
//! defuzzify:  centroid | first of maxima ──▶ crisp y
//! ```
//!
//! The output universe is sampled once, when the controller is built.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FuzzyError, Result};
use crate::rules::Rule;
use crate::term::LinguisticVariable;

/// Default number of output samples.
pub const DEFAULT_SAMPLES: usize = 1000;

/// How the aggregated output set is reduced to a crisp value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Defuzzification {
    /// Membership-weighted mean of the samples
    #[default]
    Centroid,
    /// First sample reaching the maximum membership
    FirstOfMaxima,
}

/// Options for [`FuzzyController`].
///
/// # Example
///
/// ```rust
/// use concord_fuzzy::{Defuzzification, InferenceOptions};
///
/// let options = InferenceOptions::new()
///     .with_samples(200)
///     .with_defuzzification(Defuzzification::FirstOfMaxima);
/// assert_eq!(options.samples, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Number of evenly spaced output samples (at least 2)
    pub samples: usize,
    /// Defuzzification method
    pub defuzzification: Defuzzification,
}

impl InferenceOptions {
    /// Defaults: 1000 samples, centroid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            defuzzification: Defuzzification::Centroid,
        }
    }

    /// Sets the sample count.
    #[must_use]
    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the defuzzification method.
    #[must_use]
    pub const fn with_defuzzification(mut self, method: Defuzzification) -> Self {
        self.defuzzification = method;
        self
    }

    /// Checks the options.
    ///
    /// # Errors
    ///
    /// [`FuzzyError::InvalidSamples`] if `samples < 2`.
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(FuzzyError::InvalidSamples {
                samples: self.samples,
            });
        }
        Ok(())
    }
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-input, single-output Mamdani controller.
///
/// # Example
///
/// ```rust
/// use concord_fuzzy::{FuzzyController, InferenceOptions, LinguisticVariable, Rule, Trapezoid};
///
/// let input = LinguisticVariable::new("load")
///     .with_term("busy", Trapezoid::new([(0.0, 0.0), (5.0, 1.0), (10.0, 1.0), (10.0, 1.0)])?);
/// let output = LinguisticVariable::new("fans")
///     .with_term("fast", Trapezoid::new([(0.0, 0.0), (4.0, 1.0), (6.0, 1.0), (10.0, 0.0)])?);
/// let controller = FuzzyController::new(
///     input,
///     output,
///     vec![Rule::new("busy", "fast")],
///     InferenceOptions::new(),
/// )?;
///
/// assert!((controller.infer(8.0) - 5.0).abs() < 1e-6);
/// # Ok::<(), concord_fuzzy::FuzzyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyController {
    input: LinguisticVariable,
    output: LinguisticVariable,
    rules: Vec<Rule>,
    options: InferenceOptions,
    universe: Vec<f64>,
}

impl FuzzyController {
    /// Builds a controller and samples the output universe.
    ///
    /// Rules naming unknown terms are kept and logged; they never fire.
    ///
    /// # Errors
    ///
    /// - [`FuzzyError::InvalidSamples`] for fewer than 2 samples
    /// - [`FuzzyError::EmptyVariable`] if the output variable has no terms
    pub fn new(
        input: LinguisticVariable,
        output: LinguisticVariable,
        rules: Vec<Rule>,
        options: InferenceOptions,
    ) -> Result<Self> {
        options.validate()?;
        let (lo, hi) = output.range()?;
        let universe = linspace(lo, hi, options.samples);

        for rule in &rules {
            if input.term(&rule.input).is_none() {
                warn!("Rule references unknown input term {:?} of {:?}", rule.input, input.name());
            }
            if output.term(&rule.output).is_none() {
                warn!("Rule references unknown output term {:?} of {:?}", rule.output, output.name());
            }
        }

        debug!(
            "Fuzzy controller {} -> {}: {} rules, universe [{}, {}] in {} samples",
            input.name(),
            output.name(),
            rules.len(),
            lo,
            hi,
            options.samples
        );

        Ok(Self {
            input,
            output,
            rules,
            options,
            universe,
        })
    }

    /// The sampled output universe.
    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    /// The active options.
    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    /// Activation of each rule at `x`, in rule order.
    pub fn activations(&self, x: f64) -> Vec<f64> {
        self.rules
            .iter()
            .map(|rule| self.input.membership(&rule.input, x).unwrap_or(0.0))
            .collect()
    }

    /// Aggregated output membership at every universe sample.
    pub fn aggregate(&self, x: f64) -> Vec<f64> {
        let mut aggregated: Vec<f64> = vec![0.0; self.universe.len()];
        for (rule, activation) in self.rules.iter().zip(self.activations(x)) {
            if activation <= 0.0 {
                continue;
            }
            let Some(term) = self.output.term(&rule.output) else {
                continue;
            };
            for (mu, &u) in aggregated.iter_mut().zip(&self.universe) {
                *mu = mu.max(activation.min(term.shape.membership(u)));
            }
        }
        aggregated
    }

    /// Infers the crisp output for crisp input `x`.
    ///
    /// Returns the midpoint of the output range when no rule fires.
    pub fn infer(&self, x: f64) -> f64 {
        let aggregated = self.aggregate(x);
        let value = match self.options.defuzzification {
            Defuzzification::Centroid => centroid(&self.universe, &aggregated),
            Defuzzification::FirstOfMaxima => first_of_maxima(&self.universe, &aggregated),
        };
        value.unwrap_or_else(|| {
            debug!("No rule fired for input {}", x);
            midpoint(&self.universe)
        })
    }
}

fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
        .collect()
}

fn midpoint(universe: &[f64]) -> f64 {
    match (universe.first(), universe.last()) {
        (Some(lo), Some(hi)) => (lo + hi) / 2.0,
        _ => 0.0,
    }
}

fn centroid(universe: &[f64], membership: &[f64]) -> Option<f64> {
    let total: f64 = membership.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let moment: f64 = universe.iter().zip(membership).map(|(u, mu)| u * mu).sum();
    Some(moment / total)
}

fn first_of_maxima(universe: &[f64], membership: &[f64]) -> Option<f64> {
    let peak = membership.iter().copied().fold(0.0, f64::max);
    if peak <= 0.0 {
        return None;
    }
    membership
        .iter()
        .position(|&mu| mu == peak)
        .and_then(|i| universe.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Trapezoid;

    fn trapezoid(points: [(f64, f64); 4]) -> Trapezoid {
        Trapezoid::new(points).unwrap()
    }

    fn heating() -> LinguisticVariable {
        LinguisticVariable::new("heating")
            .with_term("low", trapezoid([(0.0, 1.0), (0.0, 1.0), (2.0, 1.0), (4.0, 0.0)]))
            .with_term("medium", trapezoid([(2.0, 0.0), (4.0, 1.0), (6.0, 1.0), (8.0, 0.0)]))
            .with_term("high", trapezoid([(6.0, 0.0), (8.0, 1.0), (10.0, 1.0), (10.0, 1.0)]))
    }

    fn temperature() -> LinguisticVariable {
        LinguisticVariable::new("temperature")
            .with_term("cold", trapezoid([(0.0, 1.0), (0.0, 1.0), (10.0, 1.0), (18.0, 0.0)]))
            .with_term("comfortable", trapezoid([(10.0, 0.0), (18.0, 1.0), (22.0, 1.0), (26.0, 0.0)]))
            .with_term("hot", trapezoid([(22.0, 0.0), (26.0, 1.0), (40.0, 1.0), (40.0, 1.0)]))
    }

    fn controller(rules: Vec<Rule>, options: InferenceOptions) -> FuzzyController {
        FuzzyController::new(temperature(), heating(), rules, options).unwrap()
    }

    fn thermostat(options: InferenceOptions) -> FuzzyController {
        controller(
            vec![
                Rule::new("cold", "high"),
                Rule::new("comfortable", "medium"),
                Rule::new("hot", "low"),
            ],
            options,
        )
    }

    #[test]
    fn test_linspace_endpoints() {
        let u = linspace(0.0, 10.0, 5);
        assert_eq!(u, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(linspace(1.0, 1.0, 3), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_universe_spans_output_terms() {
        let c = thermostat(InferenceOptions::new());
        assert_eq!(c.universe().len(), DEFAULT_SAMPLES);
        assert_eq!(c.universe().first(), Some(&0.0));
        assert_eq!(c.universe().last(), Some(&10.0));
    }

    #[test]
    fn test_activations() {
        let c = thermostat(InferenceOptions::new());
        assert_eq!(c.activations(14.0), vec![0.5, 0.5, 0.0]);
        assert_eq!(c.activations(20.0), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_symmetric_term_centroid_is_centre() {
        let c = thermostat(InferenceOptions::new());
        assert!((c.infer(20.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_clipped_output_is_capped() {
        let c = thermostat(InferenceOptions::new());
        let aggregated = c.aggregate(14.0);
        assert!(aggregated.iter().all(|&mu| mu <= 0.5));
        let value = c.infer(14.0);
        assert!(value > 5.0 && value < 76.0 / 9.0, "got {}", value);
    }

    #[test]
    fn test_first_of_maxima() {
        let c = thermostat(InferenceOptions::new().with_defuzzification(Defuzzification::FirstOfMaxima));
        let value = c.infer(20.0);
        assert!((4.0..4.02).contains(&value), "got {}", value);
    }

    #[test]
    fn test_no_rule_fires_gives_midpoint() {
        let c = controller(Vec::new(), InferenceOptions::new());
        assert_eq!(c.infer(20.0), 5.0);

        let fom = controller(
            vec![Rule::new("freezing", "high")],
            InferenceOptions::new().with_defuzzification(Defuzzification::FirstOfMaxima),
        );
        assert_eq!(fom.infer(-40.0), 5.0);
    }

    #[test]
    fn test_unknown_output_term_contributes_nothing() {
        let c = controller(vec![Rule::new("cold", "scorching")], InferenceOptions::new());
        assert!(c.aggregate(0.0).iter().all(|&mu| mu == 0.0));
    }

    #[test]
    fn test_invalid_samples() {
        let err = FuzzyController::new(
            temperature(),
            heating(),
            Vec::new(),
            InferenceOptions::new().with_samples(1),
        )
        .unwrap_err();
        assert!(matches!(err, FuzzyError::InvalidSamples { samples: 1 }));
    }

    #[test]
    fn test_empty_output_variable() {
        let err = FuzzyController::new(
            temperature(),
            LinguisticVariable::new("heating"),
            Vec::new(),
            InferenceOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FuzzyError::EmptyVariable { .. }));
    }

    #[test]
    fn test_defuzzification_serde() {
        let method: Defuzzification = serde_json::from_str("\"first_of_maxima\"").unwrap();
        assert_eq!(method, Defuzzification::FirstOfMaxima);
        assert_eq!(serde_json::to_string(&Defuzzification::Centroid).unwrap(), "\"centroid\"");
    }
}
