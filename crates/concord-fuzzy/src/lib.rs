//! # Fuzzy Inference
//!
//! Single-input, single-output Mamdani inference over piecewise-linear
//! membership functions.
//!
//! ## Documents
//!
//! | Document | Shape |
//! |----------|-------|
//! | Terms | `{"<variable>": [{"id": "<term>", "points": [[x, y], [x, y], [x, y], [x, y]]}]}` |
//! | Rules | `[["<input term>", "<output term>"], ...]` |
//!
//! ## Quick Start
//!
//! ```rust
//! use concord_fuzzy::{infer_json, InferenceOptions};
//!
//! let temperature = r#"{"temperature": [
//!     {"id": "cold", "points": [[0, 1], [0, 1], [10, 1], [18, 0]]},
//!     {"id": "comfortable", "points": [[10, 0], [18, 1], [22, 1], [26, 0]]}
//! ]}"#;
//! let heating = r#"{"heating": [
//!     {"id": "medium", "points": [[2, 0], [4, 1], [6, 1], [8, 0]]},
//!     {"id": "high", "points": [[6, 0], [8, 1], [10, 1], [10, 1]]}
//! ]}"#;
//! let rules = r#"[["cold", "high"], ["comfortable", "medium"]]"#;
//!
//! let value = infer_json(temperature, heating, rules, 20.0, InferenceOptions::new())?;
//! assert!((value - 5.0).abs() < 1e-3);
//! # Ok::<(), concord_fuzzy::FuzzyError>(())
//! ```

mod engine;
mod error;
mod rules;
mod term;

pub use engine::{Defuzzification, FuzzyController, InferenceOptions, DEFAULT_SAMPLES};
pub use error::{FuzzyError, Result};
pub use rules::{parse_rules, Rule};
pub use term::{LinguisticVariable, Term, Trapezoid};

/// Parses term and rule documents and infers the output for `value`.
///
/// # Errors
///
/// Any [`FuzzyError`] from parsing the documents or building the
/// [`FuzzyController`].
pub fn infer_json(
    input_terms: &str,
    output_terms: &str,
    rules: &str,
    value: f64,
    options: InferenceOptions,
) -> Result<f64> {
    let controller = FuzzyController::new(
        LinguisticVariable::from_json(input_terms)?,
        LinguisticVariable::from_json(output_terms)?,
        parse_rules(rules)?,
        options,
    )?;
    Ok(controller.infer(value))
}
