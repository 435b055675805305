//! Membership functions and linguistic variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// A piecewise-linear membership function through four control points.
///
/// Between consecutive points the membership is interpolated linearly;
/// left of the first point it is the first point's `y`, right of the last
/// it is the last point's `y`. A vertical segment (two points sharing an
/// `x`) evaluates to its left point's `y`.
///
/// # Example
///
/// ```rust
/// use concord_fuzzy::Trapezoid;
///
/// let warm = Trapezoid::new([(10.0, 0.0), (18.0, 1.0), (22.0, 1.0), (26.0, 0.0)])?;
/// assert_eq!(warm.membership(14.0), 0.5);
/// assert_eq!(warm.membership(20.0), 1.0);
/// assert_eq!(warm.membership(30.0), 0.0);
/// # Ok::<(), concord_fuzzy::FuzzyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trapezoid {
    points: [(f64, f64); 4],
}

impl Trapezoid {
    /// Creates a membership function from control points.
    ///
    /// # Errors
    ///
    /// [`FuzzyError::InvalidShape`] if a coordinate is not finite or the
    /// `x` values decrease.
    pub fn new(points: [(f64, f64); 4]) -> Result<Self> {
        Self::checked(points).map_err(|reason| FuzzyError::InvalidShape { reason })
    }

    fn checked(points: [(f64, f64); 4]) -> std::result::Result<Self, String> {
        if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err("control points must be finite".to_string());
        }
        if points.windows(2).any(|w| w[1].0 < w[0].0) {
            return Err("control point x values must be non-decreasing".to_string());
        }
        Ok(Self { points })
    }

    /// The control points.
    pub fn points(&self) -> &[(f64, f64); 4] {
        &self.points
    }

    /// Evaluates the membership degree at `x`.
    pub fn membership(&self, x: f64) -> f64 {
        let [first, .., last] = self.points;
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        self.points
            .windows(2)
            .find(|w| x <= w[1].0)
            .map(|w| interpolate(w[0], w[1], x))
            .unwrap_or(0.0)
    }
}

fn interpolate((x0, y0): (f64, f64), (x1, y1): (f64, f64), x: f64) -> f64 {
    if x0 == x1 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// A named fuzzy term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    /// Term id referenced by rules
    pub id: String,
    /// Membership function
    pub shape: Trapezoid,
}

/// A linguistic variable: a name and its terms, in definition order.
///
/// # Document Format
///
/// ```json
/// { "temperature": [
///     { "id": "cold", "points": [[0, 1], [0, 1], [10, 1], [18, 0]] },
///     { "id": "warm", "points": [[10, 0], [18, 1], [22, 1], [26, 0]] }
/// ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticVariable {
    name: String,
    terms: Vec<Term>,
}

#[derive(Deserialize)]
struct TermDoc {
    id: String,
    points: Vec<[f64; 2]>,
}

impl LinguisticVariable {
    /// Creates a variable without terms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    /// Adds a term, replacing any earlier term with the same id.
    #[must_use]
    pub fn with_term(mut self, id: impl Into<String>, shape: Trapezoid) -> Self {
        let id = id.into();
        self.terms.retain(|t| t.id != id);
        self.terms.push(Term { id, shape });
        self
    }

    /// Parses a term document.
    ///
    /// # Errors
    ///
    /// - [`FuzzyError::Parse`] for malformed JSON
    /// - [`FuzzyError::VariableCount`] unless exactly one variable is defined
    /// - [`FuzzyError::InvalidTerm`] for a term without four valid points
    pub fn from_json(json: &str) -> Result<Self> {
        let document: BTreeMap<String, Vec<TermDoc>> = serde_json::from_str(json)?;
        if document.len() != 1 {
            return Err(FuzzyError::VariableCount { found: document.len() });
        }
        let Some((name, docs)) = document.into_iter().next() else {
            return Err(FuzzyError::VariableCount { found: 0 });
        };

        let mut variable = Self::new(name);
        for doc in docs {
            let points: [[f64; 2]; 4] =
                doc.points
                    .as_slice()
                    .try_into()
                    .map_err(|_| FuzzyError::InvalidTerm {
                        term: doc.id.clone(),
                        reason: format!("expected 4 control points, found {}", doc.points.len()),
                    })?;
            let shape = Trapezoid::checked(points.map(|[x, y]| (x, y))).map_err(|reason| {
                FuzzyError::InvalidTerm {
                    term: doc.id.clone(),
                    reason,
                }
            })?;
            variable = variable.with_term(doc.id, shape);
        }
        Ok(variable)
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terms in definition order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Looks up a term by id.
    pub fn term(&self, id: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// Membership of `x` in term `id`; `None` if the term is unknown.
    pub fn membership(&self, id: &str, x: f64) -> Option<f64> {
        self.term(id).map(|t| t.shape.membership(x))
    }

    /// Smallest and largest control-point `x` across all terms.
    ///
    /// # Errors
    ///
    /// [`FuzzyError::EmptyVariable`] if the variable has no terms.
    pub fn range(&self) -> Result<(f64, f64)> {
        let xs = self.terms.iter().flat_map(|t| t.shape.points().iter().map(|p| p.0));
        let (lo, hi) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
        if self.terms.is_empty() {
            return Err(FuzzyError::EmptyVariable {
                variable: self.name.clone(),
            });
        }
        Ok((lo, hi))
    }
}
