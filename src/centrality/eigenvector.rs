//! Eigenvector centrality by power iteration.
//!
//! Iterates x ← (A + I)·x from the uniform vector, normalizing to unit L2
//! norm after every step. Adding the identity keeps the iteration from
//! oscillating on bipartite graphs without changing the dominant
//! eigenvector. Converged when Σ|x_k+1 − x_k| < n · tolerance.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::errors::{CographError, Result};
use crate::graph::view::NodeView;
use crate::graph::CoauthorGraph;

/// Power-iteration parameters.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Maximum number of iterations before giving up.
    /// Default: 100
    pub max_iterations: usize,
    /// Per-node convergence tolerance.
    /// Default: 1e-6
    pub tolerance: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PowerIteration {
    /// Create a solver with the given budget and tolerance.
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Set the maximum number of iterations.
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Eigenvector centrality for every author, unit L2 norm.
///
/// An empty graph yields an empty map. Returns
/// [`CographError::Convergence`] if the budget runs out; partial scores are
/// never returned.
pub fn eigenvector_centrality(
    graph: &CoauthorGraph,
    solver: &PowerIteration,
) -> Result<HashMap<String, f64>> {
    let view = NodeView::new(graph);
    let n = view.len();
    if n == 0 {
        return Ok(HashMap::new());
    }

    let threshold = n as f64 * solver.tolerance;
    let mut scores = vec![1.0 / n as f64; n];

    for iteration in 1..=solver.max_iterations {
        // (A + I) · x
        let mut next = scores.clone();
        for (v, nbrs) in view.neighbors.iter().enumerate() {
            for &w in nbrs {
                next[w] += scores[v];
            }
        }

        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        let delta: f64 = next.iter().zip(&scores).map(|(a, b)| (a - b).abs()).sum();
        scores = next;

        if delta < threshold {
            debug!(iteration, delta, "eigenvector centrality converged");
            return Ok(view.into_named(graph, scores));
        }
    }

    warn!(
        iterations = solver.max_iterations,
        "eigenvector centrality did not converge"
    );
    Err(CographError::Convergence {
        iterations: solver.max_iterations,
    })
}
