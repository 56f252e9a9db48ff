//! Code analysis command
//!
//! Shows how a guess would split the full candidate pool, one partition per
//! score, against the minimax opening.

use crate::core::{Code, Configuration, Score};
use crate::solver::minimax::{group_by_score, select_next_guess};
use crate::solver::CandidatePool;
use anyhow::{Context, Result};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub code: Code,
    /// Partition sizes, largest first
    pub partitions: Vec<(Score, usize)>,
    pub worst_case: usize,
    /// Candidates left on average, with every candidate equally likely
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// The minimax opening for comparison
    pub best_code: Code,
    pub best_worst_case: usize,
}

/// Analyze `code` as a first guess under `config`
///
/// # Errors
///
/// Returns an error if:
/// - The code does not parse under `config`
/// - The configuration is invalid or over budget
pub fn analyze_code(code: &str, config: &Configuration) -> Result<AnalysisResult> {
    let code = Code::parse(code, config).with_context(|| format!("Invalid code '{code}'"))?;
    let pool = CandidatePool::from_config(config)?;
    let candidates = pool.active_codes();

    let mut partitions: Vec<(Score, usize)> = group_by_score(&code, &candidates)
        .into_iter()
        .collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total_candidates = candidates.len();
    let worst_case = partitions.first().map_or(0, |&(_, n)| n);
    let expected_remaining = partitions
        .iter()
        .map(|&(_, n)| (n * n) as f64)
        .sum::<f64>()
        / total_candidates.max(1) as f64;

    let (best_code, best_worst_case) = select_next_guess(&pool)?;

    Ok(AnalysisResult {
        code,
        partitions,
        worst_case,
        expected_remaining,
        total_candidates,
        best_code: best_code.clone(),
        best_worst_case,
    })
}
