//! Threshold filtering and score rankings

use crate::core::School;

/// A school selected by its math score
#[derive(Debug, Clone, PartialEq)]
pub struct MathRanking {
    pub index: usize,
    pub school_name: String,
    pub average_math: f64,
    /// Render the score as a whole number
    pub integer: bool,
}

/// A school ranked by its total SAT score
#[derive(Debug, Clone, PartialEq)]
pub struct TotalRanking {
    pub index: usize,
    pub school_name: String,
    pub total_sat: f64,
    pub integer: bool,
}

/// Schools with `average_math >= threshold`, highest math score first.
///
/// Equal scores keep their input order.
pub fn get_best_math_schools(schools: &[School], threshold: f64) -> Vec<MathRanking> {
    let mut best: Vec<MathRanking> = schools
        .iter()
        .filter(|s| s.average_math >= threshold)
        .map(|s| MathRanking {
            index: s.index,
            school_name: s.school_name.clone(),
            average_math: s.average_math,
            integer: s.integer_scores.math,
        })
        .collect();

    best.sort_by(|a, b| b.average_math.total_cmp(&a.average_math));
    best
}

/// The `top_n` schools by total SAT score, highest first.
pub fn get_top_schools_by_total_sat(schools: &[School], top_n: usize) -> Vec<TotalRanking> {
    let mut ranked: Vec<&School> = schools.iter().collect();
    ranked.sort_by(|a, b| b.total_sat.total_cmp(&a.total_sat));

    ranked
        .into_iter()
        .take(top_n)
        .map(|s| TotalRanking {
            index: s.index,
            school_name: s.school_name.clone(),
            total_sat: s.total_sat,
            integer: s.integer_scores.total(),
        })
        .collect()
}
