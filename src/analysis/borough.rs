//! Per-borough aggregates of the total SAT score

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::core::School;

/// Count, mean and sample standard deviation of `total_sat` for one borough
#[derive(Debug, Clone, PartialEq)]
pub struct BoroughStats {
    pub borough: String,
    pub num_schools: usize,
    pub average_sat: f64,
    /// `None` when the borough has a single school
    pub std_sat: Option<f64>,
}

/// Two decimals, halves to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Higher spread first; undefined spread last.
fn by_std_desc(a: &BoroughStats, b: &BoroughStats) -> Ordering {
    match (a.std_sat, b.std_sat) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.borough.cmp(&b.borough))
}

/// Groups schools by borough, sorted by standard deviation descending.
///
/// Mean and standard deviation are rounded to two decimals.
pub fn get_borough_stats(schools: &[School]) -> Vec<BoroughStats> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for s in schools {
        groups.entry(s.borough.as_str()).or_default().push(s.total_sat);
    }

    let mut stats: Vec<BoroughStats> = groups
        .into_iter()
        .map(|(borough, totals)| BoroughStats {
            borough: borough.to_string(),
            num_schools: totals.len(),
            average_sat: round2(mean(&totals)),
            std_sat: sample_std(&totals).map(round2),
        })
        .collect();

    stats.sort_by(by_std_desc);
    stats
}

/// The borough whose total SAT scores vary the most.
pub fn get_largest_std_borough(schools: &[School]) -> Option<BoroughStats> {
    get_borough_stats(schools).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(borough: &str, total: f64) -> School {
        School::new(0, "s", borough, total, 0.0, 0.0)
    }

    #[test]
    fn test_stats_match_reference() {
        let schools = vec![
            school("Bronx", 1000.0),
            school("Bronx", 1200.0),
            school("Bronx", 1400.0),
            school("Queens", 1500.0),
            school("Queens", 1510.0),
            school("Manhattan", 2000.0),
        ];

        let stats = get_borough_stats(&schools);
        assert_eq!(stats.len(), 3);

        assert_eq!(stats[0].borough, "Bronx");
        assert_eq!(stats[0].num_schools, 3);
        assert_eq!(stats[0].average_sat, 1200.0);
        assert_eq!(stats[0].std_sat, Some(200.0));

        assert_eq!(stats[1].borough, "Queens");
        assert_eq!(stats[1].num_schools, 2);
        assert_eq!(stats[1].average_sat, 1505.0);
        // sqrt(50) = 7.0710...
        assert_eq!(stats[1].std_sat, Some(7.07));

        // Single school: no spread, sorted last
        assert_eq!(stats[2].borough, "Manhattan");
        assert_eq!(stats[2].std_sat, None);
    }

    #[test]
    fn test_mean_is_rounded() {
        let schools = vec![school("Bronx", 1000.0), school("Bronx", 1000.0), school("Bronx", 1001.0)];
        let stats = get_borough_stats(&schools);
        assert_eq!(stats[0].average_sat, 1000.33);
        assert_eq!(stats[0].std_sat, Some(0.58));
    }

    #[test]
    fn test_mean_ties_round_to_even() {
        // Mean is exactly 1000.125
        let mut schools = vec![school("Bronx", 1000.0); 7];
        schools.push(school("Bronx", 1001.0));
        let stats = get_borough_stats(&schools);
        assert_eq!(stats[0].average_sat, 1000.12);
        assert_eq!(stats[0].std_sat, Some(0.35));
    }

    #[test]
    fn test_largest_std_borough() {
        let schools = vec![
            school("Bronx", 1000.0),
            school("Bronx", 1010.0),
            school("Brooklyn", 900.0),
            school("Brooklyn", 1900.0),
        ];
        let largest = get_largest_std_borough(&schools).unwrap();
        assert_eq!(largest.borough, "Brooklyn");
        assert_eq!(largest.num_schools, 2);

        assert!(get_largest_std_borough(&[]).is_none());
    }
}
