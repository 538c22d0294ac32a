//! Material recommendation
//!
//! Scores a fixed candidate table with the environment score and ranks
//! it. No persistence, no I/O; the table values are carried over
//! unchanged from the trained system.

use serde::Serialize;

use crate::scoring::environment_score;

/// Static reference data for recommendation
#[derive(Debug, Clone, Copy)]
pub struct MaterialCandidate {
    pub name: &'static str,
    pub co2: f64,
    pub recyclable: bool,
    pub durability: f64,
}

/// The fixed candidate set
pub const CANDIDATES: &[MaterialCandidate] = &[
    MaterialCandidate { name: "PLA Bioplastic", co2: 1.2, recyclable: true, durability: 8.0 },
    MaterialCandidate { name: "Recycled Paper", co2: 0.8, recyclable: true, durability: 5.0 },
    MaterialCandidate { name: "Plastic", co2: 2.5, recyclable: false, durability: 9.0 },
];

/// One scored candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMaterial {
    pub material: &'static str,
    pub environment_score: f64,
}

fn score_candidate(candidate: &MaterialCandidate) -> RankedMaterial {
    RankedMaterial {
        material: candidate.name,
        environment_score: environment_score(
            candidate.co2,
            candidate.recyclable,
            candidate.durability,
        ),
    }
}

/// Score every candidate and sort best-first
///
/// Sort is stable: equal scores keep their input order.
pub fn rank(candidates: &[MaterialCandidate]) -> Vec<RankedMaterial> {
    let mut results: Vec<RankedMaterial> = candidates.iter().map(score_candidate).collect();
    results.sort_by(|a, b| b.environment_score.total_cmp(&a.environment_score));
    results
}

/// Highest-scoring candidate; ties go to the first occurrence
pub fn best(candidates: &[MaterialCandidate]) -> Option<RankedMaterial> {
    candidates.iter().map(|c| score_candidate(c)).reduce(|best, candidate| {
        if candidate.environment_score > best.environment_score {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_fixed_table() {
        let ranking = rank(CANDIDATES);

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].material, "PLA Bioplastic");
        assert_eq!(ranking[0].environment_score, 0.687);
        assert_eq!(ranking[1].material, "Recycled Paper");
        assert_eq!(ranking[1].environment_score, 0.678);
        assert_eq!(ranking[2].material, "Plastic");
        assert_eq!(ranking[2].environment_score, 0.323);
    }

    #[test]
    fn test_best_matches_top_of_ranking() {
        let best = best(CANDIDATES).unwrap();
        assert_eq!(best.material, "PLA Bioplastic");
        assert_eq!(best.environment_score, 0.687);
    }

    #[test]
    fn test_best_tie_goes_to_first_occurrence() {
        let tied = [
            MaterialCandidate { name: "First", co2: 1.0, recyclable: true, durability: 5.0 },
            MaterialCandidate { name: "Second", co2: 1.0, recyclable: true, durability: 5.0 },
        ];

        assert_eq!(best(&tied).unwrap().material, "First");

        let ranking = rank(&tied);
        assert_eq!(ranking[0].material, "First");
        assert_eq!(ranking[1].material, "Second");
    }

    #[test]
    fn test_best_of_empty_is_none() {
        assert!(best(&[]).is_none());
    }
}
