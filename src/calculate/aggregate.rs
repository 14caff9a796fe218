//! Team roster and lineup aggregate statistics.

use crate::models::{AggregateScore, CompositeScore, Player, PositionSlot, RatingBucket};

use super::{calculate_radar_stats, rounded_mean};

/// The five standard position codes coverage badges are rendered for.
pub const STANDARD_POSITIONS: [&str; 5] = ["PG", "SG", "SF", "PF", "C"];

/// Overall-rating buckets, highest first: (label, min, max) inclusive.
const RATING_BUCKETS: [(&str, u32, u32); 5] = [
    ("90+", 90, u32::MAX),
    ("80-89", 80, 89),
    ("70-79", 70, 79),
    ("60-69", 60, 69),
    ("<60", 0, 59),
];

/// Average composite scores across a collection of players.
///
/// Field-by-field rounded mean of each player's radar stats, so the
/// result is identical under any reordering of `players`. Used for both
/// team rosters and lineup comparisons. An empty collection yields the
/// all-zero score, which UI empty states rely on.
pub fn calculate_aggregate_stats(players: &[Player]) -> AggregateScore {
    if players.is_empty() {
        return AggregateScore::default();
    }

    let scores: Vec<CompositeScore> = players.iter().map(calculate_radar_stats).collect();

    let mean_of = |field: fn(&CompositeScore) -> u32| -> u32 {
        let values: Vec<f64> = scores.iter().map(|s| field(s) as f64).collect();
        rounded_mean(&values)
    };

    AggregateScore {
        overall: mean_of(|s| s.overall),
        inside_scoring: mean_of(|s| s.inside_scoring),
        outside_scoring: mean_of(|s| s.outside_scoring),
        playmaking: mean_of(|s| s.playmaking),
        athleticism: mean_of(|s| s.athleticism),
        rebounding: mean_of(|s| s.rebounding),
        defending: mean_of(|s| s.defending),
    }
}

/// Coverage of the five standard positions across a collection.
///
/// A slot is covered when any player lists that code; always returns
/// all five slots, in the standard order.
pub fn position_coverage(players: &[Player]) -> Vec<PositionSlot> {
    STANDARD_POSITIONS
        .iter()
        .map(|code| PositionSlot {
            position: (*code).to_string(),
            covered: players.iter().any(|p| p.plays_position(code)),
        })
        .collect()
}

/// Partition players into the fixed overall-rating buckets.
///
/// Reports count and rounded percentage per bucket, percentages against
/// the total player count. An empty collection yields an empty vector
/// rather than a division by zero.
pub fn rating_distribution(players: &[Player]) -> Vec<RatingBucket> {
    if players.is_empty() {
        return Vec::new();
    }

    let total = players.len() as f64;
    RATING_BUCKETS
        .iter()
        .map(|&(label, min, max)| {
            let count = players
                .iter()
                .filter(|p| p.overall >= min && p.overall <= max)
                .count() as u32;
            RatingBucket {
                label: label.to_string(),
                count,
                percentage: (count as f64 / total * 100.0).round() as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttributeBag;
    use pretty_assertions::assert_eq;

    fn player(name: &str, overall: u32, positions: &[&str]) -> Player {
        Player::new(name.to_string(), None, overall)
            .with_positions(positions.iter().map(|p| p.to_string()).collect())
    }

    fn player_with_attrs(name: &str, overall: u32, attrs: &[(&str, f64)]) -> Player {
        let bag: AttributeBag = attrs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        Player::new(name.to_string(), None, overall).with_attributes(bag)
    }

    #[test]
    fn test_empty_aggregate_is_all_zero() {
        let stats = calculate_aggregate_stats(&[]);
        assert_eq!(stats, AggregateScore::default());
        assert_eq!(stats.overall, 0);
        assert_eq!(stats.defending, 0);
    }

    #[test]
    fn test_aggregate_overall_rounded_mean() {
        let players = vec![player("A", 80, &[]), player("B", 90, &[])];
        let stats = calculate_aggregate_stats(&players);
        assert_eq!(stats.overall, 85);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let a = player_with_attrs("A", 80, &[("speed", 70.0), ("threePointShot", 90.0)]);
        let b = player_with_attrs("B", 91, &[("speed", 95.0)]);
        let c = player_with_attrs("C", 74, &[("closeShot", 60.0)]);

        let forward = calculate_aggregate_stats(&[a.clone(), b.clone(), c.clone()]);
        let reversed = calculate_aggregate_stats(&[c, b, a]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_aggregate_averages_category_fields() {
        // Player A: outside 90, player B: outside 70 -> aggregate 80.
        let a = player_with_attrs("A", 80, &[("threePointShot", 90.0)]);
        let b = player_with_attrs("B", 80, &[("midRangeShot", 70.0)]);
        let stats = calculate_aggregate_stats(&[a, b]);
        assert_eq!(stats.outside_scoring, 80);
        assert_eq!(stats.overall, 80);
    }

    #[test]
    fn test_aggregate_single_player_equals_radar() {
        let p = player_with_attrs("Solo", 88, &[("speed", 90.0), ("steal", 80.0)]);
        let radar = calculate_radar_stats(&p);
        let aggregate = calculate_aggregate_stats(&[p]);
        assert_eq!(aggregate, radar);
    }

    #[test]
    fn test_position_coverage() {
        let players = vec![player("A", 80, &["PG", "SG"]), player("B", 80, &["C"])];
        let coverage = position_coverage(&players);

        assert_eq!(coverage.len(), 5);
        assert_eq!(coverage[0], PositionSlot { position: "PG".to_string(), covered: true });
        assert_eq!(coverage[1], PositionSlot { position: "SG".to_string(), covered: true });
        assert_eq!(coverage[2], PositionSlot { position: "SF".to_string(), covered: false });
        assert_eq!(coverage[3], PositionSlot { position: "PF".to_string(), covered: false });
        assert_eq!(coverage[4], PositionSlot { position: "C".to_string(), covered: true });
    }

    #[test]
    fn test_position_coverage_empty_collection() {
        let coverage = position_coverage(&[]);
        assert_eq!(coverage.len(), 5);
        assert!(coverage.iter().all(|slot| !slot.covered));
    }

    #[test]
    fn test_position_coverage_case_insensitive() {
        let players = vec![player("A", 80, &["pg"])];
        let coverage = position_coverage(&players);
        assert!(coverage[0].covered);
    }

    #[test]
    fn test_rating_distribution_empty() {
        assert!(rating_distribution(&[]).is_empty());
    }

    #[test]
    fn test_rating_distribution_counts_and_percentages() {
        let players = vec![
            player("A", 95, &[]),
            player("B", 85, &[]),
            player("C", 85, &[]),
        ];
        let buckets = rating_distribution(&players);

        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].label, "90+");
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].percentage, 33);
        assert_eq!(buckets[1].label, "80-89");
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[1].percentage, 67);
        assert_eq!(buckets[2].count, 0);
        assert_eq!(buckets[2].percentage, 0);
    }

    #[test]
    fn test_rating_distribution_boundaries() {
        let players = vec![
            player("A", 90, &[]),
            player("B", 89, &[]),
            player("C", 60, &[]),
            player("D", 59, &[]),
        ];
        let buckets = rating_distribution(&players);

        assert_eq!(buckets[0].count, 1); // 90 in "90+"
        assert_eq!(buckets[1].count, 1); // 89 in "80-89"
        assert_eq!(buckets[3].count, 1); // 60 in "60-69"
        assert_eq!(buckets[4].count, 1); // 59 in "<60"
    }
}
