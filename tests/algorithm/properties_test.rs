use afterlife_press::algorithm::{Dominance, TIE_STUB_FRACTION, decompose, makeup, tendency};
use afterlife_press::models::{SCORE_MAX, Subgroup, SubgroupValues};
use afterlife_press::{PressError, parse_subjects};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::utils::{parse_fixture, random_respondents, random_score, random_subject, table_csv};

const EPSILON: f64 = 1e-9;

/// Tier ratios add back up to the score and stay within one circle
#[test]
fn test_decomposition_reconstructs_score() {
    for step in 0..=6000 {
        let score = f64::from(step) / 1000.0;
        let tiers = decompose(score).unwrap();
        assert!(
            (tiers.total() - score).abs() < EPSILON,
            "score {score} decomposed to {:?}",
            tiers.ratios()
        );
        for ratio in tiers.ratios() {
            assert!((0.0..=1.0 + EPSILON).contains(ratio));
        }
        // Thermometer fill: a tier is never fuller than the one below it
        for window in tiers.ratios().windows(2) {
            assert!(window[0] + EPSILON >= window[1]);
        }
    }
}

#[test]
fn test_decomposition_worked_example() {
    let tiers = decompose(2.80).unwrap();
    let expected = [1.0, 1.0, 0.8, 0.0, 0.0, 0.0];
    for (ratio, want) in tiers.ratios().iter().zip(expected) {
        assert!((ratio - want).abs() < EPSILON);
    }
    assert_eq!(tiers.tier(4), Some(0.0));
    assert_eq!(tiers.tier(0), None);
    assert_eq!(tiers.tier(7), None);
}

#[test]
fn test_decomposition_rejects_off_scale() {
    for score in [-0.01, 6.01, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            decompose(score),
            Err(PressError::ScoreOutOfRange { .. })
        ));
    }
}

/// Exactly one arrow unless tied, sized in proportion to the differential
#[test]
fn test_tendency_exhaustive() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let span = 515.0;

    for _ in 0..2000 {
        let negative = random_score(&mut rng);
        let positive = random_score(&mut rng);
        let outcome = tendency::resolve(negative, positive, span);
        let diff = positive - negative;

        assert!((outcome.differential - diff).abs() < EPSILON);
        match outcome.dominance {
            Dominance::Positive => {
                assert!(diff > 0.0);
                assert!(outcome.positive.visible && !outcome.negative.visible);
                assert!((outcome.positive.length - diff / SCORE_MAX * span).abs() < EPSILON);
                assert_eq!(outcome.negative.length, 0.0);
            }
            Dominance::Negative => {
                assert!(diff < 0.0);
                assert!(outcome.negative.visible && !outcome.positive.visible);
                assert!((outcome.negative.length + diff / SCORE_MAX * span).abs() < EPSILON);
                assert_eq!(outcome.positive.length, 0.0);
            }
            Dominance::Tied => {
                assert_eq!(diff, 0.0);
                assert!(outcome.negative.visible && outcome.positive.visible);
                assert_eq!(outcome.negative.length, TIE_STUB_FRACTION * span);
                assert_eq!(outcome.positive.length, TIE_STUB_FRACTION * span);
            }
        }
        assert!(outcome.length <= span + EPSILON);
    }
}

#[test]
fn test_tendency_worked_example() {
    let outcome = tendency::resolve(3.40, 4.69, 515.0);
    assert_eq!(outcome.dominance, Dominance::Positive);
    assert!(outcome.positive.visible);
    assert!(!outcome.negative.visible);
    assert!((outcome.length - 110.775).abs() < 1e-6);
}

/// Hidden exactly when the subgroup has no respondents; ranks ascend with score
#[test]
fn test_makeup_hiding_and_ranking() {
    let mut rng = StdRng::seed_from_u64(42);
    let span = 600.0;

    for _ in 0..2000 {
        let scores = SubgroupValues::new(
            random_score(&mut rng),
            random_score(&mut rng),
            random_score(&mut rng),
        );
        let counts = SubgroupValues::new(
            random_respondents(&mut rng),
            random_respondents(&mut rng),
            random_respondents(&mut rng),
        );
        let outcome = makeup::resolve(scores, counts, span);

        assert_eq!(outcome.entries().len(), 3);
        for subgroup in Subgroup::ALL {
            let entry = outcome.entry(subgroup).unwrap();
            assert_eq!(entry.score, scores.get(subgroup));
            assert_eq!(entry.is_visible(), counts.get(subgroup) > 0);
            if let Some(arrow) = entry.arrow {
                assert_eq!(arrow.draw_order, entry.rank);
                assert!((arrow.length - entry.score / SCORE_MAX * span).abs() < EPSILON);
            }
        }

        let ranks: Vec<u8> = outcome.entries().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        for window in outcome.entries().windows(2) {
            assert!(window[0].score <= window[1].score);
        }
    }
}

#[test]
fn test_makeup_worked_example() {
    let outcome = makeup::resolve(
        SubgroupValues::new(3.82, 4.02, 2.00),
        SubgroupValues::new(16, 16, 1),
        600.0,
    );
    let drawn: Vec<(Subgroup, u8, f64)> = outcome
        .entries()
        .iter()
        .map(|e| (e.subgroup, e.rank, e.arrow.unwrap().length))
        .collect();

    let expected = [
        (Subgroup::Other, 1, 200.0),
        (Subgroup::Male, 2, 382.0),
        (Subgroup::Female, 3, 402.0),
    ];
    for ((subgroup, rank, length), (want_subgroup, want_rank, want_length)) in
        drawn.into_iter().zip(expected)
    {
        assert_eq!(subgroup, want_subgroup);
        assert_eq!(rank, want_rank);
        assert!((length - want_length).abs() < 1e-6);
    }
}

#[test]
fn test_makeup_zero_respondents_hidden() {
    let outcome = makeup::resolve(
        SubgroupValues::new(3.82, 4.02, 2.00),
        SubgroupValues::new(16, 16, 0),
        600.0,
    );
    let other = outcome.entry(Subgroup::Other).unwrap();
    assert!(!other.is_visible());
    assert_eq!(other.rank, 1);
    assert_eq!(outcome.visible_count(), 2);
}

#[test]
fn test_makeup_ties_keep_subgroup_order() {
    let outcome = makeup::resolve(
        SubgroupValues::new(2.5, 2.5, 2.5),
        SubgroupValues::new(1, 1, 1),
        600.0,
    );
    let order: Vec<Subgroup> = outcome.entries().iter().map(|e| e.subgroup).collect();
    assert_eq!(order, vec![Subgroup::Male, Subgroup::Female, Subgroup::Other]);
}

/// N well-formed blocks always parse into N subjects, in order
#[test]
fn test_parser_block_integrity() {
    let mut rng = StdRng::seed_from_u64(7);

    for count in 0..12 {
        let fixtures: Vec<_> = (0..count)
            .map(|i| random_subject(&mut rng, &format!("subject{i}")))
            .collect();
        let subjects = parse_fixture(&table_csv(&fixtures)).unwrap();

        assert_eq!(subjects.len(), count);
        for (subject, fixture) in subjects.iter().zip(&fixtures) {
            assert_eq!(subject.name(), fixture.name);
            assert_eq!(
                subject.subgroup_respondents().get(Subgroup::Other),
                fixture.other.respondents
            );
        }
    }

    assert!(parse_subjects(Vec::new()).unwrap().is_empty());
}
