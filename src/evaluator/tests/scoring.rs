use super::common::*;
use crate::evaluator::domain::{Rating, TraitId};
use crate::evaluator::scoring::{Category, PolicyError, ScoringEngine, ScoringPolicy};

fn band_rank(category: Category) -> u8 {
    match category {
        Category::Thriving => 4,
        Category::Good => 3,
        Category::Neutral => 2,
        Category::Negligible => 1,
        Category::Draining => 0,
        other => panic!("{other:?} is not a percentage band"),
    }
}

#[test]
fn unrated_friend_scores_zero_and_lands_in_negligible_band() {
    let traits = vec![weighted("kind", 7), weighted("funny", 3), no_go("lies")];
    let subject = friend("ada", &[]);

    for policy in policy_sets() {
        let result = ScoringEngine::new(policy).evaluate(&subject, &traits);
        assert_eq!(result.score, Some(0.0));
        assert_eq!(result.category, Category::Negligible);
        assert_eq!(result.display_percentage, 0);
        assert!(result.contributions.is_empty());
    }
}

#[test]
fn empty_registry_guards_against_zero_potential() {
    let result = engine().evaluate(&friend("ada", &[("ghost", score(5))]), &[]);
    assert_eq!(result.score, Some(0.0));
    assert_eq!(result.category, Category::Negligible);
}

#[test]
fn disqualifier_overrides_a_perfect_profile() {
    let traits = vec![weighted("kind", 7), weighted("loyal", 5), no_go("violent")];
    let subject = friend(
        "bo",
        &[
            ("kind", score(5)),
            ("loyal", score(5)),
            ("violent", flag(true)),
        ],
    );

    for policy in policy_sets() {
        let result = ScoringEngine::new(policy).evaluate(&subject, &traits);
        assert_eq!(result.category, Category::Disqualified);
        assert!(result.is_disqualified());
        assert_eq!(result.score, None);
        assert_eq!(result.display_percentage, 100);
        assert_eq!(result.label, "No-Go");
        assert_eq!(result.disqualified_by, Some(TraitId::from("violent")));
    }
}

#[test]
fn cleared_disqualifier_does_not_trigger() {
    let traits = vec![weighted("kind", 7), no_go("violent")];
    let subject = friend("cy", &[("kind", score(5)), ("violent", flag(false))]);

    let result = engine().evaluate(&subject, &traits);

    assert_eq!(result.category, Category::Thriving);
    assert_eq!(result.disqualified_by, None);
}

#[test]
fn essential_trait_at_maximum_reaches_top_band() {
    let traits = vec![weighted("essential", 7)];
    let subject = friend("di", &[("essential", score(5))]);

    for policy in policy_sets() {
        let result = ScoringEngine::new(policy).evaluate(&subject, &traits);
        assert_eq!(result.score, Some(100.0));
        assert_eq!(result.category, Category::Thriving);
        assert_eq!(result.label, "Thriving");
        assert_eq!(result.display_percentage, 100);
    }
}

#[test]
fn essential_trait_at_minimum_drains_and_may_turn_toxic() {
    let traits = vec![weighted("essential", 7)];
    let subject = friend("ed", &[("essential", score(-5))]);

    for policy in policy_sets() {
        let threshold = policy.toxic_threshold;
        let engine = ScoringEngine::new(policy);
        let result = engine.evaluate(&subject, &traits);

        assert_eq!(result.score, Some(-100.0));
        assert_eq!(result.harm, -35);
        assert_eq!(engine.policy().band_for(-100.0), Category::Draining);
        let expected = if -35 <= threshold {
            Category::Toxic
        } else {
            Category::Draining
        };
        assert_eq!(result.category, expected);
        assert_eq!(result.display_percentage, 0);
    }
}

#[test]
fn toxic_override_beats_thriving_percentage() {
    let traits = vec![
        weighted("kind", 7),
        weighted("loyal", 7),
        weighted("generous", 7),
        weighted("cruel", -7),
    ];
    let subject = friend(
        "fay",
        &[
            ("kind", score(5)),
            ("loyal", score(5)),
            ("generous", score(5)),
            ("cruel", score(5)),
        ],
    );

    let engine = engine();
    let result = engine.evaluate(&subject, &traits);
    let percentage = result.score.expect("not disqualified");

    assert!((percentage - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(engine.policy().band_for(percentage), Category::Thriving);
    assert_eq!(result.category, Category::Toxic);
    assert_eq!(result.harm, -35);
}

#[test]
fn score_is_monotonic_in_each_rating() {
    let traits = vec![
        weighted("p7", 7),
        weighted("p3", 3),
        weighted("n3", -3),
        weighted("n7", -7),
        no_go("x"),
    ];
    let engine = engine();

    for varied in &traits {
        if varied.is_no_go {
            continue;
        }
        let mut previous: Option<f64> = None;
        for value in -5..=5 {
            let ratings: Vec<(&str, Rating)> = traits
                .iter()
                .filter(|item| !item.is_no_go)
                .map(|item| {
                    let rating = if item.id == varied.id { value } else { 1 };
                    (item.id.as_str(), score(rating))
                })
                .collect();
            let current = engine
                .evaluate(&friend("gus", &ratings), &traits)
                .score
                .expect("not disqualified");

            if let Some(previous) = previous {
                if varied.weight > 0 {
                    assert!(current >= previous, "{} decreased at {value}", varied.id);
                } else {
                    assert!(current <= previous, "{} increased at {value}", varied.id);
                }
            }
            previous = Some(current);
        }
    }
}

#[test]
fn negative_weights_enter_the_score_at_face_value() {
    let traits = vec![weighted("kind", 7), weighted("rude", -3), weighted("cruel", -7)];
    let engine = engine();

    let mildly_rude = engine.evaluate(&friend("ida", &[("rude", score(1))]), &traits);
    let value = mildly_rude.score.expect("scored");
    assert!((value - (-3.0 / 35.0 * 100.0)).abs() < 1e-9, "{value}");
    assert_eq!(mildly_rude.category, Category::Draining);
    assert_eq!(mildly_rude.harm, -3);

    let never_rude = engine.evaluate(
        &friend("jo", &[("kind", score(2)), ("rude", score(-5))]),
        &traits,
    );
    let value = never_rude.score.expect("scored");
    assert!((value - (29.0 / 35.0 * 100.0)).abs() < 1e-9, "{value}");
    assert_eq!(never_rude.category, Category::Thriving);
    let rude = never_rude
        .contributions
        .iter()
        .find(|item| item.trait_id == TraitId::from("rude"))
        .expect("rude contribution recorded");
    assert_eq!(rude.impact, 15);
}

#[test]
fn unrated_harmful_traits_leave_the_score_unchanged() {
    let subject = friend("kit", &[("kind", score(3)), ("rude", score(2))]);
    let small = vec![weighted("kind", 7), weighted("rude", -3)];
    let mut large = small.clone();
    large.push(weighted("cruel", -7));
    large.push(weighted("moody", -5));

    let engine = engine();
    let before = engine.evaluate(&subject, &small);
    let after = engine.evaluate(&subject, &large);

    assert_eq!(before.score, after.score);
    assert_eq!(before.category, after.category);
}

#[test]
fn weights_outside_the_impact_scale_are_clamped() {
    let traits = vec![weighted("huge", i32::MAX), weighted("abyss", i32::MIN)];
    let engine = engine();

    let adored = engine.evaluate(&friend("lin", &[("huge", score(5))]), &traits);
    assert_eq!(adored.score, Some(100.0));
    assert_eq!(adored.category, Category::Thriving);
    assert_eq!(adored.contributions[0].weight, 7);

    let feared = engine.evaluate(&friend("max", &[("abyss", score(5))]), &traits);
    assert_eq!(feared.score, Some(-100.0));
    assert_eq!(feared.harm, -35);
    assert_eq!(feared.category, Category::Toxic);
}

#[test]
fn ratings_for_unknown_traits_are_ignored() {
    let traits = vec![weighted("kind", 7)];
    let subject = friend("kim", &[("kind", score(5)), ("deleted", score(-5))]);

    let result = engine().evaluate(&subject, &traits);

    assert_eq!(result.score, Some(100.0));
    assert_eq!(result.contributions.len(), 1);
}

#[test]
fn out_of_range_ratings_are_clamped_defensively() {
    let traits = vec![weighted("kind", 7)];
    let engine = engine();

    let high = engine.evaluate(&friend("lu", &[("kind", score(50))]), &traits);
    let low = engine.evaluate(&friend("mo", &[("kind", score(-50))]), &traits);

    assert_eq!(high.score, Some(100.0));
    assert_eq!(low.score, Some(-100.0));
}

#[test]
fn mismatched_rating_kinds_are_ignored() {
    let traits = vec![weighted("kind", 7), no_go("lies")];
    let subject = friend("ned", &[("kind", flag(true)), ("lies", score(5))]);

    let result = engine().evaluate(&subject, &traits);

    assert_eq!(result.score, Some(0.0));
    assert_ne!(result.category, Category::Disqualified);
}

#[test]
fn band_edges_follow_each_policy() {
    for policy in policy_sets() {
        assert_eq!(policy.band_for(100.0), Category::Thriving);
        assert_eq!(policy.band_for(policy.thriving_min), Category::Thriving);
        assert_eq!(policy.band_for(policy.thriving_min - 0.01), Category::Good);
        assert_eq!(policy.band_for(policy.good_min), Category::Good);
        assert_eq!(policy.band_for(policy.good_min - 0.01), Category::Neutral);
        assert_eq!(policy.band_for(policy.neutral_min), Category::Neutral);
        assert_eq!(
            policy.band_for(policy.neutral_min - 0.01),
            Category::Negligible
        );
        assert_eq!(
            policy.band_for(policy.draining_max + 0.01),
            Category::Negligible
        );
        assert_eq!(policy.band_for(policy.draining_max), Category::Draining);
        assert_eq!(policy.band_for(-100.0), Category::Draining);
    }
}

#[test]
fn bands_are_contiguous_and_monotonic() {
    for policy in policy_sets() {
        let mut previous = band_rank(policy.band_for(-100.0));
        for step in 0..=400 {
            let percentage = -100.0 + step as f64 * 0.5;
            let rank = band_rank(policy.band_for(percentage));
            assert!(rank >= previous, "band dropped at {percentage}");
            assert!(rank - previous <= 1, "band skipped at {percentage}");
            previous = rank;
        }
        assert_eq!(previous, band_rank(Category::Thriving));
    }
}

#[test]
fn display_percentage_rounds_and_clamps() {
    let traits = vec![weighted("kind", 7), weighted("funny", 3)];
    let engine = engine();

    let partial = engine.evaluate(&friend("ola", &[("kind", score(4))]), &traits);
    let negative = engine.evaluate(&friend("pia", &[("funny", score(-1))]), &traits);

    let partial_score = partial.score.expect("scored");
    assert!((partial_score - 56.0).abs() < 1e-9);
    assert_eq!(partial.display_percentage, 56);
    assert_eq!(negative.category, Category::Draining);
    assert_eq!(negative.display_percentage, 0);
    assert_eq!(negative.tone, "orange");
    assert_eq!(partial.label, "Good");
}

#[test]
fn policy_validation_rejects_inconsistent_bands() {
    assert!(ScoringPolicy::default().validate().is_ok());

    let overlapping = ScoringPolicy {
        good_min: 60.0,
        ..ScoringPolicy::default()
    };
    assert_eq!(
        overlapping.validate(),
        Err(PolicyError::BandsNotDescending {
            upper: "thriving_min",
            lower: "good_min",
        })
    );

    let not_a_number = ScoringPolicy {
        neutral_min: f64::NAN,
        ..ScoringPolicy::default()
    };
    assert_eq!(
        not_a_number.validate(),
        Err(PolicyError::NonFinite("neutral_min"))
    );

    let unreachable = ScoringPolicy {
        thriving_min: 120.0,
        ..ScoringPolicy::default()
    };
    assert_eq!(unreachable.validate(), Err(PolicyError::OutOfRange));

    let harmless = ScoringPolicy {
        toxic_threshold: 0,
        ..ScoringPolicy::default()
    };
    assert_eq!(
        harmless.validate(),
        Err(PolicyError::NonNegativeToxicThreshold(0))
    );
}
