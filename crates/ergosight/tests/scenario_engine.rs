use chrono::{TimeZone, Utc};
use ergosight::workflows::catalog::{AnthroProfile, RatingBand};
use ergosight::workflows::scenario::{
    profile_bias, DesignParameters, ParameterKey, ParameterTable, ScenarioEngine,
    ScenarioSession, MAX_INSIGHTS, NO_INSIGHTS_HINT,
};

fn door_and_sill_proposal() -> DesignParameters {
    DesignParameters::baseline()
        .with(ParameterKey::SillHeight, 555.0)
        .with(ParameterKey::DoorWidth, 730.0)
}

#[test]
fn lowering_sill_and_widening_door_lifts_p95_rating() {
    let engine = ScenarioEngine::standard();
    let current = DesignParameters::baseline();
    let proposed = door_and_sill_proposal();

    let rating = engine.predict_rating(7.2, &current, &proposed, AnthroProfile::P95Male);
    assert!((rating - 8.15).abs() < 1e-9, "unexpected rating {rating}");

    let insights = engine.rank_insights(&current, &proposed);
    assert_eq!(insights.len(), 2);

    assert_eq!(insights[0].key, ParameterKey::SillHeight);
    assert_eq!(insights[0].change, "-25.0 mm");
    assert_eq!(insights[0].impact, "+0.5");

    assert_eq!(insights[1].key, ParameterKey::DoorWidth);
    assert_eq!(insights[1].change, "+30.0 mm");
    // 30 * 0.015 lands just under 0.45 in binary floating point.
    assert_eq!(insights[1].impact, "+0.4");
}

#[test]
fn unchanged_parameters_reproduce_baseline_plus_bias() {
    let engine = ScenarioEngine::standard();
    let params = DesignParameters::baseline();

    for profile in AnthroProfile::ordered() {
        let rating = engine.predict_rating(7.2, &params, &params, profile);
        assert_eq!(rating, 7.2 + profile_bias(profile), "profile {profile}");
    }

    assert!(engine.rank_insights(&params, &params).is_empty());
}

#[test]
fn single_parameter_moves_rating_by_delta_times_weight() {
    let engine = ScenarioEngine::standard();
    let current = DesignParameters::baseline();

    // positive weight: +30 mm door width at 0.015 per mm
    let wider = current.with(ParameterKey::DoorWidth, 730.0);
    let rating = engine.predict_rating(5.0, &current, &wider, AnthroProfile::P50Male);
    assert!((rating - 5.0 - 0.45).abs() < 1e-9, "door width moved rating to {rating}");

    // negative weight: -10 deg ingress sweep at -0.018 per deg
    let tighter = current.with(ParameterKey::IngressSweep, 52.0);
    let rating = engine.predict_rating(5.0, &current, &tighter, AnthroProfile::P50Male);
    assert!((rating - 5.0 - 0.18).abs() < 1e-9, "ingress sweep moved rating to {rating}");

    let table = ParameterTable::standard();
    for config in table.configs() {
        let moved = current.with(config.key, config.min);
        let delta = config.min - current.get(config.key);
        let rating = engine.predict_rating(5.0, &current, &moved, AnthroProfile::P50Male);
        assert!(
            (rating - 5.0 - delta * config.weight).abs() < 1e-9,
            "{} moved rating to {rating}",
            config.key
        );
    }
}

#[test]
fn rating_moves_with_weight_sign() {
    let engine = ScenarioEngine::standard();
    let current = DesignParameters::baseline();
    let table = ParameterTable::standard();

    for config in table.configs() {
        let steps = 10;
        let span = config.max - config.min;
        let ratings: Vec<f64> = (0..=steps)
            .map(|step| {
                let value = config.min + span * step as f64 / steps as f64;
                let proposed = current.with(config.key, value);
                engine.predict_rating(5.0, &current, &proposed, AnthroProfile::P50Male)
            })
            .collect();

        for pair in ratings.windows(2) {
            if config.weight > 0.0 {
                assert!(pair[1] >= pair[0], "{} should not decrease", config.key);
            } else {
                assert!(pair[1] <= pair[0], "{} should not increase", config.key);
            }
        }
    }
}

#[test]
fn rating_stays_on_scale_for_extreme_proposals() {
    let engine = ScenarioEngine::standard();
    let current = DesignParameters::baseline();
    let table = ParameterTable::standard();

    let mut best = current;
    let mut worst = current;
    for config in table.configs() {
        let (high, low) = if config.weight > 0.0 {
            (config.max, config.min)
        } else {
            (config.min, config.max)
        };
        best.set(config.key, high);
        worst.set(config.key, low);
    }

    assert_eq!(
        engine.predict_rating(9.5, &current, &best, AnthroProfile::P5Female),
        10.0
    );
    assert_eq!(
        engine.predict_rating(2.0, &current, &worst, AnthroProfile::Senior),
        1.0
    );
}

#[test]
fn insights_are_capped_and_sorted_by_magnitude() {
    let engine = ScenarioEngine::standard();
    let current = DesignParameters::baseline();
    let proposed = current
        .with(ParameterKey::SillHeight, 520.0) // +1.2
        .with(ParameterKey::DoorWidth, 760.0) // +0.9
        .with(ParameterKey::DoorHeight, 1200.0) // -0.6
        .with(ParameterKey::HipClearance, 100.0) // +0.6
        .with(ParameterKey::IngressSweep, 75.0) // -0.2
        .with(ParameterKey::SeatHeight, 620.0); // +0.04 -> rounds away

    let insights = engine.rank_insights(&current, &proposed);
    assert_eq!(insights.len(), MAX_INSIGHTS);

    let keys: Vec<_> = insights.iter().map(|insight| insight.key).collect();
    assert_eq!(
        keys,
        vec![
            ParameterKey::SillHeight,
            ParameterKey::DoorWidth,
            ParameterKey::DoorHeight,
            ParameterKey::HipClearance,
        ]
    );
    assert_eq!(insights[2].impact, "-0.6");
    assert_eq!(insights[3].impact, "+0.6");
}

#[test]
fn equal_impacts_keep_declaration_order() {
    let engine = ScenarioEngine::standard();
    let current = DesignParameters::baseline();
    let proposed = current
        .with(ParameterKey::DoorWidth, 720.0) // +0.3
        .with(ParameterKey::SillHeight, 565.0); // +0.3

    let insights = engine.rank_insights(&current, &proposed);
    let keys: Vec<_> = insights.iter().map(|insight| insight.key).collect();
    assert_eq!(keys, vec![ParameterKey::SillHeight, ParameterKey::DoorWidth]);
}

#[test]
fn session_clamps_edits_and_reports_band() {
    let mut session = ScenarioSession::standard(7.2, AnthroProfile::P95Male);

    let evaluation = session.evaluate();
    assert_eq!(evaluation.insights.len(), 0);
    assert_eq!(evaluation.insight_hint, Some(NO_INSIGHTS_HINT));
    assert_eq!(evaluation.band, RatingBand::Fair);

    assert_eq!(session.set_parameter(ParameterKey::DoorWidth, 9_000.0), 780.0);
    assert_eq!(session.set_parameter(ParameterKey::SillHeight, 555.0), 555.0);

    let evaluation = session.evaluate();
    assert!(evaluation.predicted_rating > evaluation.current_rating);
    assert!((evaluation.delta - (evaluation.predicted_rating - evaluation.current_rating)).abs() < 1e-12);
    assert_eq!(evaluation.band, RatingBand::Good);
    assert!(evaluation.insight_hint.is_none());

    let snapshot = session.snapshot(
        Utc.with_ymd_and_hms(2025, 11, 21, 10, 0, 0)
            .single()
            .expect("valid timestamp"),
    );
    assert_eq!(snapshot.name, "Scenario_2025-11-21");
    assert_eq!(snapshot.parameters.door_width, 780.0);
}

#[test]
fn switching_profile_only_shifts_by_bias() {
    let mut session = ScenarioSession::standard(7.2, AnthroProfile::P95Male);
    session.propose(&door_and_sill_proposal());
    let p95 = session.predicted_rating();

    session.set_profile(AnthroProfile::Senior);
    let senior = session.predicted_rating();
    assert!((p95 - senior - 0.2).abs() < 1e-9);
}
