use stratmatch::{
    DeploymentConfig,
    ParseError,
    QueryContext,
    RuleRow,
    WeightTable,
    evaluate,
    parse,
    schema::{NONCLASSIC_CONTEXT, NONCLASSIC_REQUIRED, NONCLASSIC_WEIGHTS, nonclassic_rules},
};

fn ctx() -> QueryContext {
    (*NONCLASSIC_CONTEXT).clone()
}

fn weights() -> WeightTable {
    (*NONCLASSIC_WEIGHTS).clone()
}

fn strategies(rows: &[RuleRow]) -> Vec<String> {
    evaluate(rows, &ctx(), &weights(), &NONCLASSIC_REQUIRED)
        .matches
        .into_iter()
        .map(|m| m.strategy)
        .collect()
}

#[test]
fn full_rule_matches_with_summed_score() {
    let rows = vec![RuleRow::new(
        "Brand:Brand 1, Sport:Basketball, Cohort:Cohort A, Player or Team:S Curry, Incident:Points, TimeBased:150, Competition:NBA",
        "full",
    )];

    let eval = evaluate(&rows, &ctx(), &weights(), &NONCLASSIC_REQUIRED);

    assert_eq!(eval.match_count(), 1);
    assert_eq!(eval.matches[0].strategy, "full");
    assert_eq!(eval.matches[0].score, 69);
}

#[test]
fn differing_value_excludes_rule() {
    let rows = vec![RuleRow::new(
        "Brand:Brand 1, Sport:Basketball, TimeBased:Q3, Player or Team:J Brown, Incident:Points",
        "strategy_nonclassic_005",
    )];

    assert!(strategies(&rows).is_empty());
}

#[test]
fn rule_without_brand_is_excluded_even_if_it_would_score_highest() {
    let rows = vec![
        RuleRow::new("Sport:Basketball, Cohort:Cohort A, TimeBased:150", "no_brand"),
        RuleRow::new("Sport:Basketball", "sport_only"),
        RuleRow::new("Brand:Brand 1, Sport:Basketball", "generic"),
    ];

    assert_eq!(strategies(&rows), ["generic"]);
}

#[test]
fn equal_scores_keep_rule_table_order() {
    // 1 + 1 + 10 + 30 = 42, reached through two different attribute sets
    let rows = vec![
        RuleRow::new("Brand:Brand 1, Sport:Basketball", "low"),
        RuleRow::new(
            "Brand:Brand 1, Sport:Basketball, Player or Team:S Curry, Cohort:Cohort A",
            "a",
        ),
        RuleRow::new(
            "Brand:Brand 1, Sport:Basketball, Competition:NBA, Incident:Points, TimeBased:150, Competition:NBA, Incident:Points, Sport:Basketball",
            "dup",
        ),
        RuleRow::new(
            "Cohort:Cohort A, Player or Team:S Curry, Sport:Basketball, Brand:Brand 1",
            "b",
        ),
    ];

    let eval = evaluate(&rows, &ctx(), &weights(), &NONCLASSIC_REQUIRED);
    let ranked: Vec<(&str, u64)> = eval
        .matches
        .iter()
        .map(|m| (m.strategy.as_str(), m.score))
        .collect();

    assert_eq!(ranked, [("a", 42), ("dup", 42), ("b", 42), ("low", 2)]);
}

#[test]
fn unknown_attribute_still_matches_with_zero_weight() {
    let rows = vec![RuleRow::new("Brand:Brand 1, Sport:Basketball, Venue:Home", "venue")];
    let context = ctx().with("Venue", "Home");

    let eval = evaluate(&rows, &context, &weights(), &NONCLASSIC_REQUIRED);

    assert_eq!(eval.matches[0].score, 2);
}

#[test]
fn malformed_rows_do_not_stop_evaluation() {
    let rows = vec![
        RuleRow::new("Brand:Brand 1, Basketball", "bad"),
        RuleRow::new("Brand:Brand 1, Sport:Basketball, Cohort:Cohort A", "good"),
        RuleRow {
            permutation: None,
            strategy: Some("no_perm".into()),
        },
        RuleRow::new("Brand:Brand 1, :Basketball", "empty_attr"),
    ];

    let eval = evaluate(&rows, &ctx(), &weights(), &NONCLASSIC_REQUIRED);

    assert_eq!(eval.match_count(), 1);
    assert_eq!(eval.matches[0].strategy, "good");
    assert_eq!(
        eval.failures.iter().map(|f| f.row).collect::<Vec<_>>(),
        [0, 3]
    );
    assert!(matches!(eval.failures[1].error, ParseError::EmptyAttribute { .. }));
}

#[test]
fn missing_comma_folds_following_token_into_value() {
    let rows = vec![RuleRow::new("Brand:Brand 1 Sport:Basketball", "no_comma")];

    let perm = parse(rows[0].permutation().unwrap()).unwrap();
    assert_eq!(perm.len(), 1);
    assert_eq!(perm.pairs[0].attribute, "Brand");
    assert_eq!(perm.pairs[0].value, "Brand 1 Sport:Basketball");

    let eval = evaluate(&rows, &ctx(), &weights(), &NONCLASSIC_REQUIRED);
    assert!(eval.matches.is_empty());
    assert!(eval.failures.is_empty());
}

#[test]
fn score_is_sum_of_pair_weights() {
    let weights = weights();
    for text in [
        "",
        "Brand:x",
        "Brand:x, Brand:y",
        "Cohort:a, Venue:b, TimeBased:c",
        "Incident:Points, Player or Team:S Curry, Incident:Points",
    ] {
        let perm = parse(text).unwrap();
        let expected: u64 = perm
            .pairs
            .iter()
            .map(|p| u64::from(weights.get(&p.attribute)))
            .sum();
        assert_eq!(perm.score(&weights), expected, "{text}");
    }
}

#[test]
fn normalized_permutation_round_trips() {
    for text in [
        "Brand:Brand 1,Sport:Basketball",
        "  TimeBased : 12:30 , , Cohort:",
        "Player or Team:S Curry, Player or Team:S Curry",
    ] {
        let perm = parse(text).unwrap();
        assert_eq!(parse(&perm.normalized()).unwrap(), perm, "{text}");
    }
}

#[test]
fn nonclassic_defaults_match_nothing() {
    let config = DeploymentConfig::nonclassic();

    let eval = config.evaluate(&nonclassic_rules());

    assert_eq!(eval.summary(), "0 rule(s) matched your query.");
    assert!(eval.failures.is_empty());
}

#[test]
fn nonclassic_with_overridden_context() {
    let mut config = DeploymentConfig::nonclassic();
    config.set_context("TimeBased=Live").unwrap();
    config.set_context("Incident=Rebounds").unwrap();
    config.validate().unwrap();

    let eval = config.evaluate(&nonclassic_rules());

    assert_eq!(eval.match_count(), 1);
    assert_eq!(eval.matches[0].strategy, "strategy_nonclassic_004");
    assert_eq!(eval.matches[0].score, 1 + 1 + 30 + 15 + 10 + 7);
    assert_eq!(
        eval.matches[0].permutation,
        "Brand:Brand 1, Sport:Basketball, Cohort:Cohort A, TimeBased:Live, Player or Team:S Curry, Incident:Rebounds"
    );
}

#[test]
fn evaluation_serializes_to_json() {
    let rows = vec![
        RuleRow::new("Brand:Brand 1, Sport:Basketball", "s1"),
        RuleRow::new("Brand", "s2"),
    ];

    let eval = evaluate(&rows, &ctx(), &weights(), &NONCLASSIC_REQUIRED);
    let json = serde_json::to_value(&eval).unwrap();

    assert_eq!(json["match_count"], 1);
    assert_eq!(json["matches"][0]["strategy"], "s1");
    assert_eq!(json["matches"][0]["score"], 2);
    assert_eq!(json["failures"][0]["row"], 1);
    assert_eq!(json["failures"][0]["error"]["kind"], "missing_separator");
    assert_eq!(json["failures"][0]["error"]["token"], "Brand");
}
