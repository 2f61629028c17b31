use political_compass::questions::QuestionBank;
use political_compass::scoring::{
    aggregate, analyze, analyze_scores, AnswerSheet, AxisScores, CategoryTally, Focus,
    FocusTallies, Ideology, LikertLevel, AXIS_BOUND,
};
use political_compass::submission::Submission;
use std::collections::HashSet;
use std::path::Path;
use strum::IntoEnumIterator;

fn default_bank() -> QuestionBank {
    QuestionBank::load(Path::new(env!("CARGO_MANIFEST_DIR")).join("questions.default.ron"))
        .expect("default question bank should load")
}

fn grid() -> impl Iterator<Item = AxisScores> {
    (-12..=12)
        .flat_map(|e| (-12..=12).map(move |s| AxisScores::new(f64::from(e), f64::from(s))))
        .chain([
            AxisScores::new(7.0, 7.0),
            AxisScores::new(-7.0, -7.0),
            AxisScores::new(6.0, -6.0),
            AxisScores::new(-4.5, -2.5),
            AxisScores::new(2.9, 5.1),
            AxisScores::new(0.0, -0.1),
        ])
}

fn sample_tallies() -> Vec<FocusTallies> {
    let strong = CategoryTally {
        strongly_agree: 2,
        agree: 2,
        ..Default::default()
    };
    vec![
        FocusTallies::new(),
        Focus::iter().fold(FocusTallies::new(), |acc, f| acc.with_tally(f, strong)),
    ]
}

#[test]
fn test_far_left_libertarian() {
    let profile = analyze_scores(&AxisScores::new(-8.0, -8.0));
    assert_eq!(profile.primary_ideology, Ideology::Falgsc);
    let secondary = &profile.secondary_ideologies;
    assert!(secondary.contains(&Ideology::AccelerationistTendencies));
    assert!(secondary.contains(&Ideology::PostLiberal));
    assert!(secondary.contains(&Ideology::AnarchistSympathies));
    assert!(!secondary.contains(&Ideology::Centrist));
}

#[test]
fn test_origin_is_conservative_centrist() {
    let profile = analyze_scores(&AxisScores::new(0.0, 0.0));
    assert_eq!(profile.primary_ideology, Ideology::Conservative);
    assert_eq!(
        profile.secondary_ideologies.iter().copied().collect::<Vec<_>>(),
        vec![Ideology::Centrist]
    );
}

#[test]
fn test_right_libertarian_below_extreme() {
    let profile = analyze_scores(&AxisScores::new(6.0, -6.0));
    assert_eq!(profile.primary_ideology, Ideology::ClassicalLiberal);
    assert!(profile
        .secondary_ideologies
        .contains(&Ideology::AccelerationistTendencies));
    assert!(profile.secondary_ideologies.contains(&Ideology::PostLiberal));
}

#[test]
fn test_falgsc_tally_nominates_secondary() {
    let tallies: FocusTallies =
        serde_json::from_str(r#"{"falgscFocus": {"stronglyAgree": 2, "agree": 0}}"#).unwrap();
    let profile = analyze(&AxisScores::new(1.0, 1.0), &tallies);
    assert_eq!(profile.primary_ideology, Ideology::Conservative);
    assert!(profile.secondary_ideologies.contains(&Ideology::Falgsc));
}

#[test]
fn test_empty_answers_score_zero() {
    let bank = default_bank();
    let aggregation = aggregate(&AnswerSheet::new(), &bank, None);
    let scores = aggregation.scores();
    assert_eq!((scores.economic, scores.social), (0.0, 0.0));
    assert!(aggregation.tallies.is_empty());

    let classification = Submission::new(AnswerSheet::new()).classify(&bank);
    assert_eq!(classification.profile.primary_ideology, Ideology::Conservative);
}

#[test]
fn test_profile_properties_hold_across_grid() {
    for tallies in sample_tallies() {
        for scores in grid() {
            let profile = analyze(&scores, &tallies);

            assert!(scores.economic.abs() <= AXIS_BOUND);
            assert!(scores.social.abs() <= AXIS_BOUND);
            assert!(profile.primary_ideology.is_primary(), "{scores:?}");
            assert!(
                !profile
                    .secondary_ideologies
                    .contains(&profile.primary_ideology),
                "{scores:?}"
            );

            let unique: HashSet<_> = profile.secondary_ideologies.iter().collect();
            assert_eq!(unique.len(), profile.secondary_ideologies.len());

            assert_eq!(profile, analyze(&scores, &tallies));
        }
    }
}

#[test]
fn test_default_bank_end_to_end() {
    let bank = default_bank();
    assert_eq!(bank.len(), 30);

    for level in 0..=4u8 {
        let answers: AnswerSheet = (0..bank.len()).map(|i| (i, level)).collect();
        let submission = Submission::from_answers(answers, &bank);
        assert!(submission.validate().is_ok());
        assert!(submission.unmatched_answers(&bank).is_empty());

        let economic = submission.economic.unwrap();
        let social = submission.social.unwrap();
        assert!(economic.abs() <= AXIS_BOUND && social.abs() <= AXIS_BOUND);

        let tallies = submission.category_tallies.clone().unwrap();
        let expected = LikertLevel::try_from(level).unwrap();
        for (focus, tally) in tallies.iter() {
            let tagged = bank
                .iter()
                .filter(|q| q.category().is_some_and(|c| focus.tracks(c)))
                .count();
            assert_eq!(tally.total() as usize, tagged, "{focus}");
            assert_eq!(tally.count(expected) as usize, tagged, "{focus}");
        }

        let first = submission.classify(&bank);
        let record = serde_json::to_string(&submission).unwrap();
        let reloaded: Submission = serde_json::from_str(&record).unwrap();
        assert_eq!(reloaded.classify(&bank), first);
    }
}

#[test]
fn test_neutral_sheet_is_centrist() {
    let bank = default_bank();
    let answers: AnswerSheet = (0..bank.len()).map(|i| (i, 2)).collect();
    let classification = Submission::from_answers(answers, &bank).classify(&bank);
    assert_eq!(classification.profile.primary_ideology, Ideology::Conservative);
    assert_eq!(
        classification
            .profile
            .secondary_ideologies
            .into_iter()
            .collect::<Vec<_>>(),
        vec![Ideology::Centrist]
    );
}
