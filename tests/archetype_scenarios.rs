use squads::{
    AgeBracket, Archetype, Assignment, Deadline, Emotion, FaceRecord, Gender, NullCheckpointSink,
    Partitioner, Race, search_pass,
};

fn record(
    id: &str,
    gender: Gender,
    emotion: Emotion,
    age: AgeBracket,
    race: Race,
) -> FaceRecord {
    FaceRecord {
        id: id.to_string(),
        bbox: [0.0, 0.0, 64.0, 64.0],
        gender,
        emotion,
        age,
        race,
    }
}

// Two male and two female records across four races, with flat emotion and
// age so only the balance archetype can claim them.
fn balanced_quad(prefix: &str) -> Vec<FaceRecord> {
    vec![
        record(
            &format!("{prefix}_0"),
            Gender::Male,
            Emotion::Neutral,
            AgeBracket::YoungAdult,
            Race::Caucasian,
        ),
        record(
            &format!("{prefix}_1"),
            Gender::Male,
            Emotion::Neutral,
            AgeBracket::YoungAdult,
            Race::Mongoloid,
        ),
        record(
            &format!("{prefix}_2"),
            Gender::Female,
            Emotion::Neutral,
            AgeBracket::YoungAdult,
            Race::Negroid,
        ),
        record(
            &format!("{prefix}_3"),
            Gender::Female,
            Emotion::Neutral,
            AgeBracket::YoungAdult,
            Race::Android,
        ),
    ]
}

#[test]
fn balanced_quad_forms_exactly_one_diversity_balance_squad() {
    let roster = balanced_quad("a");
    let outcome = Partitioner::default().partition(&roster, &NullCheckpointSink);

    assert!(outcome.squads_for(Archetype::DistinctAgeEmotion).is_empty());
    assert!(outcome.squads_for(Archetype::DistinctEmotion).is_empty());

    let balance = outcome.squads_for(Archetype::DiversityBalance);
    assert_eq!(balance.len(), 1);
    assert_eq!(
        balance[0].member_ids().collect::<Vec<_>>(),
        vec!["a_0", "a_1", "a_2", "a_3"]
    );
    assert_eq!(outcome.total_squads(), 1);
}

#[test]
fn shared_age_bracket_fails_age_rule_but_passes_emotion_rule() {
    // Four distinct emotions, one shared age bracket, three races, and a
    // 3/1 gender split so the balance pass cannot claim them either.
    let roster = vec![
        record(
            "b_0",
            Gender::Male,
            Emotion::Neutral,
            AgeBracket::Teenager,
            Race::Caucasian,
        ),
        record(
            "b_1",
            Gender::Male,
            Emotion::Happiness,
            AgeBracket::Teenager,
            Race::Mongoloid,
        ),
        record(
            "b_2",
            Gender::Male,
            Emotion::Anger,
            AgeBracket::Teenager,
            Race::Negroid,
        ),
        record(
            "b_3",
            Gender::Female,
            Emotion::Surprise,
            AgeBracket::Teenager,
            Race::Negroid,
        ),
    ];
    let outcome = Partitioner::default().partition(&roster, &NullCheckpointSink);

    assert!(outcome.squads_for(Archetype::DistinctAgeEmotion).is_empty());
    assert!(outcome.squads_for(Archetype::DiversityBalance).is_empty());

    let emotion = outcome.squads_for(Archetype::DistinctEmotion);
    assert_eq!(emotion.len(), 1);
    assert_eq!(
        emotion[0].member_ids().collect::<Vec<_>>(),
        vec!["b_0", "b_1", "b_2", "b_3"]
    );
}

#[test]
fn lopsided_gender_split_never_forms_a_balance_squad() {
    let roster = vec![
        record(
            "c_0",
            Gender::Male,
            Emotion::Neutral,
            AgeBracket::Kid,
            Race::Caucasian,
        ),
        record(
            "c_1",
            Gender::Male,
            Emotion::Anger,
            AgeBracket::Baby,
            Race::Mongoloid,
        ),
        record(
            "c_2",
            Gender::Male,
            Emotion::Fear,
            AgeBracket::Senior,
            Race::Negroid,
        ),
        record(
            "c_3",
            Gender::Female,
            Emotion::Sadness,
            AgeBracket::Teenager,
            Race::Android,
        ),
    ];
    let mut assignment = Assignment::default();
    let squads = search_pass(
        &roster,
        Archetype::DiversityBalance,
        &mut assignment,
        Deadline::unbounded(),
        &NullCheckpointSink,
    );
    assert!(squads.is_empty());
    assert!(assignment.is_empty());
}

#[test]
fn two_disjoint_balanced_quads_are_both_emitted_in_index_order() {
    let mut roster = balanced_quad("d");
    roster.extend(balanced_quad("e"));

    let mut assignment = Assignment::default();
    let squads = search_pass(
        &roster,
        Archetype::DiversityBalance,
        &mut assignment,
        Deadline::unbounded(),
        &NullCheckpointSink,
    );

    assert_eq!(squads.len(), 2);
    assert_eq!(
        squads[0].member_ids().collect::<Vec<_>>(),
        vec!["d_0", "d_1", "d_2", "d_3"]
    );
    assert_eq!(
        squads[1].member_ids().collect::<Vec<_>>(),
        vec!["e_0", "e_1", "e_2", "e_3"]
    );

    let first: Vec<_> = squads[0].member_ids().collect();
    assert!(squads[1].member_ids().all(|id| !first.contains(&id)));
}

#[test]
fn records_claimed_before_a_pass_are_never_reused() {
    let roster = balanced_quad("f");
    let mut assignment = Assignment::default();
    assignment.claim("f_0".to_string(), Archetype::DistinctEmotion);

    let squads = search_pass(
        &roster,
        Archetype::DiversityBalance,
        &mut assignment,
        Deadline::unbounded(),
        &NullCheckpointSink,
    );

    assert!(squads.is_empty());
    assert_eq!(assignment.len(), 1);
    assert_eq!(
        assignment.archetype_for("f_0"),
        Some(Archetype::DistinctEmotion)
    );
}
