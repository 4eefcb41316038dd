use deep_timeline::core::{
    DOMAIN_SPAN_YEARS, ScaleSequence, Tick, TickLevel, generate_ticks, generate_ticks_for_mask,
};

const BILLION: i64 = 1_000_000_000;

fn tick_at(ticks: &[Tick], instant: i64) -> &Tick {
    ticks
        .iter()
        .find(|tick| tick.instant == instant)
        .unwrap_or_else(|| panic!("missing tick at {instant}"))
}

#[test]
fn first_scale_set_inserts_fine_ticks_and_promotes_majors() {
    let sequence = ScaleSequence::standard();
    let baseline = generate_ticks_for_mask(0, sequence);
    // Only the 10B set is active between zoom 1.38 and 2.76.
    assert_eq!(sequence.active_mask(2.0), 0b1);
    let ticks = generate_ticks(2.0, sequence);

    let half = BILLION / 2;
    for instant in (half..10 * BILLION).step_by(half as usize) {
        let tick = tick_at(&ticks, instant);
        if instant % BILLION != 0 {
            assert_eq!(tick.level, TickLevel::Minor, "fine tick {instant}");
            assert!(!tick.label.is_empty());
        }
    }
    assert_eq!(ticks.len(), baseline.len() + 10);

    let promoted_to_mega: Vec<i64> = baseline
        .iter()
        .filter(|before| tick_at(&ticks, before.instant).level == TickLevel::Mega)
        .map(|before| before.instant)
        .collect();
    let expected_mega: Vec<i64> = baseline
        .iter()
        .filter(|before| before.level == TickLevel::Major && before.instant < 10 * BILLION)
        .map(|before| before.instant)
        .collect();
    assert_eq!(promoted_to_mega, expected_mega);
    assert_eq!(promoted_to_mega, vec![5 * BILLION]);
}

#[test]
fn minor_grid_ticks_below_threshold_become_labeled_majors() {
    let ticks = generate_ticks(2.0, ScaleSequence::standard());
    let tick = tick_at(&ticks, 3 * BILLION);
    assert_eq!(tick.level, TickLevel::Major);
    assert_eq!(tick.label, "3B");

    let above = tick_at(&ticks, 12 * BILLION);
    assert_eq!(above.level, TickLevel::Minor);
}

#[test]
fn second_scale_set_climbs_one_level_further() {
    let ticks = generate_ticks(3.0, ScaleSequence::standard());
    assert_eq!(tick_at(&ticks, 3 * BILLION).level, TickLevel::Mega);
    assert_eq!(tick_at(&ticks, 5 * BILLION).level, TickLevel::Mega);

    let half_billion = tick_at(&ticks, 2_500_000_000);
    assert_eq!(half_billion.level, TickLevel::Major);
    assert_eq!(half_billion.label, "2.5B");

    let fine = tick_at(&ticks, 2_300_000_000);
    assert_eq!(fine.level, TickLevel::Minor);
    assert_eq!(fine.label, "2.3B");
}

#[test]
fn deep_zoom_reaches_single_year_ticks() {
    let ticks = generate_ticks(2.0e9, ScaleSequence::standard());
    let year = tick_at(&ticks, 1);
    assert_eq!(year.level, TickLevel::Minor);
    assert_eq!(year.label, "1");

    let five = tick_at(&ticks, 5);
    assert_eq!(five.level, TickLevel::Major);
    assert!(ticks.len() < 1_000);
}

#[test]
fn boundaries_survive_every_zoom() {
    let sequence = ScaleSequence::standard();
    for zoom in [0.2, 1.0, 2.0, 30.0, 5_000.0, 1.0e7, 2.0e9] {
        let ticks = generate_ticks(zoom, sequence);
        let today = tick_at(&ticks, 0);
        assert_eq!(today.label, "TODAY");
        assert_eq!(today.level, TickLevel::Maxi);

        let origin = tick_at(&ticks, DOMAIN_SPAN_YEARS);
        assert!(origin.dashed);
        assert_eq!(origin.level, TickLevel::Maxi);
    }
}

#[test]
fn only_the_origin_tick_is_dashed() {
    let ticks = generate_ticks(2.0e9, ScaleSequence::standard());
    let dashed: Vec<i64> = ticks
        .iter()
        .filter(|tick| tick.dashed)
        .map(|tick| tick.instant)
        .collect();
    assert_eq!(dashed, vec![DOMAIN_SPAN_YEARS]);
}

#[test]
fn custom_sequence_drives_generation() {
    let sequence =
        ScaleSequence::from_magnitudes(vec![10 * BILLION, 5 * BILLION, BILLION, BILLION / 4])
            .expect("valid sequence");
    let ticks = generate_ticks(2.0, &sequence);
    let quarter = tick_at(&ticks, BILLION / 4);
    assert_eq!(quarter.label, "250M");
    assert_eq!(quarter.level, TickLevel::Minor);
}

#[test]
fn ticks_past_the_domain_are_dropped_without_aborting_the_pass() {
    let sequence = ScaleSequence::from_magnitudes(vec![
        100 * BILLION,
        50 * BILLION,
        10 * BILLION,
        5 * BILLION,
    ])
    .expect("valid sequence");
    assert_eq!(sequence.active_mask(1.0), 0b1);

    let ticks = generate_ticks(1.0, &sequence);
    assert_eq!(ticks.len(), 15);
    assert!(
        ticks
            .iter()
            .all(|tick| (0..=DOMAIN_SPAN_YEARS).contains(&tick.instant))
    );

    let origin = ticks.last().expect("origin tick");
    assert_eq!(origin.instant, DOMAIN_SPAN_YEARS);
    assert!(origin.dashed);
    assert_eq!(origin.level, TickLevel::Maxi);

    // In-domain ticks of the same set are still promoted.
    assert_eq!(tick_at(&ticks, 5 * BILLION).level, TickLevel::Mega);
    assert_eq!(tick_at(&ticks, 10 * BILLION).level, TickLevel::Mega);
}
