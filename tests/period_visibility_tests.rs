use approx::assert_relative_eq;
use deep_timeline::core::{
    DOMAIN_SPAN_YEARS, HierarchyConfig, Period, PeriodCatalog, RenderablePeriod,
    compute_renderable,
};
use smallvec::smallvec;

fn geological() -> (PeriodCatalog, HierarchyConfig) {
    let hierarchy = HierarchyConfig::default();
    let catalog = PeriodCatalog::geological(&hierarchy).expect("catalog");
    (catalog, hierarchy)
}

fn visible_levels(renderable: &[RenderablePeriod<'_>]) -> Vec<u8> {
    let mut levels: Vec<u8> = renderable
        .iter()
        .filter(|entry| entry.visible)
        .map(|entry| entry.period.level)
        .collect();
    levels.sort_unstable();
    levels.dedup();
    levels
}

fn height_of_level(renderable: &[RenderablePeriod<'_>], level: u8) -> f64 {
    renderable
        .iter()
        .find(|entry| entry.period.level == level)
        .map(|entry| entry.relative_height)
        .expect("level present in catalog")
}

#[test]
fn default_zoom_shows_only_root_levels() {
    let (catalog, hierarchy) = geological();
    let renderable = compute_renderable(1.0, &catalog, &hierarchy);
    assert_eq!(renderable.len(), catalog.len());
    assert_eq!(visible_levels(&renderable), vec![0, 1]);
    assert!(
        renderable
            .iter()
            .filter(|entry| entry.period.level >= 5)
            .all(|entry| !entry.visible && entry.opacity == 0.0)
    );
}

#[test]
fn root_levels_stay_drawn_when_zoomed_out_below_unit() {
    let (catalog, hierarchy) = geological();
    let root_count = catalog.periods().iter().filter(|p| p.level <= 1).count();
    for zoom in [0.2, 0.5, 0.95, 1.0] {
        let renderable = compute_renderable(zoom, &catalog, &hierarchy);
        assert_eq!(visible_levels(&renderable), vec![0, 1], "zoom {zoom}");
        let drawn = renderable
            .iter()
            .filter(|entry| entry.visible && entry.opacity == 1.0)
            .count();
        assert_eq!(drawn, root_count, "zoom {zoom}");
        assert_relative_eq!(height_of_level(&renderable, 0), 96.0);
        assert_relative_eq!(height_of_level(&renderable, 1), 64.0);
    }
}

#[test]
fn all_seven_levels_follow_step_formula_when_fully_zoomed() {
    let (catalog, hierarchy) = geological();
    let zoom = 1.0e6;
    assert!((DOMAIN_SPAN_YEARS as f64) / zoom < 20_000.0);

    let renderable = compute_renderable(zoom, &catalog, &hierarchy);
    assert_eq!(visible_levels(&renderable), vec![0, 1, 2, 3, 4, 5, 6]);

    let base = hierarchy.base_height;
    let big = hierarchy.big_expansion_factor;
    let small = hierarchy.small_expansion_factor;
    assert_relative_eq!(height_of_level(&renderable, 6), base);
    assert_relative_eq!(height_of_level(&renderable, 5), base * (1.0 + big));
    assert_relative_eq!(height_of_level(&renderable, 4), base * (1.0 + big + small));
    assert_relative_eq!(
        height_of_level(&renderable, 0),
        base * (1.0 + big + 5.0 * small)
    );
}

#[test]
fn root_overrides_jump_once_third_level_unlocks() {
    let (catalog, hierarchy) = geological();

    let before = compute_renderable(2.0, &catalog, &hierarchy);
    assert_eq!(visible_levels(&before), vec![0, 1]);
    assert_relative_eq!(height_of_level(&before, 0), 96.0);
    assert_relative_eq!(height_of_level(&before, 1), 64.0);

    let after = compute_renderable(3.0, &catalog, &hierarchy);
    assert_eq!(visible_levels(&after), vec![0, 1, 2]);
    assert_relative_eq!(height_of_level(&after, 0), 160.0);
    assert_relative_eq!(height_of_level(&after, 1), 128.0);
    assert_relative_eq!(height_of_level(&after, 2), 64.0);
}

#[test]
fn override_constants_are_configurable() {
    let hierarchy = HierarchyConfig {
        root_override_heights: smallvec![10.0, 20.0],
        ..HierarchyConfig::default()
    };
    let catalog = PeriodCatalog::geological(&hierarchy).expect("catalog");
    let renderable = compute_renderable(1.0, &catalog, &hierarchy);
    assert_relative_eq!(height_of_level(&renderable, 0), 10.0);
    assert_relative_eq!(height_of_level(&renderable, 1), 20.0);
}

#[test]
fn horizontal_span_is_linear_in_zoom() {
    let hierarchy = HierarchyConfig::default();
    let catalog = PeriodCatalog::new(
        vec![Period::new("Phanerozoic", 541_000_000, 0, "green", 0)],
        &hierarchy,
    )
    .expect("catalog");

    let unit = compute_renderable(1.0, &catalog, &hierarchy);
    let zoomed = compute_renderable(8.0, &catalog, &hierarchy);
    assert_relative_eq!(unit[0].span.right_percent, 0.0);
    assert_relative_eq!(
        unit[0].span.width_percent,
        541_000_000.0 / DOMAIN_SPAN_YEARS as f64 * 100.0
    );
    assert_relative_eq!(
        zoomed[0].span.width_percent,
        unit[0].span.width_percent * 8.0,
        max_relative = 1e-12
    );
}

#[test]
fn invalid_zoom_uses_minimum_zoom_layout() {
    let (catalog, hierarchy) = geological();
    assert_eq!(
        compute_renderable(-4.0, &catalog, &hierarchy),
        compute_renderable(0.2, &catalog, &hierarchy)
    );
}

#[test]
fn inconsistent_catalog_fails_at_load() {
    let hierarchy = HierarchyConfig::default();
    let result = PeriodCatalog::new(
        vec![Period::new("Future", 0, 1_000, "red", 1)],
        &hierarchy,
    );
    assert!(result.is_err());

    let result = PeriodCatalog::new(
        vec![Period::new("Before time", DOMAIN_SPAN_YEARS + 1, 0, "red", 0)],
        &hierarchy,
    );
    assert!(result.is_err());
}
