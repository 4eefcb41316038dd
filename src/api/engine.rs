use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    DomainProjection, HierarchyConfig, PeriodCatalog, RenderablePeriod, ScaleSequence, Tick,
    Viewport, compute_renderable, viewport_far_edge_years,
};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{ZoomDirection, ZoomState};
use crate::render::{Renderer, TimelineFrame};

use super::engine_snapshot::{PeriodSnapshot, TimelineSnapshot};
use super::tick_cache::{TickCache, TickCacheStats};
use super::TimelineEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the zoom state, the period catalog and the
/// renderer. Ticks and period layout are recomputed from the zoom scalar
/// whenever it changes; nothing else is carried between frames.
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    zoom: ZoomState,
    sequence: &'static ScaleSequence,
    hierarchy: HierarchyConfig,
    catalog: PeriodCatalog,
    tick_cache: TickCache,
}

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine over an already loaded catalog.
    pub fn new(
        renderer: R,
        config: TimelineEngineConfig,
        catalog: PeriodCatalog,
    ) -> TimelineResult<Self> {
        config.validate()?;
        catalog.validate_against(&config.hierarchy)?;

        let zoom = ZoomState::new(config.zoom_limits, config.initial_zoom)?;
        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            zoom,
            sequence: ScaleSequence::standard(),
            hierarchy: config.hierarchy,
            catalog,
            tick_cache: TickCache::default(),
        };
        engine.refresh_ticks();
        debug!(
            zoom = engine.zoom.zoom(),
            period_count = engine.catalog.len(),
            "timeline engine initialized"
        );
        Ok(engine)
    }

    /// Creates an engine over the bundled geological catalog.
    pub fn with_geological_catalog(
        renderer: R,
        config: TimelineEngineConfig,
    ) -> TimelineResult<Self> {
        let catalog = PeriodCatalog::geological(&config.hierarchy)?;
        Self::new(renderer, config, catalog)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.zoom()
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn catalog(&self) -> &PeriodCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn hierarchy(&self) -> &HierarchyConfig {
        &self.hierarchy
    }

    #[must_use]
    pub fn projection(&self) -> DomainProjection {
        DomainProjection::new(self.zoom.zoom())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(ZoomDirection::In)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(ZoomDirection::Out)
    }

    pub fn step_zoom(&mut self, direction: ZoomDirection) -> bool {
        let changed = self.zoom.step(direction);
        self.after_zoom_update(changed)
    }

    /// Applies one wheel event; negative `delta_y` zooms in.
    pub fn apply_wheel_delta(&mut self, delta_y: f64) -> bool {
        let changed = self.zoom.apply_wheel_delta(delta_y);
        self.after_zoom_update(changed)
    }

    pub fn apply_pinch(&mut self, scale_factor: f64) -> bool {
        let changed = self.zoom.apply_pinch(scale_factor);
        self.after_zoom_update(changed)
    }

    /// Sets zoom directly; invalid input recovers to the minimum zoom.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let changed = self.zoom.set_zoom(zoom);
        self.after_zoom_update(changed)
    }

    /// Ticks for the current zoom, ascending by instant.
    #[must_use]
    pub fn current_ticks(&self) -> &[Tick] {
        self.tick_cache.ticks()
    }

    /// One renderable entry per catalog period, in catalog order.
    #[must_use]
    pub fn current_renderable_periods(&self) -> Vec<RenderablePeriod<'_>> {
        compute_renderable(self.zoom.zoom(), &self.catalog, &self.hierarchy)
    }

    #[must_use]
    pub fn visible_level_heights(&self) -> IndexMap<u8, f64> {
        self.hierarchy.visible_level_heights(self.zoom.zoom())
    }

    #[must_use]
    pub fn tick_cache_stats(&self) -> TickCacheStats {
        self.tick_cache.stats()
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let zoom = self.zoom.zoom();
        let periods = compute_renderable(zoom, &self.catalog, &self.hierarchy);
        let frame = TimelineFrame::new(
            self.viewport,
            DomainProjection::new(zoom),
            self.tick_cache.ticks(),
            periods,
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        let zoom = self.zoom.zoom();
        let periods = self
            .current_renderable_periods()
            .into_iter()
            .map(|renderable| PeriodSnapshot {
                name: renderable.period.name.clone(),
                level: renderable.period.level,
                visible: renderable.visible,
                relative_height: renderable.relative_height,
                span: renderable.span,
                opacity: renderable.opacity,
                displayed: renderable.displayed,
            })
            .collect();

        TimelineSnapshot {
            viewport: self.viewport,
            zoom,
            viewport_far_edge_years: viewport_far_edge_years(zoom),
            active_scale_sets: self.sequence.active_sets(zoom).copied().collect(),
            ticks: self.tick_cache.ticks().to_vec(),
            visible_level_heights: self.visible_level_heights(),
            periods,
            tick_cache: self.tick_cache.stats(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to serialize snapshot: {e}")))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn after_zoom_update(&mut self, changed: bool) -> bool {
        if changed {
            self.refresh_ticks();
        }
        changed
    }

    fn refresh_ticks(&mut self) {
        let active_mask = self.sequence.active_mask(self.zoom.zoom());
        self.tick_cache.refresh(active_mask, self.sequence);
    }
}
