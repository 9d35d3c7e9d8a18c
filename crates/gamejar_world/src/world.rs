//! World state and the tick loop thread.
//!
//! A [`World`] owns its entity registry, camera and display surface behind a
//! single lock. The loop thread holds that lock for a whole simulate+render
//! pass, and every external mutation (inserting or removing entities, moving
//! the camera, changing the display mode) takes the same lock. External
//! changes therefore land between passes, never in the middle of one.
//!
//! Each loop iteration:
//!
//! 1. Checks for a stop request.
//! 2. Asks the [`TickScheduler`] whether the next tick is due; if not, waits
//!    on the stop signal until it is.
//! 3. Simulates every entity in ascending height order with the real elapsed
//!    time.
//! 4. Renders the visible entities with the same `dt` and presents the frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use gamejar_entity::{EntityRef, EntityRegistry};
use gamejar_graphics::{DisplayMode, DisplaySurface};
use gamejar_math::Transform;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::camera::{Camera, FrameReport};
use crate::config::WorldConfig;
use crate::error::WorldError;
use crate::lifecycle::Lifecycle;
use crate::signal::StopSignal;
use crate::tick::{TickDecision, TickScheduler};

/// Everything a simulate+render pass touches.
#[derive(Debug)]
struct WorldState<S> {
    registry: EntityRegistry,
    camera: Camera,
    surface: S,
}

impl<S: DisplaySurface> WorldState<S> {
    fn simulate(&self, dt: f64) {
        for entity in &self.registry {
            entity.update(dt);
        }
    }

    fn render(&mut self, dt: f64) -> FrameReport {
        self.camera.render(&self.registry, &mut self.surface, dt)
    }
}

/// Counters updated by the loop thread.
#[derive(Debug, Default)]
struct LoopStats {
    ticks: AtomicU64,
    frames_presented: AtomicU64,
}

/// A simulated world of entities rendered through a camera.
///
/// A world is single-use: it can be started once and, once stopped, never
/// started again.
#[derive(Debug)]
pub struct World<S: DisplaySurface + 'static> {
    config: WorldConfig,
    shared: Arc<Mutex<WorldState<S>>>,
    lifecycle: Lifecycle,
    stop: Arc<StopSignal>,
    stats: Arc<LoopStats>,
    loop_thread: Option<JoinHandle<()>>,
}

impl<S: DisplaySurface + 'static> World<S> {
    /// Create a world rendering to `surface`.
    ///
    /// The camera starts at the configured view, or at a view matching the
    /// surface's resolution one to one.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] for a zero tick rate and
    /// [`WorldError::Camera`] if the initial view has a non-positive size.
    pub fn new(config: WorldConfig, surface: S) -> Result<Self, WorldError> {
        config.validate()?;
        let mut camera = match config.view {
            Some(view) => Camera::new(view)?,
            None => Camera::matching(surface.current_resolution())?,
        };
        camera.set_debug_overlay(config.debug_overlay);

        Ok(Self {
            config,
            shared: Arc::new(Mutex::new(WorldState {
                registry: EntityRegistry::new(),
                camera,
                surface,
            })),
            lifecycle: Lifecycle::Created,
            stop: Arc::new(StopSignal::new()),
            stats: Arc::new(LoopStats::default()),
            loop_thread: None,
        })
    }

    /// Returns the configuration the world was created with.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The nominal time between ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Ticks completed by the loop thread.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.stats.ticks.load(Ordering::Relaxed)
    }

    /// Frames the loop thread presented.
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.stats.frames_presented.load(Ordering::Relaxed)
    }

    /// Register an entity. Returns `false` if it is already registered.
    pub fn insert_entity(&self, entity: EntityRef) -> bool {
        self.shared.lock().registry.insert(entity)
    }

    /// Unregister an entity. Returns `false` if it was not registered.
    pub fn remove_entity(&self, entity: &EntityRef) -> bool {
        self.shared.lock().registry.remove(entity)
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.shared.lock().registry.len()
    }

    /// A snapshot of all entities in ascending height order.
    #[must_use]
    pub fn entities(&self) -> Vec<EntityRef> {
        self.shared.lock().registry.snapshot()
    }

    /// Entities whose transform intersects `region`, in ascending height order.
    #[must_use]
    pub fn intersecting(&self, region: &Transform) -> Vec<EntityRef> {
        self.shared.lock().registry.query_intersecting(region)
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut EntityRegistry) -> R) -> R {
        f(&mut self.shared.lock().registry)
    }

    /// Run `f` with exclusive access to the camera.
    pub fn with_camera<R>(&self, f: impl FnOnce(&mut Camera) -> R) -> R {
        f(&mut self.shared.lock().camera)
    }

    /// Run `f` with exclusive access to the display surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.shared.lock().surface)
    }

    /// Toggle the camera's debug overlay.
    pub fn set_debug_overlay(&self, enabled: bool) {
        self.with_camera(|camera| camera.set_debug_overlay(enabled));
    }

    /// Switch the display surface to another mode. The camera view is kept, so
    /// the same world area is stretched over the new resolution.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Surface`] if the surface does not offer `mode`.
    pub fn set_display_mode(&self, mode: DisplayMode) -> Result<(), WorldError> {
        self.with_surface(|surface| surface.set_display_mode(mode))?;
        Ok(())
    }

    /// Update every entity once, lowest height first.
    ///
    /// Entities updated later in the pass observe the already-updated
    /// transforms of those before them.
    pub fn simulate_tick(&self, dt: f64) {
        self.shared.lock().simulate(dt);
    }

    /// Render one frame through the camera.
    pub fn render_frame(&self, dt: f64) -> FrameReport {
        self.shared.lock().render(dt)
    }

    /// Run one simulate+render pass under a single lock, as the loop does.
    pub fn advance(&self, dt: f64) -> FrameReport {
        let mut state = self.shared.lock();
        state.simulate(dt);
        state.render(dt)
    }

    /// Start the tick loop on its own thread.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidState`] if the world is already running or
    /// has been stopped, and [`WorldError::Spawn`] if the thread cannot be
    /// created.
    pub fn start(&mut self) -> Result<(), WorldError> {
        if self.lifecycle != Lifecycle::Created {
            return Err(WorldError::InvalidState {
                action: "start",
                state: self.lifecycle,
            });
        }

        let shared = Arc::clone(&self.shared);
        let stop = Arc::clone(&self.stop);
        let stats = Arc::clone(&self.stats);
        let interval = self.tick_interval();

        let handle = thread::Builder::new()
            .name("gamejar-tick".to_string())
            .spawn(move || run_loop(&shared, &stop, &stats, interval))
            .map_err(WorldError::Spawn)?;

        self.loop_thread = Some(handle);
        self.lifecycle = Lifecycle::Running;
        info!(
            tick_rate = self.config.tick_rate,
            interval_ms = interval.as_millis() as u64,
            "world started"
        );
        Ok(())
    }

    /// Stop the world for good.
    ///
    /// A running loop finishes its current pass, exits, and is joined. A world
    /// that never started is retired without running. Stopping twice is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::LoopPanicked`] if the loop thread panicked. The
    /// world is stopped either way.
    pub fn stop(&mut self) -> Result<(), WorldError> {
        let previous = self.lifecycle;
        self.lifecycle = Lifecycle::Stopped;
        match previous {
            Lifecycle::Created => {
                info!("world retired before starting");
                Ok(())
            }
            Lifecycle::Stopped => Ok(()),
            Lifecycle::Running => {
                self.stop.request();
                let joined = match self.loop_thread.take() {
                    Some(handle) => handle.join().map_err(|_| WorldError::LoopPanicked),
                    None => Ok(()),
                };
                info!(
                    ticks = self.ticks(),
                    frames = self.frames_presented(),
                    "world stopped"
                );
                joined
            }
        }
    }
}

impl<S: DisplaySurface + 'static> Drop for World<S> {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Running
            && let Err(e) = self.stop()
        {
            warn!(error = %e, "tick loop did not shut down cleanly");
        }
    }
}

/// The body of the loop thread.
fn run_loop<S: DisplaySurface>(
    shared: &Mutex<WorldState<S>>,
    stop: &StopSignal,
    stats: &LoopStats,
    interval: Duration,
) {
    let mut scheduler = TickScheduler::new(interval, Instant::now());
    debug!(interval_ms = interval.as_millis() as u64, "tick loop running");

    while !stop.is_requested() {
        match scheduler.poll(Instant::now()) {
            TickDecision::Wait(remaining) => {
                stop.wait_for(remaining);
            }
            TickDecision::Tick { tick_id, elapsed } => {
                let dt = elapsed.as_secs_f64();
                debug!(tick_id, dt, "tick start");

                let pass_start = Instant::now();
                let report = {
                    let mut state = shared.lock();
                    state.simulate(dt);
                    state.render(dt)
                };

                stats.ticks.fetch_add(1, Ordering::Relaxed);
                if report.presented {
                    stats.frames_presented.fetch_add(1, Ordering::Relaxed);
                }

                let pass = pass_start.elapsed();
                if pass > scheduler.interval() {
                    warn!(
                        tick_id,
                        elapsed_ms = pass.as_millis() as u64,
                        budget_ms = scheduler.interval().as_millis() as u64,
                        "tick exceeded time budget"
                    );
                }
            }
        }
    }

    info!(ticks = scheduler.tick_id(), "tick loop exited");
}
