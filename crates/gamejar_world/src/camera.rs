//! Camera projection and rendering.
//!
//! A [`Camera`] watches a rectangle of world space (its view) and draws the
//! entities inside it onto a display surface. Moving or resizing the view pans
//! and zooms without touching any entity.
//!
//! Projection from world space to physical space:
//!
//! ```text
//! scale_x = physical_width  / view.width
//! scale_y = physical_height / view.height
//! x = (entity.x - view.x) * scale_x      w = entity.width  * scale_x
//! y = (entity.y - view.y) * scale_y      h = entity.height * scale_y
//! ```
//!
//! The view is validated whenever it changes, so projection never divides by
//! zero or offsets by a non-finite corner.

use gamejar_entity::EntityRegistry;
use gamejar_graphics::{Canvas, Color, DisplaySurface, Resolution, ScreenRect};
use gamejar_math::{DVec2, Transform};
use tracing::{trace, warn};

use crate::error::CameraError;

/// Colour of the debug overlay.
pub const DEBUG_COLOUR: Color = Color::RED;

/// Size of the world-origin marker, in pixels.
const ORIGIN_MARKER_SIZE: f64 = 10.0;

/// Vertical offset of an entity's description below its draw position.
const LABEL_OFFSET: f64 = 10.0;

/// Left margin and baselines of the overlay's statistics lines.
const STATS_X: f64 = 2.0;
const STATS_BASELINES: [f64; 5] = [10.0, 25.0, 40.0, 55.0, 70.0];

/// The outcome of one [`Camera::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Whether a frame was drawn and presented.
    pub presented: bool,
    /// Entities intersecting the view.
    pub visible: usize,
    /// Entities in the registry.
    pub total: usize,
}

/// A view onto the world, projected onto a display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// The visible rectangle in world space. Always has a positive size.
    view: Transform,
    debug_overlay: bool,
}

impl Camera {
    /// Create a camera looking at `view`.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidView`] if the view's size is not positive
    /// and [`CameraError::InvalidPosition`] if its corner is not finite.
    pub fn new(view: Transform) -> Result<Self, CameraError> {
        validate_view(&view)?;
        Ok(Self {
            view,
            debug_overlay: false,
        })
    }

    /// Create a camera whose view matches the physical resolution, so one
    /// world unit is one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidView`] if the resolution has a zero side.
    pub fn matching(resolution: Resolution) -> Result<Self, CameraError> {
        Self::new(Transform::new(
            0.0,
            0.0,
            f64::from(resolution.width),
            f64::from(resolution.height),
        ))
    }

    /// The current view rectangle.
    #[must_use]
    pub fn view(&self) -> Transform {
        self.view
    }

    /// Replace the view.
    ///
    /// # Errors
    ///
    /// Returns a [`CameraError`] and keeps the old view if the new one has a
    /// non-positive size or a non-finite corner.
    pub fn set_view(&mut self, view: Transform) -> Result<(), CameraError> {
        validate_view(&view)?;
        self.view = view;
        Ok(())
    }

    /// Mutate the view in place. The change is discarded if it leaves the
    /// view with a non-positive size.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidView`] if the edited view is unusable.
    pub fn adjust_view<R>(
        &mut self,
        f: impl FnOnce(&mut Transform) -> R,
    ) -> Result<R, CameraError> {
        let mut view = self.view;
        let result = f(&mut view);
        self.set_view(view)?;
        Ok(result)
    }

    /// Move the view by a world-space offset.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidPosition`] and keeps the old view if the
    /// offset would leave the view at a non-finite position.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), CameraError> {
        self.adjust_view(|view| view.translate(dx, dy))
    }

    /// Multiply the view size by `factor`, keeping its centre fixed. Factors
    /// below one zoom in.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidView`] if `factor` is not positive.
    pub fn zoom(&mut self, factor: f64) -> Result<(), CameraError> {
        self.adjust_view(|view| {
            let centre = view.position() + view.size() / 2.0;
            let size = view.size() * factor;
            *view = Transform::from_position_size(centre - size / 2.0, size);
        })
    }

    #[must_use]
    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn set_debug_overlay(&mut self, enabled: bool) {
        self.debug_overlay = enabled;
    }

    /// Physical pixels per world unit on each axis.
    #[must_use]
    pub fn scale(&self, resolution: Resolution) -> DVec2 {
        DVec2::new(
            f64::from(resolution.width) / self.view.width(),
            f64::from(resolution.height) / self.view.height(),
        )
    }

    /// Project a world-space rectangle into physical space.
    #[must_use]
    pub fn project(&self, rect: &Transform, resolution: Resolution) -> ScreenRect {
        let scale = self.scale(resolution);
        let corner = (rect.position() - self.view.position()) * scale;
        let size = rect.size() * scale;
        ScreenRect::new(corner.x, corner.y, size.x, size.y)
    }

    /// Project a world-space point into physical space.
    #[must_use]
    pub fn project_point(&self, point: DVec2, resolution: Resolution) -> DVec2 {
        (point - self.view.position()) * self.scale(resolution)
    }

    /// Draw every registered entity that intersects the view, lowest height
    /// first, then present the frame.
    ///
    /// If the surface has no drawing context yet the frame is skipped
    /// silently.
    pub fn render(
        &self,
        registry: &EntityRegistry,
        surface: &mut dyn DisplaySurface,
        dt: f64,
    ) -> FrameReport {
        let total = registry.len();
        if validate_view(&self.view).is_err() {
            warn!(view = %self.view, "camera view is degenerate, skipping frame");
            return FrameReport {
                presented: false,
                visible: 0,
                total,
            };
        }

        let resolution = surface.current_resolution();
        let Some(canvas) = surface.acquire_canvas() else {
            trace!("drawing surface not initialised, skipping frame");
            return FrameReport {
                presented: false,
                visible: 0,
                total,
            };
        };

        let visible = registry.cull(&self.view);
        for (entity, transform) in &visible {
            let dest = self.project(transform, resolution);
            entity.drawable().draw_scaled(canvas, dest);
            if self.debug_overlay {
                canvas.draw_text(&entity.describe(), dest.x, dest.y + LABEL_OFFSET, DEBUG_COLOUR);
            }
        }

        if self.debug_overlay {
            self.draw_overlay(canvas, resolution, dt, total, visible.len());
        }

        surface.present();
        FrameReport {
            presented: true,
            visible: visible.len(),
            total,
        }
    }

    fn draw_overlay(
        &self,
        canvas: &mut dyn Canvas,
        resolution: Resolution,
        dt: f64,
        total: usize,
        visible: usize,
    ) {
        let origin = self.project_point(DVec2::ZERO, resolution);
        canvas.stroke_ellipse(
            ScreenRect::centred(origin.x, origin.y, ORIGIN_MARKER_SIZE, ORIGIN_MARKER_SIZE),
            DEBUG_COLOUR,
        );

        let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        let lines = [
            format!("FPS: {fps:.1}"),
            format!("Total entities: {total}"),
            format!("Rendered entities: {visible}"),
            format!("Camera position: ({}, {})", self.view.x(), self.view.y()),
            format!("Camera size: [{}, {}]", self.view.width(), self.view.height()),
        ];
        for (line, y) in lines.iter().zip(STATS_BASELINES) {
            canvas.draw_text(line, STATS_X, y, DEBUG_COLOUR);
        }
    }
}

fn validate_view(view: &Transform) -> Result<(), CameraError> {
    let (width, height) = (view.width(), view.height());
    if !view.position().is_finite() {
        return Err(CameraError::InvalidPosition {
            x: view.x(),
            y: view.y(),
        });
    }
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok(())
    } else {
        Err(CameraError::InvalidView { width, height })
    }
}
