//! Headless display surface that records draw calls.
//!
//! [`RecordingSurface`] behaves like a double-buffered window without one:
//! drawing goes into an offscreen [`RecordingCanvas`], and [`present`]
//! moves the finished [`Frame`] into a bounded history before clearing the
//! offscreen buffer to the void colour.
//!
//! [`present`]: DisplaySurface::present

use std::collections::VecDeque;

use tracing::info;

use crate::canvas::{Canvas, Color, ScreenRect};
use crate::error::SurfaceError;
use crate::surface::{DisplayMode, DisplaySurface, Resolution};

/// The colour the offscreen buffer is cleared to between frames.
pub const VOID_COLOUR: Color = Color::DARK_GRAY;

/// Number of presented frames kept by default.
pub const DEFAULT_HISTORY: usize = 8;

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    FillRect {
        rect: ScreenRect,
        color: Color,
    },
    StrokeEllipse {
        rect: ScreenRect,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: Color,
    },
}

/// A presented frame: the draw commands in the order they were issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub resolution: Option<Resolution>,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// The filled rectangles, in draw order.
    #[must_use]
    pub fn fills(&self) -> Vec<(ScreenRect, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// The text lines, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The ellipse outlines, in draw order.
    #[must_use]
    pub fn ellipses(&self) -> Vec<ScreenRect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeEllipse { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

/// The offscreen buffer of a [`RecordingSurface`].
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    resolution: Resolution,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// A freshly cleared buffer of the given size.
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            commands: vec![DrawCommand::Clear { color: VOID_COLOUR }],
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Commands issued since the buffer was last cleared.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Move the drawn commands out and reset to a void-filled buffer.
    fn take_frame(&mut self) -> Frame {
        let commands = std::mem::replace(
            &mut self.commands,
            vec![DrawCommand::Clear { color: VOID_COLOUR }],
        );
        Frame {
            resolution: Some(self.resolution),
            commands,
        }
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, rect: ScreenRect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_ellipse(&mut self, rect: ScreenRect, color: Color) {
        self.commands.push(DrawCommand::StrokeEllipse { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}

/// A headless, double-buffered [`DisplaySurface`].
#[derive(Debug)]
pub struct RecordingSurface {
    /// Modes this surface pretends the platform offers.
    modes: Vec<DisplayMode>,
    mode: DisplayMode,
    fullscreen: bool,
    /// `None` until [`initialize`](Self::initialize) is called.
    offscreen: Option<RecordingCanvas>,
    history: VecDeque<Frame>,
    history_limit: usize,
    presented_count: u64,
}

impl RecordingSurface {
    /// Create an initialised surface in `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnsupportedMode`] if `mode` is not one of
    /// `modes`.
    pub fn new(modes: Vec<DisplayMode>, mode: DisplayMode) -> Result<Self, SurfaceError> {
        let mut surface = Self::uninitialized(modes, mode)?;
        surface.initialize();
        Ok(surface)
    }

    /// Create a surface that hands out no canvas until
    /// [`initialize`](Self::initialize) is called.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnsupportedMode`] if `mode` is not one of
    /// `modes`.
    pub fn uninitialized(modes: Vec<DisplayMode>, mode: DisplayMode) -> Result<Self, SurfaceError> {
        if !modes.contains(&mode) {
            return Err(SurfaceError::UnsupportedMode { mode });
        }
        Ok(Self {
            modes,
            mode,
            fullscreen: false,
            offscreen: None,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY,
            presented_count: 0,
        })
    }

    /// A surface offering exactly one mode.
    #[must_use]
    pub fn single_mode(mode: DisplayMode) -> Self {
        let mut surface = Self {
            modes: vec![mode],
            mode,
            fullscreen: false,
            offscreen: None,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY,
            presented_count: 0,
        };
        surface.initialize();
        surface
    }

    /// Keep at most `limit` presented frames (at least one).
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self.history.truncate(self.history_limit);
        self
    }

    /// Allocate the offscreen buffer for the current mode.
    pub fn initialize(&mut self) {
        self.offscreen = Some(RecordingCanvas::new(self.mode.resolution()));
    }

    /// Returns `true` once the offscreen canvas exists.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.offscreen.is_some()
    }

    /// Total number of frames presented since creation.
    #[must_use]
    pub fn presented_count(&self) -> u64 {
        self.presented_count
    }

    /// The most recently presented frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.history.back()
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.history.iter()
    }

    /// Discard the current offscreen buffer and allocate a fresh one, as a
    /// window does when it is rebuilt for a new mode.
    fn reload(&mut self) {
        if self.is_initialized() {
            self.initialize();
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn current_mode(&self) -> DisplayMode {
        self.mode
    }

    fn available_modes(&self) -> Vec<DisplayMode> {
        self.modes.clone()
    }

    fn acquire_canvas(&mut self) -> Option<&mut dyn Canvas> {
        match &mut self.offscreen {
            Some(canvas) => Some(canvas as &mut dyn Canvas),
            None => None,
        }
    }

    fn present(&mut self) {
        let Some(canvas) = self.offscreen.as_mut() else {
            return;
        };
        let frame = canvas.take_frame();
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(frame);
        self.presented_count += 1;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        self.reload();
        info!(fullscreen, mode = %self.mode, "fullscreen changed");
    }

    fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), SurfaceError> {
        if !self.modes.contains(&mode) {
            return Err(SurfaceError::UnsupportedMode { mode });
        }
        self.mode = mode;
        self.reload();
        info!(%mode, "display mode changed");
        Ok(())
    }
}
