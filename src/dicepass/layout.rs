//! # Responsive Layout
//!
//! Widgets are laid out once, at design time, on one of two small reference
//! canvases measured in abstract design units:
//!
//! ```text
//!   portrait  100 x 150        landscape  150 x 100
//!   ┌────────┐                 ┌──────────────┐
//!   │        │                 │              │
//!   │        │                 └──────────────┘
//!   │        │
//!   └────────┘
//! ```
//!
//! At runtime every rectangle is scaled onto the real window: `x` and `w`
//! by `window_w / canvas.width`, `y` and `h` by `window_h / canvas.height`,
//! each rounded half away from zero. Rectangles are recomputed from the design
//! table on every resize, never adjusted incrementally, so no drift builds up.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classifies a work area. Wider than tall is landscape; square and
    /// taller are portrait. A zero dimension gives no signal and yields `None`.
    pub fn probe(width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        if width > height {
            Some(Orientation::Landscape)
        } else {
            Some(Orientation::Portrait)
        }
    }

    pub fn canvas(self) -> Canvas {
        match self {
            Orientation::Portrait => PORTRAIT_CANVAS,
            Orientation::Landscape => LANDSCAPE_CANVAS,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Whether orientation follows the window or was pinned at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationPolicy {
    #[default]
    Auto,
    Forced(Orientation),
}

impl OrientationPolicy {
    /// Orientation to use for a window of `width` x `height`.
    ///
    /// A forced orientation never changes. Otherwise the window is probed, and
    /// `current` is kept when the probe has nothing to say.
    pub fn resolve(self, current: Orientation, width: i32, height: i32) -> Orientation {
        match self {
            OrientationPolicy::Forced(orientation) => orientation,
            OrientationPolicy::Auto => Orientation::probe(width, height).unwrap_or(current),
        }
    }
}

/// A reference canvas in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

pub const PORTRAIT_CANVAS: Canvas = Canvas {
    width: 100,
    height: 150,
};

pub const LANDSCAPE_CANVAS: Canvas = Canvas {
    width: 150,
    height: 100,
};

/// The window opens at this multiple of the design canvas.
pub const INITIAL_SCALE: i32 = 3;

pub fn initial_window_size(orientation: Orientation) -> (i32, i32) {
    let canvas = orientation.canvas();
    (canvas.width * INITIAL_SCALE, canvas.height * INITIAL_SCALE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// A rectangle in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl LayoutRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// A rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.w, self.h, self.x, self.y)
    }
}

/// Scales one design-unit value along `axis` of `canvas` onto a window.
///
/// A zero canvas dimension maps everything to 0.
pub fn scale(value: i32, axis: Axis, canvas: Canvas, window_w: i32, window_h: i32) -> i32 {
    let (reference, actual) = match axis {
        Axis::Width => (canvas.width, window_w),
        Axis::Height => (canvas.height, window_h),
    };
    if reference == 0 {
        return 0;
    }
    // f64::round rounds half away from zero
    (f64::from(value) / f64::from(reference) * f64::from(actual)).round() as i32
}

/// Maps a design rectangle for `orientation` onto a `window_w` x `window_h`
/// window.
pub fn place(rect: LayoutRect, orientation: Orientation, window_w: i32, window_h: i32) -> PixelRect {
    let canvas = orientation.canvas();
    PixelRect {
        x: scale(rect.x, Axis::Width, canvas, window_w, window_h),
        y: scale(rect.y, Axis::Height, canvas, window_w, window_h),
        w: scale(rect.w, Axis::Width, canvas, window_w, window_h),
        h: scale(rect.h, Axis::Height, canvas, window_w, window_h),
    }
}

/// Every widget the shell positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Output,
    Separator,
    WordCount,
    MinLen,
    MaxLen,
    Extra,
    DarkMode,
    Log,
    Generate,
}

impl Widget {
    pub const ALL: [Widget; 9] = [
        Widget::Output,
        Widget::Separator,
        Widget::WordCount,
        Widget::MinLen,
        Widget::MaxLen,
        Widget::Extra,
        Widget::DarkMode,
        Widget::Log,
        Widget::Generate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Widget::Output => "Output",
            Widget::Separator => "Separator",
            Widget::WordCount => "Word Count",
            Widget::MinLen => "Min Length",
            Widget::MaxLen => "Max Length",
            Widget::Extra => "Extra Words",
            Widget::DarkMode => "Dark Mode",
            Widget::Log => "Log",
            Widget::Generate => "Generate",
        }
    }

    /// Design rectangle for this widget on the `orientation` canvas.
    pub fn design_rect(self, orientation: Orientation) -> LayoutRect {
        match orientation {
            Orientation::Portrait => match self {
                Widget::Output => LayoutRect::new(5, 5, 90, 15),
                Widget::Separator => LayoutRect::new(5, 25, 40, 15),
                Widget::WordCount => LayoutRect::new(50, 25, 45, 15),
                Widget::MinLen => LayoutRect::new(5, 45, 40, 15),
                Widget::MaxLen => LayoutRect::new(50, 45, 45, 15),
                Widget::Extra => LayoutRect::new(5, 65, 40, 15),
                Widget::DarkMode => LayoutRect::new(50, 65, 45, 15),
                Widget::Log => LayoutRect::new(5, 85, 90, 35),
                Widget::Generate => LayoutRect::new(5, 125, 90, 20),
            },
            Orientation::Landscape => match self {
                Widget::Output => LayoutRect::new(5, 5, 140, 15),
                Widget::Separator => LayoutRect::new(5, 25, 35, 15),
                Widget::WordCount => LayoutRect::new(45, 25, 30, 15),
                Widget::MinLen => LayoutRect::new(80, 25, 35, 15),
                Widget::MaxLen => LayoutRect::new(120, 25, 25, 15),
                Widget::Extra => LayoutRect::new(5, 45, 70, 15),
                Widget::DarkMode => LayoutRect::new(80, 45, 65, 15),
                Widget::Log => LayoutRect::new(5, 65, 140, 15),
                Widget::Generate => LayoutRect::new(5, 85, 140, 10),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedWidget {
    pub widget: Widget,
    pub rect: PixelRect,
}

/// Places every widget for a window of `window_w` x `window_h`.
pub fn layout_all(orientation: Orientation, window_w: i32, window_h: i32) -> Vec<PlacedWidget> {
    Widget::ALL
        .iter()
        .map(|&widget| PlacedWidget {
            widget,
            rect: place(widget.design_rect(orientation), orientation, window_w, window_h),
        })
        .collect()
}
