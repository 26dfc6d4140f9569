//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for logical lengths, plus the
//! [`DpSize`], [`DpPosition`] and [`DpRect`] aggregates used by widget
//! geometry.
//!
//! ## Overview
//!
//! Every size a host reports to a widget (container, track, thumb) and every
//! offset the widget derives back is expressed in dp. Hosts convert to
//! physical pixels at draw time with [`Dp::to_pixels_f64`], which applies the
//! global [`SCALE_FACTOR`].
//!
//! ## Usage
//!
//! ```
//! use touchslide_ui::dp::{Dp, DpSize};
//!
//! let touch = DpSize::new(Dp(40.0), Dp(40.0));
//! let thumb = DpSize::new(Dp(20.0), Dp(20.0));
//! assert_eq!((touch.width - thumb.width).max(Dp::ZERO), Dp(20.0));
//! ```

use std::{
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
    sync::OnceLock,
};

use parking_lot::RwLock;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// It is typically initialised once at startup from the device density. When
/// it was never set, conversions assume a factor of `1.0`.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets (or replaces) the global scale factor.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64`. Unlike physical pixels it may be fractional,
/// which matters for value-to-offset interpolation: a thumb at 30.5% of a
/// 180dp travel sits at 54.9dp, not at a rounded pixel.
///
/// ```
/// use touchslide_ui::Dp;
///
/// let travel = Dp(200.0) - Dp(20.0);
/// assert_eq!(travel * 0.5, Dp(90.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Creates a `Dp` value from physical pixels specified as an `f64`.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Returns the larger of the two values.
    pub fn max(self, other: Self) -> Self {
        Dp(self.0.max(other.0))
    }

    /// Returns the smaller of the two values.
    pub fn min(self, other: Self) -> Self {
        Dp(self.0.min(other.0))
    }

    /// Rounds half up to the nearest whole dp.
    pub fn round(self) -> Self {
        Dp((self.0 + 0.5).floor())
    }

    /// Returns `true` when the value is neither NaN nor infinite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<Dp> for f64 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Self::Output {
        Dp(self.0 / rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Self::Output {
        Dp(-self.0)
    }
}

impl AddAssign for Dp {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Dp {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A 2D size in dp.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpSize {
    /// Horizontal extent.
    pub width: Dp,
    /// Vertical extent.
    pub height: Dp,
}

impl DpSize {
    /// A zero-sized value.
    pub const ZERO: Self = Self {
        width: Dp::ZERO,
        height: Dp::ZERO,
    };

    /// Creates a new size.
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }

    /// Creates a size from raw dp numbers.
    pub const fn from_dp(width: f64, height: f64) -> Self {
        Self {
            width: Dp(width),
            height: Dp(height),
        }
    }
}

/// A 2D position in dp, origin at the top-left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpPosition {
    /// Horizontal coordinate.
    pub x: Dp,
    /// Vertical coordinate.
    pub y: Dp,
}

impl DpPosition {
    /// The origin.
    pub const ZERO: Self = Self {
        x: Dp::ZERO,
        y: Dp::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by the given deltas.
    pub fn offset(self, dx: Dp, dy: Dp) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle in dp.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpRect {
    /// Left edge.
    pub x: Dp,
    /// Top edge.
    pub y: Dp,
    /// Horizontal extent.
    pub width: Dp,
    /// Vertical extent.
    pub height: Dp,
}

impl DpRect {
    /// Creates a new rectangle from its origin and extent.
    pub const fn new(x: Dp, y: Dp, width: Dp, height: Dp) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from an origin and a size.
    pub fn from_origin_size(origin: DpPosition, size: DpSize) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Inclusive containment test: points on every edge are inside.
    pub fn contains(&self, point: DpPosition) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// The size of this rectangle.
    pub fn size(&self) -> DpSize {
        DpSize::new(self.width, self.height)
    }
}
