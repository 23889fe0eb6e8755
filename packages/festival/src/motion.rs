//! Scroll- and pointer-linked transforms for the hero banner.

/// Scroll range over which the hero drifts down.
pub const OFFSET_SCROLL_RANGE: [f64; 2] = [0.0, 500.0];
pub const OFFSET_RANGE: [f64; 2] = [0.0, 200.0];
/// Scroll range over which the hero fades and shrinks.
pub const FADE_SCROLL_RANGE: [f64; 2] = [0.0, 300.0];
pub const OPACITY_RANGE: [f64; 2] = [1.0, 0.0];
pub const SCALE_RANGE: [f64; 2] = [1.0, 0.8];

/// Pixels of pointer travel per unit of tilt.
pub const POINTER_FACTOR: f64 = 0.01;

/// Linear map from `input` to `output`, clamped to the output range.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [in_lo, in_hi] = input;
    let [out_lo, out_hi] = output;
    if (in_hi - in_lo).abs() < f64::EPSILON {
        return out_lo;
    }
    let progress = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * progress
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub offset_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::from_scroll(0.0)
    }
}

impl HeroTransform {
    pub fn from_scroll(scroll_y: f64) -> Self {
        Self {
            offset_y: interpolate(scroll_y, OFFSET_SCROLL_RANGE, OFFSET_RANGE),
            opacity: interpolate(scroll_y, FADE_SCROLL_RANGE, OPACITY_RANGE),
            scale: interpolate(scroll_y, FADE_SCROLL_RANGE, SCALE_RANGE),
        }
    }
}

/// Pointer position relative to the viewport center, scaled by [`POINTER_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: (client_x - width / 2.0) * POINTER_FACTOR,
            y: (client_y - height / 2.0) * POINTER_FACTOR,
        }
    }

    /// `(rotate_x, rotate_y)` in degrees.
    pub fn tilt(&self) -> (f64, f64) {
        (self.y, -self.x)
    }
}

/// Inline style for the hero content block.
pub fn hero_style(transform: &HeroTransform, pointer: &PointerOffset) -> String {
    let (rotate_x, rotate_y) = pointer.tilt();
    format!(
        "opacity: {:.3}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3}) rotateX({:.2}deg) rotateY({:.2}deg);",
        transform.opacity, pointer.x, transform.offset_y, transform.scale, rotate_x, rotate_y
    )
}

/// Entrance delay in seconds for the `index`-th item of a staggered list.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// `animation-delay` declaration for a staggered item.
pub fn delay_style(index: usize, step: f64) -> String {
    format!("animation-delay: {:.1}s;", stagger_delay(index, step))
}
