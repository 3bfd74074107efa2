use crate::{
    animation::ease::Ease,
    foundation::error::{MotionError, MotionResult},
};

/// Behavior of an interpolation outside its domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the nearest boundary range value.
    #[default]
    Clamp,
    /// Return the input unchanged.
    Identity,
    /// Continue the outermost segment linearly.
    Extend,
}

/// Easing and out-of-domain policy for one interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpOpts {
    pub left: Extrapolate,
    pub right: Extrapolate,
    pub ease: Ease, // applied per segment to the fractional position
}

impl InterpOpts {
    /// Clamp on both sides, linear segments.
    pub fn clamped() -> Self {
        Self::default()
    }

    pub fn eased(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }

    pub fn with_left(mut self, left: Extrapolate) -> Self {
        self.left = left;
        self
    }

    pub fn with_right(mut self, right: Extrapolate) -> Self {
        self.right = right;
        self
    }
}

/// Piecewise-linear (optionally eased) mapping of `x` from `domain` onto `range`.
///
/// `domain` must be strictly increasing and both slices must hold the same number (>= 2) of
/// finite points; anything else is a [`MotionError::InvalidInterpolationSpec`]. Output at a domain
/// point is exactly the corresponding range point.
pub fn interpolate(x: f64, domain: &[f64], range: &[f64], opts: InterpOpts) -> MotionResult<f64> {
    validate_points(domain, range)?;
    Ok(sample_points(x, domain, range, opts))
}

/// A validated, reusable interpolation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Interpolator {
    domain: Vec<f64>,
    range: Vec<f64>,
    opts: InterpOpts,
}

impl Interpolator {
    pub fn new(domain: impl Into<Vec<f64>>, range: impl Into<Vec<f64>>) -> MotionResult<Self> {
        let domain = domain.into();
        let range = range.into();
        validate_points(&domain, &range)?;
        Ok(Self {
            domain,
            range,
            opts: InterpOpts::default(),
        })
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.opts.ease = ease;
        self
    }

    pub fn extrapolate(mut self, left: Extrapolate, right: Extrapolate) -> Self {
        self.opts.left = left;
        self.opts.right = right;
        self
    }

    pub fn opts(&self) -> InterpOpts {
        self.opts
    }

    pub fn sample(&self, x: f64) -> f64 {
        sample_points(x, &self.domain, &self.range, self.opts)
    }
}

fn validate_points(domain: &[f64], range: &[f64]) -> MotionResult<()> {
    if domain.len() < 2 {
        return Err(MotionError::invalid_interpolation(format!(
            "domain needs at least 2 points, got {}",
            domain.len()
        )));
    }
    if domain.len() != range.len() {
        return Err(MotionError::invalid_interpolation(format!(
            "domain has {} points but range has {}",
            domain.len(),
            range.len()
        )));
    }
    if let Some(i) = domain.iter().chain(range).position(|v| !v.is_finite()) {
        return Err(MotionError::invalid_interpolation(format!(
            "control point {i} is not finite"
        )));
    }
    if let Some(i) = domain.windows(2).position(|w| w[0] >= w[1]) {
        return Err(MotionError::invalid_interpolation(format!(
            "domain must be strictly increasing (point {} = {} >= point {} = {})",
            i,
            domain[i],
            i + 1,
            domain[i + 1]
        )));
    }
    Ok(())
}

fn sample_points(x: f64, domain: &[f64], range: &[f64], opts: InterpOpts) -> f64 {
    let last = domain.len() - 1;

    if x < domain[0] {
        return extrapolate(x, opts.left, domain[0], domain[1], range[0], range[1], range[0]);
    }
    if x > domain[last] {
        return extrapolate(
            x,
            opts.right,
            domain[last - 1],
            domain[last],
            range[last - 1],
            range[last],
            range[last],
        );
    }
    if x == domain[last] {
        return range[last];
    }

    let idx = domain.partition_point(|&d| d <= x);
    let i = idx.saturating_sub(1).min(last - 1);
    let t = (x - domain[i]) / (domain[i + 1] - domain[i]);
    let te = opts.ease.apply(t);
    range[i] + (range[i + 1] - range[i]) * te
}

fn extrapolate(x: f64, mode: Extrapolate, d0: f64, d1: f64, r0: f64, r1: f64, held: f64) -> f64 {
    match mode {
        Extrapolate::Clamp => held,
        Extrapolate::Identity => x,
        Extrapolate::Extend => r0 + (r1 - r0) * ((x - d0) / (d1 - d0)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
