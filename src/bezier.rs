//! CSS-like cubic Bézier easing for scalar interpolation.
//!
//! A [`CubicBezier`] is anchored at `(0,0)` and `(1,1)`; only the two inner
//! control points are stored.  Evaluating the curve for a given progress `x`
//! means inverting the x-polynomial to find the curve parameter `t`, then
//! sampling the y-polynomial at that `t`.
//!
//! The inversion is solved in closed form rather than by Newton-Raphson or
//! bisection, so each call costs a fixed number of arithmetic operations and
//! never allocates.
//!
//! ```text
//!   (0,0) ── (x1,y1) ── (x2,y2) ── (1,1)
//! ```

use log::trace;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::f64::consts::PI;
use std::fmt;

/// Largest step count [`CubicBezier::table`] accepts.
pub const MAX_TABLE_STEPS: usize = 1_000_000;

/// Errors produced when sampling or solving a curve.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EaseError {
    /// An input that must lie in `[0, 1]` did not (NaN included).
    #[error("{param} = {value} is outside [0, 1]")]
    OutOfRange { param: &'static str, value: f64 },

    /// The x-polynomial has no cubic, quadratic, or linear term.
    ///
    /// Cannot happen for a curve with finite coefficients; treat it as a
    /// broken curve, not something to retry.
    #[error("degenerate curve: x(t) has no non-zero coefficient")]
    Degenerate,

    /// A sampling table was requested with more than [`MAX_TABLE_STEPS`] steps.
    #[error("{steps} steps requested, at most {max} allowed")]
    TooManySteps { steps: usize, max: usize },
}

/// Reject anything outside the unit interval.
fn check_unit(param: &'static str, value: f64) -> Result<(), EaseError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EaseError::OutOfRange { param, value })
    }
}

#[inline]
fn in_unit(t: f64) -> bool {
    (0.0..=1.0).contains(&t)
}

/// Resolution used when every candidate root landed just outside `[0, 1]`.
fn precision_fallback(x: f64) -> f64 {
    let t = if x < 0.5 { 0.0 } else { 1.0 };
    trace!("no root in [0, 1] for x={}, clamping t to {}", x, t);
    t
}

/// Polynomial coefficients `(a, b, c)` of one axis of the curve, given that
/// axis's two inner control coordinates.
#[inline]
fn axis_coefficients(k1: f64, k2: f64) -> (f64, f64, f64) {
    let c = k1 * 3.0;
    let b = k2 * 3.0 - c - c;
    let a = 1.0 - b - c;
    (a, b, c)
}

#[inline]
fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
    ((a * t + b) * t + c) * t
}

/// Real root of `a t³ + b t² + c t + d = 0` inside `[0, 1]`, `a != 0`.
///
/// The cubic is depressed with `t = u + p`.  A negative discriminant means
/// three real roots, taken in trigonometric form and tried in order `k = 0,
/// +1, -1`; otherwise the single real root comes from Cardano's formula.
/// `f64::cbrt` keeps the sign of negative arguments.
fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Option<f64> {
    let p = -b / (3.0 * a);
    let p2 = p * p;
    let p3 = p2 * p;

    let q = p3 + (b * c - 3.0 * a * d) / (6.0 * a * a);
    let q2 = q * q;

    let r = c / (3.0 * a);
    let rmp2 = r - p2;

    let s = q2 + rmp2 * rmp2 * rmp2;

    if s < 0.0 {
        let ssi = (-s).sqrt();
        let r1 = (-s + q2).sqrt();
        let phi = ssi.atan2(q);

        let r3 = r1.cbrt();
        let phi3 = phi / 3.0;

        let u1 = 2.0 * r3 * phi3.cos() + p;
        let u2 = 2.0 * r3 * (phi3 + 2.0 * PI / 3.0).cos() + p;
        let u3 = 2.0 * r3 * (phi3 - 2.0 * PI / 3.0).cos() + p;

        [u1, u2, u3].into_iter().find(|&u| in_unit(u))
    } else {
        let ss = s.sqrt();
        let u = (q + ss).cbrt() + (q - ss).cbrt() + p;
        in_unit(u).then_some(u)
    }
}

/// Root of `b t² + c t + d = 0`, `b != 0`.
///
/// The second operand of each selection check accepts every non-NaN root:
/// `t1` only wins when `t2` is out of range, and two in-range roots fall
/// through to `None`.
#[allow(
    clippy::neg_cmp_op_on_partial_ord,
    clippy::nonminimal_bool,
    clippy::overly_complex_bool_expr
)]
fn solve_quadratic(b: f64, c: f64, d: f64) -> Option<f64> {
    let denom = 2.0 * b;
    let disc = c * c - 4.0 * b * d;
    let mid = -c / denom;

    if disc == 0.0 {
        return Some(mid);
    }
    if !(disc > 0.0) {
        return None;
    }

    let half = disc.sqrt() / denom;
    let t1 = mid + half;
    let t2 = mid - half;

    if (t1 < 0.0 || t1 > 1.0) && (t2 >= 0.0 || t2 <= 1.0) {
        Some(t2)
    } else if (t2 < 0.0 || t2 > 1.0) && (t1 >= 0.0 || t1 <= 1.0) {
        Some(t1)
    } else {
        None
    }
}

/// A unit cubic Bézier easing curve.
///
/// Control points are `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.  The x-component
/// must be monotonic over `t ∈ [0,1]` for [`solve_t`](Self::solve_t) to have
/// a unique answer; this is the caller's responsibility and is not checked on
/// construction (see [`is_monotonic`](Self::is_monotonic)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Build a curve from its two inner control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The four coefficients as `[x1, y1, x2, y2]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Whether both inner x-coordinates lie in `[0, 1]`.
    ///
    /// That is sufficient for x(t) to be non-decreasing on `[0, 1]`, which is
    /// the precondition of [`solve_t`](Self::solve_t).
    pub fn is_monotonic(&self) -> bool {
        in_unit(self.x1) && in_unit(self.x2)
    }

    /// Find the curve parameter `t ∈ [0,1]` at which x(t) equals `x`.
    ///
    /// Solves `a t³ + b t² + c t - x = 0` by whichever closed form the leading
    /// coefficients allow (cubic, quadratic, then linear).  A root that
    /// floating-point error pushes just outside `[0, 1]` is resolved to `0`
    /// for `x < 0.5` and `1` otherwise.
    pub fn solve_t(&self, x: f64) -> Result<f64, EaseError> {
        check_unit("x", x)?;

        let d = -x;
        let (a, b, c) = axis_coefficients(self.x1, self.x2);

        if a != 0.0 {
            Ok(solve_cubic(a, b, c, d).unwrap_or_else(|| precision_fallback(x)))
        } else if b != 0.0 {
            Ok(solve_quadratic(b, c, d).unwrap_or_else(|| precision_fallback(x)))
        } else if c != 0.0 {
            Ok(-d / c)
        } else {
            Err(EaseError::Degenerate)
        }
    }

    /// x(t) for `t ∈ [0,1]`.
    pub fn sample_x(&self, t: f64) -> Result<f64, EaseError> {
        check_unit("t", t)?;
        let (a, b, c) = axis_coefficients(self.x1, self.x2);
        Ok(sample_curve(a, b, c, t))
    }

    /// y(t) for `t ∈ [0,1]`.
    pub fn sample_y(&self, t: f64) -> Result<f64, EaseError> {
        check_unit("t", t)?;
        let (a, b, c) = axis_coefficients(self.y1, self.y2);
        Ok(sample_curve(a, b, c, t))
    }

    /// Eased progress for normalized time `x`.
    ///
    /// Usually in `[0, 1]`, but curves with control points outside the unit
    /// square (the `Back` family) overshoot on purpose.
    pub fn evaluate(&self, x: f64) -> Result<f64, EaseError> {
        check_unit("x", x)?;
        let t = self.solve_t(x)?;
        self.sample_y(t)
    }

    /// Interpolate from `from` to `to` at normalized time `x`.
    pub fn lerp(&self, from: f64, to: f64, x: f64) -> Result<f64, EaseError> {
        let y = self.evaluate(x)?;
        Ok(from + (to - from) * y)
    }

    /// `steps + 1` evenly spaced `(x, evaluate(x))` pairs covering `[0, 1]`.
    ///
    /// `steps == 0` is treated as `1`; more than [`MAX_TABLE_STEPS`] is
    /// rejected before anything is allocated.
    pub fn table(&self, steps: usize) -> Result<Vec<(f64, f64)>, EaseError> {
        if steps > MAX_TABLE_STEPS {
            return Err(EaseError::TooManySteps {
                steps,
                max: MAX_TABLE_STEPS,
            });
        }
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let x = i as f64 / steps as f64;
                self.evaluate(x).map(|y| (x, y))
            })
            .collect()
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

//  Serde

/// Serialized as `[x1, y1, x2, y2]`.
impl Serialize for CubicBezier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

/// Accepts `[x1, y1, x2, y2]`, `{"x1":..,"y1":..,"x2":..,"y2":..}`, or the
/// name of a built-in preset such as `"EaseOutBack"`.
impl<'de> Deserialize<'de> for CubicBezier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = CubicBezier;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "array [x1, y1, x2, y2], object {{x1, y1, x2, y2}}, or preset name")
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<CubicBezier, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut k = [0.0; 4];
                for (i, slot) in k.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| DeError::invalid_length(i, &self))?;
                }
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(DeError::invalid_length(5, &self));
                }
                Ok(CubicBezier::new(k[0], k[1], k[2], k[3]))
            }
            fn visit_map<A>(self, mut map: A) -> Result<CubicBezier, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut x1 = None;
                let mut y1 = None;
                let mut x2 = None;
                let mut y2 = None;
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "x1" => x1 = Some(map.next_value()?),
                        "y1" => y1 = Some(map.next_value()?),
                        "x2" => x2 = Some(map.next_value()?),
                        "y2" => y2 = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(CubicBezier::new(
                    x1.ok_or_else(|| DeError::missing_field("x1"))?,
                    y1.ok_or_else(|| DeError::missing_field("y1"))?,
                    x2.ok_or_else(|| DeError::missing_field("x2"))?,
                    y2.ok_or_else(|| DeError::missing_field("y2"))?,
                ))
            }
            fn visit_str<E>(self, s: &str) -> Result<CubicBezier, E>
            where
                E: DeError,
            {
                crate::preset::lookup_preset(s.trim())
                    .ok_or_else(|| DeError::custom(format!("unknown preset: {:?}", s)))
            }
        }
        deserializer.deserialize_any(V)
    }
}
