//! One-dimensional mappings between typed domain values and a normalized
//! `[0, 1]` interval.
//!
//! An *expanse* owns everything one axis needs: the domain description
//! (numeric bounds or category labels), the margin window (`zero`/`one`),
//! the direction flag, and a defaults snapshot for resetting interactive
//! state. The three variants are a closed set, dispatched through the
//! [`Expanse`] sum type:
//!
//! - [`Continuous`] - numeric bounds with an optional nonlinear transform
//! - [`Point`] - categories at discrete positions spanning the interval
//! - [`Band`] - categories centered in equal-width bands
//!
//! Generic operations take and return [`Value`], which carries either a
//! number or a label through the dispatcher; kind mismatches surface as
//! `None` through the `_opt` methods.

pub mod band;
pub mod breaks;
pub mod continuous;
pub mod point;
pub(crate) mod util;

use std::fmt;

use num_traits::Float;

pub use band::Band;
pub use breaks::pretty_breaks;
pub use continuous::Continuous;
pub use point::Point;

use crate::error::ExpanseError;

/// Sense of an axis: whether normalized values grow with the domain or
/// against it.
///
/// Applied symmetrically on the way out of `normalize` and on the way in
/// to `unnormalize`, so a flip is self-inverse and composes with margin
/// remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forwards,
    Backwards,
}

impl Direction {
    /// `Forwards` leaves `x` unchanged; `Backwards` reflects it to `1 - x`.
    pub fn apply<D: Float>(self, x: D) -> D {
        match self {
            Direction::Forwards => x,
            Direction::Backwards => D::one() - x,
        }
    }

    /// The `±1` multiplier, for direction-aware panning.
    pub fn factor<D: Float>(self) -> D {
        match self {
            Direction::Forwards => D::one(),
            Direction::Backwards => -D::one(),
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forwards => Direction::Backwards,
            Direction::Backwards => Direction::Forwards,
        }
    }
}

/// A domain-space value: a number for continuous expanses, a label for
/// categorical ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<D> {
    Number(D),
    Label(String),
}

impl<D: Copy> Value<D> {
    pub fn number(value: D) -> Self {
        Value::Number(value)
    }

    pub fn label(label: impl Into<String>) -> Self {
        Value::Label(label.into())
    }

    pub fn as_number(&self) -> Option<D> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Label(l) => Some(l),
        }
    }
}

impl<D> From<&str> for Value<D> {
    fn from(label: &str) -> Self {
        Value::Label(label.to_owned())
    }
}

impl<D> From<String> for Value<D> {
    fn from(label: String) -> Self {
        Value::Label(label)
    }
}

/// Runtime tag for the three expanse variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpanseKind {
    Continuous,
    Point,
    Band,
}

impl fmt::Display for ExpanseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpanseKind::Continuous => "continuous",
            ExpanseKind::Point => "point",
            ExpanseKind::Band => "band",
        };
        f.write_str(name)
    }
}

/// The closed set of expanse variants, with the variant-independent
/// operations implemented once.
///
/// Variant-specific operations (`normalize`, `unnormalize`, `breaks`,
/// `reorder`) dispatch on the variant; window operations (`move_by`,
/// `flip`, `zoom`), the defaults reset, and the `set` patch protocol are
/// shared.
///
/// # Examples
///
/// ```
/// use vidde::{Continuous, Expanse, Value};
///
/// let mut expanse = Expanse::from(Continuous::new(0.0, 10.0).unwrap());
/// assert_eq!(expanse.normalize_opt(&Value::number(5.0)), Some(0.5));
///
/// expanse.flip();
/// assert_eq!(expanse.normalize_opt(&Value::number(5.0)), Some(0.5));
/// assert_eq!(expanse.normalize_opt(&Value::number(10.0)), Some(0.0));
/// ```
#[derive(Debug, Clone)]
pub enum Expanse<D: Float = f64> {
    Continuous(Continuous<D>),
    Point(Point<D>),
    Band(Band<D>),
}

impl<D: Float + 'static> From<Continuous<D>> for Expanse<D> {
    fn from(expanse: Continuous<D>) -> Self {
        Expanse::Continuous(expanse)
    }
}

impl<D: Float> From<Point<D>> for Expanse<D> {
    fn from(expanse: Point<D>) -> Self {
        Expanse::Point(expanse)
    }
}

impl<D: Float> From<Band<D>> for Expanse<D> {
    fn from(expanse: Band<D>) -> Self {
        Expanse::Band(expanse)
    }
}

impl<D: Float + 'static> Expanse<D> {
    pub fn kind(&self) -> ExpanseKind {
        match self {
            Expanse::Continuous(_) => ExpanseKind::Continuous,
            Expanse::Point(_) => ExpanseKind::Point,
            Expanse::Band(_) => ExpanseKind::Band,
        }
    }

    /// Routes to the variant's normalize. `None` means the lookup failed:
    /// an unknown label, or a value of the wrong kind for this variant.
    pub fn normalize_opt(&self, value: &Value<D>) -> Option<D> {
        match (self, value) {
            (Expanse::Continuous(e), Value::Number(v)) => Some(e.normalize(*v)),
            (Expanse::Point(e), Value::Label(l)) => e.normalize(l),
            (Expanse::Band(e), Value::Label(l)) => e.normalize(l),
            _ => None,
        }
    }

    /// Routes to the variant's normalize.
    ///
    /// # Panics
    ///
    /// Panics where [`normalize_opt`](Self::normalize_opt) returns `None`.
    pub fn normalize(&self, value: &Value<D>) -> D {
        self.normalize_opt(value).unwrap()
    }

    /// Routes to the variant's unnormalize. `None` means the position does
    /// not correspond to any label.
    pub fn unnormalize_opt(&self, value: D) -> Option<Value<D>> {
        match self {
            Expanse::Continuous(e) => Some(Value::Number(e.unnormalize(value))),
            Expanse::Point(e) => e.unnormalize(value).map(Value::from),
            Expanse::Band(e) => e.unnormalize(value).map(Value::from),
        }
    }

    /// Routes to the variant's unnormalize.
    ///
    /// # Panics
    ///
    /// Panics where [`unnormalize_opt`](Self::unnormalize_opt) returns
    /// `None`.
    pub fn unnormalize(&self, value: D) -> Value<D> {
        self.unnormalize_opt(value).unwrap()
    }

    /// Tick values in domain space: pretty breaks for continuous expanses,
    /// the labels verbatim for categorical ones.
    pub fn breaks(&self) -> Vec<Value<D>> {
        match self {
            Expanse::Continuous(e) => e.breaks().into_iter().map(Value::Number).collect(),
            Expanse::Point(e) => e.breaks().iter().cloned().map(Value::Label).collect(),
            Expanse::Band(e) => e.breaks().iter().cloned().map(Value::Label).collect(),
        }
    }

    /// Applies a field patch to the live expanse and re-checks every
    /// invariant. If the patch reports an error or leaves the expanse
    /// invalid, it is rolled back to its pre-patch state, so a bad patch
    /// cannot leave degenerate state behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use vidde::{Continuous, Expanse};
    ///
    /// let mut expanse = Expanse::from(Continuous::new(0.0, 10.0).unwrap());
    /// expanse
    ///     .set(|e| {
    ///         if let Expanse::Continuous(c) = e {
    ///             c.set_margins(0.1, 0.9)?;
    ///         }
    ///         Ok(())
    ///     })
    ///     .unwrap();
    ///
    /// // A degenerate patch is rejected and rolled back.
    /// let result = expanse.set(|e| {
    ///     if let Expanse::Continuous(c) = e {
    ///         c.set_bounds(3.0, 3.0)?;
    ///     }
    ///     Ok(())
    /// });
    /// assert!(result.is_err());
    /// ```
    pub fn set<F>(&mut self, patch: F) -> Result<(), ExpanseError>
    where
        F: FnOnce(&mut Self) -> Result<(), ExpanseError>,
    {
        let snapshot = self.clone();
        if let Err(error) = patch(self).and_then(|_| self.validate()) {
            *self = snapshot;
            return Err(error);
        }
        Ok(())
    }

    /// Copies every field recorded at construction back onto the live
    /// expanse, undoing any sequence of `set`/`move_by`/`flip`/`zoom`/
    /// `reorder` calls.
    pub fn restore_defaults(&mut self) {
        match self {
            Expanse::Continuous(e) => e.restore_defaults(),
            Expanse::Point(e) => e.restore_defaults(),
            Expanse::Band(e) => e.restore_defaults(),
        }
    }

    /// Pans the visible window by a normalized amount. Direction-aware, so
    /// panning feels the same regardless of flip state.
    pub fn move_by(&mut self, amount: D) {
        let (zero, one, direction) = self.window_mut();
        let factor = direction.factor::<D>();
        *zero = *zero + factor * amount;
        *one = *one + factor * amount;
    }

    /// Inverts the axis without touching bounds or labels.
    pub fn flip(&mut self) {
        let (_, _, direction) = self.window_mut();
        *direction = direction.flipped();
    }

    /// Scales the margin window around a normalized anchor (window
    /// midpoint by default). Factors above one magnify; factors between
    /// zero and one shrink.
    pub fn zoom(&mut self, factor: D, anchor: Option<D>) -> Result<(), ExpanseError> {
        if factor <= D::zero() {
            return Err(ExpanseError::NonPositiveZoom(util::lossy_f64(factor)));
        }
        let half = D::from(0.5).unwrap();
        let anchor = anchor.unwrap_or(half);
        let (zero, one, _) = self.window_mut();
        *zero = anchor + (*zero - anchor) * factor;
        *one = anchor + (*one - anchor) * factor;
        Ok(())
    }

    /// Replaces the margin window, on any variant.
    ///
    /// # Errors
    ///
    /// Returns [`ExpanseError::DegenerateMargins`] when `zero == one`; a
    /// rejected call leaves the expanse untouched.
    pub fn set_margins(&mut self, zero: D, one: D) -> Result<(), ExpanseError> {
        if zero == one {
            return Err(ExpanseError::DegenerateMargins {
                zero: util::lossy_f64(zero),
                one: util::lossy_f64(one),
            });
        }
        let (z, o, _) = self.window_mut();
        *z = zero;
        *o = one;
        Ok(())
    }

    /// Permutes category labels in place.
    ///
    /// # Errors
    ///
    /// [`ExpanseError::KindMismatch`] on a continuous expanse, or
    /// [`ExpanseError::InvalidPermutation`] for a malformed index set.
    pub fn reorder(&mut self, indices: &[usize]) -> Result<(), ExpanseError> {
        let kind = self.kind();
        match self {
            Expanse::Continuous(_) => Err(ExpanseError::KindMismatch {
                op: "reorder",
                kind,
            }),
            Expanse::Point(e) => e.reorder(indices),
            Expanse::Band(e) => e.reorder(indices),
        }
    }

    /// The live margin window and direction.
    pub fn window(&self) -> (D, D, Direction) {
        match self {
            Expanse::Continuous(e) => (e.zero(), e.one(), e.direction()),
            Expanse::Point(e) => (e.zero(), e.one(), e.direction()),
            Expanse::Band(e) => (e.zero(), e.one(), e.direction()),
        }
    }

    fn window_mut(&mut self) -> (&mut D, &mut D, &mut Direction) {
        match self {
            Expanse::Continuous(e) => e.window_mut(),
            Expanse::Point(e) => e.window_mut(),
            Expanse::Band(e) => e.window_mut(),
        }
    }

    fn validate(&self) -> Result<(), ExpanseError> {
        match self {
            Expanse::Continuous(e) => e.validate(),
            Expanse::Point(e) => e.validate(),
            Expanse::Band(e) => e.validate(),
        }
    }
}
