use std::fmt;
use std::rc::Rc;

use num_traits::Float;

use super::breaks::{pretty_breaks, DEFAULT_BREAK_COUNT};
use super::{util, Direction};
use crate::error::ExpanseError;

type TransformFn<D> = Rc<dyn Fn(D) -> D>;

/// Continuous expanse: a numeric domain `[min, max]` mapped onto a
/// normalized `[0, 1]` interval.
///
/// This is the workhorse variant for numeric axes. Beyond the plain affine
/// mapping it carries:
///
/// - **Margins** (`zero`/`one`): the sub-interval of `[0, 1]` that
///   normalized values actually occupy, for visual padding.
/// - **Direction**: a flip applied to the normalized value, for inverted
///   axes.
/// - **A transform pair** (`trans`/`inv`): mutually inverse functions
///   applied around the affine step, turning the same machinery into a
///   sqrt, log, or any other monotone scale.
///
/// # Type Parameters
///
/// - `D`: domain type, any [`Float`] (defaults to `f64`)
///
/// # No clamping
///
/// Values outside `[min, max]` are *not* clamped; they extrapolate linearly
/// past the margin window so a renderer can decide how to treat
/// slightly-out-of-range points.
///
/// # Transform contract
///
/// `trans` and `inv` must be exact inverses of each other over
/// `[min, max]`. This is a caller contract and is not validated; a
/// mismatched pair produces incorrect (but finite) output.
///
/// # Examples
///
/// ```
/// use vidde::Continuous;
///
/// let expanse = Continuous::new(0.0, 100.0).unwrap();
/// assert_eq!(expanse.normalize(50.0), 0.5);
/// assert_eq!(expanse.unnormalize(0.25), 25.0);
///
/// // Out-of-range values extrapolate.
/// assert_eq!(expanse.normalize(150.0), 1.5);
/// ```
///
/// A square-root scale:
///
/// ```
/// use vidde::Continuous;
///
/// let expanse = Continuous::new(1.0, 16.0)
///     .unwrap()
///     .with_transform(|v: f64| v.sqrt(), |v| v * v);
///
/// // (sqrt(4) - sqrt(1)) / (sqrt(16) - sqrt(1)) = 1/3
/// assert!((expanse.normalize(4.0) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Continuous<D: Float = f64> {
    min: D,
    max: D,
    zero: D,
    one: D,
    direction: Direction,
    trans: TransformFn<D>,
    inv: TransformFn<D>,
    defaults: ContinuousDefaults<D>,
}

/// Snapshot of the mutable fields, captured at construction.
#[derive(Clone)]
struct ContinuousDefaults<D: Float> {
    min: D,
    max: D,
    zero: D,
    one: D,
    direction: Direction,
    trans: TransformFn<D>,
    inv: TransformFn<D>,
}

impl<D: Float + 'static> Continuous<D> {
    /// Creates a continuous expanse over `[min, max]` with full margins,
    /// forward direction, and the identity transform.
    ///
    /// # Errors
    ///
    /// Returns [`ExpanseError::DegenerateInterval`] when `min == max`;
    /// a zero-width domain would make normalization divide by zero.
    pub fn new(min: D, max: D) -> Result<Self, ExpanseError> {
        if min == max {
            return Err(ExpanseError::DegenerateInterval {
                lo: util::lossy_f64(min),
                hi: util::lossy_f64(max),
            });
        }

        let identity: TransformFn<D> = Rc::new(|v| v);
        let defaults = ContinuousDefaults {
            min,
            max,
            zero: D::zero(),
            one: D::one(),
            direction: Direction::Forwards,
            trans: identity.clone(),
            inv: identity.clone(),
        };

        Ok(Self {
            min,
            max,
            zero: D::zero(),
            one: D::one(),
            direction: Direction::Forwards,
            trans: identity.clone(),
            inv: identity,
            defaults,
        })
    }

    /// Installs a `trans`/`inv` pair and re-snapshots the defaults so a
    /// later reset keeps the transform.
    ///
    /// The pair must be mutual inverses over `[min, max]`; see the type
    /// docs for the contract.
    pub fn with_transform<T, I>(mut self, trans: T, inv: I) -> Self
    where
        T: Fn(D) -> D + 'static,
        I: Fn(D) -> D + 'static,
    {
        self.trans = Rc::new(trans);
        self.inv = Rc::new(inv);
        self.defaults.trans = self.trans.clone();
        self.defaults.inv = self.inv.clone();
        self
    }

    /// Maps a domain value into normalized space: transform, rescale to a
    /// fraction of the transformed domain, remap into the margin window,
    /// then apply the direction. Out-of-range input extrapolates.
    pub fn normalize(&self, value: D) -> D {
        let t_min = (self.trans)(self.min);
        let range = (self.trans)(self.max) - t_min;
        let pct = ((self.trans)(value) - t_min) / range;
        self.direction.apply(util::remap(pct, self.zero, self.one))
    }

    /// Exact inverse of [`normalize`](Self::normalize), up to floating
    /// point.
    pub fn unnormalize(&self, value: D) -> D {
        let pct = util::unmap(self.direction.apply(value), self.zero, self.one);
        let t_min = (self.trans)(self.min);
        let range = (self.trans)(self.max) - t_min;
        (self.inv)(t_min + pct * range)
    }

    /// Pretty breaks over the domain, with a soft target of four ticks.
    pub fn breaks(&self) -> Vec<D> {
        let (lo, hi) = util::sorted_pair(self.min, self.max);
        pretty_breaks(lo, hi, DEFAULT_BREAK_COUNT)
    }

    /// Replaces the domain bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ExpanseError::DegenerateInterval`] when `min == max`; a
    /// rejected call leaves the expanse untouched.
    pub fn set_bounds(&mut self, min: D, max: D) -> Result<(), ExpanseError> {
        if min == max {
            return Err(ExpanseError::DegenerateInterval {
                lo: util::lossy_f64(min),
                hi: util::lossy_f64(max),
            });
        }
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Replaces the margin window.
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
        self.zero = zero;
        self.one = one;
        Ok(())
    }

    /// Replaces the transform pair in place, leaving the defaults snapshot
    /// untouched (a reset reverts to the construction-time pair).
    pub fn set_transform<T, I>(&mut self, trans: T, inv: I)
    where
        T: Fn(D) -> D + 'static,
        I: Fn(D) -> D + 'static,
    {
        self.trans = Rc::new(trans);
        self.inv = Rc::new(inv);
    }

    pub fn min(&self) -> D {
        self.min
    }

    pub fn max(&self) -> D {
        self.max
    }

    pub fn zero(&self) -> D {
        self.zero
    }

    pub fn one(&self) -> D {
        self.one
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn window_mut(&mut self) -> (&mut D, &mut D, &mut Direction) {
        (&mut self.zero, &mut self.one, &mut self.direction)
    }

    pub(crate) fn validate(&self) -> Result<(), ExpanseError> {
        if self.min == self.max {
            return Err(ExpanseError::DegenerateInterval {
                lo: util::lossy_f64(self.min),
                hi: util::lossy_f64(self.max),
            });
        }
        if self.zero == self.one {
            return Err(ExpanseError::DegenerateMargins {
                zero: util::lossy_f64(self.zero),
                one: util::lossy_f64(self.one),
            });
        }
        Ok(())
    }

    pub(crate) fn restore_defaults(&mut self) {
        self.min = self.defaults.min;
        self.max = self.defaults.max;
        self.zero = self.defaults.zero;
        self.one = self.defaults.one;
        self.direction = self.defaults.direction;
        self.trans = self.defaults.trans.clone();
        self.inv = self.defaults.inv.clone();
    }
}

// The transform closures are opaque, so Debug covers the numeric fields
// only.
impl<D: Float + fmt::Debug> fmt::Debug for Continuous<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuous")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("zero", &self.zero)
            .field("one", &self.one)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
