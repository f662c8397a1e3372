//! Shared expanse handles and the domain/codomain scale pairing.
//!
//! Interactive plots mutate their axes in place: panning, zooming,
//! flipping, reordering categories. Several scales can point at the *same*
//! axis (a linked-axis dashboard shares one x expanse between every panel),
//! so expanses live behind a cheap, clonable [`ExpanseHandle`] and scales
//! only hold handles. The core is fully synchronous and single-threaded,
//! which is why the handle is `Rc<RefCell<_>>` rather than anything
//! heavier.

use std::cell::RefCell;
use std::rc::Rc;

use num_traits::Float;

use crate::error::ExpanseError;
use crate::expanse::{Band, Continuous, Expanse, ExpanseKind, Point, Value};

/// A shared, interiorly mutable reference to an [`Expanse`].
///
/// Cloning a handle does not copy the expanse: every clone observes every
/// mutation. This is the mechanism behind linked axes.
///
/// # Examples
///
/// ```
/// use vidde::{Continuous, ExpanseHandle, Value};
///
/// let axis = ExpanseHandle::from(Continuous::new(0.0, 10.0).unwrap());
/// let linked = axis.clone();
///
/// axis.move_by(0.5);
/// // The pan is visible through the other handle.
/// assert_eq!(linked.normalize(&Value::number(0.0)), 0.5);
/// ```
pub struct ExpanseHandle<D: Float = f64> {
    inner: Rc<RefCell<Expanse<D>>>,
}

impl<D: Float> Clone for ExpanseHandle<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: Float + 'static> ExpanseHandle<D> {
    pub fn new(expanse: Expanse<D>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(expanse)),
        }
    }

    /// Runs a closure against the underlying expanse, for reads the
    /// delegating methods below do not cover.
    pub fn with<R>(&self, f: impl FnOnce(&Expanse<D>) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn kind(&self) -> ExpanseKind {
        self.inner.borrow().kind()
    }

    /// See [`Expanse::normalize_opt`].
    pub fn normalize_opt(&self, value: &Value<D>) -> Option<D> {
        self.inner.borrow().normalize_opt(value)
    }

    /// See [`Expanse::normalize`].
    pub fn normalize(&self, value: &Value<D>) -> D {
        self.normalize_opt(value).unwrap()
    }

    /// See [`Expanse::unnormalize_opt`].
    pub fn unnormalize_opt(&self, value: D) -> Option<Value<D>> {
        self.inner.borrow().unnormalize_opt(value)
    }

    /// See [`Expanse::unnormalize`].
    pub fn unnormalize(&self, value: D) -> Value<D> {
        self.unnormalize_opt(value).unwrap()
    }

    /// See [`Expanse::breaks`].
    pub fn breaks(&self) -> Vec<Value<D>> {
        self.inner.borrow().breaks()
    }

    /// See [`Expanse::set`].
    pub fn set(
        &self,
        patch: impl FnOnce(&mut Expanse<D>) -> Result<(), ExpanseError>,
    ) -> Result<(), ExpanseError> {
        self.inner.borrow_mut().set(patch)
    }

    /// See [`Expanse::restore_defaults`].
    pub fn restore_defaults(&self) {
        self.inner.borrow_mut().restore_defaults();
    }

    /// See [`Expanse::move_by`].
    pub fn move_by(&self, amount: D) {
        self.inner.borrow_mut().move_by(amount);
    }

    /// See [`Expanse::flip`].
    pub fn flip(&self) {
        self.inner.borrow_mut().flip();
    }

    /// See [`Expanse::zoom`].
    pub fn zoom(&self, factor: D, anchor: Option<D>) -> Result<(), ExpanseError> {
        self.inner.borrow_mut().zoom(factor, anchor)
    }

    /// See [`Expanse::reorder`].
    pub fn reorder(&self, indices: &[usize]) -> Result<(), ExpanseError> {
        self.inner.borrow_mut().reorder(indices)
    }
}

impl<D: Float + 'static> From<Expanse<D>> for ExpanseHandle<D> {
    fn from(expanse: Expanse<D>) -> Self {
        Self::new(expanse)
    }
}

impl<D: Float + 'static> From<Continuous<D>> for ExpanseHandle<D> {
    fn from(expanse: Continuous<D>) -> Self {
        Self::new(Expanse::from(expanse))
    }
}

impl<D: Float + 'static> From<Point<D>> for ExpanseHandle<D> {
    fn from(expanse: Point<D>) -> Self {
        Self::new(Expanse::from(expanse))
    }
}

impl<D: Float + 'static> From<Band<D>> for ExpanseHandle<D> {
    fn from(expanse: Band<D>) -> Self {
        Self::new(Expanse::from(expanse))
    }
}

/// Tick labels in domain space paired with where each lands in codomain
/// space.
#[derive(Debug, Clone, PartialEq)]
pub struct Breaks<D> {
    pub labels: Vec<Value<D>>,
    pub positions: Vec<D>,
}

/// A bidirectional conversion between two expanses.
///
/// A scale pairs a *domain* expanse (data space) with a *codomain* expanse
/// (visual space) and converts through the normalized interval in both
/// directions. It is a lightweight, freely clonable pairing: all mutable
/// state lives in the shared expanses.
///
/// # Examples
///
/// ```
/// use vidde::{Continuous, Point, Scale, Value};
///
/// let scale = Scale::new(
///     Point::<f64>::new(["a", "b", "c", "d"]).unwrap(),
///     Continuous::new(1.0, 10.0).unwrap(),
/// );
///
/// // "b" normalizes to 1/3, which lands at 1 + (1/3) * 9 = 4.
/// let position = scale.pushforward(&Value::from("b"));
/// assert!((position.as_number().unwrap() - 4.0).abs() < 1e-12);
///
/// // And back again.
/// assert_eq!(scale.pullback(&Value::number(4.0)), Value::from("b"));
/// ```
pub struct Scale<D: Float = f64> {
    domain: ExpanseHandle<D>,
    codomain: ExpanseHandle<D>,
}

impl<D: Float> Clone for Scale<D> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
        }
    }
}

impl<D: Float + 'static> Scale<D> {
    /// Pairs a domain and a codomain. Accepts handles or bare expanses;
    /// pass a cloned handle to share an axis between scales.
    pub fn new(
        domain: impl Into<ExpanseHandle<D>>,
        codomain: impl Into<ExpanseHandle<D>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            codomain: codomain.into(),
        }
    }

    pub fn domain(&self) -> &ExpanseHandle<D> {
        &self.domain
    }

    pub fn codomain(&self) -> &ExpanseHandle<D> {
        &self.codomain
    }

    /// Converts a domain-space value into codomain space, e.g. a data
    /// coordinate into a pixel coordinate.
    pub fn pushforward_opt(&self, value: &Value<D>) -> Option<Value<D>> {
        let t = self.domain.normalize_opt(value)?;
        self.codomain.unnormalize_opt(t)
    }

    /// Converts a domain-space value into codomain space.
    ///
    /// # Panics
    ///
    /// Panics where [`pushforward_opt`](Self::pushforward_opt) returns
    /// `None`.
    pub fn pushforward(&self, value: &Value<D>) -> Value<D> {
        self.pushforward_opt(value).unwrap()
    }

    /// Converts a codomain-space value back into domain space, e.g. a
    /// mouse position into a data coordinate for brushing.
    pub fn pullback_opt(&self, value: &Value<D>) -> Option<Value<D>> {
        let t = self.codomain.normalize_opt(value)?;
        self.domain.unnormalize_opt(t)
    }

    /// Converts a codomain-space value back into domain space.
    ///
    /// # Panics
    ///
    /// Panics where [`pullback_opt`](Self::pullback_opt) returns `None`.
    pub fn pullback(&self, value: &Value<D>) -> Value<D> {
        self.pullback_opt(value).unwrap()
    }

    /// Domain breaks paired with their numeric codomain positions.
    ///
    /// Breaks whose position cannot be computed (or whose codomain value
    /// is not numeric) are dropped, keeping the two vectors aligned.
    pub fn breaks(&self) -> Breaks<D> {
        let mut labels = Vec::new();
        let mut positions = Vec::new();
        for label in self.domain.breaks() {
            let position = self
                .pushforward_opt(&label)
                .and_then(|value| value.as_number());
            if let Some(position) = position {
                labels.push(label);
                positions.push(position);
            }
        }
        Breaks { labels, positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn categorical_scale() -> Scale<f64> {
        Scale::new(
            Point::<f64>::new(["a", "b", "c", "d"]).unwrap(),
            Continuous::new(1.0, 10.0).unwrap(),
        )
    }

    #[test]
    fn pushforward_composes_through_normalized_space() {
        let scale = categorical_scale();
        let position = scale.pushforward(&Value::from("b"));
        assert_relative_eq!(position.as_number().unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn pullback_inverts_pushforward() {
        let scale = categorical_scale();

        for label in ["a", "b", "c", "d"] {
            let forward = scale.pushforward(&Value::from(label));
            assert_eq!(scale.pullback(&forward), Value::from(label));
        }
    }

    #[test]
    fn pushforward_of_unknown_label_is_none() {
        let scale = categorical_scale();
        assert_eq!(scale.pushforward_opt(&Value::from("z")), None);
    }

    #[test]
    fn continuous_to_continuous() {
        let scale = Scale::new(
            Continuous::new(0.0, 100.0).unwrap(),
            Continuous::new(0.0, 800.0).unwrap(),
        );

        let position = scale.pushforward(&Value::number(25.0));
        assert_relative_eq!(position.as_number().unwrap(), 200.0, epsilon = 1e-9);

        let back = scale.pullback(&Value::number(200.0));
        assert_relative_eq!(back.as_number().unwrap(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn breaks_pair_labels_with_positions() {
        let scale = Scale::new(
            Continuous::new(0.0, 23.0).unwrap(),
            Continuous::new(0.0, 460.0).unwrap(),
        );

        let breaks = scale.breaks();
        assert_eq!(
            breaks.labels,
            vec![
                Value::Number(0.0),
                Value::Number(5.0),
                Value::Number(10.0),
                Value::Number(15.0),
                Value::Number(20.0),
            ]
        );
        assert_eq!(breaks.positions.len(), 5);
        assert_relative_eq!(breaks.positions[1], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn breaks_are_idempotent_without_mutation() {
        let scale = categorical_scale();
        assert_eq!(scale.breaks(), scale.breaks());
    }

    #[test]
    fn shared_expanse_links_scales() {
        let shared_x = ExpanseHandle::from(Continuous::new(0.0, 100.0).unwrap());
        let left = Scale::new(shared_x.clone(), Continuous::new(0.0, 800.0).unwrap());
        let right = Scale::new(shared_x.clone(), Continuous::new(0.0, 400.0).unwrap());

        let before = right.pushforward(&Value::number(50.0));
        assert_relative_eq!(before.as_number().unwrap(), 200.0, epsilon = 1e-9);

        // Pan through the left scale's domain handle.
        left.domain().move_by(0.5);

        // The right scale sees the shifted window immediately.
        let after = right.pushforward(&Value::number(50.0));
        assert_relative_eq!(after.as_number().unwrap(), 400.0, epsilon = 1e-9);
    }

    #[test]
    fn restore_defaults_resets_linked_axes() {
        let shared = ExpanseHandle::from(Continuous::new(0.0, 100.0).unwrap());
        let scale = Scale::new(shared.clone(), Continuous::new(0.0, 800.0).unwrap());

        shared.move_by(0.25);
        shared.flip();
        scale.domain().restore_defaults();

        let position = scale.pushforward(&Value::number(50.0));
        assert_relative_eq!(position.as_number().unwrap(), 400.0, epsilon = 1e-9);
    }

    #[test]
    fn flipped_codomain_mirrors_positions() {
        let scale = Scale::new(
            Continuous::new(0.0, 100.0).unwrap(),
            Continuous::new(0.0, 800.0).unwrap(),
        );
        scale.codomain().flip();

        let position = scale.pushforward(&Value::number(25.0));
        assert_relative_eq!(position.as_number().unwrap(), 600.0, epsilon = 1e-9);
    }
}
