use std::collections::HashSet;

use num_traits::Float;

use super::{util, Direction};
use crate::error::ExpanseError;

/// Point expanse: an ordered sequence of unique category labels, each
/// mapped to a discrete position spanning the full normalized interval.
///
/// With `n` labels, label `i` normalizes to `i / (n - 1)`: the first label
/// sits at the start of the margin window and the last at its end. Compare
/// [`Band`](super::Band), which centers labels inside equal-width bands.
///
/// Lookup of a label that is not present returns `None` rather than a
/// sentinel, so a failed lookup is distinguishable from a legitimate
/// coordinate.
///
/// # Examples
///
/// ```
/// use vidde::Point;
///
/// let expanse = Point::<f64>::new(["a", "b", "c", "d"]).unwrap();
/// assert_eq!(expanse.normalize("a"), Some(0.0));
/// assert_eq!(expanse.normalize("b"), Some(1.0 / 3.0));
/// assert_eq!(expanse.normalize("z"), None);
/// assert_eq!(expanse.unnormalize(1.0), Some("d"));
/// ```
#[derive(Debug, Clone)]
pub struct Point<D: Float = f64> {
    labels: Vec<String>,
    zero: D,
    one: D,
    direction: Direction,
    defaults: CategoryDefaults<D>,
}

/// Snapshot of the mutable fields, captured at construction. The label
/// list is deep-copied so later reorders cannot corrupt it.
#[derive(Debug, Clone)]
pub(crate) struct CategoryDefaults<D: Float> {
    pub(crate) labels: Vec<String>,
    pub(crate) zero: D,
    pub(crate) one: D,
    pub(crate) direction: Direction,
}

impl<D: Float> CategoryDefaults<D> {
    pub(crate) fn capture(labels: &[String]) -> Self {
        Self {
            labels: labels.to_vec(),
            zero: D::zero(),
            one: D::one(),
            direction: Direction::Forwards,
        }
    }
}

/// Rejects empty label lists and duplicate entries; duplicates would make
/// index-based lookup ambiguous.
pub(crate) fn validate_labels(labels: &[String]) -> Result<(), ExpanseError> {
    if labels.is_empty() {
        return Err(ExpanseError::EmptyLabels);
    }
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ExpanseError::DuplicateLabel(label.clone()));
        }
    }
    Ok(())
}

/// Applies a permutation to `labels` in place after checking it really is
/// one: same length, every index in range, no index repeated.
pub(crate) fn apply_permutation(
    labels: &mut Vec<String>,
    indices: &[usize],
) -> Result<(), ExpanseError> {
    let len = labels.len();
    let mut seen = vec![false; len];
    if indices.len() != len {
        return Err(ExpanseError::InvalidPermutation { len });
    }
    for &index in indices {
        if index >= len || seen[index] {
            return Err(ExpanseError::InvalidPermutation { len });
        }
        seen[index] = true;
    }

    let reordered: Vec<String> = indices.iter().map(|&i| labels[i].clone()).collect();
    labels.clear();
    labels.extend(reordered);
    Ok(())
}

impl<D: Float> Point<D> {
    /// Creates a point expanse over the given labels with full margins and
    /// forward direction.
    ///
    /// # Errors
    ///
    /// Returns [`ExpanseError::EmptyLabels`] for an empty list and
    /// [`ExpanseError::DuplicateLabel`] when a label repeats.
    pub fn new<I, S>(labels: I) -> Result<Self, ExpanseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        validate_labels(&labels)?;
        let defaults = CategoryDefaults::capture(&labels);

        Ok(Self {
            labels,
            zero: D::zero(),
            one: D::one(),
            direction: Direction::Forwards,
            defaults,
        })
    }

    /// Maps a label to its normalized position, or `None` if the label is
    /// not present.
    pub fn normalize(&self, label: &str) -> Option<D> {
        let index = self.labels.iter().position(|l| l == label)?;
        // A single label has nowhere to spread; it sits at the window start.
        let denom = D::from(self.labels.len().saturating_sub(1).max(1)).unwrap();
        let pct = D::from(index).unwrap() / denom;
        Some(self.direction.apply(util::remap(pct, self.zero, self.one)))
    }

    /// Maps a normalized position back to the nearest label, or `None`
    /// when the position rounds to an index outside the label list (e.g.
    /// after panning a category out of the window).
    pub fn unnormalize(&self, value: D) -> Option<&str> {
        let pct = util::unmap(self.direction.apply(value), self.zero, self.one);
        let denom = D::from(self.labels.len().saturating_sub(1).max(1)).unwrap();
        let index = (pct * denom).round().to_usize()?;
        self.labels.get(index).map(String::as_str)
    }

    /// Permutes the labels in place for interactive category reordering.
    pub fn reorder(&mut self, indices: &[usize]) -> Result<(), ExpanseError> {
        apply_permutation(&mut self.labels, indices)
    }

    /// Every category is a tick.
    pub fn breaks(&self) -> &[String] {
        &self.labels
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
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
        validate_labels(&self.labels)?;
        if self.zero == self.one {
            return Err(ExpanseError::DegenerateMargins {
                zero: util::lossy_f64(self.zero),
                one: util::lossy_f64(self.one),
            });
        }
        Ok(())
    }

    pub(crate) fn restore_defaults(&mut self) {
        self.labels.clear();
        self.labels.extend(self.defaults.labels.iter().cloned());
        self.zero = self.defaults.zero;
        self.one = self.defaults.one;
        self.direction = self.defaults.direction;
    }
}
