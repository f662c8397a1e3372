use num_traits::Float;

use super::point::{self, CategoryDefaults};
use super::{util, Direction};
use crate::error::ExpanseError;

/// Band expanse: ordered category labels placed at the midpoints of
/// equal-width bands.
///
/// With `n` labels, label `i` normalizes to `(i + 0.5) / n`. Unlike
/// [`Point`](super::Point), which spreads labels across the whole interval,
/// a band expanse leaves a half-band margin at each end. This is the usual
/// layout for bar-chart category axes, where each category owns a slot and
/// the bar is drawn at the slot's center.
///
/// # Examples
///
/// ```
/// use vidde::Band;
///
/// let expanse = Band::<f64>::new(["a", "b"]).unwrap();
/// assert_eq!(expanse.normalize("a"), Some(0.25));
/// assert_eq!(expanse.normalize("b"), Some(0.75));
/// ```
#[derive(Debug, Clone)]
pub struct Band<D: Float = f64> {
    labels: Vec<String>,
    zero: D,
    one: D,
    direction: Direction,
    defaults: CategoryDefaults<D>,
}

impl<D: Float> Band<D> {
    /// Creates a band expanse over the given labels with full margins and
    /// forward direction. Validation rules are shared with
    /// [`Point::new`](super::Point::new).
    pub fn new<I, S>(labels: I) -> Result<Self, ExpanseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        point::validate_labels(&labels)?;
        let defaults = CategoryDefaults::capture(&labels);

        Ok(Self {
            labels,
            zero: D::zero(),
            one: D::one(),
            direction: Direction::Forwards,
            defaults,
        })
    }

    /// Maps a label to the midpoint of its band, or `None` if absent.
    pub fn normalize(&self, label: &str) -> Option<D> {
        let index = self.labels.iter().position(|l| l == label)?;
        let half = D::from(0.5).unwrap();
        let len = D::from(self.labels.len()).unwrap();
        let pct = (D::from(index).unwrap() + half) / len;
        Some(self.direction.apply(util::remap(pct, self.zero, self.one)))
    }

    /// Maps a normalized position back to the label whose band midpoint is
    /// nearest, or `None` for positions outside the band row.
    pub fn unnormalize(&self, value: D) -> Option<&str> {
        let pct = util::unmap(self.direction.apply(value), self.zero, self.one);
        let half = D::from(0.5).unwrap();
        let len = D::from(self.labels.len()).unwrap();
        let index = (pct * len - half).round().to_usize()?;
        self.labels.get(index).map(String::as_str)
    }

    /// Permutes the labels in place; shares the point implementation.
    pub fn reorder(&mut self, indices: &[usize]) -> Result<(), ExpanseError> {
        point::apply_permutation(&mut self.labels, indices)
    }

    /// Every category is a tick, as for point expanses.
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
        point::validate_labels(&self.labels)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn two_labels_land_on_quarter_points() {
        let expanse = Band::<f64>::new(["a", "b"]).unwrap();

        assert_eq!(expanse.normalize("a"), Some(0.25));
        assert_eq!(expanse.normalize("b"), Some(0.75));
    }

    #[test]
    fn four_labels_center_in_their_bands() {
        let expanse = Band::<f64>::new(["a", "b", "c", "d"]).unwrap();

        assert_relative_eq!(expanse.normalize("a").unwrap(), 0.125);
        assert_relative_eq!(expanse.normalize("d").unwrap(), 0.875);
    }

    #[test]
    fn round_trip_is_exact_on_labels() {
        let expanse = Band::<f64>::new(["a", "b", "c"]).unwrap();

        for label in ["a", "b", "c"] {
            let t = expanse.normalize(label).unwrap();
            assert_eq!(expanse.unnormalize(t), Some(label));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        let expanse = Band::<f64>::new(["a", "b"]).unwrap();
        assert_eq!(expanse.normalize("z"), None);
    }

    #[test]
    fn out_of_row_position_is_none() {
        let expanse = Band::<f64>::new(["a", "b"]).unwrap();

        assert_eq!(expanse.unnormalize(2.0), None);
        assert_eq!(expanse.unnormalize(-0.5), None);
    }

    #[test]
    fn single_label_centers_in_the_window() {
        let expanse = Band::<f64>::new(["only"]).unwrap();

        assert_eq!(expanse.normalize("only"), Some(0.5));
        assert_eq!(expanse.unnormalize(0.5), Some("only"));
    }

    #[test]
    fn reorder_shares_point_semantics() {
        let mut expanse = Band::<f64>::new(["a", "b", "c"]).unwrap();
        expanse.reorder(&[1, 2, 0]).unwrap();

        assert_eq!(expanse.labels(), ["b", "c", "a"]);
        assert!(expanse.reorder(&[0, 0, 1]).is_err());
    }
}
