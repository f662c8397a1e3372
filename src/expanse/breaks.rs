//! Pretty break generation for numeric axes.

use num_traits::Float;

use super::util;

/// Soft target for the number of breaks on a continuous expanse.
pub(crate) const DEFAULT_BREAK_COUNT: usize = 4;

/// Hard cap on emitted breaks, in case a caller supplies a pathological
/// count or range.
const MAX_BREAKS: usize = 10_000;

/// Computes aesthetically round tick values for a numeric range.
///
/// The raw step `(max - min) / count` is snapped to the nearest "neat" unit:
/// a multiplier from `{1, 2, 4, 5, 10}` applied to the step's decade, chosen
/// by squared distance (ties resolved in list order). Every multiple of that
/// unit inside the range is emitted, bounds inclusive.
///
/// `count` is a soft target: the result may hold more or fewer values, and
/// its endpoints may sit strictly inside `[min, max]`. Ticks landing on
/// round numbers wins over hitting the count exactly.
///
/// # Examples
///
/// ```
/// use vidde::pretty_breaks;
///
/// // 23 / 4 = 5.75, snapped to the neat unit 5.
/// assert_eq!(pretty_breaks(0.0, 23.0, 4), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
/// ```
pub fn pretty_breaks<D: Float>(min: D, max: D, count: usize) -> Vec<D> {
    let (lo, hi) = util::sorted_pair(min, max);
    if lo == hi || count == 0 {
        return vec![lo];
    }

    let gross = (hi - lo) / D::from(count).unwrap();
    let ten = D::from(10).unwrap();
    let decade = ten.powf(gross.log10().floor());

    let mut unit = decade;
    let mut best = (unit - gross) * (unit - gross);
    for m in [2, 4, 5, 10] {
        let candidate = decade * D::from(m).unwrap();
        let score = (candidate - gross) * (candidate - gross);
        if score < best {
            best = score;
            unit = candidate;
        }
    }

    // Work in integer multiples of the unit. The slack keeps a bound that
    // lands exactly on a multiple from being rounded off by the division.
    let slack = D::epsilon() * D::from(100).unwrap();
    let first = {
        let r = lo / unit;
        (r - r.abs() * slack - slack).ceil()
    };
    let last = {
        let r = hi / unit;
        (r + r.abs() * slack + slack).floor()
    };

    let mut out = Vec::new();
    for i in 0..MAX_BREAKS {
        let index = first + D::from(i).unwrap();
        if index > last {
            break;
        }
        out.push(index * unit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_neat_unit_of_five() {
        assert_eq!(pretty_breaks(0.0, 23.0, 4), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn emits_round_decades() {
        assert_eq!(
            pretty_breaks(0.0, 100.0, 4),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }

    #[test]
    fn bounds_may_sit_inside_the_range() {
        // 34.6 / 4 = 8.65 snaps up to 10; only interior multiples survive.
        assert_eq!(pretty_breaks(13.2, 47.8, 4), vec![20.0, 30.0, 40.0]);
    }

    #[test]
    fn handles_reversed_bounds() {
        assert_eq!(pretty_breaks(23.0, 0.0, 4), pretty_breaks(0.0, 23.0, 4));
    }

    #[test]
    fn keeps_endpoint_multiples_despite_rounding() {
        // 1.0 / 0.2 computes just below 5 in floating point; the endpoint
        // break must survive anyway.
        let breaks = pretty_breaks(0.0, 1.0, 4);
        assert_eq!(breaks.len(), 6);
        assert!((breaks[1] - 0.2).abs() < 1e-12);
        assert!((breaks[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_yields_single_break() {
        assert_eq!(pretty_breaks(5.0, 5.0, 4), vec![5.0]);
    }

    #[test]
    fn negative_ranges() {
        assert_eq!(
            pretty_breaks(-23.0, 0.0, 4),
            vec![-20.0, -15.0, -10.0, -5.0, 0.0]
        );
    }
}
