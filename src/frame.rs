//! Mapping chart values onto a screen rectangle.
//!
//! A [`Frame`] pairs caller-supplied x/y domain expanses with continuous
//! codomains built from a pixel rectangle, producing one [`Scale`] per
//! axis. Screen y grows downward while chart y grows upward, so the y
//! codomain is flipped at construction; no special-cased inversion
//! arithmetic is needed anywhere else.
//!
//! # Examples
//!
//! ```
//! use vidde::{Continuous, Frame, ScreenRect, Value};
//!
//! let frame = Frame::new(
//!     ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 },
//!     Continuous::new(0.0, 100.0).unwrap(),
//!     Continuous::new(0.0, 50.0).unwrap(),
//! )
//! .unwrap();
//!
//! // The center of the data lands at the center of the screen.
//! let center = frame.to_screen(&Value::number(50.0), &Value::number(25.0));
//! assert_eq!(center.x, 400.0);
//! assert_eq!(center.y, 300.0);
//!
//! // The bottom of the chart is the bottom of the screen.
//! let bottom = frame.to_screen(&Value::number(0.0), &Value::number(0.0));
//! assert_eq!(bottom.y, 600.0);
//! ```

use num_traits::Float;

use crate::error::ExpanseError;
use crate::expanse::{Continuous, Expanse, Value};
use crate::scale::{ExpanseHandle, Scale};

/// A rectangle in screen/pixel coordinates, top-left origin.
#[derive(Debug, Clone, Copy)]
pub struct ScreenRect<D = f64> {
    /// X coordinate of the top-left corner in pixels.
    pub x: D,
    /// Y coordinate of the top-left corner in pixels.
    pub y: D,
    /// Width of the rectangle in pixels.
    pub width: D,
    /// Height of the rectangle in pixels.
    pub height: D,
}

/// A point in screen/pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint<D = f64> {
    pub x: D,
    pub y: D,
}

impl<D> ScreenPoint<D> {
    pub const fn new(x: D, y: D) -> Self {
        Self { x, y }
    }
}

/// Connects a pair of domain expanses to a screen rectangle.
///
/// The x and y [`Scale`]s are exposed directly, so anything that works on
/// a scale (breaks, linked-axis sharing, margin adjustment through the
/// codomain handle) works on a frame's axes too.
pub struct Frame<D: Float = f64> {
    rect: ScreenRect<D>,
    x: Scale<D>,
    y: Scale<D>,
}

impl<D: Float + 'static> Frame<D> {
    /// Builds a frame over `rect`. The x codomain spans the rect left to
    /// right; the y codomain spans it top to bottom and is constructed
    /// flipped, because chart y grows upward.
    ///
    /// # Errors
    ///
    /// Returns [`ExpanseError::DegenerateInterval`] for a zero-width or
    /// zero-height rectangle.
    pub fn new(
        rect: ScreenRect<D>,
        x_domain: impl Into<ExpanseHandle<D>>,
        y_domain: impl Into<ExpanseHandle<D>>,
    ) -> Result<Self, ExpanseError> {
        let x_codomain = Continuous::new(rect.x, rect.x + rect.width)?;

        let mut y_codomain = Expanse::from(Continuous::new(rect.y, rect.y + rect.height)?);
        y_codomain.flip();

        Ok(Self {
            rect,
            x: Scale::new(x_domain, x_codomain),
            y: Scale::new(y_domain, ExpanseHandle::new(y_codomain)),
        })
    }

    pub fn rect(&self) -> &ScreenRect<D> {
        &self.rect
    }

    pub fn x_scale(&self) -> &Scale<D> {
        &self.x
    }

    pub fn y_scale(&self) -> &Scale<D> {
        &self.y
    }

    /// Converts a pair of chart values to a pixel position. `None` when
    /// either lookup fails (unknown label, kind mismatch).
    pub fn to_screen_opt(&self, x: &Value<D>, y: &Value<D>) -> Option<ScreenPoint<D>> {
        let sx = self.x.pushforward_opt(x)?.as_number()?;
        let sy = self.y.pushforward_opt(y)?.as_number()?;
        Some(ScreenPoint::new(sx, sy))
    }

    /// Converts a pair of chart values to a pixel position.
    ///
    /// # Panics
    ///
    /// Panics where [`to_screen_opt`](Self::to_screen_opt) returns `None`.
    pub fn to_screen(&self, x: &Value<D>, y: &Value<D>) -> ScreenPoint<D> {
        self.to_screen_opt(x, y).unwrap()
    }

    /// Converts a pixel position back to chart values, for hit testing and
    /// brushing. `None` when a coordinate has no chart counterpart (e.g. a
    /// categorical axis position outside every band).
    pub fn from_screen_opt(&self, point: &ScreenPoint<D>) -> Option<(Value<D>, Value<D>)> {
        let x = self.x.pullback_opt(&Value::Number(point.x))?;
        let y = self.y.pullback_opt(&Value::Number(point.y))?;
        Some((x, y))
    }

    /// Converts a pixel position back to chart values.
    ///
    /// # Panics
    ///
    /// Panics where [`from_screen_opt`](Self::from_screen_opt) returns
    /// `None`.
    pub fn from_screen(&self, point: &ScreenPoint<D>) -> (Value<D>, Value<D>) {
        self.from_screen_opt(point).unwrap()
    }

    /// Moves the frame to a new rectangle without rebuilding the codomain
    /// expanses, so handles shared with other consumers stay valid.
    pub fn set_rect(&mut self, rect: ScreenRect<D>) -> Result<(), ExpanseError> {
        self.x.codomain().set(|e| {
            if let Expanse::Continuous(c) = e {
                c.set_bounds(rect.x, rect.x + rect.width)?;
            }
            Ok(())
        })?;
        self.y.codomain().set(|e| {
            if let Expanse::Continuous(c) = e {
                c.set_bounds(rect.y, rect.y + rect.height)?;
            }
            Ok(())
        })?;
        self.rect = rect;
        Ok(())
    }

    /// Applies a symmetric margin to both axes: normalized output occupies
    /// `[margin, 1 - margin]`, leaving pixel padding around the data.
    ///
    /// The margin is set on the domain expanses, so a domain shared with
    /// another frame is padded there too.
    pub fn set_margins(&mut self, margin: D) -> Result<(), ExpanseError> {
        let one = D::one() - margin;
        self.x.domain().set(|e| e.set_margins(margin, one))?;
        self.y.domain().set(|e| e.set_margins(margin, one))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expanse::Band;
    use approx::assert_relative_eq;

    fn basic_frame() -> Frame<f64> {
        Frame::new(
            ScreenRect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
            },
            Continuous::new(0.0, 100.0).unwrap(),
            Continuous::new(0.0, 50.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn center_maps_to_center() {
        let frame = basic_frame();
        let point = frame.to_screen(&Value::number(50.0), &Value::number(25.0));

        assert_eq!(point, ScreenPoint::new(400.0, 300.0));
    }

    #[test]
    fn y_axis_is_inverted() {
        let frame = basic_frame();

        let bottom = frame.to_screen(&Value::number(0.0), &Value::number(0.0));
        assert_eq!(bottom.y, 600.0);

        let top = frame.to_screen(&Value::number(0.0), &Value::number(50.0));
        assert_eq!(top.y, 0.0);
    }

    #[test]
    fn screen_round_trip() {
        let frame = basic_frame();
        let click = ScreenPoint::new(200.0, 450.0);

        let (x, y) = frame.from_screen(&click);
        assert_relative_eq!(x.as_number().unwrap(), 25.0, epsilon = 1e-9);
        assert_relative_eq!(y.as_number().unwrap(), 12.5, epsilon = 1e-9);

        let back = frame.to_screen(&x, &y);
        assert_relative_eq!(back.x, click.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, click.y, epsilon = 1e-9);
    }

    #[test]
    fn offset_rect_is_respected() {
        let frame = Frame::new(
            ScreenRect {
                x: 10.0,
                y: 20.0,
                width: 800.0,
                height: 400.0,
            },
            Continuous::new(100.0, 200.0).unwrap(),
            Continuous::new(-50.0, 50.0).unwrap(),
        )
        .unwrap();

        let point = frame.to_screen(&Value::number(150.0), &Value::number(0.0));
        assert_relative_eq!(point.x, 410.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 220.0, epsilon = 1e-9);
    }

    #[test]
    fn categorical_x_axis() {
        let frame = Frame::new(
            ScreenRect {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 100.0,
            },
            Band::<f64>::new(["a", "b"]).unwrap(),
            Continuous::new(0.0, 1.0).unwrap(),
        )
        .unwrap();

        let point = frame.to_screen(&Value::from("a"), &Value::number(0.0));
        assert_relative_eq!(point.x, 100.0, epsilon = 1e-9);

        assert_eq!(frame.to_screen_opt(&Value::from("z"), &Value::number(0.0)), None);
    }

    #[test]
    fn resize_preserves_shared_codomain_handles() {
        let mut frame = basic_frame();
        let x_codomain = frame.x_scale().codomain().clone();

        frame
            .set_rect(ScreenRect {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 300.0,
            })
            .unwrap();

        // The pre-resize handle observes the new bounds.
        assert_eq!(x_codomain.unnormalize(1.0), Value::Number(400.0));
    }

    #[test]
    fn margins_pad_the_drawing_area() {
        let mut frame = basic_frame();
        frame.set_margins(0.1).unwrap();

        let left = frame.to_screen(&Value::number(0.0), &Value::number(25.0));
        assert_relative_eq!(left.x, 80.0, epsilon = 1e-9);

        let bottom = frame.to_screen(&Value::number(50.0), &Value::number(0.0));
        assert_relative_eq!(bottom.y, 540.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_resize_rejected() {
        let mut frame = basic_frame();
        let result = frame.set_rect(ScreenRect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 600.0,
        });
        assert!(result.is_err());

        // The old geometry is still in effect.
        let point = frame.to_screen(&Value::number(50.0), &Value::number(25.0));
        assert_eq!(point, ScreenPoint::new(400.0, 300.0));
    }

    #[test]
    fn degenerate_rect_rejected() {
        let result = Frame::new(
            ScreenRect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 600.0,
            },
            Continuous::new(0.0, 1.0).unwrap(),
            Continuous::new(0.0, 1.0).unwrap(),
        );
        assert!(result.is_err());
    }
}
