//! Vidde (wide-open expanse): coordinate-transform core for charting
//!
//! `vidde` implements the mathematical foundations a plotting library sits
//! on: mapping data values onto a normalized [0, 1] interval and composing
//! such mappings into bidirectional data↔visual-space conversions. It does
//! not render anything and owns no data; it is a pure, embeddable
//! computation layer.
//!
//! # Core Concepts
//!
//! ## Expanses
//!
//! An [`Expanse`] is a one-dimensional mapping between a typed domain value
//! and the normalized interval. Three variants cover the usual axis kinds:
//!
//! - [`Continuous`] - numeric bounds, optionally with a nonlinear
//!   transform pair (sqrt, log, ...)
//! - [`Point`] - ordered categories at discrete positions
//! - [`Band`] - ordered categories centered in equal-width bands
//!
//! Every variant carries a margin window (`zero`/`one`), a [`Direction`]
//! flag for inverted axes, and a defaults snapshot so interactive state
//! (pan, zoom, flip, reorder) can be reset with `restore_defaults`.
//!
//! ## Scales
//!
//! A [`Scale`] pairs a domain expanse with a codomain expanse and converts
//! through normalized space in both directions: [`Scale::pushforward`]
//! for data→visual, [`Scale::pullback`] for visual→data. Expanses live
//! behind shared [`ExpanseHandle`]s, so two scales can reference the same
//! axis and observe each other's mutations (the mechanism behind linked
//! axes).
//!
//! ## Breaks
//!
//! [`Scale::breaks`] pairs tick labels in domain space with their codomain
//! positions. Numeric ticks come from [`pretty_breaks`], which snaps to
//! round units; categorical ticks are the labels themselves.
//!
//! # Examples
//!
//! ## A categorical scale
//!
//! ```
//! use vidde::{Continuous, Point, Scale, Value};
//!
//! let scale = Scale::new(
//!     Point::<f64>::new(["a", "b", "c", "d"]).unwrap(),
//!     Continuous::new(1.0, 10.0).unwrap(),
//! );
//!
//! let position = scale.pushforward(&Value::from("b"));
//! assert!((position.as_number().unwrap() - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Linked axes
//!
//! ```
//! use vidde::{Continuous, ExpanseHandle, Scale, Value};
//!
//! let shared_x = ExpanseHandle::from(Continuous::new(0.0, 100.0).unwrap());
//! let upper = Scale::new(shared_x.clone(), Continuous::new(0.0, 800.0).unwrap());
//! let lower = Scale::new(shared_x.clone(), Continuous::new(0.0, 400.0).unwrap());
//!
//! // Panning the shared axis moves both scales.
//! shared_x.move_by(0.1);
//! assert_eq!(upper.pushforward(&Value::number(0.0)), Value::Number(80.0));
//! assert_eq!(lower.pushforward(&Value::number(0.0)), Value::Number(40.0));
//! ```
//!
//! ## Pretty ticks
//!
//! ```
//! use vidde::pretty_breaks;
//!
//! assert_eq!(pretty_breaks(0.0, 23.0, 4), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
//! ```

pub mod error;
pub mod expanse;
pub mod frame;
pub mod scale;

pub use error::ExpanseError;
pub use expanse::{pretty_breaks, Band, Continuous, Direction, Expanse, ExpanseKind, Point, Value};
pub use frame::{Frame, ScreenPoint, ScreenRect};
pub use num_traits::Float;
pub use scale::{Breaks, ExpanseHandle, Scale};
