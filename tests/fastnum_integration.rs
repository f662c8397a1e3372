use fastnum::decimal::D128;
use vidde::{Continuous, ExpanseHandle, Point, Scale, Value};

#[test]
fn continuous_expanse_with_decimal_domain() {
    let expanse = Continuous::new(D128::from(0), D128::from(100)).unwrap();

    let normalized = expanse.normalize(D128::from(50));
    assert!((normalized - D128::from(0.5)).abs() < D128::from(1e-10));

    let unnormalized = expanse.unnormalize(D128::from(0.5));
    assert!((unnormalized - D128::from(50)).abs() < D128::from(1e-10));
}

#[test]
fn decimal_margins_and_direction() {
    let mut expanse = Continuous::new(D128::from(0), D128::from(100)).unwrap();
    expanse.set_margins(D128::from(0.1), D128::from(0.9)).unwrap();

    let normalized = expanse.normalize(D128::from(0));
    assert!((normalized - D128::from(0.1)).abs() < D128::from(1e-10));
}

#[test]
fn decimal_scale_round_trip() {
    let scale = Scale::new(
        Continuous::new(D128::from(0), D128::from(100)).unwrap(),
        Continuous::new(D128::from(0), D128::from(800)).unwrap(),
    );

    let forward = scale.pushforward(&Value::number(D128::from(25)));
    let position = forward.as_number().unwrap();
    assert!((position - D128::from(200)).abs() < D128::from(1e-10));

    let back = scale.pullback(&forward);
    assert!((back.as_number().unwrap() - D128::from(25)).abs() < D128::from(1e-10));
}

#[test]
fn decimal_categorical_scale() {
    let scale = Scale::new(
        Point::<D128>::new(["a", "b", "c", "d"]).unwrap(),
        Continuous::new(D128::from(1), D128::from(10)).unwrap(),
    );

    let position = scale.pushforward(&Value::from("b"));
    assert!((position.as_number().unwrap() - D128::from(4)).abs() < D128::from(1e-10));
}

#[test]
fn decimal_pan_through_shared_handle() {
    let axis = ExpanseHandle::from(Continuous::new(D128::from(0), D128::from(100)).unwrap());
    let linked = axis.clone();

    axis.move_by(D128::from(0.25));

    let normalized = linked.normalize(&Value::number(D128::from(0)));
    assert!((normalized - D128::from(0.25)).abs() < D128::from(1e-10));
}
