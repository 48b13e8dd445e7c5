//! Property tests for the group law.

use modcurve::{Curve, Point};
use once_cell::sync::Lazy;
use proptest::{prop_assert, prop_assert_eq, prop_compose, proptest};

static CURVE: Lazy<Curve> = Lazy::new(|| Curve::new(2, 3, 97).unwrap());

static POINTS: Lazy<Vec<Point<'static>>> = Lazy::new(|| CURVE.points().collect());

prop_compose! {
    fn point()(index in 0..POINTS.len()) -> Point<'static> {
        POINTS[index].clone()
    }
}

proptest! {
    #[test]
    fn closure(p in point(), q in point()) {
        let sum = CURVE.add(&p, &q).unwrap();
        prop_assert!(CURVE.is_valid(&sum));
    }

    #[test]
    fn identity(p in point()) {
        prop_assert_eq!(CURVE.add(&p, &Point::Identity).unwrap(), p.clone());
        prop_assert_eq!(CURVE.add(&Point::Identity, &p).unwrap(), p);
    }

    #[test]
    fn inverse(p in point()) {
        let neg = CURVE.negate(&p).unwrap();
        prop_assert_eq!(CURVE.add(&p, &neg).unwrap(), Point::Identity);
    }

    #[test]
    fn commutativity(p in point(), q in point()) {
        prop_assert_eq!(CURVE.add(&p, &q).unwrap(), CURVE.add(&q, &p).unwrap());
    }

    #[test]
    fn associativity(p in point(), q in point(), r in point()) {
        let lhs = CURVE.add(&CURVE.add(&p, &q).unwrap(), &r).unwrap();
        let rhs = CURVE.add(&p, &CURVE.add(&q, &r).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn subtraction_undoes_addition(p in point(), q in point()) {
        let sum = CURVE.add(&p, &q).unwrap();
        prop_assert_eq!(CURVE.sub(&sum, &q).unwrap(), p);
    }

    #[test]
    fn mul_is_repeated_add(p in point(), k in 0u64..20) {
        let by_mul = CURVE.mul(&p, k + 1).unwrap();
        let by_add = CURVE.add(&CURVE.mul(&p, k).unwrap(), &p).unwrap();
        prop_assert_eq!(by_mul, by_add);
    }

    #[test]
    fn group_order_annihilates(p in point()) {
        prop_assert_eq!(CURVE.mul(&p, CURVE.order() as u64).unwrap(), Point::Identity);
    }
}
