#![no_main]
// Group law identities on a fixed small curve, with points and scalars taken
// from the fuzzer input.
use libfuzzer_sys::fuzz_target;
use modcurve::{Curve, Point};

fn point(curve: &Curve, x: u8) -> Point<'_> {
    curve.evaluate(x).unwrap_or(Point::Identity)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let curve = Curve::new(2, 3, 97).unwrap();
    let p1 = point(&curve, data[0]);
    let p2 = point(&curve, data[1]);
    let k = u64::from(data[2]);

    let sum = curve.add(&p1, &p2).unwrap();
    assert!(curve.is_valid(&sum));
    assert!(sum == curve.add(&p2, &p1).unwrap());

    // Test that negation works correctly
    assert!(curve.add(&sum, &(-&sum)).unwrap() == Point::Identity);

    // Test scalar multiplication distributive property
    let k_p1 = curve.mul(&p1, k).unwrap();
    assert!(curve.add(&k_p1, &k_p1).unwrap() == curve.mul(&p1, 2 * k).unwrap());

    // Arbitrary coordinates are either rejected or valid
    let raw = curve.point(data[0], data[3]);
    match curve.add(&raw, &p1) {
        Ok(point) => assert!(curve.is_valid(&raw) && curve.is_valid(&point)),
        Err(_) => assert!(!curve.is_valid(&raw)),
    }
});
