//! Affine chord-and-tangent group law.
//!
//! Points are kept in affine coordinates and every slope is computed with a
//! field inversion, which keeps the formulas recognisable at the cost of
//! speed.

use crate::{Curve, Point, Result};
use num_bigint::BigInt;

impl Curve {
    /// Returns `-point`.
    ///
    /// Fails with [`Error::InvalidPoint`](crate::Error::InvalidPoint) if
    /// `point` is not on this curve.
    pub fn negate<'c>(&'c self, point: &Point<'c>) -> Result<Point<'c>> {
        self.ensure_valid(point)?;
        Ok(-point)
    }

    /// Returns `p + q`.
    ///
    /// Both operands are checked with [`Curve::is_valid`] first.
    pub fn add<'c>(&'c self, p: &Point<'c>, q: &Point<'c>) -> Result<Point<'c>> {
        self.ensure_valid(p)?;
        self.ensure_valid(q)?;
        self.add_unchecked(p, q)
    }

    /// Returns `p + q` without validating the operands.
    ///
    /// # Panics
    ///
    /// If the sum is not a point of this curve. This happens when an operand is
    /// not on the curve, or when the modulus is not prime and the parameters
    /// would fail [`Curve::check_parameters`].
    pub fn add_unchecked<'c>(&'c self, p: &Point<'c>, q: &Point<'c>) -> Result<Point<'c>> {
        let sum = match (p, q) {
            (Point::Identity, _) => q.clone(),
            (_, Point::Identity) => p.clone(),
            (Point::Affine { x: xp, y: yp, .. }, Point::Affine { x: xq, y: yq, .. }) => {
                if *q == -p {
                    // vertical line, including doubling a point with y = 0
                    Point::Identity
                } else {
                    let slope = if p == q {
                        let numerator = BigInt::from(3) * xp * xp + self.a();
                        numerator * self.modular_inverse(&(yp * 2u32))?
                    } else {
                        (yq - yp) * self.modular_inverse(&(xq - xp))?
                    };

                    let x = self.reduce(&(&slope * &slope - xp - xq));
                    let y = self.reduce(&(&slope * (xp - &x) - yp));
                    self.point(x, y)
                }
            }
        };

        assert!(
            self.is_valid(&sum),
            "{p} + {q} = {sum} is not on {self}: inconsistent curve arithmetic"
        );

        Ok(sum)
    }

    /// Returns `p - q`.
    pub fn sub<'c>(&'c self, p: &Point<'c>, q: &Point<'c>) -> Result<Point<'c>> {
        self.add(p, &self.negate(q)?)
    }

    /// Returns `[k] point` by adding `point` to the identity `k` times.
    ///
    /// This is deliberately the naive `O(k)` algorithm.
    pub fn mul<'c>(&'c self, point: &Point<'c>, k: u64) -> Result<Point<'c>> {
        self.ensure_valid(point)?;

        let mut acc = Point::Identity;
        for _ in 0..k {
            acc = self.add_unchecked(&acc, point)?;
        }

        Ok(acc)
    }
}
