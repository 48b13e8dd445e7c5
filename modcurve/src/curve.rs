//! Curve parameters, point validity and prime field helpers.

use crate::{Error, Point, Result, is_prime};
use core::fmt;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use once_cell::sync::OnceCell;

/// Elliptic curve in short Weierstrass form `y² = x³ + ax + b (mod p)`.
///
/// Parameters are fixed at construction. [`Curve::check_parameters`] vets them
/// for use as a group: `p` must be an odd prime and, for cryptographic use, the
/// curve must be non-singular.
///
/// The number of points on the curve is computed on first use of
/// [`Curve::order`] and cached for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
    pub(crate) order: OnceCell<usize>,
}

impl Curve {
    /// Create the curve `y² = x³ + ax + b (mod p)`.
    ///
    /// Only a non-positive modulus is rejected here: every other parameter
    /// problem is reported by [`Curve::check_parameters`].
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>, p: impl Into<BigInt>) -> Result<Self> {
        let p = p.into();

        if p <= BigInt::zero() {
            return Err(Error::InvalidModulus(p));
        }

        Ok(Self {
            a: a.into(),
            b: b.into(),
            p,
            order: OnceCell::new(),
        })
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(&self) -> Point<'_> {
        Point::Identity
    }

    /// Affine point `(x, y)` bound to this curve.
    ///
    /// The coordinates are taken as given; use [`Curve::is_valid`] to check
    /// that the point actually lies on the curve.
    pub fn point(&self, x: impl Into<BigInt>, y: impl Into<BigInt>) -> Point<'_> {
        Point::Affine {
            x: x.into(),
            y: y.into(),
            curve: self,
        }
    }

    /// Right-hand side of the curve equation: `x³ + ax + b mod p`.
    pub fn evaluate_x(&self, x: &BigInt) -> BigInt {
        let x = self.reduce(x);
        self.reduce(&(&x * &x * &x + &self.a * &x + &self.b))
    }

    /// Point of the curve with the given `x` coordinate.
    ///
    /// Scans `y` upward from zero and returns the first square root of
    /// [`Curve::evaluate_x`], so the result is deterministic but costs `O(p)`.
    pub fn evaluate(&self, x: impl Into<BigInt>) -> Result<Point<'_>> {
        let x = self.reduce(&x.into());
        let rhs = self.evaluate_x(&x);

        let mut y = BigInt::zero();
        while y < self.p {
            if self.reduce(&(&y * &y)) == rhs {
                return Ok(self.point(x, y));
            }
            y += 1u32;
        }

        Err(Error::NoSolution(x))
    }

    /// `(4a³ mod p + 27b² mod p) mod p`, which is zero exactly when the curve
    /// is singular.
    pub fn discriminant(&self) -> BigInt {
        let four_a_cubed = self.reduce(&(BigInt::from(4) * &self.a * &self.a * &self.a));
        let twenty_seven_b_squared = self.reduce(&(BigInt::from(27) * &self.b * &self.b));
        self.reduce(&(four_a_cubed + twenty_seven_b_squared))
    }

    /// Check that the parameters describe a usable curve.
    ///
    /// The modulus must be a prime greater than 2. When `cryptographic` is
    /// set, the curve must also be non-singular.
    pub fn check_parameters(&self, cryptographic: bool) -> Result<()> {
        if self.p <= BigInt::from(2) {
            return Err(Error::InvalidModulus(self.p.clone()));
        }

        if !is_prime(&self.p) {
            return Err(Error::NonPrimeModulus(self.p.clone()));
        }

        if cryptographic && self.discriminant().is_zero() {
            return Err(Error::SingularCurve {
                a: self.a.clone(),
                b: self.b.clone(),
                p: self.p.clone(),
            });
        }

        Ok(())
    }

    /// Non-failing form of [`Curve::check_parameters`].
    pub fn has_valid_parameters(&self, cryptographic: bool) -> bool {
        self.check_parameters(cryptographic)
            .inspect_err(|err| tracing::debug!(curve = %self, %err, "curve parameters rejected"))
            .is_ok()
    }

    /// Is `point` a point of this curve?
    ///
    /// The identity is always valid. An affine point must belong to this
    /// curve, have both coordinates reduced into `[0, p)` and satisfy the
    /// curve equation.
    pub fn is_valid(&self, point: &Point<'_>) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y, curve } => {
                *curve == self
                    && self.in_range(x)
                    && self.in_range(y)
                    && self.reduce(&(y * y)) == self.evaluate_x(x)
            }
        }
    }

    /// Multiplicative inverse of `x` modulo `p`, computed as `x^(p-2) mod p`.
    ///
    /// The result is only meaningful when `p` is prime.
    pub fn modular_inverse(&self, x: &BigInt) -> Result<BigInt> {
        let x = self.reduce(x);

        if x.is_zero() {
            return Err(Error::ZeroDivision {
                value: x,
                modulus: self.p.clone(),
            });
        }

        // p = 1 was caught above: every residue is zero
        Ok(x.modpow(&(&self.p - 2u32), &self.p))
    }

    /// Reduce into `[0, p)`.
    pub(crate) fn reduce(&self, value: &BigInt) -> BigInt {
        value.mod_floor(&self.p)
    }

    pub(crate) fn in_range(&self, value: &BigInt) -> bool {
        !value.is_negative() && *value < self.p
    }

    pub(crate) fn ensure_valid(&self, point: &Point<'_>) -> Result<()> {
        if self.is_valid(point) {
            Ok(())
        } else {
            Err(Error::InvalidPoint(point.to_string()))
        }
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.p == other.p
    }
}

impl Eq for Curve {}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, p) = (&self.a, &self.b, &self.p);
        write!(
            f,
            "EllipticCurveModulo({a}, {b}, {p}) = 'y^2 = x^3 + {a}x + {b} mod {p}'"
        )
    }
}
