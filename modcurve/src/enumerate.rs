//! Point enumeration and point counting.

use crate::{Curve, Error, Point, Result};
use core::iter::FusedIterator;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::HashMap;

impl Curve {
    /// Start enumerating the subgroup generated by the first point found.
    ///
    /// `x` is scanned upward from 1; the first `x` with a solution gives the
    /// generator `(x, y)` with the smallest such `y`. `x = 0` is never used as
    /// a starting point.
    pub fn enumerate(&self) -> Result<PointEnumerator<'_>> {
        let mut x = BigInt::from(1);

        while x < *self.modulus() {
            match self.evaluate(x.clone()) {
                Ok(generator) => {
                    tracing::trace!(curve = %self, %generator, "enumeration generator found");
                    return PointEnumerator::new(self, generator);
                }
                Err(Error::NoSolution(_)) => x += 1u32,
                Err(err) => return Err(err),
            }
        }

        Err(Error::EmptyCurve)
    }

    /// Iterate over every point of the curve.
    ///
    /// Affine points come first in lexicographic `(x, y)` order, followed by
    /// the identity. Costs `O(p²)` for a full pass.
    pub fn points(&self) -> Points<'_> {
        Points {
            curve: self,
            x: BigInt::zero(),
            y: BigInt::zero(),
            rhs: None,
            identity_pending: true,
        }
    }

    /// Number of points on the curve, the identity included.
    ///
    /// Computed on first call and cached afterwards.
    pub fn order(&self) -> usize {
        *self.order.get_or_init(|| {
            let order = self.count_points();
            tracing::debug!(curve = %self, order, "counted curve points");
            order
        })
    }

    /// Order of the generator picked by [`Curve::enumerate`], i.e. the number
    /// of points it yields.
    pub fn subgroup_order(&self) -> Result<usize> {
        self.enumerate()?
            .try_fold(0, |count, point| point.map(|_| count + 1))
    }

    /// Does [`Curve::order`] satisfy Hasse's bound `|N - (p + 1)| < 2√p`?
    pub fn hasse_bound_check(&self) -> bool {
        let p = self.modulus();
        let trace = BigInt::from(self.order()) - p - 1u32;
        &trace * &trace < BigInt::from(4) * p
    }

    /// Tally how many `y` square to each residue, then sum the tallies of
    /// `x³ + ax + b` over every `x`.
    fn count_points(&self) -> usize {
        let p = self.modulus();
        let mut roots = HashMap::<BigInt, usize>::new();

        let mut y = BigInt::zero();
        while y < *p {
            *roots.entry(self.reduce(&(&y * &y))).or_default() += 1;
            y += 1u32;
        }

        let mut count = 1;
        let mut x = BigInt::zero();
        while x < *p {
            count += roots.get(&self.evaluate_x(&x)).copied().unwrap_or(0);
            x += 1u32;
        }

        count
    }
}

/// Iterator over the cyclic subgroup generated by a point: `G, 2G, 3G, …`
/// up to and including the identity.
///
/// The sequence is finite. Clone the enumerator or call
/// [`PointEnumerator::restart`] to walk it again.
#[derive(Clone, Debug)]
pub struct PointEnumerator<'c> {
    curve: &'c Curve,
    generator: Point<'c>,
    current: Option<Point<'c>>,
    finished: bool,
}

impl<'c> PointEnumerator<'c> {
    /// Enumerate the subgroup generated by `generator` on `curve`.
    pub fn new(curve: &'c Curve, generator: Point<'c>) -> Result<Self> {
        curve.ensure_valid(&generator)?;

        Ok(Self {
            curve,
            generator,
            current: None,
            finished: false,
        })
    }

    /// Point the subgroup is generated by.
    pub fn generator(&self) -> &Point<'c> {
        &self.generator
    }

    /// Rewind to the generator.
    pub fn restart(&mut self) {
        self.current = None;
        self.finished = false;
    }
}

impl<'c> Iterator for PointEnumerator<'c> {
    type Item = Result<Point<'c>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = match &self.current {
            None => Ok(self.generator.clone()),
            Some(prev) => self.curve.add_unchecked(&self.generator, prev),
        };

        match &next {
            Ok(point) => {
                self.finished = point.is_identity();
                self.current = Some(point.clone());
            }
            Err(_) => self.finished = true,
        }

        Some(next)
    }
}

impl FusedIterator for PointEnumerator<'_> {}

/// Iterator over every point of a curve, see [`Curve::points`].
#[derive(Clone, Debug)]
pub struct Points<'c> {
    curve: &'c Curve,
    x: BigInt,
    y: BigInt,
    /// `x³ + ax + b` for the current `x`.
    rhs: Option<BigInt>,
    identity_pending: bool,
}

impl<'c> Iterator for Points<'c> {
    type Item = Point<'c>;

    fn next(&mut self) -> Option<Point<'c>> {
        let curve = self.curve;
        let p = curve.modulus();

        while self.x < *p {
            let x = self.x.clone();
            let y = self.y.clone();
            let on_curve = curve.reduce(&(&y * &y))
                == *self.rhs.get_or_insert_with(|| curve.evaluate_x(&x));

            self.y += 1u32;
            if self.y >= *p {
                self.y = BigInt::zero();
                self.x += 1u32;
                self.rhs = None;
            }

            if on_curve {
                return Some(curve.point(x, y));
            }
        }

        if self.identity_pending {
            self.identity_pending = false;
            return Some(Point::Identity);
        }

        None
    }
}

impl FusedIterator for Points<'_> {}
