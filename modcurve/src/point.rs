//! Curve points.

use crate::{Curve, Result};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Neg,
};
use num_bigint::BigInt;

/// Point on a [`Curve`]: either the point at infinity or an affine `(x, y)`
/// pair.
///
/// Affine points borrow the curve they were created on, so a point can never
/// outlive its curve. Points are values: arithmetic always returns a new
/// point.
#[derive(Clone, Debug)]
pub enum Point<'c> {
    /// Point at infinity, the identity of the group.
    Identity,

    /// Point with affine coordinates.
    Affine {
        /// x-coordinate
        x: BigInt,

        /// y-coordinate
        y: BigInt,

        /// Curve the coordinates refer to.
        curve: &'c Curve,
    },
}

impl<'c> Point<'c> {
    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    /// Curve an affine point belongs to. The identity is shared by all curves.
    pub fn curve(&self) -> Option<&'c Curve> {
        match self {
            Self::Identity => None,
            Self::Affine { curve, .. } => Some(*curve),
        }
    }

    /// Returns `-self`, checking that `self` is on its curve.
    pub fn negate(&self) -> Result<Self> {
        match self.curve() {
            Some(curve) => curve.negate(self),
            None => Ok(Self::Identity),
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        match self.curve().or(other.curve()) {
            Some(curve) => curve.add(self, other),
            None => Ok(Self::Identity),
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        match self.curve().or(other.curve()) {
            Some(curve) => curve.sub(self, other),
            None => Ok(Self::Identity),
        }
    }

    /// Returns `[k] self`.
    pub fn mul(&self, k: u64) -> Result<Self> {
        match self.curve() {
            Some(curve) => curve.mul(self, k),
            None => Ok(Self::Identity),
        }
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identity, Self::Identity) => true,
            (
                Self::Affine {
                    x: x1,
                    y: y1,
                    curve: c1,
                },
                Self::Affine {
                    x: x2,
                    y: y2,
                    curve: c2,
                },
            ) => x1 == x2 && y1 == y2 && c1 == c2,
            _ => false,
        }
    }
}

impl Eq for Point<'_> {}

impl Hash for Point<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Identity => state.write_u8(0),
            Self::Affine { x, y, .. } => {
                state.write_u8(1);
                x.hash(state);
                y.hash(state);
            }
        }
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("O"),
            Self::Affine { x, y, .. } => write!(f, "({x}, {y})"),
        }
    }
}

/// Unchecked negation: `(x, y) ↦ (x, -y mod p)`.
impl<'c> Neg for &Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y, curve } => {
                let curve: &'c Curve = *curve;
                curve.point(x.clone(), curve.reduce(&-y))
            }
        }
    }
}

impl<'c> Neg for Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        -&self
    }
}
