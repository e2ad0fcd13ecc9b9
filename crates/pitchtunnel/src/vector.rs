//! Three-dimensional vector math used by the force model and integrator.
//!
//! The free functions ([`add`], [`scale`], [`magnitude`], [`normalize`],
//! [`cross`]) are thin wrappers over the [`Vector`] methods and operators, for
//! callers that prefer a functional style.
//!
//! # Example
//!
//! ```rust
//! use pitchtunnel::{cross, Vector};
//!
//! let x = Vector::new(1.0, 0.0, 0.0);
//! let y = Vector::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(cross(x, y), Vector::new(0.0, 0.0, 1.0));
//! ```

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A vector in 3D space, used for positions, velocities and accelerations.
///
/// Components follow the field convention: `x` toward the plate, `y` toward
/// the pitcher's glove side, `z` up.
///
/// # Example
///
/// ```rust
/// use pitchtunnel::Vector;
///
/// let v = Vector::new(1.0, 2.0, 3.0);
/// let scaled = v * 2.0;
/// assert_eq!(scaled.x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector pointing the same way.
    ///
    /// The zero vector normalizes to itself: a zero magnitude is replaced by
    /// a denominator of 1 rather than dividing by zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        let denom = if mag == 0.0 { 1.0 } else { mag };
        Self {
            x: self.x / denom,
            y: self.y / denom,
            z: self.z / denom,
        }
    }

    /// Returns the cross product `self × other`.
    #[inline]
    pub fn cross(&self, other: Vector) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the dot product of two vectors.
    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

/// Component-wise sum of two vectors.
#[inline]
pub fn add(a: Vector, b: Vector) -> Vector {
    a + b
}

/// Multiplies every component of `v` by `s`.
#[inline]
pub fn scale(v: Vector, s: f64) -> Vector {
    v * s
}

/// Euclidean length of `v`.
#[inline]
pub fn magnitude(v: Vector) -> f64 {
    v.magnitude()
}

/// Unit vector in the direction of `v`; the zero vector maps to itself.
#[inline]
pub fn normalize(v: Vector) -> Vector {
    v.normalized()
}

/// Cross product `a × b`.
#[inline]
pub fn cross(a: Vector, b: Vector) -> Vector {
    a.cross(b)
}
