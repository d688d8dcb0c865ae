//! N-dimensional vector math
//!
//! The simulation is generic over the number of spatial dimensions, so all
//! geometry runs through one type: components live in a fixed-size array
//! and every operation loops over `0..N`. `VecN<2>` drives the flat game,
//! `VecN<4>` the full one, on the same code path.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An N-dimensional point or direction with `f32` components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecN<const N: usize>(pub [f32; N]);

impl<const N: usize> VecN<N> {
    /// All components zero
    pub const ZERO: Self = Self([0.0; N]);

    #[inline]
    pub const fn new(components: [f32; N]) -> Self {
        Self(components)
    }

    /// Every component set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    /// Zero everywhere except `length` on `axis`. Panics if `axis >= N`.
    #[inline]
    pub fn along_axis(axis: usize, length: f32) -> Self {
        let mut v = Self::ZERO;
        v.0[axis] = length;
        v
    }

    /// Dot product
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        let mut sum = 0.0;
        for i in 0..N {
            sum += self.0[i] * rhs.0[i];
        }
        sum
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        (self - rhs).length()
    }

    /// Unit vector in the same direction, or zero when the length vanishes
    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len > f32::EPSILON { self / len } else { Self::ZERO }
    }

    /// Reflect across the plane with unit normal `n`: `v - 2(v·n)n`
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl<const N: usize> Default for VecN<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Index<usize> for VecN<N> {
    type Output = f32;

    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        &self.0[axis]
    }
}

impl<const N: usize> IndexMut<usize> for VecN<N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.0[axis]
    }
}

impl<const N: usize> Add for VecN<N> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
        self
    }
}

impl<const N: usize> Sub for VecN<N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        for i in 0..N {
            self.0[i] -= rhs.0[i];
        }
        self
    }
}

impl<const N: usize> Neg for VecN<N> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        for i in 0..N {
            self.0[i] = -self.0[i];
        }
        self
    }
}

impl<const N: usize> Mul<f32> for VecN<N> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: f32) -> Self {
        for i in 0..N {
            self.0[i] *= rhs;
        }
        self
    }
}

impl<const N: usize> Div<f32> for VecN<N> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: f32) -> Self {
        for i in 0..N {
            self.0[i] /= rhs;
        }
        self
    }
}

impl<const N: usize> AddAssign for VecN<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<const N: usize> SubAssign for VecN<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<const N: usize> fmt::Display for VecN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:.1}")?;
        }
        write!(f, ")")
    }
}

// Serialized as a fixed-length sequence of exactly N floats, so configs
// read naturally as JSON arrays. Hand-written because serde's derive does
// not cover const-generic arrays.
impl<const N: usize> Serialize for VecN<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for c in &self.0 {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for VecN<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VecNVisitor<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for VecNVisitor<N> {
            type Value = VecN<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {N} floats")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<VecN<N>, A::Error> {
                let mut v = VecN::<N>::ZERO;
                for i in 0..N {
                    v.0[i] = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(v)
            }
        }

        deserializer.deserialize_tuple(N, VecNVisitor::<N>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::array::{uniform2, uniform4};
    use proptest::prelude::*;

    #[test]
    fn test_arithmetic() {
        let a = VecN::new([1.0, 2.0, 3.0, 4.0]);
        let b = VecN::new([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(a + b, VecN::splat(5.0));
        assert_eq!(a - b, VecN::new([-3.0, -1.0, 1.0, 3.0]));
        assert_eq!(a * 2.0, VecN::new([2.0, 4.0, 6.0, 8.0]));
        assert_eq!(b / 2.0, VecN::new([2.0, 1.5, 1.0, 0.5]));
        assert_eq!(-a, VecN::new([-1.0, -2.0, -3.0, -4.0]));
    }

    #[test]
    fn test_dot_and_length() {
        let a = VecN::new([3.0, 4.0]);
        assert_eq!(a.dot(a), 25.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.distance(VecN::ZERO), 5.0);
        assert_eq!(VecN::<3>::ZERO.length(), 0.0);
    }

    #[test]
    fn test_along_axis() {
        let v = VecN::<4>::along_axis(1, 4.0);
        assert_eq!(v, VecN::new([0.0, 4.0, 0.0, 0.0]));
    }

    #[test]
    fn test_normalize_or_zero() {
        let v = VecN::new([0.0, 3.0, 0.0, 4.0]).normalize_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(VecN::<4>::ZERO.normalize_or_zero(), VecN::ZERO);
    }

    #[test]
    fn test_reflect_head_on() {
        // Straight into a +x facing surface: the x component flips.
        let v = VecN::new([-2.0, 0.0]);
        let n = VecN::new([1.0, 0.0]);
        assert_eq!(v.reflect(n), VecN::new([2.0, 0.0]));
    }

    #[test]
    fn test_reflect_tangential_component_kept() {
        let v = VecN::new([-2.0, 3.0]);
        let n = VecN::new([1.0, 0.0]);
        assert_eq!(v.reflect(n), VecN::new([2.0, 3.0]));
    }

    #[test]
    fn test_display() {
        let v = VecN::new([1.0, 2.5]);
        assert_eq!(v.to_string(), "(1.0, 2.5)");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = VecN::new([1.0, 2.0, 3.0, 4.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
        let back: VecN<4> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_serde_rejects_wrong_length() {
        let short: Result<VecN<4>, _> = serde_json::from_str("[1.0,2.0]");
        assert!(short.is_err());
    }

    proptest! {
        #[test]
        fn reflect_preserves_speed(
            v in uniform4(-100.0f32..100.0),
            n_raw in uniform4(-1.0f32..1.0),
        ) {
            let n = VecN::new(n_raw).normalize_or_zero();
            prop_assume!(n.length() > 0.5);
            let v = VecN::new(v);
            let r = v.reflect(n);
            let tol = v.length() * 1e-3 + 1e-3;
            prop_assert!((r.length() - v.length()).abs() <= tol);
        }

        #[test]
        fn reflect_twice_is_identity(
            v in uniform2(-100.0f32..100.0),
            n_raw in uniform2(-1.0f32..1.0),
        ) {
            let n = VecN::new(n_raw).normalize_or_zero();
            prop_assume!(n.length() > 0.5);
            let v = VecN::new(v);
            let rr = v.reflect(n).reflect(n);
            let tol = v.length() * 1e-3 + 1e-3;
            prop_assert!(rr.distance(v) <= tol);
        }
    }
}
