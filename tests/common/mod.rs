//! Small concrete groups shared by the integration tests
#![allow(dead_code)]

use finalg::prelude::*;

/// `ℤ/nℤ` under addition
pub fn cyclic(n: u32) -> FiniteGroup<u32> {
    let set: FiniteSet<u32> = (0..n).collect();
    let op = FiniteBinaryOperation::from_fn(set.clone(), |a, b| (a + b) % n).unwrap();
    FiniteGroup::new(set, op).unwrap()
}

/// `ℤ/2ℤ × ℤ/2ℤ`, written as pairs of bits
pub fn klein_four() -> FiniteGroup<(u8, u8)> {
    let set = FiniteSet::from_elements(vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    let op = FiniteBinaryOperation::from_fn(set.clone(), |a, b| (a.0 ^ b.0, a.1 ^ b.1)).unwrap();
    FiniteGroup::new(set, op).unwrap()
}

pub type Permutation = [u8; 3];

/// `(a ∘ b)(x) = a(b(x))`
pub fn compose(a: &Permutation, b: &Permutation) -> Permutation {
    [a[b[0] as usize], a[b[1] as usize], a[b[2] as usize]]
}

pub fn s3_elements() -> FiniteSet<Permutation> {
    FiniteSet::from_elements(vec![
        [0, 1, 2],
        [1, 0, 2],
        [2, 1, 0],
        [0, 2, 1],
        [1, 2, 0],
        [2, 0, 1],
    ])
}

/// The symmetric group on three points
pub fn s3() -> FiniteGroup<Permutation> {
    let set = s3_elements();
    let op = FiniteBinaryOperation::from_fn(set.clone(), compose).unwrap();
    FiniteGroup::new(set, op).unwrap()
}

/// A quaternion unit: the sign and one of `1, i, j, k` as `0..4`
pub type Quaternion = (bool, u8);

fn unit_product(a: u8, b: u8) -> Quaternion {
    match (a, b) {
        (0, u) | (u, 0) => (false, u),
        _ if a == b => (true, 0),
        (1, 2) | (2, 3) | (3, 1) => (false, 6 - a - b),
        _ => (true, 6 - a - b),
    }
}

pub fn quaternion_product(x: &Quaternion, y: &Quaternion) -> Quaternion {
    let (negated, unit) = unit_product(x.1, y.1);
    (x.0 ^ y.0 ^ negated, unit)
}

/// The quaternion group `{±1, ±i, ±j, ±k}`
pub fn q8() -> FiniteGroup<Quaternion> {
    let set: FiniteSet<Quaternion> = [false, true]
        .iter()
        .flat_map(|&sign| (0..4).map(move |unit| (sign, unit)))
        .collect();
    let op = FiniteBinaryOperation::from_fn(set.clone(), quaternion_product).unwrap();
    FiniteGroup::new(set, op).unwrap()
}
