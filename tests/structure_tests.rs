mod common;

#[cfg(test)]
mod tests {
    use finalg::prelude::*;

    use crate::common;

    #[test]
    fn test_ladder_rejects_each_missing_law() {
        let set: FiniteSet<i32> = (0..4).collect();

        let subtraction = FiniteBinaryOperation::from_fn(set.clone(), |a, b| (a - b).rem_euclid(4)).unwrap();
        assert!(FiniteMagma::new(set.clone(), subtraction.clone()).is_ok());
        assert_eq!(
            FiniteSemigroup::new(set.clone(), subtraction).err(),
            Some(AlgebraError::NotAssociative)
        );

        let maximum = FiniteBinaryOperation::from_fn(set.clone(), |a, b| *a.max(b)).unwrap();
        let monoid = FiniteMonoid::new(set.clone(), maximum.clone()).unwrap();
        assert_eq!(*monoid.identity(), 0);
        assert_eq!(FiniteGroup::new(set.clone(), maximum).err(), Some(AlgebraError::NoInverses));

        let constant = FiniteBinaryOperation::from_fn(set.clone(), |_, _| 3).unwrap();
        assert_eq!(FiniteMonoid::new(set, constant).err(), Some(AlgebraError::NoIdentity));
    }

    #[test]
    fn test_every_group_is_a_monoid_and_a_semigroup() {
        let s3 = common::s3();
        assert!(FiniteMonoid::is_monoid(s3.set(), s3.operation()));
        assert!(FiniteSemigroup::is_semigroup(s3.set(), s3.operation()));
        assert!(FiniteMagma::is_magma(s3.set(), s3.operation()));
        assert_eq!(s3.as_monoid().as_semigroup().set(), s3.set());
        assert_eq!(s3.cardinality(), 6);
    }

    #[test]
    fn test_max_is_a_semilattice_with_all_squares() {
        let set: FiniteSet<u8> = (0..5).collect();
        let op = FiniteBinaryOperation::from_fn(set.clone(), |a, b| *a.max(b)).unwrap();
        let semigroup = FiniteSemigroup::new(set.clone(), op).unwrap();
        assert!(semigroup.is_semilattice());
        assert_eq!(*semigroup.set_of_square_elements(), set);
    }

    #[test]
    fn test_sign_of_a_permutation_is_a_homomorphism() {
        let s3 = common::s3();
        let z2 = common::cyclic(2);
        let sign = FiniteFunction::from_fn(s3.set().clone(), z2.set().clone(), |p| {
            let inversions = (0..3)
                .flat_map(|i| (i + 1..3).map(move |j| (i, j)))
                .filter(|&(i, j)| p[i] > p[j])
                .count();
            (inversions % 2) as u32
        })
        .unwrap();

        assert!(s3.as_monoid().is_homomorphism(z2.as_monoid(), &sign).unwrap());
        assert!(!s3.as_monoid().is_isomorphism(z2.as_monoid(), &sign).unwrap());
    }

    #[test]
    fn test_operation_from_cayley_table() {
        let set: FiniteSet<char> = FiniteSet::from_elements(vec!['e', 'a']);
        let op = FiniteBinaryOperation::from_cayley_table(set.clone(), &ndarray::array![[0, 1], [1, 0]]).unwrap();
        assert_eq!(op.apply(&'a', &'a').unwrap(), 'e');
        assert_eq!(op.identity(), Some(&'e'));
        assert!(FiniteGroup::new(set.clone(), op).is_ok());

        let bad = FiniteBinaryOperation::from_cayley_table(set, &ndarray::array![[0, 2], [1, 0]]);
        assert_eq!(bad.err(), Some(AlgebraError::IndexOutOfRange { index: 2, len: 2 }));
    }
}
