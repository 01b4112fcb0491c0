#[cfg(test)]
mod tests {
    use finalg::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_set(rng: &mut StdRng, max_len: usize) -> FiniteSet<u8> {
        let len = rng.gen_range(0..=max_len);
        (0..len).map(|_| rng.gen_range(0..12)).collect()
    }

    #[test]
    fn test_union_and_intersection_laws() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let a = random_set(&mut rng, 8);
            let b = random_set(&mut rng, 8);

            let union = a.union(&b);
            let intersection = a.intersection(&b);
            assert!(a.is_subset_of(&union) && b.is_subset_of(&union));
            assert!(intersection.is_subset_of(&a) && intersection.is_subset_of(&b));
            assert_eq!(union, b.union(&a));
            assert_eq!(intersection, b.intersection(&a));
            assert_eq!(
                union.cardinality() + intersection.cardinality(),
                a.cardinality() + b.cardinality()
            );
            assert_eq!(a.difference(&b).intersection(&b), FiniteSet::new());
        }
    }

    #[test]
    fn test_power_set_cardinality() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let a = random_set(&mut rng, 6);
            let power = a.power_set();
            assert_eq!(power.cardinality(), 1 << a.cardinality());
            assert!(power.iter().all(|subset| subset.is_subset_of(&a)));
            assert!(power.contains(&a));
            assert!(power.contains(&FiniteSet::new()));
        }
    }

    #[test]
    fn test_direct_product_with_empty_set_is_empty() {
        let a: FiniteSet<u8> = (0..3).collect();
        let empty: FiniteSet<char> = FiniteSet::new();
        assert!(a.direct_product(&empty).is_empty());
        assert_eq!(a.direct_product(&FiniteSet::from_elements(vec!['x', 'y'])).cardinality(), 6);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = FiniteSet::from_elements(vec![3, 1, 2]);
        let b = FiniteSet::from_elements(vec![1, 2, 3, 3]);
        assert_eq!(a, b);
        assert_eq!(b.cardinality(), 3);
    }
}
