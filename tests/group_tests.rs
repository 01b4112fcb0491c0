mod common;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use finalg::prelude::*;
    use finalg::properties::parse_properties;
    use finalg::structures::find_factors;
    use test_log::test;

    use crate::common;

    #[test]
    fn test_z4_has_three_subgroups() {
        let z4 = common::cyclic(4);
        let subgroups = z4.set_of_all_subgroups().unwrap();
        assert_eq!(subgroups.cardinality(), 3);
        assert!(subgroups.iter().all(|h| h.is_subgroup_of(&z4)));
        assert!(z4.is_cyclic().unwrap());
        assert!(z4.is_abelian().unwrap());
    }

    #[test]
    fn test_s3_structure() {
        let s3 = common::s3();
        assert!(!s3.is_abelian().unwrap());
        assert!(!s3.is_simple().unwrap());
        assert_eq!(s3.center().unwrap(), FiniteSet::singleton([0, 1, 2]));
        assert_eq!(s3.set_of_all_subgroups().unwrap().cardinality(), 6);
        assert_eq!(s3.set_of_all_normal_subgroups().unwrap().cardinality(), 3);
        assert_eq!(s3.set_of_all_maximal_subgroups().unwrap().cardinality(), 4);

        let derived = s3.derived_subgroup().unwrap().unwrap();
        assert_eq!(derived.order(), 3);
        assert!(derived.is_normal_subgroup_of(&s3).unwrap());
    }

    #[test]
    fn test_trivial_group() {
        let trivial = common::cyclic(1);
        assert_eq!(trivial.order(), 1);
        assert!(trivial.is_abelian().unwrap());
        assert!(!trivial.is_simple().unwrap());
        let subgroups = trivial.set_of_all_subgroups().unwrap();
        assert_eq!(subgroups.cardinality(), 1);
        assert_eq!(subgroups[0], trivial);
        assert_eq!(trivial.perfect_core().unwrap(), trivial);
    }

    #[test]
    fn test_seeded_abelian_answers_dedekind_without_enumeration() {
        let s3 = common::s3();
        let named: BTreeMap<String, bool> = [("abelian".to_string(), true)].into_iter().collect();
        let known = parse_properties(&named).unwrap();
        let seeded = FiniteGroup::with_known_properties(s3.set().clone(), s3.operation().clone(), &known).unwrap();

        assert!(seeded.is_dedekind().unwrap());
        assert!(!seeded.subgroups_enumerated());
    }

    #[test]
    fn test_unknown_property_name_is_rejected() {
        let named: BTreeMap<String, bool> = [("abelain".to_string(), true)].into_iter().collect();
        assert_eq!(
            parse_properties::<GroupProperty>(&named).err(),
            Some(AlgebraError::UnknownProperty("abelain".to_string()))
        );
    }

    #[test]
    fn test_element_order_and_lagrange() {
        for group in [common::cyclic(6), common::cyclic(8)] {
            for g in group.set().iter() {
                let order = group.element_order(g).unwrap();
                assert_eq!(group.power(g, order as i64).unwrap(), *group.identity());
                for k in 1..order {
                    assert_ne!(group.power(g, k as i64).unwrap(), *group.identity());
                }
                assert_eq!(group.order() % order, 0);
            }
            for h in group.set_of_all_subgroups().unwrap() {
                assert_eq!(group.order() % h.order(), 0);
                assert_eq!(h.subgroup_index(&group).unwrap() * h.order(), group.order());
            }
        }
    }

    #[test]
    fn test_cyclic_element_orders_are_the_divisors() {
        for n in [6, 8] {
            let group = common::cyclic(n);
            let orders: FiniteSet<usize> = group
                .set()
                .iter()
                .map(|g| group.element_order(g).unwrap())
                .collect();
            assert_eq!(orders, FiniteSet::from_elements(find_factors(n as usize)));
            assert!(group.is_cyclic().unwrap());
        }
    }

    #[test]
    fn test_center_is_an_abelian_normal_subgroup() {
        let q8 = common::q8();
        let center = q8.center_group().unwrap();
        assert_eq!(center.order(), 2);
        assert!(center.is_subgroup_of(&q8));
        assert!(center.is_abelian().unwrap());
        assert!(center.is_normal_subgroup_of(&q8).unwrap());
    }

    #[test]
    fn test_conjugacy_classes_of_s3() {
        let s3 = common::s3();
        let classes = s3.set_of_all_conjugacy_classes().unwrap();
        let mut sizes: Vec<usize> = classes.image_set().iter().map(|c| c.cardinality()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![1, 2, 3]);
        assert!(s3.is_conjugate(&[1, 0, 2], &[0, 2, 1]).unwrap());
        assert!(!s3.is_conjugate(&[1, 0, 2], &[1, 2, 0]).unwrap());
    }

    #[test]
    fn test_q8_is_hamiltonian() {
        let q8 = common::q8();
        assert!(!q8.is_abelian().unwrap());
        assert!(q8.is_dedekind().unwrap());
        assert!(q8.is_hamiltonian().unwrap());
        assert!(q8.is_nilpotent().unwrap());
        assert!(q8.is_t_group().unwrap());
        assert_eq!(q8.set_of_all_subgroups().unwrap().cardinality(), 6);
    }

    #[test]
    fn test_klein_four_quotient_and_product() {
        let v4 = common::klein_four();
        assert!(!v4.is_cyclic().unwrap());
        assert!(v4.is_abelian().unwrap());
        assert_eq!(v4.set_of_all_subgroups().unwrap().cardinality(), 5);

        let h = v4
            .generated_subgroup(&FiniteSet::singleton((0, 1)))
            .unwrap()
            .unwrap();
        let quotient = v4.quotient_group(&h).unwrap();
        assert_eq!(quotient.order(), 2);
        assert!(quotient.properties().is_known_true(GroupProperty::Abelian));

        let z2 = common::cyclic(2);
        let product = z2.direct_product(&z2).unwrap();
        assert_eq!(product.order(), 4);
        assert!(!product.is_cyclic().unwrap());
    }

    #[test]
    fn test_quotient_by_non_normal_subgroup_fails() {
        let s3 = common::s3();
        let h = s3
            .generated_subgroup(&FiniteSet::singleton([1, 0, 2]))
            .unwrap()
            .unwrap();
        assert_eq!(h.order(), 2);
        assert!(!h.is_normal_subgroup_of(&s3).unwrap());
        assert_eq!(s3.quotient_group(&h).err(), Some(AlgebraError::NotNormal));
    }

    #[test]
    fn test_subgroups_inherit_known_properties() {
        let z6 = common::cyclic(6);
        z6.is_abelian().unwrap();
        for h in z6.set_of_all_subgroups().unwrap() {
            assert!(h.properties().is_known_true(GroupProperty::Abelian));
            assert_eq!(h.config(), z6.config());
        }
    }

    #[test]
    fn test_config_round_trip_and_defaults() {
        let config = GroupConfig::new().with_closure_iteration_cap(10);
        let z5 = common::cyclic(5).with_config(config);
        assert_eq!(z5.config().closure_iteration_cap, 10);
        assert_eq!(GroupConfig::default().closure_iteration_cap, 3000);
        assert_eq!(GroupConfig::default().enumeration_warning_order, 32);
    }
}
