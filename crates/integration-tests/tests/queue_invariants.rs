//! Property tests over random admit/dispatch sequences

use proptest::prelude::*;
use std::collections::VecDeque;
use triage_core::domain::{DomainError, Priority};
use triage_integration_tests::test_registry;

#[derive(Debug, Clone)]
enum Op {
    Admit { category: usize, urgent: bool },
    Dispatch { category: usize },
}

fn op_strategy(max_category: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..=max_category + 1, any::<bool>())
            .prop_map(|(category, urgent)| Op::Admit { category, urgent }),
        (0..=max_category + 1).prop_map(|category| Op::Dispatch { category }),
    ]
}

proptest! {
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(op_strategy(3), 0..80),
    ) {
        let count = 3;
        let mut registry = test_registry(count, capacity);
        // Reference model: (urgent, regular) name queues per category
        let mut model: Vec<(VecDeque<String>, VecDeque<String>)> =
            vec![(VecDeque::new(), VecDeque::new()); count];

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Admit { category, urgent } => {
                    let name = format!("p{}", step);
                    let result = registry.admit(category, name.clone(), Priority::from_urgent_flag(urgent));

                    if category == 0 || category > count {
                        prop_assert!(
                            matches!(result, Err(DomainError::InvalidCategory { .. })),
                            "expected InvalidCategory, got {:?}",
                            result
                        );
                        continue;
                    }
                    let (u, r) = &mut model[category - 1];
                    if u.len() + r.len() >= capacity {
                        prop_assert!(
                            matches!(result, Err(DomainError::CapacityExceeded { .. })),
                            "expected CapacityExceeded, got {:?}",
                            result
                        );
                    } else {
                        prop_assert!(result.is_ok(), "expected admission, got {:?}", result);
                        if urgent { u.push_back(name) } else { r.push_back(name) }
                    }
                }
                Op::Dispatch { category } => {
                    let result = registry.dispatch_next(category);

                    if category == 0 || category > count {
                        prop_assert!(
                            matches!(result, Err(DomainError::InvalidCategory { .. })),
                            "expected InvalidCategory, got {:?}",
                            result
                        );
                        continue;
                    }
                    let (u, r) = &mut model[category - 1];
                    match u.pop_front().or_else(|| r.pop_front()) {
                        Some(expected) => {
                            let patient = result.unwrap();
                            prop_assert_eq!(patient.name(), expected.as_str());
                        }
                        None => prop_assert_eq!(result.unwrap_err(), DomainError::EmptyQueue { category }),
                    }
                }
            }

            for stats in registry.statistics() {
                prop_assert!(
                    stats.urgent + stats.regular <= capacity,
                    "category {} over capacity", stats.category
                );
                let (u, r) = &model[stats.category - 1];
                prop_assert_eq!((stats.urgent, stats.regular), (u.len(), r.len()));
            }
        }
    }
}
