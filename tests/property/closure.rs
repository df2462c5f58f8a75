use std::collections::{HashMap, HashSet};

use gapfill::tree::{ProjectRef, ProjectTree, TreeNode, fill_gaps, is_gap_free};
use gapfill_test_utils::builders::ProjectTreeBuilder;
use proptest::prelude::*;

// Strategy to generate a forest together with a selection from it.
// Acyclicity comes from only letting node N pick a parent among 0..N-1.
fn forest_and_selection(max_nodes: usize) -> impl Strategy<Value = (ProjectTree, Vec<String>)> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        let parents = proptest::collection::vec(proptest::option::of(any::<usize>()), num_nodes);
        let selection = proptest::collection::vec(0..num_nodes, 0..(2 * num_nodes));

        (parents, selection).prop_map(move |(raw_parents, picks)| {
            let mut builder = ProjectTreeBuilder::new();
            for (i, raw) in raw_parents.into_iter().enumerate() {
                let name = format!("p{i}");
                builder = match raw {
                    Some(r) if i > 0 => builder.child(&name, &format!("p{}", r % i)),
                    _ => builder.root(&name),
                };
            }
            let selection = picks.into_iter().map(|i| format!("p{i}")).collect();
            (builder.build_unchecked(), selection)
        })
    })
}

fn ancestors_or_self<'a>(node: ProjectRef<'a>) -> Vec<ProjectRef<'a>> {
    let mut chain = vec![node];
    while let Some(parent) = chain[chain.len() - 1].parent() {
        chain.push(parent);
    }
    chain
}

proptest! {
    #[test]
    fn closure_holds((tree, names) in forest_and_selection(24)) {
        let selection = tree.resolve(&names).unwrap();
        let closed = fill_gaps(&selection).unwrap();

        prop_assert!(is_gap_free(&closed));
        for node in &selection {
            prop_assert!(closed.contains(node), "{node} missing from output");
        }

        // Nothing beyond the selection and its ancestors.
        let needed: HashSet<_> = selection.iter().flat_map(|n| ancestors_or_self(*n)).collect();
        prop_assert_eq!(closed.len(), needed.len());
    }

    #[test]
    fn closure_is_idempotent((tree, names) in forest_and_selection(24)) {
        let selection = tree.resolve(&names).unwrap();
        let once = fill_gaps(&selection).unwrap();
        let twice = fill_gaps(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn closed_input_is_a_fixed_point((tree, names) in forest_and_selection(24)) {
        let selection = tree.resolve(&names).unwrap();
        let mut closed = fill_gaps(&selection).unwrap();

        // Parents always have smaller ids here, so id order is gap-free too.
        closed.sort_by_key(|p| p.id());
        prop_assert!(is_gap_free(&closed));
        prop_assert_eq!(fill_gaps(&closed).unwrap(), closed);
    }

    #[test]
    fn input_order_follows_first_demand((tree, names) in forest_and_selection(24)) {
        let selection = tree.resolve(&names).unwrap();
        let closed = fill_gaps(&selection).unwrap();

        let mut demand: HashMap<ProjectRef<'_>, usize> = HashMap::new();
        for (i, node) in selection.iter().enumerate() {
            for ancestor in ancestors_or_self(*node) {
                demand.entry(ancestor).or_insert(i);
            }
        }
        let position: HashMap<ProjectRef<'_>, usize> =
            closed.iter().enumerate().map(|(i, n)| (*n, i)).collect();

        for x in &selection {
            for y in &selection {
                if demand[x] < demand[y] {
                    prop_assert!(
                        position[x] < position[y],
                        "{x} (demand {}) should precede {y} (demand {})",
                        demand[x],
                        demand[y]
                    );
                }
            }
        }
    }
}
