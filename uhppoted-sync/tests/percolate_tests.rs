use proptest::prelude::*;
use uhppoted_sync::{DirtyIndicator, Percolator, aggregate};
use uhppoted_types::Oid;

fn oid(s: &str) -> Oid {
    Oid::parse(s).unwrap()
}

fn oids(list: &[&str]) -> Vec<Oid> {
    list.iter().map(|s| oid(s)).collect()
}

// ── aggregate ────────────────────────────────────────────────────

#[test]
fn no_dirty_descendants_is_none() {
    let dirty = oids(&["0.3.2.1"]);
    assert_eq!(aggregate(&oid("0.3.1"), &dirty), DirtyIndicator::None);
}

#[test]
fn ancestor_itself_is_not_counted() {
    let dirty = oids(&["0.3.1"]);
    assert_eq!(aggregate(&oid("0.3.1"), &dirty), DirtyIndicator::None);
}

#[test]
fn one_dirty_leaf_is_single() {
    let dirty = oids(&["0.3.1.1"]);
    assert_eq!(aggregate(&oid("0.3.1"), &dirty), DirtyIndicator::Single);
    assert_eq!(aggregate(&oid("0.3"), &dirty), DirtyIndicator::Single);
}

#[test]
fn nested_dirty_paths_count_once() {
    let dirty = oids(&["0.3.1.5.2", "0.3.1.5.2.1"]);
    assert_eq!(aggregate(&oid("0.3.1"), &dirty), DirtyIndicator::Single);
}

#[test]
fn independent_subtrees_are_multiple() {
    let dirty = oids(&["0.3.1.1", "0.3.1.5.2", "0.3.1.5.2.1"]);
    assert_eq!(aggregate(&oid("0.3.1"), &dirty), DirtyIndicator::Multiple);
}

#[test]
fn prefix_is_segment_aware() {
    let dirty = oids(&["0.3.10.1"]);
    assert_eq!(aggregate(&oid("0.3.1"), &dirty), DirtyIndicator::None);
}

// ── Percolator ───────────────────────────────────────────────────

#[test]
fn percolate_updates_every_strict_ancestor() {
    let dirty = oids(&["0.1.1.2.3.4"]);
    let refs: Vec<&Oid> = dirty.iter().collect();
    let mut p = Percolator::new();
    p.percolate(&dirty[0], &refs);

    assert_eq!(p.indicator(&oid("0.1.1.2.3")), DirtyIndicator::Single);
    assert_eq!(p.indicator(&oid("0.1.1.2")), DirtyIndicator::Single);
    assert_eq!(p.indicator(&oid("0.1")), DirtyIndicator::Single);
    assert_eq!(p.indicator(&oid("0.1.1.2.3.4")), DirtyIndicator::None);
}

#[test]
fn percolate_with_clean_set_clears_indicators() {
    let field = oid("0.3.1.1");
    let mut p = Percolator::new();
    p.percolate(&field, &[&field]);
    assert!(p.indicator(&oid("0.3.1")).is_dirty());

    p.percolate(&field, &[]);
    assert_eq!(p.indicator(&oid("0.3.1")), DirtyIndicator::None);
    assert_eq!(p.indicator(&oid("0.3")), DirtyIndicator::None);
}

#[test]
fn clear_under_drops_entity_indicators() {
    let field = oid("0.3.1.5.2");
    let mut p = Percolator::new();
    p.percolate(&field, &[&field]);

    p.clear_under(&oid("0.3.1"));
    assert_eq!(p.indicator(&oid("0.3.1")), DirtyIndicator::None);
    assert_eq!(p.indicator(&oid("0.3.1.5")), DirtyIndicator::None);
    assert_eq!(p.indicator(&oid("0.3")), DirtyIndicator::Single);
}

// ── Properties ───────────────────────────────────────────────────

fn arb_dirty() -> impl Strategy<Value = Vec<Oid>> {
    proptest::collection::vec(proptest::collection::vec(1u32..4, 1..4), 0..8).prop_map(|list| {
        list.into_iter()
            .map(|suffix| oid("0.3.1").join(&suffix))
            .collect()
    })
}

proptest! {
    #[test]
    fn indicator_is_independent_of_order(mut dirty in arb_dirty()) {
        let root = oid("0.3.1");
        let forward = aggregate(&root, &dirty);
        dirty.reverse();
        prop_assert_eq!(forward, aggregate(&root, &dirty));
    }

    #[test]
    fn any_dirty_descendant_makes_root_dirty(dirty in arb_dirty()) {
        let indicator = aggregate(&oid("0.3.1"), &dirty);
        prop_assert_eq!(indicator.is_dirty(), !dirty.is_empty());
    }
}
