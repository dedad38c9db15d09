use pretty_assertions::assert_eq;
use proptest::prelude::*;
use uhppoted_types::{Error, Oid};

fn oid(s: &str) -> Oid {
    Oid::parse(s).unwrap()
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_dotted_segments() {
    let o = oid("0.3.7.5.2");
    assert_eq!(o.segments(), &[0, 3, 7, 5, 2]);
    assert_eq!(o.len(), 5);
    assert_eq!(o.to_string(), "0.3.7.5.2");
}

#[test]
fn parse_single_segment() {
    assert_eq!(oid("0").segments(), &[0]);
}

#[test]
fn parse_rejects_malformed_input() {
    for s in ["", ".", "0.", ".0", "0..1", "0.a", "0.+1", "0.-1", "<new>", "0. 1"] {
        assert_eq!(Oid::parse(s), Err(Error::InvalidOid(s.to_string())), "{s}");
    }
}

#[test]
fn parse_rejects_overflowing_segment() {
    assert!(Oid::parse("0.99999999999").is_err());
}

#[test]
fn from_str_matches_parse() {
    let o: Oid = "0.4.2".parse().unwrap();
    assert_eq!(o, Oid::from_segments([0, 4, 2]));
}

// ── Hierarchy ────────────────────────────────────────────────────

#[test]
fn parent_strips_last_segment() {
    assert_eq!(oid("0.3.7.1").parent(), Some(oid("0.3.7")));
    assert_eq!(oid("0").parent(), None);
}

#[test]
fn ancestors_nearest_first() {
    let chain: Vec<String> = oid("0.3.7.5.2").ancestors().map(|o| o.to_string()).collect();
    assert_eq!(chain, vec!["0.3.7.5", "0.3.7", "0.3", "0"]);
}

#[test]
fn ancestors_of_single_segment_is_empty() {
    assert_eq!(oid("0").ancestors().count(), 0);
}

#[test]
fn descendant_is_segment_aware() {
    assert!(oid("0.3.1.1").is_descendant_of(&oid("0.3.1")));
    assert!(!oid("0.3.10").is_descendant_of(&oid("0.3.1")));
    assert!(!oid("0.3.10.1").is_descendant_of(&oid("0.3.1")));
    assert!(!oid("0.3.1").is_descendant_of(&oid("0.3.1")));
}

#[test]
fn suffix_after_root() {
    let root = oid("0.3.1");
    assert_eq!(oid("0.3.1.5.2.1").suffix_after(&root), Some(&[5, 2, 1][..]));
    assert_eq!(oid("0.3.1").suffix_after(&root), Some(&[][..]));
    assert_eq!(oid("0.3.10").suffix_after(&root), None);
}

#[test]
fn join_child_and_truncate() {
    let root = oid("0.4.2");
    assert_eq!(root.child(1), oid("0.4.2.1"));
    assert_eq!(root.join(&[2, 9, 1]), oid("0.4.2.2.9.1"));
    assert_eq!(oid("0.4.2.2.9.1").truncate(3), Some(root));
    assert_eq!(oid("0.4").truncate(3), None);
}

#[test]
fn ordering_is_numeric_per_segment() {
    let mut list = vec![oid("0.3.10"), oid("0.3.2"), oid("0.3.1.1"), oid("0.3.1")];
    list.sort();
    assert_eq!(list, vec![oid("0.3.1"), oid("0.3.1.1"), oid("0.3.2"), oid("0.3.10")]);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_dotted_string() {
    let json = serde_json::to_string(&oid("0.6.12")).unwrap();
    assert_eq!(json, r#""0.6.12""#);
    let back: Oid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, oid("0.6.12"));
}

#[test]
fn deserialize_rejects_invalid() {
    assert!(serde_json::from_str::<Oid>(r#""0.x""#).is_err());
}

proptest! {
    #[test]
    fn display_parses_back(segments in prop::collection::vec(0u32..10_000, 1..8)) {
        let o = Oid::from_segments(segments);
        prop_assert_eq!(Oid::parse(&o.to_string()).unwrap(), o);
    }

    #[test]
    fn every_ancestor_is_a_prefix(segments in prop::collection::vec(0u32..100, 1..8)) {
        let o = Oid::from_segments(segments);
        for a in o.ancestors() {
            prop_assert!(o.is_descendant_of(&a));
        }
        prop_assert_eq!(o.ancestors().count(), o.len() - 1);
    }
}
