use pretty_assertions::assert_eq;
use uhppoted_replay::{ReplaySummary, parse_recording, replay};
use uhppoted_sync::{CacheConfig, Update};
use uhppoted_types::Oid;

fn oid(s: &str) -> Oid {
    Oid::parse(s).unwrap()
}

const RECORDING: &str = r#"
{"system":{"objects":[{"OID":"0.3.1","value":"new"},{"OID":"0.3.1.1","value":"Alice"}]}}

{"system":{"objects":[{"OID":"0.3.1","value":"deleted"},{"OID":"0.9.1","value":"x"}]}}
"#;

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn recording_has_one_batch_per_document() {
    let batches = parse_recording(RECORDING).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0][1], Update::new("0.3.1.1", "Alice"));
}

#[test]
fn invalid_line_is_reported_with_its_number() {
    let err = parse_recording("{}\nnope\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

// ── Replay ───────────────────────────────────────────────────────

#[tokio::test]
async fn replay_applies_each_document_as_a_cycle() {
    let batches = parse_recording(RECORDING).unwrap();
    let output = replay(&batches, 0, CacheConfig::default()).await;

    assert_eq!(
        output.summary,
        ReplaySummary {
            cycles: 2,
            updates: 4,
            applied: 3,
            removed: 0,
        }
    );
    let card = output.store.cards.get(&oid("0.3.1")).unwrap();
    assert_eq!(card.name, "Alice");
    assert_eq!(card.header.mark, 1);
}

#[tokio::test]
async fn idle_cycles_expire_tombstones() {
    let batches = parse_recording(RECORDING).unwrap();
    let output = replay(&batches, 24, CacheConfig::default()).await;

    assert_eq!(output.summary.removed, 1);
    assert!(output.store.cards.is_empty());
}

#[tokio::test]
async fn replay_reads_recording_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objects.jsonl");
    std::fs::write(&path, RECORDING).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let output = replay(&parse_recording(&text).unwrap(), 0, CacheConfig::default()).await;
    assert_eq!(output.store.total(), 1);
}
