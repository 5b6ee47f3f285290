use bio::io::fasta::Record;
use extract_draft::{filter_by_marker, has_marker, output_file_name, output_path, RAGTAG_MARKER};
use std::path::{Path, PathBuf};

fn rec(id: &str, desc: Option<&str>, seq: &[u8]) -> Record {
    Record::with_attrs(id, desc, seq)
}

fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id()).collect()
}

#[test]
fn test_has_marker_anywhere_in_id() {
    assert!(has_marker("chr1_RagTag", RAGTAG_MARKER));
    assert!(has_marker("RagTag_chr1", RAGTAG_MARKER));
    assert!(has_marker("scaffold_RagTag_2", RAGTAG_MARKER));
    assert!(!has_marker("chr2", RAGTAG_MARKER));
}

#[test]
fn test_has_marker_case_sensitive() {
    assert!(!has_marker("chr1_ragtag", RAGTAG_MARKER));
    assert!(!has_marker("chr1_RAGTAG", RAGTAG_MARKER));
}

#[test]
fn test_has_marker_is_literal() {
    // 不是正则
    assert!(!has_marker("chr1_RagTag", "Rag.ag"));
    assert!(has_marker("chr1_Rag.ag", "Rag.ag"));
}

#[test]
fn test_filter_keeps_order() {
    let records = vec![
        rec("chr1_RagTag", None, b"ACGT"),
        rec("chr2", None, b"TTTT"),
        rec("scaffold_RagTag_2", None, b"GGCC"),
        rec("chr3", None, b"AAAA"),
        rec("ctg_RagTag", None, b"CCCC"),
    ];
    let kept = filter_by_marker(records, RAGTAG_MARKER);
    assert_eq!(ids(&kept), vec!["chr1_RagTag", "scaffold_RagTag_2", "ctg_RagTag"]);
    assert_eq!(kept[1].seq(), b"GGCC");
}

#[test]
fn test_filter_ignores_description() {
    let records = vec![
        rec("chr1", Some("RagTag placed"), b"ACGT"),
        rec("chr2_RagTag", Some("unplaced"), b"TTTT"),
    ];
    let kept = filter_by_marker(records, RAGTAG_MARKER);
    assert_eq!(ids(&kept), vec!["chr2_RagTag"]);
    assert_eq!(kept[0].desc(), Some("unplaced"));
}

#[test]
fn test_filter_no_match_is_empty() {
    let records = vec![rec("chrX", None, b"AAAA")];
    assert!(filter_by_marker(records, RAGTAG_MARKER).is_empty());
}

#[test]
fn test_filter_custom_marker() {
    let records = vec![
        rec("chr1_RagTag", None, b"ACGT"),
        rec("chr2_HiC", None, b"TTTT"),
    ];
    let kept = filter_by_marker(records, "_HiC");
    assert_eq!(ids(&kept), vec!["chr2_HiC"]);
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("sample42", false), "sample42.reordered.fasta");
    assert_eq!(output_file_name("sample42", true), "sample42.reordered.fasta.gz");
    // sample id 不做校验
    assert_eq!(output_file_name("a b.c", false), "a b.c.reordered.fasta");
}

#[test]
fn test_output_path_with_dir() {
    assert_eq!(
        output_path(None, "S", false),
        PathBuf::from("S.reordered.fasta")
    );
    assert_eq!(
        output_path(Some(Path::new("out")), "S", false),
        Path::new("out").join("S.reordered.fasta")
    );
}
