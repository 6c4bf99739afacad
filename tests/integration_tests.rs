//! Integration tests for the lexsim analysis pipeline.

use lexsim::{
    analyze_sweep, report, wordlist, ClusterRecord, Config, DamerauLevenshtein, DistanceMetric,
    MatrixBuilder, SimilarityMatrix, ThresholdClusterer,
};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

/// Creates a small word-list fixture with tab-separated extra fields.
fn create_word_list() -> String {
    [
        "cat\tnoun",
        "bat\tnoun",
        "cats\tnoun",
        "bar\tnoun",
        "car\tnoun",
        "zebra\tnoun",
        "cat\tduplicate",
    ]
    .join("\n")
}

fn build_matrix(words: Vec<String>, cutoff: f64) -> SimilarityMatrix {
    MatrixBuilder::new(cutoff).build(words, &DamerauLevenshtein)
}

#[test]
fn test_end_to_end_pipeline() {
    let dir = tempdir().unwrap();
    let list_path = dir.path().join("words.txt");
    let mut file = fs::File::create(&list_path).unwrap();
    write!(file, "{}", create_word_list()).unwrap();
    drop(file);

    let words = wordlist::load_words(&list_path).unwrap();
    assert_eq!(words, vec!["cat", "bat", "cats", "bar", "car", "zebra"]);

    let config = Config::default();
    let matrix = build_matrix(words, config.cutoff);

    // worked examples from the metric
    let d = matrix.distance("cat", "bat").unwrap();
    assert!((d - 1.0 / 3.0).abs() < 1e-10);
    let d = matrix.distance("cat", "cats").unwrap();
    assert!((d - 0.25).abs() < 1e-10);
    assert_eq!(matrix.distance("bat", "cats"), None);
    assert_eq!(matrix.distance("zebra", "cat"), None);

    let records = analyze_sweep(&matrix).unwrap();
    assert!(!records.is_empty());

    // write both reports to disk and read them back
    let matrix_path = dir.path().join("word-matrix.txt");
    let clusters_path = dir.path().join("word-distance-clusters.txt");

    let mut out = fs::File::create(&matrix_path).unwrap();
    let rows = report::write_matrix_report(&matrix, &mut out).unwrap();
    assert_eq!(rows, matrix.len());

    let mut out = fs::File::create(&clusters_path).unwrap();
    let rows = report::write_cluster_report(&records, &mut out).unwrap();
    assert_eq!(rows, records.len());

    let matrix_text = fs::read_to_string(&matrix_path).unwrap();
    assert_eq!(matrix_text.lines().count(), matrix.len());
    // lexicographic word order
    let first_words: Vec<&str> = matrix_text
        .lines()
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    let mut sorted = first_words.clone();
    sorted.sort_unstable();
    assert_eq!(first_words, sorted);

    let cluster_text = fs::read_to_string(&clusters_path).unwrap();
    assert_eq!(cluster_text.lines().count(), records.len());
}

#[test]
fn test_matrix_invariants() {
    let words: Vec<String> = ["cat", "bat", "cats", "bar", "car", "zebra"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let cutoff = 0.4;
    let matrix = build_matrix(words, cutoff);

    for a in matrix.words() {
        // self-entry of exactly 0
        assert_eq!(matrix.distance(a, a), Some(0.0));
        for (b, d) in matrix.neighbors(a).unwrap() {
            // mirrored storage
            assert_eq!(matrix.distance(b, a), Some(*d));
            // sparsity
            assert!(*d < cutoff);
        }
    }
}

#[test]
fn test_metric_properties() {
    let metric = DamerauLevenshtein;
    let words = ["cat", "bat", "cats", "bar", "car", "zebra", ""];
    for a in words {
        assert_eq!(metric.distance(a, a), 0.0);
        for b in words {
            let d = metric.distance(a, b);
            assert_eq!(d, metric.distance(b, a));
            assert!((0.0..=1.0).contains(&d));
            if a != b {
                assert!(d > 0.0);
            }
        }
    }
}

#[test]
fn test_partition_at_every_threshold() {
    let words: Vec<String> = ["cat", "bat", "cats", "bar", "car", "zebra"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let matrix = build_matrix(words, 0.4);
    let clusterer = ThresholdClusterer::new(&matrix);

    for clusters in clusterer.all_clusters() {
        let mut members: Vec<&str> = clusters
            .groups
            .iter()
            .flat_map(|g| g.members.iter().map(String::as_str))
            .collect();
        let total: usize = clusters.groups.iter().map(|g| g.members.len()).sum();
        // every word appears exactly once across the partition
        assert_eq!(total, matrix.len());
        members.sort_unstable();
        members.dedup();
        assert_eq!(members.len(), matrix.len());
    }
}

#[test]
fn test_singleton_cluster_shape() {
    let words: Vec<String> = ["cat", "bat", "zebra"].iter().map(|w| w.to_string()).collect();
    let matrix = build_matrix(words, 0.4);
    let records = analyze_sweep(&matrix).unwrap();

    let zebra: Vec<&ClusterRecord> = records
        .iter()
        .filter(|r| r.analysis.ordered_members == ["zebra"])
        .collect();
    assert!(!zebra.is_empty());
    for record in zebra {
        assert_eq!(record.analysis.medoids, vec!["zebra"]);
        assert_eq!(record.analysis.avg_intra_distance, 0.0);
        assert!(record.others.is_empty());
    }
}

#[test]
fn test_tied_medoids_are_kept() {
    let words: Vec<String> = ["cat", "bat"].iter().map(|w| w.to_string()).collect();
    let matrix = build_matrix(words, 0.4);
    let records = analyze_sweep(&matrix).unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!((record.threshold - 1.0 / 3.0).abs() < 1e-10);
    assert_eq!(record.analysis.medoids, vec!["bat", "cat"]);
    assert_eq!(record.analysis.ordered_members.len(), 2);
}

#[test]
fn test_pipeline_is_idempotent() {
    let words: Vec<String> = ["cat", "bat", "cats", "bar", "car", "zebra"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let render = |words: Vec<String>| -> (String, String) {
        let matrix = build_matrix(words, 0.4);
        let mut matrix_out = Vec::new();
        report::write_matrix_report(&matrix, &mut matrix_out).unwrap();
        let records = analyze_sweep(&matrix).unwrap();
        let mut cluster_out = Vec::new();
        report::write_cluster_report(&records, &mut cluster_out).unwrap();
        (
            String::from_utf8(matrix_out).unwrap(),
            String::from_utf8(cluster_out).unwrap(),
        )
    };

    let first = render(words.clone());
    let second = render(words);
    assert_eq!(first, second);
}

#[test]
fn test_config_file_with_overrides() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{"cutoff": 0.5, "threads": 2}"#).unwrap();

    let config = Config::from_json_file(&config_path).unwrap();
    assert_eq!(config.cutoff, 0.5);
    assert_eq!(config.threads, 2);

    fs::write(&config_path, r#"{"cutoff": 7.0}"#).unwrap();
    assert!(Config::from_json_file(&config_path).is_err());
}
