//! Flat-text report rendering.
//!
//! Both writers render into any [`Write`] target; the CLI hands in
//! buffered files, tests render into memory. A report that fails
//! mid-write is invalid in full; there is no partial recovery.

use crate::cluster::ClusterRecord;
use crate::error::{LexsimError, Result};
use crate::matrix::SimilarityMatrix;
use std::io::Write;

/// Writes the similarity-matrix report.
///
/// One line per word, words sorted lexicographically. Each line is the
/// word followed by its neighbors (self included) ascending by distance,
/// ties by word, rendered `neighbor:distance` and space-joined.
///
/// Returns the number of lines written.
pub fn write_matrix_report<W: Write>(matrix: &SimilarityMatrix, out: &mut W) -> Result<usize> {
    render_matrix(matrix, out).map_err(|source| LexsimError::ReportWrite {
        report: "matrix",
        source,
    })
}

fn render_matrix<W: Write>(matrix: &SimilarityMatrix, out: &mut W) -> std::io::Result<usize> {
    let mut words: Vec<&String> = matrix.words().iter().collect();
    words.sort_unstable();

    for word in &words {
        let mut neighbors: Vec<(&String, f64)> = matrix
            .neighbors(word)
            .map(|m| m.iter().map(|(w, d)| (w, *d)).collect())
            .unwrap_or_default();
        neighbors.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let rendered: Vec<String> = neighbors
            .iter()
            .map(|(w, d)| format!("{}:{}", w, d))
            .collect();
        writeln!(out, "{} {}", word, rendered.join(" "))?;
    }
    Ok(words.len())
}

/// Writes the threshold-cluster report.
///
/// One line per (threshold, cluster) record, in the order produced by
/// [`crate::cluster::analyze_sweep`]: thresholds ascending, clusters by
/// descending size within a threshold. Line fields, space-joined:
/// threshold, average intra-cluster distance, medoid count, comma-joined
/// medoids, cluster size, comma-joined ordered members, others count,
/// comma-joined others.
///
/// Returns the number of lines written.
pub fn write_cluster_report<W: Write>(records: &[ClusterRecord], out: &mut W) -> Result<usize> {
    render_clusters(records, out).map_err(|source| LexsimError::ReportWrite {
        report: "cluster",
        source,
    })
}

fn render_clusters<W: Write>(records: &[ClusterRecord], out: &mut W) -> std::io::Result<usize> {
    for record in records {
        let analysis = &record.analysis;
        writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            record.threshold,
            analysis.avg_intra_distance,
            analysis.medoids.len(),
            analysis.medoids.join(","),
            analysis.ordered_members.len(),
            analysis.ordered_members.join(","),
            record.others.len(),
            record.others.join(","),
        )?;
    }
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::analyze_sweep;
    use crate::distance::DamerauLevenshtein;
    use crate::matrix::MatrixBuilder;

    fn build(words: &[&str], cutoff: f64) -> SimilarityMatrix {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        MatrixBuilder::new(cutoff).build(words, &DamerauLevenshtein)
    }

    fn render_both(matrix: &SimilarityMatrix) -> (String, String) {
        let mut matrix_out = Vec::new();
        write_matrix_report(matrix, &mut matrix_out).unwrap();
        let records = analyze_sweep(matrix).unwrap();
        let mut cluster_out = Vec::new();
        write_cluster_report(&records, &mut cluster_out).unwrap();
        (
            String::from_utf8(matrix_out).unwrap(),
            String::from_utf8(cluster_out).unwrap(),
        )
    }

    #[test]
    fn test_matrix_report_format() {
        let matrix = build(&["cat", "bat", "cats"], 0.4);
        let mut out = Vec::new();
        let rows = write_matrix_report(&matrix, &mut out).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // words sorted lexicographically, self-entry first at distance 0
        assert_eq!(lines[0], format!("bat bat:0 cat:{}", 1.0 / 3.0));
        assert_eq!(lines[1], format!("cat cat:0 cats:{} bat:{}", 0.25, 1.0 / 3.0));
        assert_eq!(lines[2], "cats cats:0 cat:0.25");
    }

    #[test]
    fn test_cluster_report_format() {
        let matrix = build(&["cat", "bat"], 0.4);
        let records = analyze_sweep(&matrix).unwrap();
        let mut out = Vec::new();
        write_cluster_report(&records, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // single threshold 1/3, one cluster of both words, tied medoids,
        // no others
        let expected = format!(
            "{} {} 2 bat,cat 2 bat,cat 0 \n",
            1.0 / 3.0,
            1.0 / 6.0
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_reports_are_idempotent() {
        let matrix = build(&["bar", "bat", "car", "cat", "cats", "zebra"], 0.4);
        let first = render_both(&matrix);
        let second = render_both(&matrix);
        assert_eq!(first, second);
    }
}
