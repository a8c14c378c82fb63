//! Batch comparison runs.
//!
//! Runs every algorithm over one topology and renders the outcomes side by
//! side. One failing run never stops the rest, so a single report can show
//! e.g. Dijkstra rejecting a negative edge while both tree builders accept
//! it.

use std::fmt::Write;
use std::time::{Duration, Instant};

use waypoint_routing::{dispatch, AlgorithmKind, ComputationResult, Error};
use waypoint_topology::{Topology, VertexId};

/// One algorithm's outcome within a batch.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    pub kind: AlgorithmKind,
    pub outcome: Result<ComputationResult, Error>,
    pub elapsed: Duration,
}

impl AlgorithmRun {
    /// Single-line rendering of the outcome.
    pub fn outcome_line(&self) -> String {
        match &self.outcome {
            Ok(result) => result.to_string(),
            Err(error) => format!("error: {error}"),
        }
    }

    /// The computed path or accepted-edge sequence; empty on failure or when
    /// there is nothing to show.
    pub fn sequence(&self) -> String {
        match &self.outcome {
            Ok(ComputationResult::Path(path)) => path
                .path
                .iter()
                .map(VertexId::to_string)
                .collect::<Vec<_>>()
                .join(" -> "),
            Ok(ComputationResult::Tree(tree)) => tree
                .edges
                .iter()
                .map(|e| format!("{}-{}", e.from, e.to))
                .collect::<Vec<_>>()
                .join(" "),
            Err(_) => String::new(),
        }
    }
}

/// Run every algorithm over one topology, timing each dispatch.
///
/// Shortest-path algorithms run `source` to `target`; spanning-tree
/// algorithms take `root` instead (Prim grows from it, Kruskal only has it
/// range-checked).
pub fn run_batch(
    topology: &Topology,
    source: VertexId,
    target: VertexId,
    root: VertexId,
) -> Vec<AlgorithmRun> {
    AlgorithmKind::ALL
        .iter()
        .map(|&kind| {
            let (seed, aim) = if kind.is_tree() {
                (root, None)
            } else {
                (source, Some(target))
            };
            let started = Instant::now();
            let outcome = dispatch(topology, kind, seed, aim);
            AlgorithmRun {
                kind,
                outcome,
                elapsed: started.elapsed(),
            }
        })
        .collect()
}

/// Render runs as an aligned table (name, outcome, elapsed, sequence),
/// followed by the cross-algorithm consistency lines when there are any.
pub fn render_report(runs: &[AlgorithmRun]) -> String {
    let width = runs
        .iter()
        .map(|run| run.kind.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for run in runs {
        let _ = write!(
            out,
            "{:<width$}  {}  [{:?}]",
            run.kind.name(),
            run.outcome_line(),
            run.elapsed
        );
        let sequence = run.sequence();
        if sequence.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "  {sequence}");
        }
    }

    let checks = consistency_lines(runs);
    if !checks.is_empty() {
        out.push('\n');
        for line in checks {
            let _ = writeln!(out, "{line}");
        }
    }

    out
}

/// Agreement summary across algorithm families.
///
/// Successful shortest-path runs are compared on the distance to the target,
/// successful tree runs on the total weight. Tree totals are only comparable
/// when the runs cover the same number of components; Prim stays inside the
/// root's component while Kruskal spans them all.
pub fn consistency_lines(runs: &[AlgorithmRun]) -> Vec<String> {
    let mut lines = Vec::new();

    let distances: Vec<(AlgorithmKind, Option<i64>)> = runs
        .iter()
        .filter_map(|run| match &run.outcome {
            Ok(ComputationResult::Path(path)) => {
                Some((run.kind, path.target.and_then(|t| path.distance_to(t))))
            }
            _ => None,
        })
        .collect();
    if distances.len() > 1 {
        if distances.iter().all(|(_, d)| *d == distances[0].1) {
            lines.push(match distances[0].1 {
                Some(d) => format!("shortest-path runs agree: distance {d}"),
                None => "shortest-path runs agree: target unreachable".to_string(),
            });
        } else {
            let detail = distances
                .iter()
                .map(|(kind, d)| match d {
                    Some(d) => format!("{kind}={d}"),
                    None => format!("{kind}=unreachable"),
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("shortest-path runs disagree: {detail}"));
        }
    }

    let trees: Vec<(AlgorithmKind, i64, usize)> = runs
        .iter()
        .filter_map(|run| match &run.outcome {
            Ok(ComputationResult::Tree(tree)) => {
                Some((run.kind, tree.total_weight, tree.components_covered))
            }
            _ => None,
        })
        .collect();
    if trees.len() > 1 {
        if trees.iter().any(|(_, _, c)| *c != trees[0].2) {
            let detail = trees
                .iter()
                .map(|(kind, _, components)| format!("{kind}={components}"))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "spanning-tree runs cover different component counts: {detail}"
            ));
        } else if trees.iter().all(|(_, w, _)| *w == trees[0].1) {
            lines.push(format!(
                "spanning-tree runs agree: total weight {}",
                trees[0].1
            ));
        } else {
            let detail = trees
                .iter()
                .map(|(kind, weight, _)| format!("{kind}={weight}"))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("spanning-tree runs disagree: {detail}"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Topology {
        let edges = [
            (0, 1, 2),
            (1, 4, 5),
            (1, 2, 4),
            (0, 3, 1),
            (3, 2, 3),
            (2, 4, 1),
            (4, 5, 2),
        ]
        .into_iter()
        .map(|(a, b, w)| (VertexId(a), VertexId(b), w))
        .collect();
        Topology::load(6, edges).unwrap()
    }

    #[test]
    fn batch_covers_every_algorithm() {
        let runs = run_batch(&sample(), VertexId(0), VertexId(5), VertexId(0));
        let kinds: Vec<AlgorithmKind> = runs.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, AlgorithmKind::ALL);
        assert!(runs.iter().all(|r| r.outcome.is_ok()));
    }

    #[test]
    fn sequences_render_path_and_tree() {
        let runs = run_batch(&sample(), VertexId(0), VertexId(5), VertexId(0));
        assert_eq!(runs[0].sequence(), "0 -> 3 -> 2 -> 4 -> 5");
        assert_eq!(runs[4].sequence(), "0-3 2-4 0-1 4-5 3-2");
    }

    #[test]
    fn prim_grows_from_the_root_argument() {
        let topology = Topology::load(
            4,
            vec![(VertexId(0), VertexId(1), 1), (VertexId(2), VertexId(3), 2)],
        )
        .unwrap();
        let runs = run_batch(&topology, VertexId(0), VertexId(1), VertexId(2));

        let prim = runs[3].outcome.as_ref().unwrap().as_tree().unwrap();
        assert_eq!(prim.edges[0].from, VertexId(2));
        assert_eq!(prim.components_covered, 3);
    }

    #[test]
    fn batch_survives_partial_failure() {
        let topology = Topology::new(
            3,
            vec![(VertexId(0), VertexId(1), -5), (VertexId(1), VertexId(2), 2)],
        )
        .unwrap();
        let runs = run_batch(&topology, VertexId(0), VertexId(2), VertexId(0));

        assert!(matches!(
            runs[0].outcome,
            Err(Error::NegativeWeight { weight: -5, .. })
        ));
        assert!(matches!(runs[1].outcome, Err(Error::NegativeCycle { .. })));
        assert!(matches!(runs[2].outcome, Err(Error::NegativeCycle { .. })));
        assert!(runs[3].outcome.is_ok());
        assert!(runs[4].outcome.is_ok());

        let lines = consistency_lines(&runs);
        assert_eq!(lines, ["spanning-tree runs agree: total weight -3"]);
    }

    #[test]
    fn report_aligns_on_the_longest_name() {
        let runs = run_batch(&sample(), VertexId(0), VertexId(5), VertexId(0));
        let report = render_report(&runs);

        assert!(report.contains("dijkstra        path 0 -> 5 distance 7 (4 hops)"));
        assert!(report.contains("floyd-warshall  path 0 -> 5 distance 7 (4 hops)"));
        assert!(report.contains("prim            tree with 5 edges, total weight 9, 1 component(s)"));
        assert!(report.contains("0 -> 3 -> 2 -> 4 -> 5"));
        assert!(report.contains("0-3 2-4 0-1 4-5 3-2"));
        // 5 table rows, a separator, and 2 consistency lines
        assert_eq!(report.lines().count(), 8);
    }

    #[test]
    fn sample_families_agree() {
        let runs = run_batch(&sample(), VertexId(0), VertexId(5), VertexId(0));
        let lines = consistency_lines(&runs);
        assert_eq!(
            lines,
            [
                "shortest-path runs agree: distance 7",
                "spanning-tree runs agree: total weight 9",
            ]
        );
    }

    #[test]
    fn unreachable_target_still_agrees() {
        let topology = Topology::load(3, vec![(VertexId(0), VertexId(1), 4)]).unwrap();
        let runs = run_batch(&topology, VertexId(0), VertexId(2), VertexId(0));

        let lines = consistency_lines(&runs);
        assert_eq!(
            lines,
            [
                "shortest-path runs agree: target unreachable",
                "spanning-tree runs agree: total weight 4",
            ]
        );
    }

    #[test]
    fn split_topology_reports_coverage_mismatch() {
        // Two islands; Prim stays on the root's island
        let topology = Topology::load(
            4,
            vec![(VertexId(0), VertexId(1), 1), (VertexId(2), VertexId(3), 2)],
        )
        .unwrap();
        let runs = run_batch(&topology, VertexId(0), VertexId(3), VertexId(0));

        let lines = consistency_lines(&runs);
        assert_eq!(
            lines,
            [
                "shortest-path runs agree: target unreachable",
                "spanning-tree runs cover different component counts: prim=3, kruskal=2",
            ]
        );
    }

    #[test]
    fn error_runs_render_with_prefix() {
        let topology = Topology::new(2, vec![(VertexId(0), VertexId(1), -1)]).unwrap();
        let runs = run_batch(&topology, VertexId(0), VertexId(1), VertexId(0));
        let report = render_report(&runs);
        assert!(report.contains("error: "));
    }
}
