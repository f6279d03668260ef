use super::{RankedGroup, RankedItem, Ranking};
use crate::config::Config;
use crate::metrics::Metric;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::Display;

const LOG_TARGET: &str = "   ranker";

/// Key of the bucket holding project declarations in origin mode
pub const SOURCE_KEY: &str = "source";

/// Key of the bucket holding third-party declarations in origin mode
pub const DEPENDENCIES_KEY: &str = "dependencies";

/// How metrics are grouped before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Grouping {
    /// One group per declaration path
    File,

    /// A source bucket followed by a dependency bucket
    Origin,
}

/// Aggregates metrics into ranked groups using the limits of a [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'c> {
    config: &'c Config,
}

impl<'c> Ranker<'c> {
    #[must_use]
    pub const fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Rank `metrics` under `grouping`.
    ///
    /// The input is not modified and ranking the same input twice yields the same result.
    #[must_use]
    pub fn rank(&self, metrics: &[Metric<'_>], grouping: Grouping) -> Ranking {
        let grand_total_us: f64 = metrics.iter().map(Metric::duration_us).sum();

        let groups = match grouping {
            Grouping::File => self.rank_files(metrics, grand_total_us),
            Grouping::Origin => self.rank_origins(metrics, grand_total_us),
        };

        log::debug!(
            target: LOG_TARGET,
            "Ranked {} metrics into {} {grouping} groups",
            metrics.len(),
            groups.len()
        );

        Ranking {
            grouping,
            total_ms: grand_total_us / 1000.0,
            metric_count: metrics.len(),
            groups,
        }
    }

    fn rank_files(&self, metrics: &[Metric<'_>], grand_total_us: f64) -> Vec<RankedGroup> {
        let mut by_path: BTreeMap<&str, Vec<&Metric<'_>>> = BTreeMap::new();
        for metric in metrics {
            by_path.entry(metric.path()).or_default().push(metric);
        }

        // Discovery is lexical, so the stable sort leaves ties in path order
        let mut groups: Vec<(&str, Vec<&Metric<'_>>, f64)> = by_path
            .into_iter()
            .map(|(path, members)| {
                let total_us = sum_us(&members);
                (path, members, total_us)
            })
            .collect();
        groups.sort_by(|a, b| b.2.total_cmp(&a.2));
        groups.truncate(self.config.file_limit);

        groups
            .into_iter()
            .enumerate()
            .map(|(index, (path, members, total_us))| self.build_group(index + 1, path, members, total_us, grand_total_us))
            .collect()
    }

    fn rank_origins(&self, metrics: &[Metric<'_>], grand_total_us: f64) -> Vec<RankedGroup> {
        let (dependencies, sources): (Vec<&Metric<'_>>, Vec<&Metric<'_>>) = metrics.iter().partition(|metric| metric.is_dependency);

        [(SOURCE_KEY, sources), (DEPENDENCIES_KEY, dependencies)]
            .into_iter()
            .enumerate()
            .map(|(index, (key, members))| {
                let total_us = sum_us(&members);
                self.build_group(index + 1, key, members, total_us, grand_total_us)
            })
            .collect()
    }

    fn build_group(&self, rank: usize, key: &str, mut members: Vec<&Metric<'_>>, total_us: f64, grand_total_us: f64) -> RankedGroup {
        let count = members.len();

        members.sort_by(|a, b| b.duration_us().total_cmp(&a.duration_us()));
        members.truncate(self.config.symbol_limit);

        RankedGroup {
            rank,
            key: key.to_string(),
            total_ms: total_us / 1000.0,
            percentage: percentage(total_us, grand_total_us),
            count,
            items: members.into_iter().map(to_item).collect(),
        }
    }
}

fn sum_us(members: &[&Metric<'_>]) -> f64 {
    members.iter().map(|metric| metric.duration_us()).sum()
}

fn to_item(metric: &Metric<'_>) -> RankedItem {
    let start = metric.start();
    RankedItem {
        duration_ms: metric.duration_ms(),
        name: metric.name().to_string(),
        path: metric.path().to_string(),
        line: start.line,
        column: start.character,
    }
}

/// Integer share of `part` in `whole`, or zero when there is nothing to share.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "value is clamped to 0..=100")]
fn percentage(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || !whole.is_finite() {
        return 0;
    }

    (part / whole * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::extract;
    use crate::testutil::{check, symbol};
    use crate::trace::{CatalogEntry, TraceEvent};

    fn config(file_limit: usize, symbol_limit: usize) -> Config {
        Config {
            file_limit,
            symbol_limit,
            ..Config::default()
        }
    }

    /// Three files: a.ts totals 60µs, b.ts totals 30µs, c.ts totals 10µs.
    fn three_files() -> (Vec<TraceEvent>, Vec<CatalogEntry>) {
        let trace = vec![check(1, 0, 40.0), check(2, 0, 20.0), check(3, 0, 30.0), check(4, 0, 10.0)];
        let catalog = vec![
            symbol(1, "A1", "/proj/src/a.ts", 1, 0),
            symbol(2, "A2", "/proj/src/a.ts", 2, 0),
            symbol(3, "B1", "/proj/src/b.ts", 1, 0),
            symbol(4, "C1", "/proj/src/c.ts", 1, 0),
        ];
        (trace, catalog)
    }

    #[test]
    fn test_single_metric_is_whole_total() {
        let trace = vec![check(1, 2, 50.0)];
        let catalog = vec![symbol(1, "Foo", "/proj/src/a.ts", 1, 0)];
        let cfg = Config::default();
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        assert_eq!(ranking.groups.len(), 1);

        let group = &ranking.groups[0];
        assert_eq!(group.rank, 1);
        assert_eq!(group.key, "/proj/src/a.ts");
        assert!((group.total_ms - 0.05).abs() < 1e-9);
        assert_eq!(group.percentage, 100);
        assert_eq!(group.count, 1);
        assert_eq!(group.items[0].name, "Foo");
        assert_eq!(group.items[0].line, 1);
        assert_eq!(group.items[0].column, 0);
    }

    #[test]
    fn test_files_ordered_by_total() {
        let (trace, catalog) = three_files();
        let cfg = Config::default();
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        let keys: Vec<_> = ranking.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["/proj/src/a.ts", "/proj/src/b.ts", "/proj/src/c.ts"]);

        let percentages: Vec<_> = ranking.groups.iter().map(|g| g.percentage).collect();
        assert_eq!(percentages, vec![60, 30, 10]);

        assert!((ranking.total_ms - 0.1).abs() < 1e-9);
        assert_eq!(ranking.metric_count, 4);

        // Group totals cover every member before truncation
        let sum: f64 = ranking.groups.iter().map(|g| g.total_ms).sum();
        assert!((sum - ranking.total_ms).abs() < 1e-9);
    }

    #[test]
    fn test_file_limit_keeps_heaviest_files() {
        let (trace, catalog) = three_files();
        let cfg = config(2, 10);
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        assert_eq!(ranking.groups.len(), 2);
        assert_eq!(ranking.groups[1].key, "/proj/src/b.ts");
        assert_eq!(ranking.groups[1].rank, 2);

        // Percentages stay relative to every filtered metric
        assert_eq!(ranking.groups[0].percentage, 60);
        assert!((ranking.total_ms - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_symbol_limit_keeps_count_and_total() {
        let (trace, catalog) = three_files();
        let cfg = config(50, 1);
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        let first = &ranking.groups[0];
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].name, "A1");
        assert_eq!(first.count, 2);
        assert!((first.total_ms - 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_zero_limits() {
        let (trace, catalog) = three_files();
        let cfg = config(0, 0);
        let metrics = extract(&trace, &catalog, &cfg);

        let ranker = Ranker::new(&cfg);
        assert!(ranker.rank(&metrics, Grouping::File).groups.is_empty());

        let origins = ranker.rank(&metrics, Grouping::Origin);
        assert_eq!(origins.groups.len(), 2);
        assert!(origins.groups.iter().all(|group| group.items.is_empty()));
        assert_eq!(origins.groups[0].count, 4);
    }

    #[test]
    fn test_equal_totals_keep_path_order() {
        let trace = vec![check(1, 0, 10.0), check(2, 0, 10.0), check(3, 0, 10.0)];
        let catalog = vec![
            symbol(1, "Z", "/proj/src/z.ts", 1, 0),
            symbol(2, "A", "/proj/src/a.ts", 1, 0),
            symbol(3, "M", "/proj/src/m.ts", 1, 0),
        ];
        let cfg = Config::default();
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        let keys: Vec<_> = ranking.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["/proj/src/a.ts", "/proj/src/m.ts", "/proj/src/z.ts"]);
    }

    #[test]
    fn test_equal_durations_keep_catalog_order() {
        let trace = vec![check(1, 0, 10.0), check(2, 0, 10.0), check(3, 0, 20.0)];
        let catalog = vec![
            symbol(1, "First", "/proj/src/a.ts", 1, 0),
            symbol(2, "Second", "/proj/src/a.ts", 2, 0),
            symbol(3, "Heaviest", "/proj/src/a.ts", 3, 0),
        ];
        let cfg = Config::default();
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        let names: Vec<_> = ranking.groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Heaviest", "First", "Second"]);
    }

    #[test]
    fn test_zero_durations_give_zero_percent() {
        let trace = vec![check(1, 0, 0.0)];
        let catalog = vec![symbol(1, "Foo", "/proj/src/a.ts", 1, 0)];
        let cfg = Config::default();
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::File);
        assert_eq!(ranking.groups[0].percentage, 0);
        assert!(ranking.total_ms.abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_metrics() {
        let cfg = Config::default();
        let ranker = Ranker::new(&cfg);

        let files = ranker.rank(&[], Grouping::File);
        assert!(files.groups.is_empty());
        assert_eq!(files.metric_count, 0);

        let origins = ranker.rank(&[], Grouping::Origin);
        assert_eq!(origins.groups.len(), 2);
        assert!(origins.groups.iter().all(|g| g.count == 0 && g.percentage == 0));
    }

    #[test]
    fn test_origin_buckets() {
        let trace = vec![check(1, 0, 10.0), check(2, 0, 60.0), check(3, 0, 30.0)];
        let catalog = vec![
            symbol(1, "Local", "/proj/src/a.ts", 1, 0),
            symbol(2, "Props", "/proj/node_modules/mobx/model.d.ts", 82, 73),
            symbol(3, "Other", "/proj/node_modules/react/index.d.ts", 5, 2),
        ];
        let cfg = Config::default();
        let metrics = extract(&trace, &catalog, &cfg);

        let ranking = Ranker::new(&cfg).rank(&metrics, Grouping::Origin);
        assert_eq!(ranking.grouping, Grouping::Origin);
        assert_eq!(ranking.groups.len(), 2);

        let source = &ranking.groups[0];
        assert_eq!(source.key, SOURCE_KEY);
        assert_eq!(source.count, 1);
        assert_eq!(source.percentage, 10);

        let deps = &ranking.groups[1];
        assert_eq!(deps.key, DEPENDENCIES_KEY);
        assert_eq!(deps.count, 2);
        assert_eq!(deps.percentage, 90);
        let names: Vec<_> = deps.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Props", "Other"]);
        assert_eq!(deps.items[0].line, 82);
        assert_eq!(deps.items[0].column, 73);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let (trace, catalog) = three_files();
        let cfg = config(2, 1);
        let metrics = extract(&trace, &catalog, &cfg);
        let ranker = Ranker::new(&cfg);

        assert_eq!(ranker.rank(&metrics, Grouping::File), ranker.rank(&metrics, Grouping::File));
        assert_eq!(ranker.rank(&metrics, Grouping::Origin), ranker.rank(&metrics, Grouping::Origin));
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(1.0, 0.0), 0);
        assert_eq!(percentage(1.0, f64::NAN), 0);
    }

    #[test]
    fn test_grouping_names() {
        assert_eq!(Grouping::File.to_string(), "file");
        assert_eq!(Grouping::Origin.to_string(), "origin");
    }
}
