//! 查询指标收集模块
//!
//! 统计各类路由查询的次数、失败数和耗时，并支持导出

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 查询类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    ShortestPath,
    PathCount,
    Traversal,
    Cost,
}

impl QueryKind {
    fn index(self) -> usize {
        match self {
            QueryKind::ShortestPath => 0,
            QueryKind::PathCount => 1,
            QueryKind::Traversal => 2,
            QueryKind::Cost => 3,
        }
    }
}

const KIND_COUNT: usize = 4;

/// 单类查询统计
#[derive(Debug, Default)]
struct QueryStats {
    /// 总查询数
    total: AtomicU64,
    /// 失败查询数
    failed: AtomicU64,
    /// 查询总耗时（微秒）
    total_duration_us: AtomicU64,
}

/// 路由查询指标
#[derive(Debug)]
pub struct Metrics {
    queries: [QueryStats; KIND_COUNT],
    /// 路径计数累计找到的路径数
    paths_counted: AtomicU64,
    /// 启动时间
    start_time: Instant,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub shortest_path_queries: u64,
    pub path_count_queries: u64,
    pub traversal_queries: u64,
    pub cost_queries: u64,
    pub failed_queries: u64,
    pub avg_query_duration_ms: f64,
    pub paths_counted: u64,
    pub uptime_seconds: u64,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            queries: Default::default(),
            paths_counted: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// 记录查询开始
    pub fn record_query_start(&self, kind: QueryKind) -> QueryTimer {
        self.queries[kind.index()]
            .total
            .fetch_add(1, Ordering::Relaxed);
        QueryTimer::new(kind)
    }

    /// 记录查询完成
    pub fn record_query_complete(&self, timer: QueryTimer, success: bool) {
        let stats = &self.queries[timer.kind.index()];
        if !success {
            stats.failed.fetch_add(1, Ordering::Relaxed);
        }
        stats
            .total_duration_us
            .fetch_add(timer.elapsed().as_micros() as u64, Ordering::Relaxed);
    }

    /// 记录路径计数结果
    pub fn record_paths_counted(&self, paths: u64) {
        self.paths_counted.fetch_add(paths, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total = |kind: QueryKind| self.queries[kind.index()].total.load(Ordering::Relaxed);
        let all_queries: u64 = self
            .queries
            .iter()
            .map(|s| s.total.load(Ordering::Relaxed))
            .sum();
        let failed_queries = self
            .queries
            .iter()
            .map(|s| s.failed.load(Ordering::Relaxed))
            .sum();
        let total_duration_us: u64 = self
            .queries
            .iter()
            .map(|s| s.total_duration_us.load(Ordering::Relaxed))
            .sum();

        let avg_query_duration_ms = if all_queries > 0 {
            (total_duration_us as f64) / (all_queries as f64) / 1000.0
        } else {
            0.0
        };

        MetricsSnapshot {
            shortest_path_queries: total(QueryKind::ShortestPath),
            path_count_queries: total(QueryKind::PathCount),
            traversal_queries: total(QueryKind::Traversal),
            cost_queries: total(QueryKind::Cost),
            failed_queries,
            avg_query_duration_ms,
            paths_counted: self.paths_counted.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 导出为 Prometheus 格式
    pub fn to_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        let mut content = String::new();

        content.push_str("# HELP routegraph_queries_total Total number of routing queries\n");
        content.push_str("# TYPE routegraph_queries_total counter\n");
        for (kind, value) in [
            ("shortest_path", snapshot.shortest_path_queries),
            ("path_count", snapshot.path_count_queries),
            ("traversal", snapshot.traversal_queries),
            ("cost", snapshot.cost_queries),
        ] {
            content.push_str(&format!(
                "routegraph_queries_total{{kind=\"{}\"}} {}\n",
                kind, value
            ));
        }

        content.push_str("# HELP routegraph_queries_failed_total Number of failed queries\n");
        content.push_str("# TYPE routegraph_queries_failed_total counter\n");
        content.push_str(&format!(
            "routegraph_queries_failed_total {}\n",
            snapshot.failed_queries
        ));

        content.push_str("# HELP routegraph_query_duration_avg_ms Average query duration in milliseconds\n");
        content.push_str("# TYPE routegraph_query_duration_avg_ms gauge\n");
        content.push_str(&format!(
            "routegraph_query_duration_avg_ms {:.3}\n",
            snapshot.avg_query_duration_ms
        ));

        content.push_str("# HELP routegraph_paths_counted_total Paths found by path counting\n");
        content.push_str("# TYPE routegraph_paths_counted_total counter\n");
        content.push_str(&format!(
            "routegraph_paths_counted_total {}\n",
            snapshot.paths_counted
        ));

        content.push_str("# HELP routegraph_uptime_seconds Process uptime in seconds\n");
        content.push_str("# TYPE routegraph_uptime_seconds counter\n");
        content.push_str(&format!(
            "routegraph_uptime_seconds {}\n",
            snapshot.uptime_seconds
        ));

        content
    }

    /// 重置所有指标
    pub fn reset(&self) {
        for stats in &self.queries {
            stats.total.store(0, Ordering::Relaxed);
            stats.failed.store(0, Ordering::Relaxed);
            stats.total_duration_us.store(0, Ordering::Relaxed);
        }
        self.paths_counted.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 查询计时器
pub struct QueryTimer {
    kind: QueryKind,
    start: Instant,
}

impl QueryTimer {
    fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}
