//! RouteGraph - 有向带权图路由库
//!
//! 基于邻接表的有向整数权重图，支持：
//! - 保持顺序的边增删与迭代
//! - Dijkstra 最短路径
//! - 按跳数 / 恰好跳数 / 累计权重的有界路径计数
//! - 深度优先可达性遍历
//! - 从 CSV、JSON Lines 批量导入边列表

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;
pub mod metrics;

// 重导出常用类型
pub use algorithm::{Condition, ShortestPath};
pub use error::{Error, Result};
pub use graph::{Adjacency, Edge, Graph, GraphConfig, VertexKey, VisitedSet, Weight, WeightedEdge};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
