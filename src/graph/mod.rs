//! 图核心模块
//!
//! 定义边、邻接视图、访问记录和图存储

mod adjacency;
mod edge;
mod graph;
mod visited;

pub use adjacency::{Adjacency, VertexKey};
pub use edge::{Edge, Weight, WeightedEdge};
pub use graph::{Graph, GraphConfig, DEFAULT_CAPACITY};
pub use visited::VisitedSet;
