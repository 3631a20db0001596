//! 图算法模块
//!
//! 包含路径代价、Dijkstra 最短路径、有界路径计数和深度优先遍历

mod cost;
mod path_count;
mod shortest_path;
mod traversal;

pub use cost::path_cost;
pub use path_count::{Condition, PathCounter};
pub use shortest_path::{ShortestPath, ShortestPathFinder};
pub use traversal::DepthFirst;
