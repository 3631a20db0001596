//! 邻接视图
//!
//! 路由算法只通过该 trait 读取图，不直接依赖具体的存储结构

use super::edge::{Weight, WeightedEdge};
use crate::error::{Error, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点键：可比较、可哈希、可克隆，并能在错误信息中显示
pub trait VertexKey: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexKey for T {}

/// 只读邻接视图
pub trait Adjacency {
    type Vertex: VertexKey;
    type Edge: WeightedEdge<Self::Vertex>;
    type Vertices<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// 遍历所有顶点，顺序需在图未修改时保持稳定
    fn vertices(&self) -> Self::Vertices<'_>;

    fn vertex_count(&self) -> usize;

    /// 顶点的出边列表，顶点不存在时返回 None
    fn outgoing(&self, vertex: &Self::Vertex) -> Option<&[Self::Edge]>;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.outgoing(vertex).is_some()
    }

    /// 顶点是否有出边（不存在的顶点视为没有）
    fn has_outgoing(&self, vertex: &Self::Vertex) -> bool {
        self.outgoing(vertex).map_or(false, |edges| !edges.is_empty())
    }

    /// 相邻两点之间边的权重
    fn cost_neighbour(&self, start: &Self::Vertex, destination: &Self::Vertex) -> Result<Weight> {
        let edges = self
            .outgoing(start)
            .ok_or_else(|| Error::vertex_not_found(start))?;

        edges
            .iter()
            .find(|edge| edge.terminal() == destination)
            .map(|edge| edge.weight())
            .ok_or_else(|| Error::no_such_edge(start, destination))
    }
}
