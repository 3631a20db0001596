//! 深度优先遍历

use crate::error::{Error, Result};
use crate::graph::{Adjacency, VisitedSet, WeightedEdge};
use tracing::debug;

/// 深度优先遍历器
pub struct DepthFirst<'g, G> {
    graph: &'g G,
}

impl<'g, G: Adjacency> DepthFirst<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// 从 start 出发遍历，返回全部可达顶点（含 start）。每次调用返回新的集合。
    pub fn traverse(&self, start: &G::Vertex) -> Result<VisitedSet<G::Vertex>> {
        let visited = self.walk(start, |_| {})?;
        debug!(?start, reached = visited.len(), "深度优先遍历完成");
        Ok(visited)
    }

    /// 按访问顺序（先序）返回可达顶点
    pub fn preorder(&self, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
        let mut order = Vec::new();
        self.walk(start, |vertex| order.push(vertex.clone()))?;
        Ok(order)
    }

    /// 显式栈实现的先序遍历。出边逆序入栈，使访问顺序与按出边顺序递归一致。
    fn walk<F>(&self, start: &G::Vertex, mut on_visit: F) -> Result<VisitedSet<G::Vertex>>
    where
        F: FnMut(&G::Vertex),
    {
        if !self.graph.contains_vertex(start) {
            return Err(Error::vertex_not_found(start));
        }

        let graph = self.graph;
        let mut visited = VisitedSet::with_capacity(graph.vertex_count() + 1);
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if !visited.visit(vertex.clone()) {
                continue;
            }
            on_visit(vertex);

            for edge in graph.outgoing(vertex).unwrap_or(&[]).iter().rev() {
                if !visited.is_visited(edge.terminal()) {
                    stack.push(edge.terminal());
                }
            }
        }

        Ok(visited)
    }
}
