//! Dijkstra 最短路径
//!
//! 每次调用都在全部顶点上完整运行（目标顶点确定后不提前结束）。
//! 前提：所有边权非负，负权重下结果无意义且不做校验。

use crate::error::{Error, Result};
use crate::graph::{Adjacency, VisitedSet, Weight, WeightedEdge};
use std::collections::HashMap;
use tracing::{debug, trace};

/// 最短路径结果
#[derive(Debug, Clone)]
pub struct ShortestPath<V> {
    /// 路径总权重
    pub distance: Weight,
    /// 路线（从起点到终点的顶点序列）
    pub route: Vec<V>,
    /// 本次计算中已确定最短距离的顶点
    pub settled: VisitedSet<V>,
}

impl<V> ShortestPath<V> {
    /// 路线经过的边数
    pub fn hops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// 最短路径查找器
pub struct ShortestPathFinder<'g, G> {
    graph: &'g G,
}

impl<'g, G: Adjacency> ShortestPathFinder<'g, G> {
    /// 创建查找器
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// 只返回最短距离
    pub fn distance(&self, start: &G::Vertex, destination: &G::Vertex) -> Result<Weight> {
        self.find(start, destination).map(|path| path.distance)
    }

    /// 计算 start 到 destination 的最短路径。
    ///
    /// start 与 destination 相同时返回经过 start 的最短环路，而不是 0。
    pub fn find(
        &self,
        start: &G::Vertex,
        destination: &G::Vertex,
    ) -> Result<ShortestPath<G::Vertex>> {
        let graph = self.graph;
        let start_edges = graph
            .outgoing(start)
            .ok_or_else(|| Error::vertex_not_found(start))?;
        if !graph.contains_vertex(destination) {
            return Err(Error::vertex_not_found(destination));
        }

        let vertex_count = graph.vertex_count();
        // 缺省即无穷远
        let mut distances: HashMap<&G::Vertex, Weight> = HashMap::with_capacity(vertex_count);
        let mut predecessors: HashMap<&G::Vertex, &G::Vertex> =
            HashMap::with_capacity(vertex_count);
        let mut settled = VisitedSet::with_capacity(vertex_count + 1);

        // 阶段 1：起点的直接邻居
        for edge in start_edges {
            distances.insert(edge.terminal(), edge.weight());
            predecessors.insert(edge.terminal(), start);
        }
        settled.visit(start.clone());

        for round in 0..vertex_count {
            // 阶段 2：选出未确定顶点中距离最小者（相同距离取顶点顺序靠前者）
            let mut pointer: Option<(&G::Vertex, Weight)> = None;
            for vertex in graph.vertices() {
                if settled.is_visited(vertex) {
                    continue;
                }
                if let Some(&distance) = distances.get(vertex) {
                    if pointer.map_or(true, |(_, min)| distance < min) {
                        pointer = Some((vertex, distance));
                    }
                }
            }

            let (current, min) = match pointer {
                Some(selected) => selected,
                None => {
                    trace!(round, "没有可到达的未确定顶点");
                    break;
                }
            };
            settled.visit(current.clone());

            // 阶段 3：松弛 current 的出边
            for edge in graph.outgoing(current).unwrap_or(&[]) {
                let terminal = edge.terminal();
                let candidate = min.saturating_add(edge.weight());
                if distances.get(terminal).map_or(true, |&known| candidate < known) {
                    distances.insert(terminal, candidate);
                    predecessors.insert(terminal, current);
                }
            }
        }

        let distance = match distances.get(destination) {
            Some(&distance) => distance,
            None => {
                debug!(?start, ?destination, settled = settled.len(), "目标不可达");
                return Err(Error::no_path(start, destination));
            }
        };

        let route = reconstruct_route(start, destination, &predecessors, vertex_count);
        debug!(
            ?start,
            ?destination,
            distance,
            hops = route.len().saturating_sub(1),
            settled = settled.len(),
            "最短路径计算完成"
        );

        Ok(ShortestPath {
            distance,
            route,
            settled,
        })
    }
}

/// 沿前驱链从终点回溯到起点
fn reconstruct_route<V: Clone + Eq + std::hash::Hash>(
    start: &V,
    destination: &V,
    predecessors: &HashMap<&V, &V>,
    vertex_count: usize,
) -> Vec<V> {
    let mut route = vec![destination.clone()];
    let mut current = predecessors.get(destination).copied();

    while let Some(vertex) = current {
        if vertex == start {
            break;
        }
        // 负权重时前驱链可能成环
        if route.len() > vertex_count {
            break;
        }
        route.push(vertex.clone());
        current = predecessors.get(vertex).copied();
    }

    route.push(start.clone());
    route.reverse();
    route
}
