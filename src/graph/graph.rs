//! 图数据结构
//!
//! 基于邻接表的有向带权图。顶点按插入顺序保存，每个顶点的出边按追加顺序保存。

use super::adjacency::{Adjacency, VertexKey};
use super::edge::{Edge, Weight};
use super::visited::VisitedSet;
use crate::algorithm::{path_cost, Condition, DepthFirst, PathCounter, ShortestPath, ShortestPathFinder};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::trace;

/// 默认初始容量
pub const DEFAULT_CAPACITY: usize = 10;

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// 顶点表初始容量（超出后自动增长）
    pub initial_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// 有向带权图
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 顶点 -> 出边列表
    vertices: IndexMap<V, Vec<Edge<V>>>,
}

impl<V: VertexKey> Graph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 按容量创建空图
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig {
            initial_capacity: capacity,
        })
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: IndexMap::with_capacity(config.initial_capacity),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点。顶点已存在时清空其出边列表（位置不变）。
    pub fn add_vertex(&mut self, vertex: V) {
        if let Some(old) = self.vertices.insert(vertex, Vec::new()) {
            trace!(dropped = old.len(), "顶点已存在，出边列表被重置");
        }
    }

    /// 删除顶点及所有指向它的边
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        if self.vertices.shift_remove(vertex).is_none() {
            return Err(Error::vertex_not_found(vertex));
        }

        for edges in self.vertices.values_mut() {
            edges.retain(|edge| edge.terminal() != vertex);
        }

        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 获取顶点的所有出边
    pub fn edges(&self, vertex: &V) -> Result<&[Edge<V>]> {
        self.vertices
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex: &V) -> Result<usize> {
        self.edges(vertex).map(<[Edge<V>]>::len)
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    /// 添加边 v -> w（追加到 v 的出边列表末尾）
    pub fn set_edge(&mut self, v: &V, w: &V, weight: Weight) -> Result<()> {
        if !self.vertices.contains_key(w) {
            return Err(Error::vertex_not_found(w));
        }
        let edges = self
            .vertices
            .get_mut(v)
            .ok_or_else(|| Error::vertex_not_found(v))?;

        if edges.iter().any(|edge| edge.terminal() == w) {
            return Err(Error::duplicate_edge(v, w));
        }

        edges.push(Edge::new(w.clone(), weight));
        Ok(())
    }

    /// 删除边 v -> w，其余边保持原有顺序
    pub fn del_edge(&mut self, v: &V, w: &V) -> Result<Edge<V>> {
        let (edges, position) = self.locate_mut(v, w)?;
        match position {
            Some(i) => Ok(edges.remove(i)),
            None => Err(Error::no_such_edge(v, w)),
        }
    }

    /// 判断边 v -> w 是否存在
    pub fn is_edge(&self, v: &V, w: &V) -> Result<bool> {
        let (_, position) = self.locate(v, w)?;
        Ok(position.is_some())
    }

    /// 获取边 v -> w 的权重
    pub fn weight(&self, v: &V, w: &V) -> Result<Weight> {
        match self.locate(v, w)? {
            (edges, Some(i)) => Ok(edges[i].weight()),
            (_, None) => Err(Error::no_such_edge(v, w)),
        }
    }

    /// 获取 v 的第一条出边
    pub fn first(&self, v: &V) -> Result<Option<&Edge<V>>> {
        Ok(self.edges(v)?.first())
    }

    /// 获取 v 的出边列表中紧跟在 v -> w 之后的边。
    ///
    /// v -> w 是最后一条边时返回 `Ok(None)`；v 没有指向 w 的边时返回 `NoSuchEdge`。
    pub fn next(&self, v: &V, w: &V) -> Result<Option<&Edge<V>>> {
        match self.locate(v, w)? {
            (edges, Some(i)) => Ok(edges.get(i + 1)),
            (_, None) => Err(Error::no_such_edge(v, w)),
        }
    }

    /// 校验两个顶点都存在，并返回 v 的出边列表及 v -> w 的位置
    fn locate(&self, v: &V, w: &V) -> Result<(&[Edge<V>], Option<usize>)> {
        if !self.vertices.contains_key(w) {
            return Err(Error::vertex_not_found(w));
        }
        let edges = self.edges(v)?;
        let position = edges.iter().position(|edge| edge.terminal() == w);
        Ok((edges, position))
    }

    fn locate_mut(&mut self, v: &V, w: &V) -> Result<(&mut Vec<Edge<V>>, Option<usize>)> {
        if !self.vertices.contains_key(w) {
            return Err(Error::vertex_not_found(w));
        }
        let edges = self
            .vertices
            .get_mut(v)
            .ok_or_else(|| Error::vertex_not_found(v))?;
        let position = edges.iter().position(|edge| edge.terminal() == w);
        Ok((edges, position))
    }

    // ==================== 路由查询 ====================

    /// 相邻两点之间边的权重
    pub fn cost_neighbour(&self, start: &V, destination: &V) -> Result<Weight> {
        Adjacency::cost_neighbour(self, start, destination)
    }

    /// 计算路径总权重
    pub fn cost(&self, path: &[V]) -> Result<Weight> {
        path_cost(self, path)
    }

    /// 统计满足条件的路径数
    pub fn paths_to(
        &self,
        start: &V,
        destination: &V,
        limit: i64,
        condition: Condition,
    ) -> Result<u64> {
        PathCounter::new(self).count(start, destination, limit, condition)
    }

    /// Dijkstra 最短路径长度
    pub fn shortest_path(&self, start: &V, destination: &V) -> Result<Weight> {
        self.dijkstra(start, destination).map(|path| path.distance)
    }

    /// Dijkstra 最短路径（含路线和已确定顶点集合）
    pub fn dijkstra(&self, start: &V, destination: &V) -> Result<ShortestPath<V>> {
        ShortestPathFinder::new(self).find(start, destination)
    }

    /// 从 start 深度优先遍历，返回可达顶点集合
    pub fn do_traversal(&self, start: &V) -> Result<VisitedSet<V>> {
        DepthFirst::new(self).traverse(start)
    }
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> Adjacency for Graph<V> {
    type Vertex = V;
    type Edge = Edge<V>;
    type Vertices<'a> = indexmap::map::Keys<'a, V, Vec<Edge<V>>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.keys()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn outgoing(&self, vertex: &V) -> Option<&[Edge<V>]> {
        self.vertices.get(vertex).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D", "E", "F"] {
            graph.add_vertex(v);
        }

        graph.set_edge(&"A", &"B", 5).unwrap();
        graph.set_edge(&"A", &"C", 10).unwrap();
        graph.set_edge(&"B", &"C", 4).unwrap();
        graph.set_edge(&"B", &"E", 5).unwrap();
        graph.set_edge(&"B", &"D", 10).unwrap();
        graph.set_edge(&"C", &"E", 1).unwrap();
        graph.set_edge(&"D", &"F", 1).unwrap();
        graph.set_edge(&"D", &"E", 2).unwrap();
        graph.set_edge(&"E", &"F", 10).unwrap();

        graph
    }

    fn terminals(graph: &Graph<&'static str>, v: &'static str) -> Vec<&'static str> {
        graph.edges(&v).unwrap().iter().map(|e| *e.terminal()).collect()
    }

    #[test]
    fn test_graph_counts() {
        let graph = create_test_graph();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 9);
        assert!(graph.edges(&"F").unwrap().is_empty());
        assert_eq!(graph.out_degree(&"B").unwrap(), 3);
    }

    #[test]
    fn test_add_vertex_resets_edges() {
        let mut graph = create_test_graph();
        graph.add_vertex("Z");
        assert!(graph.edges(&"Z").unwrap().is_empty());

        graph.add_vertex("B");
        assert!(graph.edges(&"B").unwrap().is_empty());
        assert_eq!(graph.edge_count(), 6);
        // 位置不变
        assert_eq!(graph.vertices().position(|v| *v == "B"), Some(1));
    }

    #[test]
    fn test_set_edge_appends() {
        let mut graph = create_test_graph();
        graph.set_edge(&"C", &"D", 5).unwrap();
        assert_eq!(terminals(&graph, "C"), vec!["E", "D"]);
    }

    #[test]
    fn test_set_edge_missing_vertex() {
        let mut graph = create_test_graph();
        assert!(matches!(
            graph.set_edge(&"A", &"INVALID", 5),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            graph.set_edge(&"INVALID", &"A", 5),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_set_edge_duplicate() {
        let mut graph = create_test_graph();
        graph.set_edge(&"C", &"D", 5).unwrap();
        assert!(matches!(
            graph.set_edge(&"C", &"D", 5),
            Err(Error::DuplicateEdge { .. })
        ));

        graph.del_edge(&"C", &"D").unwrap();
        graph.set_edge(&"C", &"D", 5).unwrap();
        assert_eq!(graph.weight(&"C", &"D").unwrap(), 5);
    }

    #[test]
    fn test_del_edge_preserves_order() {
        let mut graph = create_test_graph();
        let removed = graph.del_edge(&"B", &"E").unwrap();
        assert_eq!(removed, Edge::new("E", 5));
        assert_eq!(terminals(&graph, "B"), vec!["C", "D"]);
        assert!(!graph.is_edge(&"B", &"E").unwrap());

        assert!(matches!(
            graph.del_edge(&"B", &"E"),
            Err(Error::NoSuchEdge { .. })
        ));
        assert!(matches!(
            graph.del_edge(&"B", &"Q"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_is_edge_and_weight() {
        let graph = create_test_graph();
        assert!(graph.is_edge(&"A", &"B").unwrap());
        assert!(!graph.is_edge(&"A", &"F").unwrap());
        assert!(matches!(
            graph.is_edge(&"A", &"Z"),
            Err(Error::VertexNotFound(_))
        ));

        assert_eq!(graph.weight(&"A", &"B").unwrap(), 5);
        assert!(matches!(
            graph.weight(&"A", &"F"),
            Err(Error::NoSuchEdge { .. })
        ));
    }

    #[test]
    fn test_first_and_next() {
        let graph = create_test_graph();
        assert_eq!(graph.first(&"A").unwrap().map(|e| *e.terminal()), Some("B"));
        assert_eq!(graph.first(&"F").unwrap(), None);
        assert!(matches!(graph.first(&"Z"), Err(Error::VertexNotFound(_))));

        assert_eq!(
            graph.next(&"B", &"C").unwrap().map(|e| *e.terminal()),
            Some("E")
        );
        // 最后一条边之后没有后继
        assert_eq!(graph.next(&"B", &"D").unwrap(), None);
        assert!(matches!(
            graph.next(&"B", &"F"),
            Err(Error::NoSuchEdge { .. })
        ));
        assert!(matches!(
            graph.next(&"B", &"Z"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_remove_vertex() {
        let mut graph = create_test_graph();
        graph.remove_vertex(&"E").unwrap();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(terminals(&graph, "B"), vec!["C", "D"]);
        assert_eq!(
            graph.vertices().copied().collect::<Vec<_>>(),
            vec!["A", "B", "C", "D", "F"]
        );
        assert!(matches!(
            graph.remove_vertex(&"E"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_cost_neighbour() {
        let graph = create_test_graph();
        assert_eq!(graph.cost_neighbour(&"A", &"B").unwrap(), 5);
        assert!(matches!(
            graph.cost_neighbour(&"A", &"Z"),
            Err(Error::NoSuchEdge { .. })
        ));
        assert!(matches!(
            graph.cost_neighbour(&"Z", &"A"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_with_config() {
        let graph: Graph<u32> = Graph::with_config(GraphConfig {
            initial_capacity: 64,
        });
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(GraphConfig::default().initial_capacity, DEFAULT_CAPACITY);
    }
}
