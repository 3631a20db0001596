//! 边定义
//!
//! 有向带权边：只记录终点和权重，源顶点由所在的邻接表决定

use serde::{Deserialize, Serialize};

/// 边权重（整数）
pub type Weight = i64;

/// 带权边的能力约定：终点 + 权重
pub trait WeightedEdge<V> {
    /// 获取终点
    fn terminal(&self) -> &V;

    /// 获取权重
    fn weight(&self) -> Weight;
}

/// 边
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    /// 终点
    terminal: V,
    /// 权重
    weight: Weight,
}

impl<V> Edge<V> {
    /// 创建新边
    pub fn new(terminal: V, weight: Weight) -> Self {
        Self { terminal, weight }
    }

    /// 获取终点
    pub fn terminal(&self) -> &V {
        &self.terminal
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 拆分为 (终点, 权重)
    pub fn into_parts(self) -> (V, Weight) {
        (self.terminal, self.weight)
    }
}

impl<V> WeightedEdge<V> for Edge<V> {
    fn terminal(&self) -> &V {
        &self.terminal
    }

    fn weight(&self) -> Weight {
        self.weight
    }
}

impl<V> From<(V, Weight)> for Edge<V> {
    fn from((terminal, weight): (V, Weight)) -> Self {
        Self::new(terminal, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<E: WeightedEdge<&'static str>>(edges: &[E]) -> Weight {
        edges.iter().map(|e| e.weight()).sum()
    }

    #[test]
    fn test_edge_accessors() {
        let e = Edge::new("B", 5);
        assert_eq!(e.terminal(), &"B");
        assert_eq!(e.weight(), 5);
        assert_eq!(e.into_parts(), ("B", 5));
    }

    #[test]
    fn test_edge_from_tuple() {
        let e: Edge<&str> = ("C", 4).into();
        assert_eq!(e, Edge::new("C", 4));
    }

    #[test]
    fn test_weighted_edge_trait() {
        let edges = vec![Edge::new("B", 5), Edge::new("D", 5), Edge::new("E", 7)];
        assert_eq!(total(&edges), 17);
        assert_eq!(WeightedEdge::terminal(&edges[2]), &"E");
    }

    #[test]
    fn test_edge_serialization() {
        let e = Edge::new("A".to_string(), 10);
        let json = serde_json::to_string(&e).unwrap();
        let restored: Edge<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(e, restored);
    }
}
