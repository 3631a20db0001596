//! 路径代价

use crate::error::{Error, Result};
use crate::graph::{Adjacency, Weight};

/// 计算路径总权重：相邻顶点之间边权之和。
///
/// 路径少于 2 个顶点时返回 `PathTooShort`；任意相邻两点之间没有直接相连的边时返回 `NoSuchEdge`。
pub fn path_cost<G: Adjacency>(graph: &G, path: &[G::Vertex]) -> Result<Weight> {
    if path.len() < 2 {
        return Err(Error::PathTooShort(path.len()));
    }

    path.windows(2).try_fold(0, |total: Weight, pair| {
        Ok(total + graph.cost_neighbour(&pair[0], &pair[1])?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn create_general_graph() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(v);
        }

        graph.set_edge(&"A", &"B", 5).unwrap();
        graph.set_edge(&"B", &"C", 4).unwrap();
        graph.set_edge(&"C", &"D", 7).unwrap();
        graph.set_edge(&"D", &"C", 8).unwrap();
        graph.set_edge(&"D", &"E", 6).unwrap();
        graph.set_edge(&"A", &"D", 5).unwrap();
        graph.set_edge(&"C", &"E", 2).unwrap();
        graph.set_edge(&"E", &"B", 3).unwrap();
        graph.set_edge(&"A", &"E", 7).unwrap();

        graph
    }

    #[test]
    fn test_path_cost() {
        let graph = create_general_graph();
        assert_eq!(path_cost(&graph, &["A", "B", "C"]).unwrap(), 9);
        assert_eq!(path_cost(&graph, &["A", "D"]).unwrap(), 5);
        assert_eq!(path_cost(&graph, &["A", "D", "C"]).unwrap(), 13);
        assert_eq!(path_cost(&graph, &["A", "E", "B", "C", "D"]).unwrap(), 21);
    }

    #[test]
    fn test_path_cost_no_such_route() {
        let graph = create_general_graph();
        assert!(matches!(
            path_cost(&graph, &["A", "E", "D"]),
            Err(Error::NoSuchEdge { .. })
        ));
    }

    #[test]
    fn test_path_too_short() {
        let graph = create_general_graph();
        assert!(matches!(
            path_cost(&graph, &["A"]),
            Err(Error::PathTooShort(1))
        ));
        assert!(matches!(path_cost(&graph, &[]), Err(Error::PathTooShort(0))));
    }
}
