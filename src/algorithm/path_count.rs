//! 有界路径计数
//!
//! 在可能含环的图上枚举所有满足条件的路径（允许重复经过顶点），不做记忆化。
//! 使用显式工作栈代替递归，栈帧为 (顶点, 剩余预算)。

use crate::error::{Error, Result};
use crate::graph::{Adjacency, WeightedEdge};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// 路径计数条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// 最多 limit 跳
    #[serde(rename = "lessthan", alias = "less_than")]
    LessThan,
    /// 恰好 limit 跳
    #[serde(rename = "exact")]
    Exact,
    /// 总权重严格小于 limit
    #[serde(rename = "cost_lessthan", alias = "cost_less_than")]
    CostLessThan,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::LessThan => "lessthan",
            Condition::Exact => "exact",
            Condition::CostLessThan => "cost_lessthan",
        };
        f.write_str(name)
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lessthan" | "less_than" => Ok(Condition::LessThan),
            "exact" => Ok(Condition::Exact),
            "cost_lessthan" | "cost_less_than" => Ok(Condition::CostLessThan),
            _ => Err(Error::ParseError(format!("未知的路径条件: {}", s))),
        }
    }
}

/// 路径计数器
pub struct PathCounter<'g, G> {
    graph: &'g G,
}

impl<'g, G: Adjacency> PathCounter<'g, G> {
    /// 创建计数器
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// 统计从 start 到 destination 满足条件的路径数。
    ///
    /// 顶点存在性在枚举前检查一次，与 limit 的取值无关。
    ///
    /// `CostLessThan` 要求从 start 可达的环上至少有一条正权边：
    /// 总权重为 0 的环不消耗预算，枚举不会结束。
    pub fn count(
        &self,
        start: &G::Vertex,
        destination: &G::Vertex,
        limit: i64,
        condition: Condition,
    ) -> Result<u64> {
        if !self.graph.contains_vertex(start) {
            return Err(Error::vertex_not_found(start));
        }
        if !self.graph.contains_vertex(destination) {
            return Err(Error::vertex_not_found(destination));
        }

        // 三种条件都先把 limit 减一
        let budget = limit.saturating_sub(1);
        let found = match condition {
            Condition::LessThan => self.count_hops(start, destination, budget, false),
            Condition::Exact => self.count_hops(start, destination, budget, true),
            Condition::CostLessThan => self.count_cost(start, destination, budget)?,
        };

        debug!(?start, ?destination, limit, %condition, found, "路径计数完成");
        Ok(found)
    }

    /// 按跳数计数。exact 为 true 时只在剩余跳数恰好为 0 时计入。
    fn count_hops(
        &self,
        start: &G::Vertex,
        destination: &G::Vertex,
        budget: i64,
        exact: bool,
    ) -> u64 {
        let graph = self.graph;
        let mut found = 0;
        let mut stack = vec![(start, budget)];

        while let Some((vertex, remaining)) = stack.pop() {
            if remaining < 0 {
                continue;
            }

            for edge in graph.outgoing(vertex).unwrap_or(&[]) {
                let terminal = edge.terminal();
                if terminal == destination && (!exact || remaining == 0) {
                    found += 1;
                } else if graph.has_outgoing(terminal) {
                    stack.push((terminal, remaining - 1));
                }
            }
        }

        found
    }

    /// 按累计权重计数。每一步都重新查询边权，查询失败说明边在计数期间被删除。
    ///
    /// 预算只随边权减少，零权环会让工作栈无限增长。
    fn count_cost(&self, start: &G::Vertex, destination: &G::Vertex, budget: i64) -> Result<u64> {
        let graph = self.graph;
        let mut found = 0;
        let mut stack = vec![(start, budget)];

        while let Some((vertex, remaining)) = stack.pop() {
            if remaining < 0 {
                continue;
            }

            for edge in graph.outgoing(vertex).unwrap_or(&[]) {
                let terminal = edge.terminal();
                let weight = graph
                    .cost_neighbour(vertex, terminal)
                    .map_err(|_| Error::concurrent_mutation(vertex, terminal))?;
                let left = remaining.saturating_sub(weight);

                if terminal == destination {
                    // 最后一步超出预算时整条边跳过
                    if left < 0 {
                        continue;
                    }
                    found += 1;
                }

                // 允许经过终点后继续绕环
                if graph.has_outgoing(terminal) {
                    stack.push((terminal, left));
                }
            }
        }

        Ok(found)
    }
}
