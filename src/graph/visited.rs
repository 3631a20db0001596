//! 访问记录
//!
//! 遍历和最短路径计算时标记过的顶点集合。每次调用都会新建一个集合返回给调用方，
//! 不会在多次调用之间累积。

use std::collections::HashSet;
use std::hash::Hash;

/// 已访问顶点集合（只记录成员关系）
#[derive(Debug, Clone)]
pub struct VisitedSet<V> {
    marked: HashSet<V>,
}

impl<V: Eq + Hash> VisitedSet<V> {
    /// 创建空集合
    pub fn new() -> Self {
        Self {
            marked: HashSet::new(),
        }
    }

    /// 按顶点数预留容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            marked: HashSet::with_capacity(capacity),
        }
    }

    /// 标记顶点，首次标记返回 true
    pub fn visit(&mut self, vertex: V) -> bool {
        self.marked.insert(vertex)
    }

    /// 顶点是否已标记
    pub fn is_visited(&self, vertex: &V) -> bool {
        self.marked.contains(vertex)
    }

    /// 设置标记。`_value` 不会被保存，集合只记录成员关系。
    pub fn set_mark(&mut self, vertex: V, _value: i32) {
        self.marked.insert(vertex);
    }

    /// 已标记返回 1，否则返回 0
    pub fn get_mark(&self, vertex: &V) -> i32 {
        if self.marked.contains(vertex) {
            1
        } else {
            0
        }
    }

    /// 已标记顶点数
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// 遍历已标记顶点（无序）
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.marked.iter()
    }
}

impl<V: Eq + Hash> Default for VisitedSet<V> {
    fn default() -> Self {
        Self::new()
    }
}
