//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边已存在: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("边不存在: {from} -> {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("路径过短: 至少需要 2 个顶点, 实际 {0}")]
    PathTooShort(usize),

    #[error("不存在路径: {from} -> {to}")]
    NoPath { from: String, to: String },

    #[error("计数过程中边被删除: {from} -> {to}")]
    ConcurrentMutation { from: String, to: String },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::VertexNotFound(format!("{:?}", vertex))
    }

    pub(crate) fn duplicate_edge<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::DuplicateEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn no_such_edge<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::NoSuchEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn no_path<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::NoPath {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn concurrent_mutation<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::ConcurrentMutation {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
