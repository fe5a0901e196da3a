//! 错误类型定义

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(VertexId),

    #[error("边不存在: {0} -> {1}")]
    EdgeNotFound(VertexId, VertexId),

    #[error("边已存在: {0} -> {1}")]
    EdgeAlreadyExists(VertexId, VertexId),

    #[error("边端点不存在: {0} -> {1}")]
    InvalidEndpoints(VertexId, VertexId),

    #[error("无法生成 {requested} 条不重复的边, 最多 {max} 条")]
    TooManyEdges { requested: usize, max: usize },

    #[error("图为空")]
    EmptyGraph,

    #[error("文件为空或不存在: {0}")]
    EmptyFile(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// 是否为顶点类错误
    pub fn is_vertex_error(&self) -> bool {
        matches!(
            self,
            Error::VertexNotFound(_) | Error::VertexAlreadyExists(_)
        )
    }

    /// 是否为边类错误
    pub fn is_edge_error(&self) -> bool {
        matches!(
            self,
            Error::EdgeNotFound(_, _)
                | Error::EdgeAlreadyExists(_, _)
                | Error::InvalidEndpoints(_, _)
        )
    }
}
