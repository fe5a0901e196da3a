//! 通用类型定义

/// 顶点 ID (64位整数，本身即为所有结构的键)
pub type VertexId = u64;

/// 边成本（可为负，Bellman-Ford 语义需要）
pub type Cost = i64;

/// 活动时长与调度时间
pub type Time = i64;
