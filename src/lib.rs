//! GraphKit - 有向图引擎
//!
//! 面向课程化图分析场景的内存有向图引擎，支持：
//! - 顶点/边的增删改查，邻接与逆邻接遍历
//! - 反向 BFS 最短路径（最少边数）
//! - Bellman-Ford 最廉价通路与负环检测
//! - 基于 DFS 的拓扑排序与环检测
//! - 关键路径法（CPM）项目工期计算
//! - 贪心最近邻哈密顿回路启发式（TSP）
//! - 边表文件与活动文件的加载/保存

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod io;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    nearest_neighbour_cycle, project_schedule, topological_sort, BellmanFord, PathFinder,
    PathResult, Schedule, TourResult, WalkOutcome,
};
pub use error::{Error, Result};
pub use graph::Graph;
pub use types::{Cost, Time, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
