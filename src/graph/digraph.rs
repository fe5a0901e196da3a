//! 有向图数据结构
//!
//! 邻接表 + 逆邻接表的双索引结构，逆邻接表是派生索引，
//! 仅在公开的增删操作内部更新，保证与邻接表严格一致

use crate::error::{Error, Result};
use crate::types::{Cost, Time, VertexId};
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// 有向图
///
/// 顶点即整数 ID，边 (u, v) 携带整数成本（可为负），每个有序点对
/// 至多一条边。所有公开的变更操作要么完整生效，要么不改变任何状态。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// 顶点集合
    vertices: HashSet<VertexId>,
    /// 出边邻接表
    outbound: HashMap<VertexId, HashSet<VertexId>>,
    /// 入边邻接表（outbound 的精确转置）
    inbound: HashMap<VertexId, HashSet<VertexId>>,
    /// 边成本
    costs: HashMap<(VertexId, VertexId), Cost>,
    /// 活动时长（仅 CPM 使用，缺省视为 0）
    durations: HashMap<VertexId, Time>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建有 `vertex_count` 个顶点（ID 为 0..vertex_count）的图
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut graph = Self::new();
        for vertex in 0..vertex_count as VertexId {
            // 顶点 ID 连续且此前不存在，不会失败
            let _ = graph.add_vertex(vertex);
        }
        graph
    }

    /// 创建有 `vertex_count` 个顶点和 `edge_count` 条随机边的图
    ///
    /// 随机边不重复，成本在 [0, 1000) 内独立均匀选取。
    /// 当请求的边数超过 vertex_count^2 时无法生成，返回错误。
    pub fn with_random_edges(vertex_count: usize, edge_count: usize) -> Result<Self> {
        let max = vertex_count * vertex_count;
        if edge_count > max {
            return Err(Error::TooManyEdges {
                requested: edge_count,
                max,
            });
        }

        let mut graph = Self::with_vertices(vertex_count);
        let mut rng = rand::thread_rng();

        for _ in 0..edge_count {
            let mut vertex1 = rng.gen_range(0..vertex_count as VertexId);
            let mut vertex2 = rng.gen_range(0..vertex_count as VertexId);

            while graph.is_edge(vertex1, vertex2) {
                vertex1 = rng.gen_range(0..vertex_count as VertexId);
                vertex2 = rng.gen_range(0..vertex_count as VertexId);
            }

            graph.add_edge(vertex1, vertex2, rng.gen_range(0..1000))?;
        }

        Ok(graph)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<()> {
        if self.is_vertex(vertex) {
            return Err(Error::VertexAlreadyExists(vertex));
        }

        self.vertices.insert(vertex);
        self.outbound.insert(vertex, HashSet::new());
        self.inbound.insert(vertex, HashSet::new());
        Ok(())
    }

    /// 删除顶点
    ///
    /// 先删除与该顶点相连的所有边（两个方向），再删除顶点本身
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        if !self.is_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }

        let successors: Vec<VertexId> = self.outbound[&vertex].iter().copied().collect();
        for successor in successors {
            self.remove_edge(vertex, successor)?;
        }

        let predecessors: Vec<VertexId> = self.inbound[&vertex].iter().copied().collect();
        for predecessor in predecessors {
            self.remove_edge(predecessor, vertex)?;
        }

        self.outbound.remove(&vertex);
        self.inbound.remove(&vertex);
        self.durations.remove(&vertex);
        self.vertices.remove(&vertex);
        Ok(())
    }

    /// 顶点是否存在
    pub fn is_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    pub fn add_edge(&mut self, vertex1: VertexId, vertex2: VertexId, cost: Cost) -> Result<()> {
        if self.is_edge(vertex1, vertex2) {
            return Err(Error::EdgeAlreadyExists(vertex1, vertex2));
        }
        if !self.is_vertex(vertex1) || !self.is_vertex(vertex2) {
            return Err(Error::InvalidEndpoints(vertex1, vertex2));
        }

        if let Some(set) = self.outbound.get_mut(&vertex1) {
            set.insert(vertex2);
        }
        if let Some(set) = self.inbound.get_mut(&vertex2) {
            set.insert(vertex1);
        }
        self.costs.insert((vertex1, vertex2), cost);
        Ok(())
    }

    /// 删除边
    pub fn remove_edge(&mut self, vertex1: VertexId, vertex2: VertexId) -> Result<()> {
        if !self.is_edge(vertex1, vertex2) {
            return Err(Error::EdgeNotFound(vertex1, vertex2));
        }

        self.costs.remove(&(vertex1, vertex2));
        if let Some(set) = self.outbound.get_mut(&vertex1) {
            set.remove(&vertex2);
        }
        if let Some(set) = self.inbound.get_mut(&vertex2) {
            set.remove(&vertex1);
        }
        Ok(())
    }

    /// 边是否存在
    pub fn is_edge(&self, vertex1: VertexId, vertex2: VertexId) -> bool {
        self.outbound
            .get(&vertex1)
            .map(|set| set.contains(&vertex2))
            .unwrap_or(false)
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    /// 获取边成本
    pub fn get_edge_cost(&self, vertex1: VertexId, vertex2: VertexId) -> Result<Cost> {
        self.costs
            .get(&(vertex1, vertex2))
            .copied()
            .ok_or(Error::EdgeNotFound(vertex1, vertex2))
    }

    /// 设置边成本
    pub fn set_edge_cost(&mut self, vertex1: VertexId, vertex2: VertexId, cost: Cost) -> Result<()> {
        match self.costs.get_mut(&(vertex1, vertex2)) {
            Some(entry) => {
                *entry = cost;
                Ok(())
            }
            None => Err(Error::EdgeNotFound(vertex1, vertex2)),
        }
    }

    // ==================== 度与时长 ====================

    /// 获取顶点的入度
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        self.inbound
            .get(&vertex)
            .map(|set| set.len())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.outbound
            .get(&vertex)
            .map(|set| set.len())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// 获取活动时长（未设置视为 0）
    pub fn duration(&self, vertex: VertexId) -> Time {
        self.durations.get(&vertex).copied().unwrap_or(0)
    }

    /// 设置活动时长
    pub fn set_duration(&mut self, vertex: VertexId, duration: Time) -> Result<()> {
        if !self.is_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }
        self.durations.insert(vertex, duration);
        Ok(())
    }

    // ==================== 遍历 ====================

    /// 遍历所有顶点（顺序未定义）
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// 遍历顶点的出边邻居
    pub fn outbound(&self, vertex: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.outbound
            .get(&vertex)
            .map(|set| set.iter().copied())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// 遍历顶点的入边邻居
    pub fn inbound(&self, vertex: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.inbound
            .get(&vertex)
            .map(|set| set.iter().copied())
            .ok_or(Error::VertexNotFound(vertex))
    }

    /// 遍历所有边，产出 (源点, 终点, 成本) 三元组
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Cost)> + '_ {
        self.costs.iter().map(|(&(src, dst), &cost)| (src, dst, cost))
    }
}
