//! 反向 BFS 最短路径
//!
//! 从终点沿入边做广度优先搜索，得到边数最少的路径

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Cost, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列（含起点与终点）
    pub vertices: Vec<VertexId>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总成本
    pub total_cost: Cost,
}

/// 最短路径查找器
pub struct PathFinder<'a> {
    graph: &'a Graph,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 查找边数最少的路径
    ///
    /// 从终点出发沿入边做 BFS（即在逆图上搜索），为每个首次到达的
    /// 顶点记录其在正向路径上的后继，搜索进行到队列耗尽为止，再从
    /// 起点沿后继链重构路径。起点等于终点时返回单顶点的退化路径，
    /// 不存在路径时返回 `Ok(None)`。
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Result<Option<PathResult>> {
        if !self.graph.is_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        if !self.graph.is_vertex(end) {
            return Err(Error::VertexNotFound(end));
        }

        if start == end {
            return Ok(Some(PathResult {
                vertices: vec![start],
                length: 0,
                total_cost: 0,
            }));
        }

        // successor[v] = 正向路径上 v 的下一个顶点
        let mut successor: HashMap<VertexId, VertexId> = HashMap::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(end);
        queue.push_back(end);

        while let Some(vertex) = queue.pop_front() {
            for inbound in self.graph.inbound(vertex)? {
                if visited.insert(inbound) {
                    successor.insert(inbound, vertex);
                    queue.push_back(inbound);
                }
            }
        }

        self.reconstruct(start, end, &successor)
    }

    /// 从起点沿后继链重构路径
    fn reconstruct(
        &self,
        start: VertexId,
        end: VertexId,
        successor: &HashMap<VertexId, VertexId>,
    ) -> Result<Option<PathResult>> {
        let mut vertices = vec![start];
        let mut total_cost = 0;
        let mut current = start;

        while current != end {
            let Some(&next) = successor.get(&current) else {
                return Ok(None);
            };
            total_cost += self.graph.get_edge_cost(current, next)?;
            vertices.push(next);
            current = next;
        }

        let length = vertices.len() - 1;
        Ok(Some(PathResult {
            vertices,
            length,
            total_cost,
        }))
    }
}
