//! Bellman-Ford 最廉价通路
//!
//! 比 Dijkstra 慢，但允许负成本边，并能检测从起点可达的负环
//!
//! 复杂度 O(V x E)

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Cost, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 最廉价通路的计算结果
///
/// 负环与不可达都是正常结果，不作为错误返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkOutcome {
    /// 找到最廉价通路
    Walk { cost: Cost, path: Vec<VertexId> },
    /// 终点不可达
    Unreachable,
    /// 起点可达一个负成本环，最廉价通路无下界
    NegativeCycle,
}

/// Bellman-Ford 算法
pub struct BellmanFord<'a> {
    graph: &'a Graph,
}

impl<'a> BellmanFord<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算从 start 到 end 的最廉价通路
    ///
    /// 对所有边松弛 V-1 轮后再做一轮检测，若仍有边可松弛，
    /// 说明存在从起点可达的负成本环。
    pub fn cheapest_walk(&self, start: VertexId, end: VertexId) -> Result<WalkOutcome> {
        if !self.graph.is_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        if !self.graph.is_vertex(end) {
            return Err(Error::VertexNotFound(end));
        }

        // 缺失的键表示距离无穷大
        let mut dist: HashMap<VertexId, Cost> = HashMap::new();
        let mut predecessor: HashMap<VertexId, VertexId> = HashMap::new();
        dist.insert(start, 0);

        let passes = self.graph.vertex_count().saturating_sub(1);
        for _ in 0..passes {
            for (src, dst, cost) in self.graph.edges() {
                let Some(&from) = dist.get(&src) else {
                    continue;
                };
                let candidate = from + cost;
                if dist.get(&dst).map_or(true, |&old| candidate < old) {
                    dist.insert(dst, candidate);
                    predecessor.insert(dst, src);
                }
            }
        }

        // 检测轮：仍可松弛则有从起点可达的负环
        for (src, dst, cost) in self.graph.edges() {
            let Some(&from) = dist.get(&src) else {
                continue;
            };
            if dist.get(&dst).map_or(true, |&old| from + cost < old) {
                return Ok(WalkOutcome::NegativeCycle);
            }
        }

        let Some(&cost) = dist.get(&end) else {
            return Ok(WalkOutcome::Unreachable);
        };

        // 沿前驱链回溯到起点
        let mut path = vec![end];
        let mut current = end;
        while let Some(&prev) = predecessor.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        Ok(WalkOutcome::Walk { cost, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::PathFinder;

    #[test]
    fn test_cheapest_walk() {
        // 0 -> 1 -> 3 成本 3，0 -> 2 -> 3 成本 12
        let mut graph = Graph::with_vertices(4);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 3, 2).unwrap();
        graph.add_edge(0, 2, 10).unwrap();
        graph.add_edge(2, 3, 2).unwrap();

        let outcome = BellmanFord::new(&graph).cheapest_walk(0, 3).unwrap();
        assert_eq!(
            outcome,
            WalkOutcome::Walk {
                cost: 3,
                path: vec![0, 1, 3],
            }
        );
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 2, -3).unwrap();
        graph.add_edge(0, 2, 4).unwrap();

        let outcome = BellmanFord::new(&graph).cheapest_walk(0, 2).unwrap();
        assert_eq!(
            outcome,
            WalkOutcome::Walk {
                cost: 2,
                path: vec![0, 1, 2],
            }
        );
    }

    #[test]
    fn test_negative_cycle_detected() {
        // 三元环 1 -> 2 -> 3 -> 1 总成本为负
        let mut graph = Graph::with_vertices(4);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(2, 3, -4).unwrap();
        graph.add_edge(3, 1, 1).unwrap();

        let outcome = BellmanFord::new(&graph).cheapest_walk(0, 2).unwrap();
        assert_eq!(outcome, WalkOutcome::NegativeCycle);
    }

    #[test]
    fn test_unreachable() {
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1, 1).unwrap();

        let outcome = BellmanFord::new(&graph).cheapest_walk(0, 2).unwrap();
        assert_eq!(outcome, WalkOutcome::Unreachable);
    }

    #[test]
    fn test_unit_costs_match_bfs_length() {
        let mut graph = Graph::with_vertices(6);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 5, 1).unwrap();
        graph.add_edge(0, 3, 1).unwrap();
        graph.add_edge(3, 4, 1).unwrap();
        graph.add_edge(4, 5, 1).unwrap();
        graph.add_edge(1, 5, 1).unwrap();

        let bfs_path = PathFinder::new(&graph).shortest_path(0, 5).unwrap().unwrap();
        let outcome = BellmanFord::new(&graph).cheapest_walk(0, 5).unwrap();
        match outcome {
            WalkOutcome::Walk { cost, .. } => assert_eq!(cost, bfs_path.length as Cost),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_vertex_is_error() {
        let graph = Graph::with_vertices(2);
        let ford = BellmanFord::new(&graph);
        assert!(ford.cheapest_walk(0, 9).unwrap_err().is_vertex_error());
    }
}
