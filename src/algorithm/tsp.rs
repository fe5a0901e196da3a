//! 贪心最近邻哈密顿回路（TSP 启发式）
//!
//! 从起点出发，每一步走向成本最低的未访问出边邻居，最后闭合
//! 回到起点。这是近似算法，不保证最优。
//!
//! 当前顶点没有可走的未访问邻居时，会零成本跳转到遍历序中的
//! 第一个未访问顶点继续。跳转处并不存在真实的边，因此一旦发生
//! 跳转，返回的总成本只是近似值，未必对应一条真实存在的回路。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Cost, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 回路结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourResult {
    /// 回路总成本（发生过跳转时仅为近似）
    pub cost: Cost,
    /// 访问顺序（以起点开始并以起点结束）
    pub tour: Vec<VertexId>,
}

/// 计算近似最小成本哈密顿回路
///
/// 仅当恰好剩一个顶点未访问时，回到起点的闭合边才参与候选比较。
/// 最终闭合边不存在时返回边类错误。
pub fn nearest_neighbour_cycle(graph: &Graph, start: VertexId) -> Result<TourResult> {
    if !graph.is_vertex(start) {
        return Err(Error::VertexNotFound(start));
    }

    let mut tour = vec![start];
    let mut visited: HashSet<VertexId> = HashSet::from([start]);
    let mut current = start;
    let mut total: Cost = 0;

    while tour.len() != graph.vertex_count() {
        let mut best: Option<(Cost, VertexId)> = None;

        for outbound in graph.outbound(current)? {
            if visited.contains(&outbound) {
                continue;
            }
            let cost = graph.get_edge_cost(current, outbound)?;
            if best.map_or(true, |(lowest, _)| cost < lowest) {
                best = Some((cost, outbound));
            }
        }

        // 恰剩一个未访问顶点时，闭合边参与比较
        if tour.len() == graph.vertex_count() - 1 && graph.is_edge(current, start) {
            let cost = graph.get_edge_cost(current, start)?;
            if best.map_or(true, |(lowest, _)| cost < lowest) {
                best = Some((cost, start));
            }
        }

        match best {
            Some((cost, next)) => {
                total += cost;
                tour.push(next);
                visited.insert(next);
                current = next;
            }
            None => {
                // 卡住：零成本跳到遍历序中第一个未访问顶点。
                // 跳转目标记为已访问以保证循环终止。
                let Some(next) = graph.vertices().find(|v| !visited.contains(v)) else {
                    break;
                };
                tour.push(next);
                visited.insert(next);
                current = next;
            }
        }
    }

    // 闭合回路
    if current != start {
        total += graph.get_edge_cost(current, start)?;
        tour.push(start);
    }

    Ok(TourResult { cost: total, tour })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_graph(costs: &[(VertexId, VertexId, Cost)], n: usize) -> Graph {
        let mut graph = Graph::with_vertices(n);
        for &(src, dst, cost) in costs {
            graph.add_edge(src, dst, cost).unwrap();
        }
        graph
    }

    #[test]
    fn test_greedy_cycle() {
        // 贪心路线 0 -> 1 -> 2 -> 3 -> 0，总成本 1 + 1 + 1 + 2 = 5
        let graph = complete_graph(
            &[
                (0, 1, 1),
                (0, 2, 5),
                (0, 3, 9),
                (1, 2, 1),
                (1, 3, 4),
                (2, 3, 1),
                (2, 0, 8),
                (3, 0, 2),
            ],
            4,
        );

        let result = nearest_neighbour_cycle(&graph, 0).unwrap();
        assert_eq!(result.tour, vec![0, 1, 2, 3, 0]);
        assert_eq!(result.cost, 5);
    }

    #[test]
    fn test_single_vertex_cycle() {
        let graph = Graph::with_vertices(1);
        let result = nearest_neighbour_cycle(&graph, 0).unwrap();
        assert_eq!(result.tour, vec![0]);
        assert_eq!(result.cost, 0);
    }

    #[test]
    fn test_missing_closing_edge_is_error() {
        // 链式图能走到 2，但 2 -> 0 不存在
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();

        let err = nearest_neighbour_cycle(&graph, 0).unwrap_err();
        assert!(err.is_edge_error());
    }

    #[test]
    fn test_stuck_jump_is_cost_free() {
        // 顶点 2 无法从 0、1 到达，需要一次跳转；
        // 跳转后 2 -> 0 闭合
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(2, 0, 4).unwrap();

        let result = nearest_neighbour_cycle(&graph, 0).unwrap();
        // 3 (0->1) + 0 (跳转) + 4 (2->0)
        assert_eq!(result.cost, 7);
        assert_eq!(result.tour.first(), Some(&0));
        assert_eq!(result.tour.last(), Some(&0));
    }

    #[test]
    fn test_closing_edge_competes_on_last_step() {
        // 在 2 处剩最后一个未访问顶点 3：
        // 2 -> 3 成本 10，但闭合边 2 -> 0 成本 1 更低，被贪心选中
        let graph = complete_graph(
            &[(0, 1, 1), (1, 2, 1), (2, 3, 10), (2, 0, 1), (3, 0, 1)],
            4,
        );

        let result = nearest_neighbour_cycle(&graph, 0).unwrap();
        assert_eq!(result.tour, vec![0, 1, 2, 0]);
        assert_eq!(result.cost, 3);
    }

    #[test]
    fn test_invalid_start_is_error() {
        let graph = Graph::with_vertices(2);
        assert!(nearest_neighbour_cycle(&graph, 9)
            .unwrap_err()
            .is_vertex_error());
    }
}
