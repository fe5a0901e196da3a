//! 关键路径法（CPM）项目调度
//!
//! 在拓扑序上做正向/反向两趟扫描，计算每个活动的最早/最晚
//! 开始与结束时间、关键活动集合与项目总工期。
//!
//! 虚拟的起始/终止结点不写入调用者的图，而是作为只读叠加层
//! 合成：入度为 0 的活动以 Start 为前驱，出度为 0 的活动以
//! End 为后继，两者时长为 0。调用者的图在计算前后完全不变。

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Time, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 项目调度结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// 活动的拓扑序（不含虚拟结点）
    pub order: Vec<VertexId>,
    /// 最早开始时间
    pub earliest_start: HashMap<VertexId, Time>,
    /// 最早结束时间
    pub earliest_end: HashMap<VertexId, Time>,
    /// 最晚开始时间
    pub latest_start: HashMap<VertexId, Time>,
    /// 最晚结束时间
    pub latest_end: HashMap<VertexId, Time>,
    /// 关键活动（最早开始 == 最晚开始），按拓扑序排列
    pub critical: Vec<VertexId>,
    /// 项目总工期
    pub total_time: Time,
}

/// 叠加层结点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Start,
    Task(VertexId),
    End,
}

/// 计算项目调度
///
/// `order` 必须是该图经拓扑排序得到的非空完整拓扑序
/// （见 [`topological_sort`](crate::algorithm::topological_sort)）；
/// 图含环时不得调用本函数。
pub fn project_schedule(graph: &Graph, order: &[VertexId]) -> Result<Schedule> {
    // 虚拟结点排在两端的完整扫描序
    let full_order: Vec<Node> = std::iter::once(Node::Start)
        .chain(order.iter().map(|&v| Node::Task(v)))
        .chain(std::iter::once(Node::End))
        .collect();

    let duration = |node: Node| match node {
        Node::Start | Node::End => 0,
        Node::Task(v) => graph.duration(v),
    };

    // 正向扫描：最早开始 = 前驱最早结束的最大值
    let mut earliest_start: HashMap<Node, Time> = HashMap::new();
    let mut earliest_end: HashMap<Node, Time> = HashMap::new();
    earliest_start.insert(Node::Start, 0);
    earliest_end.insert(Node::Start, 0);

    for &node in &full_order[1..] {
        let mut start = 0;
        for pred in predecessors(graph, order, node)? {
            start = start.max(earliest_end[&pred]);
        }
        earliest_start.insert(node, start);
        earliest_end.insert(node, start + duration(node));
    }

    let total_time = earliest_end[&Node::End];

    // 反向扫描：最晚结束 = 后继最晚开始的最小值
    let mut latest_start: HashMap<Node, Time> = HashMap::new();
    let mut latest_end: HashMap<Node, Time> = HashMap::new();
    latest_end.insert(Node::End, total_time);
    latest_start.insert(Node::End, total_time);
    latest_start.insert(Node::Start, 0);
    latest_end.insert(Node::Start, 0);

    for &node in full_order[1..full_order.len() - 1].iter().rev() {
        let mut end = Time::MAX;
        for succ in successors(graph, order, node)? {
            end = end.min(latest_start[&succ]);
        }
        latest_start.insert(node, end - duration(node));
        latest_end.insert(node, end);
    }

    // 去除虚拟结点，仅报告真实活动
    let strip = |map: &HashMap<Node, Time>| {
        order
            .iter()
            .map(|&v| (v, map[&Node::Task(v)]))
            .collect::<HashMap<VertexId, Time>>()
    };
    let earliest_start = strip(&earliest_start);
    let latest_start = strip(&latest_start);

    let critical = order
        .iter()
        .copied()
        .filter(|v| earliest_start[v] == latest_start[v])
        .collect();

    Ok(Schedule {
        order: order.to_vec(),
        earliest_end: strip(&earliest_end),
        latest_end: strip(&latest_end),
        earliest_start,
        latest_start,
        critical,
        total_time,
    })
}

/// 叠加层中结点的前驱
fn predecessors(graph: &Graph, order: &[VertexId], node: Node) -> Result<Vec<Node>> {
    match node {
        Node::Start => Ok(vec![]),
        Node::Task(vertex) => {
            if graph.in_degree(vertex)? == 0 {
                Ok(vec![Node::Start])
            } else {
                Ok(graph.inbound(vertex)?.map(Node::Task).collect())
            }
        }
        Node::End => {
            let mut preds = Vec::new();
            for &vertex in order {
                if graph.out_degree(vertex)? == 0 {
                    preds.push(Node::Task(vertex));
                }
            }
            Ok(preds)
        }
    }
}

/// 叠加层中结点的后继
fn successors(graph: &Graph, order: &[VertexId], node: Node) -> Result<Vec<Node>> {
    match node {
        Node::End => Ok(vec![]),
        Node::Task(vertex) => {
            if graph.out_degree(vertex)? == 0 {
                Ok(vec![Node::End])
            } else {
                Ok(graph.outbound(vertex)?.map(Node::Task).collect())
            }
        }
        Node::Start => {
            let mut succs = Vec::new();
            for &vertex in order {
                if graph.in_degree(vertex)? == 0 {
                    succs.push(Node::Task(vertex));
                }
            }
            Ok(succs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::topological_sort;

    fn activity_graph(durations: &[(VertexId, Time)], edges: &[(VertexId, VertexId)]) -> Graph {
        let mut graph = Graph::new();
        for &(vertex, time) in durations {
            graph.add_vertex(vertex).unwrap();
            graph.set_duration(vertex, time).unwrap();
        }
        for &(src, dst) in edges {
            graph.add_edge(src, dst, 0).unwrap();
        }
        graph
    }

    #[test]
    fn test_chain_all_critical() {
        // 时长 [3, 2, 5] 的串行活动链
        let graph = activity_graph(&[(1, 3), (2, 2), (3, 5)], &[(1, 2), (2, 3)]);
        let order = topological_sort(&graph).unwrap();
        let schedule = project_schedule(&graph, &order).unwrap();

        assert_eq!(schedule.earliest_end[&3], 10);
        assert_eq!(schedule.total_time, 10);
        assert_eq!(schedule.critical, order);

        assert_eq!(schedule.earliest_start[&1], 0);
        assert_eq!(schedule.earliest_start[&2], 3);
        assert_eq!(schedule.earliest_start[&3], 5);
        assert_eq!(schedule.latest_start[&3], 5);
    }

    #[test]
    fn test_parallel_branch_has_slack() {
        // 1(4) 与 2(1) 并行，汇合到 3(2)
        let graph = activity_graph(&[(1, 4), (2, 1), (3, 2)], &[(1, 3), (2, 3)]);
        let order = topological_sort(&graph).unwrap();
        let schedule = project_schedule(&graph, &order).unwrap();

        assert_eq!(schedule.total_time, 6);
        // 短分支可以推迟 3 个单位
        assert_eq!(schedule.earliest_start[&2], 0);
        assert_eq!(schedule.latest_start[&2], 3);
        assert!(schedule.critical.contains(&1));
        assert!(schedule.critical.contains(&3));
        assert!(!schedule.critical.contains(&2));
    }

    #[test]
    fn test_graph_not_mutated() {
        let graph = activity_graph(&[(1, 3), (2, 2)], &[(1, 2)]);
        let before = graph.clone();

        let order = topological_sort(&graph).unwrap();
        project_schedule(&graph, &order).unwrap();

        assert_eq!(graph, before);
    }

    #[test]
    fn test_cycle_rejected_before_scheduling() {
        let graph = activity_graph(&[(1, 3), (2, 2)], &[(1, 2)]);
        let mut cyclic = graph.clone();
        cyclic.add_edge(2, 1, 0).unwrap();

        // 排序阶段即拒绝，调度不会被调用
        assert_eq!(topological_sort(&cyclic), None);
    }

    #[test]
    fn test_isolated_activity() {
        let graph = activity_graph(&[(1, 7)], &[]);
        let order = topological_sort(&graph).unwrap();
        let schedule = project_schedule(&graph, &order).unwrap();

        assert_eq!(schedule.total_time, 7);
        assert_eq!(schedule.critical, vec![1]);
    }
}
