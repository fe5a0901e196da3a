//! 基于 DFS 的拓扑排序
//!
//! 在逆图上做深度优先遍历：顶点在其全部前驱完成后才被输出，
//! 因此输出顺序天然满足拓扑序。遍历中遇到仍在当前搜索路径上的
//! 前驱即发现环。使用显式工作栈，深度不受调用栈限制。

use crate::graph::Graph;
use crate::types::VertexId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 在当前 DFS 路径上
    OnPath,
    /// 已完成（其前驱全部输出）
    Finished,
}

/// 工作栈帧：顶点、其入边前驱快照、下一个待处理前驱的下标
struct Frame {
    vertex: VertexId,
    predecessors: Vec<VertexId>,
    next: usize,
}

enum Step {
    Descend(VertexId),
    Finish(VertexId),
}

/// 拓扑排序
///
/// 返回全部顶点的一个拓扑序；图含环时返回 `None`。
/// 每个顶点恰好访问一次，复杂度 O(V+E)。
pub fn topological_sort(graph: &Graph) -> Option<Vec<VertexId>> {
    let mut state: std::collections::HashMap<VertexId, State> = std::collections::HashMap::new();
    let mut order = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if state.contains_key(&root) {
            continue;
        }

        state.insert(root, State::OnPath);
        let mut stack = vec![new_frame(graph, root)];

        loop {
            let step = match stack.last_mut() {
                None => break,
                Some(frame) => {
                    if frame.next < frame.predecessors.len() {
                        let predecessor = frame.predecessors[frame.next];
                        frame.next += 1;
                        Step::Descend(predecessor)
                    } else {
                        Step::Finish(frame.vertex)
                    }
                }
            };

            match step {
                Step::Descend(predecessor) => match state.get(&predecessor) {
                    // 前驱仍在当前路径上：发现环
                    Some(State::OnPath) => return None,
                    Some(State::Finished) => {}
                    None => {
                        state.insert(predecessor, State::OnPath);
                        stack.push(new_frame(graph, predecessor));
                    }
                },
                Step::Finish(vertex) => {
                    stack.pop();
                    state.insert(vertex, State::Finished);
                    order.push(vertex);
                }
            }
        }
    }

    Some(order)
}

fn new_frame(graph: &Graph, vertex: VertexId) -> Frame {
    // 顶点来自图自身的遍历，必然存在
    let predecessors = graph
        .inbound(vertex)
        .map(|it| it.collect())
        .unwrap_or_default();
    Frame {
        vertex,
        predecessors,
        next: 0,
    }
}
