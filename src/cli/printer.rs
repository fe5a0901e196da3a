//! 结果打印器
//!
//! 提供统计信息、边表与调度结果的表格输出

use crate::algorithm::Schedule;
use crate::graph::Graph;
use prettytable::{format, row, Cell, Row, Table};

/// 结果打印器
#[derive(Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 打印图统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印边表
    pub fn print_edges(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["源点", "终点", "成本"]);

        for (src, dst, cost) in graph.edges() {
            table.add_row(Row::new(vec![
                Cell::new(&src.to_string()),
                Cell::new(&dst.to_string()),
                Cell::new(&cost.to_string()),
            ]));
        }

        table.to_string()
    }

    /// 打印调度结果（按拓扑序，每行一个活动）
    pub fn print_schedule(&self, schedule: &Schedule) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["活动", "最早开始", "最早结束", "最晚开始", "最晚结束", "关键"]);

        for &vertex in &schedule.order {
            let critical = if schedule.critical.contains(&vertex) {
                "是"
            } else {
                ""
            };
            table.add_row(Row::new(vec![
                Cell::new(&vertex.to_string()),
                Cell::new(&schedule.earliest_start[&vertex].to_string()),
                Cell::new(&schedule.earliest_end[&vertex].to_string()),
                Cell::new(&schedule.latest_start[&vertex].to_string()),
                Cell::new(&schedule.latest_end[&vertex].to_string()),
                Cell::new(critical),
            ]));
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_stats_contains_counts() {
        let printer = Printer::new();
        let output = printer.print_stats(7, 12);
        assert!(output.contains('7'));
        assert!(output.contains("12"));
    }

    #[test]
    fn test_print_edges_lists_costs() {
        let mut graph = Graph::with_vertices(3);
        graph.add_edge(0, 1, 42).unwrap();

        let output = Printer::new().print_edges(&graph);
        assert!(output.contains("42"));
    }
}
