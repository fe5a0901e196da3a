//! 图文件加载与保存
//!
//! 支持两种纯文本格式：
//! - 边表：首行 "顶点数 边数"，随后每行 "源点 终点 成本"
//! - 活动表：每行 "活动 时长 前驱列表"，前驱以逗号分隔，"-" 表示无前驱

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Cost, Time, VertexId};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// 从边表文件加载图
///
/// 文件不存在或为空时返回错误
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let content = read_non_empty(path.as_ref())?;
    let mut lines = content.lines();

    let header = lines
        .next()
        .ok_or_else(|| Error::EmptyFile(path.as_ref().display().to_string()))?;
    let mut tokens = header.split_whitespace();
    let vertex_count: usize = parse_token(tokens.next(), "顶点数")?;
    let edge_count: usize = parse_token(tokens.next(), "边数")?;

    let mut graph = Graph::with_vertices(vertex_count);
    for _ in 0..edge_count {
        let line = lines
            .next()
            .ok_or_else(|| Error::ParseError(format!("边数少于声明的 {}", edge_count)))?;
        let mut tokens = line.split_whitespace();
        let vertex1: VertexId = parse_token(tokens.next(), "源点")?;
        let vertex2: VertexId = parse_token(tokens.next(), "终点")?;
        let cost: Cost = parse_token(tokens.next(), "成本")?;
        graph.add_edge(vertex1, vertex2, cost)?;
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "已加载边表文件"
    );
    Ok(graph)
}

/// 将图保存为边表文件
///
/// 图没有顶点时返回错误
pub fn save_edge_list<P: AsRef<Path>>(path: P, graph: &Graph) -> Result<()> {
    if graph.vertex_count() == 0 {
        return Err(Error::EmptyGraph);
    }

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;

    for vertex in graph.vertices() {
        for neighbour in graph.outbound(vertex)? {
            let cost = graph.get_edge_cost(vertex, neighbour)?;
            writeln!(writer, "{} {} {}", vertex, neighbour, cost)?;
        }
    }
    writer.flush()?;

    debug!(path = %path.as_ref().display(), "图已保存");
    Ok(())
}

/// 从活动表文件加载图
///
/// 每行 "活动 时长 前驱列表"，顶点在首次出现时惰性创建，
/// 每个前驱产生一条 前驱 -> 活动 的边。遇到空行即停止。
pub fn load_activities<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let content = read_non_empty(path.as_ref())?;
    let mut graph = Graph::new();

    for line in content.lines() {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            break;
        };

        let vertex: VertexId = parse_value(first, "活动编号")?;
        let time: Time = parse_token(tokens.next(), "时长")?;
        if !graph.is_vertex(vertex) {
            graph.add_vertex(vertex)?;
        }
        graph.set_duration(vertex, time)?;

        let deps = tokens
            .next()
            .ok_or_else(|| Error::ParseError(format!("活动 {} 缺少前驱列表", vertex)))?;
        if deps == "-" {
            continue;
        }

        for dep in deps.split(',') {
            let predecessor: VertexId = parse_value(dep, "前驱编号")?;
            if !graph.is_vertex(predecessor) {
                graph.add_vertex(predecessor)?;
            }
            graph.add_edge(predecessor, vertex, 0)?;
        }
    }

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "已加载活动文件"
    );
    Ok(graph)
}

/// 读取文件内容，空文件与缺失文件同样报错
fn read_non_empty(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).map_err(|_| Error::EmptyFile(path.display().to_string()))?;
    if content.trim().is_empty() {
        return Err(Error::EmptyFile(path.display().to_string()));
    }
    Ok(content)
}

fn parse_token<T: FromStr>(token: Option<&str>, what: &str) -> Result<T> {
    let token = token.ok_or_else(|| Error::ParseError(format!("缺少字段: {}", what)))?;
    parse_value(token, what)
}

fn parse_value<T: FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::ParseError(format!("无效的{}: {}", what, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_edge_list() {
        let file = write_temp("4 3\n0 1 5\n1 2 -2\n2 3 7\n");
        let graph = load_edge_list(file.path()).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge_cost(1, 2).unwrap(), -2);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut graph = Graph::with_vertices(5);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(1, 4, -1).unwrap();
        graph.add_edge(2, 3, 0).unwrap();

        let file = NamedTempFile::new().unwrap();
        save_edge_list(file.path(), &graph).unwrap();
        let loaded = load_edge_list(file.path()).unwrap();

        assert_eq!(loaded, graph);
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = write_temp("");
        assert!(matches!(
            load_edge_list(file.path()),
            Err(Error::EmptyFile(_))
        ));

        assert!(matches!(
            load_edge_list("/nonexistent/graph.txt"),
            Err(Error::EmptyFile(_))
        ));
    }

    #[test]
    fn test_malformed_line_is_error() {
        let file = write_temp("2 1\n0 x 3\n");
        assert!(matches!(
            load_edge_list(file.path()),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_save_empty_graph_is_error() {
        let graph = Graph::new();
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            save_edge_list(file.path(), &graph),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn test_load_activities() {
        let file = write_temp("1 3 -\n2 2 1\n3 5 1,2\n");
        let graph = load_activities(file.path()).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_edge(1, 2));
        assert!(graph.is_edge(1, 3));
        assert!(graph.is_edge(2, 3));
        assert_eq!(graph.duration(3), 5);
    }

    #[test]
    fn test_load_activities_forward_reference() {
        // 前驱 4 先于其自身行被提及，顶点应被惰性创建
        let file = write_temp("1 2 4\n4 6 -\n");
        let graph = load_activities(file.path()).unwrap();

        assert!(graph.is_edge(4, 1));
        assert_eq!(graph.duration(4), 6);
        assert_eq!(graph.duration(1), 2);
    }

    #[test]
    fn test_load_activities_stops_at_blank_line() {
        let file = write_temp("1 3 -\n\n2 2 1\n");
        let graph = load_activities(file.path()).unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}
