//! GraphKit CLI 工具
//!
//! 交互式命令行界面

use clap::Parser;
use colored::Colorize;
use graphkit::algorithm::{
    nearest_neighbour_cycle, project_schedule, topological_sort, BellmanFord, PathFinder,
    WalkOutcome,
};
use graphkit::cli::{CommandCompleter, Printer};
use graphkit::graph::Graph;
use graphkit::types::{Cost, Time, VertexId};
use graphkit::{io, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphkit-cli")]
#[command(about = "GraphKit 有向图引擎命令行工具", version = graphkit::VERSION)]
struct Args {
    /// 启动时加载的边表文件
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 启动时加载的活动文件
    #[arg(short, long)]
    activities: Option<PathBuf>,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut graph = match (&args.file, &args.activities) {
        (Some(path), _) => io::load_edge_list(path)?,
        (None, Some(path)) => io::load_activities(path)?,
        (None, None) => Graph::new(),
    };

    println!("GraphKit CLI - 有向图引擎 v{}", graphkit::VERSION);
    println!("=====================================");
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());

    // 单个命令模式
    if let Some(command) = args.execute {
        if let Err(e) = handle_command(&mut graph, &command) {
            println!("{}", format!("错误: {}", e).red());
        }
        return Ok(());
    }

    // 交互模式
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        match rl.readline("graphkit> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match handle_command(&mut graph, line) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => println!("{}", format!("错误: {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("再见！");
    Ok(())
}

/// 解析并执行一条命令，返回 true 表示退出
fn handle_command(graph: &mut Graph, input: &str) -> Result<bool> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Ok(false);
    };
    let cmd = first.to_lowercase();
    let args = &parts[1..];
    let printer = Printer::new();

    match cmd.as_str() {
        "quit" | "exit" | "q" => return Ok(true),

        "help" | "h" | "?" => print_help(),

        "stats" | "info" => {
            println!("{}", printer.print_stats(graph.vertex_count(), graph.edge_count()));
        }

        "vertices" => {
            let mut vertices: Vec<VertexId> = graph.vertices().collect();
            vertices.sort_unstable();
            println!("{:?}", vertices);
        }

        "edges" => {
            println!("{}", printer.print_edges(graph));
        }

        "neighbors" | "n" => match parse_one::<VertexId>(args) {
            Some(vertex) => {
                let outbound: Vec<VertexId> = graph.outbound(vertex)?.collect();
                let inbound: Vec<VertexId> = graph.inbound(vertex)?.collect();
                println!("出边邻居: {:?}", outbound);
                println!("入边邻居: {:?}", inbound);
            }
            None => println!("用法: neighbors <顶点>"),
        },

        "degree" => match parse_one::<VertexId>(args) {
            Some(vertex) => {
                println!("入度: {}", graph.in_degree(vertex)?);
                println!("出度: {}", graph.out_degree(vertex)?);
            }
            None => println!("用法: degree <顶点>"),
        },

        "add-vertex" => match parse_one::<VertexId>(args) {
            Some(vertex) => {
                graph.add_vertex(vertex)?;
                println!("{}", "已添加顶点".green());
            }
            None => println!("用法: add-vertex <顶点>"),
        },

        "remove-vertex" => match parse_one::<VertexId>(args) {
            Some(vertex) => {
                graph.remove_vertex(vertex)?;
                println!("{}", "已删除顶点".green());
            }
            None => println!("用法: remove-vertex <顶点>"),
        },

        "add-edge" => match parse_two::<VertexId>(args) {
            Some((vertex1, vertex2)) => {
                let cost: Cost = args.get(2).and_then(|c| c.parse().ok()).unwrap_or(0);
                graph.add_edge(vertex1, vertex2, cost)?;
                println!("{}", "已添加边".green());
            }
            None => println!("用法: add-edge <源点> <终点> [成本]"),
        },

        "remove-edge" => match parse_two::<VertexId>(args) {
            Some((vertex1, vertex2)) => {
                graph.remove_edge(vertex1, vertex2)?;
                println!("{}", "已删除边".green());
            }
            None => println!("用法: remove-edge <源点> <终点>"),
        },

        "cost" => match parse_two::<VertexId>(args) {
            Some((vertex1, vertex2)) => match args.get(2).and_then(|c| c.parse::<Cost>().ok()) {
                Some(new_cost) => {
                    graph.set_edge_cost(vertex1, vertex2, new_cost)?;
                    println!("{}", "已更新成本".green());
                }
                None => println!("成本: {}", graph.get_edge_cost(vertex1, vertex2)?),
            },
            None => println!("用法: cost <源点> <终点> [新成本]"),
        },

        "duration" => match parse_one::<VertexId>(args) {
            Some(vertex) => match args.get(1).and_then(|t| t.parse::<Time>().ok()) {
                Some(time) => {
                    graph.set_duration(vertex, time)?;
                    println!("{}", "已更新时长".green());
                }
                None => println!("时长: {}", graph.duration(vertex)),
            },
            None => println!("用法: duration <顶点> [时长]"),
        },

        "random" => match parse_two::<usize>(args) {
            Some((vertex_count, edge_count)) => {
                *graph = Graph::with_random_edges(vertex_count, edge_count)?;
                println!("已生成 {} 个顶点、{} 条随机边", vertex_count, edge_count);
            }
            None => println!("用法: random <顶点数> <边数>"),
        },

        "load" => match args.first() {
            Some(path) => {
                *graph = io::load_edge_list(path)?;
                println!("已加载: {} 个顶点, {} 条边", graph.vertex_count(), graph.edge_count());
            }
            None => println!("用法: load <文件>"),
        },

        "save" => match args.first() {
            Some(path) => {
                io::save_edge_list(path, graph)?;
                println!("{}", "已保存".green());
            }
            None => println!("用法: save <文件>"),
        },

        "activities" => match args.first() {
            Some(path) => {
                *graph = io::load_activities(path)?;
                println!("已加载 {} 个活动", graph.vertex_count());
            }
            None => println!("用法: activities <文件>"),
        },

        "path" | "shortest" => match parse_two::<VertexId>(args) {
            Some((start, end)) => {
                let finder = PathFinder::new(graph);
                match finder.shortest_path(start, end)? {
                    Some(path) => {
                        println!("最短路径长度: {}", path.length);
                        println!("路径: {:?}", path.vertices);
                        println!("总成本: {}", path.total_cost);
                    }
                    None => println!("未找到路径"),
                }
            }
            None => println!("用法: path <起点> <终点>"),
        },

        "walk" | "cheapest" => match parse_two::<VertexId>(args) {
            Some((start, end)) => {
                let ford = BellmanFord::new(graph);
                match ford.cheapest_walk(start, end)? {
                    WalkOutcome::Walk { cost, path } => {
                        println!("最低成本: {}", cost);
                        println!("通路: {:?}", path);
                    }
                    WalkOutcome::Unreachable => println!("终点不可达"),
                    WalkOutcome::NegativeCycle => {
                        println!("{}", "存在从起点可达的负成本环".yellow());
                    }
                }
            }
            None => println!("用法: walk <起点> <终点>"),
        },

        "toposort" => match topological_sort(graph) {
            Some(order) => println!("拓扑序: {:?}", order),
            None => println!("图含环，不是 DAG"),
        },

        "schedule" => match topological_sort(graph) {
            Some(order) => {
                let schedule = project_schedule(graph, &order)?;
                println!("{}", printer.print_schedule(&schedule));
                println!("项目总工期: {}", schedule.total_time);
                println!("关键活动: {:?}", schedule.critical);
            }
            None => println!("图含环，无法调度"),
        },

        "tsp" => match parse_one::<VertexId>(args) {
            Some(start) => {
                let result = nearest_neighbour_cycle(graph, start)?;
                println!("回路: {:?}", result.tour);
                println!("近似总成本: {}", result.cost);
            }
            None => println!("用法: tsp <起点>"),
        },

        _ => println!("未知命令: {}。输入 'help' 查看帮助。", cmd),
    }

    Ok(false)
}

fn parse_one<T: std::str::FromStr>(args: &[&str]) -> Option<T> {
    args.first().and_then(|s| s.parse().ok())
}

fn parse_two<T: std::str::FromStr>(args: &[&str]) -> Option<(T, T)> {
    match (args.first(), args.get(1)) {
        (Some(a), Some(b)) => Some((a.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

fn print_help() {
    println!(
        "
═══════════════════════════════════════════════════════════════
                   GraphKit CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?               显示帮助
  quit, exit, q            退出程序
  stats, info              显示图统计信息
  vertices                 列出所有顶点
  edges                    列出所有边

图操作:
  add-vertex <v>           添加顶点
  remove-vertex <v>        删除顶点（连带删除关联边）
  add-edge <u> <v> [成本]  添加边（成本默认为 0）
  remove-edge <u> <v>      删除边
  cost <u> <v> [新成本]    查看或设置边成本
  duration <v> [时长]      查看或设置活动时长
  neighbors <v>            查看顶点的出边/入边邻居
  degree <v>               查看顶点的入度/出度
  random <n> <m>           生成 n 个顶点、m 条随机边的图

文件:
  load <文件>              加载边表文件
  save <文件>              保存为边表文件
  activities <文件>        加载活动文件

分析:
  path <s> <t>             反向 BFS 最短路径（最少边数）
  walk <s> <t>             Bellman-Ford 最廉价通路（可检测负环）
  toposort                 拓扑排序（检测环）
  schedule                 关键路径法项目调度
  tsp <起点>               贪心最近邻哈密顿回路（近似）

═══════════════════════════════════════════════════════════════
"
    );
}
