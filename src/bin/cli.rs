//! RouteGraph CLI 工具
//!
//! 加载边列表后执行路由查询

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use routegraph::algorithm::DepthFirst;
use routegraph::import::{load_edge_list, EdgeListFormat};
use routegraph::metrics::{global_metrics, QueryKind};
use routegraph::{Condition, Graph};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "routegraph-cli")]
#[command(about = "RouteGraph 命令行工具")]
struct Args {
    /// 边列表文件
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: csv, jsonl
    #[arg(short, long, default_value = "csv")]
    format: EdgeListFormat,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 查询结束后输出指标（Prometheus 格式）
    #[arg(long)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 显示图统计信息
    Stats,
    /// 计算路径总权重
    Cost {
        /// 路径上的顶点
        #[arg(required = true, num_args = 1..)]
        path: Vec<String>,
    },
    /// 最短路径
    Shortest { from: String, to: String },
    /// 统计满足条件的路径数
    Paths {
        from: String,
        to: String,
        /// 跳数或权重上限
        #[arg(allow_hyphen_values = true)]
        limit: i64,
        /// 条件: lessthan, exact, cost_lessthan
        #[arg(short, long, default_value = "lessthan")]
        condition: Condition,
    },
    /// 列出可达顶点（按访问顺序）
    Reach { from: String },
    /// 列出顶点的出边
    Edges { vertex: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (graph, stats) = load_edge_list(&args.input, args.format)
        .with_context(|| format!("无法加载边列表 {:?}", args.input))?;
    if stats.errors > 0 {
        eprintln!("警告: {} 条记录导入失败", stats.errors);
    }
    if graph.vertex_count() == 0 {
        bail!("图为空，请检查输入文件 {:?}", args.input);
    }

    run(&graph, args.command)?;

    if args.metrics {
        print!("{}", global_metrics().to_prometheus());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(graph: &Graph<String>, command: Command) -> anyhow::Result<()> {
    let metrics = global_metrics();

    match command {
        Command::Stats => {
            println!("图统计信息:");
            println!("  顶点数: {}", graph.vertex_count());
            println!("  边数: {}", graph.edge_count());
        }

        Command::Cost { path } => {
            let timer = metrics.record_query_start(QueryKind::Cost);
            let result = graph.cost(&path);
            metrics.record_query_complete(timer, result.is_ok());
            println!("路径总权重: {}", result?);
        }

        Command::Shortest { from, to } => {
            let timer = metrics.record_query_start(QueryKind::ShortestPath);
            let result = graph.dijkstra(&from, &to);
            metrics.record_query_complete(timer, result.is_ok());
            let path = result?;
            println!("最短路径长度: {}", path.distance);
            println!("路径: {}", path.route.join(" -> "));
        }

        Command::Paths {
            from,
            to,
            limit,
            condition,
        } => {
            let timer = metrics.record_query_start(QueryKind::PathCount);
            let result = graph.paths_to(&from, &to, limit, condition);
            metrics.record_query_complete(timer, result.is_ok());
            let found = result?;
            metrics.record_paths_counted(found);
            println!("路径数 ({} {}): {}", condition, limit, found);
        }

        Command::Reach { from } => {
            let timer = metrics.record_query_start(QueryKind::Traversal);
            let result = DepthFirst::new(graph).preorder(&from);
            metrics.record_query_complete(timer, result.is_ok());
            let order = result?;
            println!("可达顶点 {} 个: {}", order.len(), order.join(", "));
        }

        Command::Edges { vertex } => {
            let edges = graph.edges(&vertex)?;
            if edges.is_empty() {
                println!("{} 没有出边", vertex);
            }
            for edge in edges {
                println!("  {} -> {} ({})", vertex, edge.terminal(), edge.weight());
            }
        }
    }

    Ok(())
}
