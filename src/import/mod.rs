//! 数据导入模块
//!
//! 从 CSV、JSON Lines 批量导入边列表。端点顶点不存在时自动创建。

use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    /// 被跳过记录所在的文件行号（从 1 开始，含表头）
    pub rejected_lines: Vec<u64>,
    pub duration_ms: u64,
}

impl ImportStats {
    fn reject(&mut self, line: u64, error: &Error) {
        warn!(line, error = %error, "跳过无效记录");
        self.errors += 1;
        self.rejected_lines.push(line);
    }
}

/// 边列表格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// 表头为 from,to,weight
    Csv,
    /// 每行一个 {"from": .., "to": .., "weight": ..}
    Jsonl,
}

impl FromStr for EdgeListFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(EdgeListFormat::Csv),
            "jsonl" | "json" => Ok(EdgeListFormat::Jsonl),
            _ => Err(Error::ParseError(format!("不支持的格式: {}", s))),
        }
    }
}

impl fmt::Display for EdgeListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeListFormat::Csv => f.write_str("csv"),
            EdgeListFormat::Jsonl => f.write_str("jsonl"),
        }
    }
}

/// 边记录
#[derive(Debug, Clone, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    #[serde(default)]
    weight: Option<Weight>,
}

/// 边列表导入器
pub struct EdgeListImporter<'g> {
    graph: &'g mut Graph<String>,
    default_weight: Weight,
}

impl<'g> EdgeListImporter<'g> {
    /// 创建导入器
    pub fn new(graph: &'g mut Graph<String>) -> Self {
        Self {
            graph,
            default_weight: 1,
        }
    }

    /// 设置缺省权重（记录中没有 weight 字段时使用）
    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    /// 按格式从文件导入
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P, format: EdgeListFormat) -> Result<ImportStats> {
        let file = File::open(path)?;
        match format {
            EdgeListFormat::Csv => self.import_csv(file),
            EdgeListFormat::Jsonl => self.import_jsonl(BufReader::new(file)),
        }
    }

    /// 从 CSV 导入
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| Error::ImportError(format!("CSV 表头错误: {}", e)))?
            .clone();

        let mut record = csv::StringRecord::new();
        loop {
            let line = match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => record.position().map_or(0, |pos| pos.line()),
                Err(e) => {
                    if let csv::ErrorKind::Io(_) = e.kind() {
                        return Err(Error::ImportError(format!("CSV 读取失败: {}", e)));
                    }
                    let line = e.position().map_or(0, |pos| pos.line());
                    stats.reject(line, &Error::ImportError(format!("CSV 格式错误: {}", e)));
                    continue;
                }
            };

            let result = record
                .deserialize::<EdgeRecord>(Some(&headers))
                .map_err(|e| Error::ImportError(format!("CSV 格式错误: {}", e)))
                .and_then(|edge| self.apply(edge, &mut stats));
            if let Err(e) = result {
                stats.reject(line, &e);
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, "CSV 导入完成");
        Ok(stats)
    }

    /// 从 JSON Lines 导入（空行忽略）。无法解码或解析的行计入错误后继续。
    pub fn import_jsonl<R: BufRead>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let line_number = index as u64 + 1;

            let text = match std::str::from_utf8(&line) {
                Ok(text) => text.trim(),
                Err(e) => {
                    stats.reject(line_number, &Error::ImportError(format!("非 UTF-8 数据: {}", e)));
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }

            let result = serde_json::from_str::<EdgeRecord>(text)
                .map_err(|e| Error::ImportError(format!("JSON 解析错误: {}", e)))
                .and_then(|record| self.apply(record, &mut stats));
            if let Err(e) = result {
                stats.reject(line_number, &e);
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, "JSONL 导入完成");
        Ok(stats)
    }

    fn apply(&mut self, record: EdgeRecord, stats: &mut ImportStats) -> Result<()> {
        if record.from.is_empty() || record.to.is_empty() {
            return Err(Error::ImportError("顶点名为空".to_string()));
        }

        // 已存在的顶点不能重新添加，否则出边会被清空
        for vertex in [&record.from, &record.to] {
            if !self.graph.contains_vertex(vertex) {
                self.graph.add_vertex(vertex.clone());
                stats.vertices_imported += 1;
            }
        }

        let weight = record.weight.unwrap_or(self.default_weight);
        self.graph.set_edge(&record.from, &record.to, weight)?;
        stats.edges_imported += 1;
        Ok(())
    }
}

/// 从文件加载一张新图
pub fn load_edge_list<P: AsRef<Path>>(path: P, format: EdgeListFormat) -> Result<(Graph<String>, ImportStats)> {
    let mut graph = Graph::new();
    let stats = EdgeListImporter::new(&mut graph).import_file(path, format)?;
    Ok((graph, stats))
}
