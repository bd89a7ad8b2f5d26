//! 图文档加载
//!
//! 支持 JSON 与 TOML 两种格式的图描述文件，例如：
//!
//! ```toml
//! vertices = ["a", "b", "c"]
//!
//! [[edges]]
//! from = "a"
//! to = "b"
//! weight = 2.5
//!
//! [[edges]]
//! from = "b"
//! to = "c"
//! bidirectional = true
//! ```
//!
//! `vertices` 省略时按边中首次出现的顺序创建顶点；
//! 显式给出时，边只能引用已声明的顶点。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult, StorageError, StorageResult};

use super::digraph::DiGraph;
use super::types::{EdgeId, VertexId};

fn default_weight() -> f64 {
    1.0
}

/// 图文档中的一条边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// 同时添加反向边
    #[serde(default)]
    pub bidirectional: bool,
}

/// 图文档
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

/// 带名称索引的加权图
#[derive(Debug, Clone, Default)]
pub struct NamedGraph {
    pub graph: DiGraph<String, f64>,
    index: HashMap<String, VertexId>,
}

impl NamedGraph {
    /// 按名称查找顶点
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// 按名称查找顶点，不存在时返回 `UnknownVertexName`
    pub fn require_vertex(&self, name: &str) -> StorageResult<VertexId> {
        self.vertex_id(name)
            .ok_or_else(|| StorageError::UnknownVertexName(name.to_string()))
    }

    pub fn vertex_name(&self, id: VertexId) -> &str {
        self.graph.vertex(id).map_or("?", String::as_str)
    }

    pub fn weight(&self, edge: EdgeId) -> f64 {
        self.graph.edge_data(edge).copied().unwrap_or(f64::INFINITY)
    }

    /// 将边序列格式化为 `a -> b -> c`
    pub fn format_path(&self, start: VertexId, edges: &[EdgeId]) -> String {
        super::path::path_vertices(&self.graph, start, edges)
            .into_iter()
            .map(|v| self.vertex_name(v))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    fn intern(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.graph.add_vertex(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }
}

impl GraphDocument {
    pub fn from_json_str(content: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载，根据扩展名选择格式
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => Err(GraphError::Storage(StorageError::UnsupportedFormat(
                other.unwrap_or("").to_string(),
            ))),
        }
    }

    pub fn to_json_string(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 构建加权图
    ///
    /// 权重必须是有限的非负数，否则返回 `InvalidWeight`
    pub fn into_graph(self) -> StorageResult<NamedGraph> {
        let strict = !self.vertices.is_empty();
        let mut named = NamedGraph {
            graph: DiGraph::with_capacity(self.vertices.len(), self.edges.len()),
            index: HashMap::with_capacity(self.vertices.len()),
        };

        for name in &self.vertices {
            if named.index.contains_key(name) {
                return Err(StorageError::DuplicateVertex(name.clone()));
            }
            named.intern(name);
        }

        for edge in &self.edges {
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(StorageError::InvalidWeight {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight,
                });
            }

            let (from, to) = if strict {
                (named.require_vertex(&edge.from)?, named.require_vertex(&edge.to)?)
            } else {
                (named.intern(&edge.from), named.intern(&edge.to))
            };

            named.graph.add_edge(from, to, edge.weight)?;
            if edge.bidirectional {
                named.graph.add_edge(to, from, edge.weight)?;
            }
        }

        log::debug!(
            "图文档加载完成: {} 个顶点, {} 条边",
            named.graph.vertices().count(),
            named.graph.edge_ids().count()
        );
        Ok(named)
    }
}
