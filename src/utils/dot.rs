//! Graphviz DOT 输出
//!
//! 把图渲染为 `digraph`，可选地高亮一组边（例如一条排名路径）

use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::{DirectedGraph, EdgeId, VertexId};

/// 转义 DOT 双引号字符串中的特殊字符
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// 渲染整张图
///
/// 顶点名为 `n{编号}`，标签由 `vertex_label` 给出；`edge_label` 返回空串时不输出边标签。
/// `highlight` 中的边以红色粗线绘制。
pub fn to_dot<G, VL, EL>(graph: &G, vertex_label: VL, edge_label: EL, highlight: &[EdgeId]) -> String
where
    G: DirectedGraph + ?Sized,
    VL: Fn(VertexId) -> String,
    EL: Fn(EdgeId) -> String,
{
    let highlighted: HashSet<EdgeId> = highlight.iter().copied().collect();
    let mut dot = String::new();

    dot.push_str("digraph G {\n");
    dot.push_str("    node [shape=ellipse, fontsize=10];\n");

    for vertex in graph.vertex_ids() {
        let _ = writeln!(
            dot,
            "    n{} [label=\"{}\"];",
            vertex.index(),
            escape_dot(&vertex_label(vertex))
        );
    }

    for vertex in graph.vertex_ids() {
        for &edge in graph.out_edges(vertex) {
            let mut attrs = Vec::new();
            let label = edge_label(edge);
            if !label.is_empty() {
                attrs.push(format!("label=\"{}\"", escape_dot(&label)));
            }
            if highlighted.contains(&edge) {
                attrs.push("color=red".to_string());
                attrs.push("penwidth=2".to_string());
                attrs.push("style=bold".to_string());
            }

            let _ = write!(dot, "    n{} -> n{}", vertex.index(), graph.target(edge).index());
            if !attrs.is_empty() {
                let _ = write!(dot, " [{}]", attrs.join(", "));
            }
            dot.push_str(";\n");
        }
    }

    dot.push_str("}\n");
    dot
}
