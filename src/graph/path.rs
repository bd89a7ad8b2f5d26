//! 边序列路径工具
//!
//! 路径以边句柄序列表示，顶点序列由边的端点推导

use std::collections::HashSet;

use super::traits::DirectedGraph;
use super::types::{EdgeId, VertexId};

/// 路径经过的顶点序列
///
/// 空路径只包含 `start`
pub fn path_vertices<G: DirectedGraph + ?Sized>(
    graph: &G,
    start: VertexId,
    edges: &[EdgeId],
) -> Vec<VertexId> {
    let mut vertices = Vec::with_capacity(edges.len() + 1);
    vertices.push(edges.first().map_or(start, |&e| graph.source(e)));
    vertices.extend(edges.iter().map(|&e| graph.target(e)));
    vertices
}

/// 检查路径是否重复经过某个顶点
pub fn has_cycles<G: DirectedGraph + ?Sized>(graph: &G, edges: &[EdgeId]) -> bool {
    let Some(&first) = edges.first() else {
        return false;
    };

    let mut seen = HashSet::with_capacity(edges.len() + 1);
    seen.insert(graph.source(first));
    edges.iter().any(|&e| !seen.insert(graph.target(e)))
}

/// 检查相邻边是否首尾相接
pub fn is_connected_path<G: DirectedGraph + ?Sized>(graph: &G, edges: &[EdgeId]) -> bool {
    edges
        .windows(2)
        .all(|pair| graph.target(pair[0]) == graph.source(pair[1]))
}

/// 使用给定的合并函数累加路径权重
pub fn path_weight<F, C>(edges: &[EdgeId], initial: f64, edge_weight: F, combine: C) -> f64
where
    F: Fn(EdgeId) -> f64,
    C: Fn(f64, f64) -> f64,
{
    edges
        .iter()
        .fold(initial, |acc, &e| combine(acc, edge_weight(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    fn triangle() -> (DiGraph<u8, f64>, Vec<EdgeId>) {
        let mut graph = DiGraph::new();
        let a = graph.add_vertex(0);
        let b = graph.add_vertex(1);
        let c = graph.add_vertex(2);
        let ab = graph.add_edge(a, b, 1.0).expect("Edge should be added in test");
        let bc = graph.add_edge(b, c, 2.0).expect("Edge should be added in test");
        let ca = graph.add_edge(c, a, 4.0).expect("Edge should be added in test");
        (graph, vec![ab, bc, ca])
    }

    #[test]
    fn test_path_vertices() {
        let (graph, edges) = triangle();
        let vertices = path_vertices(&graph, VertexId::new(0), &edges[..2]);
        assert_eq!(
            vertices,
            vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]
        );
        assert_eq!(path_vertices(&graph, VertexId::new(2), &[]), vec![VertexId::new(2)]);
    }

    #[test]
    fn test_has_cycles() {
        let (graph, edges) = triangle();
        assert!(!has_cycles(&graph, &[]));
        assert!(!has_cycles(&graph, &edges[..2]));
        assert!(has_cycles(&graph, &edges));
    }

    #[test]
    fn test_is_connected_path() {
        let (graph, edges) = triangle();
        assert!(is_connected_path(&graph, &edges));
        assert!(!is_connected_path(&graph, &[edges[0], edges[2]]));
    }

    #[test]
    fn test_path_weight() {
        let (graph, edges) = triangle();
        let weight = path_weight(&edges, 0.0, |e| *graph.edge_data(e).unwrap_or(&0.0), |a, b| a + b);
        assert_eq!(weight, 7.0);
    }
}
