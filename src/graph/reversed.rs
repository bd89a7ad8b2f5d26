//! 反向图视图
//!
//! 不复制任何数据：出边与入边互换、边的起点与终点互换。
//! 反向视图中的边句柄与原图相同，因此在反向图上求得的前驱边
//! 可以直接解释为原图中指向目标方向的后继边。

use super::traits::DirectedGraph;
use super::types::{EdgeId, VertexId};

/// 借用原图的反向视图
#[derive(Debug)]
pub struct Reversed<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: DirectedGraph + ?Sized> Reversed<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<G: DirectedGraph + ?Sized> DirectedGraph for Reversed<'_, G> {
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.graph.contains_vertex(vertex)
    }

    fn out_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.graph.in_edges(vertex)
    }

    fn in_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.graph.out_edges(vertex)
    }

    fn source(&self, edge: EdgeId) -> VertexId {
        self.graph.target(edge)
    }

    fn target(&self, edge: EdgeId) -> VertexId {
        self.graph.source(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn test_reversed_swaps_direction() {
        let mut graph: DiGraph<&str, f64> = DiGraph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let c = graph.add_vertex("c");
        let ab = graph.add_edge(a, b, 1.0).expect("Edge should be added in test");
        let cb = graph.add_edge(c, b, 1.0).expect("Edge should be added in test");

        let reversed = Reversed::new(&graph);
        assert_eq!(reversed.out_edges(b), &[ab, cb]);
        assert!(reversed.in_edges(b).is_empty());
        assert_eq!(reversed.source(ab), b);
        assert_eq!(reversed.target(ab), a);
        assert_eq!(reversed.vertex_count(), 3);
        assert_eq!(reversed.edge_count(), 2);
    }

    #[test]
    fn test_double_reverse_is_identity() {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let ab = graph.add_edge(a, b, ()).expect("Edge should be added in test");

        let reversed = Reversed::new(&graph);
        let twice = Reversed::new(&reversed);
        assert_eq!(twice.source(ab), a);
        assert_eq!(twice.target(ab), b);
        assert_eq!(twice.out_edges(a), graph.out_edges(a));
    }
}
