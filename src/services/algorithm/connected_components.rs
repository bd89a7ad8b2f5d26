//! 连通分量算法模块
//!
//! 基于并查集的弱连通分量检测：忽略边的方向，两端点相连即属于同一分量

use crate::graph::{DirectedGraph, VertexId};
use crate::utils::disjoint_set::DisjointSet;

/// 连通分量算法结构体
pub struct ConnectedComponents;

impl ConnectedComponents {
    fn union_all<G: DirectedGraph + ?Sized>(graph: &G) -> DisjointSet {
        let mut set = DisjointSet::new(graph.vertex_count());
        for vertex in graph.vertex_ids() {
            for &edge in graph.out_edges(vertex) {
                set.union(vertex.index(), graph.target(edge).index());
            }
        }
        set
    }

    /// 查找所有弱连通分量
    ///
    /// 分量内顶点按编号升序，分量之间按最小顶点编号升序
    pub fn weakly_connected<G: DirectedGraph + ?Sized>(graph: &G) -> Vec<Vec<VertexId>> {
        let mut set = Self::union_all(graph);
        let mut slot_of_root: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let mut components: Vec<Vec<VertexId>> = Vec::new();

        for vertex in graph.vertex_ids() {
            let root = set.find(vertex.index());
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(vertex);
        }

        components
    }

    /// 计算连通分量的数量
    pub fn count<G: DirectedGraph + ?Sized>(graph: &G) -> usize {
        Self::union_all(graph).set_count()
    }

    /// 为每个顶点分配分量编号，编号与 `weakly_connected` 的顺序一致
    pub fn component_ids<G: DirectedGraph + ?Sized>(graph: &G) -> Vec<usize> {
        let mut ids = vec![0; graph.vertex_count()];
        for (index, component) in Self::weakly_connected(graph).iter().enumerate() {
            for vertex in component {
                ids[vertex.index()] = index;
            }
        }
        ids
    }

    /// 检查两个节点是否在同一个连通分量中
    pub fn in_same_component<G: DirectedGraph + ?Sized>(
        graph: &G,
        node1: VertexId,
        node2: VertexId,
    ) -> bool {
        if !graph.contains_vertex(node1) || !graph.contains_vertex(node2) {
            return false;
        }
        Self::union_all(graph).same_set(node1.index(), node2.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    fn two_islands() -> (DiGraph<u8, ()>, Vec<VertexId>) {
        let mut graph = DiGraph::new();
        let ids: Vec<VertexId> = (0..6).map(|i| graph.add_vertex(i)).collect();
        for (s, t) in [(0, 1), (2, 1), (3, 4), (4, 3)] {
            graph.add_edge(ids[s], ids[t], ()).expect("Edge should be added in test");
        }
        (graph, ids)
    }

    #[test]
    fn test_find_components() {
        let (graph, ids) = two_islands();
        let components = ConnectedComponents::weakly_connected(&graph);
        assert_eq!(
            components,
            vec![vec![ids[0], ids[1], ids[2]], vec![ids[3], ids[4]], vec![ids[5]]]
        );
        assert_eq!(ConnectedComponents::count(&graph), 3);
        assert_eq!(ConnectedComponents::component_ids(&graph), vec![0, 0, 0, 1, 1, 2]);
    }

    #[test]
    fn test_in_same_component() {
        let (graph, ids) = two_islands();
        // 方向被忽略：0 与 2 通过 1 相连
        assert!(ConnectedComponents::in_same_component(&graph, ids[0], ids[2]));
        assert!(!ConnectedComponents::in_same_component(&graph, ids[0], ids[3]));
        assert!(!ConnectedComponents::in_same_component(&graph, ids[0], VertexId::new(40)));
    }

    #[test]
    fn test_empty_graph() {
        let graph: DiGraph<u8, ()> = DiGraph::new();
        assert!(ConnectedComponents::weakly_connected(&graph).is_empty());
        assert_eq!(ConnectedComponents::count(&graph), 0);
    }
}
