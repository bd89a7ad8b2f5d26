//! BFS算法模块
//!
//! 包含广度优先搜索相关算法实现

use std::collections::VecDeque;

use crate::graph::{DirectedGraph, EdgeId, VertexId};

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 使用BFS查找边数最少的路径，返回边序列
    pub fn shortest_hops<G: DirectedGraph + ?Sized>(
        graph: &G,
        start: VertexId,
        target: VertexId,
    ) -> Option<Vec<EdgeId>> {
        if !graph.contains_vertex(start) || !graph.contains_vertex(target) {
            return None;
        }
        if start == target {
            return Some(Vec::new());
        }

        let mut parent: Vec<Option<EdgeId>> = vec![None; graph.vertex_count()];
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();

        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &edge in graph.out_edges(current) {
                let neighbor = graph.target(edge);
                if visited[neighbor.index()] {
                    continue;
                }
                visited[neighbor.index()] = true;
                parent[neighbor.index()] = Some(edge);

                if neighbor == target {
                    let mut path = vec![edge];
                    let mut node = current;
                    while let Some(e) = parent[node.index()] {
                        path.push(e);
                        node = graph.source(e);
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(neighbor);
            }
        }

        None
    }

    /// 使用BFS遍历图，返回从起点可达的所有节点
    pub fn traverse<G: DirectedGraph + ?Sized>(graph: &G, start: VertexId) -> Vec<VertexId> {
        Self::distances(graph, start)
            .into_iter()
            .map(|(vertex, _)| vertex)
            .collect()
    }

    /// 计算从起点到所有可达节点的跳数，按访问顺序返回
    pub fn distances<G: DirectedGraph + ?Sized>(
        graph: &G,
        start: VertexId,
    ) -> Vec<(VertexId, usize)> {
        if !graph.contains_vertex(start) {
            return Vec::new();
        }

        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited[start.index()] = true;
        queue.push_back((start, 0));

        while let Some((current, hops)) = queue.pop_front() {
            result.push((current, hops));

            for &edge in graph.out_edges(current) {
                let neighbor = graph.target(edge);
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back((neighbor, hops + 1));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    fn sample() -> (DiGraph<char, ()>, Vec<VertexId>) {
        let mut graph = DiGraph::new();
        let ids: Vec<VertexId> = ['A', 'B', 'C', 'D', 'E'].into_iter().map(|c| graph.add_vertex(c)).collect();
        for (s, t) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)] {
            graph.add_edge(ids[s], ids[t], ()).expect("Edge should be added in test");
        }
        (graph, ids)
    }

    #[test]
    fn test_shortest_hops() {
        let (graph, ids) = sample();
        let path = Bfs::shortest_hops(&graph, ids[0], ids[3]).expect("Path should exist in test");
        assert_eq!(path.len(), 2);
        assert_eq!(graph.source(path[0]), ids[0]);
        assert_eq!(graph.target(path[0]), ids[1]);
        assert_eq!(graph.target(path[1]), ids[3]);
    }

    #[test]
    fn test_shortest_hops_unreachable() {
        let (graph, ids) = sample();
        assert!(Bfs::shortest_hops(&graph, ids[0], ids[4]).is_none());
        assert_eq!(Bfs::shortest_hops(&graph, ids[4], ids[4]), Some(Vec::new()));
    }

    #[test]
    fn test_traverse() {
        let (graph, ids) = sample();
        let result = Bfs::traverse(&graph, ids[0]);
        assert_eq!(result, vec![ids[0], ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn test_distances() {
        let (graph, ids) = sample();
        let distances = Bfs::distances(&graph, ids[1]);
        assert_eq!(
            distances,
            vec![(ids[1], 0), (ids[3], 1), (ids[0], 2), (ids[2], 3)]
        );
        assert!(Bfs::distances(&graph, VertexId::new(77)).is_empty());
    }
}
