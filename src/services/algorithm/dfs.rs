//! DFS算法模块
//!
//! 包含深度优先搜索相关算法实现。使用显式栈而不是递归，
//! 深图不会耗尽调用栈。

use crate::graph::{DirectedGraph, EdgeId, VertexId};

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 查找两个节点之间的所有简单路径（带长度限制以控制搜索规模）
    ///
    /// `max_len` 是路径允许的最大边数。路径按出边顺序的字典序返回。
    pub fn all_simple_paths<G: DirectedGraph + ?Sized>(
        graph: &G,
        start: VertexId,
        target: VertexId,
        max_len: usize,
    ) -> Vec<Vec<EdgeId>> {
        let mut all_paths = Vec::new();
        if !graph.contains_vertex(start) || !graph.contains_vertex(target) {
            return all_paths;
        }
        if start == target {
            all_paths.push(Vec::new());
            return all_paths;
        }

        let mut on_path = vec![false; graph.vertex_count()];
        let mut current_path: Vec<EdgeId> = Vec::new();
        // 每层记录当前顶点及下一条待尝试出边的位置
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        on_path[start.index()] = true;

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let edges = graph.out_edges(vertex);
            if frame.1 >= edges.len() || current_path.len() >= max_len {
                stack.pop();
                on_path[vertex.index()] = false;
                current_path.pop();
                continue;
            }

            let edge = edges[frame.1];
            frame.1 += 1;
            let neighbor = graph.target(edge);
            if on_path[neighbor.index()] {
                continue;
            }

            if neighbor == target {
                let mut found = current_path.clone();
                found.push(edge);
                all_paths.push(found);
                continue;
            }

            on_path[neighbor.index()] = true;
            current_path.push(edge);
            stack.push((neighbor, 0));
        }

        all_paths
    }

    /// DFS遍历图，返回从起点可达的所有节点（前序）
    pub fn traverse<G: DirectedGraph + ?Sized>(graph: &G, start: VertexId) -> Vec<VertexId> {
        let mut result = Vec::new();
        if !graph.contains_vertex(start) {
            return result;
        }

        let mut visited = vec![false; graph.vertex_count()];
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        visited[start.index()] = true;
        result.push(start);

        while let Some(frame) = stack.last_mut() {
            let edges = graph.out_edges(frame.0);
            if frame.1 >= edges.len() {
                stack.pop();
                continue;
            }

            let neighbor = graph.target(edges[frame.1]);
            frame.1 += 1;
            if !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                result.push(neighbor);
                stack.push((neighbor, 0));
            }
        }

        result
    }
}
