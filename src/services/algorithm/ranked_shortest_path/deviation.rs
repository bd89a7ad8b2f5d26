//! 偏离候选生成
//!
//! 对一条已接受的路径，在每个位置尝试换走另一条出边，
//! 再沿反向最短路径树走到目标，得到一条候选路径。

use std::collections::HashSet;
use std::rc::Rc;

use crate::graph::{DirectedGraph, EdgeId, VertexId};
use crate::services::algorithm::queue::RelaxedQueue;
use crate::services::algorithm::relaxer::DistanceRelaxer;

use super::reverse_tree::ReverseTree;

/// 偏离候选
///
/// 候选路径 = `parent_path[..deviation_index]` + `deviation_edge` + 树上从
/// `deviation_edge` 终点到目标的路径
#[derive(Debug, Clone)]
pub struct DeviationCandidate {
    pub parent_path: Rc<[EdgeId]>,
    pub deviation_index: usize,
    pub deviation_edge: EdgeId,
    pub weight: f64,
}

impl DeviationCandidate {
    /// 组装完整的候选路径
    pub fn assemble<G: DirectedGraph + ?Sized>(&self, graph: &G, tree: &ReverseTree) -> Vec<EdgeId> {
        let mut path = Vec::with_capacity(self.parent_path.len() + 1);
        path.extend_from_slice(&self.parent_path[..self.deviation_index]);
        path.push(self.deviation_edge);
        tree.append_path_from(graph, graph.target(self.deviation_edge), &mut path);
        path
    }
}

/// 偏离候选生成器
pub struct DeviationGenerator<'a, G: ?Sized, R: ?Sized> {
    graph: &'a G,
    edge_weight: &'a dyn Fn(EdgeId) -> f64,
    relaxer: &'a R,
    tree: &'a ReverseTree,
}

impl<'a, G, R> DeviationGenerator<'a, G, R>
where
    G: DirectedGraph + ?Sized,
    R: DistanceRelaxer + ?Sized,
{
    pub fn new(
        graph: &'a G,
        edge_weight: &'a dyn Fn(EdgeId) -> f64,
        relaxer: &'a R,
        tree: &'a ReverseTree,
    ) -> Self {
        Self {
            graph,
            edge_weight,
            relaxer,
            tree,
        }
    }

    /// 对 `path` 中 `[start, path.len())` 的每个位置生成偏离候选并入队
    ///
    /// 沿路径前缀行走时一旦某个顶点出现第二次就停止，之后的位置不再生成候选。
    /// 返回入队的候选数量。
    pub fn enqueue(
        &self,
        queue: &mut RelaxedQueue<'_, R, DeviationCandidate>,
        path: &Rc<[EdgeId]>,
        start: usize,
    ) -> usize {
        let Some(&first) = path.first() else {
            return 0;
        };

        let mut pushed = 0;
        let mut previous_vertex = self.graph.source(first);
        let mut previous_weight = self.relaxer.initial_distance();
        let mut seen: HashSet<VertexId> = HashSet::with_capacity(path.len() + 1);
        seen.insert(previous_vertex);

        for (index, &edge) in path.iter().enumerate() {
            if index >= start {
                pushed += self.enqueue_at(queue, path, index, previous_vertex, previous_weight);
            }

            previous_vertex = self.graph.target(edge);
            previous_weight = self.relaxer.combine(previous_weight, (self.edge_weight)(edge));

            if !seen.insert(previous_vertex) {
                break;
            }
        }

        pushed
    }

    fn enqueue_at(
        &self,
        queue: &mut RelaxedQueue<'_, R, DeviationCandidate>,
        path: &Rc<[EdgeId]>,
        index: usize,
        vertex: VertexId,
        prefix_weight: f64,
    ) -> usize {
        let used = path[index];
        let mut pushed = 0;

        for &deviation_edge in self.graph.out_edges(vertex) {
            if deviation_edge == used || self.graph.is_self_loop(deviation_edge) {
                continue;
            }

            let Some(remaining) = self.tree.distance_to_target(self.graph.target(deviation_edge)) else {
                continue;
            };

            let weight = self.relaxer.combine(
                prefix_weight,
                self.relaxer
                    .combine((self.edge_weight)(deviation_edge), remaining),
            );
            log::trace!(
                "偏离候选: 位置 {} 边 {} 权重 {}",
                index,
                deviation_edge,
                weight
            );
            queue.push(
                weight,
                DeviationCandidate {
                    parent_path: Rc::clone(path),
                    deviation_index: index,
                    deviation_edge,
                    weight,
                },
            );
            pushed += 1;
        }

        pushed
    }
}
