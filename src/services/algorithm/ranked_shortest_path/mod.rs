//! 排名最短路径算法模块（Hoffman-Pavley 偏离算法）
//!
//! 求根顶点到目标顶点之间权重最优的 K 条简单路径（不重复经过顶点），
//! 结果按权重非递减排列。
//!
//! 计算流程：
//! 1. 在反向图上以目标为源点构建最短路径树，得到每个顶点指向目标的后继边和距离；
//! 2. 沿后继边从根顶点走到目标，得到第一条路径；
//! 3. 对每条接受的路径生成偏离候选并放入优先队列；
//! 4. 反复弹出最优候选、组装完整路径，含环的丢弃，无环的接受并继续生成偏离。
//!
//! 候选只从一条具体的有限路径上生成，因此即使图中存在零权环，候选总数也是有限的。

mod deviation;
mod reverse_tree;

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::cancel::CancelToken;
use crate::core::error::{AlgorithmError, AlgorithmResult};
use crate::graph::path::{has_cycles, path_vertices};
use crate::graph::{DirectedGraph, EdgeId, VertexId};

use super::queue::RelaxedQueue;
use super::relaxer::{DistanceRelaxer, ShortestDistance};

pub use deviation::{DeviationCandidate, DeviationGenerator};
pub use reverse_tree::ReverseTree;

/// 默认的路径数量
pub const DEFAULT_PATH_COUNT: usize = 3;

/// 边权重函数
pub type EdgeWeightFn<'g> = Box<dyn Fn(EdgeId) -> f64 + 'g>;

/// 一条排名路径
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath {
    start: VertexId,
    edges: Vec<EdgeId>,
    weight: f64,
}

impl RankedPath {
    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 边数
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 路径经过的顶点序列
    pub fn vertices<G: DirectedGraph + ?Sized>(&self, graph: &G) -> Vec<VertexId> {
        path_vertices(graph, self.start, &self.edges)
    }

    pub fn into_edges(self) -> Vec<EdgeId> {
        self.edges
    }
}

/// 含环候选的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclicCandidatePolicy {
    /// 直接丢弃含环候选，不再从它生成偏离
    #[default]
    Discard,
    /// 不接受含环候选，但仍从它的无环前缀生成偏离，
    /// 可以找回那些只能由含环路径派生出来的简单路径
    Expand,
}

/// 计算结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// 已找到 K 条路径
    Completed,
    /// 候选耗尽，找到的路径少于 K 条
    Exhausted,
    /// 根顶点无法到达目标顶点
    Unreachable,
    /// 协作取消，已接受的路径保持可用
    Cancelled,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Completed => write!(f, "completed"),
            SearchOutcome::Exhausted => write!(f, "exhausted"),
            SearchOutcome::Unreachable => write!(f, "unreachable"),
            SearchOutcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// 计算阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Init,
    Seed,
    Expand,
    Done(SearchOutcome),
}

/// 算法统计信息，每次计算开始时重置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub tree_vertices: usize,
    pub candidates_enqueued: usize,
    pub candidates_popped: usize,
    pub cyclic_discarded: usize,
    pub paths_accepted: usize,
}

/// 排名最短路径算法
///
/// 同一实例可以顺序地多次计算，每次计算开始时清空上一次的结果。
pub struct RankedShortestPath<'g, G: ?Sized> {
    graph: &'g G,
    edge_weight: EdgeWeightFn<'g>,
    relaxer: Box<dyn DistanceRelaxer + 'g>,
    path_count: usize,
    cyclic_policy: CyclicCandidatePolicy,
    cancel: CancelToken,
    root: Option<VertexId>,
    target: Option<VertexId>,
    computed: Vec<RankedPath>,
    stats: SearchStats,
    phase: SearchPhase,
}

impl<G: ?Sized> fmt::Debug for RankedShortestPath<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankedShortestPath")
            .field("relaxer", &self.relaxer)
            .field("path_count", &self.path_count)
            .field("cyclic_policy", &self.cyclic_policy)
            .field("root", &self.root)
            .field("target", &self.target)
            .field("computed", &self.computed.len())
            .field("phase", &self.phase)
            .finish()
    }
}

fn validate_path_count(path_count: usize) -> AlgorithmResult<usize> {
    if path_count <= 1 {
        return Err(AlgorithmError::out_of_range(
            "path_count",
            path_count,
            "必须大于 1，单条最短路径请使用 Dijkstra",
        ));
    }
    Ok(path_count)
}

/// `RankedShortestPath` 构建器
pub struct RankedShortestPathBuilder<'g, G: ?Sized> {
    graph: Option<&'g G>,
    edge_weight: Option<EdgeWeightFn<'g>>,
    relaxer: Option<Box<dyn DistanceRelaxer + 'g>>,
    path_count: usize,
    cyclic_policy: CyclicCandidatePolicy,
    cancel: Option<CancelToken>,
}

impl<G: ?Sized> Default for RankedShortestPathBuilder<'_, G> {
    fn default() -> Self {
        Self {
            graph: None,
            edge_weight: None,
            relaxer: None,
            path_count: DEFAULT_PATH_COUNT,
            cyclic_policy: CyclicCandidatePolicy::default(),
            cancel: None,
        }
    }
}

impl<'g, G: DirectedGraph + ?Sized> RankedShortestPathBuilder<'g, G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(mut self, graph: &'g G) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn edge_weight<F>(mut self, edge_weight: F) -> Self
    where
        F: Fn(EdgeId) -> f64 + 'g,
    {
        self.edge_weight = Some(Box::new(edge_weight));
        self
    }

    pub fn relaxer<R>(mut self, relaxer: R) -> Self
    where
        R: DistanceRelaxer + 'g,
    {
        self.relaxer = Some(Box::new(relaxer));
        self
    }

    pub fn path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    pub fn cyclic_policy(mut self, policy: CyclicCandidatePolicy) -> Self {
        self.cyclic_policy = policy;
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// 构建算法实例
    ///
    /// 缺少图或权重函数时返回 `ArgumentNull`，路径数量不大于 1 时返回 `ArgumentOutOfRange`
    pub fn build(self) -> AlgorithmResult<RankedShortestPath<'g, G>> {
        let graph = self.graph.ok_or(AlgorithmError::ArgumentNull("graph"))?;
        let edge_weight = self
            .edge_weight
            .ok_or(AlgorithmError::ArgumentNull("edge_weight"))?;
        let path_count = validate_path_count(self.path_count)?;
        let relaxer: Box<dyn DistanceRelaxer + 'g> = match self.relaxer {
            Some(relaxer) => relaxer,
            None => Box::new(ShortestDistance),
        };

        Ok(RankedShortestPath {
            graph,
            edge_weight,
            relaxer,
            path_count,
            cyclic_policy: self.cyclic_policy,
            cancel: self.cancel.unwrap_or_default(),
            root: None,
            target: None,
            computed: Vec::new(),
            stats: SearchStats::default(),
            phase: SearchPhase::Init,
        })
    }
}

impl<'g, G: DirectedGraph + ?Sized> RankedShortestPath<'g, G> {
    /// 使用默认松弛器创建算法实例
    pub fn new<F>(graph: &'g G, edge_weight: F, path_count: usize) -> AlgorithmResult<Self>
    where
        F: Fn(EdgeId) -> f64 + 'g,
    {
        RankedShortestPathBuilder::new()
            .graph(graph)
            .edge_weight(edge_weight)
            .path_count(path_count)
            .build()
    }

    pub fn builder() -> RankedShortestPathBuilder<'g, G> {
        RankedShortestPathBuilder::new()
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn relaxer(&self) -> &dyn DistanceRelaxer {
        self.relaxer.as_ref()
    }

    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// 设置要求的路径数量 K，必须大于 1
    pub fn set_path_count(&mut self, path_count: usize) -> AlgorithmResult<()> {
        self.path_count = validate_path_count(path_count)?;
        Ok(())
    }

    pub fn cyclic_policy(&self) -> CyclicCandidatePolicy {
        self.cyclic_policy
    }

    pub fn set_cyclic_policy(&mut self, policy: CyclicCandidatePolicy) {
        self.cyclic_policy = policy;
    }

    /// 取消标志；克隆后交给其他线程即可请求取消
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    pub fn set_root(&mut self, root: VertexId) {
        self.root = Some(root);
    }

    pub fn target(&self) -> Option<VertexId> {
        self.target
    }

    pub fn set_target(&mut self, target: VertexId) {
        self.target = Some(target);
    }

    /// 已计算出的路径，按权重非递减排列
    pub fn computed_paths(&self) -> &[RankedPath] {
        &self.computed
    }

    pub fn computed_path_count(&self) -> usize {
        self.computed.len()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// 设置根顶点与目标顶点后计算
    ///
    /// 任一顶点不在图中时返回 `InvalidArgument`
    pub fn compute_between(&mut self, root: VertexId, target: VertexId) -> AlgorithmResult<SearchOutcome> {
        for (name, vertex) in [("root", root), ("target", target)] {
            if !self.graph.contains_vertex(vertex) {
                return Err(AlgorithmError::InvalidArgument(format!(
                    "{} 顶点 {} 不在图中",
                    name, vertex
                )));
            }
        }

        self.set_root(root);
        self.set_target(target);
        self.compute()
    }

    /// 使用已设置的根顶点与目标顶点计算
    pub fn compute(&mut self) -> AlgorithmResult<SearchOutcome> {
        self.computed.clear();
        self.stats = SearchStats::default();
        self.phase = SearchPhase::Init;

        let root = self
            .root
            .ok_or_else(|| AlgorithmError::InvalidState("根顶点未设置".to_string()))?;
        let target = self
            .target
            .ok_or_else(|| AlgorithmError::InvalidState("目标顶点未设置".to_string()))?;
        for vertex in [root, target] {
            if !self.graph.contains_vertex(vertex) {
                return Err(AlgorithmError::VertexNotFound(vertex));
            }
        }

        log::debug!(
            "排名最短路径计算开始: root={}, target={}, k={}, policy={:?}",
            root,
            target,
            self.path_count,
            self.cyclic_policy
        );

        let outcome = self.run(root, target)?;
        self.phase = SearchPhase::Done(outcome);

        log::debug!(
            "排名最短路径计算结束: {}，找到 {} 条路径，统计 {:?}",
            outcome,
            self.computed.len(),
            self.stats
        );
        Ok(outcome)
    }

    fn run(&mut self, root: VertexId, target: VertexId) -> AlgorithmResult<SearchOutcome> {
        let graph: &'g G = self.graph;
        let edge_weight = &*self.edge_weight;
        let relaxer = &*self.relaxer;
        let path_count = self.path_count;
        let cyclic_policy = self.cyclic_policy;
        let cancel = &self.cancel;
        let computed = &mut self.computed;
        let stats = &mut self.stats;
        let phase = &mut self.phase;

        if cancel.is_cancelled() {
            return Ok(SearchOutcome::Cancelled);
        }

        *phase = SearchPhase::Seed;
        if root == target {
            computed.push(RankedPath {
                start: root,
                edges: Vec::new(),
                weight: relaxer.initial_distance(),
            });
            stats.paths_accepted = 1;
            return Ok(SearchOutcome::Exhausted);
        }

        let tree = ReverseTree::build(graph, target, edge_weight, relaxer, cancel)?;
        stats.tree_vertices = tree.reached_count();
        if tree.is_cancelled() {
            return Ok(SearchOutcome::Cancelled);
        }

        let Some(seed_weight) = tree.distance_to_target(root) else {
            log::debug!("根顶点 {} 无法到达目标顶点 {}", root, target);
            return Ok(SearchOutcome::Unreachable);
        };
        let seed: Rc<[EdgeId]> = tree.path_from(graph, root).into();

        let generator = DeviationGenerator::new(graph, edge_weight, relaxer, &tree);
        let mut queue = RelaxedQueue::new(relaxer);

        let seed_is_simple = !has_cycles(graph, &seed);
        if seed_is_simple {
            computed.push(RankedPath {
                start: root,
                edges: seed.to_vec(),
                weight: seed_weight,
            });
            stats.paths_accepted += 1;
        }
        if seed_is_simple || cyclic_policy == CyclicCandidatePolicy::Expand {
            stats.candidates_enqueued += generator.enqueue(&mut queue, &seed, 0);
        }

        *phase = SearchPhase::Expand;
        let vertex_count = graph.vertex_count();
        while computed.len() < path_count {
            if cancel.is_cancelled() {
                log::debug!("排名最短路径计算被取消，已接受 {} 条路径", computed.len());
                return Ok(SearchOutcome::Cancelled);
            }

            let Some((weight, candidate)) = queue.pop() else {
                return Ok(SearchOutcome::Exhausted);
            };
            stats.candidates_popped += 1;

            let path: Rc<[EdgeId]> = candidate.assemble(graph, &tree).into();
            // 偏离边之前的位置已由父路径生成过候选
            let next_start = candidate.deviation_index + 1;

            if has_cycles(graph, &path) {
                stats.cyclic_discarded += 1;
                log::trace!("丢弃含环候选: 权重 {}, 长度 {}", weight, path.len());
                if cyclic_policy == CyclicCandidatePolicy::Expand && path.len() < vertex_count {
                    stats.candidates_enqueued += generator.enqueue(&mut queue, &path, next_start);
                }
                continue;
            }

            computed.push(RankedPath {
                start: root,
                edges: path.to_vec(),
                weight,
            });
            stats.paths_accepted += 1;

            if path.len() < vertex_count {
                stats.candidates_enqueued += generator.enqueue(&mut queue, &path, next_start);
            }
        }

        log::debug!(
            "已找到 {} 条路径，队列中剩余 {} 个候选",
            computed.len(),
            queue.len()
        );
        Ok(SearchOutcome::Completed)
    }
}
