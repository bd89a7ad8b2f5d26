//! 测试数据生成模块
//!
//! 提供各种测试图的生成函数

use graphkit::graph::{DiGraph, EdgeId, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 带权有向图及其顶点句柄，顶点数据为编号
pub struct WeightedGraph {
    pub graph: DiGraph<usize, f64>,
    pub ids: Vec<VertexId>,
}

impl WeightedGraph {
    pub fn new(vertex_count: usize) -> Self {
        let mut graph = DiGraph::with_capacity(vertex_count, 0);
        let ids = (0..vertex_count).map(|i| graph.add_vertex(i)).collect();
        Self { graph, ids }
    }

    /// 按 (起点编号, 终点编号, 权重) 构建
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut fixture = Self::new(vertex_count);
        for &(s, t, w) in edges {
            fixture.add(s, t, w);
        }
        fixture
    }

    /// 每条边在两个方向各插入一次
    pub fn bidirectional(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut fixture = Self::new(vertex_count);
        for &(s, t, w) in edges {
            fixture
                .graph
                .add_edge_pair(fixture.ids[s], fixture.ids[t], w)
                .expect("Edge pair should be added in test");
        }
        fixture
    }

    pub fn add(&mut self, s: usize, t: usize, w: f64) -> EdgeId {
        self.graph
            .add_edge(self.ids[s], self.ids[t], w)
            .expect("Edge should be added in test")
    }

    pub fn weight(&self) -> impl Fn(EdgeId) -> f64 + '_ {
        move |e| *self.graph.edge_data(e).expect("Edge should exist in test")
    }

    /// 路径经过的顶点编号
    pub fn labels(&self, start: VertexId, edges: &[EdgeId]) -> Vec<usize> {
        graphkit::graph::path::path_vertices(&self.graph, start, edges)
            .into_iter()
            .map(|v| *self.graph.vertex(v).expect("Vertex should exist in test"))
            .collect()
    }
}

/// 场景 A：只有一条从 0 到 3 的路径，1 -> 4 是死胡同，3 -> 0 是回边
pub fn single_path_graph() -> WeightedGraph {
    WeightedGraph::from_edges(
        5,
        &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (1, 4, 1.0), (3, 0, 1.0)],
    )
}

/// 场景 B：9 个顶点的双向网络，0 到 8 之间有大量简单路径
pub fn bidirectional_network() -> WeightedGraph {
    WeightedGraph::bidirectional(
        9,
        &[
            (0, 1, 2.0),
            (0, 2, 3.0),
            (0, 3, 4.0),
            (1, 4, 3.0),
            (1, 5, 2.0),
            (1, 6, 5.0),
            (2, 4, 1.0),
            (2, 5, 4.0),
            (2, 6, 2.0),
            (3, 4, 6.0),
            (3, 5, 3.0),
            (3, 6, 1.0),
            (4, 7, 2.0),
            (5, 7, 3.0),
            (6, 7, 2.0),
            (3, 7, 7.0),
            (7, 8, 1.0),
        ],
    )
}

/// 场景 C：两个串联的菱形，共 4 条简单路径，4 -> 0 回边会产生含环候选
pub fn double_diamond() -> WeightedGraph {
    WeightedGraph::from_edges(
        7,
        &[
            (0, 1, 1.0),
            (0, 2, 2.0),
            (1, 3, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (3, 5, 3.0),
            (4, 6, 1.0),
            (5, 6, 1.0),
            (4, 0, 1.0),
        ],
    )
}

/// 场景 D：零权有向 6 环加交叉边
pub fn zero_weight_cycle() -> WeightedGraph {
    let mut edges: Vec<(usize, usize, f64)> = (0..6).map(|i| (i, (i + 1) % 6, 0.0)).collect();
    edges.extend_from_slice(&[(0, 3, 1.0), (1, 4, 1.0), (2, 5, 1.0), (4, 1, 0.0), (5, 2, 2.0)]);
    WeightedGraph::from_edges(6, &edges)
}

/// 场景 E：0 -> 2 的偏离经树边 2 -> 0 回到根，组装出含环候选 0 -> 2 -> 0 -> 3
///
/// 顶点 1 是孤立点，使该候选的边数小于顶点数，`Expand` 策略会继续从中偏离，
/// 找到 `Discard` 策略找不到的 0 -> 2 -> 3
pub fn cyclic_parent_graph() -> WeightedGraph {
    WeightedGraph::from_edges(4, &[(0, 3, 1.0), (0, 2, 4.0), (2, 0, 2.0), (2, 3, 4.0)])
}

/// 随机 DAG：只有编号小的顶点指向编号大的顶点，权重为 0..=5 的整数
pub fn random_dag(seed: u64) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(2..=8);
    let mut fixture = WeightedGraph::new(vertex_count);
    for s in 0..vertex_count {
        for t in (s + 1)..vertex_count {
            if rng.gen_bool(0.5) {
                let w = f64::from(rng.gen_range(0..=5u8));
                fixture.add(s, t, w);
            }
        }
    }
    fixture
}

/// 随机有向图，允许环、自环和平行边
pub fn random_cyclic(seed: u64) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(2..=7);
    let edge_count = rng.gen_range(vertex_count..=vertex_count * 3);
    let mut fixture = WeightedGraph::new(vertex_count);
    for _ in 0..edge_count {
        let s = rng.gen_range(0..vertex_count);
        let t = rng.gen_range(0..vertex_count);
        let w = f64::from(rng.gen_range(0..=4u8));
        fixture.add(s, t, w);
    }
    fixture
}
