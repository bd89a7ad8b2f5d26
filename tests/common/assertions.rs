//! 自定义断言辅助模块
//!
//! 提供排名路径结果的常用断言函数

use std::collections::HashSet;

use graphkit::graph::path::is_connected_path;
use graphkit::graph::{DirectedGraph, EdgeId, VertexId};
use graphkit::services::algorithm::{DistanceRelaxer, RankedPath};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言排名路径满足全部不变量：
/// 从 root 出发到达 target，首尾相接，不重复经过顶点，权重单调，数量不超过 k
pub fn assert_ranked_paths<G: DirectedGraph + ?Sized>(
    graph: &G,
    paths: &[RankedPath],
    root: VertexId,
    target: VertexId,
    k: usize,
    relaxer: &dyn DistanceRelaxer,
) {
    assert!(paths.len() <= k, "路径数量 {} 超过 k = {}", paths.len(), k);

    for path in paths {
        let vertices = path.vertices(graph);
        assert_eq!(vertices.first(), Some(&root), "路径应从根顶点出发");
        assert_eq!(vertices.last(), Some(&target), "路径应到达目标顶点");
        assert!(is_connected_path(graph, path.edges()), "路径的边应首尾相接");

        let unique: HashSet<VertexId> = vertices.iter().copied().collect();
        assert_eq!(unique.len(), vertices.len(), "路径不应重复经过顶点: {:?}", vertices);
    }

    for pair in paths.windows(2) {
        assert!(
            !relaxer.is_better(pair[1].weight(), pair[0].weight()),
            "权重应单调: {} 之后出现 {}",
            pair[0].weight(),
            pair[1].weight()
        );
    }

    let distinct: HashSet<&[EdgeId]> = paths.iter().map(RankedPath::edges).collect();
    assert_eq!(distinct.len(), paths.len(), "路径不应重复");
}
