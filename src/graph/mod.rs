//! 图存储模块
//!
//! 提供基于数组的有向图、反向视图、路径工具和图文档加载

pub mod digraph;
pub mod loader;
pub mod path;
pub mod reversed;
pub mod traits;
pub mod types;

pub use digraph::DiGraph;
pub use loader::{EdgeDocument, GraphDocument, NamedGraph};
pub use reversed::Reversed;
pub use traits::DirectedGraph;
pub use types::{EdgeId, EdgeRecord, VertexId};
