pub mod cancel;
pub mod error;

// 错误和结果类型
pub use error::{
    AlgorithmError, AlgorithmResult, GraphError, GraphResult, StorageError, StorageResult,
};

pub use cancel::CancelToken;
