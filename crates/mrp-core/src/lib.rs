//! # MRP Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod material;
pub mod recipe;
pub mod source;
pub mod suggestion;

// Re-export 主要類型
pub use config::SuggestionConfig;
pub use material::{Material, MaterialSnapshot};
pub use recipe::{ProductCandidate, Requirement};
pub use source::{InMemoryMaterialStore, InMemoryRecipeCatalog, MaterialStore, RecipeCatalog};
pub use suggestion::{Suggestion, SuggestionLine};

/// MRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("物料代碼重複: {0}")]
    DuplicateMaterial(String),

    #[error("找不到物料: {0}")]
    MaterialNotFound(String),

    #[error("無效的數量: {0}")]
    InvalidQuantity(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("資料來源錯誤: {0}")]
    Source(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MrpError>;
