//! # MRP Calculation Engine
//!
//! 生產建議計算引擎

pub mod allocator;
pub mod bounding;
pub mod service;

// Re-export 主要類型
pub use allocator::{Allocation, Allocator, Decision};
pub use bounding::{AggregatedRequirement, BoundingCalculator};
pub use service::SuggestionService;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生產建議計算報告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// 計算批次ID
    pub run_id: Uuid,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    /// 生產建議
    pub suggestion: mrp_core::Suggestion,

    /// 警告信息
    pub warnings: Vec<SuggestionWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SuggestionReport {
    /// 創建空的計算報告
    pub fn empty() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            suggestion: mrp_core::Suggestion::empty(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SuggestionWarning) {
        self.warnings.push(warning);
    }

    /// 取得指定對象（物料或產品）的警告
    pub fn warnings_for<'a>(&'a self, subject_id: &'a str) -> impl Iterator<Item = &'a SuggestionWarning> {
        self.warnings.iter().filter(move |w| w.subject_id == subject_id)
    }
}

/// 生產建議警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionWarning {
    /// 物料ID 或產品ID
    pub subject_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SuggestionWarning {
    pub fn new(subject_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject_id,
            message,
            severity,
        }
    }

    pub fn info(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Info)
    }

    pub fn warning(subject_id: String, message: String) -> Self {
        Self::new(subject_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
