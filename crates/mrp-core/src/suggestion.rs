//! 生產建議結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ProductCandidate, Result};

/// 建議生產明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionLine {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub product_name: Option<String>,

    /// 單位價值
    pub unit_value: Decimal,

    /// 可生產數量（整數單位，必定大於 0）
    pub producible_qty: u64,

    /// 明細價值（單位價值 × 可生產數量）
    pub line_value: Decimal,
}

impl SuggestionLine {
    /// 由候選產品與可生產數量建立明細
    pub fn new(product: &ProductCandidate, producible_qty: u64) -> Self {
        Self {
            product_id: product.product_id.clone(),
            product_name: product.name.clone(),
            unit_value: product.unit_value,
            producible_qty,
            line_value: product
                .unit_value
                .saturating_mul(Decimal::from(producible_qty)),
        }
    }
}

/// 生產建議（依候選產品輸入順序排列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// 可生產產品明細
    pub lines: Vec<SuggestionLine>,

    /// 總生產價值
    pub total_value: Decimal,
}

impl Suggestion {
    /// 創建空的建議
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total_value: Decimal::ZERO,
        }
    }

    /// 添加明細並累加總價值
    pub fn push_line(&mut self, line: SuggestionLine) {
        self.total_value = self.total_value.saturating_add(line.line_value);
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 查詢產品的建議數量，未入選時為 0
    pub fn quantity_of(&self, product_id: &str) -> u64 {
        self.line(product_id).map(|l| l.producible_qty).unwrap_or(0)
    }

    /// 查詢產品明細
    pub fn line(&self, product_id: &str) -> Option<&SuggestionLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// 輸出為 JSON 文件
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
