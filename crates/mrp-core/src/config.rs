//! 生產建議配置

use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// 預設數量精度（小數位數）
pub const DEFAULT_QUANTITY_SCALE: u32 = 4;

/// `rust_decimal` 支援的最大小數位數
pub const MAX_QUANTITY_SCALE: u32 = 28;

/// 生產建議計算參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// 數量精度（小數位數）
    ///
    /// - 庫存：向零截斷到此精度
    /// - 單位用量：遠離零進位到此精度
    ///
    /// 兩者皆只會讓可生產數量變少，不會高估。
    pub quantity_scale: u32,

    /// 是否將負庫存視為 0
    /// - true: 快照中的負庫存在計算前歸零（預設）
    /// - false: 信任上游資料，負庫存原樣帶入（計算結果仍為 0 單位）
    pub clamp_negative_stock: bool,
}

impl SuggestionConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            quantity_scale: DEFAULT_QUANTITY_SCALE,
            clamp_negative_stock: true,
        }
    }

    /// 建構器模式：設置數量精度
    pub fn with_quantity_scale(mut self, scale: u32) -> Self {
        self.quantity_scale = scale;
        self
    }

    /// 建構器模式：設置是否將負庫存歸零
    ///
    /// # 範例
    /// ```
    /// # use mrp_core::SuggestionConfig;
    /// let config = SuggestionConfig::new().with_clamp_negative_stock(false); // 信任上游庫存
    /// assert!(!config.clamp_negative_stock);
    /// ```
    pub fn with_clamp_negative_stock(mut self, clamp: bool) -> Self {
        self.clamp_negative_stock = clamp;
        self
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.quantity_scale > MAX_QUANTITY_SCALE {
            return Err(MrpError::InvalidConfig(format!(
                "quantity_scale 必須介於 0 到 {}，實際為 {}",
                MAX_QUANTITY_SCALE, self.quantity_scale
            )));
        }
        Ok(())
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self::new()
    }
}
