//! 原物料與庫存快照

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{MrpError, Result, SuggestionConfig};

/// 原物料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// 物料ID（唯一）
    pub material_id: String,

    /// 物料名稱
    pub name: Option<String>,

    /// 現有庫存
    pub stock_qty: Decimal,
}

impl Material {
    /// 創建新的物料
    pub fn new(material_id: String, stock_qty: Decimal) -> Self {
        Self {
            material_id,
            name: None,
            stock_qty,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// 檢查是否有可用庫存
    pub fn has_stock(&self) -> bool {
        self.stock_qty > Decimal::ZERO
    }
}

/// 庫存快照（物料ID → 庫存量）
///
/// 快照中不存在的物料一律視為庫存 0。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialSnapshot {
    stock: HashMap<String, Decimal>,
}

impl MaterialSnapshot {
    /// 創建空的快照
    pub fn new() -> Self {
        Self::default()
    }

    /// 由物料清單建立快照，物料ID 重複時回傳錯誤
    pub fn from_materials(materials: &[Material]) -> Result<Self> {
        let mut stock = HashMap::with_capacity(materials.len());
        for material in materials {
            if stock
                .insert(material.material_id.clone(), material.stock_qty)
                .is_some()
            {
                return Err(MrpError::DuplicateMaterial(material.material_id.clone()));
            }
        }
        Ok(Self { stock })
    }

    /// 建構器模式：設置單一物料庫存
    pub fn with_stock(mut self, material_id: String, stock_qty: Decimal) -> Self {
        self.stock.insert(material_id, stock_qty);
        self
    }

    /// 設置物料庫存，回傳原有庫存
    pub fn insert(&mut self, material_id: String, stock_qty: Decimal) -> Option<Decimal> {
        self.stock.insert(material_id, stock_qty)
    }

    /// 查詢庫存，不存在時為 0
    pub fn stock_of(&self, material_id: &str) -> Decimal {
        self.stock.get(material_id).copied().unwrap_or(Decimal::ZERO)
    }

    /// 快照中是否有此物料
    pub fn contains(&self, material_id: &str) -> bool {
        self.stock.contains_key(material_id)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// 迭代所有 (物料ID, 庫存)，順序不固定
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.stock.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// 依配置正規化庫存
    ///
    /// 回傳被歸零的負庫存物料ID（已排序）。
    pub fn normalize(&mut self, config: &SuggestionConfig) -> Vec<String> {
        let mut clamped = Vec::new();

        for (material_id, qty) in self.stock.iter_mut() {
            if config.clamp_negative_stock && *qty < Decimal::ZERO {
                *qty = Decimal::ZERO;
                clamped.push(material_id.clone());
                continue;
            }
            *qty = qty.round_dp_with_strategy(config.quantity_scale, RoundingStrategy::ToZero);
        }

        clamped.sort();
        clamped
    }
}

impl FromIterator<(String, Decimal)> for MaterialSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            stock: iter.into_iter().collect(),
        }
    }
}
