//! 產品配方模型

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 配方需求（每單位產品的物料用量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// 物料ID
    pub material_id: String,

    /// 單位用量
    pub required_qty: Decimal,
}

impl Requirement {
    /// 創建新的配方需求
    pub fn new(material_id: String, required_qty: Decimal) -> Self {
        Self {
            material_id,
            required_qty,
        }
    }

    /// 是否構成約束（用量大於 0）
    ///
    /// 用量 ≤ 0 的需求不限制產量，也不消耗庫存。
    pub fn is_constraining(&self) -> bool {
        self.required_qty > Decimal::ZERO
    }
}

/// 候選產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCandidate {
    /// 產品ID
    pub product_id: String,

    /// 產品名稱
    pub name: Option<String>,

    /// 單位價值
    pub unit_value: Decimal,

    /// 配方需求（依錄入順序）
    pub requirements: Vec<Requirement>,
}

impl ProductCandidate {
    /// 創建新的候選產品（尚無配方）
    pub fn new(product_id: String, unit_value: Decimal) -> Self {
        Self {
            product_id,
            name: None,
            unit_value,
            requirements: Vec::new(),
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// 建構器模式：添加配方需求
    pub fn with_requirement(mut self, material_id: String, required_qty: Decimal) -> Self {
        self.add_requirement(Requirement::new(material_id, required_qty));
        self
    }

    /// 添加配方需求
    pub fn add_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// 是否至少有一項約束性需求
    pub fn is_constrained(&self) -> bool {
        self.requirements.iter().any(Requirement::is_constraining)
    }

    /// 是否在配方中重複引用同一物料
    pub fn has_duplicate_materials(&self) -> bool {
        self.requirements.iter().enumerate().any(|(i, req)| {
            self.requirements[..i]
                .iter()
                .any(|prev| prev.material_id == req.material_id)
        })
    }

    /// 將單位用量進位到指定精度（遠離零）
    pub fn normalize(&mut self, scale: u32) {
        for requirement in &mut self.requirements {
            requirement.required_qty = requirement
                .required_qty
                .round_dp_with_strategy(scale, RoundingStrategy::AwayFromZero);
        }
    }
}
