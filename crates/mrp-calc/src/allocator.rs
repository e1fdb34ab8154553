//! 生產建議分配器
//!
//! 貪婪、單次掃描：依呼叫端給定的順序（單位價值由高到低）逐一決定產量，
//! 已決定的產量不會被後續產品改變。

use mrp_core::{MaterialSnapshot, ProductCandidate, Suggestion, SuggestionLine};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::bounding::BoundingCalculator;

/// 單一產品的分配決策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// 已分配產量
    Allocated { units: u64 },
    /// 沒有任何配方需求
    NoRequirements,
    /// 有配方但所有用量 ≤ 0
    Unconstrained,
    /// 庫存不足（第一個上限為 0 的物料）
    InsufficientStock { limiting_material: String },
}

/// 分配結果（建議 + 每個產品的決策）
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub suggestion: Suggestion,
    /// (產品ID, 決策)，與輸入順序一致
    pub decisions: Vec<(String, Decision)>,
}

/// 生產建議分配器
///
/// 無狀態；每次呼叫使用獨立的庫存工作副本，可安全地並行呼叫。
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator;

impl Allocator {
    pub fn new() -> Self {
        Self
    }

    /// 計算生產建議
    pub fn suggest(&self, snapshot: &MaterialSnapshot, products: &[ProductCandidate]) -> Suggestion {
        self.allocate(snapshot, products).suggestion
    }

    /// 計算生產建議並保留每個產品的決策
    pub fn allocate(&self, snapshot: &MaterialSnapshot, products: &[ProductCandidate]) -> Allocation {
        let mut available: HashMap<&str, Decimal> = snapshot.iter().collect();
        let mut suggestion = Suggestion::empty();
        let mut decisions = Vec::with_capacity(products.len());

        for product in products {
            let decision = Self::allocate_product(product, &mut available);

            match &decision {
                Decision::Allocated { units } => {
                    tracing::debug!("產品 {} 建議生產 {} 單位", product.product_id, units);
                    suggestion.push_line(SuggestionLine::new(product, *units));
                }
                Decision::NoRequirements => {
                    tracing::debug!("產品 {} 沒有配方，跳過", product.product_id);
                }
                Decision::Unconstrained => {
                    tracing::debug!("產品 {} 沒有約束性需求，產量視為 0", product.product_id);
                }
                Decision::InsufficientStock { limiting_material } => {
                    tracing::debug!(
                        "產品 {} 庫存不足（物料 {}），跳過",
                        product.product_id,
                        limiting_material
                    );
                }
            }

            decisions.push((product.product_id.clone(), decision));
        }

        Allocation {
            suggestion,
            decisions,
        }
    }

    /// 決定單一產品產量並扣減工作庫存
    fn allocate_product<'a>(
        product: &'a ProductCandidate,
        available: &mut HashMap<&'a str, Decimal>,
    ) -> Decision {
        if !product.has_requirements() {
            return Decision::NoRequirements;
        }

        let requirements = BoundingCalculator::aggregate(&product.requirements);
        if requirements.is_empty() {
            return Decision::Unconstrained;
        }

        let stock_of = |id: &str| available.get(id).copied().unwrap_or(Decimal::ZERO);
        let units = BoundingCalculator::producible_units(&requirements, stock_of);

        if units == 0 {
            let limiting_material = BoundingCalculator::limiting_material(&requirements, stock_of)
                .unwrap_or_default()
                .to_string();
            return Decision::InsufficientStock { limiting_material };
        }

        // 扣減庫存（用量 ≤ 0 的需求已在彙總時排除，不消耗庫存）
        let units_qty = Decimal::from(units);
        for requirement in &requirements {
            let consumed = requirement.required_qty.saturating_mul(units_qty);
            let entry = available.entry(requirement.material_id).or_insert(Decimal::ZERO);
            *entry -= consumed;
        }

        Decision::Allocated { units }
    }
}
