//! 配方需求彙總與可生產上限計算

use mrp_core::Requirement;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 彙總後的約束性需求（同一物料的正用量合計）
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedRequirement<'a> {
    /// 物料ID
    pub material_id: &'a str,
    /// 單位用量合計（必定大於 0）
    pub required_qty: Decimal,
}

/// 可生產上限計算器
pub struct BoundingCalculator;

impl BoundingCalculator {
    /// 彙總約束性需求
    ///
    /// 用量 ≤ 0 的需求被略過；同一物料出現多次時用量相加，
    /// 依物料首次出現的順序輸出。
    pub fn aggregate(requirements: &[Requirement]) -> Vec<AggregatedRequirement<'_>> {
        let mut aggregated: Vec<AggregatedRequirement<'_>> = Vec::with_capacity(requirements.len());

        for requirement in requirements.iter().filter(|r| r.is_constraining()) {
            match aggregated
                .iter_mut()
                .find(|a| a.material_id == requirement.material_id)
            {
                Some(existing) => {
                    existing.required_qty = existing.required_qty.saturating_add(requirement.required_qty)
                }
                None => aggregated.push(AggregatedRequirement {
                    material_id: &requirement.material_id,
                    required_qty: requirement.required_qty,
                }),
            }
        }

        aggregated
    }

    /// 單一物料可支援的整數單位數
    ///
    /// 無條件捨去，保證 `units × required_qty ≤ available`。
    /// 用量 ≤ 0 時不構成約束，回傳 `None`。
    pub fn units_supported(available: Decimal, required_qty: Decimal) -> Option<u64> {
        if required_qty <= Decimal::ZERO {
            return None;
        }
        if available <= Decimal::ZERO {
            return Some(0);
        }

        // 商超出 Decimal 範圍
        let Some(quotient) = available.checked_div(required_qty) else {
            return Some(u64::MAX);
        };

        let mut units = quotient.floor();
        // 商在 28 位有效數字下可能被進位成整數，回頭校正
        let overshoots = units
            .checked_mul(required_qty)
            .map_or(true, |consumed| consumed > available);
        if overshoots && units > Decimal::ZERO {
            units -= Decimal::ONE;
        }

        Some(units.to_u64().unwrap_or(u64::MAX))
    }

    /// 產品可生產數量：所有約束性需求上限的最小值
    ///
    /// 沒有任何約束性需求時為 0（保守策略，不視為無限量）。
    pub fn producible_units<F>(requirements: &[AggregatedRequirement<'_>], available: F) -> u64
    where
        F: Fn(&str) -> Decimal,
    {
        requirements
            .iter()
            .filter_map(|r| Self::units_supported(available(r.material_id), r.required_qty))
            .min()
            .unwrap_or(0)
    }

    /// 第一個上限為 0 的物料（造成產品無法生產的原因）
    pub fn limiting_material<'a, F>(
        requirements: &[AggregatedRequirement<'a>],
        available: F,
    ) -> Option<&'a str>
    where
        F: Fn(&str) -> Decimal,
    {
        requirements
            .iter()
            .find(|r| Self::units_supported(available(r.material_id), r.required_qty) == Some(0))
            .map(|r| r.material_id)
    }
}
