//! 生產建議分配器的性質測試
//!
//! 以 proptest 產生隨機庫存與配方，驗證分配結果的結構性不變量。

use mrp_calc::Allocator;
use mrp_core::{MaterialSnapshot, ProductCandidate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

const MATERIAL_COUNT: usize = 5;

// ===========================================================================
// Generators
// ===========================================================================

/// 庫存 0 ~ 1000，精度 4 位；最後一個物料 ID 不放入快照（模擬缺少的物料）
fn arb_snapshot() -> impl Strategy<Value = MaterialSnapshot> {
    proptest::collection::vec(0i64..10_000_000, MATERIAL_COUNT - 1).prop_map(|stocks| {
        stocks
            .into_iter()
            .enumerate()
            .map(|(i, raw)| (format!("M{}", i), Decimal::new(raw, 4)))
            .collect()
    })
}

/// 用量 -0.0005 ~ 5，包含 ≤ 0 的非約束性需求
fn arb_requirements() -> impl Strategy<Value = Vec<(usize, i64)>> {
    proptest::collection::vec((0..MATERIAL_COUNT, -5i64..50_000), 0..4)
}

fn arb_products(max: usize) -> impl Strategy<Value = Vec<ProductCandidate>> {
    proptest::collection::vec((1i64..1_000, arb_requirements()), 0..=max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (value, requirements))| {
                requirements.into_iter().fold(
                    ProductCandidate::new(format!("P{}", i), Decimal::from(value)),
                    |p, (material, raw)| p.with_requirement(format!("M{}", material), Decimal::new(raw, 4)),
                )
            })
            .collect()
    })
}

fn product_index(product_id: &str) -> usize {
    product_id[1..].parse().unwrap()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// 任何物料的總消耗都不超過初始庫存
    #[test]
    fn consumption_never_exceeds_stock(snapshot in arb_snapshot(), products in arb_products(8)) {
        let suggestion = Allocator::new().suggest(&snapshot, &products);

        let mut consumed: HashMap<String, Decimal> = HashMap::new();
        for line in &suggestion.lines {
            let product = &products[product_index(&line.product_id)];
            for requirement in product.requirements.iter().filter(|r| r.is_constraining()) {
                *consumed.entry(requirement.material_id.clone()).or_default() +=
                    requirement.required_qty * Decimal::from(line.producible_qty);
            }
        }

        for (material_id, total) in consumed {
            prop_assert!(
                total <= snapshot.stock_of(&material_id),
                "物料 {} 消耗 {} 超過庫存 {}",
                material_id,
                total,
                snapshot.stock_of(&material_id)
            );
        }
    }

    /// 結果依輸入順序排列，且只包含產量 > 0 且有約束性需求的產品
    #[test]
    fn lines_preserve_input_order(snapshot in arb_snapshot(), products in arb_products(8)) {
        let suggestion = Allocator::new().suggest(&snapshot, &products);

        let indices: Vec<usize> = suggestion.lines.iter().map(|l| product_index(&l.product_id)).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        for line in &suggestion.lines {
            prop_assert!(line.producible_qty > 0);
            prop_assert!(products[product_index(&line.product_id)].is_constrained());
        }
    }

    /// 總價值等於各明細價值之和
    #[test]
    fn total_is_sum_of_lines(snapshot in arb_snapshot(), products in arb_products(8)) {
        let suggestion = Allocator::new().suggest(&snapshot, &products);

        let sum: Decimal = suggestion.lines.iter().map(|l| l.line_value).sum();
        prop_assert_eq!(suggestion.total_value, sum);
        for line in &suggestion.lines {
            prop_assert_eq!(line.line_value, line.unit_value * Decimal::from(line.producible_qty));
        }
    }

    /// 相同輸入永遠得到相同結果
    #[test]
    fn allocation_is_deterministic(snapshot in arb_snapshot(), products in arb_products(8)) {
        let allocator = Allocator::new();
        prop_assert_eq!(
            allocator.allocate(&snapshot, &products),
            allocator.allocate(&snapshot, &products)
        );
    }

    /// 後續產品不影響先前產品的產量（不回溯）
    #[test]
    fn later_products_never_change_earlier_allocations(
        snapshot in arb_snapshot(),
        products in arb_products(8),
        cut in 0usize..=8,
    ) {
        let cut = cut.min(products.len());
        let allocator = Allocator::new();

        let full = allocator.suggest(&snapshot, &products);
        let prefix = allocator.suggest(&snapshot, &products[..cut]);

        let full_prefix: Vec<_> = full
            .lines
            .into_iter()
            .filter(|l| product_index(&l.product_id) < cut)
            .collect();
        prop_assert_eq!(full_prefix, prefix.lines);
    }
}
