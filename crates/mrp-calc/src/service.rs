//! 生產建議服務（讀取當前狀態 → 計算建議）

use mrp_core::{MaterialSnapshot, MaterialStore, RecipeCatalog, SuggestionConfig};

use crate::allocator::{Allocator, Decision};
use crate::{SuggestionReport, SuggestionWarning};

/// 生產建議服務
pub struct SuggestionService<M, R> {
    /// 物料庫存來源
    materials: M,

    /// 產品配方來源
    catalog: R,

    /// 計算參數
    config: SuggestionConfig,

    allocator: Allocator,
}

impl<M: MaterialStore, R: RecipeCatalog> SuggestionService<M, R> {
    /// 創建新的服務（使用預設配置）
    pub fn new(materials: M, catalog: R) -> Self {
        Self {
            materials,
            catalog,
            config: SuggestionConfig::default(),
            allocator: Allocator::new(),
        }
    }

    /// 建構器模式：設置計算參數
    pub fn with_config(mut self, config: SuggestionConfig) -> Self {
        self.config = config;
        self
    }

    /// 獲取計算參數
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// 依當前庫存與配方計算生產建議
    ///
    /// 每次呼叫都重新讀取兩個來源，建立獨立的快照；建議僅供參考，不會保留庫存。
    pub fn suggest_current(&self) -> mrp_core::Result<SuggestionReport> {
        self.config.validate()?;

        let start_time = std::time::Instant::now();

        // Step 1: 讀取快照
        let materials = self.materials.list_materials()?;
        let mut products = self.catalog.list_products_by_value_desc()?;

        tracing::info!(
            "開始計算生產建議：物料 {} 筆，產品 {} 筆",
            materials.len(),
            products.len()
        );

        let mut report = SuggestionReport::empty();

        // Step 2: 正規化庫存與用量
        let mut snapshot = MaterialSnapshot::from_materials(&materials)?;
        for material_id in snapshot.normalize(&self.config) {
            tracing::warn!("物料 {} 庫存為負，視為 0", material_id);
            report.add_warning(SuggestionWarning::warning(
                material_id,
                "庫存為負，已視為 0".to_string(),
            ));
        }

        for product in &mut products {
            product.normalize(self.config.quantity_scale);
        }

        // Step 3: 檢查配方資料
        for product in &products {
            if product.has_duplicate_materials() {
                report.add_warning(SuggestionWarning::warning(
                    product.product_id.clone(),
                    "配方重複引用同一物料，用量已合併".to_string(),
                ));
            }
            for requirement in &product.requirements {
                if !snapshot.contains(&requirement.material_id) {
                    report.add_warning(SuggestionWarning::warning(
                        product.product_id.clone(),
                        format!("物料 {} 不在庫存快照中，視為庫存 0", requirement.material_id),
                    ));
                }
            }
        }

        // Step 4: 分配
        let allocation = self.allocator.allocate(&snapshot, &products);

        for (product_id, decision) in allocation.decisions {
            match decision {
                Decision::Allocated { .. } => {}
                Decision::NoRequirements => report.add_warning(SuggestionWarning::info(
                    product_id,
                    "產品沒有配方，不列入建議".to_string(),
                )),
                Decision::Unconstrained => report.add_warning(SuggestionWarning::warning(
                    product_id,
                    "配方用量皆 ≤ 0，產量視為 0".to_string(),
                )),
                Decision::InsufficientStock { limiting_material } => {
                    report.add_warning(SuggestionWarning::info(
                        product_id,
                        format!("物料 {} 庫存不足", limiting_material),
                    ))
                }
            }
        }

        report.suggestion = allocation.suggestion;
        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "建議產品數量: {}，總價值: {}",
            report.suggestion.len(),
            report.suggestion.total_value
        );

        Ok(report)
    }
}
