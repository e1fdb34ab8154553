//! 外部資料來源介面（物料庫存、產品配方）

use rust_decimal::Decimal;

use crate::{Material, MrpError, ProductCandidate, Result};

/// 物料庫存來源
pub trait MaterialStore {
    /// 列出所有物料及其現有庫存
    fn list_materials(&self) -> Result<Vec<Material>>;
}

/// 產品配方來源
pub trait RecipeCatalog {
    /// 列出所有產品及其配方，依單位價值由高到低排序
    ///
    /// 價值相同時的順序由實作決定，但必須穩定。
    fn list_products_by_value_desc(&self) -> Result<Vec<ProductCandidate>>;
}

impl<T: MaterialStore + ?Sized> MaterialStore for &T {
    fn list_materials(&self) -> Result<Vec<Material>> {
        (**self).list_materials()
    }
}

impl<T: RecipeCatalog + ?Sized> RecipeCatalog for &T {
    fn list_products_by_value_desc(&self) -> Result<Vec<ProductCandidate>> {
        (**self).list_products_by_value_desc()
    }
}

/// 記憶體內物料庫存
#[derive(Debug, Clone, Default)]
pub struct InMemoryMaterialStore {
    materials: Vec<Material>,
}

impl InMemoryMaterialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加物料
    pub fn with_material(mut self, material: Material) -> Self {
        self.add_material(material);
        self
    }

    /// 添加物料，ID 已存在時覆蓋
    pub fn add_material(&mut self, material: Material) {
        match self
            .materials
            .iter_mut()
            .find(|m| m.material_id == material.material_id)
        {
            Some(existing) => *existing = material,
            None => self.materials.push(material),
        }
    }

    /// 更新物料庫存
    pub fn set_stock(&mut self, material_id: &str, stock_qty: Decimal) -> Result<()> {
        let material = self
            .materials
            .iter_mut()
            .find(|m| m.material_id == material_id)
            .ok_or_else(|| MrpError::MaterialNotFound(material_id.to_string()))?;
        material.stock_qty = stock_qty;
        Ok(())
    }
}

impl MaterialStore for InMemoryMaterialStore {
    fn list_materials(&self) -> Result<Vec<Material>> {
        Ok(self.materials.clone())
    }
}

/// 記憶體內產品配方目錄
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeCatalog {
    products: Vec<ProductCandidate>,
}

impl InMemoryRecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加產品
    pub fn with_product(mut self, product: ProductCandidate) -> Self {
        self.add_product(product);
        self
    }

    /// 添加產品，ID 已存在時覆蓋
    pub fn add_product(&mut self, product: ProductCandidate) {
        match self
            .products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
        {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
    }
}

impl RecipeCatalog for InMemoryRecipeCatalog {
    /// 價值相同時依產品ID 升冪排列
    fn list_products_by_value_desc(&self) -> Result<Vec<ProductCandidate>> {
        let mut products = self.products.clone();
        products.sort_by(|a, b| {
            b.unit_value
                .cmp(&a.unit_value)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_orders_by_value_desc() {
        let catalog = InMemoryRecipeCatalog::new()
            .with_product(ProductCandidate::new("PC".to_string(), Decimal::from(50)))
            .with_product(ProductCandidate::new("PA".to_string(), Decimal::from(200)))
            .with_product(ProductCandidate::new("PB".to_string(), Decimal::from(100)));

        let products = catalog.list_products_by_value_desc().unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.product_id.as_str()).collect();

        assert_eq!(ids, vec!["PA", "PB", "PC"]);
    }

    #[test]
    fn test_catalog_breaks_ties_by_product_id() {
        let catalog = InMemoryRecipeCatalog::new()
            .with_product(ProductCandidate::new("PZ".to_string(), Decimal::from(100)))
            .with_product(ProductCandidate::new("PB".to_string(), Decimal::new(1000, 1)))
            .with_product(ProductCandidate::new("PM".to_string(), Decimal::from(100)));

        let products = catalog.list_products_by_value_desc().unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.product_id.as_str()).collect();

        // 100 與 100.0 數值相等，依 ID 排序
        assert_eq!(ids, vec!["PB", "PM", "PZ"]);
    }

    #[test]
    fn test_store_set_stock() {
        let mut store = InMemoryMaterialStore::new()
            .with_material(Material::new("RM1".to_string(), Decimal::from(10)));

        store.set_stock("RM1", Decimal::from(4)).unwrap();
        assert_eq!(store.list_materials().unwrap()[0].stock_qty, Decimal::from(4));

        let result = store.set_stock("RM9", Decimal::from(1));
        assert!(matches!(result, Err(MrpError::MaterialNotFound(_))));
    }

    #[test]
    fn test_store_add_material_overwrites() {
        let store = InMemoryMaterialStore::new()
            .with_material(Material::new("RM1".to_string(), Decimal::from(10)))
            .with_material(Material::new("RM1".to_string(), Decimal::from(3)));

        let materials = store.list_materials().unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].stock_qty, Decimal::from(3));
    }
}
