//! 腳踏車工廠生產建議範例
//!
//! 展示從庫存、配方到生產建議的完整流程

use mrp::{
    InMemoryMaterialStore, InMemoryRecipeCatalog, Material, ProductCandidate, SuggestionConfig,
    SuggestionService,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("===== Bike Factory Production Suggestion =====\n");

    // 步驟 1: 建立原物料庫存
    println!("[1] Load Material Stock");
    let store = create_material_store();
    for material in mrp::MaterialStore::list_materials(&store)? {
        println!("    {}: {}", material.material_id, material.stock_qty);
    }
    println!();

    // 步驟 2: 建立產品配方
    println!("[2] Load Product Recipes");
    let catalog = create_recipe_catalog();
    for product in mrp::RecipeCatalog::list_products_by_value_desc(&catalog)? {
        println!(
            "    {} (value {}): {} materials",
            product.product_id,
            product.unit_value,
            product.requirements.len()
        );
    }
    println!();

    // 步驟 3: 計算生產建議
    println!("[3] Calculate Suggestion");
    let config = SuggestionConfig::new().with_quantity_scale(4);
    let service = SuggestionService::new(&store, &catalog).with_config(config);
    let report = service.suggest_current()?;

    for line in &report.suggestion.lines {
        println!(
            "    {} x {} = {}",
            line.product_id, line.producible_qty, line.line_value
        );
    }
    println!("    Total value: {}\n", report.suggestion.total_value);

    // 步驟 4: 警告
    if !report.warnings.is_empty() {
        println!("[4] Warnings");
        for warning in &report.warnings {
            println!("    [{:?}] {}: {}", warning.severity, warning.subject_id, warning.message);
        }
        println!();
    }

    println!("[5] JSON Document");
    println!("{}", report.suggestion.to_json()?);

    Ok(())
}

fn create_material_store() -> InMemoryMaterialStore {
    InMemoryMaterialStore::new()
        .with_material(Material::new("STEEL-TUBE".to_string(), Decimal::from(120)))
        .with_material(Material::new("WHEEL".to_string(), Decimal::from(40)))
        .with_material(Material::new("CHAIN".to_string(), Decimal::from(15)))
        .with_material(Material::new("SEAT".to_string(), Decimal::from(25)))
        .with_material(Material::new("PAINT".to_string(), Decimal::new(125, 1)))
}

fn create_recipe_catalog() -> InMemoryRecipeCatalog {
    InMemoryRecipeCatalog::new()
        .with_product(
            ProductCandidate::new("BIKE-001".to_string(), Decimal::from(500))
                .with_name("City Bike".to_string())
                .with_requirement("STEEL-TUBE".to_string(), Decimal::from(3))
                .with_requirement("WHEEL".to_string(), Decimal::from(2))
                .with_requirement("CHAIN".to_string(), Decimal::from(1))
                .with_requirement("SEAT".to_string(), Decimal::from(1))
                .with_requirement("PAINT".to_string(), Decimal::new(5, 1)),
        )
        .with_product(
            ProductCandidate::new("SCOOTER-001".to_string(), Decimal::from(150))
                .with_name("Kick Scooter".to_string())
                .with_requirement("STEEL-TUBE".to_string(), Decimal::from(2))
                .with_requirement("WHEEL".to_string(), Decimal::from(2))
                .with_requirement("PAINT".to_string(), Decimal::new(25, 2)),
        )
        .with_product(
            ProductCandidate::new("STOOL-001".to_string(), Decimal::from(40))
                .with_name("Workshop Stool".to_string())
                .with_requirement("STEEL-TUBE".to_string(), Decimal::from(4))
                .with_requirement("SEAT".to_string(), Decimal::from(1)),
        )
}
