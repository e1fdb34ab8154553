//! # MRP
//!
//! 生產建議：依現有原物料庫存與產品配方，計算目前可生產的產品與數量。
//!
//! ```
//! use mrp::{Allocator, MaterialSnapshot, ProductCandidate};
//! use rust_decimal::Decimal;
//!
//! let snapshot = MaterialSnapshot::new().with_stock("RM1".to_string(), Decimal::from(10));
//! let products = vec![
//!     ProductCandidate::new("PA".to_string(), Decimal::from(200))
//!         .with_requirement("RM1".to_string(), Decimal::from(5)),
//! ];
//!
//! let suggestion = Allocator::new().suggest(&snapshot, &products);
//! assert_eq!(suggestion.quantity_of("PA"), 2);
//! assert_eq!(suggestion.total_value, Decimal::from(400));
//! ```

pub use mrp_calc::{
    Allocation, Allocator, Decision, SuggestionReport, SuggestionService, SuggestionWarning,
    WarningSeverity,
};
pub use mrp_core::{
    InMemoryMaterialStore, InMemoryRecipeCatalog, Material, MaterialSnapshot, MaterialStore,
    MrpError, ProductCandidate, RecipeCatalog, Requirement, Result, Suggestion, SuggestionConfig,
    SuggestionLine,
};
