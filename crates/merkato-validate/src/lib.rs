//! Form validation for product creation and variant entry.
//!
//! Every schema follows the same contract: a plain input struct mirroring the
//! form state, and a `validate()` method returning either the validated,
//! possibly-transformed value or the full set of field-scoped [`Issue`]s.
//! Validation is pure: same input, same outcome, no side effects.
//!
//! Per-field rules live in [`rules`]; cross-field mutual-requirement passes
//! live with their schema and run after the per-field type checks.

pub mod clothing;
pub mod cosmetic;
pub mod issue;
pub mod product_form;
pub mod rules;
pub mod shoes;
pub mod variant;

pub use clothing::{ClothingSize, ClothingSizeForm};
pub use cosmetic::{CosmeticSize, CosmeticSizeForm};
pub use issue::{Issue, Issues};
pub use product_form::{ProductForm, ProductSubmission};
pub use shoes::{ShoeSize, ShoeSizeForm};
pub use variant::{VariantEntry, VariantForm, VariantRow, VariantRowForm};
