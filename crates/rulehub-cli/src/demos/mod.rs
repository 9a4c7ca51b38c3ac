//! Demo group registration.
//!
//! Each submodule contributes the hooks for one demo group. Group order
//! here is the default "run all" order.

pub mod basic;
pub mod datetime;
pub mod ecommerce;
pub mod migration;

use rulehub_core::{Catalog, DemoResult, hook};

/// Build the demo catalog.
pub fn catalog() -> DemoResult<Catalog> {
    Catalog::builder()
        .group(
            "basic",
            vec![
                hook(basic::simple_conditions),
                hook(basic::operator_showcase),
            ],
        )
        .group(
            "ecommerce",
            vec![
                hook(ecommerce::discount_rules),
                hook(ecommerce::order_review),
            ],
        )
        .group(
            "datetime",
            vec![
                hook(datetime::temporal_operators),
                hook(datetime::business_hours),
            ],
        )
        .group(
            "migration",
            vec![
                hook(migration::legacy_comparison),
                hook(migration::timing_baseline),
            ],
        )
        .build()
}
