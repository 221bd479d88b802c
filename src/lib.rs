//! # Object-Oriented Design Principles in Rust
//!
//! This crate demonstrates classic OOP design principles translated into
//! Rust's trait and ownership vocabulary:
//!
//! ## Pattern 1: Interface Segregation
//! - Narrow capability traits instead of one fat interface
//! - A type opts into exactly the capabilities it provides
//!
//! ## Pattern 2: Composition over Inheritance
//! - A transport composed of an engine and a driver
//! - Factory enum for building engine variants
//!
//! ## Pattern 3: Object Relations as Ownership
//! - Dependency, association, aggregation, and composition
//! - Inheritance re-expressed as an embedded struct plus traits
//!
//! ## Pattern 4/5: Strategy Pattern Refactor
//! - Before: shipping cost rules matched inside `Order`
//! - After: cost/date computation delegated to interchangeable
//!   [`shipping::ShippingMethod`] implementations
//!
//! The refactored order/shipping core lives in the library modules so the
//! demos and tests drive a single implementation.
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_interface_segregation
//! cargo run --bin p2_composition
//! cargo run --bin p3_relations
//! cargo run --bin p4_order_before
//! cargo run --bin p5_order_strategy
//! ```

pub mod order;
pub mod shipping;
