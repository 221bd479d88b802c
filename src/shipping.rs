//! Shipping methods as interchangeable strategies.
//!
//! Each method is a stateless value implementing [`ShippingMethod`]; an
//! [`Order`] calls whichever one it holds. New methods are added by writing
//! a new implementation, not by editing `Order`.

use chrono::NaiveDate;

use crate::order::Order;

/// Capability contract for a shipping method: given an order, produce a
/// deterministic, non-negative cost and the date it ships.
pub trait ShippingMethod {
    fn cost(&self, order: &Order) -> f64;
    fn ship_date(&self, order: &Order) -> NaiveDate;
    fn name(&self) -> &'static str;
}

/// Ground delivery: free above a 100 order total, otherwise $1.5 per kg
/// with a $10 floor.
pub struct Ground;

impl ShippingMethod for Ground {
    fn cost(&self, order: &Order) -> f64 {
        if order.total() > 100 {
            return 0.0;
        }
        f64::max(10.0, f64::from(order.total_weight()) * 1.5)
    }

    fn ship_date(&self, order: &Order) -> NaiveDate {
        order.shipping_date()
    }

    fn name(&self) -> &'static str {
        "ground"
    }
}

/// Air delivery: $3 per kg with a $20 floor.
pub struct Air;

impl ShippingMethod for Air {
    fn cost(&self, order: &Order) -> f64 {
        f64::max(20.0, f64::from(order.total_weight()) * 3.0)
    }

    fn ship_date(&self, order: &Order) -> NaiveDate {
        order.shipping_date()
    }

    fn name(&self) -> &'static str {
        "air"
    }
}
