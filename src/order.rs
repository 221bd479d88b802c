//! Orders and their line items.
//!
//! [`Order`] knows how to aggregate its items but delegates every shipping
//! decision to the [`ShippingMethod`] it was given. Adding a new shipping
//! method never touches this module.

use chrono::{Local, NaiveDate};

use crate::shipping::ShippingMethod;

/// A purchasable unit within an [`Order`].
///
/// Price and weight are unsigned, so negative values are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: u32,
    weight: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32, weight: u32) -> Self {
        Item {
            name: name.into(),
            price,
            weight,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// An order: a fixed list of line items plus the shipping method that will
/// carry it.
///
/// Line items and the shipping date are fixed at construction; only the
/// shipping method can be swapped afterwards.
pub struct Order {
    line_items: Vec<Item>,
    shipping: Box<dyn ShippingMethod>,
    shipping_date: NaiveDate,
}

impl Order {
    /// Builds an order, capturing today's date as the shipping date.
    pub fn new(line_items: Vec<Item>, shipping: Box<dyn ShippingMethod>) -> Self {
        Order {
            line_items,
            shipping,
            shipping_date: Local::now().date_naive(),
        }
    }

    /// Sum of item prices; 0 for an empty order.
    pub fn total(&self) -> u32 {
        self.line_items.iter().map(Item::price).sum()
    }

    /// Sum of item weights; 0 for an empty order.
    pub fn total_weight(&self) -> u32 {
        self.line_items.iter().map(Item::weight).sum()
    }

    /// Delegates the cost computation to the shipping method.
    pub fn shipping_cost(&self) -> f64 {
        self.shipping.cost(self)
    }

    /// Delegates the date computation to the shipping method.
    pub fn ship_date(&self) -> NaiveDate {
        self.shipping.ship_date(self)
    }

    /// Swaps the shipping method. Items and shipping date are unaffected.
    pub fn set_shipping(&mut self, shipping: Box<dyn ShippingMethod>) {
        self.shipping = shipping;
    }

    pub fn line_items(&self) -> &[Item] {
        &self.line_items
    }

    pub fn shipping_date(&self) -> NaiveDate {
        self.shipping_date
    }

    pub fn shipping_name(&self) -> &'static str {
        self.shipping.name()
    }
}
