// Pattern 4: Shipping Cost Before the Refactor
// The cost rules live inside Order, behind a match on a shipping kind tag.
// Every new shipping method means editing Order. The refactored version in
// the order/shipping library modules moves each rule behind a trait instead.

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use thiserror::Error;

// ============================================================================
// Example: Tag-Dispatched Shipping Cost
// ============================================================================

#[derive(Debug, Clone)]
struct Item {
    #[allow(dead_code)]
    name: String,
    price: u32,
    weight: u32,
}

impl Item {
    fn new(name: impl Into<String>, price: u32, weight: u32) -> Self {
        Item {
            name: name.into(),
            price,
            weight,
        }
    }
}

// A closed set of variants, not a free-form string: an unknown kind cannot
// even be constructed, so shipping_cost has no unhandled case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShippingKind {
    Ground,
    Air,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown shipping kind: {0}")]
struct UnknownShippingKind(String);

impl FromStr for ShippingKind {
    type Err = UnknownShippingKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ground" => Ok(ShippingKind::Ground),
            "air" => Ok(ShippingKind::Air),
            _ => Err(UnknownShippingKind(s.to_string())),
        }
    }
}

struct Order {
    line_items: Vec<Item>,
    shipping: ShippingKind,
    shipping_date: NaiveDate,
}

impl Order {
    fn new(line_items: Vec<Item>, shipping: ShippingKind) -> Self {
        Order {
            line_items,
            shipping,
            shipping_date: Local::now().date_naive(),
        }
    }

    fn total(&self) -> u32 {
        self.line_items.iter().map(|item| item.price).sum()
    }

    fn total_weight(&self) -> u32 {
        self.line_items.iter().map(|item| item.weight).sum()
    }

    fn set_shipping(&mut self, shipping: ShippingKind) {
        self.shipping = shipping;
    }

    // The pain point: Order owns every rule, so this match grows with each
    // new shipping method.
    fn shipping_cost(&self) -> f64 {
        match self.shipping {
            ShippingKind::Ground => {
                // Large orders ship free
                if self.total() > 100 {
                    return 0.0;
                }
                // $1.5 per kg with a $10 floor
                f64::max(10.0, f64::from(self.total_weight()) * 1.5)
            }
            // $3 per kg with a $20 floor
            ShippingKind::Air => f64::max(20.0, f64::from(self.total_weight()) * 3.0),
        }
    }
}

fn main() {
    println!("=== Shipping Cost, Pre-Refactor ===\n");

    let items = vec![
        Item::new("Sturdy Chair", 230, 40),
        Item::new("Amazing Desk", 400, 100),
        Item::new("Bright Lamp", 50, 4),
    ];

    let mut order = Order::new(items, ShippingKind::Ground);
    assert_eq!(order.total(), 680);
    assert_eq!(order.total_weight(), 144);
    assert_eq!(order.shipping_cost(), 0.0);
    println!("Ground shipping on a 680 order: free");

    order.set_shipping(ShippingKind::Air);
    assert_eq!(order.shipping_cost(), 432.0);
    println!("Air shipping for 144 kg: $432");

    let kind: ShippingKind = "ground".parse().expect("known shipping tag");
    println!("Parsed legacy tag into {:?}", kind);
    println!("Ships on {}", order.shipping_date);

    println!("\nAll example values check out.");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("Sturdy Chair", 230, 40),
            Item::new("Amazing Desk", 400, 100),
            Item::new("Bright Lamp", 50, 4),
        ]
    }

    #[test]
    fn ground_is_free_above_the_threshold() {
        let order = Order::new(sample_items(), ShippingKind::Ground);
        assert_eq!(order.shipping_cost(), 0.0);
    }

    #[test]
    fn ground_floors_small_orders() {
        let order = Order::new(
            vec![Item::new("Bright Lamp", 50, 4)],
            ShippingKind::Ground,
        );
        assert_eq!(order.shipping_cost(), 10.0);
    }

    #[test]
    fn air_charges_per_kg_with_floor() {
        let mut order = Order::new(sample_items(), ShippingKind::Air);
        assert_eq!(order.shipping_cost(), 432.0);

        order = Order::new(vec![Item::new("Feather", 5, 1)], ShippingKind::Air);
        assert_eq!(order.shipping_cost(), 20.0);
    }

    #[test]
    fn setter_switches_the_kind() {
        let mut order = Order::new(sample_items(), ShippingKind::Ground);
        order.set_shipping(ShippingKind::Air);
        assert_eq!(order.shipping, ShippingKind::Air);
        assert_eq!(order.total(), 680);
    }

    #[test]
    fn legacy_tags_parse() {
        assert_eq!("ground".parse::<ShippingKind>(), Ok(ShippingKind::Ground));
        assert_eq!("Air".parse::<ShippingKind>(), Ok(ShippingKind::Air));
        assert!("drone".parse::<ShippingKind>().is_err());
    }
}
