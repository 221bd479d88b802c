// Pattern 5: Shipping Cost as a Strategy
// The refactored design: Order delegates cost and date to whichever
// ShippingMethod it holds. Adding a method is a new impl, not an edit to
// Order. See src/order.rs and src/shipping.rs for the implementation.

use oop_design_principles::order::{Item, Order};
use oop_design_principles::shipping::{Air, Ground};

fn main() {
    println!("=== Shipping Cost as a Strategy ===\n");

    let items = vec![
        Item::new("Sturdy Chair", 230, 40),
        Item::new("Amazing Desk", 400, 100),
        Item::new("Bright Lamp", 50, 4),
    ];

    let mut order = Order::new(items, Box::new(Ground));
    assert_eq!(order.total(), 680);
    assert_eq!(order.total_weight(), 144);
    println!(
        "Order total {} with weight {} kg, shipping {}",
        order.total(),
        order.total_weight(),
        order.shipping_name()
    );
    println!("Cost: ${:.2}, ships on {}", order.shipping_cost(), order.ship_date());

    // Swap the strategy; totals and date are untouched.
    order.set_shipping(Box::new(Air));
    assert_eq!(order.shipping_cost(), 432.0);
    println!(
        "Switched to {}: ${:.2}, still ships on {}",
        order.shipping_name(),
        order.shipping_cost(),
        order.ship_date()
    );

    println!("\nAll example values check out.");
}

// ============================================================================
// Tests
// ============================================================================
