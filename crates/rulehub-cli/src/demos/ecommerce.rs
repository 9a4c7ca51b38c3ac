//! E-commerce rule scenarios: discount rules over sample orders.

use serde::Serialize;

use crate::output;

/// A sample order used as rule input.
#[derive(Debug, Serialize)]
struct Order {
    customer_tier: &'static str,
    subtotal: f64,
    items: u32,
    coupon: Option<&'static str>,
}

/// First matching discount rule wins.
fn discount_for(order: &Order) -> (f64, &'static str) {
    if order.coupon == Some("WELCOME10") {
        (0.10, "welcome coupon")
    } else if order.customer_tier == "gold" && order.subtotal >= 100.0 {
        (0.15, "gold tier over 100")
    } else if order.items >= 10 {
        (0.05, "bulk order")
    } else {
        (0.0, "no discount rule matched")
    }
}

/// Apply the discount rules to a few representative orders.
pub fn discount_rules() {
    output::heading("E-commerce: discount rules");

    let orders = [
        Order {
            customer_tier: "gold",
            subtotal: 180.0,
            items: 3,
            coupon: None,
        },
        Order {
            customer_tier: "silver",
            subtotal: 45.0,
            items: 12,
            coupon: None,
        },
        Order {
            customer_tier: "silver",
            subtotal: 30.0,
            items: 1,
            coupon: Some("WELCOME10"),
        },
        Order {
            customer_tier: "bronze",
            subtotal: 20.0,
            items: 1,
            coupon: None,
        },
    ];

    for order in &orders {
        let (rate, reason) = discount_for(order);
        println!(
            "  {} tier, {:>6.2} subtotal, {:>2} items -> {:>3.0}% ({})",
            order.customer_tier,
            order.subtotal,
            order.items,
            rate * 100.0,
            reason
        );
    }
}

/// Render one order the way the rule engine would receive it.
pub fn order_review() {
    output::heading("E-commerce: order document");

    let order = Order {
        customer_tier: "gold",
        subtotal: 180.0,
        items: 3,
        coupon: None,
    };
    let (rate, reason) = discount_for(&order);

    match serde_json::to_string_pretty(&order) {
        Ok(doc) => println!("{}", doc),
        Err(e) => output::print_warning(&format!("could not serialize order: {}", e)),
    }
    output::print_kv("discount", &format!("{:.0}%", rate * 100.0));
    output::print_kv("reason", reason);
    output::print_kv(
        "total",
        &format!("{:.2}", order.subtotal * (1.0 - rate)),
    );
}
