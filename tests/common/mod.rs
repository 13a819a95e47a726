//! Common fixtures for integration tests

use memselect::storage::{Database, Row};

/// Install a test logger once; `RUST_LOG=debug` shows executor logs
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sets up a small shop database:
/// - `customers(id, name, city)`, 3 rows
/// - `orders(order_id, customer_id, amount)`, 5 rows
#[allow(dead_code)]
pub fn setup_shop() -> Database {
    let mut db = Database::new();
    db.create_table("customers", ["id", "name", "city"]).unwrap();
    db.create_table("orders", ["order_id", "customer_id", "amount"]).unwrap();

    for (id, name, city) in [(1, "Alice", "Paris"), (2, "Bob", "Oslo"), (3, "Carol", "Paris")] {
        db.insert_row("customers", Row::new().with("id", id).with("name", name).with("city", city))
            .unwrap();
    }

    for (order_id, customer_id, amount) in
        [(10, 1, 120), (11, 2, 40), (12, 1, 30), (13, 3, 75), (14, 2, 15)]
    {
        db.insert_row(
            "orders",
            Row::new()
                .with("order_id", order_id)
                .with("customer_id", customer_id)
                .with("amount", amount),
        )
        .unwrap();
    }

    db
}
