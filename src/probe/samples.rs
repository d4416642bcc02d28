//! Sample product payloads used by the workflow scenarios.
//!
//! Flat string-to-string maps as the recipe endpoints expect them.
//! Monetary fields are integer cents, weight is in 10g/100g units,
//! categories and tags are comma-separated lists.

use serde_json::{json, Value};

/// Primary sample: a gaming laptop with the full product attribute set.
pub fn gaming_laptop() -> Value {
    json!({
        "id": "prod_laptop_gaming_001",
        "sku": "MSI-GP66-RTX3070-001",
        "name": "MSI GP66 Leopard Gaming Laptop - RTX 3070, Intel i7-11800H, 16GB RAM, 1TB SSD",
        "description": "Experience next-level gaming performance with the MSI GP66 Leopard. Featuring the latest NVIDIA GeForce RTX 3070 graphics card and Intel Core i7-11800H processor, this laptop delivers exceptional frame rates and smooth gameplay.",
        "short_description": "High-performance gaming laptop with RTX 3070 and i7 processor",
        "price": "189999",
        "original_price": "219999",
        "cost_price": "145000",
        "currency": "USD",
        "brand": "MSI",
        "categories": "Electronics,Computers,Laptops,Gaming Laptops",
        "tags": "gaming,laptop,rtx,nvidia,intel,high-performance,144hz,rgb",
        "weight": "240",
        "inventory_quantity": "45",
        "status": "active",
        "visibility": "public"
    })
}

/// Second sample: a flagship smartphone, used to confirm the recipes
/// handle more than one product.
pub fn flagship_phone() -> Value {
    json!({
        "id": "prod_smartphone_flagship_002",
        "sku": "AAPL-IPHONE15-PRO-256",
        "name": "Apple iPhone 15 Pro - 256GB, Natural Titanium",
        "description": "The most advanced iPhone yet, featuring the powerful A17 Pro chip and pro camera system. Built with aerospace-grade titanium for incredible durability and a premium feel.",
        "short_description": "Premium flagship smartphone with A17 Pro chip and pro camera system",
        "price": "119999",
        "original_price": "119999",
        "cost_price": "85000",
        "currency": "USD",
        "brand": "Apple",
        "categories": "Electronics,Mobile Phones,Smartphones,Premium Phones",
        "tags": "iphone,apple,smartphone,premium,titanium,pro,camera,5g",
        "weight": "19",
        "inventory_quantity": "128",
        "status": "active",
        "visibility": "public"
    })
}

/// The product id a payload carries, empty when absent.
pub fn product_id(payload: &Value) -> &str {
    payload.get("id").and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_carry_required_fields() {
        for payload in [gaming_laptop(), flagship_phone()] {
            for key in ["id", "sku", "name", "price", "brand", "currency"] {
                let field = payload.get(key).and_then(Value::as_str);
                assert!(field.is_some_and(|s| !s.is_empty()), "missing {}", key);
            }
        }
    }

    #[test]
    fn test_product_ids_differ() {
        assert_ne!(
            product_id(&gaming_laptop()),
            product_id(&flagship_phone())
        );
    }
}
