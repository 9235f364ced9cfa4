//! Built-in fallback catalog
//!
//! Used whenever the external provider is unreachable or unconfigured so the
//! conversation never dead-ends. Keys are matched by case-insensitive
//! substring against the query; an unmatched query still yields one
//! synthesized placeholder gift.

use santa_agent_core::Product;

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/300x300?text=";

/// Return fallback products for a query.
///
/// Entries come back in a fixed order, which the tests rely on.
pub fn fallback_products(query: &str) -> Vec<Product> {
    let query_lower = query.to_lowercase();

    if query_lower.contains("lego") {
        return lego_products();
    }
    if query_lower.contains("doll") {
        return doll_products();
    }

    vec![Product {
        title: format!("Wonderful {}", title_case(query)),
        price: "$49.99".to_string(),
        image: format!("{}Gift", PLACEHOLDER_IMAGE_BASE),
        url: "#".to_string(),
        description: format!("A perfect {} for Christmas!", query),
        rating: None,
        asin: None,
    }]
}

fn lego_products() -> Vec<Product> {
    vec![
        fallback_item(
            "LEGO Classic Creative Bricks Set",
            "$29.99",
            "LEGO+Set",
            "Build anything you can imagine with this classic LEGO set!",
        ),
        fallback_item(
            "LEGO City Police Station",
            "$79.99",
            "Police+Station",
            "Complete police station with vehicles and minifigures",
        ),
        fallback_item(
            "LEGO Friends Heartlake City",
            "$49.99",
            "LEGO+Friends",
            "Build and play in Heartlake City with friends",
        ),
    ]
}

fn doll_products() -> Vec<Product> {
    vec![
        fallback_item(
            "American Girl Doll - Holiday Edition",
            "$98.00",
            "American+Girl",
            "Beautiful holiday-themed American Girl doll",
        ),
        fallback_item(
            "Barbie Dreamhouse Playset",
            "$89.99",
            "Barbie+Dreamhouse",
            "Three-story Barbie dreamhouse with elevator",
        ),
        fallback_item(
            "Baby Alive Doll",
            "$34.99",
            "Baby+Alive",
            "Interactive baby doll that eats, drinks, and more",
        ),
    ]
}

fn fallback_item(title: &str, price: &str, image_label: &str, description: &str) -> Product {
    Product {
        title: title.to_string(),
        price: price.to_string(),
        image: format!("{}{}", PLACEHOLDER_IMAGE_BASE, image_label),
        url: "#".to_string(),
        description: description.to_string(),
        rating: None,
        asin: None,
    }
}

/// Uppercase the first letter of each whitespace-delimited word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
