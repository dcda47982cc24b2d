//! Fixed bootstrap catalog.

use crate::product::{NewProduct, Rating};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The Nike starter catalog loaded by `POST /api/products/seed`, in insertion order.
pub fn nike_catalog() -> Vec<NewProduct> {
    vec![
        NewProduct {
            title: "Nike Air Max 270".to_string(),
            description: "Breathable mesh upper with a large Air unit for all\u{2011}day comfort."
                .to_string(),
            price: 149.99,
            category: "Sneakers".to_string(),
            brand: "Nike".to_string(),
            in_stock: true,
            images: strings(&[
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=1600&q=80&auto=format&fit=crop",
            ]),
            colors: strings(&["Black", "White", "Volt"]),
            rating: Rating::new(4.7, 324),
        },
        NewProduct {
            title: "Nike Air Force 1 '07".to_string(),
            description:
                "The classic AF1\u{2014}legendary style with crisp leather and durable cushioning."
                    .to_string(),
            price: 109.99,
            category: "Lifestyle".to_string(),
            brand: "Nike".to_string(),
            in_stock: true,
            images: strings(&[
                "https://images.unsplash.com/photo-1543508282-6319a3e2621f?w=1600&q=80&auto=format&fit=crop",
            ]),
            colors: strings(&["White", "Black"]),
            rating: Rating::new(4.8, 512),
        },
        NewProduct {
            title: "Nike Pegasus 40".to_string(),
            description: "Daily trainer built for smooth transitions and dependable cushioning."
                .to_string(),
            price: 129.99,
            category: "Running".to_string(),
            brand: "Nike".to_string(),
            in_stock: true,
            images: strings(&[
                "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?w=1600&q=80&auto=format&fit=crop",
            ]),
            colors: strings(&["Blue", "Grey"]),
            rating: Rating::new(4.6, 210),
        },
    ]
}
