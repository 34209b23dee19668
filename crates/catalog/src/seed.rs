//! Reference catalog: the twelve products the storefront ships with.

use storefront_core::{DomainResult, ProductId};

use crate::product::{Category, Product, ProductDraft};

struct SeedRow {
    id: u32,
    name: &'static str,
    description: &'static str,
    price: u64,
    category: Category,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
}

const SEED: [SeedRow; 12] = [
    SeedRow {
        id: 1,
        name: "Classic Crewneck Tee",
        description: "A timeless staple for any wardrobe, made from ultra-soft pima cotton.",
        price: 4500,
        category: Category::Tops,
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["White", "Black", "Heather Grey"],
    },
    SeedRow {
        id: 2,
        name: "Slim-Fit Chinos",
        description: "Versatile and comfortable, these chinos will take you from the office to the weekend.",
        price: 8500,
        category: Category::Bottoms,
        sizes: &["28", "30", "32", "34", "36"],
        colors: &["Khaki", "Navy", "Olive"],
    },
    SeedRow {
        id: 3,
        name: "Floral Sundress",
        description: "Light and airy, this dress is perfect for sunny days and garden parties.",
        price: 12000,
        category: Category::Dresses,
        sizes: &["XS", "S", "M", "L"],
        colors: &["Yellow Floral", "Blue Ditsy"],
    },
    SeedRow {
        id: 4,
        name: "Denim Jacket",
        description: "A rugged and stylish layering piece that only gets better with age.",
        price: 15000,
        category: Category::Outerwear,
        sizes: &["S", "M", "L", "XL"],
        colors: &["Vintage Wash", "Black"],
    },
    SeedRow {
        id: 5,
        name: "Leather Crossbody Bag",
        description: "Chic and practical, this bag holds all your essentials in style.",
        price: 25000,
        category: Category::Accessories,
        sizes: &["One Size"],
        colors: &["Tan", "Black"],
    },
    SeedRow {
        id: 6,
        name: "Minimalist Sneakers",
        description: "Clean lines and premium materials make these the perfect everyday sneakers.",
        price: 17500,
        category: Category::Shoes,
        sizes: &["7", "8", "9", "10", "11"],
        colors: &["White", "Stone"],
    },
    SeedRow {
        id: 7,
        name: "Silk Blouse",
        description: "Elegant and fluid, this silk blouse adds a touch of luxury to any outfit.",
        price: 18000,
        category: Category::Tops,
        sizes: &["XS", "S", "M", "L"],
        colors: &["Ivory", "Champagne", "Black"],
    },
    SeedRow {
        id: 8,
        name: "High-Waisted Jeans",
        description: "A flattering vintage-inspired fit with a modern stretch for comfort.",
        price: 13000,
        category: Category::Bottoms,
        sizes: &["24", "25", "26", "27", "28", "29", "30"],
        colors: &["Light Wash", "Medium Wash"],
    },
    SeedRow {
        id: 9,
        name: "Knit Midi Dress",
        description: "A sophisticated and comfortable dress that hugs your curves in all the right places.",
        price: 14000,
        category: Category::Dresses,
        sizes: &["S", "M", "L"],
        colors: &["Camel", "Charcoal"],
    },
    SeedRow {
        id: 10,
        name: "Wool Trench Coat",
        description: "A timeless outerwear piece that will keep you warm and stylish through the colder months.",
        price: 45000,
        category: Category::Outerwear,
        sizes: &["S", "M", "L", "XL"],
        colors: &["Camel", "Black"],
    },
    SeedRow {
        id: 11,
        name: "Gold Hoop Earrings",
        description: "The perfect finishing touch, these classic hoops are lightweight and versatile.",
        price: 6500,
        category: Category::Accessories,
        sizes: &["One Size"],
        colors: &["Gold"],
    },
    SeedRow {
        id: 12,
        name: "Suede Ankle Boots",
        description: "A chic and versatile boot that can be dressed up or down.",
        price: 22000,
        category: Category::Shoes,
        sizes: &["6", "7", "8", "9", "10"],
        colors: &["Taupe", "Black"],
    },
];

/// Build the reference catalog (ids 1–12, catalog order).
pub fn seed_catalog() -> DomainResult<Vec<Product>> {
    SEED.iter()
        .map(|row| {
            let draft = ProductDraft {
                name: row.name.to_string(),
                description: row.description.to_string(),
                price: row.price,
                image: format!("https://picsum.photos/600/800?random={}", row.id + 10),
                category: row.category,
                sizes: row.sizes.iter().map(|s| s.to_string()).collect(),
                colors: row.colors.iter().map(|c| c.to_string()).collect(),
            };
            Product::from_draft(ProductId::new(row.id)?, draft)
        })
        .collect()
}
