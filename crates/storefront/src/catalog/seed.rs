//! Built-in product list.

use beltline_core::{Category, ProductId, Rating};
use rust_decimal::Decimal;

use super::Product;

const IMAGE_HOST: &str = "https://images.pexels.com/photos";
const IMAGE_PARAMS: &str = "auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

fn image(path: &str) -> Vec<String> {
    let url = format!("{IMAGE_HOST}/{path}.jpeg?{IMAGE_PARAMS}");
    vec![url.clone(), url]
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn rating(tenths: i64) -> Rating {
    Rating::clamped(Decimal::new(tenths, 1))
}

pub(super) fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Classic Oxford Shirt".to_owned(),
            price: Decimal::new(4999, 2),
            category: Category::Clothing,
            description: "A timeless Oxford shirt crafted from premium cotton for comfort and durability. Perfect for casual and semi-formal occasions.".to_owned(),
            images: image("297933/pexels-photo-297933"),
            sizes: Some(labels(&["S", "M", "L", "XL"])),
            colors: Some(labels(&["White", "Blue", "Black"])),
            featured: true,
            in_stock: true,
            rating: rating(45),
        },
        Product {
            id: ProductId::new("2"),
            name: "Premium Leather Belt".to_owned(),
            price: Decimal::new(3999, 2),
            category: Category::Belts,
            description: "Handcrafted premium leather belt with a classic buckle. Versatile and durable for everyday wear.".to_owned(),
            images: image("45055/pexels-photo-45055"),
            sizes: None,
            colors: Some(labels(&["Brown", "Black"])),
            featured: true,
            in_stock: true,
            rating: rating(48),
        },
        Product {
            id: ProductId::new("3"),
            name: "Slim Fit Jeans".to_owned(),
            price: Decimal::new(5999, 2),
            category: Category::Clothing,
            description: "Modern slim fit jeans with stretch comfort. Perfect for casual outings and everyday wear.".to_owned(),
            images: image("1346187/pexels-photo-1346187"),
            sizes: Some(labels(&["30", "32", "34", "36"])),
            colors: Some(labels(&["Blue", "Black", "Gray"])),
            featured: false,
            in_stock: true,
            rating: rating(43),
        },
        Product {
            id: ProductId::new("4"),
            name: "Leather Wallet".to_owned(),
            price: Decimal::new(2999, 2),
            category: Category::Accessories,
            description: "Compact leather wallet with multiple card slots and a bill compartment. Sleek and functional design.".to_owned(),
            images: image("2079628/pexels-photo-2079628"),
            sizes: None,
            colors: Some(labels(&["Brown", "Black"])),
            featured: false,
            in_stock: true,
            rating: rating(47),
        },
        Product {
            id: ProductId::new("5"),
            name: "Casual T-Shirt".to_owned(),
            price: Decimal::new(2499, 2),
            category: Category::Clothing,
            description: "Soft cotton t-shirt with a comfortable fit. Essential for your casual wardrobe.".to_owned(),
            images: image("1656684/pexels-photo-1656684"),
            sizes: Some(labels(&["S", "M", "L", "XL", "XXL"])),
            colors: Some(labels(&["White", "Black", "Gray", "Navy"])),
            featured: true,
            in_stock: true,
            rating: rating(42),
        },
        Product {
            id: ProductId::new("6"),
            name: "Designer Sunglasses".to_owned(),
            price: Decimal::new(12999, 2),
            category: Category::Accessories,
            description: "Premium sunglasses with UV protection and a stylish frame. Perfect for sunny days and fashion-forward looks.".to_owned(),
            images: image("701877/pexels-photo-701877"),
            sizes: None,
            colors: Some(labels(&["Black", "Tortoise"])),
            featured: false,
            in_stock: true,
            rating: rating(49),
        },
        Product {
            id: ProductId::new("7"),
            name: "Formal Dress Shirt".to_owned(),
            price: Decimal::new(6999, 2),
            category: Category::Clothing,
            description: "Elegant dress shirt made from high-quality cotton. Perfect for formal occasions and business meetings.".to_owned(),
            images: image("994517/pexels-photo-994517"),
            sizes: Some(labels(&["S", "M", "L", "XL"])),
            colors: Some(labels(&["White", "Light Blue", "Pink"])),
            featured: false,
            in_stock: true,
            rating: rating(46),
        },
        Product {
            id: ProductId::new("8"),
            name: "Woven Belt".to_owned(),
            price: Decimal::new(3499, 2),
            category: Category::Belts,
            description: "Flexible woven belt with leather trim. Comfortable and stylish for casual outfits.".to_owned(),
            images: image("5698853/pexels-photo-5698853"),
            sizes: None,
            colors: Some(labels(&["Brown/Navy", "Black/Gray"])),
            featured: false,
            in_stock: true,
            rating: rating(44),
        },
    ]
}
