//! 組み込みのモックカタログ（ダッカの 3 店舗）

use crate::domain::{Catalog, MenuItem, PriceTier, Restaurant, RestaurantId};
use crate::ports::outbound::CatalogSource;
use common::error::Error;

#[derive(Debug, Clone, Default)]
pub struct MockCatalogSource;

impl CatalogSource for MockCatalogSource {
    fn load(&self) -> Result<Catalog, Error> {
        Catalog::new(mock_restaurants()).map_err(|e| Error::invalid_data(e.to_string()))
    }
}

fn menu(items: &[(&str, u32)]) -> Vec<MenuItem> {
    items
        .iter()
        .map(|(name, price)| MenuItem {
            name: name.to_string(),
            price: *price,
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: RestaurantId::new("r1"),
            name: "BunBun Banh Mi".to_string(),
            area: "Banani".to_string(),
            cuisine: strings(&["Vietnamese", "Sandwich"]),
            price: PriceTier::Moderate,
            rating: 4.6,
            review_count: 142,
            tags: strings(&["Kid friendly", "Non smoking"]),
            image: "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1200&auto=format&fit=crop".to_string(),
            menu: menu(&[
                ("Classic Banh Mi", 380),
                ("Grilled Chicken Banh Mi", 420),
                ("Iced Coffee", 220),
            ]),
            description: "Crisp baguettes with bold fillings. Cosy spot for a quick bite and coffee.".to_string(),
        },
        Restaurant {
            id: RestaurantId::new("r2"),
            name: "Chaa Club".to_string(),
            area: "Dhanmondi".to_string(),
            cuisine: strings(&["Cafe", "Dessert"]),
            price: PriceTier::Cheap,
            rating: 4.2,
            review_count: 89,
            tags: strings(&["Work friendly", "WiFi"]),
            image: "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?q=80&w=1200&auto=format&fit=crop".to_string(),
            menu: menu(&[
                ("Masala Chai", 180),
                ("Cheesecake Slice", 320),
                ("Chicken Sandwich", 350),
            ]),
            description: "Tea focused cafe with calm vibes and power sockets at every table.".to_string(),
        },
        Restaurant {
            id: RestaurantId::new("r3"),
            name: "Kacchi Stories".to_string(),
            area: "Uttara".to_string(),
            cuisine: strings(&["Bangladeshi"]),
            price: PriceTier::Expensive,
            rating: 4.8,
            review_count: 512,
            tags: strings(&["Family", "Parking"]),
            image: "https://images.unsplash.com/photo-1617195737496-87df82d906b6?q=80&w=1200&auto=format&fit=crop".to_string(),
            menu: menu(&[("Kacchi Platter", 780), ("Borhani", 120), ("Firni", 160)]),
            description: "Rich kacchi with generous portions, perfect for gatherings.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_loads() {
        let catalog = MockCatalogSource.load().unwrap();
        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.restaurants().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["BunBun Banh Mi", "Chaa Club", "Kacchi Stories"]);
    }
}
