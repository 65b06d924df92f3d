//! # Catalog Module
//!
//! The read-only restaurant catalog and the provider seam the session reads
//! it through.
//!
//! ## Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CatalogProvider                                    │
//! │                                                                         │
//! │   StaticCatalog::sample()      embedded three-restaurant catalog       │
//! │   StaticCatalog::from_json()   JSON text read by the shell             │
//! │                                                                         │
//! │   Both are validated once at load time and never written afterwards.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{MenuItem, MenuItemId, PriceTier, Restaurant, RestaurantId, TimeSlot};
use crate::validation::{
    validate_available_times, validate_name, validate_price, validate_rating, ValidationResult,
};

// =============================================================================
// Provider Trait
// =============================================================================

/// Supplies the immutable, ordered restaurant list.
pub trait CatalogProvider {
    /// All restaurants, in display order.
    fn restaurants(&self) -> &[Restaurant];

    /// Looks up a restaurant by id.
    fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants().iter().find(|r| r.id == id)
    }
}

// =============================================================================
// Static Catalog
// =============================================================================

/// A catalog held fully in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    restaurants: Vec<Restaurant>,
}

impl StaticCatalog {
    /// Builds a catalog from restaurants, validating them first.
    pub fn new(restaurants: Vec<Restaurant>) -> ValidationResult<Self> {
        validate_catalog(&restaurants)?;
        Ok(StaticCatalog { restaurants })
    }

    /// Parses a catalog from a JSON array of restaurants.
    ///
    /// ## Format
    /// ```json
    /// [{ "id": 2, "name": "Sakura Garden", "cuisine": "Japanese",
    ///    "rating": 4.7, "price": "$$$", "description": "...",
    ///    "location": "...", "image": "...",
    ///    "availableTimes": ["12:00", "18:00"],
    ///    "menu": [{ "id": 202, "name": "Ramen Bowl", "description": "...",
    ///               "price": 1699, "category": "Main Course", "image": "..." }] }]
    /// ```
    /// Prices are integer cents.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let restaurants: Vec<Restaurant> =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
                field: "catalog".to_string(),
                reason: e.to_string(),
            })?;
        Self::new(restaurants)
    }

    /// The embedded sample catalog: The Rustic Plate, Sakura Garden and
    /// Spice Route.
    pub fn sample() -> Self {
        StaticCatalog {
            restaurants: sample_restaurants(),
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }
}

/// Checks catalog-wide invariants.
///
/// ## Rules
/// - Restaurant ids are unique
/// - Menu item ids are unique across every menu
/// - Names are non-empty, ratings in 0..=5, prices in 0..=`MAX_PRICE_CENTS`
/// - Each restaurant's time slots are free of duplicates
pub fn validate_catalog(restaurants: &[Restaurant]) -> ValidationResult<()> {
    let mut restaurant_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for restaurant in restaurants {
        if !restaurant_ids.insert(restaurant.id) {
            return Err(ValidationError::Duplicate {
                field: "restaurant id".to_string(),
                value: restaurant.id.to_string(),
            });
        }
        validate_name("restaurant name", &restaurant.name)?;
        validate_rating(restaurant.rating)?;
        validate_available_times(&restaurant.available_times)?;

        for item in &restaurant.menu {
            if !item_ids.insert(item.id) {
                return Err(ValidationError::Duplicate {
                    field: "menu item id".to_string(),
                    value: item.id.to_string(),
                });
            }
            validate_name("menu item name", &item.name)?;
            validate_name("menu category", &item.category)?;
            validate_price(item.price)?;
        }
    }

    Ok(())
}

// =============================================================================
// Menu Categories
// =============================================================================

/// One heading of a menu with its dishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Groups a restaurant's menu by category.
///
/// Categories appear in order of first appearance on the menu; items keep
/// their menu order within a category.
pub fn menu_categories(restaurant: &Restaurant) -> Vec<MenuCategory> {
    let mut categories: Vec<MenuCategory> = Vec::new();

    for item in &restaurant.menu {
        match categories.iter_mut().find(|c| c.name == item.category) {
            Some(category) => category.items.push(item.clone()),
            None => categories.push(MenuCategory {
                name: item.category.clone(),
                items: vec![item.clone()],
            }),
        }
    }

    categories
}

// =============================================================================
// Sample Data
// =============================================================================

fn dish(id: u32, name: &str, description: &str, cents: i64, category: &str, image: &str) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_cents(cents),
        category: category.to_string(),
        image: image.to_string(),
    }
}

fn on_the_hour(hours: &[u32]) -> Vec<TimeSlot> {
    hours.iter().filter_map(|h| TimeSlot::from_hm(*h, 0)).collect()
}

fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: RestaurantId(1),
            name: "The Rustic Plate".to_string(),
            cuisine: "Mediterranean".to_string(),
            rating: 4.8,
            price_tier: PriceTier::Moderate,
            description: "Experience the authentic flavors of the Mediterranean coast with our chef's special recipes passed down through generations.".to_string(),
            location: "123 Olive Street".to_string(),
            image: "assets/res1.jpg".to_string(),
            available_times: on_the_hour(&[17, 18, 19, 20, 21]),
            menu: vec![
                dish(101, "Margherita Pizza", "Fresh tomatoes, mozzarella, and basil", 1499, "Main Course", "assets/res1-1.jpg"),
                dish(102, "Seafood Risotto", "Creamy arborio rice with fresh seafood", 1899, "Main Course", "assets/res1-2.webp"),
                dish(103, "Tiramisu", "Classic Italian dessert with coffee and mascarpone", 899, "Dessert", "assets/res1-3.jpg"),
                dish(104, "Mediterranean Salad", "Fresh greens with feta, olives, and lemon dressing", 1099, "Appetizer", "assets/res1-4.jpg"),
            ],
        },
        Restaurant {
            id: RestaurantId(2),
            name: "Sakura Garden".to_string(),
            cuisine: "Japanese".to_string(),
            rating: 4.7,
            price_tier: PriceTier::Upscale,
            description: "Traditional Japanese cuisine with a modern twist, featuring the freshest ingredients and artistic presentation.".to_string(),
            location: "456 Cherry Blossom Avenue".to_string(),
            image: "assets/res2.jpg".to_string(),
            available_times: on_the_hour(&[12, 13, 18, 19, 20]),
            menu: vec![
                dish(201, "Assorted Sushi Platter", "Chef's selection of 12 sushi pieces", 2699, "Main Course", "assets/res2-1.jpg"),
                dish(202, "Ramen Bowl", "Rich broth with pork belly, egg, and vegetables", 1699, "Main Course", "assets/res2-2.jpg"),
                dish(203, "Matcha Ice Cream", "Premium green tea ice cream", 799, "Dessert", "assets/res2-3.jpg"),
                dish(204, "Edamame", "Steamed soybeans with sea salt", 599, "Appetizer", "assets/res2-4.jpg"),
            ],
        },
        Restaurant {
            id: RestaurantId(3),
            name: "Spice Route".to_string(),
            cuisine: "Indian".to_string(),
            rating: 4.6,
            price_tier: PriceTier::Moderate,
            description: "Journey through India's diverse culinary landscape with our aromatic spices and authentic recipes.".to_string(),
            location: "789 Spice Alley".to_string(),
            image: "assets/res3.jpg".to_string(),
            available_times: on_the_hour(&[12, 13, 14, 18, 19, 20, 21]),
            menu: vec![
                dish(301, "Butter Chicken", "Tender chicken in a creamy tomato sauce", 1799, "Main Course", "assets/res3-1.jpg"),
                dish(302, "Vegetable Biryani", "Fragrant rice with seasonal vegetables", 1599, "Main Course", "assets/res3-2.jpg"),
                dish(303, "Gulab Jamun", "Sweet milk dumplings in rose syrup", 699, "Dessert", "assets/res3-3.jpg"),
                dish(304, "Samosa", "Crispy pastry filled with spiced potatoes and peas", 799, "Appetizer", "assets/res3-4.webp"),
            ],
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
