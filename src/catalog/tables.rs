//! Static catalog, branch directory and event calendar for the liquor chain

use super::types::*;

/// Label written when a date matches no event
pub const NO_EVENT: &str = "None";

/// Yearly price increase applied per elapsed calendar year
pub const ANNUAL_INFLATION: f64 = 0.05;

/// Catalog base prices are quoted in this year
pub const BASE_PRICE_YEAR: i32 = 2022;

// =============================================================================
// Catalog
// =============================================================================

pub static BEER: &[Product] = &[
    Product::new(Category::Beer, "Pilsen 330ml", 2.50),
    Product::new(Category::Beer, "Club Colombia 330ml", 3.20),
    Product::new(Category::Beer, "Aguila 330ml", 2.80),
    Product::new(Category::Beer, "Stella Artois 330ml", 4.50),
    Product::new(Category::Beer, "Corona 355ml", 5.20),
    Product::new(Category::Beer, "Heineken 330ml", 4.80),
    Product::new(Category::Beer, "BBC Cajica 330ml", 6.50),
    Product::new(Category::Beer, "Tres Cordilleras IPA 330ml", 7.20),
];

pub static SPIRITS: &[Product] = &[
    Product::new(Category::Spirits, "Aguardiente Antioqueno 750ml", 18.50),
    Product::new(Category::Spirits, "Ron Medellin 750ml", 22.00),
    Product::new(Category::Spirits, "Whisky Old Parr 750ml", 85.00),
    Product::new(Category::Spirits, "Vodka Smirnoff 750ml", 32.00),
    Product::new(Category::Spirits, "Ron Bacardi 750ml", 28.50),
    Product::new(Category::Spirits, "Whisky Buchanans 750ml", 120.00),
    Product::new(Category::Spirits, "Aguardiente Nectar 750ml", 16.80),
    Product::new(Category::Spirits, "Tequila Jose Cuervo 750ml", 45.00),
];

pub static WINE: &[Product] = &[
    Product::new(Category::Wine, "Vino Tinto Gato Negro 750ml", 15.20),
    Product::new(Category::Wine, "Vino Blanco Santa Helena 750ml", 12.50),
    Product::new(Category::Wine, "Vino Rose Marques de Caceres 750ml", 18.00),
    Product::new(Category::Wine, "Espumoso Freixenet 750ml", 25.00),
    Product::new(Category::Wine, "Vino Tinto Casillero del Diablo 750ml", 22.00),
    Product::new(Category::Wine, "Vino Blanco Concha y Toro 750ml", 16.50),
];

pub static PREPARED_DRINKS: &[Product] = &[
    Product::new(Category::PreparedDrinks, "Smirnoff Ice 275ml", 4.20),
    Product::new(Category::PreparedDrinks, "Four Loko 473ml", 6.80),
    Product::new(Category::PreparedDrinks, "Bacardi Breezer 275ml", 4.50),
    Product::new(Category::PreparedDrinks, "Mikes Hard 355ml", 5.50),
];

/// Products sold under a category
pub fn products_in(category: Category) -> &'static [Product] {
    match category {
        Category::Beer => BEER,
        Category::Spirits => SPIRITS,
        Category::Wine => WINE,
        Category::PreparedDrinks => PREPARED_DRINKS,
    }
}

/// Every product, grouped by category in declaration order
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    Category::ALL
        .into_iter()
        .flat_map(|category| products_in(category).iter())
}

/// Look up a product by its exact name
pub fn find_product(name: &str) -> Option<&'static Product> {
    all_products().find(|p| p.name == name)
}

/// Price of a product in the given year, compounding yearly from [`BASE_PRICE_YEAR`]
pub fn unit_price(product: &Product, year: i32) -> f64 {
    let elapsed = (year - BASE_PRICE_YEAR).max(0);
    round_to(product.base_price * (1.0 + ANNUAL_INFLATION).powi(elapsed), 2)
}

/// Round half away from zero to the given number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// =============================================================================
// Branch Directory
// =============================================================================

pub static BRANCHES: &[Branch] = &[
    Branch::new(1, Zone::North),
    Branch::new(2, Zone::North),
    Branch::new(3, Zone::North),
    Branch::new(4, Zone::South),
    Branch::new(5, Zone::South),
    Branch::new(6, Zone::South),
    Branch::new(7, Zone::East),
    Branch::new(8, Zone::East),
    Branch::new(9, Zone::East),
    Branch::new(10, Zone::West),
    Branch::new(11, Zone::West),
    Branch::new(12, Zone::West),
    Branch::new(13, Zone::Center),
    Branch::new(14, Zone::Center),
    Branch::new(15, Zone::Center),
];

/// Get a branch by id
pub fn get_branch(id: u32) -> Option<&'static Branch> {
    BRANCHES.iter().find(|b| b.id == id)
}

// =============================================================================
// Event Calendar
// =============================================================================

/// Special days in matching priority order
pub static EVENTS: &[Event] = &[
    Event::new("Año_Nuevo", &[(1, 1), (12, 31)]),
    Event::new("San_Valentin", &[(2, 14)]),
    // March in some countries, June in others
    Event::new("Dia_Padre", &[(3, 19), (6, 19)]),
    Event::new("Pascua", &[(4, 17), (4, 9), (3, 31)]),
    Event::new("Dia_Madre", &[(5, 8), (5, 14)]),
    Event::new("Halloween", &[(10, 31)]),
    Event::new("Navidad", &[(12, 24), (12, 25)]),
];

/// Get an event by name
pub fn get_event(name: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.name == name)
}
