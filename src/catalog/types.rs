use serde::Serialize;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Beer,
    Spirits,
    Wine,
    PreparedDrinks,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 4] = [
        Category::Beer,
        Category::Spirits,
        Category::Wine,
        Category::PreparedDrinks,
    ];

    /// Share of transaction lines drawn from this category
    pub const fn weight(self) -> f64 {
        match self {
            Category::Beer => 0.50,
            Category::Spirits => 0.25,
            Category::Wine => 0.15,
            Category::PreparedDrinks => 0.10,
        }
    }

    /// Poisson mean of the base quantity sold per line
    pub const fn mean_quantity(self) -> f64 {
        match self {
            Category::Beer => 15.0,
            Category::Spirits => 5.0,
            Category::Wine => 7.0,
            Category::PreparedDrinks => 10.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Beer => "Beer",
            Category::Spirits => "Spirits",
            Category::Wine => "Wine",
            Category::PreparedDrinks => "PreparedDrinks",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sellable catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub category: Category,
    pub name: &'static str,
    pub base_price: f64,
}

impl Product {
    pub const fn new(category: Category, name: &'static str, base_price: f64) -> Self {
        Self {
            category,
            name,
            base_price,
        }
    }
}

/// Geographic zone a branch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    North,
    South,
    East,
    West,
    Center,
}

impl Zone {
    /// Scale applied to the expected daily transaction count
    pub const fn demand_multiplier(self) -> f64 {
        match self {
            Zone::Center => 1.3,
            Zone::North => 1.1,
            Zone::South | Zone::East | Zone::West => 1.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::North => "North",
            Zone::South => "South",
            Zone::East => "East",
            Zone::West => "West",
            Zone::Center => "Center",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A store location
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub id: u32,
    pub zone: Zone,
}

impl Branch {
    pub const fn new(id: u32, zone: Zone) -> Self {
        Self { id, zone }
    }
}

/// A named special day, matched on (month, day) regardless of year
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: &'static str,
    pub occurrences: &'static [(u32, u32)],
}

impl Event {
    pub const fn new(name: &'static str, occurrences: &'static [(u32, u32)]) -> Self {
        Self { name, occurrences }
    }

    /// Check whether this event falls on the given month and day
    pub fn occurs_on(&self, month: u32, day: u32) -> bool {
        self.occurrences
            .iter()
            .any(|&(m, d)| m == month && d == day)
    }
}
