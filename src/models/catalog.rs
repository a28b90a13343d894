//! Fixed product catalog: item name → reference unit price.
//! Only used to populate defaults; entries store the item as plain text.

pub const DAIRY_PRODUCTS: [(&str, f64); 10] = [
    ("Milk (1 Litre)", 60.00),
    ("Curd (500g)", 45.00),
    ("Paneer (200g)", 80.00),
    ("Ghee (200ml)", 150.00),
    ("Butter (100g)", 55.00),
    ("Lassi (200ml)", 30.00),
    ("Yogurt (100g)", 25.00),
    ("Cream (250ml)", 70.00),
    ("Cheese Slice (100g)", 75.00),
    ("Flavored Milk (200ml)", 35.00),
];

/// Reference price for a catalog item (exact, case-insensitive name match).
pub fn price_of(item: &str) -> Option<f64> {
    lookup(item).map(|(_, price)| price)
}

/// Canonical catalog spelling of an item, if known.
pub fn canonical_name(item: &str) -> Option<&'static str> {
    lookup(item).map(|(name, _)| name)
}

fn lookup(item: &str) -> Option<(&'static str, f64)> {
    let needle = item.trim();
    DAIRY_PRODUCTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .copied()
}
