use serde::{Deserialize, Serialize};

use super::Kind;

/// A user-facing classification label, scoped to a transaction kind.
/// `Regalos` and `Otros` belong to both category sets; everything else is
/// specific to income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    // Income
    Salario,
    Bonificaciones,
    Inversiones,
    Ventas,
    Reembolsos,
    // Expense
    Hogar,
    Comida,
    Transporte,
    Compras,
    Educacion,
    Salud,
    Entretenimiento,
    Servicios,
    Internet,
    Mascotas,
    // Either kind
    Regalos,
    Otros,
}

pub const INCOME_CATEGORIES: [Category; 7] = [
    Category::Salario,
    Category::Bonificaciones,
    Category::Inversiones,
    Category::Regalos,
    Category::Ventas,
    Category::Reembolsos,
    Category::Otros,
];

pub const EXPENSE_CATEGORIES: [Category; 12] = [
    Category::Hogar,
    Category::Comida,
    Category::Transporte,
    Category::Compras,
    Category::Educacion,
    Category::Salud,
    Category::Entretenimiento,
    Category::Servicios,
    Category::Internet,
    Category::Mascotas,
    Category::Regalos,
    Category::Otros,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salario => "Salario",
            Category::Bonificaciones => "Bonificaciones",
            Category::Inversiones => "Inversiones",
            Category::Ventas => "Ventas",
            Category::Reembolsos => "Reembolsos",
            Category::Hogar => "Hogar",
            Category::Comida => "Comida",
            Category::Transporte => "Transporte",
            Category::Compras => "Compras",
            Category::Educacion => "Educación",
            Category::Salud => "Salud",
            Category::Entretenimiento => "Entretenimiento",
            Category::Servicios => "Servicios",
            Category::Internet => "Internet",
            Category::Mascotas => "Mascotas",
            Category::Regalos => "Regalos",
            Category::Otros => "Otros",
        }
    }

    /// Lookup by name, case- and accent-insensitive ("educacion" and
    /// "Educación" both resolve).
    pub fn from_str(s: &str) -> Option<Self> {
        match fold(s).as_str() {
            "salario" => Some(Category::Salario),
            "bonificaciones" => Some(Category::Bonificaciones),
            "inversiones" => Some(Category::Inversiones),
            "ventas" => Some(Category::Ventas),
            "reembolsos" => Some(Category::Reembolsos),
            "hogar" => Some(Category::Hogar),
            "comida" => Some(Category::Comida),
            "transporte" => Some(Category::Transporte),
            "compras" => Some(Category::Compras),
            "educacion" => Some(Category::Educacion),
            "salud" => Some(Category::Salud),
            "entretenimiento" => Some(Category::Entretenimiento),
            "servicios" => Some(Category::Servicios),
            "internet" => Some(Category::Internet),
            "mascotas" => Some(Category::Mascotas),
            "regalos" => Some(Category::Regalos),
            "otros" => Some(Category::Otros),
            _ => None,
        }
    }

    /// The icon reference for this category (a lucide icon name).
    /// Purely presentational metadata for front ends.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Salario => "briefcase",
            Category::Bonificaciones => "gift",
            Category::Inversiones => "piggy-bank",
            Category::Ventas => "shopping-bag",
            Category::Reembolsos => "repeat",
            Category::Hogar => "home",
            Category::Comida => "utensils",
            Category::Transporte => "car",
            Category::Compras => "shopping-bag",
            Category::Educacion => "book-open",
            Category::Salud => "heart-pulse",
            Category::Entretenimiento => "gamepad-2",
            Category::Servicios => "wrench",
            Category::Internet => "wifi",
            Category::Mascotas => "dog",
            Category::Regalos => "gift",
            Category::Otros => "package",
        }
    }

    /// Returns true if this category belongs to the given kind's set.
    pub fn valid_for(&self, kind: Kind) -> bool {
        Self::all_for(kind).contains(self)
    }

    /// The full category set for a kind, in presentation order.
    pub fn all_for(kind: Kind) -> &'static [Category] {
        match kind {
            Kind::Income => &INCOME_CATEGORIES,
            Kind::Expense => &EXPENSE_CATEGORIES,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercase and strip the accents that occur in category names.
fn fold(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            _ => c,
        })
        .collect()
}
