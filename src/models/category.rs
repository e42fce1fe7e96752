use serde::{Deserialize, Serialize};

/// The nine fixed spending buckets. Declaration order is the canonical
/// iteration order used for aggregation rows and ranking tie-breaks;
/// keyword matching uses its own priority order (see `services::lexicon`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FoodDrink,
    Housing,
    Transport,
    Clothing,
    Communication,
    Education,
    Healthcare,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::FoodDrink,
        Category::Housing,
        Category::Transport,
        Category::Clothing,
        Category::Communication,
        Category::Education,
        Category::Healthcare,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FoodDrink => "food_drink",
            Category::Housing => "housing",
            Category::Transport => "transport",
            Category::Clothing => "clothing",
            Category::Communication => "communication",
            Category::Education => "education",
            Category::Healthcare => "healthcare",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "food_drink" => Some(Category::FoodDrink),
            "housing" => Some(Category::Housing),
            "transport" => Some(Category::Transport),
            "clothing" => Some(Category::Clothing),
            "communication" => Some(Category::Communication),
            "education" => Some(Category::Education),
            "healthcare" => Some(Category::Healthcare),
            "entertainment" => Some(Category::Entertainment),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// User-facing Thai label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodDrink => "อาหาร/เครื่องดื่ม",
            Category::Housing => "ค่าที่อยู่อาศัย/เครื่องใช้",
            Category::Transport => "ยานพาหนะ/การเดินทาง",
            Category::Clothing => "เสื้อผ้า/รองเท้า",
            Category::Communication => "การสื่อสาร",
            Category::Education => "การศึกษา",
            Category::Healthcare => "เวชภัณฑ์/ค่ารักษา",
            Category::Entertainment => "บันเทิง",
            Category::Other => "อื่นๆ",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::FoodDrink => "🍜",
            Category::Housing => "🏠",
            Category::Transport => "🚗",
            Category::Clothing => "👗",
            Category::Communication => "📞",
            Category::Education => "🎓",
            Category::Healthcare => "💊",
            Category::Entertainment => "🎉",
            Category::Other => "📦",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
