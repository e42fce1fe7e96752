//! The single authoritative keyword lexicon for expense classification.
//!
//! Keywords are stored lowercased so the classifier can match
//! case-insensitively against normalized descriptions.

use crate::models::limits::DEFAULT_LIMIT;
use crate::models::Category;

/// Categories in matching priority order. Transport comes before food
/// because fuel keywords collide with short food tokens ("น้ำมัน" contains
/// "น้ำ"). "Other" is never matched directly, only used as fallback.
pub const MATCH_ORDER: [Category; 8] = [
    Category::Transport,
    Category::FoodDrink,
    Category::Housing,
    Category::Clothing,
    Category::Communication,
    Category::Education,
    Category::Healthcare,
    Category::Entertainment,
];

pub fn keywords_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::FoodDrink => &[
            "ข้าว",
            "กาแฟ",
            "ชา",
            "อาหาร",
            "ขนม",
            "น้ำ",
            "ร้าน",
            "เครื่องดื่ม",
        ],
        Category::Housing => &[
            "ค่าไฟ",
            "ค่าน้ำ",
            "ของใช้",
            "บ้าน",
            "คอนโด",
            "ห้อง",
            "เฟอร์นิเจอร์",
        ],
        Category::Transport => &[
            "น้ำมัน",
            "แท็กซี่",
            "รถเมล์",
            "bts",
            "mrt",
            "grab",
            "เดินทาง",
            "จอดรถ",
        ],
        Category::Clothing => &[
            "เสื้อ",
            "กางเกง",
            "รองเท้า",
            "หมวก",
            "กระเป๋า",
            "ชุด",
            "ถุงเท้า",
        ],
        Category::Communication => &[
            "มือถือ",
            "โทรศัพท์",
            "อินเทอร์เน็ต",
            "wifi",
            "ซิม",
            "ค่าโทร",
            "เน็ต",
        ],
        Category::Education => &["เรียน", "หนังสือ", "ติว", "ค่าเทอม", "คอร์ส", "อบรม"],
        Category::Healthcare => &["ยา", "หมอ", "โรงพยาบาล", "คลินิก", "รักษา", "พยาบาล"],
        Category::Entertainment => &[
            "ดูหนัง",
            "เกม",
            "เที่ยว",
            "คอนเสิร์ต",
            "ปาร์ตี้",
            "ของขวัญ",
            "ผับ",
        ],
        Category::Other => &["บริจาค", "ของฝาก", "งานพิธี", "ซ่อมของ", "ทั่วไป"],
    }
}

/// Keywords for a category, longest first, so a short token cannot mask a
/// more specific longer one.
pub fn keywords_longest_first(category: Category) -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = keywords_for(category).to_vec();
    keywords.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
    keywords
}

pub fn default_limit(_category: Category) -> f64 {
    DEFAULT_LIMIT
}
