//! Character categories and pool building for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Category {
    /// Pool concatenation order.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digit,
        Category::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Digit => DIGITS,
            Category::Special => SPECIAL,
        }
    }
}

/// Which categories contribute to the draw pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl Categories {
    pub const NONE: Categories = Categories {
        uppercase: false,
        lowercase: false,
        digits: false,
        special: false,
    };

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Digit => self.digits,
            Category::Special => self.special,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
        }
    }
}

/// Build the character pool from the enabled categories.
pub fn build(categories: &Categories) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(categories));
    for category in categories.enabled() {
        chars.extend(category.chars().chars());
    }
    chars
}

/// Number of characters in the pool.
pub fn size(categories: &Categories) -> usize {
    categories.enabled().map(|c| c.chars().len()).sum()
}

/// Calculate password entropy in bits.
pub fn entropy_bits(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_rating(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
