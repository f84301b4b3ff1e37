use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicase::UniCase;

use crate::error::PressError;

/// Default backend origin
pub const DEFAULT_API_URL: &str = "https://seyi-adisa-backend.onrender.com";

/// Author stamped on new posts when none is given
pub const DEFAULT_AUTHOR: &str = "Seyi Adisa";

pub const DEFAULT_POSTS_PAGE_SIZE: usize = 6;
pub const DEFAULT_PUBLICATIONS_PAGE_SIZE: usize = 4;

/// Lifetime of a toast notification before it is dismissed
pub const DEFAULT_TOAST_SECONDS: u64 = 5;

/// File name used for downloads when the server does not suggest one
pub const FALLBACK_DOWNLOAD_NAME: &str = "publication.pdf";

/// Post categories. The set is fixed on the client; the backend stores the
/// display name as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Health,
    Travel,
    Food,
    Education,
    Fitness,
    Fashion,
    Business,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Health,
        Category::Travel,
        Category::Food,
        Category::Education,
        Category::Fitness,
        Category::Fashion,
        Category::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Food => "Food",
            Category::Education => "Education",
            Category::Fitness => "Fitness",
            Category::Fashion => "Fashion",
            Category::Business => "Business",
        }
    }

    /// Display names of every category, in `ALL` order
    pub fn names() -> [&'static str; 8] {
        Category::ALL.map(|c| c.as_str())
    }

    /// Step through the filter options: all categories, then each one in order.
    pub fn cycle(current: Option<Category>) -> Option<Category> {
        match current {
            None => Some(Category::ALL[0]),
            Some(c) => {
                let idx = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
                Category::ALL.get(idx + 1).copied()
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = PressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = UniCase::new(s.trim());
        Category::ALL
            .iter()
            .find(|c| UniCase::new(c.as_str()) == wanted)
            .copied()
            .ok_or_else(|| PressError::InvalidCategory(s.to_string()))
    }
}

/// Which backend collection a screen or command works against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Posts,
    Publications,
}

impl ResourceKind {
    pub fn toggle(self) -> Self {
        match self {
            ResourceKind::Posts => ResourceKind::Publications,
            ResourceKind::Publications => ResourceKind::Posts,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Posts => write!(f, "posts"),
            ResourceKind::Publications => write!(f, "publications"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = PressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posts" | "post" => Ok(ResourceKind::Posts),
            "publications" | "publication" | "pubs" => Ok(ResourceKind::Publications),
            _ => Err(PressError::Other(format!(
                "unknown resource '{}', expected 'posts' or 'publications'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("HEALTH".parse::<Category>().unwrap(), Category::Health);
        assert_eq!(" Travel ".parse::<Category>().unwrap(), Category::Travel);
        assert!("Gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_names_round_trip_through_from_str() {
        let names = Category::names();
        assert_eq!(names[0], "Technology");
        assert_eq!(names[7], "Business");
        for (name, category) in names.iter().zip(Category::ALL) {
            assert_eq!(name.parse::<Category>().unwrap(), category);
            assert_eq!(category.to_string(), *name);
        }
    }

    #[test]
    fn test_category_cycle_wraps_to_all() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..Category::ALL.len() {
            current = Category::cycle(current);
            seen.push(current.unwrap());
        }
        assert_eq!(seen, Category::ALL);
        assert_eq!(Category::cycle(current), None);
    }

    #[test]
    fn test_resource_kind_parse() {
        assert_eq!(
            "posts".parse::<ResourceKind>().unwrap(),
            ResourceKind::Posts
        );
        assert_eq!(
            "Publications".parse::<ResourceKind>().unwrap(),
            ResourceKind::Publications
        );
        assert!("pages".parse::<ResourceKind>().is_err());
        assert_eq!(ResourceKind::Posts.toggle(), ResourceKind::Publications);
    }
}
