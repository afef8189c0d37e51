use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which candidate set a discovery run draws from. Selection happens at the
/// candidate source, before scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Trending,
    New,
    Meme,
    Gainers,
    Volume,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Trending,
        Category::New,
        Category::Meme,
        Category::Gainers,
        Category::Volume,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Trending => write!(f, "trending"),
            Category::New => write!(f, "new"),
            Category::Meme => write!(f, "meme"),
            Category::Gainers => write!(f, "gainers"),
            Category::Volume => write!(f, "volume"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trending" => Ok(Category::Trending),
            "new" | "new-listings" => Ok(Category::New),
            "meme" | "memes" => Ok(Category::Meme),
            "gainers" | "top-gainers" => Ok(Category::Gainers),
            "volume" | "high-volume" => Ok(Category::Volume),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}
