use std::fmt;

/// Conversation topic the player picks before the card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Friends,
    Couples,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Friends, Category::Couples];

    /// Stable identifier, also used as the pool file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Friends => "friends",
            Category::Couples => "couples",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Friends => "Teman",
            Category::Couples => "Pasangan",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Category::Friends => "Nongkrong & Seru",
            Category::Couples => "Deep Talk & Love",
        }
    }

    pub fn other(&self) -> Category {
        match self {
            Category::Friends => Category::Couples,
            Category::Couples => Category::Friends,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRequest {
    pub seq: u64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResponse {
    pub seq: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing,
}
