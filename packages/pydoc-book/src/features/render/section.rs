//! Heading sections

use std::fmt;

/// `"{#...} {title}\n\n{body}"`, with one `#` per level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub title: String,
    pub body: String,
}

impl Section {
    pub const CHAPTER: u8 = 1;
    pub const ITEM: u8 = 2;
    pub const MEMBER: u8 = 3;

    pub fn new(level: u8, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level {
            f.write_str("#")?;
        }
        write!(f, " {}\n\n{}", self.title, self.body)
    }
}
