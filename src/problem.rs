use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    /// Case-insensitive parse of "easy", "medium" or "hard".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" => Some(DifficultyLevel::Medium),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// A problem solved in this workspace.
#[derive(Debug, Clone)]
pub struct Problem {
    pub id: u32,
    pub title: &'static str,
    pub slug: &'static str,
    pub difficulty: DifficultyLevel,
    pub topics: &'static [&'static str],
}

const PROBLEMS: &[Problem] = &[
    Problem {
        id: 1,
        title: "Two Sum",
        slug: "two-sum",
        difficulty: DifficultyLevel::Easy,
        topics: &["Array", "Hash Table"],
    },
    Problem {
        id: 217,
        title: "Contains Duplicate",
        slug: "contains-duplicate",
        difficulty: DifficultyLevel::Easy,
        topics: &["Array", "Hash Table", "Sorting"],
    },
];

impl Problem {
    pub fn all() -> &'static [Problem] {
        PROBLEMS
    }

    pub fn by_id(id: u32) -> Option<&'static Problem> {
        PROBLEMS.iter().find(|p| p.id == id)
    }

    /// Directory holding the solution crate, e.g. `0001_two_sum`.
    pub fn dir_name(&self) -> String {
        format!("{:04}_{}", self.id, self.slug.replace('-', "_"))
    }

    pub fn url(&self) -> String {
        format!("https://leetcode.com/problems/{}/", self.slug)
    }
}
