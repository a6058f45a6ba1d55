//! Option catalogs offered by the survey wizard.

use serde::Serialize;

use crate::profile::SkillType;

/// Class years offered on the personal info step.
pub const CLASS_YEARS: [&str; 6] = [
    "Freshman",
    "Sophomore",
    "Junior",
    "Senior",
    "Graduate",
    "Alumni",
];

/// A career category and the roles listed under it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerCategory {
    pub category: &'static str,
    pub roles: &'static [&'static str],
}

impl CareerCategory {
    /// Interest labels for every role in this category.
    pub fn interest_labels(&self) -> impl Iterator<Item = String> + '_ {
        self.roles.iter().map(|role| interest_label(self.category, role))
    }
}

/// Build the stored interest label for a category/role pair.
pub fn interest_label(category: &str, role: &str) -> String {
    format!("{} - {}", category, role)
}

pub const CAREER_CATEGORIES: [CareerCategory; 10] = [
    CareerCategory {
        category: "Tech",
        roles: &[
            "Software Engineering",
            "Data Science",
            "Product Management",
            "UX/UI Design",
        ],
    },
    CareerCategory {
        category: "Finance",
        roles: &[
            "Investment Banking",
            "Private Equity",
            "Venture Capital",
            "Asset Management",
        ],
    },
    CareerCategory {
        category: "Consulting",
        roles: &[
            "Management Consulting",
            "Strategy Consulting",
            "Technology Consulting",
        ],
    },
    CareerCategory {
        category: "Healthcare",
        roles: &[
            "Medicine",
            "Biotech",
            "Healthcare Administration",
            "Public Health",
        ],
    },
    CareerCategory {
        category: "Law",
        roles: &[
            "Corporate Law",
            "Public Interest Law",
            "Intellectual Property",
        ],
    },
    CareerCategory {
        category: "Education",
        roles: &["Teaching", "EdTech", "Higher Education Administration"],
    },
    CareerCategory {
        category: "Research",
        roles: &["Academic Research", "Industry Research", "Think Tanks"],
    },
    CareerCategory {
        category: "Entrepreneurship",
        roles: &["Startups", "Social Enterprise", "Innovation"],
    },
    CareerCategory {
        category: "Public Service",
        roles: &[
            "Government",
            "Non-Profit",
            "Policy",
            "International Development",
        ],
    },
    CareerCategory {
        category: "Creative",
        roles: &["Journalism", "Marketing", "Media & Entertainment", "Design"],
    },
];

/// A goal card on the last step. The label is what gets stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const GOAL_OPTIONS: [GoalOption; 5] = [
    GoalOption {
        id: "internship",
        label: "Internship",
        description: "Find summer or semester internship opportunities",
    },
    GoalOption {
        id: "full-time",
        label: "Full-time Job",
        description: "Explore full-time career opportunities",
    },
    GoalOption {
        id: "networking",
        label: "Networking",
        description: "Connect with professionals and expand your network",
    },
    GoalOption {
        id: "exploration",
        label: "Career Exploration",
        description: "Discover different career paths and industries",
    },
    GoalOption {
        id: "skills",
        label: "Skill Development",
        description: "Learn new skills and enhance existing ones",
    },
];

const TECHNICAL_SKILLS: [&str; 13] = [
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "Data Analysis",
    "SQL",
    "Machine Learning",
    "Excel",
    "R",
    "Java",
    "C++",
    "AWS",
    "Docker",
];

const SOFT_SKILLS: [&str; 11] = [
    "Leadership",
    "Communication",
    "Public Speaking",
    "Teamwork",
    "Problem Solving",
    "Project Management",
    "Time Management",
    "Critical Thinking",
    "Adaptability",
    "Creativity",
    "Negotiation",
];

/// Skills suggested for one-click adding.
pub fn suggested_skills(kind: SkillType) -> &'static [&'static str] {
    match kind {
        SkillType::Technical => &TECHNICAL_SKILLS,
        SkillType::Soft => &SOFT_SKILLS,
    }
}
