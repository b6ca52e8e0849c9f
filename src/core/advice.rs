//! Advice engine
//!
//! Ranks better-paying job titles among similar profiles and attaches the
//! static tip and course tables.

use std::collections::BTreeMap;

use crate::config::AdviceSettings;
use crate::core::data::{BetterRole, Bracket, HistoricalRecord, QueryInput, RecommendationBundle};

/// Lower bound of the mid-career bracket
pub const MID_BRACKET_FLOOR: f64 = 500_000.0;
/// Lower bound of the senior bracket
pub const SENIOR_BRACKET_FLOOR: f64 = 1_000_000.0;

static EARLY_TIPS: [&str; 3] = [
    "Consider enhancing your skill set with online certifications.",
    "Build a strong LinkedIn and GitHub profile.",
    "Attend tech meetups, webinars, and job fairs.",
];

static MID_TIPS: [&str; 3] = [
    "Work towards leadership or specialization roles.",
    "Consider certifications in project management or domain-specific tools.",
    "Improve soft skills like communication and negotiation.",
];

static SENIOR_TIPS: [&str; 3] = [
    "You're in a high-paying bracket! Consider mentoring juniors.",
    "Take executive or leadership courses for career growth.",
    "Explore options in tech consulting or product ownership.",
];

static COURSE_MAP: [(&str, [&str; 3]); 5] = [
    (
        "Data Analyst",
        [
            "Google Data Analytics Professional Certificate",
            "Excel to MySQL – Duke University (Coursera)",
            "Tableau for Beginners – Udemy",
        ],
    ),
    (
        "Software Engineer",
        [
            "DSA Masterclass – Love Babbar",
            "System Design Primer – GitHub",
            "Clean Code – Robert C. Martin",
        ],
    ),
    (
        "Machine Learning Engineer",
        [
            "Machine Learning Specialization – Andrew Ng",
            "Deep Learning A-Z – Udemy",
            "ML Ops – Coursera",
        ],
    ),
    (
        "Web Developer",
        [
            "The Web Developer Bootcamp – Colt Steele",
            "Full Stack Open – University of Helsinki",
            "Frontend Masters – JavaScript Path",
        ],
    ),
    (
        "Cybersecurity Analyst",
        [
            "Google Cybersecurity Certificate",
            "CompTIA Security+ Bootcamp – Udemy",
            "Network Security Essentials – Coursera",
        ],
    ),
];

static FALLBACK_COURSES: [&str; 3] = [
    "LinkedIn Learning: Top Skills for 2025",
    "Coursera: Career Success Specialization",
    "Udemy: Career Development Pathway",
];

/// Pure recommendation logic over an injected set of historical records
#[derive(Debug, Clone)]
pub struct AdviceEngine {
    settings: AdviceSettings,
}

impl AdviceEngine {
    pub fn new(settings: AdviceSettings) -> Self {
        Self { settings }
    }

    /// Build the full recommendation bundle for one estimate
    pub fn recommend(
        &self,
        predicted: f64,
        query: &QueryInput,
        history: &[HistoricalRecord],
    ) -> RecommendationBundle {
        let better_roles = self.better_roles(predicted, query, history);
        let bracket = bracket_for(predicted);

        tracing::debug!(
            predicted,
            roles = better_roles.len(),
            bracket = bracket.label(),
            "built recommendation bundle"
        );

        RecommendationBundle {
            predicted_salary: predicted,
            already_top_tier: better_roles.is_empty(),
            better_roles,
            bracket,
            tips: career_tips(bracket).iter().map(|t| t.to_string()).collect(),
            courses: courses_for(&query.job_title).iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Job titles whose similar-profile average beats the estimate, best first
    ///
    /// Equal averages are ordered by job title so output is deterministic.
    pub fn better_roles(
        &self,
        predicted: f64,
        query: &QueryInput,
        history: &[HistoricalRecord],
    ) -> Vec<BetterRole> {
        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

        for record in history
            .iter()
            .filter(|r| r.is_similar_to(query, self.settings.experience_window))
        {
            let entry = groups.entry(record.job_title.as_str()).or_insert((0.0, 0));
            entry.0 += record.salary;
            entry.1 += 1;
        }

        tracing::debug!(titles = groups.len(), "grouped similar profiles");

        let mut averages: Vec<BetterRole> = groups
            .into_iter()
            .map(|(title, (total, count))| BetterRole {
                job_title: title.to_string(),
                average_salary: total / count as f64,
            })
            .filter(|role| role.average_salary > predicted)
            .collect();

        averages.sort_by(|a, b| {
            b.average_salary
                .total_cmp(&a.average_salary)
                .then_with(|| a.job_title.cmp(&b.job_title))
        });
        averages.truncate(self.settings.max_roles);
        averages
    }
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new(AdviceSettings::default())
    }
}

/// Salary bracket for an estimate; each bracket includes its lower bound
pub fn bracket_for(predicted: f64) -> Bracket {
    if predicted < MID_BRACKET_FLOOR {
        Bracket::Early
    } else if predicted < SENIOR_BRACKET_FLOOR {
        Bracket::Mid
    } else {
        Bracket::Senior
    }
}

/// Generic career tips for a bracket
pub fn career_tips(bracket: Bracket) -> &'static [&'static str] {
    match bracket {
        Bracket::Early => &EARLY_TIPS,
        Bracket::Mid => &MID_TIPS,
        Bracket::Senior => &SENIOR_TIPS,
    }
}

/// Suggested courses for an exact job title, or the generic fallback list
pub fn courses_for(job_title: &str) -> &'static [&'static str] {
    COURSE_MAP
        .iter()
        .find(|(title, _)| *title == job_title)
        .map(|(_, courses)| courses.as_slice())
        .unwrap_or(&FALLBACK_COURSES)
}
