//! # Field Keyword Table
//!
//! Maps a field of study to the topical keywords used for content
//! filtering, plus a display emoji and canned fallback prose for when live
//! fetching yields nothing usable. The set of known fields is small and
//! closed; lookups for unknown fields degrade to a generic profile instead
//! of failing.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

pub const ENV_FIELDS_PATH: &str = "FIELD_PROFILES_PATH";
pub const DEFAULT_FIELDS_PATH: &str = "config/field_profiles.json";

/// Emoji used when a field has no profile of its own.
pub const GENERIC_EMOJI: &str = "📰";

/// Per-field personalization profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldProfile {
    /// Topical keywords, matched case-insensitively against content lines.
    /// Non-empty for every known field.
    pub keywords: Vec<String>,
    pub emoji: String,
    /// Canned prose shown when no live content survives filtering.
    pub fallback: String,
}

/// Immutable field → profile table.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldTable {
    profiles: HashMap<String, FieldProfile>,
}

impl FieldTable {
    /// Load from a JSON file (object keyed by field name).
    /// Falls back to `default_seed()` on any read/parse error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str::<HashMap<String, FieldProfile>>(&s)
                .map(|profiles| Self { profiles })
                .unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Load using `$FIELD_PROFILES_PATH` if set, else the default path.
    pub fn load_default() -> Self {
        let path =
            std::env::var(ENV_FIELDS_PATH).unwrap_or_else(|_| DEFAULT_FIELDS_PATH.to_string());
        Self::load_from_file(path)
    }

    pub fn profile(&self, field: &str) -> Option<&FieldProfile> {
        self.profiles.get(field)
    }

    /// Keywords for a field; empty slice for unknown fields.
    pub fn keywords(&self, field: &str) -> &[String] {
        self.profile(field).map(|p| p.keywords.as_slice()).unwrap_or(&[])
    }

    /// Display emoji for a field, or the generic one.
    pub fn emoji_for(&self, field: &str) -> &str {
        self.profile(field).map(|p| p.emoji.as_str()).unwrap_or(GENERIC_EMOJI)
    }

    /// Canned fallback prose for a field, or the generic fallback.
    pub fn fallback_for(&self, field: &str) -> String {
        self.profile(field)
            .map(|p| p.fallback.clone())
            .unwrap_or_else(generic_fallback)
    }

    pub fn known_fields(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|k| k.as_str())
    }

    /// Built-in seed covering the known fields of study.
    pub fn default_seed() -> Self {
        let mut profiles = HashMap::new();

        profiles.insert(
            "Sécurité informatique".to_string(),
            FieldProfile {
                keywords: [
                    "cybersecurity",
                    "security",
                    "hacking",
                    "vulnerability",
                    "encryption",
                    "malware",
                    "firewall",
                    "penetration testing",
                    "ethical hacking",
                    "data breach",
                    "privacy",
                    "authentication",
                    "cryptography",
                    "infosec",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                emoji: "🔒".to_string(),
                fallback: "🔒 Cybersecurity News Highlights:\n\n\
                    • Latest security vulnerabilities and patches\n\
                    • New malware threats and protection methods\n\
                    • Cybersecurity best practices and frameworks\n\
                    • Ethical hacking and penetration testing updates\n\
                    • Privacy regulations and compliance news\n\
                    • Encryption and cryptography developments\n\n\
                    Stay updated with the latest security trends!"
                    .to_string(),
            },
        );

        profiles.insert(
            "Intelligence Artificielle".to_string(),
            FieldProfile {
                keywords: [
                    "artificial intelligence",
                    "machine learning",
                    "deep learning",
                    "AI",
                    "ML",
                    "neural network",
                    "computer vision",
                    "natural language processing",
                    "NLP",
                    "robotics",
                    "automation",
                    "algorithm",
                    "data mining",
                    "predictive analytics",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                emoji: "🤖".to_string(),
                fallback: "🤖 AI & Machine Learning News:\n\n\
                    • Latest AI model releases and breakthroughs\n\
                    • Machine learning research and applications\n\
                    • Computer vision and NLP advancements\n\
                    • AI ethics and responsible AI development\n\
                    • Industry AI adoption and case studies\n\
                    • Open source AI tools and frameworks\n\n\
                    Explore the future of artificial intelligence!"
                    .to_string(),
            },
        );

        // RSD = Réseaux et Systèmes Distribués
        profiles.insert(
            "RSD".to_string(),
            FieldProfile {
                keywords: [
                    "network",
                    "distributed systems",
                    "cloud computing",
                    "microservices",
                    "kubernetes",
                    "docker",
                    "devops",
                    "infrastructure",
                    "scalability",
                    "load balancing",
                    "API",
                    "web services",
                    "system architecture",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                emoji: "🌐".to_string(),
                fallback: "🌐 Networks & Distributed Systems News:\n\n\
                    • Cloud computing and infrastructure updates\n\
                    • Microservices and containerization trends\n\
                    • DevOps tools and best practices\n\
                    • System scalability and performance\n\
                    • API design and web services\n\
                    • Distributed architecture patterns\n\n\
                    Build the next generation of distributed systems!"
                    .to_string(),
            },
        );

        profiles.insert(
            "Sciences des Données".to_string(),
            FieldProfile {
                keywords: [
                    "data science",
                    "big data",
                    "analytics",
                    "statistics",
                    "python",
                    "R",
                    "database",
                    "SQL",
                    "data visualization",
                    "business intelligence",
                    "data mining",
                    "predictive modeling",
                    "machine learning",
                    "AI",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                emoji: "📊".to_string(),
                fallback: "📊 Data Science News:\n\n\
                    • Big data analytics and visualization tools\n\
                    • Statistical methods and data mining techniques\n\
                    • Business intelligence and predictive modeling\n\
                    • Database technologies and data management\n\
                    • Python, R, and data science libraries\n\
                    • Industry data science applications\n\n\
                    Unlock insights from data!"
                    .to_string(),
            },
        );

        // Resin = Réseaux et Systèmes d'Information
        profiles.insert(
            "Resin".to_string(),
            FieldProfile {
                keywords: [
                    "information systems",
                    "network",
                    "database",
                    "enterprise",
                    "ERP",
                    "system administration",
                    "IT management",
                    "infrastructure",
                    "business systems",
                    "data management",
                    "system integration",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                emoji: "💻".to_string(),
                fallback: "💻 Information Systems News:\n\n\
                    • Enterprise system integration\n\
                    • Database management and optimization\n\
                    • IT infrastructure and administration\n\
                    • Business process automation\n\
                    • ERP and information system design\n\
                    • System security and data governance\n\n\
                    Manage information systems effectively!"
                    .to_string(),
            },
        );

        Self { profiles }
    }
}

/// Generic fallback prose for unknown or unspecified fields.
pub fn generic_fallback() -> String {
    "📰 Tech News Headlines:\n\n\
        🤖 AI & Machine Learning updates\n\
        🔒 Cybersecurity developments\n\
        🌐 Network and cloud technologies\n\
        📊 Data science and analytics\n\
        💻 Software development trends\n\n\
        For the latest news, please try again later or check sources directly."
        .to_string()
}
