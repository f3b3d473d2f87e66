use crate::models::repository::{ProjectType, RawRepository};

/// Topic rules in priority order; the first rule with any matching topic wins.
const TOPIC_RULES: &[(&[&str], ProjectType)] = &[
    (&["unity"], ProjectType::Unity),
    (&["machine-learning", "ml"], ProjectType::MachineLearning),
    (&["frontend", "web"], ProjectType::Frontend),
    (&["rpi", "raspberry-pi"], ProjectType::RaspberryPi),
    (&["mobile", "android", "ios"], ProjectType::Mobile),
    (&["backend", "api"], ProjectType::Backend),
];

const FRONTEND_LANGUAGES: &[&str] = &["javascript", "typescript", "html", "css"];
const BACKEND_LANGUAGES: &[&str] = &["python", "java", "go", "rust"];

/// Picks the display category of a repository: topics first, then primary language.
pub fn classify(repo: &RawRepository) -> ProjectType {
    classify_parts(&repo.topics, repo.language.as_deref())
}

pub fn classify_parts(topics: &[String], language: Option<&str>) -> ProjectType {
    for (rule_topics, project_type) in TOPIC_RULES {
        if topics.iter().any(|t| rule_topics.contains(&t.as_str())) {
            return *project_type;
        }
    }

    let language = language.unwrap_or_default().to_lowercase();
    if FRONTEND_LANGUAGES.contains(&language.as_str()) {
        ProjectType::Frontend
    } else if BACKEND_LANGUAGES.contains(&language.as_str()) {
        ProjectType::Backend
    } else if language == "c#" {
        ProjectType::Unity
    } else {
        ProjectType::Other
    }
}
