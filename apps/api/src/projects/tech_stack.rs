use crate::models::repository::RawRepository;

/// Topic or name fragment → display name.
const TECH_MAPPING: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("nodejs", "Node.js"),
    ("express", "Express"),
    ("unity", "Unity"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("firebase", "Firebase"),
    ("mongodb", "MongoDB"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("redis", "Redis"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("aws", "AWS"),
    ("gcp", "Google Cloud"),
    ("azure", "Azure"),
];

fn display_name(key: &str) -> Option<&'static str> {
    TECH_MAPPING
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, display)| *display)
}

/// Technologies shown on a project card: primary language, mapped topics,
/// then mapped fragments of the repository name. No duplicates.
pub fn tech_stack(repo: &RawRepository) -> Vec<String> {
    tech_stack_parts(&repo.name, repo.language.as_deref(), &repo.topics)
}

pub fn tech_stack_parts(name: &str, language: Option<&str>, topics: &[String]) -> Vec<String> {
    let name = name.to_lowercase();
    let mut stack: Vec<String> = Vec::new();
    let mut push = |tech: &str| {
        if !stack.iter().any(|existing| existing == tech) {
            stack.push(tech.to_string());
        }
    };

    if let Some(language) = language {
        push(language);
    }
    for display in topics.iter().filter_map(|t| display_name(t)) {
        push(display);
    }
    for (key, display) in TECH_MAPPING {
        if name.contains(*key) {
            push(*display);
        }
    }

    stack
}
