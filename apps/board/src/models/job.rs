use serde::{Deserialize, Serialize};

/// One job posting as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u32,
    pub company: String,
    pub logo: String,
    pub new: bool,
    pub featured: bool,
    pub position: String,
    pub role: String,
    pub level: String,
    pub posted_at: String,
    pub contract: String,
    pub location: String,
    pub languages: Vec<String>,
    pub tools: Vec<String>,
}

impl Job {
    /// Tags in display order: role, level, languages, tools. A tag repeated
    /// across categories is yielded once.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::with_capacity(2 + self.languages.len() + self.tools.len());
        let all = [self.role.as_str(), self.level.as_str()]
            .into_iter()
            .chain(self.languages.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str));
        for tag in all {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.role == tag
            || self.level == tag
            || self.languages.iter().any(|t| t == tag)
            || self.tools.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
pub(crate) fn fixture(id: u32, role: &str, level: &str, languages: &[&str], tools: &[&str]) -> Job {
    Job {
        id,
        company: format!("Company {id}"),
        logo: format!("./images/company-{id}.svg"),
        new: false,
        featured: false,
        position: format!("{role} Developer"),
        role: role.to_string(),
        level: level.to_string(),
        posted_at: "1d ago".to_string(),
        contract: "Full Time".to_string(),
        location: "Remote".to_string(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
    }
}
