//! Plain-text résumé generator.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub contact: ResumeContact,
    pub summary: String,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResumeContact {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub plm: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

impl Resume {
    /// Download name, e.g. `Ada_Lovelace_Resume.txt`.
    pub fn file_name(&self) -> String {
        let name = self.name.split_whitespace().collect::<Vec<_>>().join("_");

        format!("{name}_Resume.txt")
    }

    pub fn render(&self) -> String {
        let experience = self
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "\n{} - {}\n{}\n{}\n",
                    exp.title,
                    exp.company,
                    exp.period,
                    bullets(&exp.achievements)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let education = self
            .education
            .iter()
            .map(|edu| format!("\n{}\n{} | {}\n", edu.degree, edu.institution, edu.period))
            .collect::<Vec<_>>()
            .join("\n");

        let text = format!(
            "{name}\n{title}\nPhone: {phone} | Email: {email}\n\n\
             SUMMARY\n{summary}\n\n\
             TECHNICAL SKILLS\n\
             Languages & Frameworks: {languages}\n\
             Databases: {databases}\n\
             Tools & Platforms: {tools}\n\
             PLM Software: {plm}\n\n\
             PROFESSIONAL EXPERIENCE\n{experience}\n\n\
             EDUCATION\n{education}\n\n\
             CERTIFICATIONS\n{certifications}",
            name = self.name.to_uppercase(),
            title = self.title,
            phone = self.contact.phone,
            email = self.contact.email,
            summary = self.summary,
            languages = self.skills.languages.join(", "),
            databases = self.skills.databases.join(", "),
            tools = self.skills.tools.join(", "),
            plm = self.skills.plm.join(", "),
            certifications = bullets(&self.certifications),
        );

        text.trim().to_owned()
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
