use serde::{Deserialize, Serialize};

/// Structured resume content rendered by the templates.
///
/// Every field is optional on the wire; absent fields render as nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub dates: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

impl ResumeDocument {
    /// Fixed sample used for template previews.
    pub fn sample() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "(555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            linkedin: "https://linkedin.com/in/johndoe".into(),
            github: "https://github.com/johndoe".into(),
            website: String::new(),
            summary: "Experienced software engineer with 5+ years of expertise in full-stack development."
                .into(),
            experience: vec![
                ExperienceEntry {
                    title: "Senior Software Engineer".into(),
                    company: "Tech Company Inc.".into(),
                    location: "San Francisco, CA".into(),
                    dates: "2022 - Present".into(),
                    responsibilities: strings(&[
                        "Led development of microservices architecture",
                        "Mentored junior developers",
                        "Improved system performance by 40%",
                    ]),
                },
                ExperienceEntry {
                    title: "Software Engineer".into(),
                    company: "Startup Co.".into(),
                    location: "New York, NY".into(),
                    dates: "2019 - 2022".into(),
                    responsibilities: strings(&[
                        "Developed RESTful APIs",
                        "Built React frontend applications",
                    ]),
                },
            ],
            education: vec![EducationEntry {
                degree: "B.S. Computer Science".into(),
                institution: "University of California, Berkeley".into(),
                dates: "2015 - 2019".into(),
                gpa: "3.8".into(),
            }],
            skills: strings(&[
                "Python",
                "JavaScript",
                "React",
                "Node.js",
                "AWS",
                "Docker",
                "PostgreSQL",
            ]),
            projects: vec![ProjectEntry {
                name: "Open Source Project".into(),
                description: "Contributed to popular open source framework".into(),
                technologies: strings(&["Python", "FastAPI"]),
            }],
            certifications: strings(&[
                "AWS Certified Solutions Architect",
                "Google Cloud Professional",
            ]),
        }
    }
}
