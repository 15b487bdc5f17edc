//! Resume templates: a closed set of variants, each a pure renderer from
//! `ResumeDocument` to LaTeX source.

use serde::{Deserialize, Serialize};

use crate::latex::document::ResumeDocument;
use crate::latex::escape::{escape_latex, escape_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Modern,
    Minimal,
    Academic,
}

type Renderer = fn(&ResumeDocument) -> String;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Modern,
        TemplateKind::Minimal,
        TemplateKind::Academic,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Academic => "academic",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn info(self) -> TemplateInfo {
        let (name, description) = match self {
            TemplateKind::Modern => (
                "Modern",
                "A clean, modern resume template with a professional look",
            ),
            TemplateKind::Minimal => (
                "Minimal",
                "A minimalist resume template with clean typography",
            ),
            TemplateKind::Academic => (
                "Academic",
                "A comprehensive academic CV template suitable for research positions",
            ),
        };
        TemplateInfo {
            id: self.id(),
            name,
            description,
        }
    }

    fn renderer(self) -> Renderer {
        match self {
            TemplateKind::Modern => render_modern,
            TemplateKind::Minimal => render_minimal,
            TemplateKind::Academic => render_academic,
        }
    }

    pub fn render(self, doc: &ResumeDocument) -> String {
        (self.renderer())(doc)
    }
}

pub fn catalogue() -> Vec<TemplateInfo> {
    TemplateKind::ALL.into_iter().map(TemplateKind::info).collect()
}

fn escaped_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| escape_latex(s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Non-empty contact pieces, escaped, joined by `separator`.
fn plain_contact_line(doc: &ResumeDocument, separator: &str) -> String {
    [&doc.email, &doc.phone, &doc.location]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| escape_latex(s))
        .collect::<Vec<_>>()
        .join(separator)
}

fn finish_document(mut out: String, sections: Vec<String>) -> String {
    let body: Vec<String> = sections.into_iter().filter(|s| !s.is_empty()).collect();
    out.push_str(&body.join("\n\n"));
    out.push_str("\n\n\\end{document}\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Modern
// ────────────────────────────────────────────────────────────────────────────

const MODERN_PREAMBLE: &str = r"\documentclass[11pt,a4paper]{article}

% Packages
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage{lmodern}
\usepackage[margin=0.75in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{xcolor}
\usepackage{titlesec}

% Colors
\definecolor{primary}{RGB}{0, 79, 144}
\definecolor{secondary}{RGB}{100, 100, 100}

% Section formatting
\titleformat{\section}{\large\bfseries\color{primary}}{}{0em}{}[\titlerule]
\titlespacing{\section}{0pt}{10pt}{5pt}

% Hyperlink setup
\hypersetup{
    colorlinks=true,
    linkcolor=primary,
    urlcolor=primary
}

% Remove paragraph indentation
\setlength{\parindent}{0pt}

\begin{document}

";

fn render_modern(doc: &ResumeDocument) -> String {
    let header = format!(
        "% Header\n\\begin{{center}}\n    {{\\LARGE\\bfseries {}}}\\\\[5pt]\n    {}\n\\end{{center}}",
        escape_latex(&doc.name),
        modern_contact_line(doc)
    );

    let sections = vec![
        header,
        modern_summary(doc),
        modern_experience(doc),
        modern_education(doc),
        modern_skills(doc),
        modern_projects(doc),
        modern_certifications(doc),
    ];
    finish_document(MODERN_PREAMBLE.to_string(), sections)
}

fn modern_contact_line(doc: &ResumeDocument) -> String {
    let mut items = Vec::new();
    if !doc.email.is_empty() {
        items.push(format!(
            "\\href{{mailto:{}}}{{{}}}",
            escape_url(&doc.email),
            escape_latex(&doc.email)
        ));
    }
    if !doc.phone.is_empty() {
        items.push(escape_latex(&doc.phone));
    }
    if !doc.location.is_empty() {
        items.push(escape_latex(&doc.location));
    }
    for (url, label) in [
        (&doc.linkedin, "LinkedIn"),
        (&doc.github, "GitHub"),
        (&doc.website, "Portfolio"),
    ] {
        if !url.is_empty() {
            items.push(format!("\\href{{{}}}{{{label}}}", escape_url(url)));
        }
    }
    items.join(" $|$ ")
}

fn modern_summary(doc: &ResumeDocument) -> String {
    if doc.summary.is_empty() {
        return String::new();
    }
    format!(
        "\\section*{{Professional Summary}}\n{}",
        escape_latex(&doc.summary)
    )
}

fn modern_experience(doc: &ResumeDocument) -> String {
    if doc.experience.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Experience}\n");
    for exp in &doc.experience {
        out.push_str(&format!(
            "\\textbf{{{}}} \\hfill {}\\\\\n\\textit{{{}}} \\hfill {}\n",
            escape_latex(&exp.title),
            escape_latex(&exp.dates),
            escape_latex(&exp.company),
            escape_latex(&exp.location)
        ));
        // An itemize without items does not compile.
        if !exp.responsibilities.is_empty() {
            out.push_str("\\begin{itemize}[leftmargin=*,noitemsep]\n");
            for item in &exp.responsibilities {
                out.push_str(&format!("    \\item {}\n", escape_latex(item)));
            }
            out.push_str("\\end{itemize}\n");
        }
    }
    out.trim_end().to_string()
}

fn modern_education(doc: &ResumeDocument) -> String {
    if doc.education.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Education}\n");
    for edu in &doc.education {
        let gpa = if edu.gpa.is_empty() {
            String::new()
        } else {
            format!(" (GPA: {})", escape_latex(&edu.gpa))
        };
        out.push_str(&format!(
            "\\textbf{{{}}}{gpa} \\hfill {}\\\\\n\\textit{{{}}}\\\\[5pt]\n",
            escape_latex(&edu.degree),
            escape_latex(&edu.dates),
            escape_latex(&edu.institution)
        ));
    }
    out.trim_end().to_string()
}

fn modern_skills(doc: &ResumeDocument) -> String {
    if doc.skills.is_empty() {
        return String::new();
    }
    format!("\\section*{{Skills}}\n{}", escaped_list(&doc.skills))
}

fn modern_projects(doc: &ResumeDocument) -> String {
    if doc.projects.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Projects}\n");
    for proj in &doc.projects {
        let tech = if proj.technologies.is_empty() {
            String::new()
        } else {
            format!(" \\textit{{({})}}", escaped_list(&proj.technologies))
        };
        out.push_str(&format!(
            "\\textbf{{{}}}{tech}: {}\\\\[3pt]\n",
            escape_latex(&proj.name),
            escape_latex(&proj.description)
        ));
    }
    out.trim_end().to_string()
}

fn modern_certifications(doc: &ResumeDocument) -> String {
    if doc.certifications.is_empty() {
        return String::new();
    }
    let items: Vec<String> = doc
        .certifications
        .iter()
        .map(|c| format!("\\item {}", escape_latex(c)))
        .collect();
    format!(
        "\\section*{{Certifications}}\n\\begin{{itemize}}[leftmargin=*,noitemsep]\n{}\n\\end{{itemize}}",
        items.join("\n")
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal
// ────────────────────────────────────────────────────────────────────────────

const MINIMAL_PREAMBLE: &str = r"\documentclass[11pt,a4paper]{article}

\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[margin=1in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}

\setlength{\parindent}{0pt}
\pagestyle{empty}

\begin{document}

";

fn render_minimal(doc: &ResumeDocument) -> String {
    let header = format!(
        "{{\\Large\\bfseries {}}}\\\\[5pt]\n{}\n\n\\hrule\n\\vspace{{10pt}}",
        escape_latex(&doc.name),
        plain_contact_line(doc, " $\\cdot$ ")
    );

    let mut sections = vec![header];
    if !doc.summary.is_empty() {
        sections.push(format!(
            "\\textbf{{Summary}}\\\\[3pt]\n{}\\\\[10pt]",
            escape_latex(&doc.summary)
        ));
    }
    if !doc.experience.is_empty() {
        let lines: Vec<String> = doc
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "{} at {} \\hfill {}",
                    escape_latex(&exp.title),
                    escape_latex(&exp.company),
                    escape_latex(&exp.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\textbf{{Experience}}\\\\[3pt]\n{}\\\\[10pt]",
            lines.join("\\\\[3pt]\n")
        ));
    }
    if !doc.education.is_empty() {
        let lines: Vec<String> = doc
            .education
            .iter()
            .map(|edu| {
                format!(
                    "{}, {} \\hfill {}",
                    escape_latex(&edu.degree),
                    escape_latex(&edu.institution),
                    escape_latex(&edu.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\textbf{{Education}}\\\\[3pt]\n{}\\\\[10pt]",
            lines.join("\\\\[3pt]\n")
        ));
    }
    if !doc.skills.is_empty() {
        sections.push(format!(
            "\\textbf{{Skills}}\\\\[3pt]\n{}",
            escaped_list(&doc.skills)
        ));
    }
    finish_document(MINIMAL_PREAMBLE.to_string(), sections)
}

// ────────────────────────────────────────────────────────────────────────────
// Academic
// ────────────────────────────────────────────────────────────────────────────

const ACADEMIC_PREAMBLE: &str = r"\documentclass[11pt,a4paper]{article}

\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[margin=1in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{titlesec}

\titleformat{\section}{\large\bfseries}{}{0em}{}[\hrule]
\titlespacing{\section}{0pt}{12pt}{6pt}

\setlength{\parindent}{0pt}
\pagestyle{empty}

\begin{document}

";

fn render_academic(doc: &ResumeDocument) -> String {
    let header = format!(
        "\\begin{{center}}\n{{\\LARGE\\bfseries {}}}\\\\[10pt]\n{}\n\\end{{center}}",
        escape_latex(&doc.name),
        plain_contact_line(doc, " $|$ ")
    );

    let mut sections = vec![header];
    if !doc.education.is_empty() {
        let items: Vec<String> = doc
            .education
            .iter()
            .map(|edu| {
                format!(
                    "\\textbf{{{}}}\\\\{} \\hfill {}\\\\[5pt]",
                    escape_latex(&edu.degree),
                    escape_latex(&edu.institution),
                    escape_latex(&edu.dates)
                )
            })
            .collect();
        sections.push(format!("\\section*{{Education}}\n{}", items.join("\n")));
    }
    if !doc.experience.is_empty() {
        let items: Vec<String> = doc
            .experience
            .iter()
            .map(|exp| {
                format!(
                    "\\textbf{{{}}}, {} \\hfill {}\\\\[5pt]",
                    escape_latex(&exp.title),
                    escape_latex(&exp.company),
                    escape_latex(&exp.dates)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Research Experience}}\n{}",
            items.join("\n")
        ));
    }
    if !doc.skills.is_empty() {
        sections.push(format!(
            "\\section*{{Technical Skills}}\n{}",
            escaped_list(&doc.skills)
        ));
    }
    if !doc.projects.is_empty() {
        let items: Vec<String> = doc
            .projects
            .iter()
            .map(|proj| {
                format!(
                    "\\textbf{{{}}}: {}\\\\[3pt]",
                    escape_latex(&proj.name),
                    escape_latex(&proj.description)
                )
            })
            .collect();
        sections.push(format!(
            "\\section*{{Publications \\& Projects}}\n{}",
            items.join("\n")
        ));
    }
    finish_document(ACADEMIC_PREAMBLE.to_string(), sections)
}
