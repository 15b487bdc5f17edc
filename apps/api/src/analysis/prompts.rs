// Resume analysis prompt templates.
// Placeholders: {resume_text}, {job_description}, {schema}, {json_instruction}.

/// Output schema shared by both templates.
pub const ANALYSIS_SCHEMA: &str = r#"{
  "ats_score": <integer 0-100>,
  "fit_analysis": "<multi-paragraph assessment as a single string>",
  "improvement_tips": ["<specific, actionable tip>", "..."]
}"#;

/// Used when a substantive job description is supplied.
pub const JOB_MATCH_TEMPLATE: &str = r#"Analyze this resume against the job description and provide a detailed ATS assessment with SPECIFIC, ACTIONABLE improvements based on the EXACT content provided.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

IMPORTANT: Quote exact text from the resume when suggesting improvements. Be specific about what to change, add, or remove.

In "fit_analysis", cover:
- SKILLS ALIGNMENT: technical skills that match the job (name the technologies), experience-level match (junior/mid/senior), domain relevance
- MISSING KEYWORDS: 3-5 exact keywords or skills from the job description that the resume lacks
- EXPERIENCE MATCH: project complexity and relevance, professional experience alignment, education fit, quantified achievements
- OVERALL: a brief summary of candidacy strength

In "improvement_tips", list 5-8 concrete changes, for example:
- Add these job-description keywords: ...
- Replace "[exact text from resume]" with "[improved version with a metric]"
- Rewrite this line with a stronger action verb: "..."
- Fix this ATS formatting issue: ...

"ats_score" estimates how well this resume would pass an ATS screen for THIS job.

Return the result in exactly this JSON shape:
{schema}

{json_instruction}"#;

/// Used when no (or only a trivial) job description is supplied.
pub const GENERAL_TEMPLATE: &str = r#"Analyze this resume and provide a comprehensive ATS assessment with SPECIFIC improvements based on the EXACT content.

RESUME:
{resume_text}

IMPORTANT: Quote actual text from this resume when making suggestions. Provide specific, actionable improvements rather than generic advice.

In "fit_analysis", cover:
- TECHNICAL SKILLS: languages and frameworks identified, skill level, missing in-demand technologies
- PROFESSIONAL EXPERIENCE: quality and relevance, quantified results, career progression
- STRUCTURE & FORMATTING: ATS-friendly layout, section organization, keyword density, contact information and links
- INDUSTRY ADVICE: domain skills to emphasize and certifications worth adding for this background

In "improvement_tips", list 5-8 concrete changes, for example:
- Rewrite this weak description: "[quoted text]" -> "[suggested improvement]"
- Add a metric to: "[quoted vague statement]"
- Add a "[section name]" section containing ...
- Change "[formatting issue]" to "[ATS-friendly format]"

"ats_score" estimates how well this resume would pass a typical ATS screen.

Return the result in exactly this JSON shape:
{schema}

{json_instruction}"#;
