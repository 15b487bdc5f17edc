// Prompt templates for AI-assisted LaTeX editing.

/// Placeholders: {latex_code}, {job_section}, {json_instruction}
pub const IMPROVE_TEMPLATE: &str = r#"You are an expert resume writer and LaTeX professional.
Analyze this LaTeX resume and provide suggestions for improvement.

LaTeX Resume:
{latex_code}
{job_section}
Return a JSON object with this structure:
{
    "overall_score": number (0-100),
    "summary": "Brief overall assessment",
    "suggestions": [
        {
            "section": "Section name",
            "issue": "What's wrong",
            "improvement": "How to fix it",
            "priority": "high/medium/low"
        }
    ],
    "improved_sections": {
        "section_name": "Improved LaTeX code for that section"
    }
}

{json_instruction}"#;

/// Placeholders: {job_description}
pub const IMPROVE_JOB_SECTION: &str = r#"
Target Job Description:
{job_description}

Tailor your suggestions to make this resume more relevant for this specific role.
"#;

/// Placeholders: {role}, {company}, {responsibilities}, {json_instruction}
pub const BULLETS_TEMPLATE: &str = r#"Generate 3-5 impactful resume bullet points for the following role.
Use the XYZ formula: Accomplished [X] by [Y], resulting in [Z].
Include metrics and quantifiable results where possible.

Role: {role}
Company: {company}
Responsibilities: {responsibilities}

Return a JSON array of strings:
["Bullet point 1", "Bullet point 2", ...]

{json_instruction}"#;

/// Placeholders: {section_name}, {section_content}
pub const IMPROVE_SECTION_TEMPLATE: &str = r#"Improve this resume {section_name} section for maximum impact.
Keep the LaTeX formatting intact.
Make it more professional, impactful, and ATS-friendly.
Use action verbs and quantify achievements where possible.

Current content:
{section_content}

Return ONLY the improved LaTeX code, no explanations."#;

/// Placeholders: {latex_code}, {json_instruction}
pub const ATS_CHECK_TEMPLATE: &str = r#"Analyze this LaTeX resume for ATS (Applicant Tracking System) compatibility.

LaTeX Resume:
{latex_code}

Return a JSON object with this structure:
{
    "ats_score": number (0-100),
    "issues": ["issue 1", "issue 2", ...],
    "recommendations": ["recommendation 1", "recommendation 2", ...],
    "keyword_analysis": {
        "found_keywords": ["keyword1", "keyword2"],
        "missing_common_keywords": ["keyword1", "keyword2"]
    }
}

{json_instruction}"#;

/// Placeholders: {current_skills}, {job_description}, {json_instruction}
pub const SUGGEST_SKILLS_TEMPLATE: &str = r#"Based on this job description, suggest additional skills that should be added to the resume.
Only suggest skills that are commonly required for this type of role.
Do not suggest skills already listed.

Current skills: {current_skills}

Job Description:
{job_description}

Return a JSON array of suggested skills:
["skill1", "skill2", ...]

{json_instruction}"#;
