// Matching module LLM prompt templates.

pub const JOB_ANALYSIS_SYSTEM: &str = r#"You are a career coach and resume expert.
Analyze how well the candidate's resume matches the job description.
Provide:
1. An overall match score (0-100)
2. Matching skills (skills in the resume that match the job requirements)
3. Missing skills (skills in the job description that are not in the resume)
4. Recommendations to improve the resume for this specific job

Return a JSON object with EXACTLY this schema:
{
  "matchScore": 0-100,
  "matchingSkills": ["string"],
  "missingSkills": ["string"],
  "recommendations": ["string"]
}"#;

/// Replace `{resume_text}` and `{job_description}` before sending.
pub const JOB_ANALYSIS_PROMPT: &str = "Resume:\n{resume_text}\n\nJob Description:\n{job_description}";
