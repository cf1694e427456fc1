// Resume module LLM prompt templates.
// All prompts for parsing, skill suggestion and summaries are defined here.

pub const RESUME_PARSE_SYSTEM: &str = r#"You are a resume parsing assistant. Extract the following information from the resume text:
- Full Name
- Email
- Phone
- Skills (as a list)
- Years of Experience
- Education (as a list of objects with degree, institution, and year)
- Work Experience (as a list of objects with title, company, duration, and description)
- Country
- City
- Languages (as a list of objects with language and proficiency)
- German Language Level (None, A1, A2, B1, B2, C1, C2, or Native)
- Availability
- LinkedIn URL
- GitHub URL
- Portfolio URL

Return a JSON object with EXACTLY these keys:
{
  "fullName": "string",
  "email": "string",
  "phone": "string",
  "skills": ["string"],
  "experience": "string",
  "education": [{"degree": "string", "institution": "string", "year": "string"}],
  "workExperience": [{"title": "string", "company": "string", "duration": "string", "description": "string"}],
  "country": "string",
  "city": "string",
  "languages": [{"language": "string", "proficiency": "string"}],
  "germanLevel": "None" | "A1" | "A2" | "B1" | "B2" | "C1" | "C2" | "Native",
  "availability": "string",
  "linkedinUrl": "string",
  "githubUrl": "string",
  "portfolioUrl": "string"
}

RULES:
1. For skills, return an array of strings.
2. For experience, return the number of years as a string.
3. Use null for any field the resume does not mention. Never invent values."#;

pub const SKILL_SUGGEST_SYSTEM: &str = "\
You are a career advisor specialized in tech skills. \
Based on the resume text and current skills, suggest additional relevant skills that would enhance the candidate's profile. \
Focus on technical skills, tools, frameworks, and methodologies that are in demand in the job market. \
Return only a JSON array of strings with the suggested skills, most relevant first. \
Do not include any of the current skills in your suggestions.";

/// Replace `{resume_text}` and `{current_skills}` before sending.
pub const SKILL_SUGGEST_PROMPT: &str = "Resume text: {resume_text}\n\nCurrent skills: {current_skills}";

pub const SUMMARY_SYSTEM: &str = "\
You are a professional resume writer. \
Create a concise, impactful professional summary (2-3 sentences) based on the candidate's information. \
The summary should highlight their experience, key skills, and unique value proposition. \
Write in first person and focus on achievements and expertise.";

/// Replace every `{placeholder}` before sending. Absent values render as `N/A`.
pub const SUMMARY_PROMPT: &str = "\
Name: {name}
Experience: {experience} years
Skills: {skills}
Education: {education}
Work Experience: {work_experience}";
