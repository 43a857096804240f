// All LLM prompt constants for the pipeline stages.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for fact extraction — literal facts only, strict JSON.
pub const EXTRACTION_SYSTEM: &str =
    "You are a meticulous CV data extractor. \
    You copy facts that are literally present in the source text and nothing else. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT infer or invent any value that is not written in the source.";

/// Fact extraction prompt template.
/// Replace: {null_instruction}, {source_text}
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the candidate's facts from the source documents below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Jane Doe",
  "email": "jane@example.com",
  "phone": "+49 151 0000000",
  "linkedin": "linkedin.com/in/janedoe",
  "location": "Berlin, Germany",
  "nationality": null,
  "visa_status": null,
  "current_title": "Senior Product Manager",
  "years_experience": "5 years",
  "skills": ["Agile", "SQL"],
  "experience": [
    {
      "title": "Senior Product Manager",
      "company": "Acme GmbH",
      "location": "Berlin",
      "dates": "2021 - present",
      "achievements": ["Launched the self-serve onboarding flow"]
    }
  ],
  "education": [
    {"degree": "BSc Computer Science", "institution": "TU Berlin", "year": "2016"}
  ],
  "certifications": ["CSPO"],
  "languages": [
    {"language": "English", "level": "Fluent"}
  ]
}

Rules:
- Every value must appear VERBATIM in the source text. Copy, never paraphrase.
- {null_instruction}
- Keep experience entries in the order they appear in the source.
- Skills are individual items, not sentences.

SOURCE DOCUMENTS:
{source_text}"#;

/// System prompt for job requirement analysis.
pub const JOB_ANALYSIS_SYSTEM: &str =
    "You are an expert job description analyst. \
    Parse a job posting and extract its structured requirements. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job analysis prompt template.
/// Replace: {job_text}
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following job posting.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_title": "Senior Product Manager",
  "company": "Acme GmbH",
  "required_skills": ["Agile", "SQL"],
  "preferred_skills": ["Roadmapping"],
  "key_responsibilities": ["Own the product roadmap"],
  "years_required": "5+ years",
  "must_haves": ["Right to work in the EU"],
  "keywords": ["product", "B2B", "SaaS"]
}

Rules:
- required_skills: explicit must-have skills ("required", "must have", "you need").
- preferred_skills: nice-to-haves ("preferred", "a plus", "bonus").
- keywords: recurring terms an applicant-tracking system would scan for.
- years_required: null if the posting names no minimum experience.

JOB POSTING:
{job_text}"#;

/// System prompt for CV tailoring — rephrase and reorder only.
pub const TAILOR_SYSTEM: &str =
    "You are an expert CV writer who works ONLY from verified facts. \
    You rephrase and reorder the candidate's real experience to emphasize \
    relevance to a target job. \
    You NEVER invent skills, certifications, languages, or qualifications, and \
    you NEVER alter names, contact details, companies, dates, degrees, or \
    institutions. \
    You MUST respond with valid JSON only, with no text outside the JSON object \
    and no markdown code fences.";

/// CV tailoring prompt template.
/// Replace: {no_fabrication}, {profile_json}, {requirements_json}, {gap_json}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"{no_fabrication}

VERIFIED CANDIDATE FACTS (the ONLY source of truth):
{profile_json}

TARGET JOB REQUIREMENTS:
{requirements_json}

SKILL GAP REPORT (matched skills to emphasize, missing skills to NOT claim):
{gap_json}

Write a tailored CV for this candidate. Return a JSON object with this EXACT schema:
{
  "name": "copied from facts",
  "contact": {"email": null, "phone": null, "linkedin": null, "location": null},
  "nationality": null,
  "visa_status": null,
  "headline": "one line positioning the candidate for THIS job",
  "summary": "3-4 sentences grounded in the verified facts",
  "core_competencies": [
    {"category": "Product", "skills": ["Agile", "SQL"]}
  ],
  "experience": [
    {
      "title": "copied from facts",
      "company": "copied from facts",
      "location": null,
      "dates": "copied from facts",
      "achievements": ["rephrased from the verified achievements"]
    }
  ],
  "education": [],
  "certifications": [],
  "languages": []
}

HARD RULES:
1. Emphasize matched skills from the gap report; NEVER claim the missing ones.
2. Reorder experience bullets so the most job-relevant come first.
3. Group core_competencies only from skills present in the verified facts.
4. Copy education, certifications, and languages unchanged — do not add or drop entries.
5. Every noun in the summary must be traceable to the verified facts."#;

/// System prompt for the cover letter — same verified-facts-only rule.
pub const COVER_LETTER_SYSTEM: &str =
    "You are an expert cover-letter writer who works ONLY from verified facts \
    about the candidate. You never claim qualifications the facts do not support. \
    You MUST respond with valid JSON only, with no text outside the JSON object \
    and no markdown code fences.";

/// Cover letter prompt template.
/// Replace: {no_fabrication}, {profile_json}, {job_title}, {company}, {requirements_json}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"{no_fabrication}

VERIFIED CANDIDATE FACTS:
{profile_json}

TARGET ROLE: {job_title} at {company}

JOB REQUIREMENTS:
{requirements_json}

Write a cover letter of 4-5 SHORT paragraphs. Return a JSON object with this EXACT schema:
{
  "recipient_name": null,
  "company_name": "{company}",
  "job_title": "{job_title}",
  "opening": "one short paragraph naming the role and the candidate's strongest relevant fact",
  "body": ["paragraph 2", "paragraph 3", "optional paragraph 4"],
  "closing": "one short closing paragraph"
}

HARD RULES:
1. Reference only achievements present in the verified facts.
2. Keep each paragraph under 4 sentences.
3. recipient_name stays null unless the job posting names a contact person."#;
