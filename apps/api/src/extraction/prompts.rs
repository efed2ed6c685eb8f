// Extraction prompt. One fixed instruction covers both the pasted-text and
// the uploaded-document path.

pub const EXTRACTION_PROMPT: &str = "\
Act as a senior executive recruiter. Perform a deep, multi-pass analysis of the provided CV.

OBJECTIVE:
1. Extract EVERY professional detail with 100% fidelity.
2. Map all research, publications, conference papers, and patents into their respective sections.
3. Synthesize a powerful LinkedIn 'About' section that captures their unique value proposition.
4. Ensure no job role or project is left behind, no matter how small.

Do not rush. Ensure structural integrity and thoroughness in the final JSON response.";

/// Prompt for the pasted-text path: the instruction followed by the CV body.
pub fn text_prompt(cv_text: &str) -> String {
    format!("{EXTRACTION_PROMPT}\n\nCV CONTENT:\n{cv_text}")
}
