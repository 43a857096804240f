// Cross-cutting prompt fragments shared by every stage.
// Each stage defines its own templates in pipeline/prompts.rs; this file
// holds only the constraints that apply to all of them.

/// The no-fabrication rule, appended to every prompt that writes candidate-facing text.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Use ONLY facts literally present in the provided candidate data. \
    Do NOT infer, interpolate, or invent skills, certifications, languages, \
    employers, dates, degrees, or institutions. \
    If the data does not support a claim, omit it entirely. \
    Rephrasing and reordering verified facts is allowed; adding to them is not.";

/// Instruction for extraction-style prompts: absent data stays absent.
pub const NULL_FOR_MISSING_INSTRUCTION: &str = "\
    If a field is not present in the source text, use null (for scalars) or an \
    empty array (for lists). NEVER guess or fill in plausible-looking values.";
