/*!
 * Prompt construction for the generation flows.
 *
 * Prompts are rendered from fixed instruction templates; every caller-supplied
 * value is embedded verbatim so the backend sees full context.
 */

pub use self::templates::{
    PromptTemplate, explanation_prompt, quiz_prompt, re_explanation_prompt, scene_graph_prompt,
};

pub mod templates;
