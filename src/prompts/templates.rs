/*!
 * Instruction templates for explanation, scene graph, quiz, and
 * re-explanation generation.
 *
 * Templates are plain strings with `{placeholder}` markers; rendering is a
 * literal substitution with no summarization, so downstream generation always
 * receives the caller's exact input. The scene-graph and quiz templates also
 * pin the output formats the extractor and quiz parser rely on.
 */

/// An instruction template with named placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Stage 1: produce a short plain-language explanation of a concept.
    pub const EXPLANATION: &'static str = r#"You are an expert educator for K-12 students who need clear, low-clutter material.
A learner wants to understand: "{concept}".
Write a simple, clear, and concise explanation of this concept using Markdown.
Use short sentences, simple analogies, and bullet points or numbered lists if it helps.
This explanation will be shown to the learner and will also be used to generate a 3D visualization."#;

    /// Stage 2: convert an explanation into a structured JSON scene graph.
    pub const SCENE_GRAPH: &'static str = r#"You are an assistant for an educational 3D visualization tool.
Based on the learner's original request "{concept}" and the following simple explanation, generate a structured JSON scene graph.
Your ONLY output must be a single JSON object.

Explanation:
---
{explanation}
---

CORE MISSION: interpret the meaning of the explanation, not just the words.

JSON OUTPUT STRUCTURE:
- Your entire output MUST be a single JSON object.
- It can have "objects", "relationships", and "sequence" arrays.

RULES FOR "objects":
1. Symbolize abstracts: represent abstract concepts (e.g. 'supply', 'demand', 'fear') as simple, symbolic geometric shapes.
2. Decompose physical things: break physical objects (e.g. 'car', 'snowman') into component parts using the 'parent' property.
3. Properties: every object needs id, shape (lowercase), color, position, size, label, and showLabel.
4. Size rule: 'size' MUST ALWAYS be an array of three numbers: [width, height, depth].
5. Low clutter: limit scenes to essential components.

RULES FOR "relationships":
- Use these for conceptual connections (e.g. 'balances', 'opposes').
- A relationship needs 'from', 'to', 'type' ('line' or 'arrow'), and 'label'.

RULES FOR "sequence":
- If the explanation describes a step-by-step process (like the water cycle or building a snowman), you MUST generate a "sequence" array.
- Each step needs "step", "label", "targetId", "action", and "params".

EXAMPLE 1: ABSTRACT CONCEPT
REQUEST: "show me how supply balances demand"
YOUR OUTPUT:
{
  "objects": [
    { "id": "supply_obj", "shape": "sphere", "color": "royalblue", "position": [-4, 0, 0], "size": [2, 2, 2], "label": "Supply", "showLabel": true },
    { "id": "demand_obj", "shape": "sphere", "color": "tomato", "position": [4, 0, 0], "size": [2, 2, 2], "label": "Demand", "showLabel": true }
  ],
  "relationships": [
    { "from": "supply_obj", "to": "demand_obj", "type": "line", "label": "balances" }
  ]
}

EXAMPLE 2: PROCESS
REQUEST: "the water cycle"
YOUR OUTPUT:
{
  "objects": [
    { "id": "ocean", "shape": "plane", "color": "blue", "position": [0, 0, 0], "size": [10, 10, 0.1], "label": "Ocean", "showLabel": true, "visible": true },
    { "id": "vapor", "shape": "sphere", "color": "lightblue", "position": [0, 0.5, 0], "size": [0.5, 0.5, 0.5], "label": "Vapor", "showLabel": true, "visible": false }
  ],
  "sequence": [
    { "step": 1, "label": "Evaporation", "targetId": "vapor", "action": "appear", "params": {} },
    { "step": 2, "label": "Vapor rises", "targetId": "vapor", "action": "move", "params": { "position": [0, 4, 0] } }
  ]
}"#;

    /// Generate a fixed-format multiple-choice quiz for a concept.
    pub const QUIZ: &'static str = r#"You are a quiz generator for learners who need friendly, low-pressure questions.

Generate exactly 3 multiple choice questions about: "{concept}"

CRITICAL FORMAT RULES:
- Output ONLY the 3 questions, nothing else.
- Each question MUST follow this exact format:

Q1. Question text?
A) option one
B) option two
C) option three
D) option four
Answer: B

Q2. Question text?
A) option one
B) option two
C) option three
D) option four
Answer: D

Q3. Question text?
A) option one
B) option two
C) option three
D) option four
Answer: A

- Make questions friendly and not scary.
- Questions should help check understanding of the concept.
- Make sure one answer is clearly correct.
- No extra text, no introductions, no markdown symbols."#;

    /// Re-explain a concept after an incorrect quiz answer.
    pub const RE_EXPLANATION: &'static str = r#"You are a learning copilot for students working through a quiz.

A student just answered a quiz question incorrectly. Help them understand why.

Concept: "{concept}"
Question: "{question}"
Student chose: {user_answer}
Correct answer: {correct_answer}

Provide a SHORT, gentle re-explanation (2-3 bullet points) that:
- Explains why the correct answer is right
- Helps them understand the specific part of the concept they missed
- Is encouraging and supportive (e.g. "That's okay! Let's think about it this way...")
- Uses simple language, NO markdown symbols like ** or __

Keep it brief and friendly."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render the template, replacing each `{name}` with its value verbatim.
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut rendered = self.template.clone();
        for (name, value) in values {
            rendered = rendered.replace(&format!("{{{}}}", name), value);
        }
        rendered
    }
}

/// Build the stage-1 explanation prompt for a concept.
pub fn explanation_prompt(concept: &str) -> String {
    PromptTemplate::new(PromptTemplate::EXPLANATION).render(&[("concept", concept)])
}

/// Build the stage-2 scene-graph prompt from the stage-1 explanation and the
/// original concept.
pub fn scene_graph_prompt(explanation: &str, concept: &str) -> String {
    PromptTemplate::new(PromptTemplate::SCENE_GRAPH)
        .render(&[("concept", concept), ("explanation", explanation)])
}

/// Build the quiz prompt for a concept.
pub fn quiz_prompt(concept: &str) -> String {
    PromptTemplate::new(PromptTemplate::QUIZ).render(&[("concept", concept)])
}

/// Build the re-explanation prompt for an incorrectly answered question.
pub fn re_explanation_prompt(
    concept: &str,
    question: &str,
    user_answer: &str,
    correct_answer: &str,
) -> String {
    PromptTemplate::new(PromptTemplate::RE_EXPLANATION).render(&[
        ("concept", concept),
        ("question", question),
        ("user_answer", user_answer),
        ("correct_answer", correct_answer),
    ])
}
