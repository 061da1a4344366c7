/*!
 * Common test utilities for the vistutor test suite
 */

/// Initialize logging for a test; repeated calls are harmless
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed stage-1 explanation used across pipeline tests
pub const WATER_CYCLE_EXPLANATION: &str =
    "Water evaporates from the ocean, rises as vapor, condenses into clouds, and falls as rain.";

/// A two-object, two-step scene graph body, wrapped in prose and a code fence
/// the way the backend tends to answer
pub fn water_cycle_scene_json() -> String {
    r#"Here is your scene:
```json
{
  "objects": [
    { "id": "ocean", "shape": "plane", "color": "blue", "position": [0, 0, 0], "size": [10, 10, 0.1], "label": "Ocean", "showLabel": true, "visible": true },
    { "id": "vapor", "shape": "sphere", "color": "lightblue", "position": [0, 0.5, 0], "size": [0.5, 0.5, 0.5], "label": "Vapor", "showLabel": true, "visible": false }
  ],
  "sequence": [
    { "step": 1, "label": "Evaporation", "targetId": "vapor", "action": "appear", "params": {} },
    { "step": 2, "label": "Vapor rises", "targetId": "vapor", "action": "move", "params": { "position": [0, 4, 0] } }
  ]
}
```"#
        .to_string()
}

/// Three well-formed quiz blocks; the second carries an uppercase answer line
pub fn three_question_quiz_text() -> String {
    "Q1. What makes water rise from the ocean?\n\
     A) Wind\n\
     B) Heat from the sun\n\
     C) Fish\n\
     D) Waves\n\
     Answer: B\n\
     \n\
     Q2. What do water droplets form in the sky?\n\
     A) Rivers\n\
     B) Snow\n\
     C) Clouds\n\
     D) Ice\n\
     Answer: C\n\
     \n\
     Q3. What happens when clouds get heavy?\n\
     A) Rain falls\n\
     B) They disappear\n\
     C) They freeze solid\n\
     D) Nothing\n\
     Answer: A\n"
        .to_string()
}
