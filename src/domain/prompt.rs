//! Prompt construction for topic item generation
//!
//! The user prompt text is the cache key input: its exact wording is frozen,
//! since any change invalidates every previously cached generation.

/// Fixed instruction prompt sent as the system message.
///
/// Not part of the cache address; only the user prompt is hashed.
const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates lists of names and \
descriptions of things from a given topic. Follow these guidelines:\n\
* You always create a list of 20 names and descriptions.\n\
* The name should always be a single word.\n\
* The description should have 2 parts: the first part is a short description about what it is \
in the context of the topic with no unnecessary adjectives. The second part is another short \
sentence that describes objective attributes of the item with no unnecessary adjectives; this \
sentence should be useful if I wanted to use this item to describe something else. Here's an \
example: Orion - A prominent constellation containing some very bright stars. It's a \
collection of things of different sizes. Another example is: Vega - One of the brightest \
stars we can see. It's large and bright.\n\
* The description should be no more than 2 sentences and each sentence should be short and \
concise with no extra words or unnecessary adjectives.\n\
* There should never be a single or double quote in any of the names or descriptions.\n\
Your output should be a JSON array that follows this schema, it should not have any markdown: \
[{\"name\": \"name1\", \"desc\": \"description1\"}, {\"name\": \"name2\", \"desc\": \"description2\"}, ...]";

/// Returns the fixed system prompt. Byte-stable across calls.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Builds the user prompt for a topic, optionally excluding items.
///
/// The exclusion clause is only appended when `exclude` is present and
/// non-empty, so `user_prompt("birds", None)` and
/// `user_prompt("birds", Some("eagle"))` address different cache entries.
pub fn user_prompt(topic: &str, exclude: Option<&str>) -> String {
    match exclude {
        Some(excluded) if !excluded.is_empty() => format!(
            "Generate a JSON list of names and descriptions for things in this topic: {topic} \
             but not any of these items: {excluded}"
        ),
        _ => format!("Generate a JSON list of names and descriptions for things in this topic: {topic}"),
    }
}
