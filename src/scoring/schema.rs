use async_openai::types::{ResponseFormat, ResponseFormatJsonSchema};
use serde_json::{Value, json};

/// JSON schema for the grading payload. Field names and nesting mirror
/// [`crate::essay::EssayResult`] exactly; every field is required and no
/// extras are allowed, so a conforming response always deserializes.
///
/// Numeric ranges are deliberately not encoded here. The assessor system
/// prompt states them; the schema only pins down shape and types.
pub fn essay_result_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "overallScore": { "type": "number" },
            "rubricScores": {
                "type": "object",
                "properties": {
                    "content": { "type": "number" },
                    "organization": { "type": "number" },
                    "grammar": { "type": "number" },
                    "vocabulary": { "type": "number" }
                },
                "required": ["content", "organization", "grammar", "vocabulary"],
                "additionalProperties": false
            },
            "metrics": {
                "type": "object",
                "properties": {
                    "wordCount": { "type": "integer" },
                    "sentenceCount": { "type": "integer" },
                    "readabilityScore": { "type": "string" },
                    "lexicalDiversity": { "type": "number" },
                    "sentenceComplexity": { "type": "number" }
                },
                "required": [
                    "wordCount",
                    "sentenceCount",
                    "readabilityScore",
                    "lexicalDiversity",
                    "sentenceComplexity"
                ],
                "additionalProperties": false
            },
            "feedback": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string" },
                        "type": {
                            "type": "string",
                            "description": "Must be 'positive' or 'improvement'",
                            "enum": ["positive", "improvement"]
                        },
                        "text": { "type": "string" }
                    },
                    "required": ["category", "type", "text"],
                    "additionalProperties": false
                }
            },
            "summary": { "type": "string" }
        },
        "required": ["overallScore", "rubricScores", "metrics", "feedback", "summary"],
        "additionalProperties": false
    })
}

/// Response format that constrains the scoring request to
/// [`essay_result_schema`] in strict mode.
pub fn essay_result_response_format() -> ResponseFormat {
    ResponseFormat::JsonSchema {
        json_schema: ResponseFormatJsonSchema {
            name:        "essay_result".to_string(),
            description: Some("Structured grading report for a student essay.".to_string()),
            schema:      Some(essay_result_schema()),
            strict:      Some(true),
        },
    }
}
