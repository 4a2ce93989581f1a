//! Pattern processing API
//!
//! This module exposes the pipeline stages behind `"stage-format"`
//! strings, so callers (the CLI in particular) can ask for token dumps or
//! tree diagrams without touching the components directly.

use std::fmt;

use serde::Serialize;

use crate::pattern::builder;
use crate::pattern::diagram;
use crate::pattern::lexer::Token;
use crate::pattern::listener::ParseError;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Token,
    Tree,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Diagram,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "tree-diagram"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "token" => ProcessingStage::Token,
            "tree" => ProcessingStage::Tree,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "diagram" => OutputFormat::Diagram,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1..].join("-"))),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::Tree, OutputFormat::Diagram) => {}
            (ProcessingStage::Tree, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for tree stage (only 'diagram' is supported)",
                    format
                )))
            }
            (ProcessingStage::Token, OutputFormat::Diagram) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'diagram' only works with tree stage".to_string(),
                ))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Tree,
                format: OutputFormat::Diagram,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Parse(ParseError),
    Json(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::Parse(error) => write!(f, "{}", error),
            ProcessingError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

/// One lexed token paired with the text it matched
#[derive(Serialize)]
struct TokenRecord<'a> {
    token: &'a Token,
    text: &'a str,
}

/// Process a pattern according to the given specification
pub fn process_pattern(input: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let mut lexer = builder::lexer(input);
            let tokens = lexer.tokens().map_err(ProcessingError::Parse)?;
            format_tokens(input, &tokens, &spec.format)
        }
        ProcessingStage::Tree => {
            let tree = builder::parser(input)
                .parse()
                .map_err(ProcessingError::Parse)?;
            match spec.format {
                OutputFormat::Diagram => Ok(diagram::render(&tree)),
                _ => Err(ProcessingError::InvalidFormatType(
                    "Only tree-diagram is supported for the tree stage".to_string(),
                )),
            }
        }
    }
}

/// Format lexed tokens according to the specified format
fn format_tokens(
    source: &str,
    tokens: &[(Token, logos::Span)],
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (token, span) in tokens {
                if token.has_text() {
                    result.push_str(&format!("<{}:{}>", token.name(), &source[span.clone()]));
                } else {
                    result.push_str(&format!("<{}>", token.name()));
                }
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens
                .iter()
                .map(|(token, span)| TokenRecord {
                    token,
                    text: &source[span.clone()],
                })
                .collect();
            serde_json::to_string_pretty(&records)
                .map_err(|e| ProcessingError::Json(e.to_string()))
        }
        OutputFormat::Diagram => Err(ProcessingError::InvalidFormatType(
            "tree-diagram format only works with the tree stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Token => "token",
                    ProcessingStage::Tree => "tree",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::Diagram => "diagram",
                }
            )
        })
        .collect()
}
