use crate::bot::PostDraft;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonPost {
    original: String,
    transformed: String,
    post: String,
}

pub fn print_post(draft: &PostDraft, post: &str, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_post(draft, post, colored_output),
        OutputFormat::Json => print_json_post(draft, post),
    }
}

fn print_text_post(draft: &PostDraft, post: &str, colored_output: bool) {
    if colored_output {
        // The post always opens with "<original>? "; highlight the rest.
        let rest = post.get(draft.original.len() + 2..).unwrap_or(post);
        println!("{}? {}", draft.original.dimmed(), rest.green().bold());
    } else {
        println!("{}", post);
    }
}

fn print_json_post(draft: &PostDraft, post: &str) {
    let output = JsonPost {
        original: draft.original.clone(),
        transformed: draft.transformed.clone(),
        post: post.to_string(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

pub fn print_no_topic_summary(candidate_count: usize, colored_output: bool) {
    let message = format!(
        "No transformable topic among {} candidate{}",
        candidate_count,
        if candidate_count == 1 { "" } else { "s" }
    );
    if colored_output {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("✗ {}", message);
    }
}
