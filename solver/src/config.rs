//! Runtime configuration resolved from command-line properties and the process environment.
//!
//! Every setting lists the places it may come from, in priority order. The first
//! source that holds a value wins; otherwise the setting's default applies.

use crate::models::IdentityPayload;
use crate::validation::has_text;
use std::collections::HashMap;

pub const DEFAULT_GENERATE_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";
pub const DEFAULT_TEST_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/testWebhook/JAVA";
pub const DEFAULT_PDF_URL: &str =
    "https://drive.google.com/uc?export=download&id=143MR5cLFrlNEuHzzWJ5RHnEWuijuM9X";
pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_REG_NO: &str = "000000";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";

/// A single place a setting can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// `-Dkey=value` supplied on the command line.
    Property(&'static str),
    /// Process environment variable (including anything loaded from `.env`).
    Env(&'static str),
}

pub const GENERATE_URL: &[Source] = &[Source::Property("generate.url"), Source::Env("GENERATE_URL")];
pub const TEST_URL: &[Source] = &[Source::Property("test.url"), Source::Env("TEST_URL")];
pub const PDF_URL: &[Source] = &[Source::Property("pdf.url"), Source::Env("PDF_URL")];
pub const USER_NAME: &[Source] = &[Source::Property("user.name"), Source::Env("USER_NAME")];
pub const USER_REGNO: &[Source] = &[Source::Property("user.regno"), Source::Env("USER_REGNO")];
pub const USER_EMAIL: &[Source] = &[Source::Property("user.email"), Source::Env("USER_EMAIL")];
pub const DRY_RUN: &[Source] = &[
    Source::Property("DRY_RUN"),
    Source::Property("dry.run"),
    Source::Env("DRY_RUN"),
];
pub const DOWNLOAD_PDF: &[Source] = &[
    Source::Property("DOWNLOAD_PDF"),
    Source::Property("download.pdf"),
    Source::Env("DOWNLOAD_PDF"),
];

/// Snapshot of everything configuration may be read from.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl Environment {
    pub fn new(vars: HashMap<String, String>, properties: HashMap<String, String>) -> Self {
        Self { vars, properties }
    }

    /// Captures the current process environment alongside the given properties.
    pub fn from_process(properties: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: std::env::vars().collect(),
            properties: properties.into_iter().collect(),
        }
    }

    pub fn get(&self, source: Source) -> Option<&str> {
        match source {
            Source::Property(key) => self.properties.get(key),
            Source::Env(key) => self.vars.get(key),
        }
        .map(String::as_str)
    }

    /// First value present across `sources`, in order.
    pub fn lookup(&self, sources: &[Source]) -> Option<&str> {
        sources.iter().find_map(|source| self.get(*source))
    }

    pub fn lookup_or(&self, sources: &[Source], default: &str) -> String {
        self.lookup(sources).unwrap_or(default).to_string()
    }

    pub fn flag(&self, sources: &[Source]) -> bool {
        is_truthy(self.lookup(sources))
    }

    /// The answer to submit: env `FINAL_QUERY` when it has text, else property `final.query`.
    pub fn final_query(&self) -> Option<String> {
        [Source::Env("FINAL_QUERY"), Source::Property("final.query")]
            .into_iter()
            .filter_map(|source| self.get(source))
            .find(|value| has_text(value))
            .map(str::to_string)
    }
}

/// `"1"`, `"true"` or `"yes"`, ignoring case and surrounding whitespace.
pub fn is_truthy(value: Option<&str>) -> bool {
    match value {
        Some(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub generate_url: String,
    pub test_url: String,
    pub pdf_url: String,
    pub identity: IdentityPayload,
    pub dry_run: bool,
    pub download_pdf: bool,
    pub final_query: Option<String>,
}

impl RuntimeConfig {
    pub fn resolve(env: &Environment) -> Self {
        Self {
            generate_url: env.lookup_or(GENERATE_URL, DEFAULT_GENERATE_URL),
            test_url: env.lookup_or(TEST_URL, DEFAULT_TEST_URL),
            pdf_url: env.lookup_or(PDF_URL, DEFAULT_PDF_URL),
            identity: IdentityPayload {
                name: env.lookup_or(USER_NAME, DEFAULT_NAME),
                reg_no: env.lookup_or(USER_REGNO, DEFAULT_REG_NO),
                email: env.lookup_or(USER_EMAIL, DEFAULT_EMAIL),
            },
            dry_run: env.flag(DRY_RUN),
            download_pdf: env.flag(DOWNLOAD_PDF),
            final_query: env.final_query(),
        }
    }
}
