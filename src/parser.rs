// Copyright (c) 2025 Wealthtrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Free-text to draft-transaction parsing. The remote path talks to the
//! Gemini generateContent API; when the key is missing or the call fails
//! in any way, a deterministic regex/keyword fallback takes over. Either
//! way, a result without a usable amount means "no draft" — never an
//! error surfaced to the caller.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DEFAULT_CURRENCY, Transaction, TxKind};
use crate::utils::{http_client, midnight, parse_timestamp};

const GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("GEMINI_API_KEY is not set")]
    MissingKey,
    #[error("parser request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("parser returned no content")]
    EmptyResponse,
    #[error("parser returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Best-effort partial transaction record. Every field may be absent and
/// none may be assumed complete.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub merchant: Option<String>,
    pub note: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TxKind>,
}

impl Draft {
    /// Fills in defaults and mints an id. Returns `None` without a usable
    /// non-negative amount — no draft to confirm, not an error.
    pub fn into_transaction(self, today: NaiveDate) -> Option<Transaction> {
        let amount = self.amount.filter(|a| !a.is_sign_negative())?;
        let date = self
            .date
            .as_deref()
            .and_then(|s| parse_timestamp(s).ok())
            .unwrap_or_else(|| midnight(today));
        Some(Transaction {
            id: Uuid::new_v4().to_string(),
            amount,
            currency: self
                .currency
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            category: self
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "Other".to_string()),
            merchant: self.merchant.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
            date,
            kind: self.kind.unwrap_or(TxKind::Expense),
            is_fixed: false,
        })
    }
}

/// Parses free text into a draft, remote first, offline fallback second.
/// Returns `None` when neither path yields an amount.
pub fn parse_text(text: &str, today: NaiveDate, categories: &[String]) -> Option<Draft> {
    let draft = match remote_parse(text, today, categories) {
        Ok(d) => d,
        Err(_) => offline_parse(text, today),
    };
    if draft.amount.is_some() { Some(draft) } else { None }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

fn remote_parse(text: &str, today: NaiveDate, categories: &[String]) -> Result<Draft, ParseError> {
    let key = std::env::var("GEMINI_API_KEY").map_err(|_| ParseError::MissingKey)?;
    let prompt = format!(
        "Parse this financial transaction entry into a JSON object: \"{}\".\n\
         Available categories: {}.\n\
         Current date is {}.\n\
         Determine if it is an 'expense' or 'income'.\n\
         If a specific date or relative date (like 'yesterday') is mentioned, \
         parse it correctly into YYYY-MM-DD.\n\
         Respond with a single JSON object using the keys amount (number), \
         currency, category, merchant, note, date, type.",
        text,
        categories.join(", "),
        today,
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    });
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{GEMINI_MODEL}:generateContent?key={key}"
    );

    let client = http_client()?;
    let resp = client.post(url).json(&body).send()?.error_for_status()?;
    let payload: GenerateResponse = resp.json()?;
    let raw = payload
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(ParseError::EmptyResponse)?;
    draft_from_json(&raw)
}

/// Decodes a draft from model output, tolerating Markdown code fences.
pub fn draft_from_json(raw: &str) -> Result<Draft, ParseError> {
    let mut s = raw.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    Ok(serde_json::from_str(s.trim())?)
}

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(rm|myr|usd|eur|gbp|\$)?\s*([0-9]+(?:\.[0-9]{1,2})?)\b").unwrap()
});

static MERCHANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:at|from)\s+([A-Za-z][A-Za-z0-9&'.-]*)").unwrap());

const INCOME_HINTS: [&str; 7] = [
    "salary",
    "payday",
    "received",
    "refund",
    "bonus",
    "freelance",
    "income",
];

const CATEGORY_HINTS: [(&str, &str); 18] = [
    ("lunch", "Food & Drink"),
    ("dinner", "Food & Drink"),
    ("breakfast", "Food & Drink"),
    ("coffee", "Food & Drink"),
    ("food", "Food & Drink"),
    ("grab", "Transport"),
    ("taxi", "Transport"),
    ("bus", "Transport"),
    ("train", "Transport"),
    ("petrol", "Transport"),
    ("fuel", "Transport"),
    ("grocer", "Groceries"),
    ("movie", "Entertainment"),
    ("gym", "Health"),
    ("pharmacy", "Health"),
    ("electric", "Utilities"),
    ("salary", "Salary"),
    ("freelance", "Freelance"),
];

/// Deterministic local parser: regex for the amount and currency, keyword
/// tables for type and category, "today"/"yesterday" resolved against the
/// supplied current date.
pub fn offline_parse(text: &str, today: NaiveDate) -> Draft {
    let lower = text.to_lowercase();

    let mut amount = None;
    let mut currency = None;
    if let Some(caps) = AMOUNT_RE.captures(text) {
        amount = caps.get(2).and_then(|m| m.as_str().parse::<Decimal>().ok());
        currency = caps.get(1).map(|m| match m.as_str().to_uppercase().as_str() {
            "$" | "USD" => "USD".to_string(),
            "MYR" | "RM" => "RM".to_string(),
            other => other.to_string(),
        });
    }

    let kind = if INCOME_HINTS.iter().any(|hint| lower.contains(hint)) {
        TxKind::Income
    } else {
        TxKind::Expense
    };

    let category = CATEGORY_HINTS
        .iter()
        .find(|(hint, _)| lower.contains(hint))
        .map(|(_, cat)| cat.to_string());

    let date = if lower.contains("yesterday") {
        Some((today - Duration::days(1)).to_string())
    } else if lower.contains("today") {
        Some(today.to_string())
    } else {
        None
    };

    let merchant = MERCHANT_RE
        .captures(text)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .filter(|m| {
            let l = m.to_lowercase();
            l != "yesterday" && l != "today"
        });

    Draft {
        amount,
        currency,
        category,
        merchant,
        note: None,
        date,
        kind: Some(kind),
    }
}
