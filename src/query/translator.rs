//! C8 Query Translator: resolves a query request into a pattern, then into
//! Cypher, with the spec's three-tier precedence (fluent builder > named
//! template > natural-language match). The resolution-state style —
//! explicit "not found"/"ambiguous" outcomes rather than a bare `Option` —
//! follows the teacher's `QueryContext`/`ResolveResult` in `retrieve.rs`,
//! adapted from CLI-result resolution to query-template resolution.

use crate::query::patterns::Pattern;
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveResult {
    Resolved { pattern: Pattern, confidence: f32 },
    NotFound,
    Ambiguous { candidates: Vec<Pattern> },
}

pub enum QueryInput {
    /// Tier (a): a pattern already constructed via [`crate::query::QueryBuilder`].
    Builder(Pattern),
    /// Tier (b): `templateName(arg1, arg2)` literal call syntax.
    Named(String),
    /// Tier (c): unstructured text, matched against the pattern catalogue.
    Text(String),
}

const CONFIDENCE_THRESHOLD: f32 = 0.5;

pub fn translate(input: QueryInput) -> ResolveResult {
    match input {
        QueryInput::Builder(pattern) => ResolveResult::Resolved { pattern, confidence: 1.0 },
        QueryInput::Named(text) => match resolve_named(&text) {
            Some(pattern) => ResolveResult::Resolved { pattern, confidence: 1.0 },
            None => resolve_natural_language(&text),
        },
        QueryInput::Text(text) => resolve_natural_language(&text),
    }
}

fn resolve_named(text: &str) -> Option<Pattern> {
    let re = Regex::new(r"^(\w+)\((.*)\)$").ok()?;
    let caps = re.captures(text.trim())?;
    let name = &caps[1];
    let args_raw = &caps[2];
    let args: Vec<String> = if args_raw.trim().is_empty() {
        Vec::new()
    } else {
        args_raw
            .split(',')
            .map(|a| a.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .collect()
    };

    pattern_from_name(name, &args)
}

fn pattern_from_name(name: &str, args: &[String]) -> Option<Pattern> {
    match (name, args) {
        ("findCallers", [symbol]) => Some(Pattern::FindCallers { symbol: symbol.clone() }),
        ("findCallees", [symbol]) => Some(Pattern::FindCallees { symbol: symbol.clone() }),
        ("findExports", [file_path]) => Some(Pattern::FindExports { file_path: file_path.clone() }),
        ("findImports", [file_path]) => Some(Pattern::FindImports { file_path: file_path.clone() }),
        ("findDependencies", [file_path]) => Some(Pattern::FindDependencies { file_path: file_path.clone() }),
        ("findDependents", [file_path]) => Some(Pattern::FindDependents { file_path: file_path.clone() }),
        ("findClasses", []) => Some(Pattern::FindClasses),
        ("findClassMembers", [class_name]) => Some(Pattern::FindClassMembers { class_name: class_name.clone() }),
        ("findExtends", [symbol]) => Some(Pattern::FindExtends { symbol: symbol.clone() }),
        ("findImplementations", [interface_name]) => {
            Some(Pattern::FindImplementations { interface_name: interface_name.clone() })
        }
        ("findCallGraph", [symbol, depth]) => depth
            .parse()
            .ok()
            .map(|depth| Pattern::FindCallGraph { symbol: symbol.clone(), depth }),
        ("findCallGraph", [symbol]) => Some(Pattern::FindCallGraph { symbol: symbol.clone(), depth: 2 }),
        ("findUnusedExports", []) => Some(Pattern::FindUnusedExports),
        ("findSymbolsInFile", [file_path]) => Some(Pattern::FindSymbolsInFile { file_path: file_path.clone() }),
        _ => None,
    }
}

struct NlRule {
    regex: &'static str,
    confidence: f32,
    build: fn(&regex::Captures) -> Pattern,
}

fn nl_rules() -> Vec<NlRule> {
    vec![
        NlRule {
            regex: r"(?i)who calls ([\w.$]+)",
            confidence: 0.9,
            build: |c| Pattern::FindCallers { symbol: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)what does ([\w.$]+) call",
            confidence: 0.9,
            build: |c| Pattern::FindCallees { symbol: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)exports (?:of|in) ([\w./-]+)",
            confidence: 0.85,
            build: |c| Pattern::FindExports { file_path: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)imports (?:of|in) ([\w./-]+)",
            confidence: 0.85,
            build: |c| Pattern::FindImports { file_path: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)what does ([\w./-]+) depend on",
            confidence: 0.8,
            build: |c| Pattern::FindDependencies { file_path: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)what depends on ([\w./-]+)",
            confidence: 0.8,
            build: |c| Pattern::FindDependents { file_path: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)^(?:all|list|find) classes$",
            confidence: 0.7,
            build: |_| Pattern::FindClasses,
        },
        NlRule {
            regex: r"(?i)members of (?:class )?([\w.$]+)",
            confidence: 0.8,
            build: |c| Pattern::FindClassMembers { class_name: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)what does ([\w.$]+) extend",
            confidence: 0.8,
            build: |c| Pattern::FindExtends { symbol: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)who implements ([\w.$]+)",
            confidence: 0.8,
            build: |c| Pattern::FindImplementations { interface_name: c[1].to_string() },
        },
        NlRule {
            regex: r"(?i)call graph (?:for|of) ([\w.$]+)",
            confidence: 0.75,
            build: |c| Pattern::FindCallGraph { symbol: c[1].to_string(), depth: 2 },
        },
        NlRule {
            regex: r"(?i)unused exports",
            confidence: 0.7,
            build: |_| Pattern::FindUnusedExports,
        },
        NlRule {
            regex: r"(?i)symbols in ([\w./-]+)",
            confidence: 0.8,
            build: |c| Pattern::FindSymbolsInFile { file_path: c[1].to_string() },
        },
    ]
}

fn resolve_natural_language(text: &str) -> ResolveResult {
    let mut matches: Vec<(Pattern, f32)> = Vec::new();
    for rule in nl_rules() {
        if let Ok(re) = Regex::new(rule.regex) {
            if let Some(caps) = re.captures(text) {
                matches.push(((rule.build)(&caps), rule.confidence));
            }
        }
    }

    matches.retain(|(_, conf)| *conf >= CONFIDENCE_THRESHOLD);

    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => {
            let (pattern, confidence) = matches.remove(0);
            ResolveResult::Resolved { pattern, confidence }
        }
        _ => {
            matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
            let top_confidence = matches[0].1;
            let tied: Vec<_> = matches
                .iter()
                .filter(|(_, c)| (*c - top_confidence).abs() < f32::EPSILON)
                .collect();
            if tied.len() == 1 {
                ResolveResult::Resolved {
                    pattern: matches[0].0.clone(),
                    confidence: matches[0].1,
                }
            } else {
                ResolveResult::Ambiguous {
                    candidates: matches.into_iter().map(|(p, _)| p).collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_always_resolves_with_full_confidence() {
        let result = translate(QueryInput::Builder(Pattern::FindClasses));
        assert_eq!(
            result,
            ResolveResult::Resolved { pattern: Pattern::FindClasses, confidence: 1.0 }
        );
    }

    #[test]
    fn named_template_call_syntax_resolves() {
        let result = translate(QueryInput::Named("findCallers(\"foo\")".to_string()));
        assert_eq!(
            result,
            ResolveResult::Resolved { pattern: Pattern::FindCallers { symbol: "foo".into() }, confidence: 1.0 }
        );
    }

    #[test]
    fn natural_language_matches_who_calls() {
        let result = translate(QueryInput::Text("who calls doThing".to_string()));
        match result {
            ResolveResult::Resolved { pattern, confidence } => {
                assert_eq!(pattern, Pattern::FindCallers { symbol: "doThing".into() });
                assert!(confidence >= 0.5);
            }
            other => panic!("expected resolved, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_text_is_not_found() {
        let result = translate(QueryInput::Text("make me a sandwich".to_string()));
        assert_eq!(result, ResolveResult::NotFound);
    }

    #[test]
    fn named_falls_back_to_natural_language_when_not_call_syntax() {
        let result = translate(QueryInput::Named("who calls foo".to_string()));
        assert!(matches!(result, ResolveResult::Resolved { .. }));
    }
}
