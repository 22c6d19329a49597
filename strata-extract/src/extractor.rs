//! The extraction core. One pass per pattern family over the input text;
//! earlier families claim their spans so later, looser families cannot
//! re-match the same text.

use strata_core::constants::{
    BASE_EXTRACTION_CONFIDENCE, CONCEPT_CONTEXT_BOOST, LOCATION_SUFFIX_BOOST,
    ORGANIZATION_SUFFIX_BOOST, PERSON_TITLE_BOOST,
};
use strata_core::models::{Confidence, Entity, EntityKind};

use crate::patterns;

/// Window (in bytes) around a concept match scanned for research-context
/// words.
const CONTEXT_WINDOW: usize = 60;

/// Pattern-based entity extractor. Stateless; construction compiles
/// nothing (patterns are lazy statics), so instances are free.
#[derive(Debug, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract candidate entities from `text`.
    ///
    /// Ids are deterministic: `{kind}_{document_id}_{chunk_id}_{index}`
    /// with a running per-call index. One candidate is produced per match
    /// occurrence; duplicate-name merging is the caller's concern. Zero
    /// matches is a normal empty result.
    pub fn extract(&self, text: &str, document_id: &str, chunk_id: &str) -> Vec<Entity> {
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut entities: Vec<Entity> = Vec::new();
        let mut index = 0usize;

        let mut push = |name: &str,
                        kind: EntityKind,
                        confidence: f64,
                        span: (usize, usize),
                        claimed: &mut Vec<(usize, usize)>,
                        entities: &mut Vec<Entity>| {
            claimed.push(span);
            entities.push(Entity {
                id: format!("{}_{}_{}_{}", kind, document_id, chunk_id, index),
                name: name.to_string(),
                kind,
                aliases: aliases_for(name),
                confidence: Confidence::new(confidence),
            });
            index += 1;
        };

        // Family 1: organizations. Claimed first so the person pattern
        // cannot re-match "Acme Inc" as a name.
        for caps in patterns::ORGANIZATION.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let name = format!("{} {}", &caps[1], &caps[2]);
            push(
                &name,
                EntityKind::Organization,
                BASE_EXTRACTION_CONFIDENCE + ORGANIZATION_SUFFIX_BOOST,
                (whole.start(), whole.end()),
                &mut claimed,
                &mut entities,
            );
        }

        // Family 2: person names.
        for caps in patterns::PERSON.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            if overlaps(&claimed, whole.start(), whole.end()) {
                continue;
            }
            let name_match = caps.get(2).unwrap();
            let name = name_match.as_str();
            if ends_with_org_suffix(name) {
                continue;
            }
            let titled = caps.get(1).is_some();
            let confidence = if titled {
                BASE_EXTRACTION_CONFIDENCE + PERSON_TITLE_BOOST
            } else {
                BASE_EXTRACTION_CONFIDENCE
            };
            push(
                name,
                EntityKind::Person,
                confidence,
                (whole.start(), whole.end()),
                &mut claimed,
                &mut entities,
            );
        }

        // Family 3: dates. Sub-patterns in specificity order; the bare-year
        // pattern must not re-match the year inside an ISO date.
        for re in patterns::DATES.iter() {
            for m in re.find_iter(text) {
                if overlaps(&claimed, m.start(), m.end()) {
                    continue;
                }
                push(
                    m.as_str(),
                    EntityKind::Date,
                    BASE_EXTRACTION_CONFIDENCE,
                    (m.start(), m.end()),
                    &mut claimed,
                    &mut entities,
                );
            }
        }

        // Family 4: concept dictionary, case-insensitive.
        let lower = text.to_lowercase();
        for term in patterns::CONCEPT_TERMS {
            let mut from = 0usize;
            while let Some(pos) = lower[from..].find(term) {
                let start = from + pos;
                let end = start + term.len();
                from = end;
                if overlaps(&claimed, start, end) {
                    continue;
                }
                let confidence = if research_context_near(&lower, start, end) {
                    BASE_EXTRACTION_CONFIDENCE + CONCEPT_CONTEXT_BOOST
                } else {
                    BASE_EXTRACTION_CONFIDENCE
                };
                push(
                    &text[start..end],
                    EntityKind::Concept,
                    confidence,
                    (start, end),
                    &mut claimed,
                    &mut entities,
                );
            }
        }

        // Family 5: locations. The suffix form is reliable; the preposition
        // cue is looser and runs last.
        for caps in patterns::LOCATION_SUFFIX.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            if overlaps(&claimed, whole.start(), whole.end()) {
                continue;
            }
            push(
                whole.as_str(),
                EntityKind::Location,
                BASE_EXTRACTION_CONFIDENCE + LOCATION_SUFFIX_BOOST,
                (whole.start(), whole.end()),
                &mut claimed,
                &mut entities,
            );
        }
        for caps in patterns::LOCATION_PREPOSITION.captures_iter(text) {
            let name_match = caps.get(1).unwrap();
            if overlaps(&claimed, name_match.start(), name_match.end()) {
                continue;
            }
            let name = name_match.as_str();
            if patterns::LOCATION_STOPWORDS.contains(&name) {
                continue;
            }
            push(
                name,
                EntityKind::Location,
                BASE_EXTRACTION_CONFIDENCE,
                (name_match.start(), name_match.end()),
                &mut claimed,
                &mut entities,
            );
        }

        entities
    }
}

/// Lowercase name plus lowercase tokens of multiword names.
fn aliases_for(name: &str) -> Vec<String> {
    let full = name.to_lowercase();
    let mut aliases = vec![full.clone()];
    for token in full.split_whitespace() {
        if token.len() > 2 && !aliases.iter().any(|a| a == token) {
            aliases.push(token.to_string());
        }
    }
    aliases
}

fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && end > s)
}

fn ends_with_org_suffix(name: &str) -> bool {
    name.split_whitespace().next_back().is_some_and(|last| {
        matches!(
            last,
            "Inc" | "Corp" | "LLC" | "Ltd" | "Company" | "Corporation" | "Foundation"
                | "Institute" | "University"
        )
    })
}

fn research_context_near(lower: &str, start: usize, end: usize) -> bool {
    let from = start.saturating_sub(CONTEXT_WINDOW);
    let to = (end + CONTEXT_WINDOW).min(lower.len());
    // Clamp to char boundaries; the window size is advisory.
    let from = (0..=from).rev().find(|&i| lower.is_char_boundary(i)).unwrap_or(0);
    let to = (to..=lower.len()).find(|&i| lower.is_char_boundary(i)).unwrap_or(lower.len());
    let window = &lower[from..to];
    patterns::RESEARCH_CONTEXT_WORDS
        .iter()
        .any(|w| window.contains(w))
}
