//! Classification of parsed line content into event kinds.
//!
//! Every parsed line's content field is matched against an ordered rule
//! table: join events first, then other system events, then the sender
//! split for user messages. First match wins, so content that merely
//! quotes a system phrase (a user message containing "removed", say) is
//! classified as a system event. That bias is accepted: classification
//! runs on content alone, with no further context available.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::model::ClassifiedEvent;

/// Phrases announcing that a user entered the group.
pub const JOIN_PATTERN: &str = r"joined using this group's invite link|added";

/// Phrases announcing group housekeeping events other than joins.
pub const SYSTEM_PATTERN: &str =
    r"Messages and calls are end-to-end encrypted|created group|changed|left|removed";

enum RuleKind {
    Join,
    System,
}

struct Rule {
    name: &'static str,
    kind: RuleKind,
    pattern: Regex,
}

/// Rule order is load-bearing: a user message quoting "removed" or "left"
/// matches the system rule before the sender split is ever attempted.
static RULES: Lazy<[Rule; 2]> = Lazy::new(|| {
    [
        Rule {
            name: "join",
            kind: RuleKind::Join,
            pattern: Regex::new(&format!("(?i){JOIN_PATTERN}")).unwrap(),
        },
        Rule {
            name: "system",
            kind: RuleKind::System,
            pattern: Regex::new(&format!("(?i){SYSTEM_PATTERN}")).unwrap(),
        },
    ]
});

/// Classify the content field of a parsed line.
#[must_use]
pub fn classify(content: &str) -> ClassifiedEvent {
    for rule in RULES.iter() {
        if rule.pattern.is_match(content) {
            trace!(rule = rule.name, "content matched event rule");
            return match rule.kind {
                RuleKind::Join => ClassifiedEvent::Join,
                RuleKind::System => ClassifiedEvent::System,
            };
        }
    }
    split_message(content)
}

/// Split content at the first colon into sender and body.
///
/// Both sides are trimmed and must be non-empty; anything else is noise.
fn split_message(content: &str) -> ClassifiedEvent {
    let Some((sender, body)) = content.split_once(':') else {
        return ClassifiedEvent::Noise;
    };

    let sender = sender.trim();
    let body = body.trim();
    if sender.is_empty() || body.is_empty() {
        return ClassifiedEvent::Noise;
    }

    ClassifiedEvent::Message {
        sender: sender.to_string(),
        body: body.to_string(),
    }
}
