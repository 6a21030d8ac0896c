//! Rule-based message generation
//!
//! Produces all five template messages from a free-text tone/intent prompt
//! by keyword matching against a small set of tone categories, with a
//! generic fallback that interpolates the prompt. Pure text templating; no
//! model call.

use std::collections::BTreeMap;

use cobrix_domain::MessageKind;

/// Detected tone category for a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Friendly,
    Professional,
    Motivational,
    Generic,
}

const FRIENDLY_KEYWORDS: &[&str] = &["friendly", "amigable", "cercano", "casual", "warm"];
const PROFESSIONAL_KEYWORDS: &[&str] =
    &["professional", "profesional", "formal", "serio", "corporate"];
const MOTIVATIONAL_KEYWORDS: &[&str] =
    &["motivational", "motivacional", "inspiring", "energia", "energía", "animo", "ánimo"];

fn detect_tone(prompt: &str) -> Tone {
    let lower = prompt.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches(FRIENDLY_KEYWORDS) {
        Tone::Friendly
    } else if matches(PROFESSIONAL_KEYWORDS) {
        Tone::Professional
    } else if matches(MOTIVATIONAL_KEYWORDS) {
        Tone::Motivational
    } else {
        Tone::Generic
    }
}

/// Generate all five message slot texts for a prompt.
pub fn generate_messages(prompt: &str) -> BTreeMap<MessageKind, String> {
    let tone = detect_tone(prompt);
    let mut messages = BTreeMap::new();
    for kind in MessageKind::ALL {
        messages.insert(kind, message_for(tone, kind, prompt));
    }
    messages
}

fn message_for(tone: Tone, kind: MessageKind, prompt: &str) -> String {
    match (tone, kind) {
        (Tone::Friendly, MessageKind::Reminder) => {
            "Hi {client}! Just a heads-up: your payment is due on {date}. Thanks for being with us!".into()
        }
        (Tone::Friendly, MessageKind::Success) => {
            "All set, {client}! We received your payment. See you around!".into()
        }
        (Tone::Friendly, MessageKind::Error) => {
            "Oops, {client} - something went wrong with your payment. Mind giving it another try?".into()
        }
        (Tone::Friendly, MessageKind::Rejected) => {
            "Hey {client}, we couldn't confirm your payment. Drop us a message and we'll sort it out together.".into()
        }
        (Tone::Friendly, MessageKind::Marketing) => {
            "{client}, we have news we think you'll love! Check out our latest plans.".into()
        }
        (Tone::Professional, MessageKind::Reminder) => {
            "Dear {client}, this is a reminder that your payment of {amount} is due on {date}.".into()
        }
        (Tone::Professional, MessageKind::Success) => {
            "Dear {client}, we confirm receipt of your payment. A receipt is available on request.".into()
        }
        (Tone::Professional, MessageKind::Error) => {
            "Dear {client}, your payment could not be processed. Please verify the details and retry.".into()
        }
        (Tone::Professional, MessageKind::Rejected) => {
            "Dear {client}, your payment was not approved. Please contact us to resolve the matter.".into()
        }
        (Tone::Professional, MessageKind::Marketing) => {
            "Dear {client}, we would like to present our current service offerings.".into()
        }
        (Tone::Motivational, MessageKind::Reminder) => {
            "{client}, keep the momentum going! Renew before {date} and stay on track.".into()
        }
        (Tone::Motivational, MessageKind::Success) => {
            "Great job, {client}! Payment confirmed - nothing can stop you now!".into()
        }
        (Tone::Motivational, MessageKind::Error) => {
            "Don't give up, {client}! The payment failed but one more try will do it.".into()
        }
        (Tone::Motivational, MessageKind::Rejected) => {
            "{client}, a small setback: the payment was declined. Reach out and we'll get you back on track!".into()
        }
        (Tone::Motivational, MessageKind::Marketing) => {
            "{client}, push your goals further with our new plans!".into()
        }
        (Tone::Generic, kind) => {
            let label = match kind {
                MessageKind::Reminder => "payment reminder",
                MessageKind::Success => "payment confirmation",
                MessageKind::Error => "payment error notice",
                MessageKind::Rejected => "payment rejection notice",
                MessageKind::Marketing => "promotional message",
            };
            format!("{{client}}, this is a {label} in the requested style: {prompt}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_is_generated_and_non_empty() {
        let messages = generate_messages("tono amigable para un gimnasio");
        assert_eq!(messages.len(), 5);
        assert!(messages.values().all(|m| !m.is_empty()));
    }

    #[test]
    fn friendly_keywords_pick_the_friendly_tone() {
        let messages = generate_messages("algo amigable y cercano");
        assert!(messages[&MessageKind::Reminder].starts_with("Hi {client}"));
    }

    #[test]
    fn professional_keywords_pick_the_professional_tone() {
        let messages = generate_messages("formal, corporate wording please");
        assert!(messages[&MessageKind::Reminder].starts_with("Dear {client}"));
    }

    #[test]
    fn unknown_prompt_falls_back_to_interpolation() {
        let prompt = "estilo pirata con mucho ron";
        let messages = generate_messages(prompt);
        assert!(messages[&MessageKind::Marketing].contains(prompt));
    }
}
