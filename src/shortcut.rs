/// Canned replies for two fixed triggers, checked before the completion call.
/// Both rules are preserved product behavior; no broader intent is inferred
/// from them.
const EMAIL_REPLY: &str = "You can reach me at contact@kamilamin.com.";
const RELATIONSHIP_REPLY: &str = "It's personal, I am not gonna say 😁";

/// Returns a canned reply if the message matches a trigger, bypassing prompt
/// assembly and the completion API entirely.
pub fn shortcut_reply(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();

    if lowered.contains("email") {
        return Some(EMAIL_REPLY);
    }
    if lowered.contains("love,single") {
        return Some(RELATIONSHIP_REPLY);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_trigger_is_case_insensitive() {
        assert_eq!(
            shortcut_reply("What is your EMAIL address?"),
            Some("You can reach me at contact@kamilamin.com.")
        );
        assert_eq!(
            shortcut_reply("please share your Email"),
            Some("You can reach me at contact@kamilamin.com.")
        );
    }

    #[test]
    fn relationship_trigger_matches_literal_phrase() {
        assert_eq!(
            shortcut_reply("Love,Single or taken?"),
            Some("It's personal, I am not gonna say 😁")
        );
        // The comma is part of the trigger.
        assert_eq!(shortcut_reply("love, single"), None);
    }

    #[test]
    fn ordinary_messages_do_not_match() {
        assert_eq!(shortcut_reply("Tell me about your projects"), None);
        assert_eq!(shortcut_reply(""), None);
    }
}
