// src/core/sanitize.rs

/// Item id for detail-page links: lowercased title with the characters
/// the detail page drops (space, `!`, `.`, `+`) removed. Everything else,
/// commas and unicode included, passes through untouched.
pub fn item_id(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '!' | '.' | '+'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_strips_fixed_set() {
        assert_eq!(item_id("Blade Ball!"), "bladeball");
        assert_eq!(item_id("1,000 Gems + Bonus"), "1,000gemsbonus");
        assert_eq!(item_id("x2 XP. Forever"), "x2xpforever");
    }

    #[test]
    fn item_id_keeps_other_punctuation() {
        assert_eq!(item_id("Fruta-da-Névoa"), "fruta-da-névoa");
        assert_eq!(item_id("VIP (Lifetime)"), "vip(lifetime)");
    }

    #[test]
    fn item_id_only_ascii_space_is_dropped() {
        // non-breaking space is not in the strip set
        assert_eq!(item_id("A\u{a0}B"), "a\u{a0}b");
    }
}
