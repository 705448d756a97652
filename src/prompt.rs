use crate::scrape::{Section, SectionMap};

/// Assembles the system prompt: persona text followed by one labeled line per
/// section, in fixed order. Pure; a complete section mapping is guaranteed by
/// the fetcher, so there is nothing to fail on.
pub fn build_system_prompt(persona: &str, sections: &SectionMap) -> String {
    let body_len: usize = sections.values().map(String::len).sum();
    let mut prompt = String::with_capacity(persona.len() + body_len + 80);

    prompt.push_str(persona);
    prompt.push('\n');

    for section in Section::ALL {
        prompt.push_str(section.label());
        prompt.push_str(": ");
        if let Some(text) = sections.get(&section) {
            prompt.push_str(text);
        }
        prompt.push('\n');
    }

    prompt
}
