//! Embeddable snippet generation.

const EMBED_URL_PREFIX: &str = "https://example-chatbot.com/agent/";

/// Build the iframe snippet that embeds an agent's chat window in a page.
///
/// The output depends only on `agent_id`. Whether the id refers to a stored
/// agent is the caller's concern.
pub fn generate_embed(agent_id: &str) -> String {
    format!(
        r#"<iframe src="{EMBED_URL_PREFIX}{agent_id}" width="300" height="400" style="border: none; position: fixed; bottom: 0; right: 0;"></iframe>"#
    )
}

#[cfg(test)]
mod tests {
    use super::generate_embed;

    #[test]
    fn test_embed_matches_template_exactly() {
        assert_eq!(
            generate_embed("abc-123"),
            r#"<iframe src="https://example-chatbot.com/agent/abc-123" width="300" height="400" style="border: none; position: fixed; bottom: 0; right: 0;"></iframe>"#
        );
    }

    #[test]
    fn test_embed_is_deterministic() {
        assert_eq!(generate_embed("01HXYZ"), generate_embed("01HXYZ"));
    }

    #[test]
    fn test_embed_differs_per_id() {
        assert_ne!(generate_embed("a"), generate_embed("b"));
    }
}
