//! Integration tests for the extraction strategies

#[cfg(test)]
mod tests {
    use crate::{LlmExtractor, PatternExtractor};
    use skimmer_domain::{EntityExtractor, FieldSet};
    use skimmer_llm::MockChatClient;

    fn fields() -> FieldSet {
        FieldSet::new(["company", "budget", "deadline"]).unwrap()
    }

    #[tokio::test]
    async fn test_both_strategies_honor_the_same_contract() {
        let doc = "Acme needs a campaign with a budget of 10000 and a deadline of 2025-09-01.";

        let pattern = PatternExtractor::new();
        let llm = LlmExtractor::new(MockChatClient::new(
            r#"{"company": "Acme", "budget": "$10000", "deadline": "2025-09-01"}"#,
        ));

        let from_pattern = pattern.extract(doc, &fields()).await.unwrap();
        let from_llm = llm.extract(doc, &fields()).await.unwrap();

        assert_eq!(from_pattern, from_llm);
    }

    #[tokio::test]
    async fn test_llm_strategy_with_fenced_reply() {
        let reply = "```json\n{\"company\": \"TechCorp Solutions Inc.\", \"budget\": null, \"deadline\": null}\n```";
        let extractor = LlmExtractor::new(MockChatClient::new(reply));

        let entities = extractor.extract("some document", &fields()).await.unwrap();
        assert_eq!(entities.get("company"), Some("TechCorp Solutions Inc."));
        assert_eq!(entities.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_object_reply_yields_empty_map() {
        let extractor = LlmExtractor::new(MockChatClient::new("{}"));
        let entities = extractor.extract("unrelated text", &fields()).await.unwrap();
        assert!(entities.is_empty());
    }
}
