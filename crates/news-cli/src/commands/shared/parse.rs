use std::str::FromStr;

use news_core::enums::ModelFeature;
use news_core::errors::UnknownVariant;

/// Parse an enum flag value through its `FromStr` impl.
///
/// Matching ignores case, spaces, `-` and `_`, so `hugging-face`,
/// `Hugging Face` and `huggingface` are the same provider.
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = UnknownVariant>,
{
    raw.parse::<T>().map_err(anyhow::Error::from)
}

/// Parse repeated `--feature` values, accepting comma-separated lists too.
pub fn parse_features(raw: &[String]) -> anyhow::Result<Vec<ModelFeature>> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(parse_enum::<ModelFeature>)
        .collect()
}

#[cfg(test)]
mod tests {
    use news_core::enums::{ModelProvider, Role, SourceCategory};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("USER", Role::User)]
    fn parses_roles(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(parse_enum::<Role>(raw).unwrap(), expected);
    }

    #[test]
    fn parses_provider_aliases() {
        let provider: ModelProvider = parse_enum("hugging-face").expect("provider should parse");
        assert_eq!(provider, ModelProvider::HuggingFace);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<SourceCategory>("weather").expect_err("should fail");
        assert!(err.to_string().contains("weather"));
    }

    #[test]
    fn features_accept_lists_and_repeats() {
        let features = parse_features(&[
            "summarization, sentiment".to_string(),
            "fact-checking".to_string(),
        ])
        .unwrap();
        assert_eq!(
            features,
            vec![
                ModelFeature::Summarization,
                ModelFeature::Sentiment,
                ModelFeature::FactChecking,
            ]
        );
    }
}
