use anyhow::Result;

use crate::ai::Review;

/// Render the review as pretty-printed JSON.
///
/// Field order follows the [`Review`] declaration, so repeated runs diff
/// cleanly.
pub fn to_json(review: &Review) -> Result<String> {
    Ok(serde_json::to_string_pretty(review)?)
}

/// Render the review as a YAML fragment under a top-level `ai_review:` key,
/// for pasting into document front matter.
///
/// The shape is fixed: strings double-quoted, scores bare, the six rating
/// categories in their canonical order, no trailing newline. Values are
/// emitted as-is — a summary containing a double quote would break the
/// fragment, which the review content is trusted not to do.
pub fn to_front_matter(review: &Review) -> String {
    let provider = review
        .provider
        .map(|p| p.as_str())
        .unwrap_or("unknown");

    let mut yaml = Vec::new();

    yaml.push("ai_review:".to_string());
    yaml.push(format!("  overall_grade: \"{}\"", review.overall_grade));
    yaml.push(format!("  overall_score: {}", review.overall_score));
    yaml.push("  ratings:".to_string());
    yaml.push(format!("    composition: {}", review.ratings.composition));
    yaml.push(format!("    lighting: {}", review.ratings.lighting));
    yaml.push(format!("    exposure: {}", review.ratings.exposure));
    yaml.push(format!("    subject: {}", review.ratings.subject));
    yaml.push(format!("    creativity: {}", review.ratings.creativity));
    yaml.push(format!("    technical: {}", review.ratings.technical));
    yaml.push("  strengths:".to_string());
    for s in &review.strengths {
        yaml.push(format!("    - \"{s}\""));
    }
    yaml.push("  improvements:".to_string());
    for i in &review.improvements {
        yaml.push(format!("    - \"{i}\""));
    }
    yaml.push(format!("  summary: \"{}\"", review.summary));
    yaml.push(format!("  mood: \"{}\"", review.mood));
    yaml.push(format!("  style: \"{}\"", review.style));
    yaml.push(format!("  provider: \"{provider}\""));

    yaml.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Ratings;
    use crate::config::Provider;

    fn sample_review() -> Review {
        Review {
            overall_grade: "B+".to_string(),
            overall_score: 82,
            ratings: Ratings {
                composition: 7,
                lighting: 7,
                exposure: 7,
                subject: 7,
                creativity: 7,
                technical: 7,
            },
            strengths: vec!["good light".to_string()],
            improvements: vec!["crop tighter".to_string()],
            summary: "Solid shot.".to_string(),
            mood: "calm".to_string(),
            style: "landscape".to_string(),
            provider: Some(Provider::Anthropic),
        }
    }

    #[test]
    fn front_matter_exact_fragment() {
        let expected = "\
ai_review:
  overall_grade: \"B+\"
  overall_score: 82
  ratings:
    composition: 7
    lighting: 7
    exposure: 7
    subject: 7
    creativity: 7
    technical: 7
  strengths:
    - \"good light\"
  improvements:
    - \"crop tighter\"
  summary: \"Solid shot.\"
  mood: \"calm\"
  style: \"landscape\"
  provider: \"anthropic\"";
        assert_eq!(to_front_matter(&sample_review()), expected);
    }

    #[test]
    fn front_matter_has_no_trailing_newline() {
        assert!(!to_front_matter(&sample_review()).ends_with('\n'));
    }

    #[test]
    fn front_matter_lists_every_item() {
        let mut review = sample_review();
        review.strengths = vec!["a".into(), "b".into(), "c".into()];
        review.improvements = vec!["x".into(), "y".into()];
        let yaml = to_front_matter(&review);
        assert!(yaml.contains("    - \"a\"\n    - \"b\"\n    - \"c\""));
        assert!(yaml.contains("    - \"x\"\n    - \"y\""));
    }

    #[test]
    fn json_field_order_is_stable() {
        let json = to_json(&sample_review()).unwrap();
        let positions: Vec<usize> = [
            "\"overall_grade\"",
            "\"overall_score\"",
            "\"ratings\"",
            "\"strengths\"",
            "\"improvements\"",
            "\"summary\"",
            "\"mood\"",
            "\"style\"",
            "\"provider\"",
        ]
        .iter()
        .map(|k| json.find(k).unwrap_or_else(|| panic!("missing {k}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn json_provider_serialized_as_identifier() {
        let json = to_json(&sample_review()).unwrap();
        assert!(json.contains("\"provider\": \"anthropic\""));
    }
}
