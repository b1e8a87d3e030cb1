use super::AnalysisResult;

const RULE_WIDTH: usize = 80;

/// Render an analysis result as a human-readable report.
///
/// Pure formatting of already-computed fields, in a fixed section order:
/// header, counts, reading time, top-word list, summary. Nothing is
/// recomputed here, so rendering can never disagree with the result it was
/// given.
pub fn render(result: &AnalysisResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push_str("\nTRANSCRIPT ANALYSIS\n");
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str("📊 CONTENT ANALYSIS:\n");
    out.push_str(&format!("  • Total words: {}\n", result.total_words));
    out.push_str(&format!("  • Total sentences: {}\n", result.total_sentences));
    out.push_str(&format!("  • Unique words: {}\n", result.unique_words));
    out.push_str(&format!(
        "  • Estimated reading time: {:.1} minutes\n\n",
        result.reading_time_minutes
    ));

    out.push_str("🔑 TOP 10 WORDS:\n");
    for (word, count) in &result.top_words {
        out.push_str(&format!("  • {}: {} times\n", word, count));
    }
    out.push('\n');

    out.push_str("📝 SUMMARY:\n");
    out.push_str(&format!("  {}\n", result.summary));

    out.push_str(&rule);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_render_contains_all_sections_in_order() {
        let result = analyze("uma sentença bem longa para o resumo aparecer. curta.");
        let rendered = render(&result);

        let analysis_at = rendered.find("📊 CONTENT ANALYSIS:").unwrap();
        let top_at = rendered.find("🔑 TOP 10 WORDS:").unwrap();
        let summary_at = rendered.find("📝 SUMMARY:").unwrap();

        assert!(analysis_at < top_at);
        assert!(top_at < summary_at);
    }

    #[test]
    fn test_render_formats_stored_fields_verbatim() {
        let result = AnalysisResult {
            total_words: 42,
            total_sentences: 7,
            unique_words: 13,
            top_words: vec![("palavra".to_string(), 5), ("outra".to_string(), 2)],
            reading_time_minutes: 0.2,
            summary: "A canned summary that was computed elsewhere.".to_string(),
        };
        let rendered = render(&result);

        assert!(rendered.contains("  • Total words: 42\n"));
        assert!(rendered.contains("  • Total sentences: 7\n"));
        assert!(rendered.contains("  • Unique words: 13\n"));
        assert!(rendered.contains("  • Estimated reading time: 0.2 minutes\n"));
        assert!(rendered.contains("  • palavra: 5 times\n"));
        assert!(rendered.contains("  • outra: 2 times\n"));
        assert!(rendered.contains("  A canned summary that was computed elsewhere.\n"));
    }

    #[test]
    fn test_render_keeps_ranking_order() {
        let result = analyze("beta beta gamma gamma alpha beta alpha alpha alpha");
        let rendered = render(&result);

        let alpha_at = rendered.find("alpha: 4 times").unwrap();
        let beta_at = rendered.find("beta: 3 times").unwrap();
        let gamma_at = rendered.find("gamma: 2 times").unwrap();

        assert!(alpha_at < beta_at);
        assert!(beta_at < gamma_at);
    }

    #[test]
    fn test_render_empty_result_shows_degenerate_summary() {
        let rendered = render(&analyze(""));

        assert!(rendered.contains("  • Total words: 0\n"));
        assert!(rendered.contains("  • Estimated reading time: 0.0 minutes\n"));
        assert!(rendered.contains("📝 SUMMARY:\n  .\n"));
    }
}
