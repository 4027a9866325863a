use idea_score::questionnaire::{progress_percent, questions, WizardStep};
use idea_score::scoring::{ScoreBreakdown, ScoreResult};
use std::fmt;

const BAR_WIDTH: usize = 20;

pub(crate) fn render_result(result: &ScoreResult) -> String {
    ResultView(result).to_string()
}

pub(crate) fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    BreakdownView(breakdown).to_string()
}

pub(crate) fn render_questionnaire() -> String {
    QuestionnaireView.to_string()
}

struct ResultView<'a>(&'a ScoreResult);

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Your SaaS Idea Score: {}", result.chip())?;
        writeln!(f, "{} idea • {}/100", result.verdict, result.score)?;

        writeln!(f, "\nBreakdown")?;
        for (label, value) in result.subscores.entries() {
            writeln!(f, "  {:<18} {} {:>3}", label, bar(value), value)?;
        }

        write_list(f, "✓ Strengths", &result.strengths)?;
        write_list(f, "⚠ Risks", &result.risks)?;
        write_list(f, "→ Next Steps", &result.next_steps)
    }
}

struct BreakdownView<'a>(&'a ScoreBreakdown);

impl fmt::Display for BreakdownView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breakdown = self.0;
        writeln!(f, "\nScore audit")?;
        writeln!(f, "  weighted base: {}", breakdown.base)?;
        if breakdown.adjustments.is_empty() {
            writeln!(f, "  no bonuses or penalties triggered")?;
        }
        for adjustment in &breakdown.adjustments {
            writeln!(f, "  {:+} {}", adjustment.points, adjustment.key)?;
        }
        writeln!(
            f,
            "  total {} -> score {}",
            breakdown.total, breakdown.score
        )
    }
}

struct QuestionnaireView;

impl fmt::Display for QuestionnaireView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in WizardStep::ALL {
            writeln!(
                f,
                "Step {} of {} ({}%): {}",
                step.index() + 1,
                WizardStep::ALL.len(),
                progress_percent(step),
                step.title()
            )?;
            if step == WizardStep::Idea {
                writeln!(f, "  --idea      Describe your idea in 1–2 sentences")?;
            }
            for question in questions(step) {
                writeln!(
                    f,
                    "  --{:<24} {} ({})",
                    flag_name(question.field.key()),
                    question.prompt,
                    question.helper
                )?;
            }
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n{heading}")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

/// `problemSeverity` -> `problem-severity`
pub(crate) fn flag_name(key: &str) -> String {
    let mut flag = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            flag.push('-');
            flag.push(ch.to_ascii_lowercase());
        } else {
            flag.push(ch);
        }
    }
    flag
}

fn bar(value: u8) -> String {
    let filled = (usize::from(value.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
