use anyhow::Result;
use colored::*;

use crate::drill::{Report, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Sound,
    Army,
    Trainable,
    Refusal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    fn new(tone: Tone, text: String) -> Self {
        Line { tone, text }
    }

    fn colorize(&self) -> ColoredString {
        match self.tone {
            Tone::Sound => self.text.dimmed(),
            Tone::Army => self.text.cyan(),
            Tone::Trainable => self.text.green(),
            Tone::Refusal => self.text.yellow(),
        }
    }
}

// Output the report as JSON
pub fn output_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

// Output the report as text, colored by tone when colors are enabled
pub fn output_text(report: &Report) -> Result<()> {
    for line in render_lines(report) {
        println!("{}", line.colorize());
    }
    Ok(())
}

// Plain lines in print order: roll call, army, then two lines per pet
pub fn render_lines(report: &Report) -> Vec<Line> {
    let mut lines = Vec::new();

    for call in &report.roll_call {
        lines.push(Line::new(Tone::Sound, format!("{} says {}", call.name, call.sound)));
    }

    for phrase in &report.army {
        lines.push(Line::new(Tone::Army, format!("Army: {}", phrase)));
    }

    for pet in &report.pets {
        match &pet.verdict {
            Verdict::Trainable { phrase } => {
                lines.push(Line::new(Tone::Trainable, format!("{} is trainable", pet.name)));
                lines.push(Line::new(Tone::Trainable, format!("{} {}", pet.name, phrase)));
            }
            Verdict::Refuses { species } => {
                lines.push(Line::new(Tone::Refusal, format!("{} is not trainable", pet.name)));
                lines.push(Line::new(
                    Tone::Refusal,
                    format!(
                        "{} is a {} and refuses training. Some beings cannot be controlled.",
                        pet.name,
                        species.as_str()
                    ),
                ));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill;
    use crate::roster::Roster;

    fn texts(report: &Report) -> Vec<String> {
        render_lines(report).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn canonical_roster_prints_expected_lines() {
        let roster = Roster::canonical();
        let report = drill::run(&roster.army(), roster.pets());

        assert_eq!(
            texts(&report),
            vec![
                "Army: The dog trains",
                "Army: Robot dog initiates a new training module",
                "Ella is trainable",
                "Ella The dog trains",
                "Leonardo is not trainable",
                "Leonardo is a Turtle and refuses training. Some beings cannot be controlled.",
                "Yoda is not trainable",
                "Yoda is a Cat and refuses training. Some beings cannot be controlled.",
            ]
        );
    }

    #[test]
    fn empty_report_prints_nothing() {
        assert!(render_lines(&Report::default()).is_empty());
    }

    #[test]
    fn roll_call_comes_first() {
        let roster = Roster::canonical();
        let mut report = drill::run(&roster.army(), roster.pets());
        report.roll_call = drill::roll_call(roster.pets());

        let lines = texts(&report);
        assert_eq!(&lines[..3], &["Ella says BARK", "Leonardo says ...", "Yoda says MEW"]);
        assert_eq!(lines[3], "Army: The dog trains");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn tones_follow_verdicts() {
        let roster = Roster::canonical();
        let report = drill::run(&roster.army(), roster.pets());
        let tones: Vec<_> = render_lines(&report).into_iter().map(|l| l.tone).collect();

        assert_eq!(tones[0], Tone::Army);
        assert_eq!(tones[2], Tone::Trainable);
        assert_eq!(tones[4], Tone::Refusal);
    }

    #[test]
    fn json_report_round_trips() {
        let roster = Roster::canonical();
        let report = drill::run(&roster.army(), roster.pets());

        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(!json.contains("roll_call"));
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
