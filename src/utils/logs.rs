use console::{measure_text_width, Style};

use crate::scoring::{AxisReading, Classification, LikertLevel};
use crate::settings::Report;
use strum::IntoEnumIterator;

pub const TREE_BRANCH: char = '\u{251C}';
pub const TREE_END: char = '\u{2514}';
pub const TREE_HORIZ: char = '\u{2500}';
pub const TREE_VERT: char = '\u{2502}';

const TREE_PREFIX_WIDTH: usize = 4;
const VALUE_COLUMN: usize = 25;

fn tree_branch() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_BRANCH, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_end() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_END, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_indent() -> String {
    dim().apply_to(format!("{}   ", TREE_VERT)).to_string()
}

fn tree_blank() -> String {
    " ".repeat(TREE_PREFIX_WIDTH)
}

fn connector(index: usize, count: usize) -> String {
    if index + 1 == count {
        tree_end()
    } else {
        tree_branch()
    }
}

pub fn dim() -> Style {
    Style::new().dim()
}

fn blue() -> Style {
    Style::new().blue()
}

fn magenta() -> Style {
    Style::new().magenta()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn init_prefix() -> String {
    blue().apply_to("[INIT]").to_string()
}

pub fn pad_label(label: &str, depth: usize) -> String {
    let prefix_width = depth * TREE_PREFIX_WIDTH;
    let target_width = VALUE_COLUMN.saturating_sub(prefix_width);
    let current_width = measure_text_width(label);
    if current_width < target_width {
        format!("{}{}", label, " ".repeat(target_width - current_width))
    } else {
        format!("{} ", label)
    }
}

pub fn format_signed(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{}{:.1}", dim().apply_to(sign), value.abs())
}

pub fn log_bank_loaded(path: &str, count: usize) {
    println!(
        "{} loaded {} questions from {}",
        init_prefix(),
        bold().apply_to(count),
        cyan().apply_to(path),
    );
}

pub fn log_submission_loaded(source: &str, answered: usize, has_tallies: bool) {
    println!(
        "{} read {} answers from {} (tallies {})",
        init_prefix(),
        bold().apply_to(answered),
        cyan().apply_to(source),
        if has_tallies {
            green().apply_to("supplied")
        } else {
            yellow().apply_to("recomputed")
        }
    );
}

pub fn log_error(prefix: &str, message: &str) {
    eprintln!("{} {}", red().apply_to(prefix), message);
}

fn reading_line(label: &str, reading: AxisReading) -> String {
    format!(
        "{}{}{} {}",
        tree_branch(),
        pad_label(label, 1),
        format_signed(reading.score),
        dim().apply_to(format!("({reading})"))
    )
}

pub struct ProfileReport<'a> {
    classification: &'a Classification,
    options: &'a Report,
}

impl<'a> ProfileReport<'a> {
    pub fn new(classification: &'a Classification, options: &'a Report) -> Self {
        Self {
            classification,
            options,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let Classification {
            scores,
            tallies,
            profile,
        } = self.classification;
        let accent = Style::new().magenta().bold();
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!(
            "{} {}",
            magenta().apply_to(bold().apply_to("[PROFILE]")),
            accent.apply_to(profile.primary_ideology)
        ));

        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("AXES")));
        lines.push(reading_line("economic", AxisReading::economic(scores.economic)));
        lines.push(reading_line("social", AxisReading::social(scores.social)));
        lines.push(format!(
            "{}{} {}",
            tree_end(),
            pad_label("quadrant", 1),
            cyan().apply_to(scores.quadrant())
        ));

        if self.options.show_tallies {
            lines.push(String::new());
            lines.push(format!("{}", bold().apply_to("FOCUS TALLIES")));
            if tallies.is_empty() {
                lines.push(format!("{}{}", tree_end(), dim().apply_to("none")));
            } else {
                let count = tallies.len();
                for (i, (focus, tally)) in tallies.iter().enumerate() {
                    let counts = LikertLevel::iter()
                        .rev()
                        .map(|level| tally.count(level).to_string())
                        .collect::<Vec<_>>()
                        .join("/");
                    lines.push(format!(
                        "{}{} {}",
                        connector(i, count),
                        pad_label(&focus.to_string(), 1),
                        dim().apply_to(counts)
                    ));
                }
            }
        }

        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("PRIMARY")));
        lines.push(format!(
            "{}{} {}",
            tree_branch(),
            pad_label("label", 1),
            green().bold().apply_to(profile.primary_ideology)
        ));
        lines.push(format!(
            "{}{} {}",
            tree_branch(),
            pad_label("color", 1),
            dim().apply_to(profile.color)
        ));
        lines.push(format!(
            "{}{} {}",
            tree_branch(),
            pad_label("description", 1),
            profile.description
        ));

        lines.push(format!("{}{}", tree_branch(), pad_label("characteristics", 1)));
        let count = profile.characteristics.len();
        for (i, characteristic) in profile.characteristics.iter().enumerate() {
            lines.push(format!("{}{}{}", tree_indent(), connector(i, count), characteristic));
        }

        lines.push(format!("{}{}", tree_branch(), pad_label("notable figures", 1)));
        let count = profile.notable_figures.len();
        for (i, figure) in profile.notable_figures.iter().enumerate() {
            lines.push(format!(
                "{}{}{} {}",
                tree_indent(),
                connector(i, count),
                figure.name,
                dim().apply_to(format!("({})", figure.role))
            ));
        }

        lines.push(format!(
            "{}{} {}",
            tree_end(),
            pad_label("context", 1),
            dim().apply_to(profile.modern_context)
        ));

        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("SECONDARY")));
        if profile.secondary_ideologies.is_empty() {
            lines.push(format!("{}{}", tree_end(), dim().apply_to("none")));
        } else {
            let count = profile.secondary_ideologies.len();
            for (i, ideology) in profile.secondary_ideologies.iter().enumerate() {
                lines.push(format!(
                    "{}{}",
                    connector(i, count),
                    yellow().apply_to(ideology)
                ));
                if self.options.show_summaries {
                    let indent = if i + 1 == count {
                        tree_blank()
                    } else {
                        tree_indent()
                    };
                    lines.push(format!("{}{}", indent, dim().apply_to(ideology.summary())));
                }
            }
        }

        lines
    }

    pub fn print(&self) {
        println!("{}\n", self.lines().join("\n"));
    }
}
