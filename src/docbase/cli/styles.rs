use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown in front of text whose style name is not registered, so template
/// typos are visible.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named `console` styles, applied by the `style` template filter.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub mod names {
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static DOCBASE_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("rule", Style::new().dim())
        .add("label", Style::new().cyan())
        .add("title", Style::new().bold())
        .add("tag", Style::new().magenta())
        .add("tag_name", Style::new())
        .add("id", Style::new().yellow())
        .add("url", Style::new().underlined())
        .add("dim", Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_without_color() {
        assert_eq!(DOCBASE_THEME.apply("title", "hello", false), "hello");
    }

    #[test]
    fn colored_text_has_escape_codes() {
        let theme = Theme::new().add("g", Style::new().green().force_styling(true));
        let out = theme.apply("g", "ok", true);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("ok"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(DOCBASE_THEME.apply("nope", "x", false), "(!?) x");
    }
}
