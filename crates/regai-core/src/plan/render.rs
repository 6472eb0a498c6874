//! Plan and weather rendering.
//!
//! The plan text uses a handful of markdown-like tokens. They are rewritten
//! to HTML by ordered regex substitutions in a single pass. There is no
//! grammar and no nesting, so re-applying [`format_plan`] to its own output
//! is not a no-op.
//!
//! With [`PlanTrust::Verbatim`] the plan text is inserted as-is: any markup
//! the endpoint returns reaches the page. That is an injection surface,
//! kept only for endpoints whose output is trusted.
//!
//! Known behaviour: the `## ` rule runs before the `### ` rule, so a
//! third-level header keeps one leading `#` and renders as a second-level
//! header (`### Cover crops` becomes `#<h2 …>Cover crops</h2>`). The `<h3>`
//! rule never fires. Lines ending in `\r\n` are treated like `\n`: the
//! `\r` stays outside header and bullet tags.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::WeatherSummary;

/// How much the plan text is trusted before it becomes HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTrust {
    /// Insert the text unescaped
    Verbatim,
    /// HTML-escape the text, then apply the token rules
    #[default]
    Escaped,
}

/// (pattern, replacement) in application order.
const RULES: &[(&str, &str)] = &[
    (
        r"(?mR)## (.*)$",
        r#"<h2 class="text-xl font-bold text-green-700 mt-6 mb-3">${1}</h2>"#,
    ),
    (
        r"(?mR)### (.*)$",
        r#"<h3 class="text-lg font-semibold text-green-600 mt-4 mb-2">${1}</h3>"#,
    ),
    (r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
    (r"\*(.*?)\*", "<em>${1}</em>"),
    (r"(?mR)• (.*)$", r#"<li class="ml-4">${1}</li>"#),
    (r"\n\n", r#"</p><p class="mb-3">"#),
    (r"\n", "<br>"),
];

fn compiled_rules() -> &'static [(Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, replacement)| {
                let re = Regex::new(pattern).expect("plan rule patterns are valid");
                (re, *replacement)
            })
            .collect()
    })
}

/// Turn plan text into HTML.
pub fn format_plan(text: &str, trust: PlanTrust) -> String {
    let mut formatted = match trust {
        PlanTrust::Verbatim => text.to_string(),
        PlanTrust::Escaped => html_escape::encode_text(text).into_owned(),
    };
    for (re, replacement) in compiled_rules() {
        formatted = re.replace_all(&formatted, *replacement).into_owned();
    }
    format!(r#"<div class="formatted-plan">{}</div>"#, formatted)
}

/// Print a number the way a browser does: `22` rather than `22.0`.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Fixed three-field weather summary.
pub fn render_weather(weather: &WeatherSummary) -> String {
    format!(
        concat!(
            r#"<div class="flex flex-wrap gap-4">"#,
            "<span>🌡️ {}°C</span>",
            "<span>💧 {}% humidity</span>",
            "<span>☁️ {}</span>",
            "</div>"
        ),
        js_number(weather.temperature),
        js_number(weather.humidity),
        html_escape::encode_text(&weather.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_bold() {
        let html = format_plan("## Step 1\n**Till** soil", PlanTrust::Verbatim);
        assert!(html.contains(r#"mb-3">Step 1</h2>"#), "{html}");
        assert!(html.contains("<strong>Till</strong> soil"));
        assert!(html.contains("</h2><br><strong>"));
        assert!(html.starts_with(r#"<div class="formatted-plan">"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_third_level_header_renders_as_second_level() {
        let html = format_plan("### Cover crops", PlanTrust::Verbatim);
        assert_eq!(
            html,
            r#"<div class="formatted-plan">#<h2 class="text-xl font-bold text-green-700 mt-6 mb-3">Cover crops</h2></div>"#
        );
        assert!(!html.contains("<h3"));
    }

    #[test]
    fn test_crlf_stays_outside_tags() {
        let html = format_plan("## Soil\r\n• compost\r\n", PlanTrust::Verbatim);
        assert!(html.contains(">Soil</h2>\r<br>"), "{html}");
        assert!(html.contains(r#"<li class="ml-4">compost</li>"#), "{html}");
    }

    #[test]
    fn test_italic_bullets_and_paragraphs() {
        let html = format_plan("*mulch* daily\n\n• compost\n• beans", PlanTrust::Verbatim);
        assert!(html.contains("<em>mulch</em> daily"));
        assert!(html.contains(r#"</p><p class="mb-3">"#));
        assert!(html.contains(r#"<li class="ml-4">compost</li><br><li class="ml-4">beans</li>"#));
    }

    #[test]
    fn test_tokens_are_not_nested() {
        let html = format_plan("**a *b* c**", PlanTrust::Verbatim);
        assert_eq!(
            html,
            r#"<div class="formatted-plan"><strong>a <em>b</em> c</strong></div>"#
        );
    }

    #[test]
    fn test_verbatim_passes_markup_through() {
        let html = format_plan("<script>x()</script>", PlanTrust::Verbatim);
        assert!(html.contains("<script>x()</script>"));
    }

    #[test]
    fn test_escaped_neutralizes_markup() {
        let html = format_plan("<b>hi</b> & **ok**", PlanTrust::Escaped);
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt; &amp; <strong>ok</strong>"));
    }

    #[test]
    fn test_reapplying_is_not_a_no_op() {
        let once = format_plan("## A\nb", PlanTrust::Verbatim);
        let twice = format_plan(&once, PlanTrust::Verbatim);
        assert_ne!(once, twice);
        assert!(twice.starts_with(r#"<div class="formatted-plan"><div class="formatted-plan">"#));
    }

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(22.0), "22");
        assert_eq!(js_number(22.5), "22.5");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_render_weather() {
        let html = render_weather(&WeatherSummary {
            temperature: 22.0,
            humidity: 65.0,
            description: "partly <cloudy>".into(),
            rainfall: None,
        });
        assert!(html.contains("🌡️ 22°C"));
        assert!(html.contains("💧 65% humidity"));
        assert!(html.contains("☁️ partly &lt;cloudy&gt;"));
    }
}
