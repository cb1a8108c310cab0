//! Stylesheet text output.

use minijinja::{AutoEscape, Environment};

use super::Stylesheet;
use crate::Result;

const TEMPLATE_NAME: &str = "stylesheet.css";

const TEMPLATE: &str = r#"{% for block in keyframes %}
@keyframes {{ block.name }} {
{% for frame in block.frames %}
  {{ frame.offset }} {
{% for d in frame.declarations %}
    {{ d.property }}: {{ d.value }};
{% endfor %}
  }
{% endfor %}
}

{% endfor %}
{% for rule in rules %}
{% if rule.media %}
@media {{ rule.media }} {
  {{ rule.selector }} {
{% for d in rule.declarations %}
    {{ d.property }}: {{ d.value }};
{% endfor %}
  }
}
{% else %}
{{ rule.selector }} {
{% for d in rule.declarations %}
  {{ d.property }}: {{ d.value }};
{% endfor %}
}
{% endif %}

{% endfor %}
"#;

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(env)
}

pub(super) fn render(stylesheet: &Stylesheet) -> Result<String> {
    let env = environment()?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let rules: Vec<_> = stylesheet.rules().collect();
    let css = template.render(minijinja::context! {
        keyframes => &stylesheet.keyframes,
        rules => rules,
    })?;
    let mut css = css.trim_end().to_string();
    css.push('\n');
    Ok(css)
}

/// Escapes a class name for use in a selector.
///
/// ```rust
/// use signalwind::stylesheet::escape_class;
///
/// assert_eq!(escape_class("hover:bg-black/30"), r"hover\:bg-black\/30");
/// assert_eq!(escape_class("px-2.5"), r"px-2\.5");
/// assert_eq!(escape_class("2xl:p-4"), r"\32 xl\:p-4");
/// ```
pub fn escape_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, c) in name.chars().enumerate() {
        if index == 0 && c.is_ascii_digit() {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
