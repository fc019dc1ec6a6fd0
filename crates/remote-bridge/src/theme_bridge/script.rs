//! Script generation for applying theme variables inside a webview.
//!
//! Values are escaped for a single-quoted JS string literal and otherwise
//! passed through; the page's `setProperty` decides what to do with them.

use std::cell::RefCell;

use super::style::DocumentStyle;

/// Style sink that records `setProperty` calls as JavaScript.
///
/// Used when the document lives in a webview: the host evaluates
/// [`ScriptStyle::take_script`] in the page.
#[derive(Debug, Default)]
pub struct ScriptStyle {
    statements: RefCell<Vec<String>>,
}

impl ScriptStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.borrow().is_empty()
    }

    /// Drain the recorded calls into one self-invoking script.
    ///
    /// Returns `None` when nothing was recorded since the last take.
    pub fn take_script(&self) -> Option<String> {
        let statements = std::mem::take(&mut *self.statements.borrow_mut());
        if statements.is_empty() {
            return None;
        }
        Some(wrap(&statements))
    }
}

impl DocumentStyle for ScriptStyle {
    fn set_property(&self, name: &str, value: &str) {
        self.statements.borrow_mut().push(set_property_statement(name, value));
    }
}

/// Script that sets every `(name, value)` pair on the document root.
pub fn css_injection_script<'a, I>(vars: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let statements: Vec<String> = vars
        .into_iter()
        .map(|(name, value)| set_property_statement(name, value))
        .collect();
    wrap(&statements)
}

fn set_property_statement(name: &str, value: &str) -> String {
    format!(
        "  s.setProperty('{}', '{}');\n",
        escape_js(name),
        escape_js(value)
    )
}

fn wrap(statements: &[String]) -> String {
    let mut js = String::from("(function() {\n  var s = document.documentElement.style;\n");
    for statement in statements {
        js.push_str(statement);
    }
    js.push_str("})();");
    js
}

/// Escape for a single-quoted JS string literal.
fn escape_js(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
