//! Theme application onto document-level style state.
//!
//! The bridge writes CSS custom properties through a [`DocumentStyle`]
//! sink: [`StyleMap`] keeps them in memory, [`ScriptStyle`] turns them into
//! a script for a webview to evaluate.

mod script;
mod style;

use std::collections::BTreeMap;

pub use script::{css_injection_script, ScriptStyle};
pub use style::{DocumentStyle, StyleMap};

/// CSS custom property name -> value, as sent by the host.
pub type ThemeVars = BTreeMap<String, String>;
