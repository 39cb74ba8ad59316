// Output formatting for conjugation tables and verb summaries.

use serde::Serialize;

use crate::diacritics::{apply_diacritics_preference, DiacriticsPreference};
use crate::grid::{Cell, ConjugationTable};
use crate::nominal::{derive_active_participle, derive_masdar, derive_passive_participle};
use crate::passive::can_conjugate_passive;
use crate::root::{analyze_root, RootAnalysis};
use crate::types::{Verb, VowelPattern};

/// Render a table as one `code  form` line per cell, codes padded to a
/// common width.
///
/// ```text
/// 1s   كَتَبْتُ
/// 2ms  كَتَبْتَ
/// ```
pub fn format_table(table: &ConjugationTable) -> String {
    let width = Cell::ALL.iter().map(|c| c.code().len()).max().unwrap_or(0);
    table
        .iter()
        .map(|(cell, form)| format!("{:<width$}  {form}", cell.code()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Everything known about one verb, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbSummary {
    pub id: String,
    pub root: String,
    pub form: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<VowelPattern>,
    pub label: String,
    pub analysis: RootAnalysis,
    pub masdar: Vec<String>,
    pub active_participle: String,
    /// Empty when the verb has no passive participle.
    pub passive_participle: String,
    /// Whether the verb admits a passive conjugation.
    pub passive: bool,
}

impl VerbSummary {
    pub fn new(verb: &Verb) -> Self {
        Self {
            id: verb.id().to_string(),
            root: verb.root().to_string(),
            form: verb.form().roman().to_string(),
            pattern: verb.pattern(),
            label: verb.label().to_string(),
            analysis: analyze_root(verb.root()),
            masdar: derive_masdar(verb),
            active_participle: derive_active_participle(verb),
            passive_participle: derive_passive_participle(verb),
            passive: can_conjugate_passive(verb),
        }
    }

    /// The same summary with every Arabic form rendered per `preference`.
    pub fn with_preference(mut self, preference: DiacriticsPreference) -> Self {
        let render = |text: &mut String| *text = apply_diacritics_preference(text, preference);
        render(&mut self.label);
        self.masdar.iter_mut().for_each(&render);
        render(&mut self.active_participle);
        render(&mut self.passive_participle);
        self
    }
}
