//! FILENAME: core/detector/src/config.rs
//! PURPOSE: Tunable policy for the label heuristic.
//! CONTEXT: Built once by the caller and passed into detection explicitly.
//! Every field has a default, so a JSON override file may name only the
//! values it changes.

use serde::{Deserialize, Serialize};

/// Domain vocabulary for identity, contact and financial forms.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "nombre", "dirección", "teléfono", "telefono", "email", "correo", "fecha",
    "código", "codigo", "actividad", "representante", "razón", "razon", "social",
    "nit", "rfc", "curp", "ciudad", "estado", "país", "pais", "cp", "código postal",
    "banco", "cuenta", "clabe", "swift", "iban", "moneda", "monto", "importe",
    "apellido", "paterno", "materno", "nacimiento", "edad", "género", "genero",
    "ocupación", "ocupacion", "profesión", "profesion", "empresa", "puesto",
    "documento", "identificación", "identificacion", "pasaporte", "licencia",
    "contacto", "emergencia", "parentesco", "beneficiario", "titular",
    "firma", "fecha de", "lugar de", "hora", "folio", "referencia", "número", "numero",
];

/// Words that make an `@` acceptable inside a label ("Correo (@):").
pub const DEFAULT_EMAIL_KEYWORDS: &[&str] = &["email", "correo", "mail"];

/// Label detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Lowercase substrings that mark text as a label.
    pub keywords: Vec<String>,
    /// Lowercase substrings that allow an `@` in a label.
    pub email_keywords: Vec<String>,
    /// Shorter trimmed text is never a label.
    pub min_label_length: usize,
    /// Upper bound for colon-terminated labels.
    pub max_label_length_with_colon: usize,
    /// Upper bound for labels recognised only by a keyword.
    pub max_label_length_without_colon: usize,
    /// Left-neighbour text longer than this suppresses non-colon labels.
    pub min_left_cell_text_length: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            email_keywords: DEFAULT_EMAIL_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_label_length: 2,
            max_label_length_with_colon: 100,
            max_label_length_without_colon: 40,
            min_left_cell_text_length: 10,
        }
    }
}

impl DetectorConfig {
    /// Replaces the keyword list. Keywords are lowercased on the way in.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self
    }

    /// True if the lowercased text contains any configured keyword.
    pub fn has_keyword(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|k| text_lower.contains(k.as_str()))
    }

    /// True if the lowercased text contains any email keyword.
    pub fn has_email_keyword(&self, text_lower: &str) -> bool {
        self.email_keywords
            .iter()
            .any(|k| text_lower.contains(k.as_str()))
    }
}
