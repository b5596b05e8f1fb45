//! Declarative entity forms.
//!
//! A [`FormSpec`] lists the inputs of one entity dialog. The dialog keeps
//! raw input text in [`FormValues`] and converts it into a JSON payload with
//! [`FormSpec::build_payload`] when submitted.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::derive::date_part;
use crate::models::Collection;

/// Raw input text keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Select value standing for "no reference".
pub const NONE_VALUE: &str = "none";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Câmpul \"{0}\" este obligatoriu.")]
    Missing(&'static str),

    #[error("Câmpul \"{0}\" trebuie să fie un număr.")]
    InvalidNumber(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Url,
    TextArea,
    /// Whole number; an empty optional value is sent as `null`.
    Integer { optional: bool },
    /// Decimal number; unparsable input is sent as `0`.
    Decimal,
    /// `YYYY-MM-DD`; an empty optional value is sent as `null`.
    Date { optional: bool },
    Time,
    Checkbox,
    Choice(&'static [(&'static str, &'static str)]),
    /// Id picked from another collection. With `none_label` set the
    /// picker offers an explicit "none" entry sent as `null`.
    Reference {
        collection: Collection,
        none_label: Option<&'static str>,
    },
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Url => "url",
            FieldKind::Integer { .. } | FieldKind::Decimal => "number",
            FieldKind::Date { .. } => "date",
            FieldKind::Time => "time",
            FieldKind::Checkbox => "checkbox",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
    pub placeholder: &'static str,
    /// Field set to the chosen record's linked id (group -> teacher).
    pub fills: Option<&'static str>,
    /// Input only used by a compose hook, never sent as-is.
    pub transient: bool,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            default: "",
            placeholder: "",
            fills: None,
            transient: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = text;
        self
    }

    pub fn fills(mut self, target: &'static str) -> Self {
        self.fills = Some(target);
        self
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    fn convert(&self, raw: &str) -> Result<Value, FormError> {
        let text = raw.trim();
        match self.kind {
            FieldKind::Checkbox => Ok(Value::Bool(text == "true")),
            FieldKind::Integer { optional } => {
                if text.is_empty() {
                    return if optional {
                        Ok(Value::Null)
                    } else {
                        Err(FormError::Missing(self.label))
                    };
                }
                parse_int(text)
                    .map(Value::from)
                    .ok_or(FormError::InvalidNumber(self.label))
            }
            FieldKind::Decimal => {
                let n = text.replace(',', ".").parse::<f64>().unwrap_or(0.0);
                Ok(Number::from_f64(n).map(Value::Number).unwrap_or_else(|| Value::from(0)))
            }
            FieldKind::Date { optional } => {
                if text.is_empty() {
                    if optional {
                        Ok(Value::Null)
                    } else {
                        Err(FormError::Missing(self.label))
                    }
                } else {
                    Ok(Value::String(text.to_string()))
                }
            }
            FieldKind::Reference { none_label, .. } => {
                if text.is_empty() || text == NONE_VALUE {
                    return if none_label.is_some() || !self.required {
                        Ok(Value::Null)
                    } else {
                        Err(FormError::Missing(self.label))
                    };
                }
                text.parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| FormError::InvalidNumber(self.label))
            }
            _ => {
                if self.required && text.is_empty() {
                    Err(FormError::Missing(self.label))
                } else {
                    Ok(Value::String(raw.to_string()))
                }
            }
        }
    }

    /// Input text for an existing JSON value.
    fn seed_text(&self, value: &Value) -> String {
        let text = match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        match self.kind {
            FieldKind::Date { .. } => date_part(&text).to_string(),
            FieldKind::Reference { none_label: Some(_), .. } if text.is_empty() => {
                NONE_VALUE.to_string()
            }
            _ => text,
        }
    }
}

fn parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

type SeedHook = fn(&Map<String, Value>, &mut FormValues);
type ComposeHook = fn(&FormValues, &mut Map<String, Value>) -> Result<(), FormError>;

/// Dialog description for one entity.
#[derive(Debug, Clone)]
pub struct FormSpec {
    pub collection: Collection,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldSpec>,
    /// Constant members added to every payload.
    pub fixed: Vec<(&'static str, Value)>,
    /// Fills inputs that do not map 1:1 onto record members.
    pub seed: Option<SeedHook>,
    /// Derives payload members from transient inputs.
    pub compose: Option<ComposeHook>,
    /// Alert shown when the backend rejects a create.
    pub failure_message: &'static str,
}

impl FormSpec {
    pub fn new(collection: Collection, create_title: &'static str, edit_title: &'static str) -> Self {
        Self {
            collection,
            create_title,
            edit_title,
            submit_label: "Salvează",
            fields: Vec::new(),
            fixed: Vec::new(),
            seed: None,
            compose: None,
            failure_message: "Ceva nu a mers bine.",
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fixed(mut self, key: &'static str, value: Value) -> Self {
        self.fixed.push((key, value));
        self
    }

    pub fn submit_label(mut self, label: &'static str) -> Self {
        self.submit_label = label;
        self
    }

    pub fn failure_message(mut self, message: &'static str) -> Self {
        self.failure_message = message;
        self
    }

    pub fn seed(mut self, hook: SeedHook) -> Self {
        self.seed = Some(hook);
        self
    }

    pub fn compose(mut self, hook: ComposeHook) -> Self {
        self.compose = Some(hook);
        self
    }

    /// Values for an empty create form.
    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.key.to_string(), f.default.to_string()))
            .collect()
    }

    /// Values the dialog opens with: defaults for a create, the record's
    /// members for an edit. The seed hook runs in both cases and sees an
    /// empty record on create.
    pub fn initial_values(&self, record: Option<&Map<String, Value>>) -> FormValues {
        let mut values = self.defaults();
        let empty = Map::new();
        let record = record.unwrap_or(&empty);
        for field in &self.fields {
            if let Some(v) = record.get(field.key) {
                values.insert(field.key.to_string(), field.seed_text(v));
            }
        }
        if let Some(seed) = self.seed {
            seed(record, &mut values);
        }
        values
    }

    /// Convert input text into the request body.
    ///
    /// `base` is the record being edited; members the form does not show
    /// are carried over from it unchanged.
    pub fn build_payload(
        &self,
        values: &FormValues,
        base: Option<&Map<String, Value>>,
    ) -> Result<Map<String, Value>, FormError> {
        let mut payload = base.cloned().unwrap_or_default();
        payload.remove("id");
        for field in self.fields.iter().filter(|f| !f.transient) {
            let raw = values.get(field.key).map(String::as_str).unwrap_or_default();
            payload.insert(field.key.to_string(), field.convert(raw)?);
        }
        for (key, value) in &self.fixed {
            payload.insert(key.to_string(), value.clone());
        }
        if let Some(compose) = self.compose {
            compose(values, &mut payload)?;
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STATUSES: &[(&str, &str)] = &[("activa", "Activă"), ("anulata", "Anulată")];

    fn group_form() -> FormSpec {
        FormSpec::new(Collection::Groups, "Grupă Nouă", "Editare Grupă")
            .field(FieldSpec::new("nume_grupa", "Nume Grupă", FieldKind::Text).required())
            .field(
                FieldSpec::new(
                    "curs_id",
                    "Curs",
                    FieldKind::Reference { collection: Collection::Courses, none_label: None },
                )
                .required(),
            )
            .field(FieldSpec::new(
                "contract_id",
                "Contract",
                FieldKind::Reference {
                    collection: Collection::Contracts,
                    none_label: Some("Fără contract (Direct)"),
                },
            ))
            .field(FieldSpec::new("max_copii", "Max. Copii", FieldKind::Integer { optional: false }))
            .field(FieldSpec::new("data_inceput", "Data Început", FieldKind::Date { optional: true }))
            .field(FieldSpec::new("status_grupa", "Status", FieldKind::Choice(STATUSES)).default_value("activa"))
    }

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_payload_conversion() {
        let form = group_form();
        let v = values(&[
            ("nume_grupa", "Robotică Marți"),
            ("curs_id", "2"),
            ("contract_id", "none"),
            ("max_copii", "12"),
            ("data_inceput", ""),
            ("status_grupa", "activa"),
        ]);
        let payload = form.build_payload(&v, None).unwrap();
        assert_eq!(payload["curs_id"], json!(2));
        assert_eq!(payload["contract_id"], Value::Null);
        assert_eq!(payload["max_copii"], json!(12));
        assert_eq!(payload["data_inceput"], Value::Null);
        assert_eq!(payload["status_grupa"], json!("activa"));
    }

    #[test]
    fn test_missing_reference_is_rejected() {
        let form = group_form();
        let v = values(&[("nume_grupa", "X"), ("curs_id", ""), ("max_copii", "5")]);
        assert_eq!(form.build_payload(&v, None), Err(FormError::Missing("Curs")));
    }

    #[test]
    fn test_invalid_integer() {
        let form = group_form();
        let v = values(&[("nume_grupa", "X"), ("curs_id", "1"), ("max_copii", "multi")]);
        assert_eq!(form.build_payload(&v, None), Err(FormError::InvalidNumber("Max. Copii")));
    }

    #[test]
    fn test_decimal_falls_back_to_zero() {
        let field = FieldSpec::new("total_plata", "Total", FieldKind::Decimal);
        assert_eq!(field.convert("").unwrap(), json!(0.0));
        assert_eq!(field.convert("12,5").unwrap(), json!(12.5));
    }

    #[test]
    fn test_edit_keeps_hidden_members() {
        let form = group_form();
        let record = json!({
            "id": 4, "nume_grupa": "Vechi", "curs_id": 1, "contract_id": null,
            "max_copii": 10, "data_inceput": "2025-09-15", "status_grupa": "activa",
            "note": "Sala 2"
        });
        let record = record.as_object().unwrap();
        let mut v = form.initial_values(Some(record));
        assert_eq!(v["contract_id"], NONE_VALUE);
        assert_eq!(v["max_copii"], "10");
        v.insert("nume_grupa".to_string(), "Nou".to_string());

        let payload = form.build_payload(&v, Some(record)).unwrap();
        assert_eq!(payload["nume_grupa"], json!("Nou"));
        assert_eq!(payload["note"], json!("Sala 2"));
        assert_eq!(payload["data_inceput"], json!("2025-09-15"));
        assert!(!payload.contains_key("id"));
    }

    #[test]
    fn test_fixed_members_and_defaults() {
        let form = group_form().fixed("moneda", json!("RON"));
        let defaults = form.defaults();
        assert_eq!(defaults["status_grupa"], "activa");
        let v = values(&[("nume_grupa", "X"), ("curs_id", "1"), ("max_copii", "5")]);
        let payload = form.build_payload(&v, None).unwrap();
        assert_eq!(payload["moneda"], json!("RON"));
    }

    #[test]
    fn test_checkbox() {
        let field = FieldSpec::new("gdpr_accepted", "GDPR", FieldKind::Checkbox);
        assert_eq!(field.convert("true").unwrap(), json!(true));
        assert_eq!(field.convert("").unwrap(), json!(false));
    }
}
