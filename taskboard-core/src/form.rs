/// Form schema builder: an append-only sequence of typed fields whose values
/// are updated by position.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use crate::config::FieldDefaults;
use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Dropdown,
    Radio,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Text, FieldKind::Dropdown, FieldKind::Radio];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Dropdown => "Dropdown",
            FieldKind::Radio => "Radio",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormError::UnknownFieldKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Field {
    Text {
        label: String,
        value: String,
    },
    Dropdown {
        label: String,
        options: Vec<String>,
        value: String,
    },
    Radio {
        label: String,
        options: Vec<String>,
        value: String,
    },
}

impl Field {
    /// A fresh field of `kind` with an empty value.
    pub fn with_defaults(kind: FieldKind, defaults: &FieldDefaults) -> Self {
        match kind {
            FieldKind::Text => Field::Text {
                label: defaults.text_label.clone(),
                value: String::new(),
            },
            FieldKind::Dropdown => Field::Dropdown {
                label: defaults.dropdown_label.clone(),
                options: defaults.options.clone(),
                value: String::new(),
            },
            FieldKind::Radio => Field::Radio {
                label: defaults.radio_label.clone(),
                options: defaults.options.clone(),
                value: String::new(),
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Text { .. } => FieldKind::Text,
            Field::Dropdown { .. } => FieldKind::Dropdown,
            Field::Radio { .. } => FieldKind::Radio,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Field::Text { label, .. }
            | Field::Dropdown { label, .. }
            | Field::Radio { label, .. } => label,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Field::Text { value, .. }
            | Field::Dropdown { value, .. }
            | Field::Radio { value, .. } => value,
        }
    }

    /// Choices offered by the field; empty for text fields.
    pub fn options(&self) -> &[String] {
        match self {
            Field::Text { .. } => &[],
            Field::Dropdown { options, .. } | Field::Radio { options, .. } => options,
        }
    }

    fn with_value(&self, new_value: &str) -> Self {
        let mut field = self.clone();
        match &mut field {
            Field::Text { value, .. }
            | Field::Dropdown { value, .. }
            | Field::Radio { value, .. } => *value = new_value.to_string(),
        }
        field
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Form actions, tagged like [`crate::action::BoardAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormAction {
    AddField { kind: FieldKind },
    UpdateField { index: usize, value: String },
}

impl FormSchema {
    /// Append a field of `kind` built from `defaults`.
    pub fn add_field(&self, kind: FieldKind, defaults: &FieldDefaults) -> FormSchema {
        let mut fields = self.fields.clone();
        fields.push(Field::with_defaults(kind, defaults));
        FormSchema { fields }
    }

    /// Replace the value of the field at `index`.
    /// An out-of-range index leaves the schema unchanged.
    pub fn update_field_value(&self, index: usize, value: &str) -> FormSchema {
        if index >= self.fields.len() {
            log::debug!(
                "[taskboard.form.update] Ignoring update for field {} of {}",
                index,
                self.fields.len()
            );
            return self.clone();
        }
        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if i == index {
                    field.with_value(value)
                } else {
                    field.clone()
                }
            })
            .collect();
        FormSchema { fields }
    }

    pub fn reduce(&self, action: &FormAction, defaults: &FieldDefaults) -> FormSchema {
        match action {
            FormAction::AddField { kind } => self.add_field(*kind, defaults),
            FormAction::UpdateField { index, value } => self.update_field_value(*index, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> FieldDefaults {
        FieldDefaults::default()
    }

    #[test]
    fn test_field_kind_parse() {
        assert_eq!("Text".parse::<FieldKind>().unwrap(), FieldKind::Text);
        assert_eq!("Radio".parse::<FieldKind>().unwrap(), FieldKind::Radio);
        assert_eq!(
            "".parse::<FieldKind>(),
            Err(FormError::UnknownFieldKind(String::new()))
        );
        assert!("dropdown".parse::<FieldKind>().is_err());
        assert_eq!(FieldKind::Dropdown.to_string(), "Dropdown");
    }

    #[test]
    fn test_add_text_field() {
        let form = FormSchema::default().add_field(FieldKind::Text, &defaults());
        assert_eq!(
            form.fields,
            vec![Field::Text {
                label: "Text Field".into(),
                value: String::new(),
            }]
        );
        assert!(form.fields[0].options().is_empty());
    }

    #[test]
    fn test_add_choice_fields_get_placeholder_options() {
        let form = FormSchema::default()
            .add_field(FieldKind::Dropdown, &defaults())
            .add_field(FieldKind::Radio, &defaults());
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields[0].label(), "Dropdown");
        assert_eq!(form.fields[1].label(), "Radio Button");
        for field in &form.fields {
            assert_eq!(field.options(), ["Option 1", "Option 2"]);
            assert_eq!(field.value(), "");
        }
        assert_eq!(form.fields[1].kind(), FieldKind::Radio);
    }

    #[test]
    fn test_update_field_value() {
        let form = FormSchema::default()
            .add_field(FieldKind::Text, &defaults())
            .add_field(FieldKind::Dropdown, &defaults());
        let updated = form.update_field_value(1, "Option 2");
        assert_eq!(updated.fields[1].value(), "Option 2");
        assert_eq!(updated.fields[0], form.fields[0]);
        assert_eq!(form.fields[1].value(), "");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let form = FormSchema::default().add_field(FieldKind::Text, &defaults());
        assert_eq!(form.update_field_value(5, "x"), form);
        assert_eq!(FormSchema::default().update_field_value(0, "x"), FormSchema::default());
    }

    #[test]
    fn test_reduce_and_wire_shape() {
        let action: FormAction =
            serde_json::from_str(r#"{"type":"addField","kind":"Radio"}"#).unwrap();
        let form = FormSchema::default().reduce(&action, &defaults());
        let form = form.reduce(
            &FormAction::UpdateField {
                index: 0,
                value: "Option 1".into(),
            },
            &defaults(),
        );
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["fields"][0]["type"], "Radio");
        assert_eq!(value["fields"][0]["value"], "Option 1");
        assert_eq!(value["fields"][0]["options"][1], "Option 2");
    }

    #[test]
    fn test_custom_defaults() {
        let custom = FieldDefaults {
            text_label: "Name".into(),
            options: vec!["Yes".into(), "No".into(), "Maybe".into()],
            ..FieldDefaults::default()
        };
        let form = FormSchema::default()
            .add_field(FieldKind::Text, &custom)
            .add_field(FieldKind::Dropdown, &custom);
        assert_eq!(form.fields[0].label(), "Name");
        assert_eq!(form.fields[1].options().len(), 3);
    }
}
