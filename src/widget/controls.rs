//! Toolkit-free state holders for the form controls. The egui layer in
//! `crate::ui` renders these; the binders read and write them. Keeping the
//! state separate from the rendering is what makes reconciliation testable
//! without a window.

use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    pub checked: bool,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Integer field with an inclusive range. Out-of-range input is clamped at
/// the editing surface, never rejected.
#[derive(Debug, Clone)]
pub struct SpinBox {
    value: i64,
    pub min: i64,
    pub max: i64,
}

impl SpinBox {
    pub fn new(value: i64, min: i64, max: i64) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Mutable access for the renderer; the value is re-clamped afterwards
    /// via `clamp_in_range`.
    pub fn value_mut(&mut self) -> &mut i64 {
        &mut self.value
    }

    pub fn clamp_in_range(&mut self) {
        self.value = self.value.clamp(self.min, self.max);
    }
}

#[derive(Debug, Clone)]
pub struct DoubleSpinBox {
    value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl DoubleSpinBox {
    pub fn new(value: f64, min: f64, max: f64, step: f64) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn value_mut(&mut self) -> &mut f64 {
        &mut self.value
    }

    pub fn clamp_in_range(&mut self) {
        self.value = self.value.clamp(self.min, self.max);
    }
}

/// Single choice out of a fixed set. The current text always stays within
/// the choice list; setting an unknown value is ignored.
#[derive(Debug, Clone)]
pub struct ComboBox {
    current: String,
    pub choices: Vec<String>,
}

impl ComboBox {
    pub fn new(current: &str, choices: Vec<String>) -> Self {
        let mut combo = Self {
            current: choices.first().cloned().unwrap_or_default(),
            choices,
        };
        combo.set_current(current);
        combo
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set_current(&mut self, value: &str) {
        if self.choices.iter().any(|c| c == value) {
            self.current = value.to_string();
        }
    }

    pub fn current_mut(&mut self) -> &mut String {
        &mut self.current
    }
}

/// Free text with an optional validation predicate. Validation failures
/// are surfaced inline next to the field; they never block saving.
#[derive(Clone)]
pub struct LineEdit {
    pub text: String,
    pub placeholder: String,
    validator: Option<fn(&str) -> Result<()>>,
}

impl LineEdit {
    pub fn new(text: &str, placeholder: &str) -> Self {
        Self {
            text: text.to_string(),
            placeholder: placeholder.to_string(),
            validator: None,
        }
    }

    pub fn with_validator(mut self, validator: fn(&str) -> Result<()>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validate(&self) -> Result<()> {
        match self.validator {
            Some(validator) => validator(&self.text),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for LineEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEdit")
            .field("text", &self.text)
            .field("placeholder", &self.placeholder)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}
