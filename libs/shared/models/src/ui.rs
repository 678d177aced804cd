//! Stateless presentational primitives shared by every section view.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-gradient-to-r from-blue-600 to-blue-500 text-white hover:from-blue-700 hover:to-blue-600 focus:ring-4 focus:ring-blue-300",
            ButtonVariant::Secondary => "bg-blue-100 text-blue-700 hover:bg-blue-200 focus:ring-4 focus:ring-blue-100",
            ButtonVariant::Outline => "bg-transparent border-2 border-blue-600 text-blue-600 hover:bg-blue-50 focus:ring-4 focus:ring-blue-100",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "text-sm px-4 py-2",
            ButtonSize::Md => "text-base px-6 py-2.5",
            ButtonSize::Lg => "text-lg px-8 py-3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

const BUTTON_BASE: &str = "rounded-lg font-medium transition-all duration-200 flex items-center justify-center";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    #[serde(rename = "type")]
    pub kind: ButtonType,
    pub disabled: bool,
    /// Route the front-end posts to when clicked, if any.
    pub action: Option<String>,
    pub class_name: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            kind: ButtonType::default(),
            disabled: false,
            action: None,
            class_name: String::new(),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn submit(mut self) -> Self {
        self.kind = ButtonType::Submit;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn class_name(mut self, extra: impl Into<String>) -> Self {
        self.class_name = extra.into();
        self
    }

    /// Full class list in the same order the stylesheet expects.
    pub fn classes(&self) -> String {
        let state = if self.disabled { "opacity-50 cursor-not-allowed" } else { "cursor-pointer" };
        [BUTTON_BASE, self.variant.classes(), self.size.classes(), state, self.class_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card<T> {
    pub class_name: String,
    pub body: T,
}

impl<T> Card<T> {
    pub fn new(body: T) -> Self {
        Self {
            class_name: "bg-white rounded-xl shadow-md overflow-hidden".to_string(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modal<T> {
    pub open: bool,
    pub title: String,
    pub body: T,
}
