/// Interactive input requested while finishing a gesture.
///
/// `None` means the user cancelled the dialog.
pub trait Prompt {
    /// Asks for the name of a new room, pre-filled with `default`.
    fn room_name(&mut self, default: &str) -> Option<String>;

    /// Asks for a measurement label, pre-filled with `suggested`.
    fn measurement_label(&mut self, suggested: &str) -> Option<String>;
}

/// Confirms every dialog with its pre-filled value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl Prompt for AcceptDefaults {
    fn room_name(&mut self, default: &str) -> Option<String> {
        Some(default.to_string())
    }

    fn measurement_label(&mut self, suggested: &str) -> Option<String> {
        Some(suggested.to_string())
    }
}

/// Cancels every dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelAll;

impl Prompt for CancelAll {
    fn room_name(&mut self, _default: &str) -> Option<String> {
        None
    }

    fn measurement_label(&mut self, _suggested: &str) -> Option<String> {
        None
    }
}

/// Answers with fixed values. A `None` field cancels that dialog.
#[derive(Debug, Clone, Default)]
pub struct FixedPrompt {
    pub room_name: Option<String>,
    pub measurement_label: Option<String>,
}

impl FixedPrompt {
    pub fn room(name: impl Into<String>) -> Self {
        Self {
            room_name: Some(name.into()),
            measurement_label: None,
        }
    }

    pub fn label(value: impl Into<String>) -> Self {
        Self {
            room_name: None,
            measurement_label: Some(value.into()),
        }
    }
}

impl Prompt for FixedPrompt {
    fn room_name(&mut self, _default: &str) -> Option<String> {
        self.room_name.clone()
    }

    fn measurement_label(&mut self, _suggested: &str) -> Option<String> {
        self.measurement_label.clone()
    }
}
