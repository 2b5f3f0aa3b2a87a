use crate::choice::ChoiceSet;
use crate::config::{Config, MarkerStyle, OutputFormat};
use crate::picker::{PickerState, SessionOutcome};

pub struct App {
    pub picker: PickerState,
    pub marker: MarkerStyle,
    pub output_format: OutputFormat,
    pub title: String,
    /// Config load warning, shown on the help line for the session
    pub warning: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(choices: ChoiceSet<String>, config: &Config) -> Self {
        Self {
            picker: PickerState::new(choices),
            marker: config.ui.marker,
            output_format: config.output.format,
            title: String::from("Pick"),
            warning: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The session result, present once the user applied or cancelled.
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.picker.outcome()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::test_helpers::test_app;

    #[test]
    fn test_app_initialization() {
        let app = test_app(&["a", "b"]);

        assert_eq!(app.picker.cursor(), 0);
        assert_eq!(app.picker.selected_count(), 0);
        assert!(!app.should_quit());
        assert_eq!(app.outcome(), None);
        assert_eq!(app.warning, None);
        assert_eq!(app.title, "Pick");
    }
}
