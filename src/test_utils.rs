//! Shared helpers for unit tests.

pub mod test_helpers {
    use crate::app::App;
    use crate::choice::ChoiceSet;
    use crate::config::Config;

    /// App over the given choices with default config
    pub fn test_app(choices: &[&str]) -> App {
        let set = ChoiceSet::new(choices.iter().map(|c| c.to_string()).collect())
            .expect("test choices must be valid");
        App::new(set, &Config::default())
    }
}
