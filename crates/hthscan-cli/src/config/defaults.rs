pub struct DefaultsConfig {
    pub threads: Option<usize>,
    pub show_progress: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            threads: None,
            show_progress: true,
        }
    }
}
