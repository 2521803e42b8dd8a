/// How task views are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `T1 | title | Due: ... | Priority: ... | Done: ...`
    #[default]
    Text,
    /// One JSON object per task.
    Json,
}

/// Shell settings, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub output: OutputFormat,
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            banner: true,
        }
    }
}
