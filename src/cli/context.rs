use bw_config::ConfigManager;

use crate::{cli::registry::CommandRegistry, App, AppError};

/// State shared by command handlers during one invocation.
pub struct CliContext {
    pub registry: CommandRegistry,
    manager: ConfigManager,
    app: Option<App>,
}

impl CliContext {
    pub fn new(registry: CommandRegistry, manager: ConfigManager) -> Self {
        Self {
            registry,
            manager,
            app: None,
        }
    }

    /// Opens the application on first use; `help` and `version` never do.
    pub fn app(&mut self) -> Result<&App, AppError> {
        if self.app.is_none() {
            let app = App::open(&self.manager)?;
            crate::init_with_filter(&app.config().log_filter);
            self.app = Some(app);
        }
        self.app
            .as_ref()
            .ok_or_else(|| AppError::Command("application failed to open".into()))
    }
}
