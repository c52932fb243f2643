use std::fmt::Display;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Application-wide error types for the `folio` command line front end.
///
/// The theme subsystem itself never fails (it falls back to defaults), so
/// these errors come from the edges: configuration, files on disk, the
/// Spotify proxy and the project content loader.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Io`] - File system failures, including the persisted theme state
/// - [`Theme`] - A theme key or style typed on the command line was rejected
/// - [`NowPlaying`] - Spotify credentials, token exchange or HTTP failures
/// - [`Content`] - Project files that are missing or malformed
///
/// # Examples
///
/// ```no_run
/// use folio::error::{AppError, ErrorReporter};
///
/// let reporter = ErrorReporter::stderr();
/// reporter.report_error(AppError::Config("missing [spotify] section".to_string()));
/// ```
///
/// [`Config`]: AppError::Config
/// [`Io`]: AppError::Io
/// [`Theme`]: AppError::Theme
/// [`NowPlaying`]: AppError::NowPlaying
/// [`Content`]: AppError::Content
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// # Recovery
    /// - Fall back to the embedded defaults
    /// - Point the user at the config file that failed to parse
    Config(String),

    /// File system and I/O failures.
    Io(String),

    /// A theme key or style variant was rejected.
    ///
    /// Only raised for values the user typed; persisted values that fail
    /// validation are replaced by defaults instead.
    Theme(String),

    /// Spotify proxy failures.
    ///
    /// # Recovery
    /// - Check `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and `SPOTIFY_REFRESH_TOKEN`
    /// - Generate a new refresh token if Spotify answers `invalid_grant`
    NowPlaying(String),

    /// Project content errors.
    Content(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::NowPlaying(msg) => write!(f, "Now Playing Error: {msg}"),
            AppError::Content(msg) => write!(f, "Content Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<server::common::NowPlayingError> for AppError {
    fn from(err: server::common::NowPlayingError) -> Self {
        AppError::NowPlaying(err.to_string())
    }
}

impl From<server::common::ContentError> for AppError {
    fn from(err: server::common::ContentError) -> Self {
        AppError::Content(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
}

impl ErrorContext {
    /// Create new error context with component and operation
    /// Uses generic message based on component/operation. Use .with_message() for custom messages.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: Self::generate_fallback_message(component),
            technical_details: None,
            suggestion: None,
        }
    }

    fn generate_fallback_message(component: &str) -> String {
        format!("An error occurred in {component}. Please try again.")
    }

    /// Builder pattern method for setting custom user message
    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    /// Builder pattern method for adding technical details
    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    /// Builder pattern method for adding user suggestion
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Contextual error with rich information
#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Central error reporting system.
///
/// Every report is logged with its full context and a formatted version is
/// written to the user-facing sink, stderr for the CLI.
#[derive(Clone)]
pub struct ErrorReporter {
    sink: Arc<Mutex<dyn Write + Send>>,
}

impl ErrorReporter {
    pub fn new(sink: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self { sink }
    }

    pub fn stderr() -> Self {
        Self::new(Arc::new(Mutex::new(std::io::stderr())))
    }

    /// Report error with context derived from its variant
    pub fn report_error(&self, error: AppError) {
        let context = match &error {
            AppError::Config(msg) => ErrorContext::new("Configuration", "load")
                .with_message("Failed to load configuration")
                .with_technical_details(msg)
                .with_suggestion("Check config.toml and the FOLIO environment overrides"),
            AppError::Io(msg) => ErrorContext::new("Filesystem", "access")
                .with_message("A file could not be read or written")
                .with_technical_details(msg),
            AppError::Theme(msg) => ErrorContext::new("Theme", "select")
                .with_message(msg)
                .with_suggestion("Run `folio theme list` to see every theme"),
            AppError::NowPlaying(msg) => ErrorContext::new("NowPlaying", "fetch")
                .with_message("Could not ask Spotify what is playing")
                .with_technical_details(msg)
                .with_suggestion(
                    "Check SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET and SPOTIFY_REFRESH_TOKEN",
                ),
            AppError::Content(msg) => ErrorContext::new("Content", "load")
                .with_message("Could not load project content")
                .with_technical_details(msg),
        };
        self.report(error, context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        log::error!(
            "[{}:{}] {} {}",
            context.component,
            context.operation,
            contextual_error,
            self.format_additional_context(&context)
        );

        let text = self.format_error(&error, &context);

        match self.sink.lock() {
            Ok(mut sink) => {
                if let Err(e) = writeln!(sink, "{text}") {
                    log::error!("Failed to write error report: {e}");
                }
            }
            Err(_) => log::error!("Error report sink is poisoned"),
        }
    }

    /// Format additional context information for logging
    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("🔍 Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("💡 Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_error(&self, error: &AppError, context: &ErrorContext) -> String {
        let emoji = match error {
            AppError::Config(_) => "⚙️",
            AppError::Io(_) => "📁",
            AppError::Theme(_) => "🎨",
            AppError::NowPlaying(_) => "🎵",
            AppError::Content(_) => "📄",
        };

        let mut formatted = format!("{} {}", emoji, self.get_error_title(error));
        formatted.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted.push_str(&format!("\n\n🔍 Details: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted.push_str(&format!("\n\n💡 Suggestion: {suggestion}"));
        }

        formatted
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Config(_) => "Configuration Error",
            AppError::Io(_) => "File Error",
            AppError::Theme(_) => "Theme Error",
            AppError::NowPlaying(_) => "Now Playing Error",
            AppError::Content(_) => "Content Error",
        }
    }

    /// Report configuration errors with suggestions
    pub fn report_config_error(&self, config_type: &str, error: impl Display) {
        let context = ErrorContext::new("Configuration", "load")
            .with_message(&format!("Invalid {config_type} configuration"))
            .with_technical_details(&error.to_string())
            .with_suggestion("Check your config.toml file");
        self.report(AppError::Config(error.to_string()), context);
    }
}
