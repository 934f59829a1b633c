use thiserror::Error;
use tracing_subscriber::EnvFilter;
use crate::config::LoggingSettings;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level; an unparsable
/// `RUST_LOG` falls back to the configured level with a warning. Format `"pretty"`
/// gives multi-line human output; anything else uses the compact default.
pub fn init(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = select_filter(env_directives.as_deref(), &settings.level)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|_| LoggingError::AlreadyInitialized)?;
    if let Some(directives) = rejected {
        tracing::warn!(
            "Ignoring unparsable {}='{}', using configured level '{}'",
            EnvFilter::DEFAULT_ENV,
            directives,
            settings.level
        );
    }
    tracing::debug!("Logging initialized (level: {}, format: {})", settings.level, settings.format);
    Ok(())
}

/// Pick the env directives when they parse, else the configured level.
///
/// The second element carries env directives that were set but rejected.
fn select_filter(
    env_directives: Option<&str>,
    level: &str,
) -> Result<(EnvFilter, Option<String>), LoggingError> {
    match env_directives {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => Ok((filter, None)),
            Err(_) => Ok((build_filter(level)?, Some(directives.to_string()))),
        },
        None => Ok((build_filter(level)?, None)),
    }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLevel {
        level: level.to_string(),
        source,
    })
}
