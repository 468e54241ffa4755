use std::collections::HashMap;
use std::sync::RwLock;

static LOGGER_CONFIG: once_cell::sync::Lazy<RwLock<LoggingConfig>> =
    once_cell::sync::Lazy::new(|| RwLock::new(LoggingConfig::default()));

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub enum LogLevel {
    INFO,
    VERBOSE,
}

/// Prints `[file:line] message` when the calling component (`Self::CC`) is enabled.
#[macro_export]
macro_rules! logln {
    ($fmt:literal) => {
        if $crate::util::logging::is_enabled(Self::CC) {
            println!("[{}:{}] {}", file!(), line!(), $fmt);
        }
    };
    ($fmt:literal, $($arg:tt)*) => {
        if $crate::util::logging::is_enabled(Self::CC) {
            print!("[{}:{}] ", file!(), line!());
            println!($fmt, $($arg)*);
        }
    };
}

/// Same as `logln!` but only once the component or the global level is `VERBOSE`.
#[macro_export]
macro_rules! logvbln {
    ($fmt:literal) => {
        if $crate::util::logging::is_enabled(Self::CC)
            && $crate::util::logging::is_at_level(Self::CC, $crate::util::logging::LogLevel::VERBOSE)
        {
            println!("[{}:{}] {}", file!(), line!(), $fmt);
        }
    };
    ($fmt:literal, $($arg:tt)*) => {
        if $crate::util::logging::is_enabled(Self::CC)
            && $crate::util::logging::is_at_level(Self::CC, $crate::util::logging::LogLevel::VERBOSE)
        {
            print!("[{}:{}] ", file!(), line!());
            println!($fmt, $($arg)*);
        }
    };
}

fn with_config<R>(f: impl FnOnce(&LoggingConfig) -> R) -> R {
    match LOGGER_CONFIG.read() {
        Ok(config) => f(&*config),
        Err(poisoned) => f(&*poisoned.into_inner()),
    }
}

fn with_config_mut(f: impl FnOnce(&mut LoggingConfig)) {
    match LOGGER_CONFIG.write() {
        Ok(mut config) => f(&mut *config),
        Err(poisoned) => f(&mut *poisoned.into_inner()),
    }
}

pub fn is_enabled(cc: &'static str) -> bool {
    with_config(|config| config.cc_enabled(cc))
}

pub fn is_at_level(cc: &'static str, level: LogLevel) -> bool {
    with_config(|config| config.cc_at_level(cc, level))
}

pub fn disable_cc(cc: &str) {
    with_config_mut(|config| config.disable_cc(cc));
}

pub fn enable_cc(cc: &str, level: LogLevel) {
    with_config_mut(|config| config.enable_cc(cc, level));
}

pub fn set_global_logging(enabled: bool) {
    if enabled {
        with_config_mut(LoggingConfig::enable_global_tracing);
    } else {
        with_config_mut(LoggingConfig::disable_global_tracing);
    }
}

pub fn set_global_level(level: LogLevel) {
    with_config_mut(|config| config.set_global_level(level));
}

pub struct LoggingConfig {
    global_tracing_enabled: bool,
    global_level: LogLevel,
    flags: HashMap<String, (bool, LogLevel)>, // <component code, (enabled, level)>
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_tracing_enabled: true,
            global_level: LogLevel::INFO,
            flags: Default::default(),
        }
    }
}

impl LoggingConfig {
    pub fn cc_enabled(&self, cc: &str) -> bool {
        if !self.global_tracing_enabled {
            return false;
        }

        self.flags.get(cc).unwrap_or(&(true, LogLevel::INFO)).0
    }

    pub fn cc_at_level(&self, cc: &str, level: LogLevel) -> bool {
        if self.global_level >= level {
            return true;
        }

        self.flags.get(cc).unwrap_or(&(true, LogLevel::INFO)).1 == level
    }

    pub fn enable_cc(&mut self, cc: &str, level: LogLevel) {
        self.flags.insert(cc.to_string(), (true, level));
    }

    pub fn disable_cc(&mut self, cc: &str) {
        self.flags.insert(cc.to_string(), (false, LogLevel::INFO));
    }

    pub fn enable_global_tracing(&mut self) {
        self.global_tracing_enabled = true;
    }

    pub fn disable_global_tracing(&mut self) {
        self.global_tracing_enabled = false;
    }

    pub fn set_global_level(&mut self, level: LogLevel) {
        self.global_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_components_log_at_info() {
        let config = LoggingConfig::default();

        assert!(config.cc_enabled("Sleep"));
        assert!(config.cc_at_level("Sleep", LogLevel::INFO));
        assert!(!config.cc_at_level("Sleep", LogLevel::VERBOSE));
    }

    #[test]
    fn component_flags_override_defaults() {
        let mut config = LoggingConfig::default();
        config.enable_cc("FitbitApi", LogLevel::VERBOSE);
        config.disable_cc("Nutrition");

        assert!(config.cc_at_level("FitbitApi", LogLevel::VERBOSE));
        assert!(!config.cc_enabled("Nutrition"));

        config.disable_global_tracing();
        assert!(!config.cc_enabled("FitbitApi"));
    }

    #[test]
    fn global_verbose_covers_every_component() {
        let mut config = LoggingConfig::default();
        config.set_global_level(LogLevel::VERBOSE);

        assert!(config.cc_at_level("HeartRate", LogLevel::VERBOSE));
    }
}
