use log::LevelFilter;
use log4rs::config::Logger;
use std::{collections::BTreeMap, env};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum LogError {
    #[error("Logger spec parsing error: {0}")]
    ParseLoggerSpecError(String),
}

pub(super) struct Loggers {
    loggers: Vec<(String, LevelFilter)>,
    root_level: LevelFilter,
}

impl Loggers {
    pub fn root_level(&self) -> LevelFilter {
        self.root_level
    }

    pub fn items(&self) -> impl IntoIterator<Item = Logger> + '_ {
        self.loggers.iter().map(|(name, level)| Logger::builder().build(name.clone(), *level))
    }
}

/// Collects `<level>` and `<module>=<level>` filter specs. Later specs win.
pub(super) struct Builder {
    loggers: BTreeMap<String, LevelFilter>,
    root_level: Option<LevelFilter>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder { loggers: BTreeMap::new(), root_level: None }
    }

    pub fn parse_env(&mut self, env: &str) -> &mut Self {
        self.parse_expression(&env::var(env).unwrap_or_default())
    }

    pub fn parse_expression(&mut self, expression: &str) -> &mut Self {
        for spec in expression.split(',').map(|x| x.trim()) {
            if spec.is_empty() {
                continue;
            }
            let mut parts = spec.split('=');
            let (log_level, name) = match (parts.next(), parts.next().map(|x| x.trim()), parts.next()) {
                // a lone level sets the root, a lone name enables everything for that module
                (Some(part0), None, None) => match part0.parse() {
                    Ok(lvl) => (lvl, None),
                    Err(_) => (LevelFilter::max(), Some(part0)),
                },
                (Some(part0), Some(""), None) => (LevelFilter::max(), Some(part0)),
                (Some(part0), Some(part1), None) => match part1.parse() {
                    Ok(lvl) => (lvl, Some(part0)),
                    _ => {
                        eprintln!("Ignoring invalid logging spec '{}'", LogError::ParseLoggerSpecError(part1.to_string()));
                        continue;
                    }
                },
                _ => {
                    eprintln!("Ignoring invalid logging spec '{}'", LogError::ParseLoggerSpecError(spec.to_string()));
                    continue;
                }
            };
            match name {
                Some(name) => {
                    self.loggers.insert(name.to_string(), log_level);
                }
                None => self.root_level = Some(log_level),
            }
        }
        self
    }

    pub fn build(&mut self) -> Loggers {
        Loggers {
            loggers: std::mem::take(&mut self.loggers).into_iter().collect(),
            root_level: self.root_level.unwrap_or(LevelFilter::Error),
        }
    }
}
