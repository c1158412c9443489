use crate::config::Config;
use crate::convert::converter::Converter;
use crate::convert::scanner::Scanner;
use std::borrow::Cow;

/// Scanner and converter bound to one configuration.
///
/// Built once per installation and reused for every write.
#[derive(Debug, Clone)]
pub struct Rewriter {
    config: Config,
    scanner: Scanner,
    converter: Converter,
}

impl Rewriter {
    pub fn new(config: Config) -> Self {
        let scanner = Scanner::new(&config.unit);
        let converter = Converter::new(&config);
        Self {
            config,
            scanner,
            converter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rewrite every eligible length in `value`.
    pub fn rewrite<'h>(&self, value: &'h str) -> Cow<'h, str> {
        let rewritten = self
            .scanner
            .replace_all(value, |token| self.converter.convert(token.text, token.number));
        if let Cow::Owned(ref out) = rewritten {
            log::debug!("rewrote style value {:?} -> {:?}", value, out);
        }
        rewritten
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
