use regex::Regex;

/// Finds the holdings dataset URI inside a product page body.
///
/// Returning `None` is a normal outcome: some funds (single-commodity
/// trusts, for instance) publish no holdings dataset.
pub trait HoldingsLocator: Send + Sync {
    fn locate(&self, page: &str) -> Option<String>;
}

/// Text pattern match over the raw page body.
#[derive(Debug, Clone)]
pub struct PatternLocator {
    pattern: Regex,
}

impl PatternLocator {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl HoldingsLocator for PatternLocator {
    fn locate(&self, page: &str) -> Option<String> {
        self.pattern
            .find(page)
            .map(|found| found.as_str().to_string())
    }
}
