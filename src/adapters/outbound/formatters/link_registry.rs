use std::collections::HashMap;

/// Reference-style link registry for one rendered document.
///
/// Links are written as `[text][n]`; the `[n]: url` anchors are emitted
/// once after the document body. A URL keeps its first number.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    urls: Vec<String>,
    numbers: HashMap<String, usize>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `url` and returns the reference link for `text`
    pub fn make(&mut self, text: &str, url: &str) -> String {
        let number = match self.numbers.get(url) {
            Some(number) => *number,
            None => {
                self.urls.push(url.to_string());
                let number = self.urls.len();
                self.numbers.insert(url.to_string(), number);
                number
            }
        };
        format!("[{}][{}]", text, number)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Anchor lines in registration order
    pub fn anchors(&self) -> Vec<String> {
        self.urls
            .iter()
            .enumerate()
            .map(|(i, url)| format!("[{}]: {}", i + 1, url))
            .collect()
    }
}
