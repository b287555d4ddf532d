use crate::constants::*;

/// A metric value that counts up from zero, e.g. `$12,500` or `37`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    prefix: String,
    suffix: String,
    target: u64,
}

impl CounterAnimation {
    /// Splits `text` around its integer core. Returns `None` when the core
    /// holds anything other than digits and thousands separators, or is zero.
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let end = text.rfind(|c: char| c.is_ascii_digit())? + 1;
        let core = &text[start..end];
        if !core.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return None;
        }

        let digits: String = core.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok().filter(|&t| t > 0)?;
        Some(Self {
            prefix: text[..start].to_string(),
            suffix: text[end..].to_string(),
            target,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value shown `elapsed` seconds after the counter started.
    pub fn value_at(&self, elapsed: f64) -> u64 {
        let steps = (elapsed.max(0.0) / COUNTER_FRAME_TIME).floor() as u64;
        if steps >= COUNTER_FRAMES as u64 {
            return self.target;
        }
        let increment = self.target as f64 / COUNTER_FRAMES as f64;
        ((steps as f64 * increment).floor() as u64).min(self.target)
    }

    pub fn text_at(&self, elapsed: f64) -> String {
        format!("{}{}{}", self.prefix, group_thousands(self.value_at(elapsed)), self.suffix)
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
