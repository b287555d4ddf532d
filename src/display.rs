/// Values shown by the progress bar and slide counter.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub progress_percent: f32,
    pub counter_text: String,
}

impl DisplayModel {
    pub fn project(current: usize, total: usize) -> Self {
        Self {
            progress_percent: progress_percent(current, total),
            counter_text: counter_text(current, total),
        }
    }
}

pub fn progress_percent(current: usize, total: usize) -> f32 {
    (current + 1) as f32 / total as f32 * 100.0
}

pub fn counter_text(current: usize, total: usize) -> String {
    format!("{} / {}", current + 1, total)
}
