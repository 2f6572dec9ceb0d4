#[derive(Clone, Debug)]
pub struct Settings {
    pub quiz_sizes: Vec<usize>,
    pub fill_percent: usize,
    pub pass_mark_percent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quiz_sizes: vec![25, 50, 100],
            fill_percent: 20,
            pass_mark_percent: 70,
        }
    }
}
