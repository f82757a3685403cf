use crate::alignment::DEFAULT_GAP_CHAR;
use crate::scoring::Scores;
use crate::Aligner;

pub struct AlignerBuilder {
    scores: Option<Scores>,
    gap_char: Option<char>,
}

impl Default for AlignerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignerBuilder {
    pub fn new() -> Self {
        Self {
            scores: None,
            gap_char: None,
        }
    }
    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = Some(scores);
        self
    }
    pub fn with_gap_char(mut self, gap_char: char) -> Self {
        self.gap_char = Some(gap_char);
        self
    }
    pub fn build(self) -> Aligner {
        Aligner::with_config(
            self.scores.unwrap_or_default(),
            self.gap_char.unwrap_or(DEFAULT_GAP_CHAR),
        )
    }
}
