use std::fmt;

use serde::Serialize;

use crate::error::ScoreError;
use crate::extremes::{find_extremes, Extremes};
use crate::sorting::heap_sort;
use crate::Score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub minimum: Score,
    pub maximum: Score,
    pub sorted: Vec<Score>,
}

impl Report {
    /// Extremes of `scores` plus an ascending copy; `scores` is left as is.
    pub fn from_scores(scores: &[Score]) -> Result<Self, ScoreError> {
        let Extremes { minimum, maximum } = find_extremes(scores)?;

        let mut sorted = scores.to_vec();
        heap_sort(&mut sorted);

        Ok(Report {
            minimum,
            maximum,
            sorted,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum Marks: {}", self.minimum)?;
        writeln!(f, "Maximum Marks: {}", self.maximum)?;
        writeln!(f)?;
        writeln!(f, "Marks in Ascending Order:")?;

        let line = self
            .sorted
            .iter()
            .map(|score| score.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", line)
    }
}
