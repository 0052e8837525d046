use crate::error::Result;
use crate::model::Candidate;
use log::info;
use std::collections::HashMap;
use std::io::BufRead;

pub mod json;
pub mod stream;

/// Where candidates come from. Every variant is converted eagerly into
/// `Candidate`s; nothing downstream knows which one was used.
pub enum CandidateSource<R> {
    /// Newline separated text. Each line is both searched and returned.
    Lines(R),
    /// Explicit `(search_text, return_value)` pairs, kept in order.
    Pairs(Vec<(String, String)>),
    /// Map key is returned, map value is searched. Order is unspecified.
    Map(HashMap<String, String>),
}

impl CandidateSource<std::io::Empty> {
    pub fn from_pairs<I, S, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<String>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(s, v)| (s.into(), v.into()))
                .collect(),
        )
    }

    pub fn from_map(map: HashMap<String, String>) -> Self {
        Self::Map(map)
    }

    pub fn from_list<I, S>(list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Pairs(
            list.into_iter()
                .map(|s| {
                    let s = s.into();
                    (s.clone(), s)
                })
                .collect(),
        )
    }
}

impl<R: BufRead> CandidateSource<R> {
    pub fn load(self) -> Result<Vec<Candidate>> {
        let candidates = match self {
            CandidateSource::Lines(reader) => stream::read_lines(reader)?,
            CandidateSource::Pairs(pairs) => pairs
                .into_iter()
                .map(|(search, value)| Candidate::new(search, value))
                .collect(),
            CandidateSource::Map(map) => map
                .into_iter()
                .map(|(value, search)| Candidate::new(search, value))
                .collect(),
        };
        info!("CandidateSource: loaded {} candidates", candidates.len());
        Ok(candidates)
    }
}
