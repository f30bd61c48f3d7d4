use crate::records::PopulationRecord;
use tracing::warn;

/// Age bucket label as published by the population table (`"15-19"`, `"100+"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    Range { low: u32, high: u32 },
    OpenEnded { low: u32 },
}

impl AgeBucket {
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Some(low) = label.strip_suffix('+') {
            return low.trim().parse().ok().map(|low| Self::OpenEnded { low });
        }

        let (low, high) = label.split_once('-')?;
        let low: u32 = low.trim().parse().ok()?;
        let high: u32 = high.trim().parse().ok()?;
        (low <= high).then_some(Self::Range { low, high })
    }

    pub const fn low(self) -> u32 {
        match self {
            Self::Range { low, .. } | Self::OpenEnded { low } => low,
        }
    }

    /// Buckets starting at 15 or younger, or at 60 or older, count as dependants.
    pub const fn is_dependent(self) -> bool {
        let low = self.low();
        low <= 15 || low >= 60
    }
}

/// Working-age versus dependant population totals for one year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgeStructure {
    pub year: Option<i32>,
    pub working: f64,
    pub dependent: f64,
    pub skipped_buckets: usize,
}

impl AgeStructure {
    /// Tally the population series. When rows carry years only the latest year
    /// is used; rows with unrecognised bucket labels are skipped.
    pub fn from_population(records: &[PopulationRecord]) -> Self {
        let year = records.iter().filter_map(|record| record.year).max();
        let mut structure = Self {
            year,
            ..Self::default()
        };

        for record in records
            .iter()
            .filter(|record| year.is_none() || record.year == year)
        {
            match AgeBucket::parse(&record.age_group) {
                Some(bucket) if bucket.is_dependent() => structure.dependent += record.total(),
                Some(_) => structure.working += record.total(),
                None => structure.skipped_buckets += 1,
            }
        }

        if structure.skipped_buckets > 0 {
            warn!(
                skipped = structure.skipped_buckets,
                "ignored population rows with unrecognised age buckets"
            );
        }

        structure
    }

    /// Dependants per 100 working-age people; `None` without a working population.
    pub fn ratio(&self) -> Option<f64> {
        (self.working > 0.0).then(|| self.dependent / self.working * 100.0)
    }
}
