use super::rating::{IndicatorResult, Rating};
use super::Domain;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GradeLetter {
    A,
    B,
    C,
    D,
    F,
}

impl GradeLetter {
    /// Letter for a mean rating score in `[1, 3]`.
    pub fn from_average(average: f64) -> Self {
        if average >= 2.7 {
            Self::A
        } else if average >= 2.3 {
            Self::B
        } else if average >= 1.8 {
            Self::C
        } else if average >= 1.4 {
            Self::D
        } else {
            Self::F
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::A => "#22c55e",
            Self::B => "#84cc16",
            Self::C => "#eab308",
            Self::D => "#f97316",
            Self::F => "#ef4444",
        }
    }

    pub const fn background(self) -> &'static str {
        match self {
            Self::A => "rgba(34,197,94,0.1)",
            Self::B => "rgba(132,204,22,0.1)",
            Self::C => "rgba(234,179,8,0.1)",
            Self::D => "rgba(249,115,22,0.1)",
            Self::F => "rgba(239,68,68,0.1)",
        }
    }
}

/// Aggregate grade for one country in one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grade {
    pub letter: GradeLetter,
    pub color: &'static str,
    pub background: &'static str,
    pub summary: &'static str,
    pub average: f64,
}

impl Grade {
    /// Grade the multiset of ratings. An empty input has no grade.
    pub fn from_ratings<I>(domain: Domain, ratings: I) -> Option<Self>
    where
        I: IntoIterator<Item = Rating>,
    {
        let (total, count) = ratings
            .into_iter()
            .fold((0u32, 0u32), |(total, count), rating| {
                (total + u32::from(rating.score()), count + 1)
            });

        if count == 0 {
            return None;
        }

        let average = f64::from(total) / f64::from(count);
        let letter = GradeLetter::from_average(average);

        Some(Self {
            letter,
            color: letter.color(),
            background: letter.background(),
            summary: domain.grade_summary(letter),
            average,
        })
    }
}

pub fn compute_grade(domain: Domain, indicators: &[IndicatorResult]) -> Option<Grade> {
    Grade::from_ratings(domain, indicators.iter().map(|indicator| indicator.rating))
}
