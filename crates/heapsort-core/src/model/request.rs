use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::HeapSortError;

pub const DEFAULT_MIN_VALUE: i32 = 1;
pub const DEFAULT_MAX_VALUE: i32 = 1000;

/// Where an inserted value goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Start,
    End,
    After,
}

impl InsertPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPosition::Start => "start",
            InsertPosition::End => "end",
            InsertPosition::After => "after",
        }
    }
}

/// Tags are matched case-insensitively.
impl FromStr for InsertPosition {
    type Err = HeapSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(InsertPosition::Start),
            "end" => Ok(InsertPosition::End),
            "after" => Ok(InsertPosition::After),
            _ => Err(HeapSortError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// A single-element insert request
///
/// `index` is only read for [`InsertPosition::After`], where it is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertSpec {
    pub value: i32,
    pub position: InsertPosition,
    pub index: Option<i64>,
}

impl InsertSpec {
    pub fn start(value: i32) -> Self {
        Self {
            value,
            position: InsertPosition::Start,
            index: None,
        }
    }

    pub fn end(value: i32) -> Self {
        Self {
            value,
            position: InsertPosition::End,
            index: None,
        }
    }

    pub fn after(value: i32, index: i64) -> Self {
        Self {
            value,
            position: InsertPosition::After,
            index: Some(index),
        }
    }

    /// Build from an untyped position tag, as received from a front-end
    ///
    /// # Errors
    ///
    /// `InvalidPosition` for an unknown tag.
    pub fn parse(value: i32, position: &str, index: Option<i64>) -> Result<Self, HeapSortError> {
        Ok(Self {
            value,
            position: position.parse()?,
            index,
        })
    }
}

/// Slice bounds; both optional, clamped rather than validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceSpec {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl SliceSpec {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }
}

/// Parameters for random array generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSpec {
    pub size: i64,
    pub min: i32,
    pub max: i32,
}

impl GenerateSpec {
    /// `size` elements in the default range `[1, 1000]`
    pub fn new(size: i64) -> Self {
        Self {
            size,
            min: DEFAULT_MIN_VALUE,
            max: DEFAULT_MAX_VALUE,
        }
    }

    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Fill missing bounds with the defaults
    pub fn from_options(size: i64, min: Option<i32>, max: Option<i32>) -> Self {
        Self {
            size,
            min: min.unwrap_or(DEFAULT_MIN_VALUE),
            max: max.unwrap_or(DEFAULT_MAX_VALUE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("START".parse::<InsertPosition>(), Ok(InsertPosition::Start));
        assert_eq!("End".parse::<InsertPosition>(), Ok(InsertPosition::End));
        assert_eq!("after".parse::<InsertPosition>(), Ok(InsertPosition::After));
    }

    #[test]
    fn test_unknown_position_names_accepted_set() {
        let err = "middle".parse::<InsertPosition>().unwrap_err();
        assert_eq!(
            err,
            HeapSortError::InvalidPosition {
                position: "middle".to_string()
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("'start'") && msg.contains("'end'") && msg.contains("'after'"));
    }

    #[test]
    fn test_generate_spec_defaults() {
        let spec = GenerateSpec::from_options(5, None, Some(20));
        assert_eq!(spec, GenerateSpec::new(5).with_range(1, 20));
    }
}
