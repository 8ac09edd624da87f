use serde::{Serialize, Serializer};

/// A half-open interval `[start, end)` where a primer matched the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// A candidate PCR product: forward-role match start and product size in bp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmpliconCandidate {
    pub start: usize,
    pub size: i64,
}

impl AmpliconCandidate {
    #[must_use]
    pub fn new(start: usize, size: i64) -> Self {
        Self { start, size }
    }
}

/// Strand orientation in which a primer pair can produce a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Forward primer on the given strand, reverse primer downstream on the opposite strand
    Pattern1,
    /// Reverse primer on the given strand, forward primer downstream on the opposite strand
    Pattern2,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Pattern1, Orientation::Pattern2];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pattern1 => "pattern 1",
            Self::Pattern2 => "pattern 2",
        }
    }

    /// Human readable description used by the text report
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Pattern1 => "Forward primer on forward strand",
            Self::Pattern2 => "Forward primer on reverse strand",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Orientation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Both result sets for one chromosome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromosomeScan {
    pub chromosome: String,

    #[serde(rename = "pattern 1")]
    pub pattern_1: Vec<AmpliconCandidate>,

    #[serde(rename = "pattern 2")]
    pub pattern_2: Vec<AmpliconCandidate>,
}

impl ChromosomeScan {
    #[must_use]
    pub fn results(&self, orientation: Orientation) -> &[AmpliconCandidate] {
        match orientation {
            Orientation::Pattern1 => &self.pattern_1,
            Orientation::Pattern2 => &self.pattern_2,
        }
    }

    /// Lookup by report key (`"pattern 1"` / `"pattern 2"`)
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[AmpliconCandidate]> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.label() == label)
            .map(|o| self.results(o))
    }

    #[must_use]
    pub fn has_hits(&self) -> bool {
        !self.pattern_1.is_empty() || !self.pattern_2.is_empty()
    }

    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.pattern_1.len() + self.pattern_2.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_labels() {
        assert_eq!(Orientation::Pattern1.to_string(), "pattern 1");
        assert_eq!(Orientation::Pattern2.to_string(), "pattern 2");
    }

    #[test]
    fn test_chromosome_scan_lookup() {
        let scan = ChromosomeScan {
            chromosome: "chr1".to_string(),
            pattern_1: vec![AmpliconCandidate::new(10, 25)],
            pattern_2: Vec::new(),
        };

        assert_eq!(scan.get("pattern 1"), Some(&[AmpliconCandidate::new(10, 25)][..]));
        assert_eq!(scan.get("pattern 2"), Some(&[][..]));
        assert_eq!(scan.get("pattern 3"), None);
        assert!(scan.has_hits());
        assert_eq!(scan.hit_count(), 1);
    }

    #[test]
    fn test_chromosome_scan_json_keys() {
        let scan = ChromosomeScan {
            chromosome: "chr1".to_string(),
            pattern_1: vec![AmpliconCandidate::new(10, 25)],
            pattern_2: Vec::new(),
        };

        let json = serde_json::to_value(&scan).unwrap();
        assert_eq!(json["chromosome"], "chr1");
        assert_eq!(json["pattern 1"][0]["start"], 10);
        assert_eq!(json["pattern 1"][0]["size"], 25);
        assert!(json["pattern 2"].as_array().unwrap().is_empty());
    }
}
