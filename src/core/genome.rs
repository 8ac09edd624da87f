use std::collections::HashMap;

use tracing::warn;

use crate::core::sequence::Sequence;

/// A single named chromosome (one FASTA record)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    pub name: String,
    pub sequence: Sequence,
}

impl Chromosome {
    pub fn new(name: impl Into<String>, sequence: impl Into<Sequence>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Chromosome name to sequence mapping, kept in file order.
///
/// Names are unique: inserting a name that already exists replaces the earlier
/// sequence in place, so the chromosome keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Genome {
    chromosomes: Vec<Chromosome>,
    by_name: HashMap<String, usize>,
}

impl Genome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chromosome: Chromosome) {
        if let Some(&idx) = self.by_name.get(&chromosome.name) {
            warn!(
                "Duplicate chromosome name '{}', replacing earlier record",
                chromosome.name
            );
            self.chromosomes[idx] = chromosome;
        } else {
            self.by_name
                .insert(chromosome.name.clone(), self.chromosomes.len());
            self.chromosomes.push(chromosome);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Chromosome> {
        self.by_name.get(name).map(|&idx| &self.chromosomes[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    #[must_use]
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Total number of bases across all chromosomes
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.chromosomes.iter().map(Chromosome::len).sum()
    }
}

impl FromIterator<Chromosome> for Genome {
    fn from_iter<I: IntoIterator<Item = Chromosome>>(iter: I) -> Self {
        let mut genome = Self::new();
        for chromosome in iter {
            genome.insert(chromosome);
        }
        genome
    }
}

impl<'a> IntoIterator for &'a Genome {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
