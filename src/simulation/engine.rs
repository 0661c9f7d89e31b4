//! Generation engine for synthetic STR kinship datasets.
//!
//! This module provides the generator that orchestrates founder sampling,
//! parent-to-child transmission, artifact application, and dataset
//! assembly.

use crate::base::{Genotype, Locus};
use crate::evolution::FrequencyTable;
use crate::profile::{GroundTruthEntry, PersonId, Profile, Relationship};
use crate::simulation::{ArtifactConfig, Dataset, DatasetConfig, MutationConfig};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::error;
use std::fmt;

/// Main dataset generator.
///
/// All randomness flows through one owned RNG, threaded explicitly through
/// every sampling call. Generation is single-threaded and synchronous, so
/// a fixed seed together with the fixed locus iteration order and the
/// fixed draw order (two alleles, then dropout, then single-allele)
/// determines the exact output.
#[derive(Debug)]
pub struct Generator {
    /// Per-locus allele frequency distributions
    table: FrequencyTable,
    /// Transmission mutation configuration
    mutation: MutationConfig,
    /// Genotyping artifact configuration
    artifacts: ArtifactConfig,
    /// Dataset size targets
    config: DatasetConfig,
    /// Random number generator (Xoshiro256++, explicitly seeded)
    rng: Xoshiro256PlusPlus,
}

impl Generator {
    /// Create a new generator.
    ///
    /// Size targets are validated here: the database must be able to hold
    /// every founder and child, and true pairs cannot outnumber queries.
    pub fn new(
        table: FrequencyTable,
        mutation: MutationConfig,
        artifacts: ArtifactConfig,
        config: DatasetConfig,
    ) -> Result<Self, GeneratorError> {
        if config.true_pairs > config.query_count {
            return Err(GeneratorError::TruePairsExceedQueries {
                true_pairs: config.true_pairs,
                query_count: config.query_count,
            });
        }
        if config.database_size < 2 * config.true_pairs {
            return Err(GeneratorError::DatabaseTooSmall {
                database_size: config.database_size,
                required: 2 * config.true_pairs,
            });
        }

        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        Ok(Self {
            table,
            mutation,
            artifacts,
            config,
            rng,
        })
    }

    /// Get the dataset configuration.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Get the frequency table.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Generate an unrelated individual's profile.
    ///
    /// For each locus independently: draw two alleles from the population
    /// distribution, then apply the artifact model.
    pub fn founder_profile(&mut self, id: PersonId) -> Profile {
        let mut genotypes = Vec::with_capacity(Locus::COUNT);
        for locus in Locus::ALL {
            let a1 = self.table.sample(locus, &mut self.rng);
            let a2 = self.table.sample(locus, &mut self.rng);
            genotypes.push(self.artifacts.model.observe(a1, a2, &mut self.rng));
        }
        Profile::new(id, genotypes)
    }

    /// Generate a biological child of `parent`.
    ///
    /// Per locus: a parental dropout propagates structurally to the child;
    /// otherwise one parental allele is transmitted (uniform choice, with
    /// possible step mutation) and paired with a fresh population draw.
    /// Only one parent is modeled; the other allele is always population
    /// background. Artifact state re-rolls independently of the parent's.
    pub fn child_profile(&mut self, parent: &Profile, id: PersonId) -> Profile {
        let mut genotypes = Vec::with_capacity(Locus::COUNT);
        for locus in Locus::ALL {
            let Some((p1, p2)) = parent.genotype(locus).transmissible_alleles() else {
                genotypes.push(Genotype::Dropout);
                continue;
            };

            let transmitted = if self.rng.random::<f64>() < 0.5 { p1 } else { p2 };
            let transmitted = self.mutation.model.mutate(transmitted, &mut self.rng);
            let other = self.table.sample(locus, &mut self.rng);

            genotypes.push(self.artifacts.model.observe(transmitted, other, &mut self.rng));
        }
        Profile::new(id, genotypes)
    }

    /// Run a full generation pass and assemble the dataset.
    ///
    /// Steps, in order: founders, one child per founder (with explicit
    /// relationship records), filler up to the database target, one
    /// database shuffle, query relabeling plus unrelated controls, one
    /// query shuffle, ground truth from the relationship records. Query
    /// ids are assigned before the shuffle, so the mapping is independent
    /// of final list order.
    pub fn generate(&mut self) -> Dataset {
        let true_pairs = self.config.true_pairs;
        let database_size = self.config.database_size;
        let query_count = self.config.query_count;

        let mut founders = Vec::with_capacity(true_pairs);
        for i in 0..true_pairs {
            let founder = self.founder_profile(PersonId::founder(i));
            founders.push(founder);
        }

        let mut children = Vec::with_capacity(true_pairs);
        let mut relationships = Vec::with_capacity(true_pairs);
        for (i, parent) in founders.iter().enumerate() {
            let child = self.child_profile(parent, PersonId::child(i));
            relationships.push(Relationship::new(parent.id().clone(), child.id().clone()));
            children.push(child);
        }

        // Children are cloned into the database; the query set later gets
        // relabeled copies of the same genetic content.
        let mut database = Vec::with_capacity(database_size);
        database.extend(founders);
        database.extend(children.iter().cloned());

        let filler_count = database_size.saturating_sub(database.len());
        for i in 0..filler_count {
            let filler = self.founder_profile(PersonId::filler(i));
            database.push(filler);
        }

        database.shuffle(&mut self.rng);

        let mut queries = Vec::with_capacity(query_count);
        let mut ground_truth = Vec::with_capacity(true_pairs);
        for (i, (child, relationship)) in children.iter().zip(&relationships).enumerate() {
            let query_id = PersonId::query(i);
            queries.push(child.relabeled(query_id.clone()));
            ground_truth.push(GroundTruthEntry::from_relationship(relationship, query_id));
        }
        for i in true_pairs..query_count {
            let control = self.founder_profile(PersonId::query(i));
            queries.push(control);
        }

        queries.shuffle(&mut self.rng);

        Dataset::new(database, queries, ground_truth)
    }
}

/// Errors that can occur when configuring a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// More true pairs requested than query slots.
    TruePairsExceedQueries {
        true_pairs: usize,
        query_count: usize,
    },
    /// The database cannot hold every founder and child.
    DatabaseTooSmall {
        database_size: usize,
        required: usize,
    },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruePairsExceedQueries {
                true_pairs,
                query_count,
            } => write!(
                f,
                "true_pairs ({true_pairs}) exceeds query_count ({query_count})"
            ),
            Self::DatabaseTooSmall {
                database_size,
                required,
            } => write!(
                f,
                "database_size ({database_size}) is below the {required} \
                 profiles needed for founders and children"
            ),
        }
    }
}

impl error::Error for GeneratorError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Allele;

    fn test_generator(config: DatasetConfig) -> Generator {
        Generator::new(
            FrequencyTable::forensic(),
            MutationConfig::with_rate(0.002).unwrap(),
            ArtifactConfig::standard(0.05, 0.08).unwrap(),
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_inconsistent_sizes() {
        let table = FrequencyTable::forensic();
        let mutation = MutationConfig::with_rate(0.002).unwrap();
        let artifacts = ArtifactConfig::standard(0.05, 0.08).unwrap();

        let result = Generator::new(
            table.clone(),
            mutation.clone(),
            artifacts.clone(),
            DatasetConfig::new(100, 5, 10, Some(1)),
        );
        assert!(matches!(
            result,
            Err(GeneratorError::TruePairsExceedQueries { .. })
        ));

        let result = Generator::new(
            table,
            mutation,
            artifacts,
            DatasetConfig::new(10, 40, 35, Some(1)),
        );
        assert!(matches!(
            result,
            Err(GeneratorError::DatabaseTooSmall { .. })
        ));
    }

    #[test]
    fn test_founder_profile_is_complete() {
        let mut generator = test_generator(DatasetConfig::new(100, 10, 5, Some(42)));
        let profile = generator.founder_profile(PersonId::founder(0));

        assert_eq!(profile.id().as_str(), "P000000");
        assert_eq!(profile.genotypes().len(), Locus::COUNT);
    }

    #[test]
    fn test_child_inherits_parental_allele_without_mutation() {
        let mut generator = Generator::new(
            FrequencyTable::forensic(),
            MutationConfig::with_rate(0.0).unwrap(),
            ArtifactConfig::none(),
            DatasetConfig::new(100, 10, 5, Some(42)),
        )
        .unwrap();

        for trial in 0..50 {
            let parent = generator.founder_profile(PersonId::founder(trial));
            let child = generator.child_profile(&parent, PersonId::child(trial));

            for locus in Locus::ALL {
                let (p1, p2) = parent.genotype(locus).transmissible_alleles().unwrap();
                let (c1, c2) = child.genotype(locus).transmissible_alleles().unwrap();
                assert!(
                    c1 == p1 || c1 == p2 || c2 == p1 || c2 == p2,
                    "child at {locus} carries neither parental allele"
                );
            }
        }
    }

    #[test]
    fn test_child_lineage_recoverable_under_forced_mutation() {
        let mut generator = Generator::new(
            FrequencyTable::forensic(),
            MutationConfig::with_rate(1.0).unwrap(),
            ArtifactConfig::none(),
            DatasetConfig::new(100, 10, 5, Some(7)),
        )
        .unwrap();

        let parent = generator.founder_profile(PersonId::founder(0));
        let child = generator.child_profile(&parent, PersonId::child(0));

        for locus in Locus::ALL {
            let (p1, p2) = parent.genotype(locus).transmissible_alleles().unwrap();
            let (c1, c2) = child.genotype(locus).transmissible_alleles().unwrap();

            // One child allele must be a ±1 step of a parental allele, with
            // the microvariant digit preserved.
            let is_step_of = |child_allele: Allele, parent_allele: Allele| {
                child_allele == parent_allele.step(true)
                    || child_allele == parent_allele.step(false)
            };
            assert!(
                is_step_of(c1, p1) || is_step_of(c1, p2) || is_step_of(c2, p1)
                    || is_step_of(c2, p2),
                "child at {locus} has no ±1-step parental lineage"
            );
        }
    }

    #[test]
    fn test_parental_dropout_propagates() {
        let mut generator = Generator::new(
            FrequencyTable::forensic(),
            MutationConfig::with_rate(0.0).unwrap(),
            ArtifactConfig::none(),
            DatasetConfig::new(100, 10, 5, Some(42)),
        )
        .unwrap();

        let mut genotypes = vec![Genotype::Dropout; Locus::COUNT];
        genotypes[Locus::FGA.index()] =
            Genotype::pair(Allele::new(22, 0), Allele::new(24, 0));
        let parent = Profile::new(PersonId::founder(0), genotypes);

        let child = generator.child_profile(&parent, PersonId::child(0));
        for locus in Locus::ALL {
            if locus == Locus::FGA {
                assert!(!child.genotype(locus).is_dropout());
            } else {
                assert!(child.genotype(locus).is_dropout());
            }
        }
    }

    #[test]
    fn test_single_allele_parent_transmits_observed_value() {
        let mut generator = Generator::new(
            FrequencyTable::forensic(),
            MutationConfig::with_rate(0.0).unwrap(),
            ArtifactConfig::none(),
            DatasetConfig::new(100, 10, 5, Some(42)),
        )
        .unwrap();

        let mut genotypes = vec![Genotype::Dropout; Locus::COUNT];
        genotypes[Locus::TH01.index()] = Genotype::Single(Allele::new(9, 3));
        let parent = Profile::new(PersonId::founder(0), genotypes);

        for _ in 0..20 {
            let child = generator.child_profile(&parent, PersonId::child(0));
            let (c1, c2) = child.genotype(Locus::TH01).transmissible_alleles().unwrap();
            // The single observation acts as homozygous, so the transmitted
            // allele is always 9.3.
            assert!(c1 == Allele::new(9, 3) || c2 == Allele::new(9, 3));
        }
    }

    #[test]
    fn test_generate_produces_configured_counts() {
        let mut generator = test_generator(DatasetConfig::new(200, 12, 8, Some(42)));
        let dataset = generator.generate();

        assert_eq!(dataset.database_size(), 200);
        assert_eq!(dataset.query_count(), 12);
        assert_eq!(dataset.true_pair_count(), 8);
    }

    #[test]
    fn test_generate_ground_truth_ids_resolve() {
        let mut generator = test_generator(DatasetConfig::new(100, 10, 6, Some(9)));
        let dataset = generator.generate();

        for entry in dataset.ground_truth() {
            assert!(
                dataset.find_query(&entry.query_id).is_some(),
                "{} missing from query set",
                entry.query_id
            );
            assert!(
                dataset.find_in_database(&entry.true_counterpart_id).is_some(),
                "{} missing from database",
                entry.true_counterpart_id
            );
        }
    }

    #[test]
    fn test_generate_is_reproducible_for_a_seed() {
        let mut g1 = test_generator(DatasetConfig::new(50, 8, 4, Some(1234)));
        let mut g2 = test_generator(DatasetConfig::new(50, 8, 4, Some(1234)));

        let d1 = g1.generate();
        let d2 = g2.generate();

        assert_eq!(d1.database(), d2.database());
        assert_eq!(d1.queries(), d2.queries());
        assert_eq!(d1.ground_truth(), d2.ground_truth());
    }

    #[test]
    fn test_generate_seeds_differ() {
        let mut g1 = test_generator(DatasetConfig::new(50, 8, 4, Some(1)));
        let mut g2 = test_generator(DatasetConfig::new(50, 8, 4, Some(2)));

        assert_ne!(g1.generate().database(), g2.generate().database());
    }
}
