use crate::base::{Genotype, Locus};
use crate::profile::{GroundTruthEntry, PersonId, Profile};
use crate::storage::StorageError;
use std::path::Path;

/// Read a profile CSV (database or query artifact) back into typed form.
///
/// The header must be exactly `PersonID` followed by the 21 locus names in
/// canonical order; any malformed genotype cell is a hard error, not an
/// implicit dropout.
pub fn read_profiles(path: &Path) -> Result<Vec<Profile>, StorageError> {
    let mut reader = csv::Reader::from_path(path)?;

    let header = reader.headers()?.clone();
    validate_header(path, &header)?;

    let mut profiles = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 1 + Locus::COUNT {
            return Err(StorageError::Parse {
                path: path.to_path_buf(),
                message: format!("row {}: expected {} fields, got {}", row + 2, 1 + Locus::COUNT, record.len()),
            });
        }

        let id = PersonId::from_raw(record[0].to_string());
        let mut genotypes = Vec::with_capacity(Locus::COUNT);
        for (cell, locus) in record.iter().skip(1).zip(Locus::ALL) {
            let genotype: Genotype = cell.parse().map_err(|e| StorageError::Parse {
                path: path.to_path_buf(),
                message: format!("row {} ({locus}): {e}", row + 2),
            })?;
            genotypes.push(genotype);
        }
        profiles.push(Profile::new(id, genotypes));
    }

    Ok(profiles)
}

/// Read the ground-truth CSV back into entries.
pub fn read_ground_truth(path: &Path) -> Result<Vec<GroundTruthEntry>, StorageError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

fn validate_header(path: &Path, header: &csv::StringRecord) -> Result<(), StorageError> {
    let bad_header = |message: String| StorageError::Header {
        path: path.to_path_buf(),
        message,
    };

    if header.len() != 1 + Locus::COUNT {
        return Err(bad_header(format!(
            "expected {} columns, got {}",
            1 + Locus::COUNT,
            header.len()
        )));
    }
    if &header[0] != "PersonID" {
        return Err(bad_header(format!(
            "first column must be 'PersonID', got '{}'",
            &header[0]
        )));
    }
    for (field, locus) in header.iter().skip(1).zip(Locus::ALL) {
        if field != locus.name() {
            return Err(bad_header(format!(
                "expected locus column '{}', got '{field}'",
                locus.name()
            )));
        }
    }
    Ok(())
}
