use crate::base::Locus;
use crate::profile::{GroundTruthEntry, Profile};
use crate::simulation::Dataset;
use crate::storage::{StorageError, DATABASE_FILE, GROUND_TRUTH_FILE, QUERIES_FILE};
use std::fs;
use std::path::Path;

/// Write the three dataset artifacts under `dir`, creating it if needed.
///
/// Emits `str_database.csv`, `str_queries.csv` (both `PersonID` + the 21
/// locus columns in fixed order) and `ground_truth.csv`
/// (`QueryID,TrueCounterpartID`, true pairs only). There is no
/// partial-output recovery: files from a failed run are not valid.
pub fn write_dataset(dataset: &Dataset, dir: &Path) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;

    write_profiles(&dir.join(DATABASE_FILE), dataset.database())?;
    write_profiles(&dir.join(QUERIES_FILE), dataset.queries())?;
    write_ground_truth(&dir.join(GROUND_TRUTH_FILE), dataset.ground_truth())?;

    Ok(())
}

/// Write one profile CSV: a header row, then one row per profile with each
/// genotype rendered into the cell grammar.
fn write_profiles(path: &Path, profiles: &[Profile]) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(1 + Locus::COUNT);
    header.push("PersonID".to_string());
    header.extend(Locus::ALL.iter().map(|locus| locus.name().to_string()));
    writer.write_record(&header)?;

    let mut record = Vec::with_capacity(1 + Locus::COUNT);
    for profile in profiles {
        record.clear();
        record.push(profile.id().to_string());
        record.extend(profile.genotypes().iter().map(|g| g.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the ground-truth CSV through serde (headers come from the field
/// renames on `GroundTruthEntry`).
fn write_ground_truth(path: &Path, entries: &[GroundTruthEntry]) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path)?;
    // serde only emits the header alongside the first record; keep the
    // header present even when there are no true pairs.
    if entries.is_empty() {
        writer.write_record(["QueryID", "TrueCounterpartID"])?;
    }
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
