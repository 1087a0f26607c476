//! Random train/test split of a CSV file.
//!
//! The first row is kept as the header and copied to both outputs. Every
//! other row gets one uniform draw `k` in `[0, 1)` and lands in the training
//! subset when `k <= TRAINING_THRESHOLD`, otherwise in the test subset.

use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use rand::Rng;
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, warn};

use crate::error::{Result, SplitError};
use crate::paths::{derive_output_paths, contains_csv};
use crate::ratio::Ratios;

/// Draws at or below this value are routed to the training subset.
///
/// Fixed; the validated [`Ratios`] do not change it.
pub const TRAINING_THRESHOLD: f64 = 0.9;

pub type Row = StringRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    Training,
    Test,
}

impl Subset {
    /// Subset for a single uniform draw `k`.
    pub fn for_draw(k: f64) -> Self {
        if k <= TRAINING_THRESHOLD {
            Subset::Training
        } else {
            Subset::Test
        }
    }
}

/// Header plus data rows, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub header: Row,
    pub rows: Vec<Row>,
}

/// What [`split_dataset`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    pub training_path: PathBuf,
    pub test_path: PathBuf,
    pub training_rows: usize,
    pub test_rows: usize,
}

/// Reads `path` as comma separated text. Rows are passed through as-is,
/// ragged rows included.
pub fn read_dataset<P>(path: P) -> Result<Dataset>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| SplitError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|e| SplitError::csv(path, e))?,
        None => return Err(SplitError::EmptyInput(path.to_path_buf())),
    };
    let rows = records
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| SplitError::csv(path, e))?;

    debug!(path = %path.display(), rows = rows.len(), "read dataset");
    Ok(Dataset { header, rows })
}

/// Routes every row with one draw from `rng`, keeping relative order.
pub fn route_rows<R>(rows: Vec<Row>, rng: &mut R) -> (Vec<Row>, Vec<Row>)
where
    R: Rng,
{
    let mut training = Vec::new();
    let mut test = Vec::new();
    for row in rows {
        let k: f64 = rng.random();
        match Subset::for_draw(k) {
            Subset::Training => training.push(row),
            Subset::Test => test.push(row),
        }
    }
    (training, test)
}

/// Writes `header` followed by `rows` to `path`, replacing any existing file.
///
/// Output goes to a temporary file next to `path` and is renamed into place
/// once fully flushed, so a failed write never leaves a truncated `path`.
/// An existing `path` keeps its permissions; a new one gets the default
/// mode a plain create would give it.
pub fn write_subset<P>(path: P, header: &Row, rows: &[Row]) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = temp_file_for(path, dir).map_err(|e| SplitError::io(path, e))?;

    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(tmp);
    writer
        .write_record(header)
        .map_err(|e| SplitError::csv(path, e))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| SplitError::csv(path, e))?;
    }
    let tmp = writer
        .into_inner()
        .map_err(|e| SplitError::io(path, e.into_error()))?;
    tmp.persist(path).map_err(|e| SplitError::io(path, e.error))?;

    debug!(path = %path.display(), rows = rows.len(), "wrote subset");
    Ok(())
}

fn temp_file_for(path: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // umask applies, same as File::create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Some(meta) = fs::metadata(path).ok().filter(|m| m.is_file()) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

/// Splits `input` into `<name>-training.csv` and `<name>-test.csv` using the
/// thread-local generator.
pub fn split_dataset<P>(
    input: P,
    rel_training_size: f64,
    rel_testing_size: f64,
) -> Result<SplitOutput>
where
    P: AsRef<Path>,
{
    split_dataset_with_rng(input, rel_training_size, rel_testing_size, &mut rand::rng())
}

/// Same as [`split_dataset`], drawing from `rng`.
///
/// Ratios are checked before any file is opened. Routing ignores them and
/// uses [`TRAINING_THRESHOLD`].
pub fn split_dataset_with_rng<P, R>(
    input: P,
    rel_training_size: f64,
    rel_testing_size: f64,
    rng: &mut R,
) -> Result<SplitOutput>
where
    P: AsRef<Path>,
    R: Rng,
{
    let input = input.as_ref();
    let ratios = Ratios::new(rel_training_size, rel_testing_size)?;

    let (training_path, test_path) = derive_output_paths(input);
    if !contains_csv(input) {
        warn!(
            path = %input.display(),
            "input has no .csv suffix, outputs will overwrite the input"
        );
    }
    debug!(
        training = ratios.training,
        testing = ratios.testing,
        threshold = TRAINING_THRESHOLD,
        training_path = %training_path.display(),
        test_path = %test_path.display(),
        "splitting dataset"
    );

    let dataset = read_dataset(input)?;
    let (training, test) = route_rows(dataset.rows, rng);

    write_subset(&training_path, &dataset.header, &training)?;
    write_subset(&test_path, &dataset.header, &test)?;

    info!(
        training_rows = training.len(),
        test_rows = test.len(),
        training_path = %training_path.display(),
        test_path = %test_path.display(),
        "split complete"
    );

    Ok(SplitOutput {
        training_path,
        test_path,
        training_rows: training.len(),
        test_rows: test.len(),
    })
}
