use std::path::{Path, PathBuf};

const CSV_SUFFIX: &str = ".csv";
const TRAINING_SUFFIX: &str = "-training.csv";
const TEST_SUFFIX: &str = "-test.csv";

/// Returns `(training, test)` output paths for `input`.
///
/// The last `.csv` in the path is replaced by `-training.csv` / `-test.csv`.
/// A path without `.csv` (or one that is not valid UTF-8) comes back unchanged
/// for both outputs.
pub fn derive_output_paths<P>(input: P) -> (PathBuf, PathBuf)
where
    P: AsRef<Path>,
{
    let input = input.as_ref();
    let Some(s) = input.to_str() else {
        return (input.to_path_buf(), input.to_path_buf());
    };
    match s.rfind(CSV_SUFFIX) {
        Some(idx) => {
            let (head, tail) = (&s[..idx], &s[idx + CSV_SUFFIX.len()..]);
            (
                PathBuf::from(format!("{head}{TRAINING_SUFFIX}{tail}")),
                PathBuf::from(format!("{head}{TEST_SUFFIX}{tail}")),
            )
        }
        None => (input.to_path_buf(), input.to_path_buf()),
    }
}

/// Whether [`derive_output_paths`] will rename `input` at all.
pub fn contains_csv<P>(input: P) -> bool
where
    P: AsRef<Path>,
{
    input
        .as_ref()
        .to_str()
        .is_some_and(|s| s.contains(CSV_SUFFIX))
}
