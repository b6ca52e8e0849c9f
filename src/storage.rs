use crate::core::data::HistoricalRecord;
use crate::core::traits::RecordSource;
use crate::utils::error::{AppError, AppResult};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Raw dataset row; every cell is optional so gaps can be skipped
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Age")]
    age: Option<f64>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Education Level")]
    education_level: Option<String>,
    #[serde(rename = "Job Title")]
    job_title: Option<String>,
    #[serde(rename = "Years of Experience")]
    years_experience: Option<f64>,
    #[serde(rename = "Salary")]
    salary: Option<f64>,
}

const REQUIRED_COLUMNS: [&str; 6] = [
    "Age",
    "Gender",
    "Education Level",
    "Job Title",
    "Years of Experience",
    "Salary",
];

impl RawRecord {
    /// Rows missing a field the advice engine reads are dropped. Age and
    /// gender only feed the model, so gaps there keep the row.
    fn into_record(self) -> Option<HistoricalRecord> {
        Some(HistoricalRecord {
            age: finite(self.age),
            years_experience: finite(self.years_experience)?,
            gender: non_empty(self.gender),
            education_level: non_empty(self.education_level)?,
            job_title: non_empty(self.job_title)?,
            salary: finite(self.salary)?,
        })
    }
}

/// NaN and infinite cells count as missing
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// CSV file of historical salary records
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse<R: std::io::Read>(&self, reader: R) -> AppResult<Vec<HistoricalRecord>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = reader.headers().map_err(|e| {
            AppError::Dataset(format!("Failed to read header of {}: {}", self.path.display(), e))
        })?;

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Dataset(format!(
                "{} is missing required columns: {}",
                self.path.display(),
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
            // Header is line 1
            let line = index + 2;
            let raw = row.map_err(|e| {
                AppError::Dataset(format!("{} line {}: {}", self.path.display(), line, e))
            })?;

            match raw.into_record() {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!(line, "skipping row with missing values");
                    skipped += 1;
                }
            }
        }

        if records.is_empty() {
            return Err(AppError::Dataset(format!(
                "{} contains no usable records",
                self.path.display()
            )));
        }

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            skipped,
            "loaded historical records"
        );

        Ok(records)
    }
}

impl RecordSource for CsvRecordSource {
    fn load_records(&self) -> AppResult<Vec<HistoricalRecord>> {
        if !self.path.exists() {
            return Err(AppError::Dataset(format!(
                "Dataset not found: {}",
                self.path.display()
            )));
        }

        let file = std::fs::File::open(&self.path)
            .map_err(|e| AppError::Io(format!("Failed to open {}: {}", self.path.display(), e)))?;

        self.parse(file)
    }
}

/// Immutable in-memory table of historical records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<HistoricalRecord>,
}

impl Dataset {
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    pub fn load(source: &impl RecordSource) -> AppResult<Self> {
        Ok(Self::new(source.load_records()?))
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct job titles
    pub fn job_titles(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.job_title.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn has_job_title(&self, title: &str) -> bool {
        self.records.iter().any(|r| r.job_title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advice::AdviceEngine;
    use crate::core::data::QueryInput;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records_by_header_name() {
        let file = write_csv(
            "Age,Gender,Education Level,Job Title,Years of Experience,Salary\n\
             32,Male,Bachelor's,Software Engineer,5,90000\n\
             28,Female,Master's,Data Analyst,3.5,65000\n",
        );

        let records = CsvRecordSource::new(file.path()).load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].job_title, "Data Analyst");
        assert_eq!(records[1].years_experience, 3.5);
        assert_eq!(records[0].salary, 90000.0);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let file = write_csv(
            "Salary,Job Title,Age,Years of Experience,Gender,Education Level\n\
             120000,\"Manager, Sales\",45,15,Female,PhD\n",
        );

        let records = CsvRecordSource::new(file.path()).load_records().unwrap();
        assert_eq!(records[0].job_title, "Manager, Sales");
        assert_eq!(records[0].age, Some(45.0));
        assert_eq!(records[0].education_level, "PhD");
    }

    #[test]
    fn test_rows_with_gaps_are_skipped() {
        let file = write_csv(
            "Age,Gender,Education Level,Job Title,Years of Experience,Salary\n\
             32,Male,Bachelor's,Software Engineer,5,90000\n\
             ,,,,,\n\
             29,Male,Bachelor's,,4,70000\n\
             30,Female,Master's,Data Analyst,6,\n",
        );

        let records = CsvRecordSource::new(file.path()).load_records().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_rows_without_age_or_gender_are_kept() {
        let file = write_csv(
            "Age,Gender,Education Level,Job Title,Years of Experience,Salary\n\
             30,Male,Master's,Chef,5,1000\n\
             ,,Master's,Director,5,900000\n",
        );

        let dataset = Dataset::load(&CsvRecordSource::new(file.path())).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].age, None);
        assert_eq!(dataset.records()[1].gender, None);

        let query = QueryInput::new(30, 5, "Male", "Master's", "Chef");
        let bundle = AdviceEngine::default().recommend(100.0, &query, dataset.records());
        assert_eq!(bundle.better_roles[0].job_title, "Director");
        assert_eq!(bundle.better_roles[0].average_salary, 900000.0);
    }

    #[test]
    fn test_non_finite_cells_are_missing() {
        let file = write_csv(
            "Age,Gender,Education Level,Job Title,Years of Experience,Salary\n\
             40,Female,Master's,Director,5,900000\n\
             41,Female,Master's,Director,5,NaN\n\
             42,Male,Master's,Director,inf,900000\n\
             43,Male,Master's,Director,5,inf\n\
             NaN,Male,Master's,Chef,5,1000\n",
        );

        let dataset = Dataset::load(&CsvRecordSource::new(file.path())).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].age, None);

        let query = QueryInput::new(30, 5, "Male", "Master's", "Chef");
        let bundle = AdviceEngine::default().recommend(100.0, &query, dataset.records());
        assert_eq!(bundle.better_roles[0].job_title, "Director");
        assert_eq!(bundle.better_roles[0].average_salary, 900000.0);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let file = write_csv("Age,Gender,Job Title,Salary\n30,Male,Chef,40000\n");

        let err = CsvRecordSource::new(file.path()).load_records().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Education Level"));
        assert!(message.contains("Years of Experience"));
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let file = write_csv(
            "Age,Gender,Education Level,Job Title,Years of Experience,Salary\n\
             thirty,Male,Bachelor's,Software Engineer,5,90000\n",
        );

        let err = CsvRecordSource::new(file.path()).load_records().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvRecordSource::new(dir.path().join("Salary_Data.csv"))
            .load_records()
            .unwrap_err();
        assert!(matches!(err, AppError::Dataset(_)));
    }

    #[test]
    fn test_header_only_is_fatal() {
        let file = write_csv("Age,Gender,Education Level,Job Title,Years of Experience,Salary\n");
        assert!(CsvRecordSource::new(file.path()).load_records().is_err());
    }

    #[test]
    fn test_job_titles_sorted_and_distinct() {
        let file = write_csv(
            "Age,Gender,Education Level,Job Title,Years of Experience,Salary\n\
             32,Male,Bachelor's,Web Developer,5,90000\n\
             28,Female,Master's,Data Analyst,3,65000\n\
             35,Male,Master's,Web Developer,8,95000\n",
        );

        let dataset = Dataset::load(&CsvRecordSource::new(file.path())).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.job_titles(), vec!["Data Analyst", "Web Developer"]);
        assert!(dataset.has_job_title("Web Developer"));
        assert!(!dataset.has_job_title("Chef"));
    }
}
