//! Person directory: three ordered indexes over one shared record set.
//!
//! Every loaded person is stored once behind an `Arc` and inserted into the
//! CPF, name, and birth date indexes. Each index follows the first-write-wins
//! policy, so when two people share a name only the first one loaded is
//! reachable through the name index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::DirectoryConfig;
use crate::error::{IndexError, IndexResult, LoadResult};
use crate::record::{parse_date, Person};
use crate::types::OrderedIndex;

/// Shared handle to a person record.
pub type PersonRef = Arc<Person>;

/// Person records indexed by CPF, name, and birth date.
#[derive(Debug, Default)]
pub struct PersonDirectory {
    config: DirectoryConfig,
    people: Vec<PersonRef>,
    by_cpf: OrderedIndex<String, PersonRef>,
    by_name: OrderedIndex<String, PersonRef>,
    by_birth_date: OrderedIndex<NaiveDate, PersonRef>,
}

/// Counters reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

impl PersonDirectory {
    /// Create an empty directory.
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ============================================================================
    // LOADING
    // ============================================================================

    /// Store a person and index it under all three keys.
    pub fn add(&mut self, person: Person) -> PersonRef {
        let person = Arc::new(person);

        if !self.by_cpf.insert(person.cpf.clone(), Arc::clone(&person)) {
            debug!(cpf = %person.cpf, "duplicate CPF, keeping first record");
        }
        if !self.by_name.insert(person.name.clone(), Arc::clone(&person)) {
            debug!(name = %person.name, "duplicate name, keeping first record");
        }
        if !self
            .by_birth_date
            .insert(person.birth_date, Arc::clone(&person))
        {
            debug!(birth_date = %person.birth_date, "duplicate birth date, keeping first record");
        }

        self.people.push(Arc::clone(&person));
        person
    }

    /// Read records from any buffered source, one per line.
    ///
    /// Blank lines are ignored. Malformed lines are skipped with a warning,
    /// or abort the load when `config.strict` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::{DirectoryConfig, PersonDirectory};
    ///
    /// let data = "1;10;ANA;01/01/1990;NATAL\n2;20;BRUNO;02/02/1992;RECIFE\n";
    /// let directory = PersonDirectory::load_from_reader(data.as_bytes(), DirectoryConfig::default()).unwrap();
    /// assert_eq!(directory.len(), 2);
    /// assert_eq!(directory.find_by_cpf("2").map(|p| p.name.as_str()), Some("BRUNO"));
    /// ```
    pub fn load_from_reader<R: BufRead>(reader: R, config: DirectoryConfig) -> LoadResult<Self> {
        let mut directory = Self::new(config);
        let summary = directory.extend_from_reader(reader)?;
        info!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            "person directory loaded"
        );
        Ok(directory)
    }

    /// Open `path` and load its records.
    pub fn load_from_path<P: AsRef<Path>>(path: P, config: DirectoryConfig) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| IndexError::io_error(&format!("open {}", path.display()), &e))?;
        debug!(path = %path.display(), "reading person records");
        Self::load_from_reader(BufReader::new(file), config)
    }

    /// Append records from a reader to this directory.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> LoadResult<LoadSummary> {
        let mut summary = LoadSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| IndexError::io_error("read line", &e))?;
            if line.trim().is_empty() {
                continue;
            }

            match Person::parse_line(&line, &self.config) {
                Ok(person) => {
                    self.add(person);
                    summary.loaded += 1;
                }
                Err(e) if self.config.strict => return Err(e.at_line(line_number)),
                Err(e) => {
                    warn!(line = line_number, error = %e, "skipping malformed record");
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    // ============================================================================
    // QUERIES
    // ============================================================================

    /// Exact lookup by CPF. Surrounding whitespace is ignored.
    pub fn find_by_cpf(&self, cpf: &str) -> Option<&PersonRef> {
        self.by_cpf.find(cpf.trim())
    }

    /// Everyone whose name starts with `prefix`, in index traversal order.
    ///
    /// The prefix is trimmed, and upper-cased when `fold_prefix_case` is set.
    pub fn find_by_name_prefix(&self, prefix: &str) -> Vec<&PersonRef> {
        let prefix = prefix.trim();
        if self.config.fold_prefix_case {
            self.by_name.find_by_prefix(prefix.to_uppercase().as_str())
        } else {
            self.by_name.find_by_prefix(prefix)
        }
    }

    /// Everyone born between `from` and `to`, both inclusive.
    pub fn find_by_birth_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&PersonRef> {
        self.by_birth_date.find_by_range(&from, &to)
    }

    /// Like [`find_by_birth_range`](Self::find_by_birth_range) with dates in the
    /// configured text format.
    pub fn find_by_birth_range_str(&self, from: &str, to: &str) -> IndexResult<Vec<&PersonRef>> {
        let from = parse_date(from, &self.config.date_format)?;
        let to = parse_date(to, &self.config.date_format)?;
        Ok(self.find_by_birth_range(from, to))
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    /// Number of records loaded, duplicates included.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All records in load order.
    pub fn people(&self) -> &[PersonRef] {
        &self.people
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn cpf_index(&self) -> &OrderedIndex<String, PersonRef> {
        &self.by_cpf
    }

    pub fn name_index(&self) -> &OrderedIndex<String, PersonRef> {
        &self.by_name
    }

    pub fn birth_date_index(&self) -> &OrderedIndex<NaiveDate, PersonRef> {
        &self.by_birth_date
    }
}
