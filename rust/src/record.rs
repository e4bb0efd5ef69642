//! Person records and their delimited text form.
//!
//! A record line carries five fields in order: CPF, RG, name, birth date,
//! city, e.g. `123.456.789-00;12.345.678-9;MARIA SILVA;01/02/1990;RECIFE`.
//! Fields follow CSV quoting, so `"SILVA; ANA"` is one field.

use std::fmt;

use chrono::NaiveDate;

use crate::config::DirectoryConfig;
use crate::error::{IndexError, IndexResult};

/// Number of fields in a record line.
pub const FIELD_COUNT: usize = 5;

/// One person as read from the record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub cpf: String,
    pub rg: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub city: String,
}

impl Person {
    /// Parse a single record line.
    ///
    /// Every field is trimmed; spaces inside the date are dropped before it is
    /// parsed, so `01 / 02 / 1990` is accepted. The returned error carries line
    /// number 0; callers attach the real one with [`IndexError::at_line`].
    ///
    /// # Examples
    ///
    /// ```
    /// use avlindex::{DirectoryConfig, Person};
    ///
    /// let config = DirectoryConfig::default();
    /// let person = Person::parse_line("111; 22 ;ANA LIMA;05/03/1988;NATAL", &config).unwrap();
    /// assert_eq!(person.rg, "22");
    /// assert_eq!(person.to_string(), "CPF: 111 | Name: ANA LIMA | Born: 05/03/1988 | City: NATAL");
    /// ```
    pub fn parse_line(line: &str, config: &DirectoryConfig) -> IndexResult<Self> {
        let fields = split_fields(line, config.delimiter)?;
        if fields.len() != FIELD_COUNT {
            return Err(IndexError::invalid_record(
                0,
                &format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        }

        Ok(Self {
            cpf: fields[0].trim().to_string(),
            rg: fields[1].trim().to_string(),
            name: fields[2].trim().to_string(),
            birth_date: parse_date(&fields[3].replace(' ', ""), &config.date_format)?,
            city: fields[4].trim().to_string(),
        })
    }
}

/// Split one line into fields with CSV quoting rules: a field wrapped in
/// double quotes loses its quotes and may contain the delimiter, and `""`
/// inside it stands for a single quote.
fn split_fields(line: &str, delimiter: char) -> IndexResult<csv::StringRecord> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            IndexError::invalid_record(0, &format!("delimiter {:?} is not ASCII", delimiter))
        })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|e| IndexError::invalid_record(0, &e.to_string()))?;
    Ok(record)
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPF: {} | Name: {} | Born: {} | City: {}",
            self.cpf,
            self.name,
            self.birth_date.format("%d/%m/%Y"),
            self.city
        )
    }
}

/// Parse a date with a `chrono` format string, trimming outer whitespace.
pub fn parse_date(text: &str, format: &str) -> IndexResult<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, format).map_err(|_| IndexError::invalid_date(text, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_trims_fields() {
        let config = DirectoryConfig::default();
        let person = Person::parse_line(
            " 123.456.789-00 ;12.345.678-9; MARIA SILVA ; 01/02/1990 ; RECIFE ",
            &config,
        )
        .unwrap();
        assert_eq!(person.cpf, "123.456.789-00");
        assert_eq!(person.name, "MARIA SILVA");
        assert_eq!(person.birth_date, NaiveDate::from_ymd_opt(1990, 2, 1).unwrap());
        assert_eq!(person.city, "RECIFE");
    }

    #[test]
    fn test_spaces_inside_date_are_ignored() {
        let config = DirectoryConfig::default();
        let person = Person::parse_line("1;2;JOAO;15 / 08 / 2001;SALVADOR", &config).unwrap();
        assert_eq!(person.birth_date, NaiveDate::from_ymd_opt(2001, 8, 15).unwrap());
    }

    #[test]
    fn test_wrong_field_count_is_rejected() {
        let config = DirectoryConfig::default();
        let err = Person::parse_line("1;2;JOAO;15/08/2001", &config).unwrap_err();
        assert!(err.is_record_error());
        assert!(err.to_string().contains("expected 5 fields, found 4"));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let config = DirectoryConfig::default();
        let err = Person::parse_line("1;2;JOAO;31/02/2001;SALVADOR", &config).unwrap_err();
        assert!(matches!(err, IndexError::InvalidDate(_)));
    }

    #[test]
    fn test_quoted_field_loses_its_quotes() {
        let config = DirectoryConfig::default();
        let person = Person::parse_line("1;2;\"ANA\";01/01/2000;NATAL", &config).unwrap();
        assert_eq!(person.name, "ANA");
    }

    #[test]
    fn test_quoted_field_may_contain_delimiter() {
        let config = DirectoryConfig::default();
        let person =
            Person::parse_line("1;2;\"SILVA; ANA\";01/01/2000;\"SAO \"\"X\"\"\"", &config).unwrap();
        assert_eq!(person.name, "SILVA; ANA");
        assert_eq!(person.city, "SAO \"X\"");
        assert_eq!(person.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_empty_line_has_no_fields() {
        let err = Person::parse_line("", &DirectoryConfig::default()).unwrap_err();
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let config = DirectoryConfig::default().with_delimiter('§');
        let err = Person::parse_line("1§2§ANA§01/01/2000§NATAL", &config).unwrap_err();
        assert!(err.to_string().contains("not ASCII"));
    }

    #[test]
    fn test_custom_delimiter_and_format() {
        let config = DirectoryConfig::default()
            .with_delimiter(',')
            .with_date_format("%Y-%m-%d");
        let person = Person::parse_line("9,8,ANA,1999-12-31,NATAL", &config).unwrap();
        assert_eq!(person.birth_date, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_date_trims() {
        assert_eq!(
            parse_date(" 01/01/2000 ", "%d/%m/%Y"),
            Ok(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        );
        assert!(parse_date("2000-01-01", "%d/%m/%Y").is_err());
    }
}
