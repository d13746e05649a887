use crate::core::constraints::constraint::Constraint;
use crate::core::constraints::error::ConstraintError;
use crate::core::constraints::registry::ConstraintRegistry;
use nalgebra::Point3;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

const MOE_PREAMBLE_LINES: usize = 3;

/// The three constraint file grammars, told apart by their first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintFormat {
    /// `x y z tolerance code` records until end of input.
    Standard,
    /// A leading `!` line, then `x y z tolerance a b code` records.
    Exponential,
    /// MOE pharmacophore export; starts with `#`.
    Moe,
}

impl ConstraintFormat {
    pub fn from_leading_char(first: Option<char>) -> Self {
        match first {
            Some('#') => ConstraintFormat::Moe,
            Some('!') => ConstraintFormat::Exponential,
            _ => ConstraintFormat::Standard,
        }
    }
}

impl fmt::Display for ConstraintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Standard => "standard",
                Self::Exponential => "exponential",
                Self::Moe => "MOE",
            }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConstraintFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Problems reading constraint '{feature}' on line {line}: {kind}")]
    Malformed {
        line: usize,
        feature: String,
        kind: ConstraintParseErrorKind,
    },
    #[error("Invalid constraint on line {line}: {source}")]
    Constraint {
        line: usize,
        #[source]
        source: ConstraintError,
    },
    #[error("Unexpected end of input while reading the {0}")]
    UnexpectedEof(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintParseErrorKind {
    #[error("Missing field '{field}'")]
    MissingField { field: &'static str },
    #[error("Invalid number for field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
}

/// Character cursor with the peek/skip operations the grammars need.
struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consumes the rest of the current line, newline included. `false` at end of input.
    fn skip_line(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
        true
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn token(&mut self) -> Option<String> {
        self.skip_whitespace();
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.bump();
        }
        (!token.is_empty()).then_some(token)
    }
}

/// Reads the fields of one record, remembering the feature code once seen so
/// that errors can name it.
struct RecordReader<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    line: usize,
    feature: String,
}

impl<'s, 'a> RecordReader<'s, 'a> {
    fn new(scanner: &'s mut Scanner<'a>) -> Self {
        scanner.skip_whitespace();
        let line = scanner.line;
        Self {
            scanner,
            line,
            feature: String::new(),
        }
    }

    fn malformed(&self, kind: ConstraintParseErrorKind) -> ConstraintFileError {
        ConstraintFileError::Malformed {
            line: self.line,
            feature: self.feature.clone(),
            kind,
        }
    }

    fn token(&mut self, field: &'static str) -> Result<String, ConstraintFileError> {
        self.scanner
            .token()
            .ok_or_else(|| self.malformed(ConstraintParseErrorKind::MissingField { field }))
    }

    fn float(&mut self, field: &'static str) -> Result<f64, ConstraintFileError> {
        let value = self.token(field)?;
        // `f64::from_str` also accepts nan, inf and infinity.
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                self.malformed(ConstraintParseErrorKind::InvalidFloat {
                    field,
                    value: value.clone(),
                })
            })
    }

    fn point(&mut self) -> Result<Point3<f64>, ConstraintFileError> {
        Ok(Point3::new(
            self.float("x")?,
            self.float("y")?,
            self.float("z")?,
        ))
    }

    fn feature(&mut self) -> Result<(), ConstraintFileError> {
        self.feature = self.token("feature")?;
        Ok(())
    }

    fn skip(&mut self, field: &'static str) -> Result<(), ConstraintFileError> {
        self.token(field).map(|_| ())
    }

    fn invalid(&self, source: ConstraintError) -> ConstraintFileError {
        ConstraintFileError::Constraint {
            line: self.line,
            source,
        }
    }
}

pub struct ConstraintFile;

impl ConstraintFile {
    /// Peeks at the first byte of `reader` without consuming it.
    pub fn sniff_format(reader: &mut impl BufRead) -> io::Result<ConstraintFormat> {
        let first = reader.fill_buf()?.first().map(|&b| b as char);
        Ok(ConstraintFormat::from_leading_char(first))
    }

    /// Reads every constraint from `reader`, creating them through `registry`.
    ///
    /// The grammar is chosen from the first character of the input. Records
    /// are returned in input order; the first bad record aborts the read.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of the constraint file.
    /// * `registry` - Factory whose per-feature tally is bumped when `counting` is set.
    /// * `counting` - Whether created constraints are counted.
    ///
    /// # Return
    ///
    /// The constraints and the format that was detected. An empty list is
    /// logged as a warning, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintFileError`] on I/O failure, a malformed record, an
    /// unknown feature code, or a MOE file truncated before its terminator.
    #[instrument(skip_all, name = "constraint_file_reader")]
    pub fn read_from(
        reader: &mut impl BufRead,
        registry: &mut ConstraintRegistry,
        counting: bool,
    ) -> Result<(Vec<Constraint>, ConstraintFormat), ConstraintFileError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut scanner = Scanner::new(&content);
        let format = ConstraintFormat::from_leading_char(scanner.peek());
        debug!(%format, "Detected constraint file format.");

        match format {
            ConstraintFormat::Moe => skip_moe_preamble(&mut scanner)?,
            ConstraintFormat::Exponential => {
                scanner.skip_line();
            }
            ConstraintFormat::Standard => {}
        }

        let mut constraints = Vec::new();
        loop {
            match format {
                ConstraintFormat::Moe => {
                    match scanner.peek() {
                        Some('#') => break,
                        None => return Err(ConstraintFileError::UnexpectedEof("MOE feature block")),
                        Some(_) => {}
                    }
                }
                _ => {
                    scanner.skip_whitespace();
                    if scanner.at_end() {
                        break;
                    }
                }
            }

            let constraint = match format {
                ConstraintFormat::Standard => read_standard_record(&mut scanner, registry, counting)?,
                ConstraintFormat::Exponential => {
                    read_exponential_record(&mut scanner, registry, counting)?
                }
                ConstraintFormat::Moe => read_moe_record(&mut scanner, registry, counting)?,
            };
            debug!(
                feature = %constraint.feature(),
                "Read constraint {}",
                constraint
            );
            constraints.push(constraint);
            scanner.skip_whitespace();
        }

        if constraints.is_empty() {
            warn!("Number of constraints read is 0.");
        } else {
            info!(count = constraints.len(), %format, "Constraint file read.");
        }
        Ok((constraints, format))
    }

    pub fn read_from_path<P: AsRef<Path>>(
        path: P,
        registry: &mut ConstraintRegistry,
        counting: bool,
    ) -> Result<(Vec<Constraint>, ConstraintFormat), ConstraintFileError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, registry, counting)
    }

    /// Writes constraints in the standard format, or in the exponential format
    /// if any constraint uses the exponential law. In the latter case quadratic
    /// constraints are written with `a = b = 0` and read back as exponential.
    pub fn write_to(
        constraints: &[Constraint],
        writer: &mut impl Write,
    ) -> Result<ConstraintFormat, ConstraintFileError> {
        let exponential = constraints.iter().any(Constraint::is_exponential);
        if exponential {
            writeln!(writer, "! x y z tolerance a b feature")?;
        }
        for c in constraints {
            let anchor = c.anchor();
            if exponential {
                writeln!(
                    writer,
                    "{} {} {} {} {} {} {}",
                    anchor.x,
                    anchor.y,
                    anchor.z,
                    c.tolerance(),
                    c.a(),
                    c.b(),
                    c.feature().code()
                )?;
            } else {
                writeln!(
                    writer,
                    "{} {} {} {} {}",
                    anchor.x,
                    anchor.y,
                    anchor.z,
                    c.tolerance(),
                    c.feature().code()
                )?;
            }
        }
        Ok(if exponential {
            ConstraintFormat::Exponential
        } else {
            ConstraintFormat::Standard
        })
    }

    pub fn write_to_path<P: AsRef<Path>>(
        constraints: &[Constraint],
        path: P,
    ) -> Result<ConstraintFormat, ConstraintFileError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let format = Self::write_to(constraints, &mut writer)?;
        writer.flush()?;
        Ok(format)
    }
}

/// Skips the fixed preamble and any metadata lines up to and including the
/// next line starting with `#`.
fn skip_moe_preamble(scanner: &mut Scanner) -> Result<(), ConstraintFileError> {
    for _ in 0..MOE_PREAMBLE_LINES {
        if !scanner.skip_line() {
            return Err(ConstraintFileError::UnexpectedEof("MOE preamble"));
        }
    }
    loop {
        match scanner.peek() {
            Some('#') => break,
            None => return Err(ConstraintFileError::UnexpectedEof("MOE preamble")),
            Some(_) => {
                scanner.skip_line();
            }
        }
    }
    scanner.skip_line();
    Ok(())
}

fn read_standard_record(
    scanner: &mut Scanner,
    registry: &mut ConstraintRegistry,
    counting: bool,
) -> Result<Constraint, ConstraintFileError> {
    let mut record = RecordReader::new(scanner);
    let anchor = record.point()?;
    let tolerance = record.float("tolerance")?;
    record.feature()?;
    registry
        .create(anchor, tolerance, &record.feature, counting)
        .map_err(|e| record.invalid(e))
}

fn read_exponential_record(
    scanner: &mut Scanner,
    registry: &mut ConstraintRegistry,
    counting: bool,
) -> Result<Constraint, ConstraintFileError> {
    let mut record = RecordReader::new(scanner);
    let anchor = record.point()?;
    let tolerance = record.float("tolerance")?;
    let a = record.float("a")?;
    let b = record.float("b")?;
    record.feature()?;
    registry
        .create_exponential(anchor, tolerance, a, b, &record.feature, counting)
        .map_err(|e| record.invalid(e))
}

fn read_moe_record(
    scanner: &mut Scanner,
    registry: &mut ConstraintRegistry,
    counting: bool,
) -> Result<Constraint, ConstraintFileError> {
    let mut record = RecordReader::new(scanner);
    record.feature()?;
    record.skip("color")?;
    let anchor = record.point()?;
    let tolerance = record.float("radius")?;
    record.skip("ebits")?;
    record.skip("gbits")?;
    registry
        .create(anchor, tolerance, &record.feature, counting)
        .map_err(|e| record.invalid(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constraints::feature::Feature;
    use std::io::Cursor;
    use tempfile::tempdir;

    const MOE_FILE: &str = "\
#moe:ph4que 2008.10
#pharmacophore 5 tag t value *
scheme t PCHD title t 'site 1' comment t ''
annotation t 'extra metadata line'
#feature 3 expr tt color ix x r y r z r r r ebits ix gbits ix
Acc df2f2 2.43 -1.12 0.83 1.0 0 0
Aro 3fc4f4 -0.5 4.25 1.75 1.2 0 0
Hyd 33ff33 1 2 3 1.5 0 0
#volumesphere 90 x r y r z r r r
0.0 0.0 0.0 1.0
#endpharmacophore
";

    fn read(input: &str) -> Result<(Vec<Constraint>, ConstraintFormat), ConstraintFileError> {
        let mut registry = ConstraintRegistry::new();
        ConstraintFile::read_from(&mut Cursor::new(input), &mut registry, true)
    }

    #[test]
    fn format_is_sniffed_from_leading_character() {
        assert_eq!(ConstraintFormat::from_leading_char(Some('#')), ConstraintFormat::Moe);
        assert_eq!(
            ConstraintFormat::from_leading_char(Some('!')),
            ConstraintFormat::Exponential
        );
        assert_eq!(ConstraintFormat::from_leading_char(Some('1')), ConstraintFormat::Standard);
        assert_eq!(ConstraintFormat::from_leading_char(None), ConstraintFormat::Standard);
    }

    #[test]
    fn sniff_format_does_not_consume_input() {
        let mut cursor = Cursor::new("!\n1 2 3 1 0.5 2 Acc\n");
        assert_eq!(
            ConstraintFile::sniff_format(&mut cursor).unwrap(),
            ConstraintFormat::Exponential
        );
        let (constraints, format) =
            ConstraintFile::read_from(&mut cursor, &mut ConstraintRegistry::new(), true).unwrap();
        assert_eq!(format, ConstraintFormat::Exponential);
        assert_eq!(constraints.len(), 1);
    }

    #[test]
    fn reads_single_standard_record() {
        let (constraints, format) = read("1.0 2.0 3.0 1.5 Don").unwrap();
        assert_eq!(format, ConstraintFormat::Standard);
        assert_eq!(constraints.len(), 1);
        let c = &constraints[0];
        assert_eq!(c.anchor(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(c.tolerance(), 1.5);
        assert_eq!(c.feature(), Feature::HBondDonor);
        assert!(!c.is_exponential());
    }

    #[test]
    fn reads_exponential_record_after_marker_line() {
        let (constraints, format) = read("!\n1.0 2.0 3.0 1.5 0.5 2.0 Acc\n").unwrap();
        assert_eq!(format, ConstraintFormat::Exponential);
        assert_eq!(constraints.len(), 1);
        let c = &constraints[0];
        assert!(c.is_exponential());
        assert_eq!(c.anchor(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(c.tolerance(), 1.5);
        assert_eq!(c.a(), 0.5);
        assert_eq!(c.b(), 2.0);
        assert_eq!(c.feature(), Feature::HBondAcceptor);
    }

    #[test]
    fn reads_multiple_records_in_order_across_blank_lines() {
        let input = "0 0 0 1.0 Any\n\n  4.5 -1 2e0 0.5 Aro\r\n\t7 8 9 2 Cat   \n\n";
        let mut registry = ConstraintRegistry::new();
        let (constraints, _) =
            ConstraintFile::read_from(&mut Cursor::new(input), &mut registry, true).unwrap();
        let features: Vec<Feature> = constraints.iter().map(Constraint::feature).collect();
        assert_eq!(
            features,
            vec![Feature::AnyHeavy, Feature::AromaticRing, Feature::Cationic]
        );
        assert_eq!(constraints[1].anchor(), Point3::new(4.5, -1.0, 2.0));
        assert_eq!(registry.tally().total(), 3);
    }

    #[test]
    fn counting_flag_is_forwarded_to_registry() {
        let mut registry = ConstraintRegistry::new();
        ConstraintFile::read_from(&mut Cursor::new("0 0 0 1 Any\n1 1 1 1 Any\n"), &mut registry, false)
            .unwrap();
        assert_eq!(registry.count(Feature::AnyHeavy), 0);

        ConstraintFile::read_from(&mut Cursor::new("0 0 0 1 Any\n1 1 1 1 Any\n"), &mut registry, true)
            .unwrap();
        assert_eq!(registry.count(Feature::AnyHeavy), 2);
    }

    #[test]
    fn reads_moe_feature_block() {
        let (constraints, format) = read(MOE_FILE).unwrap();
        assert_eq!(format, ConstraintFormat::Moe);
        assert_eq!(constraints.len(), 3);

        assert_eq!(constraints[0].feature(), Feature::HBondAcceptor);
        assert_eq!(constraints[0].anchor(), Point3::new(2.43, -1.12, 0.83));
        assert_eq!(constraints[0].tolerance(), 1.0);
        assert_eq!(constraints[1].feature(), Feature::AromaticRing);
        assert_eq!(constraints[2].feature(), Feature::Lipophilic);
        assert_eq!(constraints[2].tolerance(), 1.5);
        assert!(constraints.iter().all(|c| !c.is_exponential()));
    }

    #[test]
    fn moe_file_without_terminator_is_rejected() {
        let truncated = MOE_FILE.split("#volumesphere").next().unwrap();
        let err = read(truncated).unwrap_err();
        assert!(matches!(err, ConstraintFileError::UnexpectedEof("MOE feature block")));

        let err = read("#moe\n#pharmacophore\nscheme\nno terminator here\n").unwrap_err();
        assert!(matches!(err, ConstraintFileError::UnexpectedEof("MOE preamble")));
    }

    #[test]
    fn empty_inputs_yield_empty_lists() {
        assert!(read("").unwrap().0.is_empty());
        assert!(read("  \n\n").unwrap().0.is_empty());
        assert!(read("!\n").unwrap().0.is_empty());
    }

    #[test]
    fn unknown_feature_code_aborts_read() {
        let mut registry = ConstraintRegistry::new();
        let err = ConstraintFile::read_from(
            &mut Cursor::new("0 0 0 1 Any\n1 2 3 1.5 Xyz\n"),
            &mut registry,
            true,
        )
        .unwrap_err();
        match err {
            ConstraintFileError::Constraint { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, ConstraintError::UnrecognizedFeature("Xyz".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(registry.count(Feature::AnyHeavy), 1);
    }

    #[test]
    fn truncated_record_is_malformed() {
        let err = read("1.0 2.0 3.0").unwrap_err();
        match err {
            ConstraintFileError::Malformed { line, feature, kind } => {
                assert_eq!(line, 1);
                assert_eq!(feature, "");
                assert_eq!(kind, ConstraintParseErrorKind::MissingField { field: "tolerance" });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_moe_record_names_partial_feature() {
        let input = MOE_FILE.replace("Hyd 33ff33 1 2 3", "Hyd 33ff33 1 two 3");
        let err = read(&input).unwrap_err();
        match err {
            ConstraintFileError::Malformed { line, feature, kind } => {
                assert_eq!(line, 8);
                assert_eq!(feature, "Hyd");
                assert_eq!(
                    kind,
                    ConstraintParseErrorKind::InvalidFloat {
                        field: "y",
                        value: "two".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn assert_invalid_float(input: &str, expected_field: &'static str, expected_value: &str) {
        match read(input).unwrap_err() {
            ConstraintFileError::Malformed { kind, .. } => assert_eq!(
                kind,
                ConstraintParseErrorKind::InvalidFloat {
                    field: expected_field,
                    value: expected_value.to_string()
                }
            ),
            other => panic!("unexpected error for {input:?}: {other:?}"),
        }
    }

    #[test]
    fn non_finite_numbers_are_rejected_in_standard_records() {
        assert_invalid_float("nan 0 0 1 Any\n", "x", "nan");
        assert_invalid_float("0 inf 0 1 Any\n", "y", "inf");
        assert_invalid_float("0 0 -infinity 1 Any\n", "z", "-infinity");
        assert_invalid_float("0 0 0 NaN Any\n", "tolerance", "NaN");
        assert_invalid_float("0 0 0 Infinity Any\n", "tolerance", "Infinity");
    }

    #[test]
    fn non_finite_numbers_are_rejected_in_exponential_records() {
        assert_invalid_float("!\nnan 0 0 1 0.5 2 Acc\n", "x", "nan");
        assert_invalid_float("!\n0 0 0 inf 0.5 2 Acc\n", "tolerance", "inf");
        assert_invalid_float("!\n0 0 0 1 NaN 2 Acc\n", "a", "NaN");
        assert_invalid_float("!\n0 0 0 1 0.5 infinity Acc\n", "b", "infinity");
    }

    #[test]
    fn non_finite_numbers_are_rejected_in_moe_records() {
        let input = MOE_FILE.replace("Hyd 33ff33 1 2 3 1.5", "Hyd 33ff33 1 2 3 inf");
        assert_invalid_float(&input, "radius", "inf");
        let input = MOE_FILE.replace("Hyd 33ff33 1 2 3", "Hyd 33ff33 nan 2 3");
        assert_invalid_float(&input, "x", "nan");
    }

    #[test]
    fn malformed_error_message_mentions_feature_and_line() {
        let err = read("!\n1 2 3 1 0.5 x Acc\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Problems reading constraint '' on line 2: Invalid number for field 'b' (value: 'x')"
        );
    }

    #[test]
    fn write_then_read_preserves_standard_constraints() {
        let mut registry = ConstraintRegistry::new();
        let originals = vec![
            registry.create(Point3::new(1.25, -2.0, 3.5), 1.5, "Don", true).unwrap(),
            registry.create(Point3::new(0.1, 0.2, 0.3), 0.75, "Har", true).unwrap(),
        ];
        let mut buffer = Vec::new();
        let format = ConstraintFile::write_to(&originals, &mut buffer).unwrap();
        assert_eq!(format, ConstraintFormat::Standard);
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "1.25 -2 3.5 1.5 Don\n0.1 0.2 0.3 0.75 Har\n"
        );

        let (read_back, _) =
            ConstraintFile::read_from(&mut Cursor::new(buffer), &mut ConstraintRegistry::new(), true)
                .unwrap();
        assert_eq!(read_back, originals);
    }

    #[test]
    fn write_uses_exponential_format_when_needed() {
        let mut registry = ConstraintRegistry::new();
        let constraints = vec![
            registry
                .create_exponential(Point3::new(1.0, 2.0, 3.0), 1.5, 0.5, 2.0, "Acc", true)
                .unwrap(),
        ];
        let mut buffer = Vec::new();
        assert_eq!(
            ConstraintFile::write_to(&constraints, &mut buffer).unwrap(),
            ConstraintFormat::Exponential
        );
        let (read_back, format) =
            ConstraintFile::read_from(&mut Cursor::new(buffer), &mut ConstraintRegistry::new(), true)
                .unwrap();
        assert_eq!(format, ConstraintFormat::Exponential);
        assert_eq!(read_back, constraints);
    }

    #[test]
    fn path_helpers_round_trip_through_filesystem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.const");
        let mut registry = ConstraintRegistry::new();
        let constraints = vec![registry.create(Point3::origin(), 2.0, "Ani", true).unwrap()];

        ConstraintFile::write_to_path(&constraints, &path).unwrap();
        let (read_back, _) =
            ConstraintFile::read_from_path(&path, &mut ConstraintRegistry::new(), true).unwrap();
        assert_eq!(read_back, constraints);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = ConstraintFile::read_from_path(
            dir.path().join("missing.const"),
            &mut ConstraintRegistry::new(),
            true,
        );
        assert!(matches!(result, Err(ConstraintFileError::Io(_))));
    }
}
