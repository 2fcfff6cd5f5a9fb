use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};
use paste::paste;
use sf_structure::DotBracketVec;
use sf_energy::NucleotideVec;

// ============================================================
//  FASTA-like parser with an optional or required structure
// ============================================================

#[derive(Clone, Copy)]
enum FastaMode {
    SequenceOnly,
    WithStructure,
}

/// Core parsing logic shared by all adapters.
///
/// Only the first record is read. The first token of the first
/// non-header line is the sequence, the first token of the next line
/// (if requested) is the structure.
fn parse_fasta_like<R: BufRead>(
    reader: R,
    mode: FastaMode,
) -> Result<(Option<String>, NucleotideVec, Option<DotBracketVec>)> {
    let mut header: Option<String> = None;
    let mut sequence: Option<NucleotideVec> = None;
    let mut structure: Option<DotBracketVec> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        let Some(token) = line.split_whitespace().next() else {
            if sequence.is_some() {
                break;
            }
            continue;
        };

        if line.starts_with('>') {
            if sequence.is_some() {
                break; // next record
            }
            header = Some(line.to_string());
        } else if sequence.is_none() {
            sequence = Some(NucleotideVec::try_from(token)?);
            if matches!(mode, FastaMode::SequenceOnly) {
                break;
            }
        } else {
            structure = Some(DotBracketVec::try_from(token)?);
            break;
        }
    }

    let sequence = sequence.ok_or_else(|| anyhow!("Missing sequence line"))?;

    if let Some(s) = &structure {
        if sequence.len() != s.len() {
            return Err(anyhow!(
                "Sequence length ({}) and structure length ({}) do not match",
                sequence.len(),
                s.len()
            ));
        }
    }

    Ok((header, sequence, structure))
}

// ============================================================
//  Base parser functions
// ============================================================

pub fn read_fasta_like<R: BufRead>(reader: R) -> Result<(Option<String>, NucleotideVec)> {
    let (header, sequence, _) = parse_fasta_like(reader, FastaMode::SequenceOnly)?;
    Ok((header, sequence))
}

pub fn read_eval<R: BufRead>(reader: R) -> Result<(Option<String>, NucleotideVec, DotBracketVec)> {
    let (header, sequence, structure) = parse_fasta_like(reader, FastaMode::WithStructure)?;
    let structure = structure.ok_or_else(|| anyhow!("Missing structure line"))?;
    Ok((header, sequence, structure))
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type SequenceResult = Result<(Option<String>, NucleotideVec)>;
type EvalResult = Result<(Option<String>, NucleotideVec, DotBracketVec)>;

define_input_variants!(read_fasta_like, SequenceResult);
define_input_variants!(read_eval, EvalResult);

// ============================================================
//  ruler()
// ============================================================

pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut c = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = format!("{}", i / 10);
            c = t.len() - 1;
            s.push_str(&t);
            continue;
        } else if c > 0 {
            c -= 1;
            continue;
        }
        if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}
