//! I/O helpers for finished traces.
//!
//! Supports JSON/CBOR and extension-based auto-detection. These routines
//! carry no algorithm semantics; they only move a `Trace<P>` across the
//! filesystem boundary. Generators themselves never perform I/O.

use crate::step::Trace;
use anyhow::{anyhow, Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/* ---------------- JSON ---------------- */

/// Read a trace from **JSON**.
pub fn read_trace_json<P, Q>(path: Q) -> Result<Trace<P>>
where
    P: DeserializeOwned,
    Q: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let rdr = BufReader::new(f);
    let v: Trace<P> = serde_json::from_reader(rdr).context("deserialize JSON trace")?;
    Ok(v)
}

/// Write a trace to **JSON** (pretty).
pub fn write_trace_json<P, Q>(path: Q, trace: &Trace<P>) -> Result<()>
where
    P: Serialize,
    Q: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, trace).context("serialize JSON trace")?;
    w.flush().context("flush JSON writer")?;
    Ok(())
}

/* ---------------- CBOR ---------------- */

/// Read a trace from **CBOR**.
pub fn read_trace_cbor<P, Q>(path: Q) -> Result<Trace<P>>
where
    P: DeserializeOwned,
    Q: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let mut rdr = BufReader::new(f);
    let v: Trace<P> = ciborium::de::from_reader(&mut rdr).context("deserialize CBOR trace")?;
    Ok(v)
}

/// Write a trace to **CBOR**.
pub fn write_trace_cbor<P, Q>(path: Q, trace: &Trace<P>) -> Result<()>
where
    P: Serialize,
    Q: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    ciborium::ser::into_writer(trace, &mut w).context("serialize CBOR trace")?;
    w.flush().context("flush CBOR writer")?;
    Ok(())
}

/* --------------- Auto-detect by extension --------------- */

/// Auto-detect **read** by extension (`.json` / `.cbor`, case-insensitive).
pub fn read_trace_auto<P, Q>(path: Q) -> Result<Trace<P>>
where
    P: DeserializeOwned,
    Q: AsRef<Path>,
{
    match ext_lower(path.as_ref()).as_deref() {
        Some("json") => read_trace_json(path),
        Some("cbor") => read_trace_cbor(path),
        Some(other) => Err(anyhow!(
            "unsupported trace extension: {other} (supported: .json, .cbor)"
        )),
        None => Err(anyhow!("path has no extension (expected .json or .cbor)")),
    }
}

/// Auto-detect **write** (defaults to JSON if unknown/missing).
pub fn write_trace_auto<P, Q>(path: Q, trace: &Trace<P>) -> Result<()>
where
    P: Serialize,
    Q: AsRef<Path>,
{
    match ext_lower(path.as_ref()).as_deref() {
        Some("cbor") => write_trace_cbor(path, trace),
        _ => write_trace_json(path, trace),
    }
}

/* ---------------- Small helpers ---------------- */

#[inline]
fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
}

#[inline]
fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{annotate, Element};
    use crate::step::{Step, StepMeta};

    fn tiny_trace() -> Trace<Vec<Element>> {
        vec![
            Step::new(annotate(&[2, 1]), StepMeta::describe("Initial array")),
            Step::new(annotate(&[1, 2]), StepMeta::describe("Done").with_indices(vec![0, 1])),
        ]
    }

    #[test]
    fn json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let trace = tiny_trace();
        write_trace_auto(&path, &trace).unwrap();
        let back: Trace<Vec<Element>> = read_trace_auto(&path).unwrap();
        assert_eq!(back, trace);
    }

    #[test]
    fn cbor_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.cbor");
        let trace = tiny_trace();
        write_trace_auto(&path, &trace).unwrap();
        let back: Trace<Vec<Element>> = read_trace_auto(&path).unwrap();
        assert_eq!(back, trace);
    }

    #[test]
    fn unknown_read_extension_is_an_error() {
        let err = read_trace_auto::<Vec<Element>, _>("trace.xml").unwrap_err();
        assert!(err.to_string().contains("unsupported trace extension"));
    }
}
