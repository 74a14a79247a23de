// Tests for the log lines emitted by the visibility callback.

use std::io;
use std::sync::{Arc, Mutex};

use element_visibility::visibility::{dispatch, log_change};
use element_visibility::IntersectionEntry;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).lines().map(|line| line.trim().to_owned()).collect()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn logged(flags: &[bool]) -> Vec<String> {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish();

    let entries: Vec<_> =
        flags.iter().map(|&flag| IntersectionEntry::new("div#my-element", flag)).collect();
    tracing::subscriber::with_default(subscriber, || dispatch(entries, log_change));

    capture.lines()
}

#[test]
fn visible_line() {
    assert_eq!(logged(&[true]), ["Element is visible: div#my-element"]);
}

#[test]
fn hidden_line() {
    assert_eq!(logged(&[false]), ["Element is not visible: div#my-element"]);
}

#[test]
fn one_line_per_entry_in_order() {
    assert_eq!(logged(&[true, false, true]), [
        "Element is visible: div#my-element",
        "Element is not visible: div#my-element",
        "Element is visible: div#my-element",
    ]);
}

#[test]
fn repeated_input_logs_the_same() {
    assert_eq!(logged(&[false]), logged(&[false]));
}
